//! Deterministic type ordering.

use std::sync::Arc;

use informer_ir::TypeDescriptor;

use crate::naming::{NameStrategy, NameSystem, Namer};

/// Orders types by the name a namer gives them.
///
/// The sort is stable, so types with equal names keep their input order.
#[derive(Debug, Clone)]
pub struct Orderer<N = NameSystem> {
    namer: N,
}

impl Orderer {
    /// Order by private (lower-camel) name, the ordering used for every
    /// generated declaration list.
    pub fn private() -> Self {
        Self::new(NameSystem::new(NameStrategy::Private))
    }
}

impl<N: Namer> Orderer<N> {
    pub fn new(namer: N) -> Self {
        Self { namer }
    }

    pub fn order(&self, types: &[Arc<TypeDescriptor>]) -> Vec<Arc<TypeDescriptor>> {
        let mut keyed: Vec<(String, &Arc<TypeDescriptor>)> =
            types.iter().map(|t| (self.namer.name(t), t)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, t)| Arc::clone(t)).collect()
    }
}
