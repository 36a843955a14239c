//! Universe (descriptor) file loading.

use std::path::Path;

use informer_ir::Universe;

use crate::{Error, Result, SourceContext};

/// Serialization format of a universe file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseFormat {
    Toml,
    Json,
}

impl UniverseFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Load a universe file, choosing the format by extension.
pub fn load_universe(path: impl AsRef<Path>) -> Result<Universe> {
    let path = path.as_ref();
    let format = UniverseFormat::from_path(path).ok_or_else(|| {
        Box::new(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_universe(&content, &path.display().to_string(), format)
}

/// Parse a universe from a string with a filename for error reporting.
pub fn parse_universe(content: &str, filename: &str, format: UniverseFormat) -> Result<Universe> {
    let source_ctx = SourceContext::new(content, filename);
    match format {
        UniverseFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e)),
        UniverseFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))
        }
    }
}
