//! Snapshot of the rendered plan summary.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use informer_codegen::{plan, target::render_summary};
use informer_ir::{Member, PackageDescriptor, TypeDescriptor, Universe};
use informer_manifest::InformerConfig;

fn resource(name: &str, meta_tags: &str) -> TypeDescriptor {
    TypeDescriptor::new("", name)
        .with_comment("+genclient")
        .with_member(Member::new("ObjectMeta", "meta/v1.ObjectMeta", meta_tags))
}

#[test]
fn test_summary_both_trees() {
    let universe = Universe::new(vec![
        PackageDescriptor::new("example.com/api/apps/v1")
            .with_type(resource("Deployment", r#"json:"metadata,omitempty""#))
            .with_type(resource("DaemonSet", r#"json:"metadata,omitempty""#)),
        PackageDescriptor::new("example.com/internal/apps").with_type(resource("Deployment", "")),
    ]);
    let config = InformerConfig::new(
        "pkg/client/informers",
        "example.com/client/informers",
        "example.com/client/clientset/versioned",
        "example.com/client/listers",
    )
    .with_internal_clientset("example.com/client/clientset/internalversion");

    let targets = plan(universe, config, Vec::<u8>::new()).expect("planning should succeed");

    insta::assert_snapshot!(render_summary(&targets), @r#"
external version-interface example.com/client/informers/externalversions/apps/v1 (v1)
  dir: pkg/client/informers/externalversions/apps/v1
  filter: list-watchable
  interface.go: version interface with 2 type(s)
  daemonset.go: informer for DaemonSet in apps/v1
  deployment.go: informer for Deployment in apps/v1
internal version-interface example.com/client/informers/internalversion/apps/internalversion (internalversion)
  dir: pkg/client/informers/internalversion/apps/internalversion
  filter: list-watchable
  interface.go: version interface with 1 type(s)
  deployment.go: informer for Deployment in apps/internalVersion
external factory-interfaces example.com/client/informers/externalversions/internalinterfaces (internalinterfaces)
  dir: pkg/client/informers/externalversions/internalinterfaces
  factory_interfaces.go: factory interfaces for clientset example.com/client/clientset/versioned
external factory example.com/client/informers/externalversions (externalversions)
  dir: pkg/client/informers/externalversions
  factory.go: shared informer factory for 1 group(s)
  generic.go: generic informer lookup for 2 resource(s)
external group-interface example.com/client/informers/externalversions/apps (apps)
  dir: pkg/client/informers/externalversions/apps
  filter: list-watchable
  interface.go: group interface apps with 1 version(s)
internal factory-interfaces example.com/client/informers/internalversion/internalinterfaces (internalinterfaces)
  dir: pkg/client/informers/internalversion/internalinterfaces
  factory_interfaces.go: factory interfaces for clientset example.com/client/clientset/internalversion
internal factory example.com/client/informers/internalversion (internalversion)
  dir: pkg/client/informers/internalversion
  factory.go: shared informer factory for 1 group(s)
  generic.go: generic informer lookup for 1 resource(s)
internal group-interface example.com/client/informers/internalversion/apps (apps)
  dir: pkg/client/informers/internalversion/apps
  filter: list-watchable
  interface.go: group interface apps with 1 version(s)
8 target(s), 3 informer(s)
"#);
}
