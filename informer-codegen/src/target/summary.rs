use super::Target;

/// Render a stable, human-readable listing of planned targets.
///
/// Each target is a header line followed by its directory, its filter if
/// any, and one line per generated file. A closing line counts targets and
/// informers.
pub fn render_summary(targets: &[Target]) -> String {
    let mut output = String::new();
    let mut informers = 0;

    for target in targets {
        output.push_str(&format!(
            "{} {} {} ({})\n",
            target.tree, target.kind, target.package_path, target.package_name
        ));
        output.push_str(&format!("  dir: {}\n", target.dir.display()));
        if let Some(filter) = &target.filter {
            output.push_str("  filter: ");
            output.push_str(filter.as_str());
            output.push('\n');
        }
        for generator in &target.generators {
            output.push_str(&format!(
                "  {}: {}\n",
                generator.output_filename(),
                generator.describe()
            ));
        }
        informers += target.informers().count();
    }

    output.push_str(&format!(
        "{} target(s), {} informer(s)",
        targets.len(),
        informers
    ));
    output
}
