//! Check command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration and input validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Packages in the universe.
    pub packages: usize,
    pub targets: usize,
    pub informers: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.infos.is_empty() || !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.key_value("packages", &self.packages.to_string());
            out.key_value("targets", &self.targets.to_string());
            out.key_value("informers", &self.informers.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(errors: Vec<String>, infos: Vec<String>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("informer-gen.toml"),
            packages: 3,
            targets: 4,
            informers: 1,
            errors,
            warnings: Vec::new(),
            infos,
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = BufferOutput::default();
        report(
            Vec::new(),
            vec!["package skipped: no types request a client\n  --> example.com/api/apps/v1/types".into()],
        )
        .render(&mut out);

        assert!(out.stderr.is_empty());
        assert_eq!(
            out.stdout,
            vec![
                "info: package skipped: no types request a client\n  --> example.com/api/apps/v1/types",
                "",
                "✓ informer-gen.toml is valid",
                "  packages: 3",
                "  targets: 4",
                "  informers: 1",
            ]
        );
    }

    #[test]
    fn test_errors_go_to_stderr() {
        let mut out = BufferOutput::default();
        let report = report(vec!["broken".into()], Vec::new());
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.stderr, vec!["error: broken"]);
        assert_eq!(out.stdout, vec![""]);
    }
}
