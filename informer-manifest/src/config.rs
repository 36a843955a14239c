//! `informer-gen.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use informer_core::PluralExceptions;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Root configuration for a planning run.
///
/// Constructed through [`InformerConfig::from_str`] or
/// [`InformerConfig::from_file`], both of which validate the result, or in
/// code through [`InformerConfig::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InformerConfig {
    pub output: OutputConfig,
    pub packages: PackagesConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    /// Directory relative paths in the configuration resolve against.
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Where generated informers go.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Output root directory.
    pub dir: PathBuf,
    /// Output package path (import path of the output root).
    pub package: String,
    /// Place internal and external trees directly in the output root
    /// instead of `internalversion/` and `externalversions/`.
    #[serde(default)]
    pub single_directory: bool,
    /// Boilerplate header prepended to every generated file.
    #[serde(default)]
    pub header_file: Option<PathBuf>,
}

/// Packages the generated informers import.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackagesConfig {
    /// Clientset for external (versioned) types.
    pub versioned_clientset: String,
    /// Clientset for internal types. Required only when internal packages
    /// are planned.
    #[serde(default)]
    pub internal_clientset: Option<String>,
    /// Listers package.
    pub listers: String,
}

/// Naming overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(default = "PluralExceptions::defaults")]
    pub plural_exceptions: PluralExceptions,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            plural_exceptions: PluralExceptions::defaults(),
        }
    }
}

impl InformerConfig {
    /// Create a configuration in code with default naming.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        output_package: impl Into<String>,
        versioned_clientset: impl Into<String>,
        listers: impl Into<String>,
    ) -> Self {
        Self {
            output: OutputConfig {
                dir: output_dir.into(),
                package: output_package.into(),
                single_directory: false,
                header_file: None,
            },
            packages: PackagesConfig {
                versioned_clientset: versioned_clientset.into(),
                internal_clientset: None,
                listers: listers.into(),
            },
            naming: NamingConfig::default(),
            base_dir: PathBuf::new(),
        }
    }

    pub fn with_internal_clientset(mut self, package: impl Into<String>) -> Self {
        self.packages.internal_clientset = Some(package.into());
        self
    }

    pub fn with_single_directory(mut self, single_directory: bool) -> Self {
        self.output.single_directory = single_directory;
        self
    }

    pub fn with_plural_exceptions(mut self, exceptions: PluralExceptions) -> Self {
        self.naming.plural_exceptions = exceptions;
        self
    }

    /// Parse a configuration file from the given path.
    ///
    /// Relative paths inside the file resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let mut config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse a configuration from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: InformerConfig =
            toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        config.validate(&source_ctx)?;
        Ok(config)
    }

    fn validate(&self, source_ctx: &SourceContext) -> Result<()> {
        let required = [
            ("dir", self.output.dir.as_os_str().is_empty(), "output.dir"),
            ("package", self.output.package.is_empty(), "output.package"),
            (
                "versioned-clientset",
                self.packages.versioned_clientset.is_empty(),
                "packages.versioned-clientset",
            ),
            ("listers", self.packages.listers.is_empty(), "packages.listers"),
        ];
        for (key, empty, name) in required {
            if empty {
                return Err(source_ctx.validation_error(format!("{} must not be empty", name), key));
            }
        }
        if let Some(internal) = &self.packages.internal_clientset {
            if internal.is_empty() {
                return Err(source_ctx.validation_error(
                    "packages.internal-clientset must not be empty when set",
                    "internal-clientset",
                ));
            }
        }
        Ok(())
    }

    /// Directory relative configuration paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load the boilerplate header bytes, or an empty header when none is
    /// configured.
    pub fn load_header(&self) -> Result<Vec<u8>> {
        let Some(header_file) = &self.output.header_file else {
            return Ok(Vec::new());
        };
        let path = self.base_dir.join(header_file);
        std::fs::read(&path).map_err(|e| Box::new(Error::Io { path, source: e }))
    }
}

impl FromStr for InformerConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "informer-gen.toml")
    }
}
