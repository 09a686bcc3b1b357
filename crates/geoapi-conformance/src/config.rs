//! # Harness Configuration
//!
//! Scanner and validator settings. The scan root is injected here rather
//! than derived from the location of compiled code, so the same harness
//! runs against any build output directory.
//!
//! Both structures deserialize from YAML. A minimal scan file:
//!
//! ```yaml
//! root: target/classes
//! package_prefix: org.opengis.referencing
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Base names of package and module metadata units, never treated as types.
pub const METADATA_UNITS: &[&str] = &["package-info", "module-info"];

fn default_package_prefix() -> String {
    "org.opengis".to_string()
}

fn default_extension() -> String {
    "class".to_string()
}

fn default_excluded_packages() -> Vec<String> {
    vec!["internal".to_string(), "legacy".to_string()]
}

fn default_excluded_name_prefixes() -> Vec<String> {
    vec!["Deprecated".to_string()]
}

fn default_true() -> bool {
    true
}

/// Settings of the type catalog scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory whose children are the first package segments.
    pub root: PathBuf,
    /// Dotted package prefix; only types inside it are reported.
    #[serde(default = "default_package_prefix")]
    pub package_prefix: String,
    /// Extension of compiled-unit files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Package directory names never descended into.
    #[serde(default = "default_excluded_packages")]
    pub excluded_packages: Vec<String>,
    /// File base-name prefixes marking deprecated types.
    #[serde(default = "default_excluded_name_prefixes")]
    pub excluded_name_prefixes: Vec<String>,
}

impl ScanConfig {
    /// Scan `root` for types under `package_prefix` with default filters.
    pub fn new(root: impl Into<PathBuf>, package_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            package_prefix: package_prefix.into(),
            extension: default_extension(),
            excluded_packages: default_excluded_packages(),
            excluded_name_prefixes: default_excluded_name_prefixes(),
        }
    }

    /// Load a scan configuration from a YAML file.
    ///
    /// A relative `root` is resolved against the directory of the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid scan configuration.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = load_yaml(path)?;
        if let Some(dir) = path.parent() {
            config.resolve_root(dir);
        }
        Ok(config)
    }

    /// Make a relative `root` relative to `base` instead of the working
    /// directory.
    pub fn resolve_root(&mut self, base: &Path) {
        if self.root.is_relative() {
            self.root = base.join(&self.root);
        }
    }

    /// Package prefix split into its segments.
    pub fn prefix_segments(&self) -> Vec<&str> {
        self.package_prefix
            .split('.')
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether the scanner should enter the package directory whose path
    /// relative to the root is `package`.
    ///
    /// A directory is entered when it lies on the way to the prefix or inside
    /// it, and its own name is not excluded.
    pub fn should_descend(&self, package: &[String]) -> bool {
        if let Some(last) = package.last() {
            if self.excluded_packages.iter().any(|p| p == last) {
                return false;
            }
        }
        let prefix = self.prefix_segments();
        let common = package.len().min(prefix.len());
        package[..common]
            .iter()
            .zip(&prefix[..common])
            .all(|(a, b)| a == b)
    }

    /// Whether `package` is the prefix package or one of its sub-packages.
    pub fn is_inside_prefix(&self, package: &[String]) -> bool {
        let prefix = self.prefix_segments();
        package.len() >= prefix.len() && package.iter().zip(&prefix).all(|(a, b)| a == b)
    }

    /// Whether a compiled unit with this base name is a reportable type.
    pub fn accepts_unit(&self, base_name: &str) -> bool {
        !base_name.is_empty()
            && !METADATA_UNITS.contains(&base_name)
            && !base_name.contains('$')
            && !self
                .excluded_name_prefixes
                .iter()
                .any(|p| base_name.starts_with(p.as_str()))
    }
}

/// Read and deserialize a YAML configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its content does not match `T`.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Settings of the validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// When `false`, a missing mandatory attribute is logged as a warning
    /// instead of failing validation.
    #[serde(default = "default_true")]
    pub require_mandatory_attributes: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_mandatory_attributes: true,
        }
    }
}

impl ValidationConfig {
    /// Configuration tolerating missing mandatory attributes.
    pub fn lenient() -> Self {
        Self {
            require_mandatory_attributes: false,
        }
    }
}
