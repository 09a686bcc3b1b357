//! # geoapi-cli — CLI Tool for GeoAPI Conformance
//!
//! Provides the `geoapi` command-line interface over the conformance
//! harness.
//!
//! ## Subcommands
//!
//! - `geoapi scan` — list the public types of a compiled-unit tree.
//! - `geoapi codes` — list code-list families or the values of one family.
//! - `geoapi validate` — validate a referencing object description.
//!
//! ```bash
//! geoapi scan --root target/classes --package org.opengis.referencing
//! geoapi codes AxisDirection --json
//! geoapi validate wgs84.yaml --lenient
//! ```
//!
//! Every handler returns the process exit code; operational failures are
//! returned as errors and reported by the binary with exit code 1.

pub mod codes;
pub mod scan;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use geoapi_conformance::config::load_yaml;
use geoapi_conformance::{ScanConfig, ValidationConfig};
use serde::Deserialize;

/// Contents of the file passed with `--config`.
///
/// ```yaml
/// scan:
///   root: target/classes
///   package_prefix: org.opengis
/// validation:
///   require_mandatory_attributes: false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Scanner defaults; command-line flags take precedence.
    #[serde(default)]
    pub scan: Option<ScanConfig>,
    /// Validator settings; `--lenient` takes precedence.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl CliConfig {
    /// Load the configuration file, or the defaults when no file is given.
    ///
    /// A relative scan root is resolved against the file's directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let mut config: Self = load_yaml(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?;
        if let (Some(scan), Some(dir)) = (config.scan.as_mut(), path.parent()) {
            scan.resolve_root(dir);
        }
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file() {
        let config = CliConfig::load(None).unwrap();
        assert!(config.scan.is_none());
        assert!(config.validation.require_mandatory_attributes);
    }

    #[test]
    fn test_load_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geoapi.yaml");
        std::fs::write(
            &path,
            "scan:\n  root: classes\nvalidation:\n  require_mandatory_attributes: false\n",
        )
        .unwrap();
        let config = CliConfig::load(Some(&path)).unwrap();
        let scan = config.scan.unwrap();
        assert_eq!(scan.root, dir.path().join("classes"));
        assert_eq!(scan.package_prefix, "org.opengis");
        assert!(!config.validation.require_mandatory_attributes);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/no/such/geoapi.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load configuration"));
    }
}
