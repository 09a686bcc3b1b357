//! # Validate Subcommand
//!
//! Reads one referencing object description from YAML or JSON and runs it
//! through the validator dispatcher.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use geoapi_conformance::{ValidationConfig, Validators};
use geoapi_referencing::ReferencingObject;

use crate::CliConfig;

/// Arguments for the `geoapi validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Object description (`.yaml`, `.yml` or `.json`).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Warn instead of failing when a mandatory attribute is missing.
    #[arg(long)]
    pub lenient: bool,
}

/// Parse a referencing object, choosing the format from the extension.
pub fn load_object(path: &Path) -> Result<ReferencingObject> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let object: ReferencingObject = if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML object in {}", path.display()))?
    } else {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON object in {}", path.display()))?
    };
    Ok(object)
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when valid, 2 when a violation is found. Files that
/// cannot be loaded are errors.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let object = load_object(&args.path)?;
    let validation = if args.lenient {
        ValidationConfig::lenient()
    } else {
        config.validation
    };

    match Validators::new(validation).dispatch(Some(&object)) {
        Ok(()) => {
            println!("OK: {} \"{}\"", object.kind_name(), object.name());
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {}: {e}", args.path.display());
            Ok(2)
        }
    }
}
