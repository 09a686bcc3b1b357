//! # Scan Subcommand
//!
//! Lists the public types found under a package prefix in a compiled-unit
//! tree. By default only code-list families known to the catalog are
//! reported; `--all-types` reports every qualifying type and marks the code
//! lists among them.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use geoapi_conformance::{discover_with_report, CodeListCatalog, ScanConfig, ScanReport, TypeResolver};

use crate::CliConfig;

/// Arguments for the `geoapi scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory holding the compiled units, one directory per package segment.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dotted package prefix to report.
    #[arg(long = "package", value_name = "PREFIX")]
    pub package_prefix: Option<String>,

    /// Extension of compiled-unit files.
    #[arg(long)]
    pub extension: Option<String>,

    /// Report every qualifying type, not only code lists.
    #[arg(long)]
    pub all_types: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One reported type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// Dotted fully qualified name.
    pub name: String,
    /// Number of registered values when the type is a code list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_list_size: Option<usize>,
}

/// Merge command-line flags over the configuration file.
pub fn scan_config(args: &ScanArgs, config: &CliConfig) -> Result<ScanConfig> {
    let mut scan = match (&args.root, &config.scan) {
        (Some(root), Some(base)) => ScanConfig {
            root: root.clone(),
            ..base.clone()
        },
        (Some(root), None) => ScanConfig::new(root.clone(), "org.opengis"),
        (None, Some(base)) => base.clone(),
        (None, None) => bail!("no scan root: pass --root or set scan.root in the configuration file"),
    };
    if let Some(prefix) = &args.package_prefix {
        scan.package_prefix = prefix.clone();
    }
    if let Some(extension) = &args.extension {
        scan.extension = extension.trim_start_matches('.').to_string();
    }
    Ok(scan)
}

/// Run the scan and collect the reported types in name order.
pub fn collect(args: &ScanArgs, scan: &ScanConfig) -> (Vec<ScanEntry>, ScanReport) {
    let catalog = CodeListCatalog::predefined();
    if args.all_types {
        let resolver = |name: &str| Some(catalog.resolve(name).map(|list| list.len()));
        let (found, report) = discover_with_report(scan, &resolver);
        let entries = found
            .into_iter()
            .map(|t| ScanEntry {
                name: t.qualified_name,
                code_list_size: t.handle,
            })
            .collect();
        (entries, report)
    } else {
        let (found, report) = discover_with_report(scan, &catalog);
        let entries = found
            .into_iter()
            .map(|t| ScanEntry {
                name: t.qualified_name,
                code_list_size: Some(t.handle.len()),
            })
            .collect();
        (entries, report)
    }
}

/// Execute the scan subcommand.
///
/// Returns exit code 0; an unusable configuration is an error.
pub fn run_scan(args: &ScanArgs, config: &CliConfig) -> Result<u8> {
    let scan = scan_config(args, config)?;
    tracing::info!(
        root = %scan.root.display(),
        prefix = %scan.package_prefix,
        "scanning type catalog"
    );
    let (entries, report) = collect(args, &scan);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(0);
    }

    for entry in &entries {
        match entry.code_list_size {
            Some(size) => println!("{}  (code list, {size} values)", entry.name),
            None => println!("{}", entry.name),
        }
    }
    println!(
        "\nTypes: {} found, {} candidate(s), {} unresolved",
        entries.len(),
        report.candidates,
        report.unresolved.len()
    );
    Ok(0)
}
