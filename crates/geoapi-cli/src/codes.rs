//! # Codes Subcommand
//!
//! Lists the predefined code-list families, or the values of one family in
//! ordinal order. `--check` runs the registry conformance checks on every
//! family first.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use geoapi_conformance::CodeListValidator;
use geoapi_core::{catalog, find_family, CodeList};

/// Arguments for the `geoapi codes` subcommand.
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Family to list, by simple or qualified name (e.g. `AxisDirection`).
    #[arg(value_name = "FAMILY")]
    pub family: Option<String>,

    /// Check registry conformance of every family before listing.
    #[arg(long)]
    pub check: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One code of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    /// Position in the family.
    pub ordinal: usize,
    /// Code name.
    pub name: String,
    /// UML identifier derived from the name.
    pub identifier: String,
}

/// One family of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyEntry {
    /// Fully-qualified family name.
    pub qualified_name: String,
    /// Number of registered codes.
    pub size: usize,
}

/// Values of `list` in ordinal order.
pub fn code_entries(list: &CodeList) -> Vec<CodeEntry> {
    list.values()
        .into_iter()
        .map(|value| CodeEntry {
            ordinal: value.ordinal(),
            name: value.name().to_string(),
            identifier: value.identifier().to_string(),
        })
        .collect()
}

/// Every predefined family, sorted by qualified name.
pub fn family_entries() -> Vec<FamilyEntry> {
    catalog()
        .into_iter()
        .map(|entry| FamilyEntry {
            qualified_name: entry.qualified_name.to_string(),
            size: entry.code_list.len(),
        })
        .collect()
}

/// Execute the codes subcommand.
///
/// Returns exit code: 0 on success, 1 for an unknown family, 2 when a
/// registry fails the conformance check.
pub fn run_codes(args: &CodesArgs) -> Result<u8> {
    if args.check {
        if let Err(e) = CodeListValidator.validate_catalog() {
            println!("FAIL: {e}");
            return Ok(2);
        }
        tracing::info!("all code-list registries conform");
    }

    let Some(name) = &args.family else {
        let families = family_entries();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&families)?);
        } else {
            for family in &families {
                println!("{}  ({} values)", family.qualified_name, family.size);
            }
        }
        return Ok(0);
    };

    let Some(entry) = find_family(name) else {
        println!("Unknown code list family: {name}");
        return Ok(1);
    };
    let codes = code_entries(entry.code_list);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        println!("{}", entry.qualified_name);
        for code in &codes {
            println!("  {:>3}  {:<24} {}", code.ordinal, code.name, code.identifier);
        }
    }
    Ok(0)
}
