//! # geoapi CLI entry point
//!
//! Parses command-line arguments, sets up logging and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use geoapi_cli::codes::{run_codes, CodesArgs};
use geoapi_cli::scan::{run_scan, ScanArgs};
use geoapi_cli::validate::{run_validate, ValidateArgs};
use geoapi_cli::CliConfig;

/// GeoAPI conformance toolkit.
///
/// Scans compiled type catalogs, lists code-list registries and validates
/// referencing object descriptions.
#[derive(Parser, Debug)]
#[command(name = "geoapi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit log records as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the public types of a compiled-unit tree.
    Scan(ScanArgs),

    /// List code-list families or the values of one family.
    Codes(CodesArgs),

    /// Validate a referencing object description.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let logger = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logger.json().init();
    } else {
        logger.init();
    }

    tracing::debug!("geoapi CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Scan(args) => run_scan(args, &config),
        Commands::Codes(args) => run_codes(args),
        Commands::Validate(args) => run_validate(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_scan() {
        let cli = Cli::try_parse_from([
            "geoapi",
            "scan",
            "--root",
            "target/classes",
            "--package",
            "org.opengis.util",
            "--json",
        ])
        .unwrap();
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.root, Some(PathBuf::from("target/classes")));
            assert_eq!(args.package_prefix.as_deref(), Some("org.opengis.util"));
            assert!(args.json);
            assert!(!args.all_types);
            assert!(args.extension.is_none());
        } else {
            panic!("expected scan");
        }
    }

    #[test]
    fn cli_parse_codes_family() {
        let cli = Cli::try_parse_from(["geoapi", "codes", "AxisDirection"]).unwrap();
        if let Commands::Codes(args) = cli.command {
            assert_eq!(args.family.as_deref(), Some("AxisDirection"));
            assert!(!args.check);
        } else {
            panic!("expected codes");
        }
    }

    #[test]
    fn cli_parse_codes_without_family() {
        let cli = Cli::try_parse_from(["geoapi", "codes", "--check"]).unwrap();
        if let Commands::Codes(args) = cli.command {
            assert!(args.family.is_none());
            assert!(args.check);
        }
    }

    #[test]
    fn cli_parse_validate_lenient() {
        let cli = Cli::try_parse_from(["geoapi", "validate", "crs.yaml", "--lenient"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("crs.yaml"));
            assert!(args.lenient);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from(["geoapi", "-vv", "codes", "--config", "geoapi.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("geoapi.yaml")));
        assert!(!cli.log_json);
    }

    #[test]
    fn cli_parse_validate_requires_path() {
        assert!(Cli::try_parse_from(["geoapi", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_unknown_subcommand() {
        assert!(Cli::try_parse_from(["geoapi", "lock"]).is_err());
    }
}
