//! # geoapi-conformance — Conformance Harness
//!
//! Tooling that checks a GeoAPI build and the objects it produces.
//!
//! - [`scanner`] walks a compiled-unit tree and reports every public type
//!   under a package prefix, resolving each name through a pluggable
//!   [`TypeResolver`].
//! - [`validators`] dispatches a [`ReferencingObject`] to the checks for its
//!   kind and reports the first violated rule.
//! - [`codelist`] checks that code-list registries keep dense ordinals,
//!   identity-stable lookup and unique names.
//!
//! ## Error Model
//!
//! Scanning never fails: problems are logged through `tracing` and the
//! affected entry is skipped. Validation fails fast with a single
//! [`ValidationError`]. Configuration loading returns [`ConfigError`].
//!
//! [`ReferencingObject`]: geoapi_referencing::ReferencingObject

pub mod codelist;
pub mod config;
pub mod error;
pub mod scanner;
pub mod validators;

pub use codelist::CodeListValidator;
pub use config::{ScanConfig, ValidationConfig};
pub use error::{ConfigError, ValidationError};
pub use scanner::{
    discover, discover_with_report, locate_root, CodeListCatalog, DiscoveredType, ScanReport,
    TypeResolver,
};
pub use validators::Validators;
