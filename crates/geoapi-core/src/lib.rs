//! # geoapi-core — Foundational Types for GeoAPI
//!
//! This crate is the leaf of the GeoAPI workspace. It defines the
//! extensible enumeration ("code list") machinery, the predefined code-list
//! families, ISO 19103 generic names, and the shared error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Code lists are registries, not enums.** A code-list family may gain
//!    new codes at runtime, so each family owns an append-only
//!    [`CodeList`] of interned [`CodeValue`] singletons with dense ordinals.
//!
//! 2. **Identity-stable codes.** Every code is a `&'static CodeValue`;
//!    `registry.get(code.ordinal())` returns the very same instance.
//!
//! 3. **Validated constructors.** Names, identifiers and code registrations
//!    are checked at construction and rejected with a structured error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `geoapi-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codelist;
pub mod error;
pub mod families;
pub mod name;

#[doc(hidden)]
pub use serde as __serde;

// Re-export primary types for ergonomic imports.
pub use codelist::{CodeList, CodeListFamily, CodeValue};
pub use error::{CodeListError, NameError};
pub use families::{
    catalog, find_family, AxisDirection, CatalogEntry, Obligation, PixelInCell, RangeMeaning,
    VerticalDatumType,
};
pub use name::{GenericName, Identifier, LocalName, ScopedName};
