//! # geoapi-referencing — Referencing Objects for Conformance Checks
//!
//! A closed, data-only model of the ISO 19111 objects that the GeoAPI
//! conformance validators dispatch over: axes, coordinate systems,
//! ellipsoids, prime meridians, datums and coordinate reference systems.
//!
//! ## Design
//!
//! - Every kind taxonomy (`CsKind`, `DatumKind`, `CoordinateReferenceSystem`,
//!   `ReferencingObject`) is an exhaustive enum. Validators `match` on them
//!   instead of testing runtime types.
//! - Constructors never reject input. A model that violates its kind's
//!   contract is representable on purpose, so that the validators can be
//!   exercised against it.
//! - All types round-trip through serde so that descriptions can be read
//!   from YAML or JSON files.
//!
//! ## Crate Policy
//!
//! - Depends only on `geoapi-core` internally.

pub mod crs;
pub mod cs;
pub mod datum;
pub mod object;
pub mod unit;

pub use crs::{CompoundCrs, CoordinateReferenceSystem, SingleCrs};
pub use cs::{CoordinateSystem, CoordinateSystemAxis, CsKind};
pub use datum::{Datum, DatumKind, Ellipsoid, PrimeMeridian};
pub use object::ReferencingObject;
pub use unit::{Unit, UnitKind};

use geoapi_core::Identifier;

/// Identifier for the predefined objects, whose codes are never empty.
pub(crate) fn named(code: &str) -> Identifier {
    Identifier {
        code: code.to_string(),
        code_space: None,
        version: None,
    }
}

pub(crate) fn negative_infinity() -> f64 {
    f64::NEG_INFINITY
}

pub(crate) fn positive_infinity() -> f64 {
    f64::INFINITY
}

/// A minimum of `-∞` is the default and is left out of serialized forms.
pub(crate) fn is_unbounded_below(value: &f64) -> bool {
    *value == f64::NEG_INFINITY
}

/// A maximum of `+∞` is the default and is left out of serialized forms.
pub(crate) fn is_unbounded_above(value: &f64) -> bool {
    *value == f64::INFINITY
}
