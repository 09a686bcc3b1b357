//! # Referencing Objects
//!
//! [`ReferencingObject`] is the common supertype of everything the
//! conformance validators accept. It is a closed enum: the ISO 19111
//! taxonomy is fixed, so adding a kind means adding a variant and letting
//! the compiler point at every `match` that must handle it.

use geoapi_core::Identifier;
use serde::{Deserialize, Serialize};

use crate::crs::CoordinateReferenceSystem;
use crate::cs::{CoordinateSystem, CoordinateSystemAxis};
use crate::datum::{Datum, Ellipsoid, PrimeMeridian};

/// Any identified referencing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum ReferencingObject {
    Axis(CoordinateSystemAxis),
    CoordinateSystem(CoordinateSystem),
    Ellipsoid(Ellipsoid),
    PrimeMeridian(PrimeMeridian),
    Datum(Datum),
    Crs(CoordinateReferenceSystem),
}

impl ReferencingObject {
    /// Name of the wrapped object.
    pub fn name(&self) -> &Identifier {
        match self {
            Self::Axis(axis) => &axis.name,
            Self::CoordinateSystem(cs) => &cs.name,
            Self::Ellipsoid(ellipsoid) => &ellipsoid.name,
            Self::PrimeMeridian(pm) => &pm.name,
            Self::Datum(datum) => &datum.name,
            Self::Crs(crs) => crs.name(),
        }
    }

    /// Interface name of the wrapped object.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Axis(_) => "CoordinateSystemAxis",
            Self::CoordinateSystem(cs) => cs.kind.as_str(),
            Self::Ellipsoid(_) => "Ellipsoid",
            Self::PrimeMeridian(_) => "PrimeMeridian",
            Self::Datum(datum) => datum.kind.as_str(),
            Self::Crs(crs) => crs.as_str(),
        }
    }
}

impl From<CoordinateSystemAxis> for ReferencingObject {
    fn from(value: CoordinateSystemAxis) -> Self {
        Self::Axis(value)
    }
}

impl From<CoordinateSystem> for ReferencingObject {
    fn from(value: CoordinateSystem) -> Self {
        Self::CoordinateSystem(value)
    }
}

impl From<Ellipsoid> for ReferencingObject {
    fn from(value: Ellipsoid) -> Self {
        Self::Ellipsoid(value)
    }
}

impl From<PrimeMeridian> for ReferencingObject {
    fn from(value: PrimeMeridian) -> Self {
        Self::PrimeMeridian(value)
    }
}

impl From<Datum> for ReferencingObject {
    fn from(value: Datum) -> Self {
        Self::Datum(value)
    }
}

impl From<CoordinateReferenceSystem> for ReferencingObject {
    fn from(value: CoordinateReferenceSystem) -> Self {
        Self::Crs(value)
    }
}
