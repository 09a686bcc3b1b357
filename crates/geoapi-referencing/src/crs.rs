//! Coordinate reference systems: a datum paired with a coordinate system,
//! or an ordered compound of such systems.

use std::fmt;

use geoapi_core::{Identifier, PixelInCell};
use serde::{Deserialize, Serialize};

use crate::cs::CoordinateSystem;
use crate::datum::Datum;
use crate::named;

/// A CRS made of exactly one datum and one coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleCrs {
    /// CRS name.
    pub name: Identifier,
    /// Datum relating the coordinate system to the object being described.
    pub datum: Datum,
    /// Coordinate system of the CRS.
    pub coordinate_system: CoordinateSystem,
}

impl SingleCrs {
    /// Pair a datum with a coordinate system under one name.
    pub fn new(name: Identifier, datum: Datum, coordinate_system: CoordinateSystem) -> Self {
        Self {
            name,
            datum,
            coordinate_system,
        }
    }
}

/// A CRS built from two or more independent component systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundCrs {
    /// CRS name.
    pub name: Identifier,
    /// Components in coordinate-tuple order.
    pub components: Vec<CoordinateReferenceSystem>,
}

/// Coordinate reference system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoordinateReferenceSystem {
    /// Latitude/longitude on an ellipsoid.
    Geographic(SingleCrs),
    /// Earth-centred Cartesian or spherical coordinates.
    Geocentric(SingleCrs),
    /// Map coordinates derived from a geographic CRS.
    Projected(SingleCrs),
    /// Gravity-related heights or depths.
    Vertical(SingleCrs),
    /// Time.
    Temporal(SingleCrs),
    /// Local coordinates, e.g. on a site or vehicle.
    Engineering(SingleCrs),
    /// Image grid coordinates.
    Image(SingleCrs),
    /// Ordered combination of other CRSs.
    Compound(CompoundCrs),
}

impl CoordinateReferenceSystem {
    /// CRS name.
    pub fn name(&self) -> &Identifier {
        match self {
            Self::Geographic(s)
            | Self::Geocentric(s)
            | Self::Projected(s)
            | Self::Vertical(s)
            | Self::Temporal(s)
            | Self::Engineering(s)
            | Self::Image(s) => &s.name,
            Self::Compound(compound) => &compound.name,
        }
    }

    /// The single-CRS body, or `None` for a compound CRS.
    pub fn as_single(&self) -> Option<&SingleCrs> {
        match self {
            Self::Geographic(s)
            | Self::Geocentric(s)
            | Self::Projected(s)
            | Self::Vertical(s)
            | Self::Temporal(s)
            | Self::Engineering(s)
            | Self::Image(s) => Some(s),
            Self::Compound(_) => None,
        }
    }

    /// Total number of axes.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Compound(compound) => compound.components.iter().map(Self::dimension).sum(),
            other => other
                .as_single()
                .map_or(0, |single| single.coordinate_system.dimension()),
        }
    }

    /// Interface name of this kind, used in validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Geographic(_) => "GeographicCRS",
            Self::Geocentric(_) => "GeocentricCRS",
            Self::Projected(_) => "ProjectedCRS",
            Self::Vertical(_) => "VerticalCRS",
            Self::Temporal(_) => "TemporalCRS",
            Self::Engineering(_) => "EngineeringCRS",
            Self::Image(_) => "ImageCRS",
            Self::Compound(_) => "CompoundCRS",
        }
    }

    /// WGS 84 latitude/longitude in degrees.
    pub fn wgs84() -> Self {
        Self::Geographic(SingleCrs::new(
            named("WGS 84").with_code_space("EPSG"),
            Datum::wgs84(),
            CoordinateSystem::ellipsoidal_2d(),
        ))
    }

    /// Mean sea level height in metres.
    pub fn mean_sea_level_height() -> Self {
        Self::Vertical(SingleCrs::new(
            named("MSL height"),
            Datum::mean_sea_level(),
            CoordinateSystem::gravity_related_height(),
        ))
    }

    /// Column/row grid anchored at cell centers.
    pub fn image_grid() -> Self {
        Self::Image(SingleCrs::new(
            named("Image grid"),
            Datum::image(named("Image origin"), PixelInCell::cell_center()),
            CoordinateSystem::grid(),
        ))
    }
}

impl fmt::Display for CoordinateReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[\"{}\"]", self.as_str(), self.name())
    }
}
