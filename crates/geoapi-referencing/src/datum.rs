//! # Datums
//!
//! Ellipsoids, prime meridians and the closed set of datum kinds of
//! ISO 19111. Like the coordinate systems, these are plain data: every
//! combination is representable and the validators decide what is legal.

use std::fmt;

use chrono::{DateTime, Utc};
use geoapi_core::{Identifier, PixelInCell, VerticalDatumType};
use serde::{Deserialize, Serialize};

use crate::unit::Unit;
use crate::{is_unbounded_above, named, positive_infinity};

/// Geometric figure approximating the shape of the Earth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Ellipsoid name.
    pub name: Identifier,
    /// Length of the semi-major axis.
    pub semi_major_axis: f64,
    /// Length of the semi-minor axis.
    pub semi_minor_axis: f64,
    /// `a / (a - b)`; `+∞` for a sphere.
    #[serde(default = "positive_infinity", skip_serializing_if = "is_unbounded_above")]
    pub inverse_flattening: f64,
    /// Whether the inverse flattening, rather than the semi-minor axis, is
    /// the defining parameter.
    #[serde(default)]
    pub ivf_definitive: bool,
    /// Unit of both axis lengths.
    pub axis_unit: Unit,
}

impl Ellipsoid {
    /// Define an ellipsoid by its semi-major axis and inverse flattening.
    pub fn from_flattening(
        name: Identifier,
        semi_major_axis: f64,
        inverse_flattening: f64,
        axis_unit: Unit,
    ) -> Self {
        let semi_minor_axis = if inverse_flattening.is_infinite() {
            semi_major_axis
        } else {
            semi_major_axis * (1.0 - 1.0 / inverse_flattening)
        };
        Self {
            name,
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            ivf_definitive: true,
            axis_unit,
        }
    }

    /// Define an ellipsoid by its two axis lengths.
    pub fn from_axes(name: Identifier, semi_major_axis: f64, semi_minor_axis: f64, axis_unit: Unit) -> Self {
        let inverse_flattening = if semi_major_axis == semi_minor_axis {
            f64::INFINITY
        } else {
            semi_major_axis / (semi_major_axis - semi_minor_axis)
        };
        Self {
            name,
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            ivf_definitive: false,
            axis_unit,
        }
    }

    /// A sphere of the given radius in metres.
    pub fn sphere(name: Identifier, radius: f64) -> Self {
        Self::from_axes(name, radius, radius, Unit::metre())
    }

    /// The WGS 84 ellipsoid.
    pub fn wgs84() -> Self {
        Self::from_flattening(named("WGS 84"), 6_378_137.0, 298.257_223_563, Unit::metre())
    }

    /// The GRS 1980 ellipsoid.
    pub fn grs80() -> Self {
        Self::from_flattening(named("GRS 1980"), 6_378_137.0, 298.257_222_101, Unit::metre())
    }

    /// Whether both axes have the same length.
    pub fn is_sphere(&self) -> bool {
        self.semi_major_axis == self.semi_minor_axis
    }

    /// Square of the first eccentricity.
    pub fn eccentricity_squared(&self) -> f64 {
        let a = self.semi_major_axis;
        let b = self.semi_minor_axis;
        (a * a - b * b) / (a * a)
    }
}

/// Origin from which longitudes are measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeMeridian {
    /// Prime meridian name.
    pub name: Identifier,
    /// Longitude of this meridian east of Greenwich.
    pub greenwich_longitude: f64,
    /// Unit of `greenwich_longitude`.
    pub angular_unit: Unit,
}

impl PrimeMeridian {
    /// A prime meridian at `greenwich_longitude`, expressed in `angular_unit`.
    pub fn new(name: Identifier, greenwich_longitude: f64, angular_unit: Unit) -> Self {
        Self {
            name,
            greenwich_longitude,
            angular_unit,
        }
    }

    /// The Greenwich meridian.
    pub fn greenwich() -> Self {
        Self::new(named("Greenwich"), 0.0, Unit::degree())
    }

    /// Paris, expressed in degrees.
    pub fn paris() -> Self {
        Self::new(named("Paris"), 2.337_229_166_667, Unit::degree())
    }
}

/// Kind-specific part of a datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatumKind {
    /// Relates a coordinate system to the Earth through an ellipsoid.
    Geodetic {
        ellipsoid: Ellipsoid,
        prime_meridian: PrimeMeridian,
    },
    /// Surface to which gravity-related heights or depths refer.
    Vertical { vertical_datum_type: VerticalDatumType },
    /// Origin of a time axis.
    Temporal { origin: DateTime<Utc> },
    /// Local origin, e.g. a building or a ship.
    Engineering,
    /// Origin of an image grid.
    Image { pixel_in_cell: PixelInCell },
}

impl DatumKind {
    /// Interface name of this kind, used in validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Geodetic { .. } => "GeodeticDatum",
            Self::Vertical { .. } => "VerticalDatum",
            Self::Temporal { .. } => "TemporalDatum",
            Self::Engineering => "EngineeringDatum",
            Self::Image { .. } => "ImageDatum",
        }
    }
}

impl fmt::Display for DatumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A datum: common identification plus kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Datum name.
    pub name: Identifier,
    /// Description of the point or points used to anchor the datum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_point: Option<String>,
    /// Time after which this datum definition is valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realization_epoch: Option<DateTime<Utc>>,
    /// Kind-specific parameters.
    pub kind: DatumKind,
}

impl Datum {
    fn with_kind(name: Identifier, kind: DatumKind) -> Self {
        Self {
            name,
            anchor_point: None,
            realization_epoch: None,
            kind,
        }
    }

    /// A geodetic datum from its ellipsoid and prime meridian.
    pub fn geodetic(name: Identifier, ellipsoid: Ellipsoid, prime_meridian: PrimeMeridian) -> Self {
        Self::with_kind(
            name,
            DatumKind::Geodetic {
                ellipsoid,
                prime_meridian,
            },
        )
    }

    /// A vertical datum of the given type.
    pub fn vertical(name: Identifier, vertical_datum_type: VerticalDatumType) -> Self {
        Self::with_kind(name, DatumKind::Vertical { vertical_datum_type })
    }

    /// A temporal datum starting at `origin`.
    pub fn temporal(name: Identifier, origin: DateTime<Utc>) -> Self {
        Self::with_kind(name, DatumKind::Temporal { origin })
    }

    /// A local engineering datum.
    pub fn engineering(name: Identifier) -> Self {
        Self::with_kind(name, DatumKind::Engineering)
    }

    /// An image datum anchored at the cell center or corner.
    pub fn image(name: Identifier, pixel_in_cell: PixelInCell) -> Self {
        Self::with_kind(name, DatumKind::Image { pixel_in_cell })
    }

    /// World Geodetic System 1984.
    pub fn wgs84() -> Self {
        Self::geodetic(
            named("World Geodetic System 1984"),
            Ellipsoid::wgs84(),
            PrimeMeridian::greenwich(),
        )
    }

    /// Mean sea level, geoidal.
    pub fn mean_sea_level() -> Self {
        Self::vertical(named("Mean Sea Level"), VerticalDatumType::geoidal())
    }

    /// Set the anchor point description.
    pub fn with_anchor_point(mut self, anchor: impl Into<String>) -> Self {
        self.anchor_point = Some(anchor.into());
        self
    }
}
