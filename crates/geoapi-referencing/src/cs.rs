//! # Coordinate Systems
//!
//! Coordinate system axes and the closed set of coordinate system kinds of
//! ISO 19111. The model accepts any combination of values; checking that a
//! coordinate system honors the contract of its kind is the job of the
//! conformance validators.

use std::fmt;
use std::ops::RangeInclusive;

use geoapi_core::{AxisDirection, Identifier, RangeMeaning};
use serde::{Deserialize, Serialize};

use crate::unit::Unit;
use crate::{is_unbounded_above, is_unbounded_below, named, negative_infinity, positive_infinity};

/// One axis of a coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystemAxis {
    /// Axis name, e.g. "Geodetic latitude".
    pub name: Identifier,
    /// Abbreviation used in coordinate tuples, e.g. "φ".
    pub abbreviation: String,
    /// Direction of increasing values.
    pub direction: AxisDirection,
    /// Unit of the axis values.
    pub unit: Unit,
    /// Minimum value; `-∞` when unbounded.
    #[serde(default = "negative_infinity", skip_serializing_if = "is_unbounded_below")]
    pub minimum_value: f64,
    /// Maximum value; `+∞` when unbounded.
    #[serde(default = "positive_infinity", skip_serializing_if = "is_unbounded_above")]
    pub maximum_value: f64,
    /// Meaning of the range; expected when both bounds are finite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_meaning: Option<RangeMeaning>,
}

impl CoordinateSystemAxis {
    /// Create an unbounded axis.
    pub fn new(
        name: Identifier,
        abbreviation: impl Into<String>,
        direction: AxisDirection,
        unit: Unit,
    ) -> Self {
        Self {
            name,
            abbreviation: abbreviation.into(),
            direction,
            unit,
            minimum_value: f64::NEG_INFINITY,
            maximum_value: f64::INFINITY,
            range_meaning: None,
        }
    }

    /// Set the value range of this axis.
    pub fn with_range(mut self, minimum: f64, maximum: f64, meaning: RangeMeaning) -> Self {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self.range_meaning = Some(meaning);
        self
    }

    /// Whether both bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.minimum_value.is_finite() && self.maximum_value.is_finite()
    }

    /// Latitude in degrees, pointing north.
    pub fn geodetic_latitude() -> Self {
        Self::new(named("Geodetic latitude"), "φ", AxisDirection::north(), Unit::degree())
            .with_range(-90.0, 90.0, RangeMeaning::exact())
    }

    /// Longitude in degrees, pointing east, wrapping at ±180°.
    pub fn geodetic_longitude() -> Self {
        Self::new(named("Geodetic longitude"), "λ", AxisDirection::east(), Unit::degree())
            .with_range(-180.0, 180.0, RangeMeaning::wraparound())
    }

    /// Height above the ellipsoid in metres.
    pub fn ellipsoidal_height() -> Self {
        Self::new(named("Ellipsoidal height"), "h", AxisDirection::up(), Unit::metre())
    }

    /// Height above the geoid in metres.
    pub fn gravity_related_height() -> Self {
        Self::new(named("Gravity-related height"), "H", AxisDirection::up(), Unit::metre())
    }

    /// Depth below the vertical datum in metres.
    pub fn depth() -> Self {
        Self::new(named("Depth"), "D", AxisDirection::down(), Unit::metre())
    }

    /// Projected easting in metres.
    pub fn easting() -> Self {
        Self::new(named("Easting"), "E", AxisDirection::east(), Unit::metre())
    }

    /// Projected northing in metres.
    pub fn northing() -> Self {
        Self::new(named("Northing"), "N", AxisDirection::north(), Unit::metre())
    }

    /// Geocentric X, towards the prime meridian at the equator.
    pub fn geocentric_x() -> Self {
        Self::new(named("Geocentric X"), "X", AxisDirection::geocentric_x(), Unit::metre())
    }

    /// Geocentric Y, towards 90°E at the equator.
    pub fn geocentric_y() -> Self {
        Self::new(named("Geocentric Y"), "Y", AxisDirection::geocentric_y(), Unit::metre())
    }

    /// Geocentric Z, towards the north pole.
    pub fn geocentric_z() -> Self {
        Self::new(named("Geocentric Z"), "Z", AxisDirection::geocentric_z(), Unit::metre())
    }

    /// Time axis pointing to the future in the given unit.
    pub fn time(unit: Unit) -> Self {
        Self::new(named("Time"), "t", AxisDirection::future(), unit)
    }

    /// Image grid column.
    pub fn column() -> Self {
        Self::new(named("Column"), "i", AxisDirection::column_positive(), Unit::pixel())
    }

    /// Image grid row.
    pub fn row() -> Self {
        Self::new(named("Row"), "j", AxisDirection::row_positive(), Unit::pixel())
    }
}

/// Kind of coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsKind {
    /// Straight mutually perpendicular axes with the same linear unit.
    Cartesian,
    /// Geodetic latitude, longitude and optionally ellipsoidal height.
    Ellipsoidal,
    /// Two angular coordinates and one distance from the origin.
    Spherical,
    /// A polar system extended with a straight perpendicular axis.
    Cylindrical,
    /// Distance from the origin and an angle from a reference direction.
    Polar,
    /// A single gravity-related height or depth axis.
    Vertical,
    /// A single time axis.
    Time,
    /// A single axis measuring distance along a path.
    Linear,
    /// Straight axes that need not be perpendicular.
    Affine,
    /// A system outside the taxonomy above.
    UserDefined,
}

impl CsKind {
    /// Returns all kinds in declaration order.
    pub fn all() -> &'static [CsKind] {
        &[
            Self::Cartesian,
            Self::Ellipsoidal,
            Self::Spherical,
            Self::Cylindrical,
            Self::Polar,
            Self::Vertical,
            Self::Time,
            Self::Linear,
            Self::Affine,
            Self::UserDefined,
        ]
    }

    /// Allowed number of axes for this kind.
    pub fn dimension_range(&self) -> RangeInclusive<usize> {
        match self {
            Self::Cartesian | Self::Ellipsoidal | Self::Affine | Self::UserDefined => 2..=3,
            Self::Spherical | Self::Cylindrical => 3..=3,
            Self::Polar => 2..=2,
            Self::Vertical | Self::Time | Self::Linear => 1..=1,
        }
    }

    /// Interface name of this kind, used in validation messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cartesian => "CartesianCS",
            Self::Ellipsoidal => "EllipsoidalCS",
            Self::Spherical => "SphericalCS",
            Self::Cylindrical => "CylindricalCS",
            Self::Polar => "PolarCS",
            Self::Vertical => "VerticalCS",
            Self::Time => "TimeCS",
            Self::Linear => "LinearCS",
            Self::Affine => "AffineCS",
            Self::UserDefined => "UserDefinedCS",
        }
    }
}

impl fmt::Display for CsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coordinate system: a kind and an ordered list of axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    /// Kind of coordinate system.
    pub kind: CsKind,
    /// Name of the coordinate system.
    pub name: Identifier,
    /// Axes in coordinate-tuple order.
    pub axes: Vec<CoordinateSystemAxis>,
}

impl CoordinateSystem {
    /// Create a coordinate system. No contract is checked here.
    pub fn new(kind: CsKind, name: Identifier, axes: Vec<CoordinateSystemAxis>) -> Self {
        Self { kind, name, axes }
    }

    /// Number of axes.
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    /// Latitude, longitude in degrees.
    pub fn ellipsoidal_2d() -> Self {
        Self::new(
            CsKind::Ellipsoidal,
            named("Ellipsoidal 2D"),
            vec![
                CoordinateSystemAxis::geodetic_latitude(),
                CoordinateSystemAxis::geodetic_longitude(),
            ],
        )
    }

    /// Latitude, longitude in degrees and ellipsoidal height in metres.
    pub fn ellipsoidal_3d() -> Self {
        Self::new(
            CsKind::Ellipsoidal,
            named("Ellipsoidal 3D"),
            vec![
                CoordinateSystemAxis::geodetic_latitude(),
                CoordinateSystemAxis::geodetic_longitude(),
                CoordinateSystemAxis::ellipsoidal_height(),
            ],
        )
    }

    /// Easting, northing in metres.
    pub fn projected() -> Self {
        Self::new(
            CsKind::Cartesian,
            named("Cartesian 2D"),
            vec![CoordinateSystemAxis::easting(), CoordinateSystemAxis::northing()],
        )
    }

    /// Geocentric X, Y, Z in metres.
    pub fn geocentric() -> Self {
        Self::new(
            CsKind::Cartesian,
            named("Earth centred, earth fixed"),
            vec![
                CoordinateSystemAxis::geocentric_x(),
                CoordinateSystemAxis::geocentric_y(),
                CoordinateSystemAxis::geocentric_z(),
            ],
        )
    }

    /// Gravity-related height in metres.
    pub fn gravity_related_height() -> Self {
        Self::new(
            CsKind::Vertical,
            named("Gravity-related height"),
            vec![CoordinateSystemAxis::gravity_related_height()],
        )
    }

    /// Time in days.
    pub fn days() -> Self {
        Self::new(
            CsKind::Time,
            named("Days"),
            vec![CoordinateSystemAxis::time(Unit::day())],
        )
    }

    /// Column, row in pixels.
    pub fn grid() -> Self {
        Self::new(
            CsKind::Cartesian,
            named("Grid"),
            vec![CoordinateSystemAxis::column(), CoordinateSystemAxis::row()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_ranges() {
        assert_eq!(CsKind::Vertical.dimension_range(), 1..=1);
        assert_eq!(CsKind::Polar.dimension_range(), 2..=2);
        assert!(CsKind::Ellipsoidal.dimension_range().contains(&3));
        assert!(!CsKind::Spherical.dimension_range().contains(&2));
        for kind in CsKind::all() {
            assert!(!kind.dimension_range().is_empty(), "{kind}");
        }
    }

    #[test]
    fn test_predefined_systems_fit_their_kind() {
        for cs in [
            CoordinateSystem::ellipsoidal_2d(),
            CoordinateSystem::ellipsoidal_3d(),
            CoordinateSystem::projected(),
            CoordinateSystem::geocentric(),
            CoordinateSystem::gravity_related_height(),
            CoordinateSystem::days(),
            CoordinateSystem::grid(),
        ] {
            assert!(
                cs.kind.dimension_range().contains(&cs.dimension()),
                "{} has {} axes",
                cs.kind,
                cs.dimension()
            );
        }
    }

    #[test]
    fn test_unbounded_axis_omits_range_in_json() {
        let axis = CoordinateSystemAxis::easting();
        let json = serde_json::to_value(&axis).unwrap();
        assert!(json.get("minimum_value").is_none());
        assert!(json.get("maximum_value").is_none());
        let back: CoordinateSystemAxis = serde_json::from_value(json).unwrap();
        assert_eq!(back.minimum_value, f64::NEG_INFINITY);
        assert_eq!(back.maximum_value, f64::INFINITY);
        assert_eq!(back.direction, AxisDirection::east());
    }

    #[test]
    fn test_wrong_signed_infinity_survives_yaml() {
        let mut axis = CoordinateSystemAxis::easting();
        axis.minimum_value = f64::INFINITY;
        axis.maximum_value = f64::NEG_INFINITY;
        let yaml = serde_yaml::to_string(&axis).unwrap();
        assert!(yaml.contains("minimum_value"));
        assert!(yaml.contains("maximum_value"));
        let back: CoordinateSystemAxis = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.minimum_value, f64::INFINITY);
        assert_eq!(back.maximum_value, f64::NEG_INFINITY);
    }

    #[test]
    fn test_bounded_axis_round_trip() {
        let axis = CoordinateSystemAxis::geodetic_longitude();
        assert!(axis.is_bounded());
        let json = serde_json::to_string(&axis).unwrap();
        let back: CoordinateSystemAxis = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, axis.name);
        assert_eq!(back.minimum_value, -180.0);
        assert_eq!(back.maximum_value, 180.0);
        assert_eq!(back.unit.symbol, "°");
        assert_eq!(back.range_meaning, Some(RangeMeaning::wraparound()));
    }

    #[test]
    fn test_cs_from_yaml() {
        let yaml = r#"
kind: vertical
name:
  code: Depth
axes:
  - name:
      code: Depth
    abbreviation: D
    direction: DOWN
    unit:
      symbol: m
      kind: linear
      to_base: 1.0
"#;
        let cs: CoordinateSystem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cs.kind, CsKind::Vertical);
        assert_eq!(cs.axes[0].direction, AxisDirection::down());
        assert!(!cs.axes[0].is_bounded());
    }
}
