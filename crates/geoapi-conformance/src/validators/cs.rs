//! Axis and coordinate system checks.

use geoapi_core::{AxisDirection, CodeListFamily, RangeMeaning};
use geoapi_referencing::{CoordinateSystem, CoordinateSystemAxis, CsKind, UnitKind};

use super::Validators;
use crate::error::{ensure, ValidationError};

const AXIS: &str = "CoordinateSystemAxis";

impl Validators {
    /// Check a single axis.
    pub fn validate_axis(&self, axis: &CoordinateSystemAxis) -> Result<(), ValidationError> {
        self.validate_identifier(AXIS, &axis.name)?;
        self.mandatory(
            !axis.abbreviation.trim().is_empty(),
            AXIS,
            "axis abbreviation is mandatory",
        )?;

        let bounds = (axis.minimum_value, axis.maximum_value);
        ensure(
            !bounds.0.is_nan() && !bounds.1.is_nan(),
            AXIS,
            "axis bounds must not be NaN",
            bounds,
        )?;
        ensure(
            bounds.0 != f64::INFINITY && bounds.1 != f64::NEG_INFINITY,
            AXIS,
            "infinite bounds must be -∞ for the minimum and +∞ for the maximum",
            bounds,
        )?;
        ensure(
            bounds.0 <= bounds.1,
            AXIS,
            "minimum value must not exceed maximum value",
            bounds,
        )?;
        ensure(
            axis.unit.to_base.is_finite() && axis.unit.to_base > 0.0,
            AXIS,
            "unit conversion factor must be positive",
            &axis.unit,
        )?;

        match axis.range_meaning {
            None => self.mandatory(
                !axis.is_bounded(),
                AXIS,
                "range meaning is mandatory for a bounded axis",
            ),
            Some(meaning) if meaning == RangeMeaning::wraparound() => ensure(
                axis.is_bounded(),
                AXIS,
                "wraparound range requires finite bounds",
                bounds,
            ),
            Some(_) => Ok(()),
        }
    }

    /// Check a coordinate system against the contract of its kind.
    pub fn validate_cs(&self, cs: &CoordinateSystem) -> Result<(), ValidationError> {
        if cs.kind == CsKind::UserDefined {
            return self.validate_generic_cs(cs);
        }

        let subject = cs.kind.as_str();
        self.validate_identifier(subject, &cs.name)?;

        let range = cs.kind.dimension_range();
        ensure(
            range.contains(&cs.dimension()),
            subject,
            &format!(
                "{subject} requires between {} and {} axes",
                range.start(),
                range.end()
            ),
            cs.dimension(),
        )?;
        for axis in &cs.axes {
            self.validate_axis(axis)?;
        }
        check_not_colinear(subject, &cs.axes)?;

        match cs.kind {
            CsKind::Cartesian => check_cartesian(&cs.axes),
            CsKind::Ellipsoidal => check_ellipsoidal(&cs.axes),
            CsKind::Spherical => check_unit_mix(subject, &cs.axes, 2, 1),
            CsKind::Cylindrical => check_unit_mix(subject, &cs.axes, 1, 2),
            CsKind::Polar => check_unit_mix(subject, &cs.axes, 1, 1),
            CsKind::Vertical => check_each(subject, &cs.axes, |axis| {
                if !axis.direction.is_vertical() {
                    return Some("vertical axis direction must be UP or DOWN");
                }
                if !matches!(axis.unit.kind, UnitKind::Linear | UnitKind::Pressure) {
                    return Some("vertical axis unit must be linear or pressure");
                }
                None
            }),
            CsKind::Time => check_each(subject, &cs.axes, |axis| {
                if !axis.direction.is_temporal() {
                    return Some("time axis direction must be FUTURE or PAST");
                }
                if axis.unit.kind != UnitKind::Temporal {
                    return Some("time axis unit must be temporal");
                }
                None
            }),
            CsKind::Linear => check_each(subject, &cs.axes, |axis| {
                (axis.unit.kind != UnitKind::Linear).then_some("linear axis unit must be linear")
            }),
            CsKind::Affine => check_each(subject, &cs.axes, |axis| {
                (!matches!(axis.unit.kind, UnitKind::Linear | UnitKind::Scale))
                    .then_some("affine axis unit must be linear or scale")
            }),
            CsKind::UserDefined => Ok(()),
        }
    }

    /// Checks common to every coordinate system, used for kinds without a
    /// dedicated routine.
    fn validate_generic_cs(&self, cs: &CoordinateSystem) -> Result<(), ValidationError> {
        let subject = cs.kind.as_str();
        self.validate_identifier(subject, &cs.name)?;
        ensure(
            !cs.axes.is_empty(),
            subject,
            "a coordinate system has at least one axis",
            cs.dimension(),
        )?;
        for axis in &cs.axes {
            self.validate_axis(axis)?;
        }
        Ok(())
    }
}

/// No two axes may point along the same line.
fn check_not_colinear(subject: &str, axes: &[CoordinateSystemAxis]) -> Result<(), ValidationError> {
    let other = AxisDirection::other();
    for (i, a) in axes.iter().enumerate() {
        for b in &axes[i + 1..] {
            let colinear = a.direction != other && a.direction.absolute() == b.direction.absolute();
            ensure(
                !colinear,
                subject,
                "axes must not be colinear",
                (a.direction.name(), b.direction.name()),
            )?;
        }
    }
    Ok(())
}

/// Fail with the message returned by `rule` for the first offending axis.
fn check_each<F>(subject: &str, axes: &[CoordinateSystemAxis], rule: F) -> Result<(), ValidationError>
where
    F: Fn(&CoordinateSystemAxis) -> Option<&'static str>,
{
    for axis in axes {
        if let Some(message) = rule(axis) {
            return Err(ValidationError::new(
                subject,
                message,
                (&axis.name.code, axis.direction.name(), axis.unit.kind),
            ));
        }
    }
    Ok(())
}

fn check_cartesian(axes: &[CoordinateSystemAxis]) -> Result<(), ValidationError> {
    const SUBJECT: &str = "CartesianCS";
    check_each(SUBJECT, axes, |axis| {
        (!matches!(axis.unit.kind, UnitKind::Linear | UnitKind::Scale))
            .then_some("Cartesian axis unit must be linear or scale")
    })?;
    let first = axes.first().map(|axis| axis.unit.kind);
    ensure(
        axes.iter().all(|axis| Some(axis.unit.kind) == first),
        SUBJECT,
        "Cartesian axes must share the same unit kind",
        axes.iter().map(|axis| axis.unit.kind).collect::<Vec<_>>(),
    )?;
    for (i, a) in axes.iter().enumerate() {
        for b in &axes[i + 1..] {
            if let (Some(x), Some(y)) = (a.direction.compass_angle(), b.direction.compass_angle()) {
                ensure(
                    (x - y).abs() % 180.0 == 90.0,
                    SUBJECT,
                    "Cartesian compass axes must be perpendicular",
                    (a.direction.name(), b.direction.name()),
                )?;
            }
        }
    }
    Ok(())
}

fn check_ellipsoidal(axes: &[CoordinateSystemAxis]) -> Result<(), ValidationError> {
    const SUBJECT: &str = "EllipsoidalCS";
    check_each(SUBJECT, axes, |axis| {
        if axis.direction.is_compass() {
            (axis.unit.kind != UnitKind::Angular).then_some("latitude and longitude axes must be angular")
        } else if axis.direction.is_vertical() {
            (axis.unit.kind != UnitKind::Linear).then_some("ellipsoidal height axis must be linear")
        } else {
            Some("ellipsoidal axes must be compass or vertical directions")
        }
    })?;
    let has = |direction: AxisDirection| axes.iter().any(|axis| axis.direction.absolute() == direction);
    ensure(
        has(AxisDirection::north()),
        SUBJECT,
        "missing latitude axis",
        axes.iter().map(|axis| axis.direction.name()).collect::<Vec<_>>(),
    )?;
    ensure(
        has(AxisDirection::east()),
        SUBJECT,
        "missing longitude axis",
        axes.iter().map(|axis| axis.direction.name()).collect::<Vec<_>>(),
    )
}

/// Require exactly `angular` angular axes and `linear` linear axes.
fn check_unit_mix(
    subject: &str,
    axes: &[CoordinateSystemAxis],
    angular: usize,
    linear: usize,
) -> Result<(), ValidationError> {
    let count = |kind: UnitKind| axes.iter().filter(|axis| axis.unit.kind == kind).count();
    let actual = (count(UnitKind::Angular), count(UnitKind::Linear));
    ensure(
        actual == (angular, linear),
        subject,
        &format!("{subject} requires {angular} angular and {linear} linear axes"),
        actual,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use geoapi_core::Identifier;
    use geoapi_referencing::Unit;

    fn id(code: &str) -> Identifier {
        Identifier::new(code).unwrap()
    }

    #[test]
    fn test_axis_min_above_max() {
        let axis = CoordinateSystemAxis::geodetic_latitude().with_range(10.0, -10.0, RangeMeaning::exact());
        let err = Validators::default().validate_axis(&axis).unwrap_err();
        assert!(err.message.contains("minimum"));
    }

    #[test]
    fn test_axis_wrong_signed_infinite_bounds() {
        let v = Validators::default();
        let mut axis = CoordinateSystemAxis::easting();
        axis.minimum_value = f64::INFINITY;
        axis.maximum_value = f64::INFINITY;
        let err = v.validate_axis(&axis).unwrap_err();
        assert!(err.message.contains("infinite bounds"));

        let mut axis = CoordinateSystemAxis::easting();
        axis.maximum_value = f64::NEG_INFINITY;
        assert!(v.validate_axis(&axis).is_err());

        assert!(v.validate_axis(&CoordinateSystemAxis::easting()).is_ok());
    }

    #[test]
    fn test_bounded_axis_without_range_meaning() {
        let mut axis = CoordinateSystemAxis::geodetic_latitude();
        axis.range_meaning = None;
        assert!(Validators::default().validate_axis(&axis).is_err());
        assert!(Validators::new(ValidationConfig::lenient()).validate_axis(&axis).is_ok());
    }

    #[test]
    fn test_wraparound_needs_bounds() {
        let mut axis = CoordinateSystemAxis::geodetic_longitude();
        axis.maximum_value = f64::INFINITY;
        let err = Validators::default().validate_axis(&axis).unwrap_err();
        assert!(err.message.contains("wraparound"));
    }

    #[test]
    fn test_missing_abbreviation() {
        let mut axis = CoordinateSystemAxis::easting();
        axis.abbreviation = String::new();
        assert!(Validators::default().validate_axis(&axis).is_err());
        assert!(Validators::new(ValidationConfig::lenient()).validate_axis(&axis).is_ok());
    }

    #[test]
    fn test_dimension_error_names_kind() {
        let cs = CoordinateSystem::new(CsKind::Vertical, id("Empty"), vec![]);
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert_eq!(err.subject, "VerticalCS");
        assert!(err.message.contains("VerticalCS"));

        let cs = CoordinateSystem::new(CsKind::Spherical, id("Flat"), vec![CoordinateSystemAxis::easting()]);
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert_eq!(err.subject, "SphericalCS");
    }

    #[test]
    fn test_colinear_axes() {
        let mut southing = CoordinateSystemAxis::northing();
        southing.direction = AxisDirection::south();
        let cs = CoordinateSystem::new(
            CsKind::Cartesian,
            id("Bad"),
            vec![CoordinateSystemAxis::northing(), southing],
        );
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert_eq!(err.message, "axes must not be colinear");
    }

    #[test]
    fn test_cartesian_not_perpendicular() {
        let mut diagonal = CoordinateSystemAxis::easting();
        diagonal.direction = AxisDirection::north_east();
        let cs = CoordinateSystem::new(
            CsKind::Cartesian,
            id("Skewed"),
            vec![CoordinateSystemAxis::northing(), diagonal],
        );
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert!(err.message.contains("perpendicular"));
    }

    #[test]
    fn test_vertical_axis_direction() {
        let cs = CoordinateSystem::new(CsKind::Vertical, id("Sideways"), vec![CoordinateSystemAxis::easting()]);
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert!(err.message.contains("UP or DOWN"));
    }

    #[test]
    fn test_time_axis_unit() {
        let cs = CoordinateSystem::new(
            CsKind::Time,
            id("Metres of time"),
            vec![CoordinateSystemAxis::time(Unit::metre())],
        );
        let err = Validators::default().validate_cs(&cs).unwrap_err();
        assert!(err.message.contains("temporal"));
    }

    #[test]
    fn test_ellipsoidal_linear_latitude() {
        let mut latitude = CoordinateSystemAxis::geodetic_latitude();
        latitude.unit = Unit::metre();
        let cs = CoordinateSystem::new(
            CsKind::Ellipsoidal,
            id("Odd"),
            vec![latitude, CoordinateSystemAxis::geodetic_longitude()],
        );
        assert!(Validators::default().validate_cs(&cs).is_err());
    }

    #[test]
    fn test_user_defined_uses_generic_checks() {
        let cs = CoordinateSystem::new(
            CsKind::UserDefined,
            id("Anything"),
            vec![CoordinateSystemAxis::time(Unit::second())],
        );
        assert!(Validators::default().validate_cs(&cs).is_ok());
        let empty = CoordinateSystem::new(CsKind::UserDefined, id("Nothing"), vec![]);
        assert!(Validators::default().validate_cs(&empty).is_err());
    }
}
