//! Ellipsoid, prime meridian and datum checks.

use geoapi_referencing::{Datum, DatumKind, Ellipsoid, PrimeMeridian, UnitKind};

use super::Validators;
use crate::error::{ensure, ValidationError};

/// Relative tolerance between the defining ellipsoid parameter and the
/// derived one.
pub const ELLIPSOID_TOLERANCE: f64 = 1e-10;

/// Relative tolerance on the ±180° prime meridian bound after unit
/// conversion.
pub const LONGITUDE_TOLERANCE: f64 = 1e-12;

impl Validators {
    /// Check ellipsoid axis lengths and flattening.
    pub fn validate_ellipsoid(&self, ellipsoid: &Ellipsoid) -> Result<(), ValidationError> {
        const SUBJECT: &str = "Ellipsoid";
        self.validate_identifier(SUBJECT, &ellipsoid.name)?;

        let a = ellipsoid.semi_major_axis;
        let b = ellipsoid.semi_minor_axis;
        let ivf = ellipsoid.inverse_flattening;
        ensure(
            a.is_finite() && a > 0.0,
            SUBJECT,
            "semi-major axis must be positive and finite",
            a,
        )?;
        ensure(
            b.is_finite() && b > 0.0,
            SUBJECT,
            "semi-minor axis must be positive and finite",
            b,
        )?;
        ensure(
            b <= a,
            SUBJECT,
            "semi-minor axis must not exceed semi-major axis",
            (a, b),
        )?;
        ensure(
            ivf == f64::INFINITY || ivf >= 1.0,
            SUBJECT,
            "inverse flattening must be at least 1 or infinite",
            ivf,
        )?;
        ensure(
            ellipsoid.axis_unit.kind == UnitKind::Linear,
            SUBJECT,
            "axis unit must be linear",
            &ellipsoid.axis_unit,
        )?;

        if ellipsoid.ivf_definitive {
            let expected = if ivf.is_infinite() { a } else { a * (1.0 - 1.0 / ivf) };
            ensure(
                approx_eq(b, expected),
                SUBJECT,
                "semi-minor axis is inconsistent with the inverse flattening",
                (b, expected),
            )
        } else {
            let expected = if a == b { f64::INFINITY } else { a / (a - b) };
            ensure(
                approx_eq(ivf, expected),
                SUBJECT,
                "inverse flattening is inconsistent with the axis lengths",
                (ivf, expected),
            )
        }
    }

    /// Check a prime meridian longitude and unit.
    pub fn validate_prime_meridian(&self, pm: &PrimeMeridian) -> Result<(), ValidationError> {
        const SUBJECT: &str = "PrimeMeridian";
        self.validate_identifier(SUBJECT, &pm.name)?;

        let Some(degrees) = pm.angular_unit.to_degrees(pm.greenwich_longitude) else {
            return Err(ValidationError::new(
                SUBJECT,
                "Greenwich longitude unit must be angular",
                &pm.angular_unit,
            ));
        };
        ensure(
            degrees.is_finite() && degrees.abs() <= 180.0 * (1.0 + LONGITUDE_TOLERANCE),
            SUBJECT,
            "Greenwich longitude must be within ±180°",
            degrees,
        )
    }

    /// Check a datum and, for geodetic datums, its ellipsoid and prime
    /// meridian.
    pub fn validate_datum(&self, datum: &Datum) -> Result<(), ValidationError> {
        let subject = datum.kind.as_str();
        self.validate_identifier(subject, &datum.name)?;
        if let Some(anchor) = &datum.anchor_point {
            ensure(
                !anchor.trim().is_empty(),
                subject,
                "anchor point must not be blank",
                anchor,
            )?;
        }

        match &datum.kind {
            DatumKind::Geodetic {
                ellipsoid,
                prime_meridian,
            } => {
                self.validate_ellipsoid(ellipsoid)?;
                self.validate_prime_meridian(prime_meridian)
            }
            // Typed code values and the origin instant cannot be absent.
            DatumKind::Vertical { .. } | DatumKind::Image { .. } | DatumKind::Temporal { .. } => Ok(()),
            DatumKind::Engineering => Ok(()),
        }
    }
}

fn approx_eq(x: f64, y: f64) -> bool {
    if x.is_infinite() || y.is_infinite() {
        return x == y;
    }
    (x - y).abs() <= ELLIPSOID_TOLERANCE * x.abs().max(y.abs())
}
