//! Coordinate reference system checks.

use geoapi_referencing::{CompoundCrs, CoordinateReferenceSystem, CsKind, SingleCrs};

use super::Validators;
use crate::error::{ensure, ValidationError};

impl Validators {
    /// Check a CRS, its datum and coordinate system, or each component of a
    /// compound CRS.
    pub fn validate_crs(&self, crs: &CoordinateReferenceSystem) -> Result<(), ValidationError> {
        use CoordinateReferenceSystem as Crs;

        let subject = crs.as_str();
        self.validate_identifier(subject, crs.name())?;
        match crs {
            Crs::Geographic(s) => self.validate_single(subject, s, "GeodeticDatum", &[CsKind::Ellipsoidal]),
            Crs::Geocentric(s) => self.validate_single(
                subject,
                s,
                "GeodeticDatum",
                &[CsKind::Cartesian, CsKind::Spherical],
            ),
            Crs::Projected(s) => self.validate_single(subject, s, "GeodeticDatum", &[CsKind::Cartesian]),
            Crs::Vertical(s) => self.validate_single(subject, s, "VerticalDatum", &[CsKind::Vertical]),
            Crs::Temporal(s) => self.validate_single(subject, s, "TemporalDatum", &[CsKind::Time]),
            Crs::Engineering(s) => self.validate_single(subject, s, "EngineeringDatum", CsKind::all()),
            Crs::Image(s) => self.validate_single(subject, s, "ImageDatum", &[CsKind::Cartesian, CsKind::Affine]),
            Crs::Compound(compound) => self.validate_compound(compound),
        }
    }

    fn validate_single(
        &self,
        subject: &str,
        crs: &SingleCrs,
        datum_kind: &str,
        cs_kinds: &[CsKind],
    ) -> Result<(), ValidationError> {
        ensure(
            crs.datum.kind.as_str() == datum_kind,
            subject,
            &format!("{subject} requires a {datum_kind}"),
            crs.datum.kind.as_str(),
        )?;
        ensure(
            cs_kinds.contains(&crs.coordinate_system.kind),
            subject,
            &format!("{subject} cannot use a {}", crs.coordinate_system.kind),
            crs.coordinate_system.kind,
        )?;
        self.validate_datum(&crs.datum)?;
        self.validate_cs(&crs.coordinate_system)
    }

    fn validate_compound(&self, compound: &CompoundCrs) -> Result<(), ValidationError> {
        const SUBJECT: &str = "CompoundCRS";
        ensure(
            compound.components.len() >= 2,
            SUBJECT,
            "a compound CRS has at least two components",
            compound.components.len(),
        )?;
        for component in &compound.components {
            ensure(
                !matches!(component, CoordinateReferenceSystem::Compound(_)),
                SUBJECT,
                "components must not be compound",
                &component.name().code,
            )?;
            self.validate_crs(component)?;
        }
        Ok(())
    }
}
