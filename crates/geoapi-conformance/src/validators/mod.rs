//! # Validator Dispatcher
//!
//! Checks that a [`ReferencingObject`] honors the contract of its kind.
//!
//! [`Validators::dispatch`] matches on the closed object taxonomy and hands
//! the object to the routine for its kind. Each routine runs structural
//! checks and returns the first violation found; nothing is collected past
//! it. Kinds without a dedicated routine (user-defined coordinate systems,
//! engineering datums) get the generic identified-object checks.
//!
//! Routines live in one file per object family:
//!
//! | File        | Objects                                   |
//! |-------------|-------------------------------------------|
//! | `naming.rs` | identifiers and generic names             |
//! | `cs.rs`     | axes and coordinate systems               |
//! | `datum.rs`  | ellipsoids, prime meridians and datums    |
//! | `crs.rs`    | single and compound reference systems     |

mod crs;
mod cs;
mod datum;
mod naming;

use geoapi_referencing::ReferencingObject;

use crate::config::ValidationConfig;
use crate::error::ValidationError;

/// Entry point of the conformance validators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validators {
    config: ValidationConfig,
}

impl Validators {
    /// Validators applying `config`.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `object` according to its kind.
    ///
    /// An absent object is vacuously valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by the routine for the
    /// object's kind.
    pub fn dispatch(&self, object: Option<&ReferencingObject>) -> Result<(), ValidationError> {
        let Some(object) = object else {
            return Ok(());
        };
        tracing::debug!(kind = object.kind_name(), name = %object.name(), "validating");
        match object {
            ReferencingObject::Crs(crs) => self.validate_crs(crs),
            ReferencingObject::Datum(datum) => self.validate_datum(datum),
            ReferencingObject::CoordinateSystem(cs) => self.validate_cs(cs),
            ReferencingObject::Ellipsoid(ellipsoid) => self.validate_ellipsoid(ellipsoid),
            ReferencingObject::PrimeMeridian(pm) => self.validate_prime_meridian(pm),
            ReferencingObject::Axis(axis) => self.validate_axis(axis),
        }
    }

    /// Fail, or only warn in lenient mode, when a mandatory attribute is
    /// absent.
    fn mandatory(&self, present: bool, subject: &str, message: &str) -> Result<(), ValidationError> {
        if present {
            return Ok(());
        }
        if self.config.require_mandatory_attributes {
            return Err(ValidationError::new(subject, message, Option::<()>::None));
        }
        tracing::warn!(subject, "{message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoapi_referencing::{CoordinateReferenceSystem, CoordinateSystem, Datum};

    #[test]
    fn test_none_is_valid() {
        assert!(Validators::default().dispatch(None).is_ok());
    }

    #[test]
    fn test_predefined_objects_are_valid() {
        let validators = Validators::default();
        let objects: Vec<ReferencingObject> = vec![
            CoordinateReferenceSystem::wgs84().into(),
            CoordinateReferenceSystem::mean_sea_level_height().into(),
            CoordinateReferenceSystem::image_grid().into(),
            CoordinateSystem::ellipsoidal_3d().into(),
            CoordinateSystem::geocentric().into(),
            CoordinateSystem::days().into(),
            Datum::wgs84().into(),
        ];
        for object in &objects {
            assert_eq!(validators.dispatch(Some(object)), Ok(()), "{}", object.kind_name());
        }
    }

    #[test]
    fn test_mandatory_respects_config() {
        let strict = Validators::default();
        let err = strict.mandatory(false, "Axis", "range meaning missing").unwrap_err();
        assert_eq!(err.value, "None");
        assert!(Validators::new(ValidationConfig::lenient())
            .mandatory(false, "Axis", "range meaning missing")
            .is_ok());
    }
}
