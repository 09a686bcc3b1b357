//! Identifier and name checks shared by every identified object.

use geoapi_core::{GenericName, Identifier};

use super::Validators;
use crate::error::{ensure, ValidationError};

impl Validators {
    /// Check the name of an object of kind `subject`.
    pub fn validate_identifier(&self, subject: &str, identifier: &Identifier) -> Result<(), ValidationError> {
        let code = identifier.code.as_str();
        ensure(!code.is_empty(), subject, "name code must not be empty", code)?;
        ensure(
            code.trim() == code,
            subject,
            "name code must not have leading or trailing whitespace",
            code,
        )?;
        if let Some(space) = &identifier.code_space {
            ensure(!space.trim().is_empty(), subject, "code space must not be blank", space)?;
        }
        if let Some(version) = &identifier.version {
            ensure(!version.trim().is_empty(), subject, "version must not be blank", version)?;
        }
        Ok(())
    }

    /// Check the structure of a generic name.
    pub fn validate_name(&self, name: &GenericName) -> Result<(), ValidationError> {
        let components = name.components();
        match name {
            GenericName::Local(_) => ensure(
                components.len() == 1,
                "LocalName",
                "a local name has exactly one component",
                components,
            )?,
            GenericName::Scoped(_) => ensure(
                components.len() >= 2,
                "ScopedName",
                "a scoped name has at least two components",
                components,
            )?,
        }
        for component in components {
            ensure(
                !component.is_empty(),
                "GenericName",
                "name components must not be empty",
                components,
            )?;
        }
        Ok(())
    }
}
