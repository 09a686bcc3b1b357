//! Code-list registry conformance.
//!
//! A registry is conformant when its ordinals are dense and start at zero,
//! lookup by ordinal returns the very value that was registered, names are
//! unique, and every value belongs to the registry's family.

use std::collections::HashSet;

use geoapi_core::{catalog, CodeList};

use crate::error::{ensure, ValidationError};

/// Checks code-list registries.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeListValidator;

impl CodeListValidator {
    /// Check one registry.
    pub fn validate_family(&self, list: &CodeList) -> Result<(), ValidationError> {
        let family = list.family();
        let values = list.values();
        ensure(
            values.len() == list.len(),
            family,
            "value snapshot disagrees with registry length",
            (values.len(), list.len()),
        )?;

        let mut names = HashSet::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            ensure(
                value.ordinal() == index,
                family,
                "ordinals must be dense and follow registration order",
                (value.name(), value.ordinal(), index),
            )?;
            ensure(
                list.get(index).is_some_and(|stored| std::ptr::eq(stored, *value)),
                family,
                "lookup by ordinal must return the registered instance",
                value.name(),
            )?;
            ensure(
                value.family() == family,
                family,
                "value belongs to another family",
                (value.name(), value.family()),
            )?;
            ensure(
                names.insert(value.name()),
                family,
                "code names must be unique",
                value.name(),
            )?;
        }
        tracing::debug!(family, size = values.len(), "code list conforms");
        Ok(())
    }

    /// Check every predefined registry.
    pub fn validate_catalog(&self) -> Result<(), ValidationError> {
        for entry in catalog() {
            self.validate_family(entry.code_list)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_conforms() {
        assert_eq!(CodeListValidator.validate_catalog(), Ok(()));
    }

    #[test]
    fn test_runtime_family_conforms() {
        let list: &'static CodeList = Box::leak(Box::new(CodeList::new("Runtime")));
        for name in ["ALPHA", "BETA", "GAMMA"] {
            list.register(name).unwrap();
        }
        list.intern("ALPHA").unwrap();
        assert!(CodeListValidator.validate_family(list).is_ok());
        assert_eq!(list.len(), 3);
    }
}
