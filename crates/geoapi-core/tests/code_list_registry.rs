//! Integration test: registry invariants for every predefined code-list family.
//!
//! For each family in the catalog, `values()` must be indexed by ordinal,
//! hold no duplicates, and return the same instances as `get(ordinal)`.

use std::collections::HashSet;

use geoapi_core::{catalog, AxisDirection, CodeList, CodeListError, CodeListFamily, RangeMeaning};

#[test]
fn test_values_indexed_by_ordinal_for_all_families() {
    for entry in catalog() {
        let values = entry.code_list.values();
        assert!(!values.is_empty(), "{} has no codes", entry.qualified_name);
        let mut names = HashSet::new();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(v.ordinal(), i, "{}: {} out of place", entry.qualified_name, v);
            assert!(names.insert(v.name()), "{}: duplicate {}", entry.qualified_name, v);
            assert_eq!(v.family(), entry.code_list.family());
        }
    }
}

#[test]
fn test_registry_lookup_is_identity() {
    for entry in catalog() {
        for v in entry.code_list.values() {
            let looked_up = entry.code_list.get(v.ordinal()).unwrap();
            assert!(
                std::ptr::eq(looked_up, v),
                "{}: registry[{}] is not the same instance",
                entry.qualified_name,
                v.ordinal()
            );
        }
    }
}

#[test]
fn test_duplicate_predefined_name_rejected() {
    let len = RangeMeaning::code_list().len();
    let err = RangeMeaning::register("EXACT").unwrap_err();
    assert!(matches!(err, CodeListError::DuplicateName { .. }));
    assert_eq!(RangeMeaning::code_list().len(), len);
}

#[test]
fn test_user_code_appended_after_predefined() {
    let before = AxisDirection::code_list().len();
    let custom = AxisDirection::register("SOUTH_UP").unwrap();
    assert_eq!(custom.ordinal(), before);
    assert_eq!(AxisDirection::values().last().copied(), Some(custom));
    assert_eq!(custom.opposite(), None);
    assert_eq!(custom.absolute(), custom);
}

#[test]
fn test_synthetic_family_round_trip() {
    let list = CodeList::new("Synthetic");
    for name in ["A", "B", "C"] {
        list.register(name).unwrap();
    }
    let values = list.values();
    let names: Vec<&str> = values.iter().map(|v| v.name()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(v.ordinal(), i);
    }
}
