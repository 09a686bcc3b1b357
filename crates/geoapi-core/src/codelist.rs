//! # Code Lists — Open, Append-Only Enumerations
//!
//! A code list behaves like an enum whose set of constants is not closed:
//! the defining family ships a list of predefined codes, but new codes may
//! be added at runtime from outside the defining type. That rules out a
//! plain Rust `enum`. Each family owns a [`CodeList`] registry holding an
//! ordered sequence of interned [`CodeValue`] singletons.
//!
//! ## Invariants
//!
//! - Ordinals are dense and zero-based, assigned in registration order.
//! - Names are unique within a registry, and no name may collide with the
//!   UML identifier of another code.
//! - A family is identified by its fully-qualified name, so same-named
//!   families in different packages never compare equal.
//! - `registry.get(v.ordinal())` is pointer-identical to `v`.
//! - Values are never removed or mutated; they live for the whole process.
//!
//! ## Concurrency
//!
//! Registration and snapshot reads go through the same `RwLock`. A snapshot
//! taken by [`CodeList::values`] therefore never observes a half-appended
//! registry.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use parking_lot::RwLock;

use crate::error::CodeListError;

/// A single code in a code list.
///
/// Instances are only created by [`CodeList`] and are handed out as
/// `&'static CodeValue`. Two values are equal when they are the same
/// instance, or when they belong to the same family and have the same
/// ordinal.
#[derive(Debug)]
pub struct CodeValue {
    family: &'static str,
    name: String,
    identifier: String,
    ordinal: usize,
}

impl CodeValue {
    /// Qualified name of the family this code belongs to
    /// (e.g. `"org.opengis.referencing.cs.AxisDirection"`).
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The code name, unique within its family (e.g. `"NORTH_EAST"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// UML identifier derived from the name (e.g. `"northEast"`).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Position of this code in its family, starting at zero.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Whether `name` designates this code, either by name or by identifier.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.identifier == name
    }
}

impl PartialEq for CodeValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.ordinal == other.ordinal && self.family == other.family)
    }
}

impl Eq for CodeValue {}

impl Hash for CodeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.ordinal.hash(state);
    }
}

impl PartialOrd for CodeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodeValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal
            .cmp(&other.ordinal)
            .then_with(|| self.family.cmp(other.family))
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Derive the UML identifier of a code from its upper-snake-case name.
///
/// `NORTH_EAST` becomes `northEast`; names that are not upper snake case
/// are returned unchanged.
fn uml_identifier(name: &str) -> String {
    if !name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    for (i, word) in name.split('_').filter(|w| !w.is_empty()).enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// The registry of all codes in one family.
#[derive(Debug)]
pub struct CodeList {
    family: &'static str,
    values: RwLock<Vec<&'static CodeValue>>,
}

impl CodeList {
    /// Create an empty registry for the family with the given qualified name.
    pub const fn new(family: &'static str) -> Self {
        Self {
            family,
            values: parking_lot::const_rwlock(Vec::new()),
        }
    }

    /// Create a registry pre-populated with `names`, in order.
    ///
    /// Repeated names are interned rather than registered twice.
    pub fn with_predefined(family: &'static str, names: &[&'static str]) -> Self {
        let list = Self::new(family);
        for name in names {
            list.__predefined(name);
        }
        list
    }

    /// Qualified name of the family owning this registry.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Family name without its package (e.g. `"AxisDirection"`).
    pub fn simple_name(&self) -> &'static str {
        self.family
            .rsplit_once('.')
            .map_or(self.family, |(_, simple)| simple)
    }

    /// Number of codes registered so far.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether no code has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Snapshot of all codes, indexed by ordinal.
    pub fn values(&self) -> Vec<&'static CodeValue> {
        self.values.read().clone()
    }

    /// The code with the given ordinal, if any.
    pub fn get(&self, ordinal: usize) -> Option<&'static CodeValue> {
        self.values.read().get(ordinal).copied()
    }

    /// Look up a code by name or UML identifier. Never creates a code.
    pub fn value_of(&self, name: &str) -> Option<&'static CodeValue> {
        self.values.read().iter().copied().find(|v| v.matches(name))
    }

    /// Register a new code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeListError::DuplicateName`] if the name, or the UML
    /// identifier derived from it, already designates a code. Returns
    /// [`CodeListError::InvalidName`] if it is empty or has surrounding
    /// whitespace. The registry is unchanged on error.
    pub fn register(&self, name: impl Into<String>) -> Result<&'static CodeValue, CodeListError> {
        let name = name.into();
        self.check_name(&name)?;
        let mut values = self.values.write();
        if Self::conflict(&values, &name).is_some() {
            return Err(self.duplicate(name));
        }
        Ok(self.push(&mut values, name))
    }

    /// Return the code with this name, registering it first if absent.
    ///
    /// Lookup and insertion happen under a single write lock, so two threads
    /// interning the same name always receive the same instance.
    ///
    /// # Errors
    ///
    /// Returns [`CodeListError::InvalidName`] for names that could never be
    /// registered, and [`CodeListError::DuplicateName`] when the identifier
    /// derived from an absent name already designates another code.
    pub fn intern(&self, name: &str) -> Result<&'static CodeValue, CodeListError> {
        self.check_name(name)?;
        let mut values = self.values.write();
        if let Some(existing) = values.iter().copied().find(|v| v.matches(name)) {
            return Ok(existing);
        }
        if Self::conflict(&values, name).is_some() {
            return Err(self.duplicate(name.to_string()));
        }
        Ok(self.push(&mut values, name.to_string()))
    }

    /// Intern a predefined code without name validation.
    ///
    /// Used by [`code_list!`](crate::code_list) for compile-time constant
    /// names.
    #[doc(hidden)]
    pub fn __predefined(&self, name: &'static str) -> &'static CodeValue {
        if let Some(existing) = self.values.read().iter().copied().find(|v| v.name == name) {
            return existing;
        }
        let mut values = self.values.write();
        if let Some(existing) = values.iter().copied().find(|v| v.name == name) {
            return existing;
        }
        self.push(&mut values, name.to_string())
    }

    /// The existing code that `name` or its derived identifier designates.
    fn conflict(values: &[&'static CodeValue], name: &str) -> Option<&'static CodeValue> {
        let identifier = uml_identifier(name);
        values
            .iter()
            .copied()
            .find(|v| v.matches(name) || v.matches(&identifier))
    }

    fn duplicate(&self, name: String) -> CodeListError {
        CodeListError::DuplicateName {
            family: self.family.to_string(),
            name,
        }
    }

    fn check_name(&self, name: &str) -> Result<(), CodeListError> {
        let reason = if name.is_empty() {
            "name must not be empty"
        } else if name.trim() != name {
            "name must not have leading or trailing whitespace"
        } else {
            return Ok(());
        };
        Err(CodeListError::InvalidName {
            family: self.family.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Append a value while the caller holds the write lock.
    fn push(&self, values: &mut Vec<&'static CodeValue>, name: String) -> &'static CodeValue {
        let value: &'static CodeValue = Box::leak(Box::new(CodeValue {
            family: self.family,
            identifier: uml_identifier(&name),
            name,
            ordinal: values.len(),
        }));
        values.push(value);
        tracing::trace!(
            family = self.family,
            name = value.name(),
            ordinal = value.ordinal,
            "registered code"
        );
        value
    }
}

/// Common behavior of typed code-list families.
///
/// Implemented by the newtypes generated with [`code_list!`](crate::code_list).
pub trait CodeListFamily: Copy + Sized + 'static {
    /// Fully-qualified catalog name of the family.
    const QUALIFIED_NAME: &'static str;

    /// The registry backing this family. Touching it registers the
    /// predefined codes.
    fn code_list() -> &'static CodeList;

    /// Wrap a code of this family.
    ///
    /// The code must come from [`Self::code_list`].
    fn from_code(code: &'static CodeValue) -> Self;

    /// The underlying interned code.
    fn code(&self) -> &'static CodeValue;

    /// The code name.
    fn name(&self) -> &'static str {
        self.code().name()
    }

    /// The code ordinal.
    fn ordinal(&self) -> usize {
        self.code().ordinal()
    }

    /// All codes of this family, in ordinal order.
    fn values() -> Vec<Self> {
        Self::code_list()
            .values()
            .into_iter()
            .map(Self::from_code)
            .collect()
    }

    /// Look up a code by name or identifier.
    fn value_of(name: &str) -> Option<Self> {
        Self::code_list().value_of(name).map(Self::from_code)
    }

    /// Look up a code, creating it when absent.
    fn value_of_or_create(name: &str) -> Result<Self, CodeListError> {
        Self::code_list().intern(name).map(Self::from_code)
    }

    /// Add a new code to this family.
    fn register(name: &str) -> Result<Self, CodeListError> {
        Self::code_list().register(name).map(Self::from_code)
    }
}

/// Declare a code-list family.
///
/// Generates a `Copy` newtype over `&'static CodeValue` with one accessor
/// per predefined code, an implementation of [`CodeListFamily`], `Display`,
/// `FromStr` and name-based serde support. The predefined codes are
/// registered in declaration order the first time the family is used.
///
/// ```
/// geoapi_core::code_list! {
///     /// Sides of a coin.
///     pub struct CoinSide in "org.example" {
///         heads => "HEADS",
///         tails => "TAILS",
///     }
/// }
///
/// use geoapi_core::CodeListFamily;
/// assert_eq!(CoinSide::tails().ordinal(), 1);
/// assert_eq!(CoinSide::QUALIFIED_NAME, "org.example.CoinSide");
/// ```
#[macro_export]
macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident in $package:literal {
            $( $(#[$cmeta:meta])* $accessor:ident => $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $ty(&'static $crate::codelist::CodeValue);

        impl $ty {
            $(
                $(#[$cmeta])*
                $vis fn $accessor() -> Self {
                    Self(<Self as $crate::codelist::CodeListFamily>::code_list().__predefined($code))
                }
            )*
        }

        impl $crate::codelist::CodeListFamily for $ty {
            const QUALIFIED_NAME: &'static str = concat!($package, ".", stringify!($ty));

            fn code_list() -> &'static $crate::codelist::CodeList {
                static LIST: ::std::sync::LazyLock<$crate::codelist::CodeList> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::codelist::CodeList::with_predefined(
                            <$ty as $crate::codelist::CodeListFamily>::QUALIFIED_NAME,
                            &[$($code),*],
                        )
                    });
                &LIST
            }

            fn from_code(code: &'static $crate::codelist::CodeValue) -> Self {
                debug_assert_eq!(code.family(), <Self as $crate::codelist::CodeListFamily>::QUALIFIED_NAME);
                Self(code)
            }

            fn code(&self) -> &'static $crate::codelist::CodeValue {
                self.0
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.0.name())
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.0.name())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::CodeListError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::codelist::CodeListFamily>::value_of(s).ok_or_else(|| {
                    $crate::error::CodeListError::UnknownName {
                        family: <Self as $crate::codelist::CodeListFamily>::QUALIFIED_NAME.to_string(),
                        name: s.to_string(),
                    }
                })
            }
        }

        impl $crate::__serde::Serialize for $ty {
            fn serialize<S: $crate::__serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.0.name())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $ty {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                name.parse::<Self>()
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Registering distinct names yields dense ordinals in insertion order.
        #[test]
        fn ordinals_follow_insertion_order(
            names in prop::collection::btree_set("[A-Z]{1,6}(_[A-Z]{1,6}){0,2}", 1..20)
        ) {
            let list = CodeList::new("Prop");
            let names: Vec<String> = names.into_iter().collect();
            for name in &names {
                list.register(name.as_str()).unwrap();
            }
            let values = list.values();
            prop_assert_eq!(values.len(), names.len());
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(v.ordinal(), i);
                prop_assert_eq!(v.name(), names[i].as_str());
                prop_assert!(std::ptr::eq(list.get(i).unwrap(), *v));
            }
        }

        /// A repeated registration never changes the registry length.
        #[test]
        fn duplicate_never_grows(
            names in prop::collection::vec("[A-Z]{1,6}", 1..20),
            pick in any::<prop::sample::Index>()
        ) {
            let list = CodeList::new("PropDup");
            for name in &names {
                let _ = list.register(name.as_str());
            }
            let len = list.len();
            let existing = pick.get(&list.values()).name().to_string();
            prop_assert!(list.register(existing).is_err());
            prop_assert_eq!(list.len(), len);
        }
    }
}
