//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by the GeoAPI crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Malformed constructor input (duplicate code name, wrong number of name
//!   components) is rejected synchronously at construction time. The invalid
//!   object never comes into existence.
//! - Errors carry the offending value and the family or kind it belongs to,
//!   so a failing conformance test reports exactly what was wrong.

use thiserror::Error;

/// Error raised when registering a value in a code list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeListError {
    /// The name, or the identifier derived from it, already designates a
    /// code in this family.
    #[error("code {name:?} is already registered in {family}")]
    DuplicateName {
        /// Family the registration targeted.
        family: String,
        /// Name that collided.
        name: String,
    },

    /// No code with this name exists in the family.
    #[error("no code named {name:?} in {family}")]
    UnknownName {
        /// Family that was searched.
        family: String,
        /// Name that was not found.
        name: String,
    },

    /// The name is not acceptable as a code name.
    #[error("invalid code name {name:?} for {family}: {reason}")]
    InvalidName {
        /// Family the registration targeted.
        family: String,
        /// Rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },
}

/// Error raised when constructing generic names and identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The number of components does not fit the kind of name.
    #[error("{kind} requires {expected} component(s), got {actual}")]
    InvalidComponentCount {
        /// Kind of name being built ("local name", "scoped name").
        kind: &'static str,
        /// Human-readable requirement, e.g. "exactly 1" or "at least 2".
        expected: &'static str,
        /// Number of components supplied.
        actual: usize,
    },

    /// A name component was empty.
    #[error("name component at position {position} is empty")]
    EmptyComponent {
        /// Zero-based position of the empty component.
        position: usize,
    },

    /// An identifier code was empty.
    #[error("identifier code must not be empty")]
    EmptyCode,
}
