//! # Generic Names and Identifiers
//!
//! Names of ISO 19103 (`GenericName`, `LocalName`, `ScopedName`) and the
//! ISO 19115 identifier used to name referencing objects.
//!
//! A local name has exactly one component; a scoped name has a scope
//! followed by a tip and therefore at least two. Constructors reject any
//! other component count immediately.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// Default separator between name components.
pub const DEFAULT_SEPARATOR: &str = ".";

fn check_components(components: &[String]) -> Result<(), NameError> {
    match components.iter().position(|c| c.is_empty()) {
        Some(position) => Err(NameError::EmptyComponent { position }),
        None => Ok(()),
    }
}

/// A name with a single component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalName(String);

impl LocalName {
    /// Create a local name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::EmptyComponent`] for an empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        check_components(std::slice::from_ref(&name))?;
        Ok(Self(name))
    }

    /// The single component.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocalName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocalName> for String {
    fn from(value: LocalName) -> Self {
        value.0
    }
}

impl fmt::Display for LocalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A name made of a scope and a tip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScopedName {
    components: Vec<String>,
}

impl ScopedName {
    /// Create a scoped name from its components, head first.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidComponentCount`] for fewer than two
    /// components and [`NameError::EmptyComponent`] for empty components.
    pub fn new<I, S>(components: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.len() < 2 {
            return Err(NameError::InvalidComponentCount {
                kind: "scoped name",
                expected: "at least 2",
                actual: components.len(),
            });
        }
        check_components(&components)?;
        Ok(Self { components })
    }

    /// All components, head first.
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

/// A sequence of identifiers rooted in a namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericName {
    /// Single-component name.
    Local(LocalName),
    /// Multi-component name.
    Scoped(ScopedName),
}

impl GenericName {
    /// Build a name from components: one component gives a local name,
    /// more give a scoped name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidComponentCount`] when no component is
    /// given.
    pub fn from_components<I, S>(components: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut components: Vec<String> = components.into_iter().map(Into::into).collect();
        match components.len() {
            0 => Err(NameError::InvalidComponentCount {
                kind: "generic name",
                expected: "at least 1",
                actual: 0,
            }),
            1 => {
                let single = components.remove(0);
                Ok(Self::Local(LocalName::new(single)?))
            }
            _ => Ok(Self::Scoped(ScopedName::new(components)?)),
        }
    }

    /// Parse `text` by splitting on `separator`.
    pub fn parse(text: &str, separator: &str) -> Result<Self, NameError> {
        Self::from_components(text.split(separator))
    }

    /// Components, head first.
    pub fn components(&self) -> &[String] {
        match self {
            Self::Local(local) => std::slice::from_ref(&local.0),
            Self::Scoped(scoped) => &scoped.components,
        }
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components().len()
    }

    /// The first component.
    pub fn head(&self) -> &str {
        self.components().first().map(String::as_str).unwrap_or_default()
    }

    /// The last component.
    pub fn tip(&self) -> &str {
        self.components().last().map(String::as_str).unwrap_or_default()
    }

    /// Every component but the tip, or `None` for a local name.
    pub fn scope(&self) -> Option<GenericName> {
        match self {
            Self::Local(_) => None,
            Self::Scoped(scoped) => {
                let head = &scoped.components[..scoped.components.len() - 1];
                Self::from_components(head.iter().cloned()).ok()
            }
        }
    }

    /// Join all components with `separator`.
    pub fn to_fully_qualified(&self, separator: &str) -> String {
        self.components().join(separator)
    }
}

impl fmt::Display for GenericName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fully_qualified(DEFAULT_SEPARATOR))
    }
}

/// Value uniquely identifying an object within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Alphanumeric value identifying an instance in the namespace.
    pub code: String,
    /// Namespace of the code, e.g. `"EPSG"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_space: Option<String>,
    /// Version of the namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Identifier {
    /// Create an identifier without namespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::EmptyCode`] if `code` is empty.
    pub fn new(code: impl Into<String>) -> Result<Self, NameError> {
        let code = code.into();
        if code.is_empty() {
            return Err(NameError::EmptyCode);
        }
        Ok(Self {
            code,
            code_space: None,
            version: None,
        })
    }

    /// Set the namespace of this identifier.
    pub fn with_code_space(mut self, code_space: impl Into<String>) -> Self {
        self.code_space = Some(code_space.into());
        self
    }

    /// Set the namespace version of this identifier.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code_space {
            Some(space) => write!(f, "{space}:{}", self.code),
            None => f.write_str(&self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        let name = GenericName::parse("AxisDirection", ".").unwrap();
        assert!(matches!(name, GenericName::Local(_)));
        assert_eq!(name.depth(), 1);
        assert_eq!(name.head(), "AxisDirection");
        assert_eq!(name.tip(), "AxisDirection");
        assert!(name.scope().is_none());
    }

    #[test]
    fn test_scoped_name() {
        let name = GenericName::parse("org.opengis.referencing.cs.AxisDirection", ".").unwrap();
        assert_eq!(name.depth(), 5);
        assert_eq!(name.head(), "org");
        assert_eq!(name.tip(), "AxisDirection");
        assert_eq!(name.scope().unwrap().to_string(), "org.opengis.referencing.cs");
        assert_eq!(name.to_fully_qualified("/"), "org/opengis/referencing/cs/AxisDirection");
    }

    #[test]
    fn test_scoped_name_requires_two_components() {
        let err = ScopedName::new(["alone"]).unwrap_err();
        assert_eq!(
            err,
            NameError::InvalidComponentCount {
                kind: "scoped name",
                expected: "at least 2",
                actual: 1,
            }
        );
    }

    #[test]
    fn test_empty_components_rejected() {
        assert_eq!(
            GenericName::parse("org..opengis", ".").unwrap_err(),
            NameError::EmptyComponent { position: 1 }
        );
        assert!(GenericName::parse("", ".").is_err());
        assert!(matches!(
            GenericName::from_components(Vec::<String>::new()),
            Err(NameError::InvalidComponentCount { actual: 0, .. })
        ));
    }

    #[test]
    fn test_identifier() {
        let id = Identifier::new("4326").unwrap().with_code_space("EPSG").with_version("9.8");
        assert_eq!(id.to_string(), "EPSG:4326");
        assert_eq!(Identifier::new("").unwrap_err(), NameError::EmptyCode);
    }

    #[test]
    fn test_local_name_serde_rejects_empty() {
        let ok: LocalName = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(ok.as_str(), "x");
        assert!(serde_json::from_str::<LocalName>("\"\"").is_err());
    }
}
