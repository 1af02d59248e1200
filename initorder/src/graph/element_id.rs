//! Element identifier type
//!
//! An [`ElementId`] names one element of a dependency graph. It is a thin
//! owned wrapper over a `String` so that identifiers read as their own type in
//! signatures and error payloads, while lookups still accept plain `&str`
//! through [`Borrow<str>`].
//!
//! The type itself accepts any string, including the empty one. Rejecting
//! empty identifiers is the graph's job, so that the rejection is reported as
//! a typed error at insertion time instead of a panic at construction time.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of an element in a [`Graph`](super::Graph)
///
/// # Examples
///
/// ```
/// use initorder::ElementId;
///
/// let id = ElementId::new("database");
/// assert_eq!(id.as_str(), "database");
/// assert_eq!(id, "database");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElementId(String);

impl ElementId {
    /// Creates a new identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the identifier, returning the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq of ElementId agree with those of str, which makes this sound
// for HashMap lookups by &str.
impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for ElementId {
    fn from(s: &String) -> Self {
        Self::new(s.as_str())
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

impl From<ElementId> for String {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
