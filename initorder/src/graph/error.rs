//! Error types for graph operations
//!
//! Insertion and ordering fail for different reasons and at different times,
//! so each has its own error type: [`AddElementError`] is a validation failure
//! of the caller's input, [`OrderError`] is a structural problem with the
//! graph's current contents. Both carry the offending identifiers as fields.

use super::ElementId;
use thiserror::Error;

/// Result type for [`Graph::add_element`](super::Graph::add_element)
pub type AddResult<T> = Result<T, AddElementError>;

/// Result type for [`Graph::init_order`](super::Graph::init_order)
pub type OrderResult<T> = Result<T, OrderError>;

/// Errors returned when adding an element to a graph
///
/// The graph is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum AddElementError {
    /// The element identifier was the empty string
    #[error("Element identifier is empty")]
    EmptyIdentifier,

    /// One of the declared dependency identifiers was the empty string
    #[error("Element '{element}' declares an empty dependency identifier")]
    EmptyDependencyIdentifier {
        /// The element whose dependency list was rejected
        element: ElementId,
    },

    /// An element with the same identifier is already in the graph
    #[error("The element '{element}' has already been added")]
    AlreadyAdded {
        /// The duplicate identifier
        element: ElementId,
    },
}

impl AddElementError {
    /// Creates an empty dependency identifier error
    pub fn empty_dependency(element: ElementId) -> Self {
        Self::EmptyDependencyIdentifier { element }
    }

    /// Creates an already added error
    pub fn already_added(element: ElementId) -> Self {
        Self::AlreadyAdded { element }
    }
}

/// Errors returned when no initialization order exists
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum OrderError {
    /// A dependency cycle was found
    ///
    /// `element` is the element whose re-entry closed the cycle during the
    /// depth-first walk. Which member of the cycle that is depends on
    /// insertion and declaration order: it is stable for a given graph but
    /// is not necessarily the smallest or first-added member.
    #[error("Element '{element}' is part of the circle: {}", format_path(.path))]
    CircleDetected {
        /// The element that was reached again while still in progress
        element: ElementId,
        /// The in-progress chain, starting at `element`, whose last entry
        /// depends back on `element`
        path: Vec<ElementId>,
    },

    /// A declared dependency was never added to the graph
    #[error("Dependency '{dependency}' is missing (required by '{required_by}')")]
    MissingDependency {
        /// The identifier that is not in the graph
        dependency: ElementId,
        /// The element that declared it
        required_by: ElementId,
    },
}

impl OrderError {
    /// Creates a cycle detected error
    ///
    /// `element` is the re-entered element and `rest` the chain below it on
    /// the active path, so the stored path always starts with `element`.
    pub fn circle(element: ElementId, rest: impl IntoIterator<Item = ElementId>) -> Self {
        let mut path = vec![element.clone()];
        path.extend(rest);
        Self::CircleDetected { element, path }
    }

    /// Creates a missing dependency error
    pub fn missing_dependency(dependency: ElementId, required_by: ElementId) -> Self {
        Self::MissingDependency {
            dependency,
            required_by,
        }
    }

    /// Returns the identifier the error is about
    ///
    /// For a cycle this is the re-entered element, for a missing dependency
    /// the missing identifier.
    pub fn element(&self) -> &ElementId {
        match self {
            Self::CircleDetected { element, .. } => element,
            Self::MissingDependency { dependency, .. } => dependency,
        }
    }
}

fn format_path(path: &[ElementId]) -> String {
    let mut out = String::new();
    for id in path {
        out.push_str(id.as_str());
        out.push_str(" -> ");
    }
    if let Some(first) = path.first() {
        out.push_str(first.as_str());
    }
    out
}
