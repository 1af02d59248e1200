use crate::graph::{AddElementError, OrderError};
use thiserror::Error;

/// Crate-wide error type.
///
/// Wraps the errors of both graph operations so that a caller populating a
/// graph and then ordering it can use `?` on both in one function.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Adding an element was rejected.
    #[error("invalid element: {0}")]
    AddElement(#[from] AddElementError),

    /// No initialization order exists.
    #[error("no initialization order: {0}")]
    Order(#[from] OrderError),
}

pub type Result<T> = std::result::Result<T, Error>;
