//! Dependency graph and initialization order
//!
//! This module records named elements with the identifiers they depend on and
//! computes an order in which they can be initialized:
//!
//! - Append-only element insertion with input validation
//! - Forward references between elements, resolved lazily
//! - Depth-first ordering with cycle and missing-dependency detection
//!
//! # Design Principles
//!
//! The graph representation is hidden behind [`Graph`]; callers only see
//! identifiers, dependency slices and typed errors. Ordering never mutates
//! the graph, so it can be requested as often as needed.

mod dependency_graph;
mod element_id;
mod error;
mod order;

pub use dependency_graph::Graph;
pub use element_id::ElementId;
pub use error::{AddElementError, AddResult, OrderError, OrderResult};
