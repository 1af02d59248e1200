//! initorder: dependency-ordered initialization for Rust
//!
//! `initorder` records named elements together with the elements they depend
//! on, and computes an order in which they can be initialized so that every
//! element comes after all of its dependencies. It is meant as the resolution
//! kernel inside larger systems: module loaders, plugin bootstrappers, build
//! steps.
//!
//! # Features
//!
//! - **Forward references**: dependencies may name elements added later
//! - **Deterministic order**: fixed by insertion order and declaration order
//! - **Typed diagnostics**: cycles and missing dependencies name the offending
//!   identifiers as fields, not just in a message
//! - **No recursion limit**: the depth-first walk keeps its own stack
//!
//! # Quick Start
//!
//! ```
//! use initorder::{Graph, OrderError};
//!
//! let mut graph = Graph::new();
//! graph.add_element("http", ["router", "config"])?;
//! graph.add_element("router", ["config"])?;
//! graph.add_element("config", Vec::<&str>::new())?;
//!
//! assert_eq!(graph.init_order()?, ["config", "router", "http"]);
//!
//! graph.add_element("metrics", ["exporter"])?;
//! match graph.init_order() {
//!     Err(OrderError::MissingDependency { dependency, required_by }) => {
//!         assert_eq!(dependency, "exporter");
//!         assert_eq!(required_by, "metrics");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Ok::<(), initorder::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`graph`]: the element store and the order generator
//! - [`Error`]: crate-wide error wrapping both operations' errors
//!
//! # Logging
//!
//! Insertions are traced at `TRACE` and order results at `DEBUG` through
//! [`tracing`]. The crate never installs a subscriber.
//!
//! # Cargo features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ElementId`] and the error types

pub mod error;
pub mod graph;

pub use error::{Error, Result};

pub use graph::{AddElementError, AddResult, ElementId, Graph, OrderError, OrderResult};
