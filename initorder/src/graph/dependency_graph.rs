//! Graph - append-only store of elements and their declared dependencies
//!
//! The store records, per element, the ordered list of identifiers it depends
//! on. It deliberately does not resolve those identifiers when an element is
//! added: forward references are legal, and dangling references or cycles are
//! only reported when an order is requested (see [`Graph::init_order`]).
//!
//! # Design
//!
//! The graph keeps two structures:
//! - `insertion_order`: identifiers in the order they were added, which fixes
//!   the traversal start order and therefore the output order
//! - `dependencies`: identifier to declared dependency list, which doubles as
//!   the O(1) membership check used to reject duplicates
//!
//! # Concurrency
//!
//! There is no internal locking. Mutation takes `&mut self` and ordering takes
//! `&self`, so any number of concurrent `init_order` calls on a shared graph
//! are fine, and callers that need to add elements from several threads must
//! serialize access themselves (for example behind a `Mutex<Graph>`).

use super::error::{AddElementError, AddResult};
use super::ElementId;
use std::collections::HashMap;
use tracing::trace;

/// A dependency graph of named elements
///
/// # Example
///
/// ```
/// use initorder::Graph;
///
/// let mut graph = Graph::new();
///
/// graph.add_element("config", ["logger"]).unwrap(); // forward reference
/// graph.add_element("logger", Vec::<&str>::new()).unwrap();
/// graph.add_element("database", ["config", "logger"]).unwrap();
///
/// let order = graph.init_order().unwrap();
/// assert_eq!(order, ["logger", "config", "database"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Declared dependencies, keyed by element
    dependencies: HashMap<ElementId, Vec<ElementId>>,
    /// Insertion order for deterministic traversal
    insertion_order: Vec<ElementId>,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self {
            dependencies: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dependencies: HashMap::with_capacity(capacity),
            insertion_order: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the graph
    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    /// Returns true if the graph has no elements
    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Adds an element together with the identifiers it depends on
    ///
    /// Dependencies are kept in the given order; that order decides which
    /// dependency is initialized first when several are unconstrained. They
    /// do not need to be in the graph yet.
    ///
    /// Returns an error, leaving the graph unchanged, if:
    /// - `id` is empty
    /// - any dependency identifier is empty
    /// - an element with the same `id` was already added
    pub fn add_element<I>(&mut self, id: impl Into<ElementId>, dependencies: I) -> AddResult<()>
    where
        I: IntoIterator,
        I::Item: Into<ElementId>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(AddElementError::EmptyIdentifier);
        }

        let dependencies: Vec<ElementId> = dependencies.into_iter().map(Into::into).collect();
        if dependencies.iter().any(ElementId::is_empty) {
            return Err(AddElementError::empty_dependency(id));
        }

        if self.dependencies.contains_key(&id) {
            return Err(AddElementError::already_added(id));
        }

        trace!(
            element = %id,
            dependencies = dependencies.len(),
            "Adding element to dependency graph"
        );

        self.insertion_order.push(id.clone());
        self.dependencies.insert(id, dependencies);
        Ok(())
    }

    /// Returns true if an element with this identifier was added
    pub fn contains(&self, id: &str) -> bool {
        self.dependencies.contains_key(id)
    }

    /// Returns the declared dependencies of an element, in declaration order
    pub fn dependencies(&self, id: &str) -> Option<&[ElementId]> {
        self.dependencies.get(id).map(Vec::as_slice)
    }

    /// Returns an iterator over all element identifiers in insertion order
    pub fn elements(&self) -> impl Iterator<Item = &ElementId> {
        self.insertion_order.iter()
    }

    /// Returns the elements that declare `id` as a dependency
    ///
    /// Results are in insertion order. `id` does not need to be in the graph,
    /// which makes this useful for finding who refers to a missing element.
    pub fn dependents(&self, id: &str) -> Vec<ElementId> {
        self.insertion_order
            .iter()
            .filter(|element| {
                self.dependencies
                    .get(element.as_str())
                    .is_some_and(|deps| deps.iter().any(|dep| dep == id))
            })
            .cloned()
            .collect()
    }

    /// Returns every `(element, dependency)` pair whose dependency is not in
    /// the graph
    ///
    /// Unlike [`Graph::init_order`], which stops at the first dangling
    /// reference, this lists all of them, in insertion and declaration order.
    pub fn missing_dependencies(&self) -> Vec<(ElementId, ElementId)> {
        let mut missing = Vec::new();
        for element in &self.insertion_order {
            let Some(deps) = self.dependencies.get(element.as_str()) else {
                continue;
            };
            for dep in deps {
                if !self.dependencies.contains_key(dep) {
                    missing.push((element.clone(), dep.clone()));
                }
            }
        }
        missing
    }
}
