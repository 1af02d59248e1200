//! Initialization order generation
//!
//! Produces a linear order of all elements in which every element comes after
//! each of its dependencies, or explains why no such order exists.
//!
//! # Algorithm
//!
//! Depth-first post-order traversal with three-state marking:
//! - Unvisited: no entry in the marker map
//! - In progress: on the current path, `Mark::InProgress(depth)`
//! - Done: already appended to the output, `Mark::Done`
//!
//! Roots are taken in insertion order and dependencies in declaration order,
//! so the result is fully determined by the order of `add_element` calls.
//! Reaching an in-progress element again means a cycle; reaching an
//! identifier that was never added means a missing dependency. Either aborts
//! the whole call.
//!
//! The walk uses an explicit stack of frames instead of recursion, so long
//! dependency chains cannot overflow the call stack. Every element is pushed
//! once and every edge is followed once: O(V + E).

use super::error::{OrderError, OrderResult};
use super::{ElementId, Graph};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active path, at this stack depth
    InProgress(usize),
    Done,
}

/// One element on the active path and the next dependency to look at
struct Frame<'g> {
    id: &'g ElementId,
    dependencies: &'g [ElementId],
    next: usize,
}

impl Graph {
    /// Returns an order in which all elements can be safely initialized
    ///
    /// Every element appears exactly once, after all of its dependencies.
    /// The graph is only read, so repeated calls on an unchanged graph
    /// return the same order. An empty graph yields an empty order.
    ///
    /// # Errors
    ///
    /// - [`OrderError::CircleDetected`] if the dependencies form a cycle.
    ///   The reported element is the one reached a second time while still
    ///   in progress, which depends on insertion and declaration order.
    /// - [`OrderError::MissingDependency`] if a dependency was never added.
    ///
    /// Only the first problem met during the walk is reported.
    ///
    /// # Example
    ///
    /// ```
    /// use initorder::{Graph, OrderError};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_element("x", ["y"]).unwrap();
    /// graph.add_element("y", ["x"]).unwrap();
    ///
    /// assert!(matches!(
    ///     graph.init_order(),
    ///     Err(OrderError::CircleDetected { .. })
    /// ));
    /// ```
    pub fn init_order(&self) -> OrderResult<Vec<ElementId>> {
        match resolve(self) {
            Ok(order) => {
                debug!(elements = order.len(), "Computed initialization order");
                Ok(order)
            }
            Err(error) => {
                debug!(%error, "No initialization order");
                Err(error)
            }
        }
    }

    /// Checks that an initialization order exists
    ///
    /// Same verdict as [`Graph::init_order`], with the order discarded.
    pub fn validate(&self) -> OrderResult<()> {
        self.init_order().map(|_| ())
    }
}

fn resolve(graph: &Graph) -> OrderResult<Vec<ElementId>> {
    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
    let mut order = Vec::with_capacity(graph.len());
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for root in graph.elements() {
        if marks.contains_key(root.as_str()) {
            continue;
        }
        let dependencies = graph.dependencies(root.as_str()).unwrap_or_default();
        marks.insert(root.as_str(), Mark::InProgress(0));
        stack.push(Frame {
            id: root,
            dependencies,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let parent = frame.id;
            let dependencies = frame.dependencies;

            let Some(dep) = dependencies.get(frame.next) else {
                // All dependencies placed
                stack.pop();
                marks.insert(parent.as_str(), Mark::Done);
                order.push(parent.clone());
                continue;
            };
            frame.next += 1;

            match marks.get(dep.as_str()).copied() {
                Some(Mark::Done) => {}
                Some(Mark::InProgress(depth)) => {
                    let rest = stack[depth + 1..].iter().map(|f| f.id.clone());
                    return Err(OrderError::circle(dep.clone(), rest));
                }
                None => {
                    let Some(dep_dependencies) = graph.dependencies(dep.as_str()) else {
                        return Err(OrderError::missing_dependency(dep.clone(), parent.clone()));
                    };
                    marks.insert(dep.as_str(), Mark::InProgress(stack.len()));
                    stack.push(Frame {
                        id: dep,
                        dependencies: dep_dependencies,
                        next: 0,
                    });
                }
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn ids(order: &[ElementId]) -> Vec<&str> {
        order.iter().map(ElementId::as_str).collect()
    }

    #[test]
    fn test_empty_graph_order() {
        let graph = Graph::new();
        assert_eq!(graph.init_order().unwrap(), Vec::<ElementId>::new());
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_single_element() {
        let mut graph = Graph::new();
        graph.add_element("a", NONE).unwrap();
        assert_eq!(ids(&graph.init_order().unwrap()), vec!["a"]);
    }

    #[test]
    fn test_init_order_linear() {
        let mut graph = Graph::new();
        graph.add_element("a", NONE).unwrap();
        graph.add_element("b", ["a"]).unwrap();
        graph.add_element("c", ["a", "b"]).unwrap();

        assert_eq!(ids(&graph.init_order().unwrap()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_init_order_reverse_insertion() {
        let mut graph = Graph::new();
        graph.add_element("c", ["b"]).unwrap();
        graph.add_element("b", ["a"]).unwrap();
        graph.add_element("a", NONE).unwrap();

        assert_eq!(ids(&graph.init_order().unwrap()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_init_order_diamond() {
        let mut graph = Graph::new();
        graph.add_element("a", NONE).unwrap();
        graph.add_element("b", ["a"]).unwrap();
        graph.add_element("c", ["a"]).unwrap();
        graph.add_element("d", ["b", "c"]).unwrap();

        let order = graph.init_order().unwrap();
        assert_eq!(order[0], "a");
        assert_eq!(order[3], "d");
        assert_eq!(ids(&order), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let mut graph = Graph::new();
        graph.add_element("app", ["net", "disk", "log"]).unwrap();
        graph.add_element("log", NONE).unwrap();
        graph.add_element("disk", NONE).unwrap();
        graph.add_element("net", NONE).unwrap();

        assert_eq!(
            ids(&graph.init_order().unwrap()),
            vec!["net", "disk", "log", "app"]
        );
    }

    #[test]
    fn test_self_cycle() {
        let mut graph = Graph::new();
        graph.add_element("a", ["a"]).unwrap();

        let err = graph.init_order().unwrap_err();
        assert_eq!(err, OrderError::circle("a".into(), []));
    }

    #[test]
    fn test_mutual_cycle_reports_reentered_element() {
        let mut graph = Graph::new();
        graph.add_element("x", ["y"]).unwrap();
        graph.add_element("y", ["x"]).unwrap();

        match graph.init_order() {
            Err(OrderError::CircleDetected { element, path }) => {
                assert_eq!(element, "x");
                assert_eq!(ids(&path), vec!["x", "y"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_below_acyclic_prefix() {
        let mut graph = Graph::new();
        graph.add_element("root", ["a"]).unwrap();
        graph.add_element("a", ["b"]).unwrap();
        graph.add_element("b", ["c"]).unwrap();
        graph.add_element("c", ["a"]).unwrap();

        match graph.init_order() {
            Err(OrderError::CircleDetected { element, path }) => {
                assert_eq!(element, "a");
                assert_eq!(ids(&path), vec!["a", "b", "c"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dependency() {
        let mut graph = Graph::new();
        graph.add_element("a", ["z"]).unwrap();

        let err = graph.init_order().unwrap_err();
        assert_eq!(
            err,
            OrderError::missing_dependency("z".into(), "a".into())
        );
        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_first_problem_wins() {
        let mut graph = Graph::new();
        graph.add_element("a", ["missing", "a"]).unwrap();

        assert!(matches!(
            graph.init_order(),
            Err(OrderError::MissingDependency { .. })
        ));

        let mut graph = Graph::new();
        graph.add_element("a", ["a", "missing"]).unwrap();

        assert!(matches!(
            graph.init_order(),
            Err(OrderError::CircleDetected { .. })
        ));
    }

    #[test]
    fn test_done_dependency_is_not_a_cycle() {
        // "b" is reached twice, the second time already done
        let mut graph = Graph::new();
        graph.add_element("a", ["b", "c"]).unwrap();
        graph.add_element("b", NONE).unwrap();
        graph.add_element("c", ["b"]).unwrap();

        assert_eq!(ids(&graph.init_order().unwrap()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_repeated_dependency() {
        let mut graph = Graph::new();
        graph.add_element("a", ["b", "b"]).unwrap();
        graph.add_element("b", NONE).unwrap();

        assert_eq!(ids(&graph.init_order().unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn test_init_order_is_repeatable() {
        let mut graph = Graph::new();
        graph.add_element("d", ["b", "c"]).unwrap();
        graph.add_element("c", ["a"]).unwrap();
        graph.add_element("b", ["a"]).unwrap();
        graph.add_element("a", NONE).unwrap();

        let first = graph.init_order().unwrap();
        let second = graph.init_order().unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.len(), 4);
    }
}
