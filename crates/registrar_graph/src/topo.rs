//! Topological ordering via Kahn's algorithm.

use std::collections::BTreeSet;

use registrar_catalog::Catalog;
use registrar_foundation::CourseId;

use crate::graph::PrereqGraph;

/// Result of a topological sort.
///
/// When `complete` is false the given set is not a DAG; `order` holds the
/// partial ordering produced before the cycle blocked progress. Callers
/// decide how to react — the sorter reports failure rather than guessing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopoSort {
    /// Courses in an order where every in-set prerequisite precedes its
    /// dependents.
    pub order: Vec<CourseId>,
    /// True if every node of the set was ordered.
    pub complete: bool,
}

/// Produces one valid linear order of `ids` under the catalog's
/// prerequisite edges (edges leaving the set are ignored).
///
/// Kahn's algorithm with an eligibility stack: among currently eligible
/// (zero in-degree) nodes, the most recently eligible fires first, giving
/// a depth-first-flavored order. The stack is seeded in ascending
/// identifier order, so the result is a deterministic function of the
/// catalog and the set. Callers wanting a canonical order should re-sort
/// ties lexicographically themselves.
#[must_use]
pub fn topological_sort(catalog: &Catalog, ids: &BTreeSet<CourseId>) -> TopoSort {
    let graph = PrereqGraph::restricted(catalog, ids);
    let mut in_degrees = graph.in_degrees();

    let mut eligible: Vec<CourseId> = in_degrees
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(id, _)| id.clone())
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(current) = eligible.pop() {
        for dependent in graph.dependents(&current) {
            if let Some(degree) = in_degrees.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    eligible.push(dependent.clone());
                }
            }
        }
        order.push(current);
    }

    let complete = order.len() == graph.node_count();
    TopoSort { order, complete }
}
