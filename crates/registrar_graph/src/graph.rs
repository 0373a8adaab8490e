//! Prerequisite graph construction.

use std::collections::{BTreeMap, BTreeSet};

use registrar_catalog::Catalog;
use registrar_foundation::CourseId;

/// A directed prerequisite graph: an edge from course P to course C means
/// P must be completed before C.
///
/// Built fresh from a catalog snapshot per query; holds owned copies of
/// the identifiers and no reference back into the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrereqGraph {
    nodes: BTreeSet<CourseId>,
    /// prerequisite → dependents, adjacency in ascending dependent order.
    edges: BTreeMap<CourseId, Vec<CourseId>>,
    edge_count: usize,
}

impl PrereqGraph {
    /// Builds the graph over every course in the catalog.
    ///
    /// Nodes include identifiers referenced only as prerequisites, even
    /// when no course record exists for them.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut graph = Self::default();
        for course in catalog.courses() {
            graph.nodes.insert(course.id().clone());
            for prereq in course.prerequisites() {
                graph.nodes.insert(prereq.clone());
                graph.add_edge(prereq.clone(), course.id().clone());
            }
        }
        graph
    }

    /// Builds the graph restricted to `ids`.
    ///
    /// Identifiers absent from the catalog are silently excluded, and
    /// edges touching courses outside the set are omitted.
    #[must_use]
    pub fn restricted(catalog: &Catalog, ids: &BTreeSet<CourseId>) -> Self {
        let mut graph = Self::default();
        for id in ids {
            if catalog.course(id).is_some() {
                graph.nodes.insert(id.clone());
            }
        }
        for id in &graph.nodes.clone() {
            let Some(course) = catalog.course(id) else {
                continue;
            };
            for prereq in course.prerequisites() {
                if graph.nodes.contains(prereq) {
                    graph.add_edge(prereq.clone(), id.clone());
                }
            }
        }
        graph
    }

    fn add_edge(&mut self, prereq: CourseId, dependent: CourseId) {
        self.edges.entry(prereq).or_default().push(dependent);
        self.edge_count += 1;
    }

    /// Iterates nodes in ascending identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &CourseId> {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &CourseId) -> bool {
        self.nodes.contains(id)
    }

    /// Returns the courses that list `prereq` as a direct prerequisite.
    #[must_use]
    pub fn dependents(&self, prereq: &CourseId) -> &[CourseId] {
        self.edges.get(prereq).map_or(&[], Vec::as_slice)
    }

    /// Computes the in-degree (number of in-set prerequisites) per node.
    #[must_use]
    pub fn in_degrees(&self) -> BTreeMap<CourseId, usize> {
        let mut degrees: BTreeMap<CourseId, usize> =
            self.nodes.iter().map(|id| (id.clone(), 0)).collect();
        for dependents in self.edges.values() {
            for dependent in dependents {
                if let Some(degree) = degrees.get_mut(dependent) {
                    *degree += 1;
                }
            }
        }
        degrees
    }
}
