//! Prerequisite dependency graphs.
//!
//! This crate derives directed graphs (edge: prerequisite → dependent) from
//! catalog prerequisite sets and answers ordering questions over them:
//!
//! - [`has_cycle`] — is a course's prerequisite closure well-founded?
//! - [`topological_sort`] — one valid linear order, or a truncated order
//!   flagged incomplete when a cycle prevents full ordering.
//! - [`enumerate_sequences`] — every valid linear extension, bounded by a
//!   mandatory maximum length.
//! - [`prerequisite_closure`] / [`course_levels`] — the full direct and
//!   indirect prerequisite set and longest-chain depths.
//!
//! Graphs are built fresh from the catalog per query and never cached, so
//! results always reflect the current catalog state. All traversals use
//! explicit stacks; no algorithm here recurses on the call stack.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cycle;
mod graph;
mod level;
mod sequence;
mod topo;

pub use cycle::has_cycle;
pub use graph::PrereqGraph;
pub use level::{course_level, course_levels, prerequisite_closure};
pub use sequence::enumerate_sequences;
pub use topo::{TopoSort, topological_sort};
