//! Relations over entity identifiers.
//!
//! A [`Relation`] is a set of ordered identifier pairs. This crate provides
//! the algebraic predicates over relations (reflexivity, symmetry,
//! antisymmetry, transitivity, partial order), relation composition, the
//! capped fixed-point [transitive closure](Relation::closure), and builders
//! that derive the standard relations from a catalog snapshot.
//!
//! All operations are pure: composition and closure return new relations
//! and never mutate their inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod build;
mod closure;
mod relation;

pub use build::{enrollment_relation, prerequisite_relation, teaching_relation};
pub use closure::{Closure, MAX_CLOSURE_ITERATIONS};
pub use relation::Relation;
