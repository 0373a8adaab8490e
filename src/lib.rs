//! Registrar - Academic prerequisite engine
//!
//! This crate re-exports all layers of the Registrar system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: registrar_advisor    — Eligibility, chain proofs, audits
//! Layer 3: registrar_graph      — Cycles, topological sort, sequences
//!          registrar_logic      — Atoms, rules, forward chaining
//! Layer 2: registrar_relation   — Binary relations, properties, closure
//! Layer 1: registrar_catalog    — Courses, students, faculty, facilities
//! Layer 0: registrar_foundation — Identifiers and errors
//! ```

pub use registrar_advisor as advisor;
pub use registrar_catalog as catalog;
pub use registrar_foundation as foundation;
pub use registrar_graph as graph;
pub use registrar_logic as logic;
pub use registrar_relation as relation;
