//! Integration tests for Layer 2: Relation
//!
//! Tests relation algebra, composition, the capped transitive closure,
//! and the catalog-derived relation builders.

mod builders;
mod props;
