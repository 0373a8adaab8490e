//! Propositional rule inference for Registrar.
//!
//! Facts are ground [`Atom`]s — normalized `predicate(arg, ...)` strings.
//! [`Rule`]s pair one antecedent atom with one consequent atom. The
//! [`RuleEngine`] holds a fact base and an ordered rule list and derives
//! new facts by forward chaining to a fixed point (capped).
//!
//! Matching is exact string equality of normalized atoms. There is no
//! unification and no truth maintenance: removing a fact never retracts
//! facts previously derived from it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod atom;
mod engine;
mod rule;

pub use atom::Atom;
pub use engine::{Derivation, MAX_CHAIN_ITERATIONS, RuleEngine};
pub use rule::{Rule, RuleCategory};
