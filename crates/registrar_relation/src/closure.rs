//! Transitive closure by fixed-point iteration.

use registrar_foundation::{Bound, Error, Result};

use crate::relation::Relation;

/// Maximum join passes before the closure loop gives up.
pub const MAX_CLOSURE_ITERATIONS: u32 = 100;

/// Result of a transitive-closure computation.
///
/// When `complete` is false the iteration cap was hit before reaching a
/// fixed point and `relation` may be an under-approximation. Callers must
/// treat that as a degraded result, not a correctness guarantee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Closure {
    /// The accumulated relation.
    pub relation: Relation,
    /// True if a full pass added no new pairs.
    pub complete: bool,
}

impl Closure {
    /// Returns the closed relation, discarding the wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoundExceeded`] if the computation hit
    /// [`MAX_CLOSURE_ITERATIONS`] before reaching a fixed point.
    pub fn require_complete(self) -> Result<Relation> {
        if self.complete {
            Ok(self.relation)
        } else {
            Err(Error::BoundExceeded(Bound::ClosureIterations {
                limit: MAX_CLOSURE_ITERATIONS,
            }))
        }
    }
}

impl Relation {
    /// Computes the transitive closure of this relation.
    ///
    /// Iteratively applies the join rule — if `(a, b)` and `(b, c)` are
    /// present, add `(a, c)` — until a full pass adds no pair or
    /// [`MAX_CLOSURE_ITERATIONS`] passes have run. Each pass is quadratic
    /// in relation size, acceptable at enrollment scale.
    ///
    /// Idempotent on complete results:
    /// `r.closure().relation.closure().relation == r.closure().relation`.
    #[must_use]
    pub fn closure(&self) -> Closure {
        let mut current = self.clone();
        let mut iterations = 0;

        loop {
            let mut next = current.clone();
            let mut changed = false;

            for (a, b) in current.iter() {
                for c in current.successors(b) {
                    if !current.contains(a, c) {
                        next.insert(a, c);
                        changed = true;
                    }
                }
            }

            if !changed {
                return Closure {
                    relation: current,
                    complete: true,
                };
            }

            current = next;
            iterations += 1;
            if iterations >= MAX_CLOSURE_ITERATIONS {
                return Closure {
                    relation: current,
                    complete: false,
                };
            }
        }
    }
}
