//! The relation pair-set and its algebraic predicates.

use std::fmt;

use im::{OrdMap, OrdSet};

/// A binary relation: a set of ordered `(String, String)` pairs.
///
/// Domain-agnostic — the same type carries student→course enrollment,
/// faculty→course assignment, course→prerequisite edges, and anything
/// derived from them by composition or closure. Set semantics (no
/// duplicate pairs), sorted iteration, O(1) clone via structural sharing.
/// Pairs are stored as a source → successor-set map, so membership probes
/// and successor scans borrow their arguments and never allocate.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    pairs: OrdMap<String, OrdSet<String>>,
    len: usize,
}

impl Relation {
    /// Creates an empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair. Duplicate insertions are no-ops.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let successors = self.pairs.entry(from.into()).or_insert_with(OrdSet::new);
        if successors.insert(to.into()).is_none() {
            self.len += 1;
        }
    }

    /// Returns true if the pair `(from, to)` is in the relation.
    #[must_use]
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.pairs
            .get(from)
            .is_some_and(|successors| successors.contains(to))
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the relation holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates pairs in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().flat_map(|(from, successors)| {
            successors.iter().map(move |to| (from.as_str(), to.as_str()))
        })
    }

    /// Iterates the elements `from` relates to, in ascending order.
    ///
    /// Empty for a source with no outgoing pairs.
    pub fn successors(&self, from: &str) -> impl Iterator<Item = &str> {
        self.pairs
            .get(from)
            .into_iter()
            .flat_map(|successors| successors.iter().map(String::as_str))
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns true if every element of `domain` relates to itself.
    ///
    /// An empty domain is vacuously reflexive.
    pub fn is_reflexive<S: AsRef<str>>(&self, domain: impl IntoIterator<Item = S>) -> bool {
        domain
            .into_iter()
            .all(|elem| self.contains(elem.as_ref(), elem.as_ref()))
    }

    /// Returns true if `(a, b)` present implies `(b, a)` present.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(a, b)| self.contains(b, a))
    }

    /// Returns true if no distinct `a`, `b` have both `(a, b)` and `(b, a)`.
    #[must_use]
    pub fn is_antisymmetric(&self) -> bool {
        self.iter().all(|(a, b)| a == b || !self.contains(b, a))
    }

    /// Returns true if `(a, b)` and `(b, c)` present implies `(a, c)` present.
    ///
    /// This is a single-pass pairwise check, not a closure computation.
    #[must_use]
    pub fn is_transitive(&self) -> bool {
        self.iter()
            .all(|(a, b)| self.successors(b).all(|d| self.contains(a, d)))
    }

    /// Returns true if the relation is reflexive over `domain`, symmetric,
    /// and transitive.
    pub fn is_equivalence<S: AsRef<str>>(&self, domain: impl IntoIterator<Item = S>) -> bool {
        self.is_reflexive(domain) && self.is_symmetric() && self.is_transitive()
    }

    /// Returns true if the relation is reflexive over `domain`,
    /// antisymmetric, and transitive.
    pub fn is_partial_order<S: AsRef<str>>(&self, domain: impl IntoIterator<Item = S>) -> bool {
        self.is_reflexive(domain) && self.is_antisymmetric() && self.is_transitive()
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Composes this relation with another:
    /// `{(a, c) : exists b with (a, b) in self and (b, c) in other}`.
    ///
    /// Pure; neither input is modified. Associative when domains align.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for (a, b) in self.iter() {
            for c in other.successors(b) {
                result.insert(a, c);
            }
        }
        result
    }

    /// Returns a copy with `(x, x)` added for every element of `domain`.
    pub fn with_reflexive_pairs<S: AsRef<str>>(
        &self,
        domain: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut result = self.clone();
        for elem in domain {
            result.insert(elem.as_ref(), elem.as_ref());
        }
        result
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<(String, String)> for Relation {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut relation = Self::new();
        for (from, to) in iter {
            relation.insert(from, to);
        }
        relation
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Relation {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut relation = Self::new();
        for (from, to) in iter {
            relation.insert(from, to);
        }
        relation
    }
}
