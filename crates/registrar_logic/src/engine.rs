//! The forward-chaining rule engine.

use std::collections::BTreeSet;

use registrar_catalog::Catalog;
use registrar_foundation::{Bound, CourseId, Error, FacultyId, Result, RoomId};

use crate::atom::Atom;
use crate::rule::{Rule, RuleCategory};

/// Maximum passes over the rule list before forward chaining gives up.
pub const MAX_CHAIN_ITERATIONS: u32 = 100;

/// Result of a forward-chaining run.
///
/// `facts` lists the newly derived atoms in derivation order. When
/// `complete` is false the pass cap was hit while rules were still
/// firing, and further facts might have been derivable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// Newly derived facts, in the order they were derived.
    pub facts: Vec<Atom>,
    /// True if a full pass fired no rule (true fixed point).
    pub complete: bool,
}

impl Derivation {
    /// Returns the derived facts, discarding the wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoundExceeded`] if chaining hit
    /// [`MAX_CHAIN_ITERATIONS`] passes while rules were still firing.
    pub fn require_complete(self) -> Result<Vec<Atom>> {
        if self.complete {
            Ok(self.facts)
        } else {
            Err(Error::BoundExceeded(Bound::ChainIterations {
                limit: MAX_CHAIN_ITERATIONS,
            }))
        }
    }
}

/// A fact base plus an ordered rule list.
///
/// Rules fire in list order within a pass, and facts derived early in a
/// pass are visible to later rules in the same pass, so the outcome of
/// [`forward_chain`](Self::forward_chain) is a deterministic function of
/// rule-list order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleEngine {
    facts: BTreeSet<Atom>,
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Creates an engine with no facts and no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Rule base
    // =========================================================================

    /// Appends a rule to the rule list.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Appends a prerequisite rule: `enrolled(course) → must_complete(prereq)`.
    pub fn add_prerequisite_rule(&mut self, course: &CourseId, prereq: &CourseId) {
        let rule = Rule::new(
            format!("CR_{course}_{prereq}"),
            Atom::new("enrolled", [course.as_str()]),
            Atom::new("must_complete", [prereq.as_str()]),
        )
        .with_category(RuleCategory::Prerequisite);
        self.rules.push(rule);
    }

    /// Appends a teaching rule:
    /// `teaches(faculty, course) → must_use_room(course, room)`.
    pub fn add_teaching_rule(&mut self, faculty: &FacultyId, course: &CourseId, room: &RoomId) {
        let rule = Rule::new(
            format!("FR_{faculty}_{course}"),
            Atom::new("teaches", [faculty.as_str(), course.as_str()]),
            Atom::new("must_use_room", [course.as_str(), room.as_str()]),
        )
        .with_category(RuleCategory::Faculty);
        self.rules.push(rule);
    }

    /// Returns the rule list, in firing order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    // =========================================================================
    // Fact base
    // =========================================================================

    /// Adds a fact. Returns true if it was not already present.
    pub fn add_fact(&mut self, fact: Atom) -> bool {
        self.facts.insert(fact)
    }

    /// Removes a fact. Facts previously derived from it are not retracted.
    pub fn remove_fact(&mut self, fact: &Atom) -> bool {
        self.facts.remove(fact)
    }

    /// Returns true if the atom is in the fact base.
    #[must_use]
    pub fn has_fact(&self, fact: &Atom) -> bool {
        self.facts.contains(fact)
    }

    /// Iterates the fact base in ascending atom order.
    pub fn facts(&self) -> impl Iterator<Item = &Atom> {
        self.facts.iter()
    }

    // =========================================================================
    // Catalog seeding
    // =========================================================================

    /// Adds a prerequisite rule for every (course, prerequisite) edge in
    /// the catalog, in ascending course then prerequisite order.
    pub fn seed_prerequisite_rules(&mut self, catalog: &Catalog) {
        for course in catalog.courses() {
            for prereq in course.prerequisites() {
                self.add_prerequisite_rule(course.id(), prereq);
            }
        }
    }

    /// Adds an `enrolled(course)` fact for every enrollment in the catalog.
    pub fn seed_enrollment_facts(&mut self, catalog: &Catalog) {
        for student in catalog.students() {
            for course in student.enrolled() {
                self.add_fact(Atom::new("enrolled", [course.as_str()]));
            }
        }
    }

    // =========================================================================
    // Inference
    // =========================================================================

    /// Runs forward chaining to a fixed point, capped at
    /// [`MAX_CHAIN_ITERATIONS`] passes.
    ///
    /// Each pass scans the rule list in order; a rule fires when its
    /// antecedent is in the fact base and its consequent is not. Firing
    /// adds the consequent immediately, so later rules in the same pass
    /// see it. Passes repeat while at least one rule fired.
    pub fn forward_chain(&mut self) -> Derivation {
        let mut derived = Vec::new();

        for _ in 0..MAX_CHAIN_ITERATIONS {
            let mut fired = false;

            for rule in &self.rules {
                if self.facts.contains(&rule.antecedent) && !self.facts.contains(&rule.consequent)
                {
                    self.facts.insert(rule.consequent.clone());
                    derived.push(rule.consequent.clone());
                    fired = true;
                }
            }

            if !fired {
                return Derivation {
                    facts: derived,
                    complete: true,
                };
            }
        }

        Derivation {
            facts: derived,
            complete: false,
        }
    }
}
