//! Inference rules.

use std::fmt;

use crate::atom::Atom;

/// Category tag for a rule, used for grouping when listing a rule base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleCategory {
    /// Derived from a course's prerequisite list.
    Prerequisite,
    /// Derived from a faculty teaching assignment.
    Faculty,
    /// Anything else.
    General,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prerequisite => f.write_str("prerequisite"),
            Self::Faculty => f.write_str("faculty"),
            Self::General => f.write_str("general"),
        }
    }
}

/// A propositional rule: when the antecedent atom is a known fact and the
/// consequent is not, firing the rule adds the consequent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Rule identifier.
    pub id: String,
    /// The atom that must already be a fact.
    pub antecedent: Atom,
    /// The atom added when the rule fires.
    pub consequent: Atom,
    /// Grouping tag.
    pub category: RuleCategory,
}

impl Rule {
    /// Creates a general-category rule.
    #[must_use]
    pub fn new(id: impl Into<String>, antecedent: Atom, consequent: Atom) -> Self {
        Self {
            id: id.into(),
            antecedent,
            consequent,
            category: RuleCategory::General,
        }
    }

    /// Sets the category (builder style).
    #[must_use]
    pub fn with_category(mut self, category: RuleCategory) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] IF {} THEN {}",
            self.id, self.antecedent, self.consequent
        )
    }
}
