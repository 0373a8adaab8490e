//! Course records.

use std::collections::BTreeSet;

use registrar_foundation::CourseId;

/// A course in the catalog.
///
/// The prerequisite set defines the edges of the prerequisite graph: each
/// member must be completed before this course can be taken. The set is
/// sorted and deduplicated by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    id: CourseId,
    name: String,
    credits: u32,
    prerequisites: BTreeSet<CourseId>,
}

impl Course {
    /// Creates a course with no prerequisites.
    #[must_use]
    pub fn new(id: impl Into<CourseId>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
            prerequisites: BTreeSet::new(),
        }
    }

    /// Adds a prerequisite (builder style).
    #[must_use]
    pub fn with_prerequisite(mut self, prereq: impl Into<CourseId>) -> Self {
        self.prerequisites.insert(prereq.into());
        self
    }

    /// Returns the course identifier.
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the credit count.
    #[must_use]
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Returns the direct prerequisite set, in ascending identifier order.
    #[must_use]
    pub fn prerequisites(&self) -> &BTreeSet<CourseId> {
        &self.prerequisites
    }

    /// Returns true if `prereq` is a direct prerequisite of this course.
    #[must_use]
    pub fn requires(&self, prereq: &CourseId) -> bool {
        self.prerequisites.contains(prereq)
    }
}
