//! Student records.

use std::collections::BTreeSet;

use registrar_foundation::{CourseId, StudentId};

/// A student in the catalog.
///
/// Invariants (enforced by the transition methods on
/// [`Catalog`](crate::Catalog), which is why the sets are not publicly
/// mutable):
/// - a course is either enrolled or completed, never both;
/// - `credits` equals the credit sum of the enrolled courses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    id: StudentId,
    name: String,
    enrolled: BTreeSet<CourseId>,
    completed: BTreeSet<CourseId>,
    credits: u32,
}

impl Student {
    /// Creates a student with no enrollments.
    #[must_use]
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enrolled: BTreeSet::new(),
            completed: BTreeSet::new(),
            credits: 0,
        }
    }

    /// Marks a course as already completed (builder style, for seeding).
    ///
    /// Removes the course from the enrolled set if present; the credit
    /// total is left untouched because seeded completions never carried
    /// enrollment credits.
    #[must_use]
    pub fn with_completed(mut self, course: impl Into<CourseId>) -> Self {
        let course = course.into();
        self.enrolled.remove(&course);
        self.completed.insert(course);
        self
    }

    /// Returns the student identifier.
    #[must_use]
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the enrolled course set, in ascending identifier order.
    #[must_use]
    pub fn enrolled(&self) -> &BTreeSet<CourseId> {
        &self.enrolled
    }

    /// Returns the completed course set, in ascending identifier order.
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<CourseId> {
        &self.completed
    }

    /// Returns the current credit total across enrolled courses.
    #[must_use]
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Returns true if the student is currently enrolled in `course`.
    #[must_use]
    pub fn is_enrolled(&self, course: &CourseId) -> bool {
        self.enrolled.contains(course)
    }

    /// Returns true if the student has completed `course`.
    #[must_use]
    pub fn has_completed(&self, course: &CourseId) -> bool {
        self.completed.contains(course)
    }

    pub(crate) fn record_enrollment(&mut self, course: CourseId, credits: u32) {
        self.enrolled.insert(course);
        self.credits = credits;
    }

    pub(crate) fn record_completion(&mut self, course: &CourseId, credits: u32) {
        self.enrolled.remove(course);
        self.completed.insert(course.clone());
        self.credits = credits;
    }

    pub(crate) fn record_drop(&mut self, course: &CourseId, credits: u32) {
        self.enrolled.remove(course);
        self.credits = credits;
    }
}
