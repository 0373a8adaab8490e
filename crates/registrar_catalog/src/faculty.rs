//! Faculty records.

use std::collections::BTreeSet;

use registrar_foundation::{CourseId, FacultyId};

/// Default teaching-load ceiling.
pub const DEFAULT_MAX_COURSES: usize = 3;

/// A faculty member in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Faculty {
    id: FacultyId,
    name: String,
    assigned: BTreeSet<CourseId>,
    max_courses: usize,
}

impl Faculty {
    /// Creates a faculty member with the default load ceiling.
    #[must_use]
    pub fn new(id: impl Into<FacultyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assigned: BTreeSet::new(),
            max_courses: DEFAULT_MAX_COURSES,
        }
    }

    /// Sets the load ceiling (builder style).
    #[must_use]
    pub fn with_max_courses(mut self, max_courses: usize) -> Self {
        self.max_courses = max_courses;
        self
    }

    /// Seeds an existing course assignment (builder style), for loading
    /// records that predate the catalog.
    #[must_use]
    pub fn with_assigned(mut self, course: impl Into<CourseId>) -> Self {
        self.assigned.insert(course.into());
        self
    }

    /// Returns the faculty identifier.
    #[must_use]
    pub fn id(&self) -> &FacultyId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the assigned course set, in ascending identifier order.
    #[must_use]
    pub fn assigned(&self) -> &BTreeSet<CourseId> {
        &self.assigned
    }

    /// Returns the teaching-load ceiling.
    #[must_use]
    pub fn max_courses(&self) -> usize {
        self.max_courses
    }

    /// Returns true if another course can be assigned without exceeding
    /// the load ceiling.
    #[must_use]
    pub fn can_assign(&self) -> bool {
        self.assigned.len() < self.max_courses
    }

    /// Returns true if the assigned set exceeds the load ceiling.
    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        self.assigned.len() > self.max_courses
    }

    pub(crate) fn record_assignment(&mut self, course: CourseId) {
        self.assigned.insert(course);
    }

    pub(crate) fn record_unassignment(&mut self, course: &CourseId) {
        self.assigned.remove(course);
    }
}
