//! Room and lab records.

use std::collections::BTreeSet;

use registrar_foundation::{CourseId, LabId, RoomId, StudentId};

/// A room available for course meetings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: RoomId,
    capacity: usize,
    kind: String,
}

impl Room {
    /// Creates a room.
    #[must_use]
    pub fn new(id: impl Into<RoomId>, capacity: usize, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capacity,
            kind: kind.into(),
        }
    }

    /// Returns the room identifier.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the seating capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the room kind (e.g. `"Lecture"`, `"Lab"`).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A lab section associated with a course.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    id: LabId,
    course: CourseId,
    capacity: usize,
    enrolled: BTreeSet<StudentId>,
}

impl Lab {
    /// Creates an empty lab section.
    #[must_use]
    pub fn new(id: impl Into<LabId>, course: impl Into<CourseId>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            course: course.into(),
            capacity,
            enrolled: BTreeSet::new(),
        }
    }

    /// Returns the lab identifier.
    #[must_use]
    pub fn id(&self) -> &LabId {
        &self.id
    }

    /// Returns the associated course.
    #[must_use]
    pub fn course(&self) -> &CourseId {
        &self.course
    }

    /// Returns the seating capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the enrolled student set, in ascending identifier order.
    #[must_use]
    pub fn enrolled(&self) -> &BTreeSet<StudentId> {
        &self.enrolled
    }

    /// Returns true if another student fits under the capacity.
    #[must_use]
    pub fn has_space(&self) -> bool {
        self.enrolled.len() < self.capacity
    }

    pub(crate) fn record_enrollment(&mut self, student: StudentId) {
        self.enrolled.insert(student);
    }

    pub(crate) fn record_removal(&mut self, student: &StudentId) {
        self.enrolled.remove(student);
    }
}
