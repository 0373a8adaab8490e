//! Error types for the Registrar system.
//!
//! Uses `thiserror` for ergonomic error definition. Core graph and relation
//! queries never fail with these errors; they degrade to empty results or
//! flags. The error type covers catalog mutation misuse and bound reporting.

use std::fmt;

use thiserror::Error;

use crate::id::{CourseId, FacultyId, LabId, RoomId, StudentId};

/// Convenience alias for results in the Registrar system.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Registrar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Course was not found in the catalog.
    #[error("course not found: {0}")]
    CourseNotFound(CourseId),

    /// Student was not found in the catalog.
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),

    /// Faculty member was not found in the catalog.
    #[error("faculty not found: {0}")]
    FacultyNotFound(FacultyId),

    /// Room was not found in the catalog.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// Lab was not found in the catalog.
    #[error("lab not found: {0}")]
    LabNotFound(LabId),

    /// A record with this identifier already exists.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// Student is already enrolled in the course.
    #[error("student {student} is already enrolled in {course}")]
    AlreadyEnrolled {
        /// The student attempting the transition.
        student: StudentId,
        /// The course in question.
        course: CourseId,
    },

    /// Student has already completed the course.
    #[error("student {student} has already completed {course}")]
    AlreadyCompleted {
        /// The student attempting the transition.
        student: StudentId,
        /// The course in question.
        course: CourseId,
    },

    /// Student is not enrolled in the course.
    #[error("student {student} is not enrolled in {course}")]
    NotEnrolled {
        /// The student attempting the transition.
        student: StudentId,
        /// The course in question.
        course: CourseId,
    },

    /// Credit arithmetic overflowed.
    #[error("credit total overflow for student {0}")]
    CreditOverflow(StudentId),

    /// A capacity or load ceiling was exceeded.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// An iteration bound was exceeded.
    #[error("bound exceeded: {0}")]
    BoundExceeded(Bound),
}

/// Iteration caps that bound the fixed-point loops.
///
/// Constructed by the `require_complete` conversions on capped results,
/// with `limit` taken from the owning layer's constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Transitive-closure join passes.
    ClosureIterations {
        /// The configured limit.
        limit: u32,
    },
    /// Forward-chaining passes over the rule list.
    ChainIterations {
        /// The configured limit.
        limit: u32,
    },
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosureIterations { limit } => {
                write!(f, "closure iteration cap ({limit}) reached")
            }
            Self::ChainIterations { limit } => {
                write!(f, "forward-chaining iteration cap ({limit}) reached")
            }
        }
    }
}
