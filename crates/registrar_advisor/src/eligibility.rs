//! Per-student course eligibility.

use std::collections::BTreeSet;

use registrar_catalog::Catalog;
use registrar_foundation::{CourseId, StudentId};

/// Outcome of an eligibility check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// All direct prerequisites completed; the student may enroll.
    Eligible,
    /// The student is already enrolled in the course.
    AlreadyEnrolled,
    /// The student has already completed the course.
    AlreadyCompleted,
    /// Direct prerequisites the student has not completed.
    MissingPrerequisites(BTreeSet<CourseId>),
    /// The student or the course is not in the catalog.
    Unknown,
}

/// Checks whether a student may enroll in a course.
///
/// Only direct prerequisites are consulted; use
/// [`verify_chain`](crate::verify_chain) for the full indirect chain.
#[must_use]
pub fn check_eligibility(
    catalog: &Catalog,
    student_id: &StudentId,
    course_id: &CourseId,
) -> Eligibility {
    let (Some(student), Some(course)) = (catalog.student(student_id), catalog.course(course_id))
    else {
        return Eligibility::Unknown;
    };

    if student.is_enrolled(course_id) {
        return Eligibility::AlreadyEnrolled;
    }
    if student.has_completed(course_id) {
        return Eligibility::AlreadyCompleted;
    }

    let missing: BTreeSet<CourseId> = course
        .prerequisites()
        .iter()
        .filter(|prereq| !student.has_completed(prereq))
        .cloned()
        .collect();

    if missing.is_empty() {
        Eligibility::Eligible
    } else {
        Eligibility::MissingPrerequisites(missing)
    }
}

/// Lists every course the student could enroll in right now: not already
/// enrolled or completed, with all direct prerequisites completed.
/// Ascending identifier order. An unknown student gets an empty list.
#[must_use]
pub fn available_courses(catalog: &Catalog, student_id: &StudentId) -> Vec<CourseId> {
    let Some(student) = catalog.student(student_id) else {
        return Vec::new();
    };

    catalog
        .courses()
        .filter(|course| {
            !student.is_enrolled(course.id())
                && !student.has_completed(course.id())
                && course
                    .prerequisites()
                    .iter()
                    .all(|prereq| student.has_completed(prereq))
        })
        .map(|course| course.id().clone())
        .collect()
}
