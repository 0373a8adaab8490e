//! Catalog-wide consistency audit.

use std::fmt;

use registrar_catalog::Catalog;
use registrar_foundation::{CourseId, FacultyId, StudentId};
use registrar_graph::has_cycle;
use registrar_relation::prerequisite_relation;

/// Credit ceiling above which a student counts as overloaded.
pub const MAX_STUDENT_CREDITS: u32 = 18;

/// A single consistency violation found by [`audit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Enrolled in a course without its direct prerequisite completed or
    /// in progress.
    MissingPrerequisite {
        /// The offending student.
        student: StudentId,
        /// The enrolled course.
        course: CourseId,
        /// The unmet prerequisite.
        prereq: CourseId,
    },
    /// Enrolled in a course and one of its direct prerequisites at the
    /// same time.
    SimultaneousPrerequisite {
        /// The offending student.
        student: StudentId,
        /// The enrolled course.
        course: CourseId,
        /// The prerequisite also enrolled this term.
        prereq: CourseId,
    },
    /// Enrolled in a course without an indirect (transitive) prerequisite
    /// completed.
    TransitivePrerequisite {
        /// The offending student.
        student: StudentId,
        /// The enrolled course.
        course: CourseId,
        /// The unmet indirect prerequisite.
        prereq: CourseId,
    },
    /// Student credit total exceeds [`MAX_STUDENT_CREDITS`].
    CreditOverload {
        /// The offending student.
        student: StudentId,
        /// Their current credit total.
        credits: u32,
    },
    /// Faculty assigned more courses than their load ceiling.
    FacultyOverload {
        /// The offending faculty member.
        faculty: FacultyId,
        /// Number of assigned courses.
        assigned: usize,
        /// Their load ceiling.
        max: usize,
    },
    /// A course whose prerequisite chain revisits itself.
    PrerequisiteCycle {
        /// The course at the head of the cyclic chain.
        course: CourseId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrerequisite {
                student,
                course,
                prereq,
            } => write!(
                f,
                "student {student} enrolled in {course} without prerequisite {prereq}"
            ),
            Self::SimultaneousPrerequisite {
                student,
                course,
                prereq,
            } => write!(
                f,
                "student {student} enrolled in {course} and its prerequisite {prereq} simultaneously"
            ),
            Self::TransitivePrerequisite {
                student,
                course,
                prereq,
            } => write!(
                f,
                "student {student} enrolled in {course} without completing indirect prerequisite {prereq}"
            ),
            Self::CreditOverload { student, credits } => write!(
                f,
                "student {student} overloaded: {credits} credits (max: {MAX_STUDENT_CREDITS})"
            ),
            Self::FacultyOverload {
                faculty,
                assigned,
                max,
            } => write!(f, "faculty {faculty} overloaded: {assigned} courses (max: {max})"),
            Self::PrerequisiteCycle { course } => {
                write!(f, "cycle detected in prerequisites for {course}")
            }
        }
    }
}

/// Result of a full catalog audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    /// Every violation found, in detection order.
    pub violations: Vec<Violation>,
    /// False if the prerequisite closure hit its iteration cap, in which
    /// case transitive-prerequisite violations may be missing.
    pub closure_complete: bool,
}

impl AuditReport {
    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Sweeps the catalog for every violation class.
///
/// Pure read-only pass; detection order is deterministic (students,
/// faculty, and courses in ascending id order, violation classes in the
/// order listed on [`Violation`]).
#[must_use]
pub fn audit(catalog: &Catalog) -> AuditReport {
    let mut violations = Vec::new();

    // Direct and simultaneous prerequisite violations.
    for student in catalog.students() {
        for course_id in student.enrolled() {
            let Some(course) = catalog.course(course_id) else {
                continue;
            };
            for prereq in course.prerequisites() {
                if student.is_enrolled(prereq) {
                    violations.push(Violation::SimultaneousPrerequisite {
                        student: student.id().clone(),
                        course: course_id.clone(),
                        prereq: prereq.clone(),
                    });
                } else if !student.has_completed(prereq) {
                    violations.push(Violation::MissingPrerequisite {
                        student: student.id().clone(),
                        course: course_id.clone(),
                        prereq: prereq.clone(),
                    });
                }
            }
        }
    }

    // Indirect prerequisite violations via the relation closure.
    let closure = prerequisite_relation(catalog).closure();
    for student in catalog.students() {
        for course_id in student.enrolled() {
            let direct = catalog
                .course(course_id)
                .map(|course| course.prerequisites().clone())
                .unwrap_or_default();
            for indirect in closure.relation.successors(course_id.as_str()) {
                let prereq = CourseId::new(indirect);
                if direct.contains(&prereq) || student.has_completed(&prereq) {
                    continue;
                }
                violations.push(Violation::TransitivePrerequisite {
                    student: student.id().clone(),
                    course: course_id.clone(),
                    prereq,
                });
            }
        }
    }

    // Credit overload.
    for student in catalog.students() {
        if student.credits() > MAX_STUDENT_CREDITS {
            violations.push(Violation::CreditOverload {
                student: student.id().clone(),
                credits: student.credits(),
            });
        }
    }

    // Faculty overload.
    for faculty in catalog.all_faculty() {
        if faculty.is_overloaded() {
            violations.push(Violation::FacultyOverload {
                faculty: faculty.id().clone(),
                assigned: faculty.assigned().len(),
                max: faculty.max_courses(),
            });
        }
    }

    // Prerequisite cycles.
    for course in catalog.courses() {
        if has_cycle(catalog, course.id()) {
            violations.push(Violation::PrerequisiteCycle {
                course: course.id().clone(),
            });
        }
    }

    AuditReport {
        violations,
        closure_complete: closure.complete,
    }
}
