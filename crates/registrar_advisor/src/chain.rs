//! Whole-chain prerequisite verification.

use std::collections::{BTreeMap, BTreeSet};

use registrar_catalog::Catalog;
use registrar_foundation::{CourseId, StudentId};
use registrar_graph::{course_levels, prerequisite_closure};

/// Outcome of verifying a student against a course's full prerequisite
/// chain, organized by chain level (level 0 = courses with no
/// prerequisites, level k+1 = courses whose longest chain runs through a
/// level-k course).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainProof {
    /// Every course in the chain is completed; the grouped levels are
    /// returned as the proof skeleton.
    Satisfied {
        /// Chain level → prerequisite courses at that level.
        levels: BTreeMap<usize, BTreeSet<CourseId>>,
    },
    /// The chain fails at `level`: these courses are not completed.
    FailsAt {
        /// The lowest level with unsatisfied courses.
        level: usize,
        /// The courses at that level the student has not completed.
        missing: BTreeSet<CourseId>,
    },
    /// The prerequisite chain contains a cycle, so levels are ill-founded.
    Cyclic,
    /// The student or the course is not in the catalog.
    Unknown,
}

/// Verifies that a student has completed the full direct and indirect
/// prerequisite chain of `course_id`, walking chain levels from the
/// bottom up and reporting the first level that fails.
#[must_use]
pub fn verify_chain(catalog: &Catalog, student_id: &StudentId, course_id: &CourseId) -> ChainProof {
    let (Some(student), Some(_)) = (catalog.student(student_id), catalog.course(course_id)) else {
        return ChainProof::Unknown;
    };

    let closure = prerequisite_closure(catalog, course_id);
    if closure.contains(course_id) {
        // The course is its own transitive prerequisite.
        return ChainProof::Cyclic;
    }

    let Some(levels) = course_levels(catalog, closure.iter()) else {
        return ChainProof::Cyclic;
    };

    let mut grouped: BTreeMap<usize, BTreeSet<CourseId>> = BTreeMap::new();
    for (course, level) in levels {
        grouped.entry(level).or_default().insert(course);
    }

    for (&level, courses) in &grouped {
        let missing: BTreeSet<CourseId> = courses
            .iter()
            .filter(|course| !student.has_completed(course))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return ChainProof::FailsAt { level, missing };
        }
    }

    ChainProof::Satisfied { levels: grouped }
}
