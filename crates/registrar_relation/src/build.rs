//! Builders deriving the standard relations from a catalog snapshot.
//!
//! Each builder reads the catalog once and produces a fresh [`Relation`];
//! nothing is cached across catalog mutations.

use registrar_catalog::Catalog;

use crate::relation::Relation;

/// Builds the student → enrolled-course relation.
#[must_use]
pub fn enrollment_relation(catalog: &Catalog) -> Relation {
    let mut relation = Relation::new();
    for student in catalog.students() {
        for course in student.enrolled() {
            relation.insert(student.id().as_str(), course.as_str());
        }
    }
    relation
}

/// Builds the faculty → assigned-course relation.
#[must_use]
pub fn teaching_relation(catalog: &Catalog) -> Relation {
    let mut relation = Relation::new();
    for faculty in catalog.all_faculty() {
        for course in faculty.assigned() {
            relation.insert(faculty.id().as_str(), course.as_str());
        }
    }
    relation
}

/// Builds the course → direct-prerequisite relation.
///
/// Pairs run dependent-to-prerequisite, so the transitive closure of this
/// relation maps each course to its full prerequisite set.
#[must_use]
pub fn prerequisite_relation(catalog: &Catalog) -> Relation {
    let mut relation = Relation::new();
    for course in catalog.courses() {
        for prereq in course.prerequisites() {
            relation.insert(course.id().as_str(), prereq.as_str());
        }
    }
    relation
}
