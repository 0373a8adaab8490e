//! Integration tests for catalog-derived relations

use registrar_catalog::{Catalog, Course, Faculty, Student};
use registrar_foundation::{CourseId, FacultyId, StudentId};
use registrar_relation::{enrollment_relation, prerequisite_relation, teaching_relation};

fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_course(Course::new("CS101", "Intro", 3)).unwrap();
    catalog
        .add_course(Course::new("CS201", "Data Structures", 4).with_prerequisite("CS101"))
        .unwrap();
    catalog
        .add_course(Course::new("CS301", "Algorithms", 4).with_prerequisite("CS201"))
        .unwrap();
    catalog.add_student(Student::new("S001", "Ada")).unwrap();
    catalog
        .add_faculty(Faculty::new("F001", "Dr. Hopper"))
        .unwrap();
    catalog
        .enroll(&StudentId::new("S001"), &CourseId::new("CS101"))
        .unwrap();
    catalog
        .assign(&FacultyId::new("F001"), &CourseId::new("CS101"))
        .unwrap();
    catalog
}

#[test]
fn enrollment_relates_student_to_course() {
    let relation = enrollment_relation(&seeded());
    assert!(relation.contains("S001", "CS101"));
    assert_eq!(relation.len(), 1);
}

#[test]
fn teaching_relates_faculty_to_course() {
    let relation = teaching_relation(&seeded());
    assert!(relation.contains("F001", "CS101"));
    assert_eq!(relation.len(), 1);
}

#[test]
fn prerequisite_relates_course_to_its_prerequisite() {
    let relation = prerequisite_relation(&seeded());
    assert!(relation.contains("CS201", "CS101"));
    assert!(relation.contains("CS301", "CS201"));
    assert_eq!(relation.len(), 2);
}

#[test]
fn prerequisite_closure_reaches_the_chain_bottom() {
    let closure = prerequisite_relation(&seeded()).closure();
    assert!(closure.complete);
    assert!(closure.relation.contains("CS301", "CS101"));
}

#[test]
fn reflexive_closure_of_a_dag_is_a_partial_order() {
    let catalog = seeded();
    let domain: Vec<&CourseId> = catalog.course_ids().collect();

    let closure = prerequisite_relation(&catalog).closure();
    assert!(closure.complete);
    let ordered = closure
        .relation
        .with_reflexive_pairs(domain.iter().map(|id| id.as_str()));
    assert!(ordered.is_partial_order(domain.iter().map(|id| id.as_str())));
}

#[test]
fn cyclic_prerequisites_break_the_partial_order() {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("A", "A", 3).with_prerequisite("B"))
        .unwrap();
    catalog
        .add_course(Course::new("B", "B", 3).with_prerequisite("A"))
        .unwrap();

    let closure = prerequisite_relation(&catalog).closure();
    let ordered = closure.relation.with_reflexive_pairs(["A", "B"]);
    // (A, B) and (B, A) both present: antisymmetry fails.
    assert!(!ordered.is_partial_order(["A", "B"]));
}

#[test]
fn empty_catalog_yields_empty_relations() {
    let catalog = Catalog::new();
    assert!(enrollment_relation(&catalog).is_empty());
    assert!(teaching_relation(&catalog).is_empty());
    assert!(prerequisite_relation(&catalog).is_empty());
}

#[test]
fn composed_relations_cross_layers() {
    // enrollment ∘ prerequisite: student → prerequisite of an enrolled course.
    let mut catalog = seeded();
    catalog
        .add_student(Student::new("S002", "Grace").with_completed("CS101"))
        .unwrap();
    catalog
        .enroll(&StudentId::new("S002"), &CourseId::new("CS201"))
        .unwrap();

    let needs = enrollment_relation(&catalog).compose(&prerequisite_relation(&catalog));
    assert!(needs.contains("S002", "CS101"));
    assert!(!needs.contains("S001", "CS101"));
}
