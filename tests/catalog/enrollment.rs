//! Integration tests for enrollment state transitions
//!
//! Tests enroll, complete, and drop, including credit accounting and the
//! enrolled/completed disjointness invariant.

use registrar_catalog::{Catalog, Course, Student};
use registrar_foundation::{CourseId, Error, StudentId};

fn seeded() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_course(Course::new("CS101", "Intro", 3)).unwrap();
    catalog
        .add_course(Course::new("CS201", "Data Structures", 4).with_prerequisite("CS101"))
        .unwrap();
    catalog.add_student(Student::new("S001", "Ada")).unwrap();
    catalog
}

// =============================================================================
// Enrollment
// =============================================================================

#[test]
fn enroll_adds_credits() {
    let mut catalog = seeded();
    let s001 = StudentId::new("S001");

    catalog.enroll(&s001, &CourseId::new("CS101")).unwrap();
    let student = catalog.student(&s001).unwrap();
    assert!(student.is_enrolled(&CourseId::new("CS101")));
    assert_eq!(student.credits(), 3);
}

#[test]
fn enroll_rejects_unknown_ids() {
    let mut catalog = seeded();

    assert_eq!(
        catalog.enroll(&StudentId::new("S001"), &CourseId::new("CS999")),
        Err(Error::CourseNotFound(CourseId::new("CS999")))
    );
    assert_eq!(
        catalog.enroll(&StudentId::new("S999"), &CourseId::new("CS101")),
        Err(Error::StudentNotFound(StudentId::new("S999")))
    );
}

#[test]
fn enroll_rejects_double_enrollment() {
    let mut catalog = seeded();
    let s001 = StudentId::new("S001");
    let cs101 = CourseId::new("CS101");

    catalog.enroll(&s001, &cs101).unwrap();
    assert_eq!(
        catalog.enroll(&s001, &cs101),
        Err(Error::AlreadyEnrolled {
            student: s001.clone(),
            course: cs101.clone(),
        })
    );
    // Credits were not double-counted.
    assert_eq!(catalog.student(&s001).unwrap().credits(), 3);
}

#[test]
fn enroll_rejects_completed_courses() {
    let mut catalog = seeded();
    catalog
        .add_student(Student::new("S002", "Grace").with_completed("CS101"))
        .unwrap();

    assert_eq!(
        catalog.enroll(&StudentId::new("S002"), &CourseId::new("CS101")),
        Err(Error::AlreadyCompleted {
            student: StudentId::new("S002"),
            course: CourseId::new("CS101"),
        })
    );
}

#[test]
fn enroll_rejects_credit_overflow() {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("MAXED", "Maxed", u32::MAX))
        .unwrap();
    catalog.add_course(Course::new("MORE", "More", 1)).unwrap();
    catalog.add_student(Student::new("S001", "Ada")).unwrap();

    let s001 = StudentId::new("S001");
    catalog.enroll(&s001, &CourseId::new("MAXED")).unwrap();
    assert_eq!(
        catalog.enroll(&s001, &CourseId::new("MORE")),
        Err(Error::CreditOverflow(s001.clone()))
    );
}

#[test]
fn duplicate_records_rejected() {
    let mut catalog = seeded();
    assert_eq!(
        catalog.add_course(Course::new("CS101", "Intro Again", 3)),
        Err(Error::DuplicateId("CS101".into()))
    );
    assert_eq!(
        catalog.add_student(Student::new("S001", "Ada Again")),
        Err(Error::DuplicateId("S001".into()))
    );
}

// =============================================================================
// Completion and Dropping
// =============================================================================

#[test]
fn complete_moves_course_and_releases_credits() {
    let mut catalog = seeded();
    let s001 = StudentId::new("S001");
    let cs101 = CourseId::new("CS101");

    catalog.enroll(&s001, &cs101).unwrap();
    catalog.complete(&s001, &cs101).unwrap();

    let student = catalog.student(&s001).unwrap();
    assert!(!student.is_enrolled(&cs101));
    assert!(student.has_completed(&cs101));
    assert_eq!(student.credits(), 0);
}

#[test]
fn complete_requires_enrollment() {
    let mut catalog = seeded();
    assert_eq!(
        catalog.complete(&StudentId::new("S001"), &CourseId::new("CS101")),
        Err(Error::NotEnrolled {
            student: StudentId::new("S001"),
            course: CourseId::new("CS101"),
        })
    );
}

#[test]
fn drop_releases_credits_without_completion() {
    let mut catalog = seeded();
    let s001 = StudentId::new("S001");
    let cs101 = CourseId::new("CS101");

    catalog.enroll(&s001, &cs101).unwrap();
    catalog.drop_course(&s001, &cs101).unwrap();

    let student = catalog.student(&s001).unwrap();
    assert!(!student.is_enrolled(&cs101));
    assert!(!student.has_completed(&cs101));
    assert_eq!(student.credits(), 0);

    // Dropping reopens the course.
    catalog.enroll(&s001, &cs101).unwrap();
}

#[test]
fn completed_course_unlocks_its_dependents() {
    let mut catalog = seeded();
    let s001 = StudentId::new("S001");

    catalog.enroll(&s001, &CourseId::new("CS101")).unwrap();
    catalog.complete(&s001, &CourseId::new("CS101")).unwrap();
    catalog.enroll(&s001, &CourseId::new("CS201")).unwrap();

    let student = catalog.student(&s001).unwrap();
    assert!(student.is_enrolled(&CourseId::new("CS201")));
    assert_eq!(student.credits(), 4);
}

// =============================================================================
// Iteration Order
// =============================================================================

#[test]
fn records_iterate_in_ascending_id_order() {
    let mut catalog = Catalog::new();
    catalog.add_course(Course::new("MATH100", "Calculus", 3)).unwrap();
    catalog.add_course(Course::new("CS101", "Intro", 3)).unwrap();

    let ids: Vec<&str> = catalog.course_ids().map(CourseId::as_str).collect();
    assert_eq!(ids, vec!["CS101", "MATH100"]);
}
