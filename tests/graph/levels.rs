//! Integration tests for prerequisite closures and chain levels

use std::collections::BTreeSet;

use registrar_catalog::{Catalog, Course};
use registrar_foundation::CourseId;
use registrar_graph::{course_level, course_levels, prerequisite_closure};

fn chain() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_course(Course::new("CS101", "Intro", 3)).unwrap();
    catalog
        .add_course(Course::new("CS201", "Data Structures", 4).with_prerequisite("CS101"))
        .unwrap();
    catalog
        .add_course(
            Course::new("CS301", "Algorithms", 4)
                .with_prerequisite("CS201")
                .with_prerequisite("CS101"),
        )
        .unwrap();
    catalog
}

// =============================================================================
// Closures
// =============================================================================

#[test]
fn closure_collects_direct_and_indirect() {
    let catalog = chain();
    let closure = prerequisite_closure(&catalog, &CourseId::new("CS301"));

    let expected: BTreeSet<CourseId> = ["CS101", "CS201"].iter().copied().map(CourseId::new).collect();
    assert_eq!(closure, expected);
}

#[test]
fn closure_of_a_base_course_is_empty() {
    let catalog = chain();
    assert!(prerequisite_closure(&catalog, &CourseId::new("CS101")).is_empty());
}

#[test]
fn closure_includes_dangling_prerequisites() {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("CS201", "Data Structures", 4).with_prerequisite("GHOST"))
        .unwrap();

    let closure = prerequisite_closure(&catalog, &CourseId::new("CS201"));
    assert!(closure.contains(&CourseId::new("GHOST")));
}

#[test]
fn cyclic_closure_terminates() {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("A", "A", 3).with_prerequisite("B"))
        .unwrap();
    catalog
        .add_course(Course::new("B", "B", 3).with_prerequisite("A"))
        .unwrap();

    let closure = prerequisite_closure(&catalog, &CourseId::new("A"));
    // The cycle makes A its own transitive prerequisite.
    assert!(closure.contains(&CourseId::new("A")));
    assert!(closure.contains(&CourseId::new("B")));
}

// =============================================================================
// Levels
// =============================================================================

#[test]
fn levels_follow_the_longest_chain() {
    let catalog = chain();
    assert_eq!(course_level(&catalog, &CourseId::new("CS101")), Some(0));
    assert_eq!(course_level(&catalog, &CourseId::new("CS201")), Some(1));
    // Longest chain runs through CS201, not the direct CS101 edge.
    assert_eq!(course_level(&catalog, &CourseId::new("CS301")), Some(2));
}

#[test]
fn unknown_course_is_level_zero() {
    let catalog = chain();
    assert_eq!(course_level(&catalog, &CourseId::new("GHOST")), Some(0));
}

#[test]
fn cyclic_levels_are_ill_founded() {
    let mut catalog = Catalog::new();
    catalog
        .add_course(Course::new("A", "A", 3).with_prerequisite("B"))
        .unwrap();
    catalog
        .add_course(Course::new("B", "B", 3).with_prerequisite("A"))
        .unwrap();

    assert_eq!(course_level(&catalog, &CourseId::new("A")), None);
}

#[test]
fn batch_levels_cover_only_the_requested_ids() {
    let catalog = chain();
    let requested = [CourseId::new("CS201"), CourseId::new("CS301")];
    let levels = course_levels(&catalog, &requested).unwrap();

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[&CourseId::new("CS201")], 1);
    assert_eq!(levels[&CourseId::new("CS301")], 2);
}
