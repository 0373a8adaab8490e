//! Prerequisite closures and chain depths.

use std::collections::{BTreeMap, BTreeSet};

use registrar_catalog::Catalog;
use registrar_foundation::CourseId;

/// Collects the full direct and indirect prerequisite set of `course`.
///
/// Iterative walk with a visited set, so shared prerequisites are visited
/// once and a cyclic chain terminates. The course itself is not included
/// (unless it is genuinely its own transitive prerequisite). Courses
/// missing from the catalog contribute no further edges.
#[must_use]
pub fn prerequisite_closure(catalog: &Catalog, course: &CourseId) -> BTreeSet<CourseId> {
    let mut closure = BTreeSet::new();
    let mut visited = BTreeSet::new();
    let mut stack = vec![course.clone()];

    while let Some(id) = stack.pop() {
        if !visited.insert(id.clone()) {
            continue;
        }
        if let Some(record) = catalog.course(&id) {
            for prereq in record.prerequisites() {
                closure.insert(prereq.clone());
                stack.push(prereq.clone());
            }
        }
    }

    closure
}

/// Computes the chain level of every course in `ids`.
///
/// The level of a course is the length of its longest prerequisite chain:
/// 0 for a course with no prerequisites (or missing from the catalog),
/// otherwise 1 + the maximum level among its direct prerequisites.
/// Prerequisites outside `ids` are still descended into, since levels are
/// a property of the whole chain.
///
/// Returns `None` if a cycle makes the levels ill-founded.
#[must_use]
pub fn course_levels<'a>(
    catalog: &Catalog,
    ids: impl IntoIterator<Item = &'a CourseId>,
) -> Option<BTreeMap<CourseId, usize>> {
    enum Step {
        Enter(CourseId),
        Retreat(CourseId),
    }

    let mut levels: BTreeMap<CourseId, usize> = BTreeMap::new();
    let mut on_path: BTreeSet<CourseId> = BTreeSet::new();
    let requested: BTreeSet<CourseId> = ids.into_iter().cloned().collect();

    for root in &requested {
        let mut stack = vec![Step::Enter(root.clone())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    if levels.contains_key(&id) {
                        continue;
                    }
                    if !on_path.insert(id.clone()) {
                        // Entered twice without retreating: cycle.
                        return None;
                    }
                    stack.push(Step::Retreat(id.clone()));
                    if let Some(course) = catalog.course(&id) {
                        for prereq in course.prerequisites() {
                            if on_path.contains(prereq) {
                                return None;
                            }
                            if !levels.contains_key(prereq) {
                                stack.push(Step::Enter(prereq.clone()));
                            }
                        }
                    }
                }
                Step::Retreat(id) => {
                    on_path.remove(&id);
                    let level = catalog.course(&id).map_or(0, |course| {
                        course
                            .prerequisites()
                            .iter()
                            .filter_map(|prereq| levels.get(prereq))
                            .map(|level| level + 1)
                            .max()
                            .unwrap_or(0)
                    });
                    levels.insert(id, level);
                }
            }
        }
    }

    levels.retain(|id, _| requested.contains(id));
    Some(levels)
}

/// Computes the chain level of a single course. See [`course_levels`].
#[must_use]
pub fn course_level(catalog: &Catalog, course: &CourseId) -> Option<usize> {
    course_levels(catalog, std::iter::once(course)).and_then(|levels| levels.get(course).copied())
}
