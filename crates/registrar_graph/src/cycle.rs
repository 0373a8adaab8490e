//! Cycle detection over prerequisite chains.

use std::collections::BTreeSet;

use registrar_catalog::Catalog;
use registrar_foundation::CourseId;

enum Step {
    Enter(CourseId),
    Retreat(CourseId),
}

/// Returns true if the prerequisite chain reachable from `start` revisits
/// itself.
///
/// Depth-first walk over prerequisite edges with an explicit stack and an
/// active-path set: only a back-edge into the path currently being walked
/// counts as a cycle, so a course reachable along two different paths (a
/// diamond) is not a false positive. Courses missing from the catalog
/// terminate their branch without a cycle.
///
/// This is the authority for whether a course's full prerequisite closure
/// is well-founded; it does not require a prior topological sort.
#[must_use]
pub fn has_cycle(catalog: &Catalog, start: &CourseId) -> bool {
    let mut stack = vec![Step::Enter(start.clone())];
    let mut on_path: BTreeSet<CourseId> = BTreeSet::new();
    let mut finished: BTreeSet<CourseId> = BTreeSet::new();

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                if on_path.contains(&id) {
                    return true;
                }
                if finished.contains(&id) {
                    continue;
                }
                on_path.insert(id.clone());
                stack.push(Step::Retreat(id.clone()));
                if let Some(course) = catalog.course(&id) {
                    for prereq in course.prerequisites() {
                        if on_path.contains(prereq) {
                            return true;
                        }
                        if !finished.contains(prereq) {
                            stack.push(Step::Enter(prereq.clone()));
                        }
                    }
                }
            }
            Step::Retreat(id) => {
                on_path.remove(&id);
                finished.insert(id);
            }
        }
    }

    false
}
