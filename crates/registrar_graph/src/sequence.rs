//! Bounded enumeration of valid course sequences.

use std::collections::BTreeSet;

use registrar_catalog::Catalog;
use registrar_foundation::CourseId;

struct Branch {
    remaining: BTreeSet<CourseId>,
    completed: BTreeSet<CourseId>,
    sequence: Vec<CourseId>,
}

/// Enumerates every valid linear extension of the prerequisite partial
/// order over `ids`, up to `max_len` steps per sequence.
///
/// Depth-first search: at each step the eligible courses are those
/// remaining whose direct prerequisites all lie in the running completed
/// set; the search branches over each one. Branches reaching a terminal
/// state — remaining empty, or depth exhausted — contribute their
/// sequence, so depth-truncated non-maximal sequences appear in the
/// result; callers needing only complete orders filter by
/// `sequence.len() == ids.len()`. Branches that deadlock (remaining
/// courses but none eligible, as with a prerequisite cycle) contribute
/// nothing.
///
/// Every branch owns private copies of its remaining/completed sets.
/// Candidates are explored in ascending identifier order, so the output
/// is deterministic. The search tree is worst-case combinatorial in the
/// width of the DAG; `max_len` is a mandatory safety bound, not a tuning
/// knob. Courses missing from the catalog are never eligible.
#[must_use]
pub fn enumerate_sequences(
    catalog: &Catalog,
    ids: &BTreeSet<CourseId>,
    max_len: usize,
) -> Vec<Vec<CourseId>> {
    let mut sequences = Vec::new();
    let mut stack = vec![Branch {
        remaining: ids.clone(),
        completed: BTreeSet::new(),
        sequence: Vec::new(),
    }];

    while let Some(branch) = stack.pop() {
        if branch.remaining.is_empty() || branch.sequence.len() >= max_len {
            if !branch.sequence.is_empty() {
                sequences.push(branch.sequence);
            }
            continue;
        }

        let eligible: Vec<&CourseId> = branch
            .remaining
            .iter()
            .filter(|id| {
                catalog.course(id).is_some_and(|course| {
                    course
                        .prerequisites()
                        .iter()
                        .all(|prereq| branch.completed.contains(prereq))
                })
            })
            .collect();

        // Reverse push so the ascending-order candidate is explored first.
        for course in eligible.into_iter().rev() {
            let mut remaining = branch.remaining.clone();
            remaining.remove(course);
            let mut completed = branch.completed.clone();
            completed.insert(course.clone());
            let mut sequence = branch.sequence.clone();
            sequence.push(course.clone());

            stack.push(Branch {
                remaining,
                completed,
                sequence,
            });
        }
    }

    sequences
}
