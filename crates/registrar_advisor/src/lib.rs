//! Advisory queries over a catalog.
//!
//! Combines the graph and relation layers into the questions an advisor
//! actually asks: can this student take this course
//! ([`check_eligibility`]), what could they take next
//! ([`available_courses`]), is the whole prerequisite chain satisfied
//! ([`verify_chain`]), and is the catalog itself consistent ([`audit`]).
//!
//! Every query returns data; nothing here prints or logs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod audit;
mod chain;
mod eligibility;

pub use audit::{AuditReport, MAX_STUDENT_CREDITS, Violation, audit};
pub use chain::{ChainProof, verify_chain};
pub use eligibility::{Eligibility, available_courses, check_eligibility};
