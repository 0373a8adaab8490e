//! In-memory entity storage for Registrar.
//!
//! This crate provides the record types ([`Course`], [`Student`], [`Faculty`],
//! [`Room`], [`Lab`]) and the [`Catalog`] that stores them. The catalog is a
//! plain value passed by shared reference into every downstream component;
//! there is no global accessor. Records iterate in ascending identifier
//! order.
//!
//! Enrollment state transitions live on [`Catalog`] rather than on
//! [`Student`] so the enrolled/completed disjointness and credit-total
//! invariants are enforced at the storage seam.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod course;
mod facility;
mod faculty;
mod student;

pub use catalog::Catalog;
pub use course::Course;
pub use facility::{Lab, Room};
pub use faculty::Faculty;
pub use student::Student;
