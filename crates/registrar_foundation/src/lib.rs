//! Core types for the Registrar system.
//!
//! This crate provides:
//! - Identifier newtypes ([`CourseId`], [`StudentId`], [`FacultyId`], [`RoomId`], [`LabId`])
//! - [`Error`] and the [`Result`] alias
//! - [`Bound`] descriptors for iteration and depth caps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;

pub use error::{Bound, Error, Result};
pub use id::{CourseId, FacultyId, LabId, RoomId, StudentId};
