//! Domain models for prerequisite checking.
//!
//! This module contains the core domain types: course codes, the course
//! catalog, a student's completed courses, and configuration.

/// Course code and department types and parsing.
pub mod course;
pub use course::{CourseCode, Department, Error as CourseError};

/// The catalog of courses and their requirement strings.
pub mod catalog;
pub use catalog::{Catalog, LoadError};

mod completed;
pub use completed::CompletedCourses;

mod config;
pub use config::{Config, UnknownWords};
