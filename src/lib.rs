//! Course Prerequisite Checking
//!
//! Course prerequisites are plain-text requirement strings such as
//! "COMP1511 and (COMP1521 or COMP2521)" or "12 units of credit in level 2
//! COMP courses". This crate compiles them into expressions and evaluates
//! them against the courses a student has completed.

pub mod domain;
pub use domain::{Catalog, CompletedCourses, Config, CourseCode, Department, UnknownWords};

pub mod compiler;
pub use compiler::{Expr, Trace, Value, compile};

mod checker;
pub use checker::{Checker, Error};
