use std::collections::HashSet;

use crate::domain::course::{CourseCode, Department, Error};

/// The courses a student has finished, in the order they were supplied.
///
/// Membership drives every prerequisite decision; order is kept only so that
/// course groups expand in a stable, input-relative order. Repeated entries
/// are collapsed onto their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedCourses {
    ordered: Vec<CourseCode>,
    members: HashSet<CourseCode>,
}

impl CompletedCourses {
    /// Creates an empty set of completed courses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses each string as a course code.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] encountered if any entry is not a valid
    /// course code.
    pub fn parse<I, S>(codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| code.as_ref().parse::<CourseCode>())
            .collect()
    }

    /// Records a completed course.
    ///
    /// Returns `false` if the course was already present.
    pub fn insert(&mut self, code: CourseCode) -> bool {
        if self.members.insert(code.clone()) {
            self.ordered.push(code);
            true
        } else {
            false
        }
    }

    /// Whether the given course has been completed.
    #[must_use]
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.members.contains(code)
    }

    /// The number of distinct completed courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether no courses have been completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Total units of credit earned, given a fixed value per course.
    #[must_use]
    pub fn total_uoc(&self, units_per_course: u32) -> u32 {
        u32::try_from(self.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(units_per_course)
    }

    /// Completed courses in the group "level `level` `department` courses",
    /// in their original relative order.
    pub fn matching_group<'a>(
        &'a self,
        level: u8,
        department: &'a Department,
    ) -> impl Iterator<Item = &'a CourseCode> + 'a {
        self.ordered
            .iter()
            .filter(move |code| code.in_group(level, department))
    }

    /// Iterates over the completed courses in their original order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> {
        self.ordered.iter()
    }
}

impl FromIterator<CourseCode> for CompletedCourses {
    fn from_iter<T: IntoIterator<Item = CourseCode>>(iter: T) -> Self {
        let mut completed = Self::new();
        for code in iter {
            completed.insert(code);
        }
        completed
    }
}

impl<'a> IntoIterator for &'a CompletedCourses {
    type Item = &'a CourseCode;
    type IntoIter = std::slice::Iter<'a, CourseCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
