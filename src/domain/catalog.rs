//! The course catalog: each course mapped to its raw requirement text.

use std::{collections::BTreeMap, io, path::Path};

use crate::domain::course::{self, CourseCode};

/// An immutable table of course codes and their requirement strings.
///
/// The catalog is loaded once and then shared read-only between queries. An
/// empty requirement string means the course has no prerequisite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    conditions: BTreeMap<CourseCode, String>,
}

impl Catalog {
    /// Loads a catalog from a JSON file mapping course codes to requirement
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON object of
    /// strings, or contains a key that is not a course code.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded {} courses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses a catalog from a JSON object such as
    /// `{"COMP1521": "Prerequisite: COMP1511"}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of strings, or
    /// contains a key that is not a course code.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        raw.into_iter()
            .map(|(code, requirement)| {
                code.parse::<CourseCode>()
                    .map(|code| (code, requirement))
                    .map_err(LoadError::InvalidCourse)
            })
            .collect()
    }

    /// Returns the requirement string for a course, if it is in the catalog.
    #[must_use]
    pub fn requirement(&self, code: &CourseCode) -> Option<&str> {
        self.conditions.get(code).map(String::as_str)
    }

    /// Whether the catalog lists the given course.
    #[must_use]
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.conditions.contains_key(code)
    }

    /// The number of courses in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Iterates over courses and their requirement strings, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = (&CourseCode, &str)> {
        self.conditions
            .iter()
            .map(|(code, requirement)| (code, requirement.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(CourseCode, S)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (CourseCode, S)>>(iter: T) -> Self {
        Self {
            conditions: iter
                .into_iter()
                .map(|(code, requirement)| (code, requirement.into()))
                .collect(),
        }
    }
}

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),

    /// The catalog is not a JSON object of strings.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog key is not a course code.
    #[error("invalid catalog entry: {0}")]
    InvalidCourse(course::Error),
}
