//! Prerequisite queries against a catalog.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{
    compiler::{self, Trace},
    domain::{Catalog, CompletedCourses, Config, CourseCode},
};

/// Answers "can this course be taken?" for a catalog and configuration.
///
/// A checker borrows both immutably, so any number of queries can share one
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
}

impl<'a> Checker<'a> {
    /// Creates a checker over the given catalog and configuration.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: &'a Config) -> Self {
        Self { catalog, config }
    }

    /// The catalog this checker reads requirements from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Whether a student who has completed `completed` may take `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not in the catalog, or its requirement
    /// does not compile.
    #[instrument(level = "debug", skip(self, completed), fields(completed = completed.len()))]
    pub fn is_unlocked(
        &self,
        completed: &CompletedCourses,
        target: &CourseCode,
    ) -> Result<bool, Error> {
        let requirement = self.requirement(target)?;
        let unlocked = compiler::compile(requirement, completed, self.config)
            .map_err(|source| Error::compile(target, source))?
            .evaluate()
            .is_truthy();
        tracing::debug!("{target} unlocked: {unlocked}");
        Ok(unlocked)
    }

    /// Like [`Checker::is_unlocked`], but records every compiler stage.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`Checker::is_unlocked`].
    #[instrument(level = "debug", skip(self, completed))]
    pub fn trace(&self, completed: &CompletedCourses, target: &CourseCode) -> Result<Trace, Error> {
        let requirement = self.requirement(target)?;
        Trace::record(requirement, completed, self.config)
            .map_err(|source| Error::compile(target, source))
    }

    /// Every catalog course that is not yet completed and whose requirement
    /// is satisfied, ordered by course code.
    ///
    /// # Errors
    ///
    /// Returns the first compile error encountered in catalog order.
    #[instrument(level = "debug", skip(self, completed), fields(completed = completed.len()))]
    pub fn unlockable(&self, completed: &CompletedCourses) -> Result<Vec<CourseCode>, Error> {
        let candidates: Vec<&CourseCode> = self
            .catalog
            .iter()
            .map(|(code, _)| code)
            .filter(|code| !completed.contains(code))
            .collect();

        let results: Vec<Result<bool, Error>> = candidates
            .par_iter()
            .map(|code| self.is_unlocked(completed, code))
            .collect();

        let mut unlocked = Vec::new();
        for (code, result) in candidates.into_iter().zip(results) {
            if result? {
                unlocked.push(code.clone());
            }
        }
        tracing::info!("{} courses can be taken", unlocked.len());
        Ok(unlocked)
    }

    fn requirement(&self, target: &CourseCode) -> Result<&'a str, Error> {
        self.catalog
            .requirement(target)
            .ok_or_else(|| Error::UnknownCourse(target.clone()))
    }
}

/// Errors that can occur while answering a prerequisite query.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The course is not in the catalog.
    #[error("course {0} is not in the catalog")]
    UnknownCourse(CourseCode),

    /// The course's requirement could not be compiled.
    #[error("requirement for {course} could not be evaluated: {source}")]
    Compile {
        /// The course whose requirement failed.
        course: CourseCode,
        /// The underlying compiler error.
        source: compiler::Error,
    },
}

impl Error {
    fn compile(course: &CourseCode, source: compiler::Error) -> Self {
        Self::Compile {
            course: course.clone(),
            source,
        }
    }
}
