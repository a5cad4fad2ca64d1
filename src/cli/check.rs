use clap::Parser;
use prereqs::{Catalog, Checker, CompletedCourses, Config, CourseCode};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check whether a course can be taken")]
pub struct Check {
    /// The course to check
    #[clap(value_parser = super::parse_course)]
    pub(super) target: CourseCode,

    /// Courses already completed (space or comma separated)
    #[clap(value_parser = super::parse_course, value_delimiter = ',')]
    pub(super) completed: Vec<CourseCode>,

    /// Print only `true` or `false`, without color
    #[arg(long, short)]
    quiet: bool,
}

impl Check {
    #[instrument(level = "debug", skip(self, catalog, config))]
    pub fn run(self, catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
        let completed: CompletedCourses = self.completed.into_iter().collect();
        let unlocked = Checker::new(catalog, config).is_unlocked(&completed, &self.target)?;

        if self.quiet {
            println!("{unlocked}");
        } else {
            println!("{}", verdict(unlocked));
        }
        Ok(())
    }
}

/// Renders a result as colored `true`/`false`.
pub fn verdict(unlocked: bool) -> String {
    if unlocked {
        "true".success()
    } else {
        "false".warning()
    }
}
