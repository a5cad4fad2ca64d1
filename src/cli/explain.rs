use clap::Parser;
use prereqs::{Catalog, Checker, CompletedCourses, Config, CourseCode, compiler::Tokens};
use tracing::instrument;

use super::{check::verdict, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Show each compiler stage for a course's requirement")]
pub struct Explain {
    /// The course to explain
    #[clap(value_parser = super::parse_course)]
    target: CourseCode,

    /// Courses already completed (space or comma separated)
    #[clap(value_parser = super::parse_course, value_delimiter = ',')]
    completed: Vec<CourseCode>,
}

impl Explain {
    #[instrument(level = "debug", skip(self, catalog, config))]
    pub fn run(self, catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
        let completed: CompletedCourses = self.completed.into_iter().collect();
        let trace = Checker::new(catalog, config).trace(&completed, &self.target)?;

        if trace.requirement.trim().is_empty() {
            println!("{} has no prerequisite", self.target);
            println!("{:<12}{}", "result", verdict(true));
            return Ok(());
        }

        let rows = [
            ("requirement", trace.requirement.clone()),
            ("normalized", trace.normalized.clone()),
            ("operators", Tokens(&trace.substituted).to_string()),
            ("groups", Tokens(&trace.expanded).to_string()),
            ("courses", Tokens(&trace.resolved).to_string()),
            ("expression", Tokens(&trace.sanitized).to_string()),
            ("value", trace.value.to_string()),
        ];
        for (stage, text) in rows {
            println!("{}{text}", format!("{stage:<12}").dim());
        }
        println!(
            "{}{}",
            format!("{:<12}", "result").info(),
            verdict(trace.is_satisfied())
        );
        Ok(())
    }
}
