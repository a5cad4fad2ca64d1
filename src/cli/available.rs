use clap::Parser;
use prereqs::{Catalog, Checker, CompletedCourses, Config, CourseCode};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow, terminal_width};

#[derive(Debug, Parser)]
#[command(about = "List the catalog courses that can be taken next")]
pub struct Available {
    /// Courses already completed (space or comma separated)
    #[clap(value_parser = super::parse_course, value_delimiter = ',')]
    completed: Vec<CourseCode>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Available {
    #[instrument(level = "debug", skip(self, catalog, config))]
    pub fn run(self, catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
        let completed: CompletedCourses = self.completed.into_iter().collect();
        let unlocked = Checker::new(catalog, config).unlockable(&completed)?;

        match self.output {
            OutputFormat::Json => Self::output_json(&completed, &unlocked)?,
            OutputFormat::Table => Self::output_table(&unlocked),
        }
        Ok(())
    }

    fn output_json(completed: &CompletedCourses, unlocked: &[CourseCode]) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "completed": completed.iter().collect::<Vec<_>>(),
            "available": unlocked,
            "count": unlocked.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(unlocked: &[CourseCode]) {
        if unlocked.is_empty() {
            println!("{}", "No further courses can be taken yet.".warning());
            return;
        }

        println!(
            "{}",
            format!("{} courses available", unlocked.len()).success()
        );
        if is_narrow() {
            for code in unlocked {
                println!("  {code}");
            }
            return;
        }

        // course codes are 8 characters; leave room for a two-space gutter
        let per_row = terminal_width().map_or(8, |w| usize::from(w.saturating_sub(2) / 10).max(1));
        for row in unlocked.chunks(per_row) {
            let line: Vec<_> = row.iter().map(CourseCode::as_str).collect();
            println!("  {}", line.join("  "));
        }
    }
}
