use std::path::{Path, PathBuf};

mod available;
mod check;
mod explain;
mod interactive;
mod terminal;

use anyhow::Context;
use available::Available;
use check::Check;
use clap::ArgAction;
use explain::Explain;
use prereqs::{Catalog, Config, CourseCode};

/// Parse a course code from a string, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input
/// and normalizes it before parsing.
fn parse_course(s: &str) -> Result<CourseCode, String> {
    s.trim().to_uppercase().parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file mapping course codes to requirement strings
    #[arg(long, default_value = "conditions.json", global = true)]
    catalog: PathBuf,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let catalog = Catalog::load(&self.catalog)
            .with_context(|| format!("failed to load {}", self.catalog.display()))?;
        let config = load_config(self.config.as_deref())?;

        match self.command {
            Some(command) => command.run(&catalog, &config),
            None => interactive::run(&catalog, &config),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let config = Config::load(path).map_err(|e| anyhow::anyhow!(e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Check whether a course can be taken
    Check(Check),

    /// Show how a course's requirement is compiled and evaluated
    Explain(Explain),

    /// List the courses that can be taken next
    Available(Available),
}

impl Command {
    fn run(self, catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Check(command) => command.run(catalog, config),
            Self::Explain(command) => command.run(catalog, config),
            Self::Available(command) => command.run(catalog, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_course_normalizes_case() {
        assert_eq!(parse_course(" comp1511 ").unwrap().as_str(), "COMP1511");
        assert!(parse_course("1511").is_err());
    }

    #[test]
    fn parses_check_arguments() {
        let cli = Cli::try_parse_from([
            "prereq",
            "--catalog",
            "data.json",
            "check",
            "comp2521",
            "COMP1511",
            "comp1521",
        ])
        .unwrap();

        assert_eq!(cli.catalog, PathBuf::from("data.json"));
        let Some(Command::Check(check)) = cli.command else {
            panic!("expected the check command");
        };
        assert_eq!(check.target.as_str(), "COMP2521");
        assert_eq!(check.completed.len(), 2);
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["prereq", "-vv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, PathBuf::from("conditions.json"));
    }

    #[test]
    fn rejects_invalid_course() {
        assert!(Cli::try_parse_from(["prereq", "check", "COMP1511", "nonsense"]).is_err());
    }

    #[test]
    fn load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }
}
