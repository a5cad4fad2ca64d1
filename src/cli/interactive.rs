//! Prompt-driven single query, used when no subcommand is given.

use dialoguer::Input;
use prereqs::{Catalog, Checker, CompletedCourses, Config};
use tracing::instrument;

use super::{check::verdict, parse_course};

#[instrument(level = "debug", skip_all)]
pub fn run(catalog: &Catalog, config: &Config) -> anyhow::Result<()> {
    let completed: String = Input::new()
        .with_prompt("Enter completed courses")
        .allow_empty(true)
        .interact_text()?;
    let completed = parse_completed(&completed).map_err(|e| anyhow::anyhow!(e))?;

    let target: String = Input::new()
        .with_prompt("Enter target course")
        .validate_with(|input: &String| parse_course(input).map(|_| ()))
        .interact_text()?;
    let target = parse_course(&target).map_err(|e| anyhow::anyhow!(e))?;

    let unlocked = Checker::new(catalog, config).is_unlocked(&completed, &target)?;
    println!("{}", verdict(unlocked));
    Ok(())
}

/// Parses whitespace- or comma-separated course codes.
fn parse_completed(input: &str) -> Result<CompletedCourses, String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(parse_course)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_and_comma_separated_input() {
        let completed = parse_completed("comp1511 COMP1521,COMP2521 ,  ").unwrap();
        let codes: Vec<_> = completed.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["COMP1511", "COMP1521", "COMP2521"]);
    }

    #[test]
    fn empty_input_means_no_courses() {
        assert!(parse_completed("").unwrap().is_empty());
    }

    #[test]
    fn invalid_course_is_reported() {
        assert!(parse_completed("COMP1511 hello").is_err());
    }
}
