use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::course::Department;

/// Configuration for the requirement compiler.
///
/// This struct holds the settings that are fixed for a whole catalog: how
/// bare course numbers are completed, how much credit a course is worth, and
/// what happens to words the compiler does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The department prefixed to bare four-digit course numbers.
    ///
    /// For example, with `COMP` the requirement "4951" means `COMP4951`.
    default_department: Department,

    /// Units of credit awarded for every completed course.
    units_per_course: u32,

    /// What to do with words that are neither operators, literals, nor
    /// course codes.
    pub unknown_words: UnknownWords,
}

/// Policy for words the compiler cannot map onto the expression grammar.
///
/// Catalog text routinely carries decorative prose ("Prerequisite:",
/// "courses") that carries no meaning. Dropping it is what makes the
/// compiler work on real catalogs, but it also means a meaningful phrase
/// outside the known vocabulary disappears without trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownWords {
    /// Discard unknown words silently.
    #[default]
    Drop,
    /// Discard unknown words, logging each one at WARN level.
    Warn,
    /// Fail the query on the first unknown word.
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_department: default_department(),
            units_per_course: default_units_per_course(),
            unknown_words: UnknownWords::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the department used for bare course numbers.
    #[must_use]
    pub const fn default_department(&self) -> &Department {
        &self.default_department
    }

    /// Sets the department used for bare course numbers.
    pub fn set_default_department(&mut self, department: Department) {
        self.default_department = department;
    }

    /// Returns the units of credit awarded per course.
    #[must_use]
    pub const fn units_per_course(&self) -> u32 {
        self.units_per_course
    }

    /// Sets the units of credit awarded per course.
    pub const fn set_units_per_course(&mut self, units: u32) {
        self.units_per_course = units;
    }
}

fn default_department() -> Department {
    Department::try_from("COMP").expect("COMP is a valid department")
}

const fn default_units_per_course() -> u32 {
    6
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_department")]
        default_department: Department,

        #[serde(default = "default_units_per_course")]
        units_per_course: u32,

        #[serde(default)]
        unknown_words: UnknownWords,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_department,
                units_per_course,
                unknown_words,
            } => Self {
                default_department,
                units_per_course,
                unknown_words,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_department: config.default_department,
            units_per_course: config.units_per_course,
            unknown_words: config.unknown_words,
        }
    }
}
