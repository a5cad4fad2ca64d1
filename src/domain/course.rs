use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a course code at the start of a word.
static COURSE_CODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}[0-9]{4}").expect("static pattern"));

/// Matches a bare course number at the start of a word.
static COURSE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}").expect("static pattern"));

/// A validated department code: exactly four uppercase letters (A-Z).
///
/// Departments prefix every course code, e.g. `COMP` in `COMP1511`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Department(String);

impl Department {
    /// Creates a new `Department` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Department`] if the string is not exactly four
    /// uppercase ASCII letters.
    pub fn new(s: String) -> Result<Self, Error> {
        if s.len() == 4 && s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(s))
        } else {
            Err(Error::Department(s))
        }
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Department {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Department {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        value.0
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A course code such as `COMP1511`.
///
/// Format: `{DEPARTMENT}{NUMBER}`, where:
/// - `DEPARTMENT` is four uppercase letters (e.g. `COMP`, `MATH`)
/// - `NUMBER` is four digits; the first digit is the course level
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Creates a course code from a department and a four-digit number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Number`] if `number` is not exactly four ASCII
    /// digits.
    pub fn from_parts(department: &Department, number: &str) -> Result<Self, Error> {
        if number.len() == 4 && number.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(format!("{department}{number}")))
        } else {
            Err(Error::Number(number.to_string()))
        }
    }

    /// Returns the department component, e.g. `COMP`.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.0[..4]
    }

    /// Returns the numeric component, e.g. `1511`.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.0[4..]
    }

    /// Returns the course level: the first digit of the number.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.0.as_bytes()[4] - b'0'
    }

    /// Whether this course belongs to the group "level `level` `department`
    /// courses".
    #[must_use]
    pub fn in_group(&self, level: u8, department: &Department) -> bool {
        self.department() == department.as_str() && self.level() == level
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recognises a course code at the start of a requirement word.
    ///
    /// A full code (`COMP1511`) is taken as-is; a bare course number
    /// (`4951`) is prefixed with `default_department`. Only the leading
    /// characters are examined, so `COMP1511.` yields `COMP1511`.
    #[must_use]
    pub fn recognise(word: &str, default_department: &Department) -> Option<Self> {
        if let Some(found) = COURSE_CODE_PREFIX.find(word) {
            return Some(Self(found.as_str().to_string()));
        }
        COURSE_NUMBER_PREFIX
            .find(word)
            .map(|found| Self(format!("{default_department}{}", found.as_str())))
    }
}

impl FromStr for CourseCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.is_ascii() {
            return Err(Error::Syntax(s.to_string()));
        }
        let department =
            Department::new(s[..4].to_string()).map_err(|_| Error::Syntax(s.to_string()))?;
        Self::from_parts(&department, &s[4..]).map_err(|_| Error::Syntax(s.to_string()))
    }
}

impl TryFrom<&str> for CourseCode {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<CourseCode> for String {
    fn from(value: CourseCode) -> Self {
        value.0
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur when parsing departments or course codes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The text is not a course code of the form `[A-Z]{4}[0-9]{4}`.
    #[error("Invalid course code '{0}': expected four uppercase letters followed by four digits")]
    Syntax(String),

    /// The text is not a department code.
    #[error("Invalid department '{0}': must be exactly four uppercase letters (A-Z)")]
    Department(String),

    /// The text is not a four-digit course number.
    #[error("Invalid course number '{0}': must be exactly four digits")]
    Number(String),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn comp() -> Department {
        Department::new("COMP".to_string()).unwrap()
    }

    #[test]
    fn parse_valid_code() {
        let code = CourseCode::try_from("COMP2521").unwrap();
        assert_eq!(code.department(), "COMP");
        assert_eq!(code.number(), "2521");
        assert_eq!(code.level(), 2);
        assert_eq!(code.to_string(), "COMP2521");
    }

    #[test_case(""; "empty")]
    #[test_case("COMP151"; "too short")]
    #[test_case("COMP15111"; "too long")]
    #[test_case("comp1511"; "lowercase department")]
    #[test_case("COM11511"; "digit in department")]
    #[test_case("COMP15X1"; "letter in number")]
    #[test_case("ÇOMP1511"; "non ascii")]
    fn parse_invalid_code(input: &str) {
        assert_eq!(
            CourseCode::try_from(input),
            Err(Error::Syntax(input.to_string()))
        );
    }

    #[test_case("COMP"; "valid")]
    #[test_case("MATH"; "another valid")]
    fn department_valid(input: &str) {
        assert_eq!(Department::try_from(input).unwrap().as_str(), input);
    }

    #[test_case("COM"; "too short")]
    #[test_case("COMPS"; "too long")]
    #[test_case("Comp"; "mixed case")]
    fn department_invalid(input: &str) {
        assert!(matches!(
            Department::try_from(input),
            Err(Error::Department(_))
        ));
    }

    #[test]
    fn from_parts_rejects_short_number() {
        assert_eq!(
            CourseCode::from_parts(&comp(), "151"),
            Err(Error::Number("151".to_string()))
        );
    }

    #[test_case("COMP1511", Some("COMP1511"); "full code")]
    #[test_case("MATH1131", Some("MATH1131"); "other department")]
    #[test_case("4951", Some("COMP4951"); "bare number")]
    #[test_case("COMP1511.", Some("COMP1511"); "trailing punctuation")]
    #[test_case("COMP1511X", Some("COMP1511"); "prefix match only")]
    #[test_case("12", None; "short number")]
    #[test_case("Prerequisite:", None; "prose")]
    #[test_case("and", None; "operator")]
    fn recognise_word(word: &str, expected: Option<&str>) {
        let recognised = CourseCode::recognise(word, &comp());
        assert_eq!(recognised.as_ref().map(CourseCode::as_str), expected);
    }

    #[test]
    fn recognise_uses_default_department() {
        let math = Department::new("MATH".to_string()).unwrap();
        let code = CourseCode::recognise("1131", &math).unwrap();
        assert_eq!(code.as_str(), "MATH1131");
    }

    #[test]
    fn group_membership() {
        let code = CourseCode::try_from("COMP2041").unwrap();
        assert!(code.in_group(2, &comp()));
        assert!(!code.in_group(3, &comp()));
        assert!(!code.in_group(2, &Department::new("MATH".to_string()).unwrap()));
    }

    #[test]
    fn serde_roundtrip_validates() {
        let code: CourseCode = serde_json::from_str("\"COMP1511\"").unwrap();
        assert_eq!(code.as_str(), "COMP1511");
        assert!(serde_json::from_str::<CourseCode>("\"nope\"").is_err());
    }

    #[test]
    fn error_display() {
        let error = Error::Syntax("bad".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid course code 'bad': expected four uppercase letters followed by four digits"
        );
    }
}
