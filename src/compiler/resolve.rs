//! Course-code resolution.

use super::token::Token;
use crate::domain::{CompletedCourses, CourseCode, Department};

/// Replaces every course reference with whether it has been completed.
///
/// Course tokens from group expansion and words that start with a course
/// code (`COMP1511`) or a bare course number (`4951`, read as
/// `{default_department}4951`) become [`Token::Bool`]. Everything else is
/// passed through untouched.
#[must_use]
pub fn resolve(
    tokens: Vec<Token>,
    completed: &CompletedCourses,
    default_department: &Department,
) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|token| {
            let code = match &token {
                Token::Course(code) => code.clone(),
                Token::Word(word) => match CourseCode::recognise(word, default_department) {
                    Some(code) => code,
                    None => return token,
                },
                _ => return token,
            };
            let done = completed.contains(&code);
            tracing::trace!("{code} completed: {done}");
            Token::Bool(done)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::normalize::lex;

    fn comp() -> Department {
        Department::try_from("COMP").unwrap()
    }

    #[test]
    fn resolves_codes_and_numbers() {
        let completed = CompletedCourses::parse(["COMP1511", "COMP4951"]).unwrap();
        let tokens = resolve(
            lex("Prerequisite: COMP1511 and COMP1521 or 4951 or 4952"),
            &completed,
            &comp(),
        );
        assert_eq!(
            tokens,
            vec![
                Token::Word("Prerequisite:".to_string()),
                Token::Bool(true),
                Token::Word("and".to_string()),
                Token::Bool(false),
                Token::Word("or".to_string()),
                Token::Bool(true),
                Token::Word("or".to_string()),
                Token::Bool(false),
            ]
        );
    }

    #[test]
    fn resolves_expanded_courses() {
        let completed = CompletedCourses::parse(["COMP2521"]).unwrap();
        let tokens = resolve(
            vec![Token::Course("COMP2521".parse().unwrap()), Token::Plus],
            &completed,
            &comp(),
        );
        assert_eq!(tokens, vec![Token::Bool(true), Token::Plus]);
    }

    #[test]
    fn short_numbers_are_not_courses() {
        let tokens = resolve(lex("12 120"), &CompletedCourses::new(), &comp());
        assert_eq!(
            tokens,
            vec![Token::Word("12".to_string()), Token::Word("120".to_string())]
        );
    }

    #[test]
    fn grammar_tokens_pass_through() {
        let tokens = resolve(
            vec![Token::AtMost, Token::Int(6), Token::Scale(6)],
            &CompletedCourses::new(),
            &comp(),
        );
        assert_eq!(tokens, vec![Token::AtMost, Token::Int(6), Token::Scale(6)]);
    }
}
