//! Course-group expansion.
//!
//! A course group names every course in a department at one level, e.g.
//! "level 2 COMP courses". Inside a credit comparison it stands for the
//! number of such courses the student has completed, so each group expands
//! to a parenthesized sum of the matching completed course codes.

use super::{normalize::is_phrase_end, token::Token};
use crate::domain::{CompletedCourses, Department};

/// Replaces every "level L DEPT courses" phrase with `( C1 + C2 + ... )`.
/// Punctuation closing the phrase ("courses.") goes with it.
///
/// The sum lists the completed courses in the group, in their original
/// order, as [`Token::Course`] so that course resolution turns each one into
/// a count of 1. A group with no completed courses expands to `( 0 )`.
#[must_use]
pub fn expand(tokens: Vec<Token>, completed: &CompletedCourses) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut rest = tokens.as_slice();

    while let Some((first, tail)) = rest.split_first() {
        if let Some((level, department)) = group_at(rest) {
            let members: Vec<_> = completed.matching_group(level, &department).collect();
            tracing::trace!(
                "level {level} {department} courses matched {} completed courses",
                members.len()
            );

            output.push(Token::LParen);
            if members.is_empty() {
                output.push(Token::Int(0));
            }
            for (i, code) in members.into_iter().enumerate() {
                if i > 0 {
                    output.push(Token::Plus);
                }
                output.push(Token::Course(code.clone()));
            }
            output.push(Token::RParen);

            rest = &rest[GROUP_LEN..];
            continue;
        }
        output.push(first.clone());
        rest = tail;
    }

    output
}

const GROUP_LEN: usize = 4;

/// Recognises "level L DEPT courses" at the start of `tokens`.
fn group_at(tokens: &[Token]) -> Option<(u8, Department)> {
    let [
        Token::Word(level_word),
        Token::Word(level),
        Token::Word(department),
        Token::Word(courses),
        ..,
    ] = tokens
    else {
        return None;
    };

    if level_word != "level" || !is_phrase_end(courses, "courses") {
        return None;
    }

    let level = match level.as_bytes() {
        [digit @ b'0'..=b'9'] => digit - b'0',
        _ => return None,
    };
    let department = Department::try_from(department.as_str()).ok()?;
    Some((level, department))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::normalize::lex;

    fn completed(codes: &[&str]) -> CompletedCourses {
        CompletedCourses::parse(codes).unwrap()
    }

    fn course(code: &str) -> Token {
        Token::Course(code.parse().unwrap())
    }

    #[test]
    fn expands_matching_courses_in_order() {
        let tokens = expand(
            lex("in level 2 COMP courses"),
            &completed(&["COMP2521", "COMP1511", "COMP2041", "MATH2400"]),
        );
        assert_eq!(
            tokens,
            vec![
                Token::Word("in".to_string()),
                Token::LParen,
                course("COMP2521"),
                Token::Plus,
                course("COMP2041"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn empty_group_expands_to_zero() {
        let tokens = expand(lex("level 3 COMP courses"), &completed(&["COMP1511"]));
        assert_eq!(tokens, vec![Token::LParen, Token::Int(0), Token::RParen]);
    }

    #[test]
    fn expands_every_occurrence() {
        let tokens = expand(
            lex("level 1 COMP courses and level 1 MATH courses"),
            &completed(&["MATH1131", "COMP1511"]),
        );
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                course("COMP1511"),
                Token::RParen,
                Token::Word("and".to_string()),
                Token::LParen,
                course("MATH1131"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn near_misses_are_left_alone() {
        let input = lex("level 22 COMP courses level 2 comp courses level 2 COMP course");
        let tokens = expand(input.clone(), &completed(&["COMP2521"]));
        assert_eq!(tokens, input);
    }

    #[test]
    fn group_at_sentence_end() {
        let tokens = expand(lex("in level 2 COMP courses."), &completed(&["COMP1511"]));
        assert_eq!(
            tokens,
            vec![
                Token::Word("in".to_string()),
                Token::LParen,
                Token::Int(0),
                Token::RParen,
            ]
        );
    }
}
