//! Whitespace and punctuation normalization.

use super::token::Token;

/// Normalizes a raw requirement string.
///
/// Parentheses and commas become standalone words, runs of whitespace
/// collapse to a single space, and every comma is rewritten as `+` so that a
/// list of courses sums when it is counted for credit.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() * 2);
    for c in raw.chars() {
        match c {
            '(' | ')' => {
                spaced.push(' ');
                spaced.push(c);
                spaced.push(' ');
            }
            ',' => spaced.push_str(" + "),
            _ => spaced.push(c),
        }
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a normalized requirement into tokens.
///
/// Only punctuation is classified here; every other word is left as a
/// [`Token::Word`] for the later stages.
#[must_use]
pub fn lex(normalized: &str) -> Vec<Token> {
    normalized
        .split_whitespace()
        .map(|word| match word {
            "(" => Token::LParen,
            ")" => Token::RParen,
            "+" => Token::Plus,
            _ => Token::Word(word.to_string()),
        })
        .collect()
}

/// Whether `word` is `expected` followed by nothing but punctuation, as when
/// a phrase closes a sentence ("18 units of credit.").
#[must_use]
pub fn is_phrase_end(word: &str, expected: &str) -> bool {
    word.strip_prefix(expected)
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_punctuation()))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", ""; "empty")]
    #[test_case("COMP1511", "COMP1511"; "single code")]
    #[test_case("COMP1511 and (COMP1521 or COMP2521)", "COMP1511 and ( COMP1521 or COMP2521 )"; "parentheses")]
    #[test_case("  COMP1511   AND\tCOMP1531 ", "COMP1511 AND COMP1531"; "whitespace runs")]
    #[test_case("(COMP1511, COMP1521,COMP1531)", "( COMP1511 + COMP1521 + COMP1531 )"; "commas")]
    #[test_case("((COMP1511))", "( ( COMP1511 ) )"; "nested")]
    fn normalizes(raw: &str, expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn lex_classifies_punctuation_only() {
        let tokens = lex("Prerequisite: ( COMP1511 + 4951 )");
        assert_eq!(
            tokens,
            vec![
                Token::Word("Prerequisite:".to_string()),
                Token::LParen,
                Token::Word("COMP1511".to_string()),
                Token::Plus,
                Token::Word("4951".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test_case("credit", "credit", true; "exact")]
    #[test_case("credit.", "credit", true; "full stop")]
    #[test_case("courses;", "courses", true; "semicolon")]
    #[test_case("coursework", "courses", false; "longer word")]
    #[test_case("credits", "credit", false; "plural")]
    #[test_case("cred", "credit", false; "truncated")]
    fn phrase_end(word: &str, expected: &str, matches: bool) {
        assert_eq!(is_phrase_end(word, expected), matches);
    }
}
