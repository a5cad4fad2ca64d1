//! Textual operator phrases mapped onto grammar tokens.

use super::{normalize::is_phrase_end, token::Token};

const UOC_IN: [&str; 4] = ["units", "of", "credit", "in"];
const UOC: [&str; 3] = ["units", "of", "credit"];

/// Replaces operator phrases with their symbolic tokens.
///
/// - "units of credit in" becomes `<= {units_per_course}*`, so the course
///   list that follows is counted and scaled to credit.
/// - "units of credit" becomes `<= {total_uoc}`, the credit earned overall.
/// - `AND`/`and` and `OR`/`or` become logical operators. Matching is case
///   sensitive, so "And" is left alone.
///
/// The longer credit phrase is tried first at every position so its "in" is
/// never stranded. A phrase may end in punctuation ("units of credit."),
/// which is dropped with it. A comma directly before `and`/`or` ("COMP1531, and
/// COMP2521") is a separator the operator already expresses, so its `+` is
/// dropped.
#[must_use]
pub fn substitute(tokens: Vec<Token>, units_per_course: u32, total_uoc: u32) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut rest = tokens.as_slice();

    while let Some((first, tail)) = rest.split_first() {
        if starts_with_words(rest, &UOC_IN) {
            output.extend([Token::AtMost, Token::Scale(units_per_course)]);
            rest = &rest[UOC_IN.len()..];
            continue;
        }
        if starts_with_words(rest, &UOC) {
            output.extend([Token::AtMost, Token::Int(total_uoc)]);
            rest = &rest[UOC.len()..];
            continue;
        }

        let token = match first {
            Token::Word(word) if word == "AND" || word == "and" => Token::And,
            Token::Word(word) if word == "OR" || word == "or" => Token::Or,
            other => other.clone(),
        };
        if matches!(token, Token::And | Token::Or) && output.last() == Some(&Token::Plus) {
            output.pop();
        }
        output.push(token);
        rest = tail;
    }

    output
}

fn starts_with_words(tokens: &[Token], phrase: &[&str]) -> bool {
    let Some((last, leading)) = phrase.split_last() else {
        return false;
    };
    tokens.len() >= phrase.len()
        && tokens
            .iter()
            .zip(leading)
            .all(|(token, expected)| matches!(token, Token::Word(word) if word == expected))
        && matches!(&tokens[leading.len()], Token::Word(word) if is_phrase_end(word, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::normalize::lex;

    #[test]
    fn credit_in_becomes_scaled_comparison() {
        let tokens = substitute(lex("12 units of credit in ( COMP1511 )"), 6, 0);
        assert_eq!(
            tokens,
            vec![
                Token::Word("12".to_string()),
                Token::AtMost,
                Token::Scale(6),
                Token::LParen,
                Token::Word("COMP1511".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn bare_credit_compares_with_total() {
        let tokens = substitute(lex("24 units of credit"), 6, 30);
        assert_eq!(
            tokens,
            vec![Token::Word("24".to_string()), Token::AtMost, Token::Int(30)]
        );
    }

    #[test]
    fn operators_in_both_cases() {
        let tokens = substitute(lex("A AND B and C OR D or E"), 6, 0);
        let operators: Vec<_> = tokens
            .into_iter()
            .filter(|token| !matches!(token, Token::Word(_)))
            .collect();
        assert_eq!(
            operators,
            [Token::And, Token::And, Token::Or, Token::Or]
        );
    }

    #[test]
    fn mixed_case_operators_are_words() {
        let tokens = substitute(lex("And Or"), 6, 0);
        assert_eq!(
            tokens,
            vec![Token::Word("And".to_string()), Token::Word("Or".to_string())]
        );
    }

    #[test]
    fn operator_text_inside_words_is_untouched() {
        let tokens = substitute(lex("MAJOR CORE"), 6, 0);
        assert_eq!(
            tokens,
            vec![Token::Word("MAJOR".to_string()), Token::Word("CORE".to_string())]
        );
    }

    #[test]
    fn comma_before_operator_is_dropped() {
        let tokens = substitute(lex("A + and B + or C + D"), 6, 0);
        assert_eq!(
            tokens,
            vec![
                Token::Word("A".to_string()),
                Token::And,
                Token::Word("B".to_string()),
                Token::Or,
                Token::Word("C".to_string()),
                Token::Plus,
                Token::Word("D".to_string()),
            ]
        );
    }

    #[test]
    fn partial_phrase_is_left_alone() {
        let tokens = substitute(lex("units of"), 6, 0);
        assert_eq!(
            tokens,
            vec![Token::Word("units".to_string()), Token::Word("of".to_string())]
        );
    }

    #[test]
    fn phrase_at_sentence_end() {
        let tokens = substitute(lex("Completion of 18 units of credit."), 6, 12);
        assert_eq!(
            tokens,
            vec![
                Token::Word("Completion".to_string()),
                Token::Word("of".to_string()),
                Token::Word("18".to_string()),
                Token::AtMost,
                Token::Int(12),
            ]
        );
    }

    #[test]
    fn plural_is_not_the_phrase() {
        let input = lex("units of credits");
        assert_eq!(substitute(input.clone(), 6, 0), input);
    }
}
