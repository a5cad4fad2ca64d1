//! Removal of words that are not part of the expression grammar.

use super::{token::Token, Error};
use crate::domain::UnknownWords;

/// Keeps only grammar tokens, turning numeric words into integer literals.
///
/// By the time this runs every meaningful phrase has been rewritten, so any
/// remaining word is treated as decorative prose ("Prerequisite:",
/// "courses") and handled according to `policy`.
///
/// # Errors
///
/// Returns [`Error::UnknownVocabulary`] for the first unknown word when the
/// policy is [`UnknownWords::Reject`].
pub fn sanitize(tokens: Vec<Token>, policy: UnknownWords) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Word(word) => {
                if let Some(value) = integer_literal(&word) {
                    output.push(Token::Int(value));
                } else {
                    discard(word, policy)?;
                }
            }
            token if token.is_grammar() => output.push(token),
            other => discard(other.to_string(), policy)?,
        }
    }

    Ok(output)
}

fn discard(word: String, policy: UnknownWords) -> Result<(), Error> {
    match policy {
        UnknownWords::Drop => tracing::trace!("dropping '{word}'"),
        UnknownWords::Warn => tracing::warn!("ignoring unrecognised word '{word}'"),
        UnknownWords::Reject => return Err(Error::UnknownVocabulary { word }),
    }
    Ok(())
}

fn integer_literal(word: &str) -> Option<u32> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}
