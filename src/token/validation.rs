use super::Token;
use crate::errors::TokenStreamError;

/// Checks that `tokens` tile `source` exactly: every token lies within the
/// source, starts where the previous one ended, carries the text it covers,
/// and the last one ends at the end of the source.
pub fn validate_tokens(source: &str, tokens: &[Token<'_>]) -> Result<(), TokenStreamError> {
    let source_len = source.len();
    let mut expected = 0;

    for token in tokens {
        if token.offset() != expected {
            return Err(TokenStreamError::Gap {
                expected,
                found: token.offset(),
            });
        }

        let covered = source
            .get(token.offset()..token.end())
            .ok_or(TokenStreamError::OutOfBounds {
                offset: token.offset(),
                len: token.len(),
                source_len,
            })?;

        if covered != token.text() {
            return Err(TokenStreamError::TextMismatch {
                offset: token.offset(),
            });
        }

        expected = token.end();
    }

    if expected != source_len {
        return Err(TokenStreamError::Incomplete {
            covered: expected,
            source_len,
        });
    }

    Ok(())
}
