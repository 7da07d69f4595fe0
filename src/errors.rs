//! Error types.
//!
//! Parsing itself never fails: malformed markup is represented by
//! [`SyntaxElement::Error`] elements in the output. The only fallible
//! operation is the optional validation of a token stream against its
//! source performed by [`try_parse`].
//!
//! [`SyntaxElement::Error`]: crate::SyntaxElement::Error
//! [`try_parse`]: crate::try_parse

use thiserror::Error;

/// A token stream that doesn't describe its source faithfully.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum TokenStreamError {
    /// A token's span lies outside of the source.
    #[error("Token at offset {offset} with length {len} exceeds the source length of {source_len} bytes.")]
    OutOfBounds {
        offset: usize,
        len: usize,
        source_len: usize,
    },

    /// A token doesn't start where the previous one ended.
    #[error("Expected the next token to start at offset {expected}, but it starts at {found}.")]
    Gap { expected: usize, found: usize },

    /// A token's text differs from the source it covers.
    #[error("Token text at offset {offset} doesn't match the source.")]
    TextMismatch { offset: usize },

    /// The stream ends before the end of the source.
    #[error("Token stream covers {covered} bytes of the {source_len} bytes source.")]
    Incomplete { covered: usize, source_len: usize },
}
