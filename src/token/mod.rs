mod kind;
mod validation;

use crate::base::Range;
use std::fmt::{self, Debug};

pub use self::kind::{TokenKind, TokenKindSet};
pub use self::validation::validate_tokens;

/// A classified lexical unit produced by an external lexer.
///
/// The parser never reclassifies characters: it trusts `kind` and only
/// inspects `text` to tell delimiter symbols apart.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Token<'i> {
    kind: TokenKind,
    offset: usize,
    len: usize,
    text: &'i str,
}

impl<'i> Token<'i> {
    #[inline]
    pub fn new(kind: TokenKind, offset: usize, len: usize, text: &'i str) -> Self {
        Token {
            kind,
            offset,
            len,
            text,
        }
    }

    /// Creates a token whose reported length is the byte length of its text.
    #[inline]
    pub fn from_text(kind: TokenKind, offset: usize, text: &'i str) -> Self {
        Token::new(kind, offset, text.len(), text)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    #[inline]
    pub fn text(&self) -> &'i str {
        self.text
    }

    #[inline]
    pub fn range(&self) -> Range {
        Range::new(self.offset, self.end())
    }

    #[inline]
    pub(crate) fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub(crate) fn is_any_of(&self, kinds: TokenKindSet) -> bool {
        kinds.has(self.kind)
    }

    #[inline]
    pub(crate) fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?} {:?}", self.kind, self.range(), self.text)
    }
}
