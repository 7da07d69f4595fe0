use crate::token::Token;
use std::iter::Peekable;

/// Sequential reader over a token stream with exactly one token of backup.
///
/// The end-of-stream check looks ahead without consuming, so it doesn't
/// interfere with the backup.
pub struct TokenCursor<'i, I: Iterator<Item = Token<'i>>> {
    tokens: Peekable<I>,
    last: Option<Token<'i>>,
    is_backed_up: bool,
    consumed_end: usize,
    end_before_last: usize,
}

impl<'i, I: Iterator<Item = Token<'i>>> TokenCursor<'i, I> {
    pub fn new(tokens: I) -> Self {
        TokenCursor {
            tokens: tokens.peekable(),
            last: None,
            is_backed_up: false,
            consumed_end: 0,
            end_before_last: 0,
        }
    }

    pub fn consume(&mut self) -> Option<Token<'i>> {
        let token = if self.is_backed_up {
            self.is_backed_up = false;
            self.last
        } else {
            self.last = self.tokens.next();
            self.last
        }?;

        self.end_before_last = self.consumed_end;
        self.consumed_end = token.end();

        trace!(@token token);

        Some(token)
    }

    /// Rewinds the cursor by one token so the next `consume` returns it again.
    pub fn unconsume(&mut self) {
        debug_assert!(
            !self.is_backed_up,
            "Cursor can be backed up by one token only"
        );

        if let Some(token) = self.last {
            trace!(@backup token);

            self.is_backed_up = true;
            self.consumed_end = self.end_before_last;
        }
    }

    /// End offset of the last consumed token that hasn't been backed up.
    #[inline]
    pub fn consumed_end(&self) -> usize {
        self.consumed_end
    }

    #[inline]
    pub fn is_at_end(&mut self) -> bool {
        !self.is_backed_up && self.tokens.peek().is_none()
    }
}
