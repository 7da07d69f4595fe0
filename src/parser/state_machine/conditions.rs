use crate::token::{Token, TokenKind, TokenKindSet};

/// Tokens skipped between attributes of a tag or directive.
pub const BODY_FILLER: TokenKindSet = TokenKindSet::WHITESPACE
    .union(TokenKindSet::EOL)
    .union(TokenKindSet::ERROR);

/// Tokens skipped between an attribute name and its `=` or value.
pub const ATTR_FILLER: TokenKindSet = TokenKindSet::WHITESPACE.union(TokenKindSet::EOL);

/// Tokens that continue a comment.
pub const COMMENT_CONTINUATION: TokenKindSet = TokenKindSet::COMMENT
    .union(TokenKindSet::EOL)
    .union(TokenKindSet::WHITESPACE);

#[inline]
pub fn is_start_tag_opener(token: &Token<'_>) -> bool {
    token.is_symbol("<")
}

#[inline]
pub fn is_end_tag_opener(token: &Token<'_>) -> bool {
    token.is_symbol("</")
}

#[inline]
pub fn is_directive_opener(token: &Token<'_>) -> bool {
    token.is_symbol("<%@")
}

/// `<%`, `<%=` and `<%!`. A stray `%>` is not an opener.
#[inline]
pub fn is_scriptlet_opener(token: &Token<'_>) -> bool {
    token.is(TokenKind::Symbol2) && token.text().starts_with("<%")
}

#[inline]
pub fn is_self_closing_symbol(token: &Token<'_>) -> bool {
    token.is_symbol("/>")
}

#[inline]
pub fn is_equals_symbol(token: &Token<'_>) -> bool {
    token.is_symbol("=")
}

/// `%>` closes a directive whichever symbol class the lexer reports it with.
#[inline]
pub fn is_directive_closer(token: &Token<'_>) -> bool {
    token.is_any_of(TokenKindSet::SYMBOL | TokenKindSet::SYMBOL2) && token.text() == "%>"
}
