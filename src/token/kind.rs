use bitflags::bitflags;

/// Lexical class assigned to a token by the lexer.
///
/// `Symbol` covers the tag and directive delimiters (`<`, `</`, `<%@`, `/>`,
/// `>`, `%>`, `=`), `Symbol2` covers the scriptlet delimiters (`<%`, `<%=`,
/// `<%!` and the matching `%>`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Comment,
    Symbol,
    Symbol2,
    Scriptlet,
    Tag,
    EndTagName,
    Attribute,
    AttrValue,
    Whitespace,
    Eol,
    Error,
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct TokenKindSet: u16 {
        const TEXT = 1 << 0;
        const COMMENT = 1 << 1;
        const SYMBOL = 1 << 2;
        const SYMBOL2 = 1 << 3;
        const SCRIPTLET = 1 << 4;
        const TAG = 1 << 5;
        const END_TAG_NAME = 1 << 6;
        const ATTRIBUTE = 1 << 7;
        const ATTR_VALUE = 1 << 8;
        const WHITESPACE = 1 << 9;
        const EOL = 1 << 10;
        const ERROR = 1 << 11;
    }
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Text,
        TokenKind::Comment,
        TokenKind::Symbol,
        TokenKind::Symbol2,
        TokenKind::Scriptlet,
        TokenKind::Tag,
        TokenKind::EndTagName,
        TokenKind::Attribute,
        TokenKind::AttrValue,
        TokenKind::Whitespace,
        TokenKind::Eol,
        TokenKind::Error,
    ];

    #[inline]
    pub fn as_set(self) -> TokenKindSet {
        match self {
            TokenKind::Text => TokenKindSet::TEXT,
            TokenKind::Comment => TokenKindSet::COMMENT,
            TokenKind::Symbol => TokenKindSet::SYMBOL,
            TokenKind::Symbol2 => TokenKindSet::SYMBOL2,
            TokenKind::Scriptlet => TokenKindSet::SCRIPTLET,
            TokenKind::Tag => TokenKindSet::TAG,
            TokenKind::EndTagName => TokenKindSet::END_TAG_NAME,
            TokenKind::Attribute => TokenKindSet::ATTRIBUTE,
            TokenKind::AttrValue => TokenKindSet::ATTR_VALUE,
            TokenKind::Whitespace => TokenKindSet::WHITESPACE,
            TokenKind::Eol => TokenKindSet::EOL,
            TokenKind::Error => TokenKindSet::ERROR,
        }
    }
}

impl TokenKindSet {
    #[inline]
    pub fn has(self, kind: TokenKind) -> bool {
        self.contains(kind.as_set())
    }
}

impl From<TokenKind> for TokenKindSet {
    #[inline]
    fn from(kind: TokenKind) -> Self {
        kind.as_set()
    }
}
