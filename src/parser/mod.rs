mod cursor;
mod element_builder;
mod settings;
mod state_machine;

use self::state_machine::StateMachine;
use crate::errors::TokenStreamError;
use crate::parse_result::ParseResult;
use crate::token::{validate_tokens, Token};

pub use self::cursor::TokenCursor;
pub use self::settings::{ParserSettings, TextSpans};

/// Turns a classified token stream into a flat list of syntax elements.
///
/// The parser keeps no state between invocations, so a single instance can be
/// shared between threads and used for any number of documents.
#[derive(Debug, Default, Clone)]
pub struct SyntaxParser {
    settings: ParserSettings,
}

impl SyntaxParser {
    #[inline]
    pub fn new(settings: ParserSettings) -> Self {
        SyntaxParser { settings }
    }

    #[inline]
    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parses `tokens` lexed from `source`.
    ///
    /// Never fails: malformed constructs are reported as
    /// [`SyntaxElement::Error`] elements or salvaged into partial tags and
    /// directives.
    ///
    /// Element spans are only meaningful if `tokens` tile `source` in offset
    /// order, which [`SyntaxParser::try_parse`] checks. Tokens out of order
    /// don't cause a panic, but the affected spans are clamped to be empty.
    ///
    /// [`SyntaxElement::Error`]: crate::SyntaxElement::Error
    pub fn parse<'i>(
        &self,
        source: &'i str,
        tokens: impl IntoIterator<Item = Token<'i>>,
    ) -> ParseResult<'i> {
        let elements = StateMachine::new(tokens.into_iter(), &self.settings).run();

        ParseResult::new(source, elements, self.settings.text_spans)
    }

    /// Same as [`SyntaxParser::parse`], but first checks that `tokens` cover
    /// `source` exactly.
    pub fn try_parse<'i>(
        &self,
        source: &'i str,
        tokens: &[Token<'i>],
    ) -> Result<ParseResult<'i>, TokenStreamError> {
        validate_tokens(source, tokens)?;

        Ok(self.parse(source, tokens.iter().copied()))
    }
}

/// Parses `tokens` lexed from `source` with the default settings.
///
/// # Example
/// ```
/// use jsp_syntax::{parse, ElementKind, Token, TokenKind};
///
/// let source = "<br/>";
/// let tokens = [
///     Token::from_text(TokenKind::Symbol, 0, "<"),
///     Token::from_text(TokenKind::Tag, 1, "br"),
///     Token::from_text(TokenKind::Symbol, 3, "/>"),
/// ];
///
/// let result = parse(source, tokens);
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.elements()[0].kind(), ElementKind::OpenTag);
/// assert_eq!(result.elements()[0].name(), Some("br"));
/// ```
#[inline]
pub fn parse<'i>(source: &'i str, tokens: impl IntoIterator<Item = Token<'i>>) -> ParseResult<'i> {
    SyntaxParser::default().parse(source, tokens)
}

/// Validates `tokens` against `source` and parses them with the default settings.
#[inline]
pub fn try_parse<'i>(
    source: &'i str,
    tokens: &[Token<'i>],
) -> Result<ParseResult<'i>, TokenStreamError> {
    SyntaxParser::default().try_parse(source, tokens)
}
