//! Recovering syntax parser for JSP-like markup.
//!
//! The parser consumes a stream of tokens that an external lexer has already
//! classified and groups them into a flat list of syntax elements: text,
//! comments, scripting blocks, open and end tags, directives and errors.
//!
//! Parsing never fails. Malformed constructs degrade to [`SyntaxElement::Error`]
//! elements or to best-effort partial tags and directives, and consecutive
//! elements always tile the input without gaps.
//!
//! # Example
//! ```
//! use jsp_syntax::{parse, SyntaxElement, Token, TokenKind};
//!
//! let source = "<%@ page a=\"1\" %>";
//! let tokens = [
//!     Token::from_text(TokenKind::Symbol, 0, "<%@"),
//!     Token::from_text(TokenKind::Tag, 3, " page"),
//!     Token::from_text(TokenKind::Whitespace, 8, " "),
//!     Token::from_text(TokenKind::Attribute, 9, "a"),
//!     Token::from_text(TokenKind::Symbol, 10, "="),
//!     Token::from_text(TokenKind::AttrValue, 11, "\"1\""),
//!     Token::from_text(TokenKind::Whitespace, 14, " "),
//!     Token::from_text(TokenKind::Symbol, 15, "%>"),
//! ];
//!
//! let result = parse(source, tokens);
//!
//! match &result.elements()[0] {
//!     SyntaxElement::Directive(directive) => {
//!         assert_eq!(directive.name(), "page");
//!         assert_eq!(directive.attributes()[0].unquoted_value(), Some("1"));
//!     }
//!     other => panic!("Unexpected element: {other:?}"),
//! }
//! ```

use cfg_if::cfg_if;

#[macro_use]
mod debug_trace;

mod base;
mod parse_result;
mod parser;
mod syntax_element;
mod token;

pub mod errors;

pub use self::base::Range;
pub use self::errors::TokenStreamError;
pub use self::parse_result::ParseResult;
pub use self::parser::{parse, try_parse, ParserSettings, SyntaxParser, TextSpans, TokenCursor};
pub use self::syntax_element::{
    Attribute, Directive, ElementKind, EndTag, OpenTag, SyntaxElement,
};
pub use self::token::{validate_tokens, Token, TokenKind, TokenKindSet};

cfg_if! {
    if #[cfg(feature = "integration_test")] {
        pub mod test_utils;
    }
}
