//! Minimal JSP lexer producing the token classification the parser expects.
//!
//! It only knows enough of the markup to drive the parser through every
//! construct it recognises. Anything it doesn't understand becomes `Text`.

use jsp_syntax::{Token, TokenKind};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Mode {
    Content,
    TagBody,
    DirectiveBody,
}

pub struct Lexer<'i> {
    input: &'i str,
    pos: usize,
    mode: Mode,
    after_equals: bool,
    tokens: Vec<Token<'i>>,
}

#[inline]
fn is_name_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, b'-' | b'_' | b':' | b'.')
}

#[inline]
fn is_blank(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r')
}

impl<'i> Lexer<'i> {
    pub fn new(input: &'i str) -> Self {
        Lexer {
            input,
            pos: 0,
            mode: Mode::Content,
            after_equals: false,
            tokens: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<Token<'i>> {
        while self.pos < self.input.len() {
            match self.mode {
                Mode::Content => self.lex_content(),
                Mode::TagBody | Mode::DirectiveBody => self.lex_body(),
            }
        }

        self.tokens
    }

    #[inline]
    fn rest(&self) -> &'i str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let start = self.pos;

        self.pos += len;
        self.tokens
            .push(Token::from_text(kind, start, &self.input[start..self.pos]));
    }

    fn len_while(&self, from: usize, pred: impl Fn(u8) -> bool) -> usize {
        self.input.as_bytes()[self.pos + from..]
            .iter()
            .take_while(|&&b| pred(b))
            .count()
    }

    /// Offset of `needle` in the rest of the input.
    fn len_until(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle)
    }

    /// Length of the text run, keeping multibyte characters whole.
    fn text_len(&self) -> usize {
        self.rest()
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '<' || ch == '\n')
            .map_or(self.rest().len(), |(idx, _)| idx)
    }

    fn lex_content(&mut self) {
        let rest = self.rest();

        if rest.starts_with('\n') {
            self.emit(TokenKind::Eol, 1);
        } else if rest.starts_with("<%--") {
            self.lex_comment();
        } else if rest.starts_with("<%@") {
            self.emit(TokenKind::Symbol, 3);
            self.lex_directive_name();
        } else if rest.starts_with("<%") {
            self.lex_scriptlet();
        } else if rest.starts_with("</") {
            self.emit(TokenKind::Symbol, 2);

            let len = self.len_while(0, is_name_char);

            if len > 0 {
                self.emit(TokenKind::EndTagName, len);
            }

            self.enter_body(Mode::TagBody);
        } else if rest.starts_with('<') && self.peek(1).is_some_and(|ch| ch.is_ascii_alphabetic()) {
            self.emit(TokenKind::Symbol, 1);

            let len = self.len_while(0, is_name_char);

            self.emit(TokenKind::Tag, len);
            self.enter_body(Mode::TagBody);
        } else {
            let len = self.text_len();

            self.emit(TokenKind::Text, len);
        }
    }

    fn lex_comment(&mut self) {
        let end = self.len_until("--%>").map_or(self.rest().len(), |idx| idx + 4);
        let end = self.pos + end;

        while self.pos < end {
            if self.peek(0) == Some(b'\n') {
                self.emit(TokenKind::Eol, 1);
            } else {
                let len = self.input[self.pos..end]
                    .find('\n')
                    .unwrap_or(end - self.pos);

                self.emit(TokenKind::Comment, len);
            }
        }
    }

    fn lex_scriptlet(&mut self) {
        let opener_len = match self.peek(2) {
            Some(b'=' | b'!') => 3,
            _ => 2,
        };

        self.emit(TokenKind::Symbol2, opener_len);

        let len = self.len_until("%>").unwrap_or(self.rest().len());

        if len > 0 {
            self.emit(TokenKind::Scriptlet, len);
        }

        if self.rest().starts_with("%>") {
            self.emit(TokenKind::Symbol2, 2);
        }
    }

    /// The name token of a directive carries the whitespace that precedes it.
    fn lex_directive_name(&mut self) {
        let blank_len = self.len_while(0, is_blank);
        let name_len = self.len_while(blank_len, is_name_char);

        if name_len > 0 {
            self.emit(TokenKind::Tag, blank_len + name_len);
        }

        self.enter_body(Mode::DirectiveBody);
    }

    fn enter_body(&mut self, mode: Mode) {
        self.mode = mode;
        self.after_equals = false;
    }

    fn lex_body(&mut self) {
        let rest = self.rest();
        let after_equals = self.after_equals;

        self.after_equals = false;

        match self.peek(0) {
            Some(b'\n') => {
                self.after_equals = after_equals;
                self.emit(TokenKind::Eol, 1);
            }
            Some(ch) if is_blank(ch) => {
                let len = self.len_while(0, is_blank);

                self.after_equals = after_equals;
                self.emit(TokenKind::Whitespace, len);
            }
            Some(b'=') => {
                self.after_equals = true;
                self.emit(TokenKind::Symbol, 1);
            }
            Some(quote @ (b'"' | b'\'')) => match rest[1..].find(quote as char) {
                Some(idx) => self.emit(TokenKind::AttrValue, idx + 2),
                None => {
                    let len = rest.find('\n').unwrap_or(rest.len());

                    self.emit(TokenKind::Error, len);
                }
            },
            _ if rest.starts_with("%>") => {
                let kind = if self.mode == Mode::DirectiveBody {
                    TokenKind::Symbol
                } else {
                    TokenKind::Text
                };

                self.emit(kind, 2);
                self.enter_body(Mode::Content);
            }
            _ if rest.starts_with("/>") => {
                self.emit(TokenKind::Symbol, 2);
                self.enter_body(Mode::Content);
            }
            Some(b'>') => {
                self.emit(TokenKind::Symbol, 1);
                self.enter_body(Mode::Content);
            }
            Some(b'<') => self.enter_body(Mode::Content),
            Some(ch) if is_name_char(ch) => {
                let kind = if after_equals {
                    TokenKind::AttrValue
                } else {
                    TokenKind::Attribute
                };

                let len = self.len_while(0, is_name_char);

                self.emit(kind, len);
            }
            _ => {
                let len = rest.chars().next().map_or(1, char::len_utf8);

                self.emit(TokenKind::Text, len);
            }
        }
    }
}

pub fn lex(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).run()
}
