mod actions;
mod conditions;

use self::conditions::*;
use crate::parser::cursor::TokenCursor;
use crate::parser::element_builder::ElementBuilder;
use crate::parser::settings::{ParserSettings, TextSpans};
use crate::syntax_element::SyntaxElement;
use crate::token::{Token, TokenKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Init,
    Text,
    Comment,
    ScriptletOpen,
    ScriptletInside,
    TagOpenSymbol,
    TagAfterName,
    Tag,
    TagAttr,
    TagValue,
    DirOpenSymbol,
    DirAfterName,
    Dir,
    DirAttr,
    DirValue,
}

/// Single pass over a token stream that turns it into syntax elements.
///
/// Every token is delivered to the handler of the current state. Handlers
/// either accept the token, or back the cursor up by one token so that it's
/// re-delivered to the next state. Elements are emitted only on the way
/// back to `Init`, and each one spans from its first token to the last
/// accepted one, so consecutive elements tile the input.
pub struct StateMachine<'i, I: Iterator<Item = Token<'i>>> {
    cursor: TokenCursor<'i, I>,
    state: State,
    builder: ElementBuilder<'i>,
    elements: Vec<SyntaxElement<'i>>,
    text_spans: TextSpans,
}

impl<'i, I: Iterator<Item = Token<'i>>> StateMachine<'i, I> {
    pub fn new(tokens: I, settings: &ParserSettings) -> Self {
        StateMachine {
            cursor: TokenCursor::new(tokens),
            state: State::Init,
            builder: ElementBuilder::new(0),
            elements: Vec::with_capacity(settings.preallocated_element_count),
            text_spans: settings.text_spans,
        }
    }

    pub fn run(mut self) -> Vec<SyntaxElement<'i>> {
        while let Some(token) = self.cursor.consume() {
            match self.state {
                State::Init => self.init_state(token),
                State::Text => self.text_state(token),
                State::Comment => self.comment_state(token),
                State::ScriptletOpen => self.scriptlet_open_state(token),
                State::ScriptletInside => self.scriptlet_inside_state(token),
                State::TagOpenSymbol => self.tag_open_symbol_state(token),
                State::TagAfterName => self.back_up_to(State::Tag),
                State::Tag => self.tag_state(token),
                State::TagAttr => self.tag_attr_state(token),
                State::TagValue => self.tag_value_state(token),
                State::DirOpenSymbol => self.dir_open_symbol_state(token),
                State::DirAfterName => self.back_up_to(State::Dir),
                State::Dir => self.dir_state(token),
                State::DirAttr => self.dir_attr_state(token),
                State::DirValue => self.dir_value_state(token),
            }
        }

        self.finalize();

        self.elements
    }

    fn finalize(&mut self) {
        trace!(@finalize self.state);

        match self.state {
            State::Init => (),
            State::Text => self.emit_text(),
            State::Comment => self.emit_comment(),
            State::TagAfterName | State::Tag | State::TagAttr | State::TagValue => {
                self.emit_tag(false)
            }
            State::DirAfterName | State::Dir | State::DirAttr | State::DirValue => {
                self.emit_directive()
            }
            // NOTE: a lone opener without a name carries nothing to salvage.
            State::TagOpenSymbol
            | State::DirOpenSymbol
            | State::ScriptletOpen
            | State::ScriptletInside => self.emit_error(),
        }
    }

    fn init_state(&mut self, token: Token<'i>) {
        if is_start_tag_opener(&token) {
            self.start_element(&token, State::TagOpenSymbol);
        } else if is_end_tag_opener(&token) {
            self.start_element(&token, State::TagOpenSymbol);
            self.builder.mark_as_end_tag();
        } else if is_directive_opener(&token) {
            self.start_element(&token, State::DirOpenSymbol);
        } else if token.is(TokenKind::Comment) {
            self.start_element(&token, State::Comment);
        } else if is_scriptlet_opener(&token) {
            self.start_element(&token, State::ScriptletOpen);
        } else {
            self.start_element(&token, State::Text);
        }
    }

    fn text_state(&mut self, token: Token<'i>) {
        if !token.is(TokenKind::Text) {
            self.back_up();
            self.emit_text();
        }
    }

    fn comment_state(&mut self, token: Token<'i>) {
        if !token.is_any_of(COMMENT_CONTINUATION) {
            self.back_up();
            self.emit_comment();
        }
    }

    fn scriptlet_open_state(&mut self, token: Token<'i>) {
        if token.is(TokenKind::Scriptlet) {
            self.switch_state(State::ScriptletInside);
        } else {
            self.emit_error();
        }
    }

    fn scriptlet_inside_state(&mut self, token: Token<'i>) {
        match token.kind() {
            TokenKind::Scriptlet => (),
            TokenKind::Symbol2 => self.emit_scripting(),
            _ => self.emit_error(),
        }
    }

    fn tag_open_symbol_state(&mut self, token: Token<'i>) {
        match token.kind() {
            TokenKind::Tag => {
                self.builder.set_name(token.text().trim());
                self.switch_state(State::TagAfterName);
            }
            TokenKind::EndTagName => {
                self.builder.set_name(token.text().trim());
                self.builder.mark_as_end_tag();
                self.switch_state(State::TagAfterName);
            }
            _ => self.reset(),
        }
    }

    fn tag_state(&mut self, token: Token<'i>) {
        if token.is_any_of(BODY_FILLER) {
            return;
        }

        match token.kind() {
            TokenKind::Attribute => {
                self.builder.stage_attr_name(token);
                self.switch_state(State::TagAttr);
            }
            TokenKind::Symbol => self.emit_tag(is_self_closing_symbol(&token)),
            _ => self.tag_with_error(),
        }
    }

    fn tag_attr_state(&mut self, token: Token<'i>) {
        if token.is_any_of(ATTR_FILLER) || is_equals_symbol(&token) {
            return;
        }

        match token.kind() {
            TokenKind::AttrValue => self.back_up_to(State::TagValue),
            TokenKind::Attribute | TokenKind::Symbol => {
                self.builder.flush_pending_attr();
                self.back_up_to(State::Tag);
            }
            _ => self.tag_with_error(),
        }
    }

    fn tag_value_state(&mut self, token: Token<'i>) {
        match token.kind() {
            TokenKind::AttrValue => self.builder.commit_attr(Some(&token)),
            TokenKind::Error => self.tag_with_error(),
            _ => self.back_up_to(State::Tag),
        }
    }

    fn dir_open_symbol_state(&mut self, token: Token<'i>) {
        if token.is_any_of(ATTR_FILLER) {
            return;
        }

        if token.is(TokenKind::Tag) {
            self.builder.set_name(token.text().trim());
            self.switch_state(State::DirAfterName);
        } else {
            self.reset();
        }
    }

    fn dir_state(&mut self, token: Token<'i>) {
        if token.is_any_of(BODY_FILLER) {
            return;
        }

        if token.is(TokenKind::Attribute) {
            self.builder.stage_attr_name(token);
            self.switch_state(State::DirAttr);
        } else if is_directive_closer(&token) {
            self.emit_directive();
        } else {
            self.dir_with_error();
        }
    }

    fn dir_attr_state(&mut self, token: Token<'i>) {
        if token.is_any_of(ATTR_FILLER) || is_equals_symbol(&token) {
            return;
        }

        match token.kind() {
            TokenKind::AttrValue => self.back_up_to(State::DirValue),
            TokenKind::Attribute | TokenKind::Symbol => {
                self.builder.flush_pending_attr();
                self.back_up_to(State::Dir);
            }
            _ if is_directive_closer(&token) => {
                self.builder.flush_pending_attr();
                self.back_up_to(State::Dir);
            }
            _ => self.dir_with_error(),
        }
    }

    fn dir_value_state(&mut self, token: Token<'i>) {
        match token.kind() {
            TokenKind::AttrValue => self.builder.commit_attr(Some(&token)),
            TokenKind::Error => self.dir_with_error(),
            _ => self.back_up_to(State::Dir),
        }
    }
}
