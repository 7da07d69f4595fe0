use super::{State, StateMachine};
use crate::base::Range;
use crate::parser::element_builder::ElementBuilder;
use crate::parser::settings::TextSpans;
use crate::syntax_element::SyntaxElement;
use crate::token::Token;
use std::mem;

impl<'i, I: Iterator<Item = Token<'i>>> StateMachine<'i, I> {
    #[inline]
    pub(super) fn switch_state(&mut self, state: State) {
        trace!(@state self.state => state);

        self.state = state;
    }

    #[inline]
    pub(super) fn start_element(&mut self, token: &Token<'i>, state: State) {
        self.builder = ElementBuilder::new(token.offset());
        self.switch_state(state);
    }

    #[inline]
    pub(super) fn back_up(&mut self) {
        self.cursor.unconsume();
    }

    #[inline]
    pub(super) fn back_up_to(&mut self, state: State) {
        self.back_up();
        self.switch_state(state);
    }

    /// Hands the current builder over to `create` and resets to `Init`.
    /// The element ends where the last consumed token ends.
    fn emit(&mut self, create: impl FnOnce(ElementBuilder<'i>, usize) -> SyntaxElement<'i>) {
        let end = self.cursor.consumed_end();
        let builder = mem::replace(&mut self.builder, ElementBuilder::new(end));
        let element = create(builder, end);

        trace!(@output element);

        self.elements.push(element);
        self.switch_state(State::Init);
    }

    pub(super) fn emit_text(&mut self) {
        match self.text_spans {
            TextSpans::Exact => self.emit(ElementBuilder::into_text),
            TextSpans::Unknown => self.emit(|_, _| SyntaxElement::Text(Range::unknown())),
        }
    }

    #[inline]
    pub(super) fn emit_comment(&mut self) {
        self.emit(ElementBuilder::into_comment);
    }

    #[inline]
    pub(super) fn emit_scripting(&mut self) {
        self.emit(ElementBuilder::into_scripting);
    }

    #[inline]
    pub(super) fn emit_error(&mut self) {
        self.emit(ElementBuilder::into_error);
    }

    #[inline]
    pub(super) fn emit_tag(&mut self, is_empty: bool) {
        self.emit(|builder, end| builder.into_tag(end, is_empty));
    }

    #[inline]
    pub(super) fn emit_directive(&mut self) {
        self.emit(ElementBuilder::into_directive);
    }

    /// Unexpected token in the name position: everything consumed so far
    /// becomes an error and the token is re-delivered to `Init`.
    pub(super) fn reset(&mut self) {
        self.back_up();
        self.emit_error();
    }

    /// Unexpected token inside a tag body: the tag is salvaged from the
    /// attributes gathered so far and the token is re-delivered to `Init`.
    pub(super) fn tag_with_error(&mut self) {
        self.back_up();
        self.emit_tag(false);
    }

    pub(super) fn dir_with_error(&mut self) {
        self.back_up();
        self.emit_directive();
    }
}
