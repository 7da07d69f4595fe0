use crate::base::Range;
use crate::syntax_element::{Attribute, Directive, EndTag, OpenTag, SyntaxElement};
use crate::token::Token;
use hashbrown::HashMap;

/// Attribute list with first-seen position and last-seen value semantics.
///
/// A repeated name keeps the position of its first occurrence and takes the
/// value of the last one. A last occurrence without a value clears the value,
/// so `<t a="1" a>` yields `a` with no value.
#[derive(Debug, Default)]
pub struct AttributeBuffer<'i> {
    items: Vec<Attribute<'i>>,
    index: HashMap<&'i str, usize>,
}

impl<'i> AttributeBuffer<'i> {
    pub fn commit(&mut self, name: &Token<'i>, value: Option<&Token<'i>>) {
        match self.index.get(name.text()) {
            Some(&idx) => self.items[idx].set_value(value),
            None => {
                self.index.insert(name.text(), self.items.len());
                self.items.push(Attribute::new(name, value));
            }
        }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Attribute<'i>> {
        self.items
    }
}

#[derive(Debug, Copy, Clone)]
struct PendingAttr<'i> {
    name: Token<'i>,
    is_committed: bool,
}

/// The element currently being assembled by the state machine.
///
/// A builder is created when an element starts and consumed when it's
/// emitted, so no staging state outlives a single element.
#[derive(Debug)]
pub struct ElementBuilder<'i> {
    start: usize,
    name: Option<&'i str>,
    is_end_tag: bool,
    pending_attr: Option<PendingAttr<'i>>,
    attributes: AttributeBuffer<'i>,
}

impl<'i> ElementBuilder<'i> {
    pub fn new(start: usize) -> Self {
        ElementBuilder {
            start,
            name: None,
            is_end_tag: false,
            pending_attr: None,
            attributes: AttributeBuffer::default(),
        }
    }

    #[inline]
    pub fn set_name(&mut self, name: &'i str) {
        self.name = Some(name);
    }

    #[inline]
    pub fn mark_as_end_tag(&mut self) {
        self.is_end_tag = true;
    }

    #[inline]
    pub fn stage_attr_name(&mut self, name: Token<'i>) {
        self.flush_pending_attr();

        self.pending_attr = Some(PendingAttr {
            name,
            is_committed: false,
        });
    }

    /// Commits the staged attribute name with the given value. Keeps the name
    /// staged, so further value tokens overwrite the value of the same attribute.
    pub fn commit_attr(&mut self, value: Option<&Token<'i>>) {
        if let Some(pending) = &mut self.pending_attr {
            self.attributes.commit(&pending.name, value);
            pending.is_committed = true;
        }
    }

    /// Unstages the attribute name, committing it without a value unless a
    /// value has already been committed for it.
    pub fn flush_pending_attr(&mut self) {
        if let Some(pending) = self.pending_attr.take() {
            if !pending.is_committed {
                self.attributes.commit(&pending.name, None);
            }
        }
    }

    #[inline]
    fn range(&self, end: usize) -> Range {
        // NOTE: tokens out of offset order would otherwise yield an inverted range.
        Range::new(self.start, end.max(self.start))
    }

    pub fn into_tag(mut self, end: usize, is_empty: bool) -> SyntaxElement<'i> {
        self.flush_pending_attr();

        let range = self.range(end);
        let name = self.name.unwrap_or_default();

        if self.is_end_tag {
            SyntaxElement::EndTag(EndTag::new(range, name))
        } else {
            SyntaxElement::OpenTag(OpenTag::new(
                range,
                name,
                self.attributes.into_vec(),
                is_empty,
            ))
        }
    }

    pub fn into_directive(mut self, end: usize) -> SyntaxElement<'i> {
        self.flush_pending_attr();

        let range = self.range(end);

        SyntaxElement::Directive(Directive::new(
            range,
            self.name.unwrap_or_default(),
            self.attributes.into_vec(),
        ))
    }

    #[inline]
    pub fn into_comment(self, end: usize) -> SyntaxElement<'i> {
        SyntaxElement::Comment(self.range(end))
    }

    #[inline]
    pub fn into_scripting(self, end: usize) -> SyntaxElement<'i> {
        SyntaxElement::Scripting(self.range(end))
    }

    #[inline]
    pub fn into_text(self, end: usize) -> SyntaxElement<'i> {
        SyntaxElement::Text(self.range(end))
    }

    #[inline]
    pub fn into_error(self, end: usize) -> SyntaxElement<'i> {
        SyntaxElement::Error(self.range(end))
    }
}
