mod attribute;
mod tags;

use crate::base::Range;
use std::fmt::{self, Display};

pub use self::attribute::Attribute;
pub use self::tags::{Directive, EndTag, OpenTag};

/// A structural unit of a document.
///
/// Elements are produced once, in document order, and never mutated
/// afterwards. Every variant spans a `[from, to)` range of the source; for
/// `Text` the range may be [`Range::unknown`] if the parser was configured not
/// to track text spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxElement<'i> {
    Text(Range),
    Comment(Range),
    Scripting(Range),
    OpenTag(OpenTag<'i>),
    EndTag(EndTag<'i>),
    Directive(Directive<'i>),
    Error(Range),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Comment,
    Scripting,
    OpenTag,
    EndTag,
    Directive,
    Error,
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Text => "text",
            ElementKind::Comment => "comment",
            ElementKind::Scripting => "scripting",
            ElementKind::OpenTag => "open tag",
            ElementKind::EndTag => "end tag",
            ElementKind::Directive => "directive",
            ElementKind::Error => "error",
        })
    }
}

impl<'i> SyntaxElement<'i> {
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self {
            SyntaxElement::Text(_) => ElementKind::Text,
            SyntaxElement::Comment(_) => ElementKind::Comment,
            SyntaxElement::Scripting(_) => ElementKind::Scripting,
            SyntaxElement::OpenTag(_) => ElementKind::OpenTag,
            SyntaxElement::EndTag(_) => ElementKind::EndTag,
            SyntaxElement::Directive(_) => ElementKind::Directive,
            SyntaxElement::Error(_) => ElementKind::Error,
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        match self {
            SyntaxElement::Text(range)
            | SyntaxElement::Comment(range)
            | SyntaxElement::Scripting(range)
            | SyntaxElement::Error(range) => *range,
            SyntaxElement::OpenTag(tag) => tag.range(),
            SyntaxElement::EndTag(tag) => tag.range(),
            SyntaxElement::Directive(directive) => directive.range(),
        }
    }

    /// Name of a tag, end tag or directive.
    #[inline]
    pub fn name(&self) -> Option<&'i str> {
        match self {
            SyntaxElement::OpenTag(tag) => Some(tag.name()),
            SyntaxElement::EndTag(tag) => Some(tag.name()),
            SyntaxElement::Directive(directive) => Some(directive.name()),
            _ => None,
        }
    }

    /// Attributes of a tag or directive, empty for every other element.
    #[inline]
    pub fn attributes(&self) -> &[Attribute<'i>] {
        match self {
            SyntaxElement::OpenTag(tag) => tag.attributes(),
            SyntaxElement::Directive(directive) => directive.attributes(),
            _ => &[],
        }
    }

    #[inline]
    pub fn has_exact_span(&self) -> bool {
        !self.range().is_unknown()
    }
}
