use crate::parser::TextSpans;
use crate::syntax_element::SyntaxElement;
use memchr::{memchr_iter, memrchr};
use std::ops::Index;
use std::slice;

/// Output of a parse: the element list together with the source its spans
/// point into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'i> {
    source: &'i str,
    elements: Vec<SyntaxElement<'i>>,
    text_spans: TextSpans,
}

impl<'i> ParseResult<'i> {
    pub(crate) fn new(
        source: &'i str,
        elements: Vec<SyntaxElement<'i>>,
        text_spans: TextSpans,
    ) -> Self {
        ParseResult {
            source,
            elements,
            text_spans,
        }
    }

    #[inline]
    pub fn source(&self) -> &'i str {
        self.source
    }

    #[inline]
    pub fn elements(&self) -> &[SyntaxElement<'i>] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, SyntaxElement<'i>> {
        self.elements.iter()
    }

    #[inline]
    pub fn into_elements(self) -> Vec<SyntaxElement<'i>> {
        self.elements
    }

    /// Source text covered by `element`, `None` if its span isn't tracked.
    pub fn raw(&self, element: &SyntaxElement<'i>) -> Option<&'i str> {
        let range = element.range();

        if range.is_unknown() {
            None
        } else {
            self.source.get(range.start..range.end)
        }
    }

    /// Index of the element whose span contains `offset`.
    pub fn element_index_at(&self, offset: usize) -> Option<usize> {
        match self.text_spans {
            TextSpans::Exact => {
                // NOTE: exact spans are ordered and don't overlap.
                let idx = self
                    .elements
                    .partition_point(|e| e.range().end <= offset);

                self.elements
                    .get(idx)
                    .filter(|e| e.range().contains(offset))
                    .map(|_| idx)
            }
            TextSpans::Unknown => self.elements.iter().position(|e| e.range().contains(offset)),
        }
    }

    #[inline]
    pub fn element_at(&self, offset: usize) -> Option<&SyntaxElement<'i>> {
        self.element_index_at(offset).map(|idx| &self.elements[idx])
    }

    #[inline]
    pub fn previous_element(&self, index: usize) -> Option<&SyntaxElement<'i>> {
        index.checked_sub(1).and_then(|idx| self.elements.get(idx))
    }

    #[inline]
    pub fn next_element(&self, index: usize) -> Option<&SyntaxElement<'i>> {
        self.elements.get(index.checked_add(1)?)
    }

    /// Names of the tags opened before `offset` that aren't closed before it,
    /// innermost first. Each name is reported once.
    pub fn unclosed_tags(&self, offset: usize) -> Vec<&'i str> {
        let mut end_tag_stack = Vec::new();
        let mut unclosed = Vec::new();

        let preceding = self
            .elements
            .iter()
            .take_while(|e| e.range().is_unknown() || e.range().end <= offset);

        for element in preceding.collect::<Vec<_>>().into_iter().rev() {
            match element {
                SyntaxElement::EndTag(tag) => end_tag_stack.push(tag.name()),
                SyntaxElement::OpenTag(tag) if !tag.is_empty() => match end_tag_stack.last() {
                    Some(&name) if name == tag.name() => {
                        end_tag_stack.pop();
                    }
                    Some(_) => (),
                    None => {
                        if !unclosed.contains(&tag.name()) {
                            unclosed.push(tag.name());
                        }
                    }
                },
                _ => (),
            }
        }

        unclosed
    }

    /// Zero-based line and byte column of `offset`. Lines are separated by `\n`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let prefix = &self.source.as_bytes()[..offset.min(self.source.len())];
        let line = memchr_iter(b'\n', prefix).count();

        let line_start = memrchr(b'\n', prefix).map_or(0, |pos| pos + 1);

        (line, prefix.len() - line_start)
    }
}

impl<'i> Index<usize> for ParseResult<'i> {
    type Output = SyntaxElement<'i>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'r, 'i> IntoIterator for &'r ParseResult<'i> {
    type Item = &'r SyntaxElement<'i>;
    type IntoIter = slice::Iter<'r, SyntaxElement<'i>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'i> IntoIterator for ParseResult<'i> {
    type Item = SyntaxElement<'i>;
    type IntoIter = std::vec::IntoIter<SyntaxElement<'i>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
