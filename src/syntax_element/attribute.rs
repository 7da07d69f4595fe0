use crate::base::Range;
use crate::token::Token;
use std::fmt::{self, Debug};

/// An attribute of a tag or directive.
///
/// Value offsets are `0` when the attribute has no value.
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute<'i> {
    name: &'i str,
    value: Option<&'i str>,
    name_offset: usize,
    value_offset: usize,
    value_length: usize,
}

impl<'i> Attribute<'i> {
    pub(crate) fn new(name: &Token<'i>, value: Option<&Token<'i>>) -> Self {
        let mut attr = Attribute {
            name: name.text(),
            value: None,
            name_offset: name.offset(),
            value_offset: 0,
            value_length: 0,
        };

        attr.set_value(value);

        attr
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: Option<&Token<'i>>) {
        match value {
            Some(value) => {
                self.value = Some(value.text());
                self.value_offset = value.offset();
                self.value_length = value.len();
            }
            None => {
                self.value = None;
                self.value_offset = 0;
                self.value_length = 0;
            }
        }
    }

    #[inline]
    pub fn name(&self) -> &'i str {
        self.name
    }

    /// The value text as reported by the lexer, quotes included.
    #[inline]
    pub fn value(&self) -> Option<&'i str> {
        self.value
    }

    /// The value text with one pair of matching surrounding quotes removed.
    pub fn unquoted_value(&self) -> Option<&'i str> {
        self.value.map(|value| {
            let bytes = value.as_bytes();

            match (bytes.first(), bytes.last()) {
                (Some(&first), Some(&last))
                    if bytes.len() >= 2 && first == last && (first == b'"' || first == b'\'') =>
                {
                    &value[1..value.len() - 1]
                }
                _ => value,
            }
        })
    }

    #[inline]
    pub fn name_offset(&self) -> usize {
        self.name_offset
    }

    #[inline]
    pub fn value_offset(&self) -> usize {
        self.value_offset
    }

    #[inline]
    pub fn value_length(&self) -> usize {
        self.value_length
    }

    #[inline]
    pub fn name_range(&self) -> Range {
        Range::new(self.name_offset, self.name_offset + self.name.len())
    }

    #[inline]
    pub fn value_range(&self) -> Option<Range> {
        self.value
            .map(|_| Range::new(self.value_offset, self.value_offset + self.value_length))
    }
}

impl Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}
