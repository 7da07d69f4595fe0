use super::Attribute;
use crate::base::Range;
use std::fmt::{self, Debug};

/// `<name attr=value ...>` or, self-closed, `<name ... />`.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenTag<'i> {
    range: Range,
    name: &'i str,
    attributes: Vec<Attribute<'i>>,
    is_empty: bool,
}

impl<'i> OpenTag<'i> {
    pub(crate) fn new(
        range: Range,
        name: &'i str,
        attributes: Vec<Attribute<'i>>,
        is_empty: bool,
    ) -> Self {
        OpenTag {
            range,
            name,
            attributes,
            is_empty,
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn name(&self) -> &'i str {
        self.name
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute<'i>] {
        &self.attributes
    }

    #[inline]
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute<'i>> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// `true` iff the tag was closed with `/>`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }
}

impl Debug for OpenTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenTag")
            .field("range", &self.range)
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("is_empty", &self.is_empty)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct EndTag<'i> {
    range: Range,
    name: &'i str,
}

impl<'i> EndTag<'i> {
    pub(crate) fn new(range: Range, name: &'i str) -> Self {
        EndTag { range, name }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn name(&self) -> &'i str {
        self.name
    }
}

impl Debug for EndTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndTag")
            .field("range", &self.range)
            .field("name", &self.name)
            .finish()
    }
}

/// `<%@ name attr=value ... %>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Directive<'i> {
    range: Range,
    name: &'i str,
    attributes: Vec<Attribute<'i>>,
}

impl<'i> Directive<'i> {
    pub(crate) fn new(range: Range, name: &'i str, attributes: Vec<Attribute<'i>>) -> Self {
        Directive {
            range,
            name,
            attributes,
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn name(&self) -> &'i str {
        self.name
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute<'i>] {
        &self.attributes
    }

    #[inline]
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute<'i>> {
        self.attributes.iter().find(|a| a.name() == name)
    }
}

impl Debug for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directive")
            .field("range", &self.range)
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .finish()
    }
}
