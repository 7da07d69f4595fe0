/// How spans of [`SyntaxElement::Text`] elements are reported.
///
/// [`SyntaxElement::Text`]: crate::SyntaxElement::Text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TextSpans {
    /// Text elements carry the exact range of the text run.
    #[default]
    Exact,

    /// Text elements carry the shared [`Range::unknown`] marker. Only the
    /// presence and position of text in the element sequence is reported.
    ///
    /// [`Range::unknown`]: crate::Range::unknown
    Unknown,
}

/// Specifies settings for [`SyntaxParser`].
///
/// [`SyntaxParser`]: crate::SyntaxParser
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Reporting mode for text element spans.
    ///
    /// ### Default
    ///
    /// [`TextSpans::Exact`].
    pub text_spans: TextSpans,

    /// Number of elements the output list is preallocated for.
    ///
    /// ### Default
    ///
    /// `64`.
    pub preallocated_element_count: usize,
}

impl Default for ParserSettings {
    #[inline]
    fn default() -> Self {
        ParserSettings {
            text_spans: TextSpans::default(),
            preallocated_element_count: 64,
        }
    }
}
