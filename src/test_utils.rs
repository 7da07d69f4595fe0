use crate::{ParseResult, SyntaxElement, Token};

/// Checks that the exact spans of `result` tile `0..source.len()` in order.
///
/// Elements with unknown spans are skipped: the gap they leave must be closed
/// by the next element with an exact span.
pub fn check_coverage(result: &ParseResult<'_>) -> Result<(), String> {
    let mut expected_start = 0;
    let mut pending_unknown = false;

    for (idx, element) in result.iter().enumerate() {
        let range = element.range();

        if range.is_unknown() {
            pending_unknown = true;
            continue;
        }

        let has_gap = if pending_unknown {
            range.start < expected_start
        } else {
            range.start != expected_start
        };

        if has_gap || range.end < range.start {
            return Err(format!(
                "Element #{idx} ({element:?}) doesn't continue from offset {expected_start}"
            ));
        }

        expected_start = range.end;
        pending_unknown = false;
    }

    let source_len = result.source().len();

    if expected_start == source_len || (pending_unknown && expected_start <= source_len) {
        Ok(())
    } else {
        Err(format!(
            "Elements cover {expected_start} bytes of the {source_len} bytes source"
        ))
    }
}

/// Compact description of an element used by the fixtures to compare results.
pub fn describe(result: &ParseResult<'_>, element: &SyntaxElement<'_>) -> String {
    let raw = result.raw(element).unwrap_or("?");

    match element {
        SyntaxElement::OpenTag(tag) => {
            let attrs = tag
                .attributes()
                .iter()
                .map(|a| format!("{}={}", a.name(), a.value().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(",");

            format!(
                "OpenTag({}{}{}) {raw:?}",
                tag.name(),
                if attrs.is_empty() { String::new() } else { format!(" [{attrs}]") },
                if tag.is_empty() { " /" } else { "" },
            )
        }
        SyntaxElement::Directive(directive) => {
            let attrs = directive
                .attributes()
                .iter()
                .map(|a| format!("{}={}", a.name(), a.value().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(",");

            format!(
                "Directive({}{}) {raw:?}",
                directive.name(),
                if attrs.is_empty() { String::new() } else { format!(" [{attrs}]") },
            )
        }
        SyntaxElement::EndTag(tag) => format!("EndTag({}) {raw:?}", tag.name()),
        SyntaxElement::Text(_) => format!("Text {raw:?}"),
        SyntaxElement::Comment(_) => format!("Comment {raw:?}"),
        SyntaxElement::Scripting(_) => format!("Scripting {raw:?}"),
        SyntaxElement::Error(_) => format!("Error {raw:?}"),
    }
}

/// Total length of the tokens, used to sanity check generated streams.
pub fn covered_len(tokens: &[Token<'_>]) -> usize {
    tokens.iter().map(Token::len).sum()
}
