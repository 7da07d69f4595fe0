use crate::harness::{parse_checked, parse_with};
use jsp_syntax::{ElementKind, ParserSettings, SyntaxElement, SyntaxParser, TextSpans};

const DOC: &str = "<%@ page a='1' %>\n<html>\n<body>\n<p>Hi <%= name %></p>\n<br/>";

#[test]
fn element_lookup() {
    let result = parse_checked(DOC);
    let offset = DOC.find("name").unwrap();

    let idx = result.element_index_at(offset).unwrap();

    assert_eq!(result.elements()[idx].kind(), ElementKind::Scripting);
    assert_eq!(result.previous_element(idx).map(SyntaxElement::kind), Some(ElementKind::Text));
    assert_eq!(result.next_element(idx).and_then(SyntaxElement::name), Some("p"));
    assert_eq!(result.element_at(0).and_then(SyntaxElement::name), Some("page"));
    assert!(result.element_at(DOC.len()).is_none());
}

#[test]
fn unclosed_tags() {
    let result = parse_checked(DOC);

    assert_eq!(result.unclosed_tags(DOC.len()), vec!["body", "html"]);
    assert_eq!(result.unclosed_tags(DOC.find("Hi").unwrap()), vec!["p", "body", "html"]);
    assert!(result.unclosed_tags(0).is_empty());
}

#[test]
fn line_and_column() {
    let result = parse_checked(DOC);

    assert_eq!(result.line_col(0), (0, 0));
    assert_eq!(result.line_col(DOC.find("<html>").unwrap()), (1, 0));
    assert_eq!(result.line_col(DOC.find("Hi").unwrap()), (3, 3));
}

#[test]
fn raw_text_of_every_element_rebuilds_source() {
    let result = parse_checked(DOC);

    let rebuilt = result
        .iter()
        .map(|e| result.raw(e).unwrap_or_default())
        .collect::<String>();

    assert_eq!(rebuilt, DOC);
}

#[test]
fn unknown_text_spans() {
    let parser = SyntaxParser::new(ParserSettings {
        text_spans: TextSpans::Unknown,
        ..ParserSettings::default()
    });

    let result = parse_with(&parser, DOC);

    let texts = result
        .iter()
        .filter(|e| e.kind() == ElementKind::Text)
        .collect::<Vec<_>>();

    assert!(!texts.is_empty());
    assert!(texts.iter().all(|e| !e.has_exact_span() && result.raw(e).is_none()));

    // NOTE: element sequence is the same as with exact spans.
    let exact = parse_checked(DOC);

    assert_eq!(
        result.iter().map(SyntaxElement::kind).collect::<Vec<_>>(),
        exact.iter().map(SyntaxElement::kind).collect::<Vec<_>>()
    );

    let offset = DOC.find("<br/>").unwrap();

    assert_eq!(result.element_at(offset).and_then(SyntaxElement::name), Some("br"));
    assert!(result.element_at(DOC.find("Hi").unwrap()).is_none());
}

#[test]
fn consuming_iteration() {
    let result = parse_checked("<a>b</a>");
    let source = result.source();

    let names = result
        .into_iter()
        .filter_map(|e| e.name())
        .collect::<Vec<_>>();

    assert_eq!(source, "<a>b</a>");
    assert_eq!(names, vec!["a", "a"]);
}
