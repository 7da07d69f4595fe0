use crate::harness::parse_checked;
use jsp_syntax::{ElementKind, Range, SyntaxElement};

#[test]
fn self_closing_tag() {
    let result = parse_checked("<t/>");

    match result.elements() {
        [SyntaxElement::OpenTag(tag)] => {
            assert_eq!(tag.name(), "t");
            assert!(tag.is_empty());
            assert!(tag.attributes().is_empty());
            assert_eq!(tag.range(), Range::new(0, 4));
        }
        other => panic!("Unexpected elements: {other:?}"),
    }
}

#[test]
fn end_tag() {
    let result = parse_checked("</t>");

    match result.elements() {
        [SyntaxElement::EndTag(tag)] => {
            assert_eq!(tag.name(), "t");
            assert_eq!(tag.range(), Range::new(0, 4));
        }
        other => panic!("Unexpected elements: {other:?}"),
    }
}

#[test]
fn open_tag_that_is_not_self_closing() {
    let result = parse_checked("<jsp:include page='a.jsp'>");

    match result.elements() {
        [SyntaxElement::OpenTag(tag)] => {
            assert_eq!(tag.name(), "jsp:include");
            assert!(!tag.is_empty());
        }
        other => panic!("Unexpected elements: {other:?}"),
    }
}

#[test]
fn document_order() {
    let result = parse_checked("<html>\n<body>Hi <b>there</b><br/></body>\n</html>");

    let kinds = result.iter().map(SyntaxElement::kind).collect::<Vec<_>>();
    let names = result.iter().filter_map(SyntaxElement::name).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            ElementKind::OpenTag,
            ElementKind::Text,
            ElementKind::OpenTag,
            ElementKind::Text,
            ElementKind::OpenTag,
            ElementKind::Text,
            ElementKind::EndTag,
            ElementKind::OpenTag,
            ElementKind::EndTag,
            ElementKind::Text,
            ElementKind::EndTag,
        ]
    );

    assert_eq!(names, vec!["html", "body", "b", "b", "br", "body", "html"]);
}

#[test]
fn tag_spanning_lines() {
    let result = parse_checked("<t\n  a='1'\n/>");

    match result.elements() {
        [SyntaxElement::OpenTag(tag)] => {
            assert!(tag.is_empty());
            assert_eq!(tag.attributes().len(), 1);
        }
        other => panic!("Unexpected elements: {other:?}"),
    }
}
