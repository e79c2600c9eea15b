//! Tests for the JSX grammar and lexer mode.

use esz::ast::*;
use esz::errors::ErrorKind;
use esz::{parse_script, Options};

fn jsx_options() -> Options {
    Options {
        jsx: true,
        ..Options::default()
    }
}

fn parse(source: &str) -> Program {
    parse_script(source, &jsx_options())
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

fn parse_error(source: &str) -> ErrorKind {
    parse_script(source, &jsx_options())
        .expect_err(&format!("expected error for {source:?}"))
        .kind
}

fn first_element(program: &Program) -> &JSXElement {
    match program.body.first() {
        Some(Statement::Expression(statement)) => match &*statement.expression {
            Expression::JSXElement(element) => element,
            other => panic!("expected JSX element, got {other:?}"),
        },
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn jsx_is_off_by_default() {
    assert!(parse_script("<div/>;", &Options::default()).is_err());
}

#[test]
fn self_closing_element() {
    let program = parse("<br/>;");
    let element = first_element(&program);
    assert!(element.opening_element.self_closing);
    assert!(element.closing_element.is_none());
    assert!(element.children.is_empty());
    match &element.opening_element.name {
        JSXElementName::Identifier(id) => assert_eq!(id.name, "br"),
        other => panic!("expected identifier name, got {other:?}"),
    }
}

#[test]
fn element_with_text_and_container_children() {
    let program = parse("<div>hello {name}!</div>;");
    let element = first_element(&program);
    assert!(!element.opening_element.self_closing);
    assert!(element.closing_element.is_some());
    assert_eq!(element.children.len(), 3);
    match &element.children[0] {
        JSXChild::Text(text) => assert_eq!(text.value, "hello "),
        other => panic!("expected text child, got {other:?}"),
    }
    match &element.children[1] {
        JSXChild::Container(container) => match &*container.expression {
            JSXExpression::Expression(Expression::Identifier(id)) => assert_eq!(id.name, "name"),
            other => panic!("expected identifier container, got {other:?}"),
        },
        other => panic!("expected expression container, got {other:?}"),
    }
}

#[test]
fn attributes_string_container_and_spread() {
    let program = parse(r#"<a href="x" on={go} {...rest} plain/>;"#);
    let element = first_element(&program);
    let attributes = &element.opening_element.attributes;
    assert_eq!(attributes.len(), 4);
    match &attributes[0] {
        JSXAttributeItem::Attribute(attr) => match attr.value.as_ref() {
            Some(JSXAttributeValue::Literal(literal)) => {
                assert_eq!(literal.value, LiteralValue::String("x".to_string()))
            }
            other => panic!("expected string value, got {other:?}"),
        },
        other => panic!("expected attribute, got {other:?}"),
    }
    assert!(matches!(&attributes[2], JSXAttributeItem::Spread(_)));
    match &attributes[3] {
        JSXAttributeItem::Attribute(attr) => assert!(attr.value.is_none()),
        other => panic!("expected bare attribute, got {other:?}"),
    }
}

#[test]
fn jsx_strings_take_no_escape_processing() {
    let program = parse(r#"<a title="a\nb"/>;"#);
    let element = first_element(&program);
    match &element.opening_element.attributes[0] {
        JSXAttributeItem::Attribute(attr) => match attr.value.as_ref() {
            Some(JSXAttributeValue::Literal(literal)) => {
                assert_eq!(literal.value, LiteralValue::String("a\\nb".to_string()))
            }
            other => panic!("expected string value, got {other:?}"),
        },
        other => panic!("expected attribute, got {other:?}"),
    }
}

#[test]
fn member_and_namespaced_names() {
    let program = parse("<a.b.c/>;");
    let element = first_element(&program);
    assert!(matches!(
        element.opening_element.name,
        JSXElementName::Member(_)
    ));

    let program = parse("<ns:tag/>;");
    let element = first_element(&program);
    assert!(matches!(
        element.opening_element.name,
        JSXElementName::Namespaced(_)
    ));

    parse("<a.b>x</a.b>;");
}

#[test]
fn dashed_identifiers() {
    let program = parse("<my-tag data-id=\"1\"/>;");
    let element = first_element(&program);
    match &element.opening_element.name {
        JSXElementName::Identifier(id) => assert_eq!(id.name, "my-tag"),
        other => panic!("expected identifier, got {other:?}"),
    }
}

#[test]
fn nested_elements() {
    let program = parse("<ul><li>a</li><li>b</li></ul>;");
    let element = first_element(&program);
    assert_eq!(element.children.len(), 2);
    assert!(matches!(element.children[0], JSXChild::Element(_)));
}

#[test]
fn tag_mismatch_is_fatal() {
    assert_eq!(
        parse_error("<div>x</span>;"),
        ErrorKind::ExpectedJsxClosingTag("div".to_string())
    );
    assert_eq!(
        parse_error("<a.b>x</a.c>;"),
        ErrorKind::ExpectedJsxClosingTag("a.b".to_string())
    );
}

#[test]
fn unterminated_element_is_fatal() {
    assert!(matches!(
        parse_error("<div>never closed"),
        ErrorKind::ExpectedJsxClosingTag(_)
    ));
}

#[test]
fn empty_and_spread_containers() {
    let program = parse("<div>{}</div>;");
    let element = first_element(&program);
    match &element.children[0] {
        JSXChild::Container(container) => {
            assert!(matches!(*container.expression, JSXExpression::Empty(_)))
        }
        other => panic!("expected empty container, got {other:?}"),
    }

    let program = parse("<div>{...items}</div>;");
    let element = first_element(&program);
    assert!(matches!(element.children[0], JSXChild::Spread(_)));
}

#[test]
fn greater_than_stays_single_in_jsx() {
    // The `>` closing the tag never fuses into a shift operator.
    parse("<div>{a >> b}</div>;");
    parse("<a b={1}>x</a>;");
}

#[test]
fn jsx_in_expressions() {
    parse("var x = <div/>;");
    parse("f(<div/>, 1);");
    parse("var y = cond ? <a/> : <b/>;");
}
