//! Tests for the public API surface: options, location metadata, comment
//! collection, ESTree serialization, and boundary behaviors.

use esz::ast::*;
use esz::{
    parse_script, parse_script_with_comments, CommentKind, Options,
};
use serde_json::json;

fn parse(source: &str, options: &Options) -> Program {
    parse_script(source, options).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

#[test]
fn empty_source_parses_to_an_empty_program() {
    let program = parse("", &Options::default());
    assert!(program.body.is_empty());
    assert_eq!(program.source_type, SourceType::Script);
}

#[test]
fn a_lone_shebang_parses_to_an_empty_program() {
    let program = parse("#!/usr/bin/env node", &Options::default());
    assert!(program.body.is_empty());
    let program = parse("#!/usr/bin/env node\n", &Options::default());
    assert!(program.body.is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let source = "function f(a, {b} = {}) { return a + b; }\nf(1, {b: 2});";
    let options = Options {
        ranges: true,
        locations: true,
        raw: true,
        ..Options::default()
    };
    assert_eq!(parse(source, &options), parse(source, &options));
}

#[test]
fn ranges_cover_nested_nodes() {
    let options = Options {
        ranges: true,
        ..Options::default()
    };
    let program = parse("1 / -1", &options);
    let statement = match program.body.first() {
        Some(Statement::Expression(statement)) => statement,
        other => panic!("expected expression statement, got {other:?}"),
    };
    assert_eq!(statement.span.start, Some(0));
    assert_eq!(statement.span.end, Some(6));
    match &*statement.expression {
        Expression::Binary(binary) => {
            assert_eq!(binary.span.start, Some(0));
            assert_eq!(binary.span.end, Some(6));
            match &*binary.left {
                Expression::Literal(left) => {
                    assert_eq!(left.span.start, Some(0));
                    assert_eq!(left.span.end, Some(1));
                }
                other => panic!("expected literal, got {other:?}"),
            }
            match &*binary.right {
                Expression::Unary(unary) => {
                    assert_eq!(unary.span.start, Some(4));
                    assert_eq!(unary.span.end, Some(6));
                    match &*unary.argument {
                        Expression::Literal(argument) => {
                            assert_eq!(argument.span.start, Some(5));
                            assert_eq!(argument.span.end, Some(6));
                        }
                        other => panic!("expected literal, got {other:?}"),
                    }
                }
                other => panic!("expected unary, got {other:?}"),
            }
        }
        other => panic!("expected binary expression, got {other:?}"),
    }
}

#[test]
fn locations_track_lines_and_columns() {
    let options = Options {
        locations: true,
        ..Options::default()
    };
    let program = parse("a;\nbb;", &options);
    let second = match &program.body[1] {
        Statement::Expression(statement) => statement,
        other => panic!("expected expression statement, got {other:?}"),
    };
    let loc = second.span.loc.expect("missing loc");
    assert_eq!(loc.start.line, 2);
    assert_eq!(loc.start.column, 0);
    assert_eq!(loc.end.line, 2);
    assert_eq!(loc.end.column, 3);
}

#[test]
fn crlf_counts_as_one_newline() {
    let options = Options {
        locations: true,
        ..Options::default()
    };
    let program = parse("a;\r\nb;", &options);
    let second = match &program.body[1] {
        Statement::Expression(statement) => statement,
        other => panic!("expected expression statement, got {other:?}"),
    };
    assert_eq!(second.span.loc.expect("missing loc").start.line, 2);
}

#[test]
fn raw_slices_match_the_source() {
    let source = "0xFF; 'a\\n'; /re/g; true;";
    let options = Options {
        ranges: true,
        raw: true,
        ..Options::default()
    };
    let program = parse(source, &options);
    for statement in &program.body {
        let expression = match statement {
            Statement::Expression(statement) => &*statement.expression,
            other => panic!("expected expression statement, got {other:?}"),
        };
        let (raw, span) = match expression {
            Expression::Literal(literal) => (literal.raw.as_deref(), &literal.span),
            other => panic!("expected literal, got {other:?}"),
        };
        let start = span.start.expect("missing start") as usize;
        let end = span.end.expect("missing end") as usize;
        assert_eq!(raw, Some(&source[start..end]));
    }
}

#[test]
fn bigint_value_strips_the_suffix() {
    let options = Options {
        next: true,
        raw: true,
        ..Options::default()
    };
    let program = parse("42n;", &options);
    match program.body.first() {
        Some(Statement::Expression(statement)) => match &*statement.expression {
            Expression::BigInt(bigint) => {
                assert_eq!(bigint.value, 42.0);
                assert_eq!(bigint.raw.as_deref(), Some("42n"));
            }
            other => panic!("expected bigint, got {other:?}"),
        },
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn comments_are_collected_in_source_order() {
    let mut comments = Vec::new();
    let options = Options {
        comments: true,
        ..Options::default()
    };
    parse_script_with_comments("// one\nvar a; /* two */ var b; <!-- three\n", &options, &mut comments)
        .expect("parse failed");
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0].kind, CommentKind::SingleLine);
    assert_eq!(comments[0].text, " one");
    assert_eq!(comments[1].kind, CommentKind::MultiLine);
    assert_eq!(comments[1].text, " two ");
    assert_eq!(comments[2].kind, CommentKind::SingleLine);
    assert_eq!(comments[2].text, " three");
    assert!(comments[0].start < comments[1].start);
    assert!(comments[1].start < comments[2].start);
}

#[test]
fn shebang_is_never_collected() {
    let mut comments = Vec::new();
    let options = Options {
        comments: true,
        ..Options::default()
    };
    parse_script_with_comments("#!/usr/bin/env node\n// real\n", &options, &mut comments)
        .expect("parse failed");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, " real");
}

#[test]
fn unicode_identifiers_and_surrogate_pairs() {
    // U+1D49C is a surrogate pair in UTF-16 and a valid identifier start.
    let program = parse("var \u{1D49C} = 1;", &Options::default());
    match program.body.first() {
        Some(Statement::VariableDeclaration(decl)) => {
            assert!(matches!(&decl.declarations[0].id, Pattern::Identifier(id)
                if id.name == "\u{1D49C}"));
        }
        other => panic!("expected var declaration, got {other:?}"),
    }
    parse("var λ = 1; var 漢字 = 2;", &Options::default());
}

#[test]
fn serialization_matches_the_estree_shape() {
    let program = parse("1 / 2;", &Options::default());
    let value = serde_json::to_value(&program).expect("serialize failed");
    assert_eq!(
        value,
        json!({
            "type": "Program",
            "sourceType": "script",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "BinaryExpression",
                    "operator": "/",
                    "left": { "type": "Literal", "value": 1.0 },
                    "right": { "type": "Literal", "value": 2.0 }
                }
            }]
        })
    );
}

#[test]
fn serialization_includes_optional_metadata() {
    let options = Options {
        ranges: true,
        raw: true,
        ..Options::default()
    };
    let program = parse("null;", &options);
    let value = serde_json::to_value(&program).expect("serialize failed");
    assert_eq!(
        value["body"][0]["expression"],
        json!({
            "type": "Literal",
            "value": null,
            "raw": "null",
            "start": 0,
            "end": 4
        })
    );
}

#[test]
fn regex_literals_serialize_their_payload() {
    let program = parse("/ab/gi;", &Options::default());
    let value = serde_json::to_value(&program).expect("serialize failed");
    assert_eq!(
        value["body"][0]["expression"],
        json!({
            "type": "Literal",
            "value": null,
            "regex": { "pattern": "ab", "flags": "gi" }
        })
    );
}

#[test]
fn errors_carry_locations() {
    let error = parse_script("var x = 1;\nvar y = ;", &Options::default()).unwrap_err();
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 8);
    assert!(error.to_string().contains("Line 2"));
}
