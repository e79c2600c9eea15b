//! Tests for expression parsing.

use esz::ast::*;
use esz::errors::ErrorKind;
use esz::{parse_script, Options};

fn parse(source: &str) -> Program {
    parse_script(source, &Options::default())
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

fn parse_next(source: &str) -> Program {
    let options = Options {
        next: true,
        ..Options::default()
    };
    parse_script(source, &options).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

fn parse_error(source: &str) -> ErrorKind {
    parse_script(source, &Options::default())
        .expect_err(&format!("expected error for {source:?}"))
        .kind
}

fn first_expression(program: &Program) -> &Expression {
    match program.body.first() {
        Some(Statement::Expression(statement)) => &statement.expression,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn binary_precedence_builds_the_expected_tree() {
    let program = parse("1 + 2 * 3;");
    match first_expression(&program) {
        Expression::Binary(add) => {
            assert_eq!(add.operator, BinaryOperator::Add);
            match &*add.right {
                Expression::Binary(mul) => assert_eq!(mul.operator, BinaryOperator::Multiply),
                other => panic!("expected multiplication on the right, got {other:?}"),
            }
        }
        other => panic!("expected binary expression, got {other:?}"),
    }
}

#[test]
fn exponentiation_is_right_associative() {
    let program = parse("a ** b ** c;");
    match first_expression(&program) {
        Expression::Binary(outer) => {
            assert_eq!(outer.operator, BinaryOperator::Exponentiate);
            assert!(matches!(&*outer.left, Expression::Identifier(id) if id.name == "a"));
            assert!(matches!(&*outer.right, Expression::Binary(_)));
        }
        other => panic!("expected ** chain, got {other:?}"),
    }
}

#[test]
fn exponentiation_rejects_unary_base() {
    assert_eq!(parse_error("-a ** b;"), ErrorKind::UnexpectedToken("**"));
    // A parenthesized base is fine.
    parse("(-a) ** b;");
}

#[test]
fn division_versus_regex_is_decided_by_context() {
    let program = parse("1 / -1");
    match first_expression(&program) {
        Expression::Binary(div) => {
            assert_eq!(div.operator, BinaryOperator::Divide);
            match &*div.right {
                Expression::Unary(minus) => {
                    assert_eq!(minus.operator, UnaryOperator::Minus);
                    assert!(minus.prefix);
                }
                other => panic!("expected unary minus, got {other:?}"),
            }
        }
        other => panic!("expected division, got {other:?}"),
    }

    let program = parse("/a/i");
    match first_expression(&program) {
        Expression::Literal(literal) => {
            let regex = literal.regex.as_ref().expect("missing regex payload");
            assert_eq!(regex.pattern, "a");
            assert_eq!(regex.flags, "i");
            assert_eq!(literal.value, LiteralValue::Null);
        }
        other => panic!("expected regex literal, got {other:?}"),
    }
}

#[test]
fn duplicate_regex_flag_is_fatal() {
    assert_eq!(parse_error("/./gig;"), ErrorKind::DuplicateRegExpFlag('g'));
}

#[test]
fn update_expressions() {
    let program = parse("++x");
    match first_expression(&program) {
        Expression::Update(update) => {
            assert_eq!(update.operator, UpdateOperator::Increment);
            assert!(update.prefix);
            assert!(matches!(&*update.argument, Expression::Identifier(id) if id.name == "x"));
        }
        other => panic!("expected update expression, got {other:?}"),
    }

    let program = parse("x--");
    assert!(matches!(
        first_expression(&program),
        Expression::Update(u) if !u.prefix && u.operator == UpdateOperator::Decrement
    ));
}

#[test]
fn postfix_update_does_not_cross_a_newline() {
    // ASI applies: `x` and `++y` are two statements.
    let program = parse("x\n++y");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn conditional_and_sequence() {
    let program = parse("a ? b : c, d;");
    match first_expression(&program) {
        Expression::Sequence(seq) => {
            assert_eq!(seq.expressions.len(), 2);
            assert!(matches!(seq.expressions[0], Expression::Conditional(_)));
        }
        other => panic!("expected sequence, got {other:?}"),
    }
}

#[test]
fn assignment_operators_and_targets() {
    let program = parse("a = b += 1;");
    match first_expression(&program) {
        Expression::Assignment(assign) => {
            assert_eq!(assign.operator, AssignmentOperator::Assign);
            assert!(matches!(&*assign.left, Pattern::Identifier(id) if id.name == "a"));
            assert!(matches!(&*assign.right, Expression::Assignment(inner)
                if inner.operator == AssignmentOperator::Add));
        }
        other => panic!("expected assignment, got {other:?}"),
    }

    assert_eq!(parse_error("1 = 2;"), ErrorKind::InvalidDestructuringTarget);
    assert_eq!(parse_error("a + b = 2;"), ErrorKind::InvalidDestructuringTarget);
}

#[test]
fn destructuring_assignment_reinterprets_literals() {
    let program = parse("({a, b: c, d = 1} = x);");
    match first_expression(&program) {
        Expression::Assignment(assign) => match &*assign.left {
            Pattern::Object(object) => assert_eq!(object.properties.len(), 3),
            other => panic!("expected object pattern, got {other:?}"),
        },
        other => panic!("expected assignment, got {other:?}"),
    }

    let program = parse("[a, , [b], c = 2] = y;");
    match first_expression(&program) {
        Expression::Assignment(assign) => match &*assign.left {
            Pattern::Array(array) => {
                assert_eq!(array.elements.len(), 4);
                assert!(array.elements[1].is_none());
            }
            other => panic!("expected array pattern, got {other:?}"),
        },
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn shorthand_initializer_requires_a_pattern_context() {
    assert_eq!(
        parse_error("({a = 1});"),
        ErrorKind::InvalidShorthandAssignment
    );
    // The same cover is fine once it is reinterpreted.
    parse("({a = 1} = x);");
}

#[test]
fn member_expressions_and_calls() {
    let program = parse("a.b[c](1, ...rest);");
    match first_expression(&program) {
        Expression::Call(call) => {
            assert_eq!(call.arguments.len(), 2);
            assert!(matches!(call.arguments[1], Expression::Spread(_)));
            match &*call.callee {
                Expression::Member(member) => assert!(member.computed),
                other => panic!("expected member callee, got {other:?}"),
            }
        }
        other => panic!("expected call, got {other:?}"),
    }
}

#[test]
fn keywords_are_valid_member_names() {
    parse("a.delete.class.if;");
}

#[test]
fn new_expressions() {
    let program = parse("new A(1);");
    match first_expression(&program) {
        Expression::New(new) => {
            assert_eq!(new.arguments.len(), 1);
            assert!(matches!(&*new.callee, Expression::Identifier(id) if id.name == "A"));
        }
        other => panic!("expected new expression, got {other:?}"),
    }
    // `new a.b().c` parses the arguments as part of the new expression.
    parse("new a.b().c;");
    parse("new new A();");
}

#[test]
fn new_target_is_only_valid_inside_functions() {
    parse("function f() { return new.target; }");
    assert_eq!(parse_error("new.target;"), ErrorKind::UnexpectedNewTarget);
    assert_eq!(parse_error("new.meta;"), ErrorKind::InvalidMetaProperty);
}

#[test]
fn template_literals() {
    let program = parse("`a${x}b${y}c`;");
    match first_expression(&program) {
        Expression::Template(template) => {
            assert_eq!(template.quasis.len(), 3);
            assert_eq!(template.expressions.len(), 2);
            assert_eq!(template.quasis[0].value.cooked, "a");
            assert_eq!(template.quasis[2].value.cooked, "c");
            assert!(template.quasis[2].tail);
            assert!(!template.quasis[0].tail);
        }
        other => panic!("expected template literal, got {other:?}"),
    }

    let program = parse("tag`x${1}y`;");
    assert!(matches!(
        first_expression(&program),
        Expression::TaggedTemplate(_)
    ));
}

#[test]
fn arrow_functions() {
    let program = parse("(a, b) => a + b");
    match first_expression(&program) {
        Expression::Arrow(arrow) => {
            assert_eq!(arrow.params.len(), 2);
            assert!(arrow.expression);
            assert!(!arrow.is_async);
            assert!(matches!(arrow.body, ArrowBody::Expression(_)));
        }
        other => panic!("expected arrow function, got {other:?}"),
    }

    parse("x => x");
    parse("() => {}");
    parse("(a = 1, {b}, [c], ...d) => a");
}

#[test]
fn arrow_cover_violations_have_specific_errors() {
    assert_eq!(
        parse_error("((a),(b))=>0"),
        ErrorKind::InvalidParenthesizedPattern
    );
    assert_eq!(parse_error("(a.b) => 0"), ErrorKind::InvalidArrowParams);
    assert_eq!(parse_error("(a, b, )"), ErrorKind::UnexpectedTrailingComma);
    assert_eq!(parse_error("(...a)"), ErrorKind::UnexpectedRestElement);
    assert_eq!(parse_error("(a, ...b, c) => 0"), ErrorKind::ParamAfterRest);
}

#[test]
fn trailing_comma_is_fine_when_the_arrow_appears() {
    parse("(a, b, ) => a");
}

#[test]
fn async_arrows_and_async_calls() {
    let program = parse("async (a) => a");
    assert!(matches!(
        first_expression(&program),
        Expression::Arrow(arrow) if arrow.is_async
    ));

    let program = parse("async x => x");
    assert!(matches!(
        first_expression(&program),
        Expression::Arrow(arrow) if arrow.is_async && arrow.params.len() == 1
    ));

    // Without the arrow this is a plain call of a function named async.
    let program = parse("async(a, b)");
    match first_expression(&program) {
        Expression::Call(call) => {
            assert!(matches!(&*call.callee, Expression::Identifier(id) if id.name == "async"));
            assert_eq!(call.arguments.len(), 2);
        }
        other => panic!("expected call, got {other:?}"),
    }

    // A line terminator after async forces the identifier reading.
    let program = parse("async\nx => x");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn async_call_continues_the_binary_climb() {
    let program = parse("async(1) + 2;");
    assert!(matches!(
        first_expression(&program),
        Expression::Binary(b) if b.operator == BinaryOperator::Add
    ));
}

#[test]
fn function_and_class_expressions() {
    parse("(function () {});");
    parse("(function named(a, b) { return a; });");
    parse("(function* gen() { yield 1; });");
    parse("(async function () {});");
    parse("(class {});");
    parse("(class Named extends Base { constructor() { super(); } });");
}

#[test]
fn yield_inside_generators() {
    parse("function* g() { yield; yield 1; yield* other(); }");
    // Outside a generator `yield` is an ordinary identifier in sloppy mode.
    parse("var yield = 1;");
    parse("function f() { return yield; }");
}

#[test]
fn await_inside_async_functions() {
    parse("async function f() { await g(); }");
    // `await` is an identifier outside async code.
    parse("var await = 1;");
}

#[test]
fn object_literal_features() {
    parse("({ a: 1, 'b': 2, 3: c, [d]: e, f, g(h) {}, get i() { return 1 }, set j(v) {} });");
    parse("({ async m() {}, *gen() {} });");
    assert_eq!(
        parse_error("({ __proto__: 1, '__proto__': 2 });"),
        ErrorKind::DuplicateProto
    );
    // Shorthand and computed forms do not count as duplicate __proto__.
    parse("({ __proto__: 1, ['__proto__']: 2 });");
}

#[test]
fn accessor_arities_are_validated() {
    assert_eq!(parse_error("({ get a(x) {} });"), ErrorKind::BadGetterArity);
    assert_eq!(parse_error("({ set a() {} });"), ErrorKind::BadSetterArity);
    assert_eq!(
        parse_error("({ set a(...v) {} });"),
        ErrorKind::BadSetterRestParameter
    );
}

#[test]
fn object_spread_is_gated_on_next() {
    parse_next("({ ...a });");
    parse_next("({ ...a, b: 1 });");
    assert!(parse_script("({ ...a });", &Options::default()).is_err());
}

#[test]
fn bigint_literals_are_gated_on_next() {
    let program = parse_next("123n;");
    match first_expression(&program) {
        Expression::BigInt(bigint) => assert_eq!(bigint.value, 123.0),
        other => panic!("expected bigint literal, got {other:?}"),
    }
    assert!(parse_script("123n;", &Options::default()).is_err());
}

#[test]
fn dynamic_import_requires_exactly_one_argument() {
    let options = Options {
        next: true,
        ..Options::default()
    };
    parse_script("import('mod');", &options).expect("dynamic import should parse");
    assert_eq!(
        parse_script("import();", &options).unwrap_err().kind,
        ErrorKind::BadImportCallArity
    );
    assert_eq!(
        parse_script("import('a', 'b');", &options).unwrap_err().kind,
        ErrorKind::BadImportCallArity
    );
    assert_eq!(
        parse_script("new import('a');", &options).unwrap_err().kind,
        ErrorKind::InvalidNewWithImport
    );
}

#[test]
fn do_expressions_are_gated_on_v8() {
    let options = Options {
        v8: true,
        ..Options::default()
    };
    let program = parse_script("var x = do { 1; };", &options).expect("do expression");
    match program.body.first() {
        Some(Statement::VariableDeclaration(decl)) => {
            let init = decl.declarations[0].init.as_ref().expect("missing init");
            assert!(matches!(**init, Expression::Do(_)));
        }
        other => panic!("expected var declaration, got {other:?}"),
    }
    assert!(parse_script("var x = do { 1; };", &Options::default()).is_err());
}

#[test]
fn throw_expressions_are_gated_on_next() {
    parse_next("var f = () => throw new Error('x');");
    assert!(parse_script("var f = () => throw 1;", &Options::default()).is_err());
}

#[test]
fn holes_are_preserved_in_array_literals() {
    let program = parse("[, 1, , 2, ];");
    match first_expression(&program) {
        Expression::Array(array) => {
            assert_eq!(array.elements.len(), 4);
            assert!(array.elements[0].is_none());
            assert!(array.elements[2].is_none());
        }
        other => panic!("expected array literal, got {other:?}"),
    }
}

#[test]
fn numeric_literal_values() {
    for (source, expected) in [
        ("0;", 0.0),
        ("123;", 123.0),
        ("0xFF;", 255.0),
        ("0o17;", 15.0),
        ("0b101;", 5.0),
        ("1.5e2;", 150.0),
        (".25;", 0.25),
    ] {
        let program = parse(source);
        match first_expression(&program) {
            Expression::Literal(literal) => {
                assert_eq!(literal.value, LiteralValue::Number(expected), "{source}")
            }
            other => panic!("expected numeric literal, got {other:?}"),
        }
    }
}
