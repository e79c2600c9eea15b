//! Tests for statement and declaration parsing.

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

#[test]
fn const_declaration_with_initializer() {
    let program = parse("const fooBar = 123;");
    match program.body.first() {
        Some(Statement::VariableDeclaration(decl)) => {
            assert_eq!(decl.kind, VariableKind::Const);
            assert_eq!(decl.declarations.len(), 1);
            let declarator = &decl.declarations[0];
            assert!(matches!(&declarator.id, Pattern::Identifier(id) if id.name == "fooBar"));
            match declarator.init.as_deref() {
                Some(Expression::Literal(literal)) => {
                    assert_eq!(literal.value, LiteralValue::Number(123.0))
                }
                other => panic!("expected numeric init, got {other:?}"),
            }
        }
        other => panic!("expected const declaration, got {other:?}"),
    }
}

#[test]
fn const_requires_an_initializer() {
    assert_eq!(
        parse_error("const x;"),
        ErrorKind::DeclarationMissingInitializer("const")
    );
    assert_eq!(
        parse_error("var {x};"),
        ErrorKind::DeclarationMissingInitializer("destructuring")
    );
}

#[test]
fn let_is_contextual() {
    // `let` heads a declaration when followed by an identifier, `{`, or `[`.
    parse("let x = 1;");
    parse("let {a} = b;");
    parse("let [a] = b;");
    // Otherwise it is a plain identifier.
    parse("let = 5;");
    parse("let;");
    parse("let + 1;");
}

#[test]
fn duplicate_lexical_bindings_are_fatal() {
    assert_eq!(
        parse_error("let x; let x;"),
        ErrorKind::DuplicateBinding("x".to_string())
    );
    assert_eq!(
        parse_error("var x; let x;"),
        ErrorKind::DuplicateBinding("x".to_string())
    );
    // Shadowing in an inner block is fine for a lexical over a lexical.
    parse("let x; { let x; }");
}

#[test]
fn scope_is_unicode_escape_invariant() {
    // An escaped and an unescaped spelling name the same binding.
    assert_eq!(
        parse_error("let f\\u006Fo; let foo;"),
        ErrorKind::DuplicateBinding("foo".to_string())
    );
}

#[test]
fn restricted_lexical_names() {
    assert_eq!(
        parse_error("let undefined = 1;"),
        ErrorKind::RestrictedBindingName("undefined".to_string())
    );
    assert_eq!(
        parse_error("const NaN = 1;"),
        ErrorKind::RestrictedBindingName("NaN".to_string())
    );
    // `var undefined` follows the var path and stays legal.
    parse("var undefined;");
}

#[test]
fn if_else_chains() {
    let program = parse("if (a) b; else if (c) d; else e;");
    match program.body.first() {
        Some(Statement::If(statement)) => assert!(statement.alternate.is_some()),
        other => panic!("expected if statement, got {other:?}"),
    }
}

#[test]
fn annex_b_function_in_if_clause() {
    parse("if (a) function f() {}");
    // Other single-statement positions reject it.
    assert_eq!(
        parse_error("while (a) function f() {}"),
        ErrorKind::ForbiddenAsStatement("function declaration")
    );
}

#[test]
fn iteration_statements() {
    parse("while (a) b;");
    parse("do a; while (b);");
    parse("do a; while (b)");
    parse("for (;;) break;");
    parse("for (var i = 0; i < 10; i++) {}");
    parse("for (let i = 0, j = 1; ; ) {}");
    parse("for (a in b) {}");
    parse("for (var a in b) {}");
    parse("for (let [k, v] of pairs) {}");
    parse("for ({a} of xs) {}");
    parse("for (a.b in c) {}");
}

#[test]
fn for_in_of_heads_may_not_have_initializers() {
    assert_eq!(
        parse_error("for (var a = 1 in b) {}"),
        ErrorKind::ForInOfLoopInitializer("in")
    );
    assert_eq!(
        parse_error("for (let a = 1 of b) {}"),
        ErrorKind::ForInOfLoopInitializer("of")
    );
}

#[test]
fn for_await_requires_async_context_and_next() {
    let options = Options {
        next: true,
        ..Options::default()
    };
    parse_script("async function f() { for await (const x of xs) {} }", &options)
        .expect("for await should parse");
    assert_eq!(
        parse_script("function f() { for await (const x of xs) {} }", &options)
            .unwrap_err()
            .kind,
        ErrorKind::NotAnAsyncGenerator
    );
    assert_eq!(
        parse_script("async function f() { for await (const x in xs) {} }", &options)
            .unwrap_err()
            .kind,
        ErrorKind::ForAwaitNotOf
    );
}

#[test]
fn for_of_statement_carries_the_await_flag() {
    let options = Options {
        next: true,
        ..Options::default()
    };
    let program =
        parse_script("async function f() { for await (const x of xs) {} }", &options).unwrap();
    let body = match program.body.first() {
        Some(Statement::FunctionDeclaration(f)) => &f.body.body,
        other => panic!("expected function, got {other:?}"),
    };
    match body.first() {
        Some(Statement::ForOf(for_of)) => assert!(for_of.is_await),
        other => panic!("expected for-of, got {other:?}"),
    }

    let program = parse("for (const x of xs) {}");
    assert!(matches!(
        program.body.first(),
        Some(Statement::ForOf(for_of)) if !for_of.is_await
    ));
}

#[test]
fn break_and_continue_need_targets() {
    assert_eq!(parse_error("break;"), ErrorKind::IllegalBreak);
    assert_eq!(parse_error("continue;"), ErrorKind::IllegalContinue);
    assert_eq!(
        parse_error("loop: { break other; }"),
        ErrorKind::UnknownLabel("other".to_string())
    );
    parse("switch (x) { case 1: break; }");
    parse("loop: for (;;) { continue loop; }");
    parse("block: { break block; }");
    // `continue` needs an iteration label.
    assert_eq!(
        parse_error("block: { continue block; }"),
        ErrorKind::IllegalContinue
    );
}

#[test]
fn duplicate_labels_are_fatal() {
    assert_eq!(
        parse_error("a: a: b;"),
        ErrorKind::LabelRedeclaration("a".to_string())
    );
    // The same label can be reused sequentially.
    parse("a: b; a: c;");
}

#[test]
fn return_only_inside_functions() {
    assert_eq!(parse_error("return 1;"), ErrorKind::IllegalReturn);
    parse("function f() { return; }");
    parse("function f() { return 1; }");
}

#[test]
fn throw_forbids_a_newline_before_its_argument() {
    assert_eq!(parse_error("throw\n1;"), ErrorKind::NewlineAfterThrow);
    parse("throw 1;");
}

#[test]
fn switch_allows_a_single_default() {
    parse("switch (a) { case 1: case 2: b; default: c; }");
    assert_eq!(
        parse_error("switch (a) { default: a; default: b; }"),
        ErrorKind::MultipleDefaultsInSwitch
    );
}

#[test]
fn try_catch_finally() {
    parse("try { a; } catch (e) { b; }");
    parse("try { a; } finally { b; }");
    parse("try { a; } catch ({message}) { b; } finally { c; }");
    assert_eq!(parse_error("try { a; }"), ErrorKind::NoCatchOrFinally);
}

#[test]
fn optional_catch_binding_is_gated_on_next() {
    parse_next("try { a; } catch { b; }");
    assert!(parse_script("try { a; } catch { b; }", &Options::default()).is_err());
}

#[test]
fn with_statement_is_sloppy_only() {
    parse("with (a) b;");
    assert_eq!(
        parse_error("'use strict'; with (a) b;"),
        ErrorKind::StrictModeWith
    );
}

#[test]
fn function_declarations() {
    parse("function f() {}");
    parse("function f(a, b = 1, {c}, [d], ...rest) {}");
    parse("function* gen(a) { yield a; }");
    parse("async function af() { await 1; }");
    assert_eq!(parse_error("function () {}"), ErrorKind::UnnamedFunctionDecl);
}

#[test]
fn parameters_after_rest_are_fatal() {
    assert_eq!(
        parse_error("function f(...a, b) {}"),
        ErrorKind::ParamAfterRest
    );
}

#[test]
fn strict_directive_promotes_the_function_body() {
    // Not strict until the directive fires; then `var eval` is fatal.
    assert_eq!(
        parse_error("function f(){ 'use strict'; var eval; }"),
        ErrorKind::StrictLhsAssignment
    );
    // Without the directive the same body is fine.
    parse("function f(){ var eval; }");
}

#[test]
fn use_strict_with_non_simple_parameters_is_fatal() {
    assert_eq!(
        parse_error("function f(a = 1){ 'use strict'; }"),
        ErrorKind::IllegalUseStrict
    );
    assert_eq!(
        parse_error("function f(eval){ 'use strict'; }"),
        ErrorKind::StrictParamName
    );
}

#[test]
fn duplicate_parameters_depend_on_mode() {
    parse("function f(a, a) {}");
    assert_eq!(
        parse_error("'use strict'; function f(a, a) {}"),
        ErrorKind::DuplicateParameter
    );
    assert_eq!(
        parse_error("function f(a, a, b = 1) {}"),
        ErrorKind::DuplicateParameter
    );
    // Arrow parameters never allow duplicates.
    assert_eq!(parse_error("(a, a) => 0"), ErrorKind::DuplicateParameter);
}

#[test]
fn class_declarations() {
    parse("class A {}");
    parse("class A { constructor() {} m() {} static s() {} get g() { return 1 } set v(x) {} }");
    parse("class B extends A { constructor() { super(); } m() { return super.m(); } }");
    parse("class C { *gen() {} }");
    parse("class D { static get g() { return 1 } }");
    assert_eq!(parse_error("class {}"), ErrorKind::UnnamedClassDecl);
}

#[test]
fn class_bodies_are_always_strict() {
    assert_eq!(
        parse_error("class A { m() { with (x) {} } }"),
        ErrorKind::StrictModeWith
    );
}

#[test]
fn constructor_restrictions() {
    assert_eq!(
        parse_error("class A { constructor() {} constructor() {} }"),
        ErrorKind::DuplicateConstructor
    );
    assert_eq!(
        parse_error("class A { get constructor() {} }"),
        ErrorKind::ConstructorSpecialMethod
    );
    assert_eq!(
        parse_error("class A { static prototype() {} }"),
        ErrorKind::StaticPrototype
    );
    // A computed or static "constructor" is an ordinary method.
    parse("class A { static constructor() {} }");
    parse("class A { ['constructor']() {} }");
}

#[test]
fn super_is_position_checked() {
    assert_eq!(parse_error("super();"), ErrorKind::BadSuperCall);
    assert_eq!(
        parse_error("function f() { super.x; }"),
        ErrorKind::UnexpectedSuper
    );
    assert_eq!(
        parse_error("class A { constructor() { super(); } }"),
        ErrorKind::BadSuperCall
    );
    parse("class A extends B { constructor() { super(); } }");
    parse("({ m() { return super.x; } });");
}

#[test]
fn strict_mode_reserved_words() {
    parse("var interface = 1;");
    assert_eq!(
        parse_error("'use strict'; var interface = 1;"),
        ErrorKind::UnexpectedStrictReserved
    );
    assert_eq!(
        parse_error("'use strict'; var let = 1;"),
        ErrorKind::UnexpectedStrictReserved
    );
    assert_eq!(parse_error("var enum = 1;"), ErrorKind::UnexpectedReserved);
}

#[test]
fn strict_assignment_restrictions() {
    assert_eq!(
        parse_error("'use strict'; eval = 1;"),
        ErrorKind::StrictLhsAssignment
    );
    assert_eq!(
        parse_error("'use strict'; ++arguments;"),
        ErrorKind::StrictLhsPrefix
    );
    assert_eq!(
        parse_error("'use strict'; delete x;"),
        ErrorKind::StrictDelete
    );
    assert_eq!(
        parse_error("'use strict'; var x = 010;"),
        ErrorKind::StrictOctalLiteral
    );
    parse("eval = 1; delete x; x = 010;");
}

#[test]
fn octal_escape_in_directive_is_fatal_once_strict_fires() {
    assert_eq!(
        parse_error("'\\012'; 'use strict';"),
        ErrorKind::StrictOctalEscape
    );
    // Without the strict directive the octal escape is fine.
    parse("'\\012';");
}

#[test]
fn later_use_strict_directives_have_no_extra_effect() {
    parse("'use strict'; 'use strict';");
    // A parenthesized or composed string is not a directive.
    parse("('use strict'); with (a) b;");
    parse("'use strict' + 0; with (a) b;");
}

#[test]
fn async_function_declarations_need_statement_positions() {
    parse("async function f() {}");
    assert_eq!(
        parse_error("if (a) async function f() {}"),
        ErrorKind::AsyncFunctionInSingleStatementContext
    );
}

#[test]
fn labelled_functions_are_sloppy_only() {
    parse("l: function f() {}");
    assert_eq!(
        parse_error("'use strict'; l: function f() {}"),
        ErrorKind::StrictFunction
    );
}
