//! Tests for module parsing: import/export declarations and module-only
//! restrictions.

use esz::ast::*;
use esz::errors::ErrorKind;
use esz::{parse_module, parse_script, Options};

fn parse(source: &str) -> Program {
    parse_module(source, &Options::default())
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

fn parse_error(source: &str) -> ErrorKind {
    parse_module(source, &Options::default())
        .expect_err(&format!("expected error for {source:?}"))
        .kind
}

#[test]
fn source_type_is_module() {
    let program = parse("export default 1;");
    assert_eq!(program.source_type, SourceType::Module);
}

#[test]
fn namespace_import() {
    let program = parse("import * as m from 's'");
    match program.body.first() {
        Some(Statement::Import(import)) => {
            assert_eq!(import.specifiers.len(), 1);
            match &import.specifiers[0] {
                ImportSpecifierItem::Namespace(ns) => assert_eq!(ns.local.name, "m"),
                other => panic!("expected namespace specifier, got {other:?}"),
            }
            assert_eq!(import.source.value, LiteralValue::String("s".to_string()));
        }
        other => panic!("expected import declaration, got {other:?}"),
    }
}

#[test]
fn import_forms() {
    parse("import 'polyfill';");
    parse("import d from 'm';");
    parse("import d, * as ns from 'm';");
    parse("import d, { a, b as c } from 'm';");
    parse("import { default as d } from 'm';");
}

#[test]
fn import_bindings_are_lexical() {
    assert_eq!(
        parse_error("import { a } from 'm'; let a;"),
        ErrorKind::DuplicateBinding("a".to_string())
    );
}

#[test]
fn unaliased_reserved_import_names_are_fatal() {
    assert_eq!(
        parse_error("import { default } from 'm';"),
        ErrorKind::UnexpectedReserved
    );
}

#[test]
fn import_requires_a_string_specifier() {
    assert_eq!(
        parse_error("import d from 1;"),
        ErrorKind::InvalidModuleSpecifier
    );
}

#[test]
fn export_forms() {
    parse("export var a = 1;");
    parse("export let b = 2;");
    parse("export const c = 3;");
    parse("export function f() {}");
    parse("export async function af() {}");
    parse("export class C {}");
    parse("export default function () {}");
    parse("export default class {}");
    parse("export default 42;");
    parse("export { };");
    parse("export { a, b as c };\nvar a, b;");
    parse("export * from 'm';");
    parse("export { a as b } from 'm';");
}

#[test]
fn export_requires_a_declaration_or_clause() {
    assert_eq!(
        parse_error("export 1;"),
        ErrorKind::MissingDeclarationAfterExport
    );
}

#[test]
fn duplicate_exported_names_are_fatal() {
    assert_eq!(
        parse_error("export { a, b as a };"),
        ErrorKind::DuplicateExport("a".to_string())
    );
}

#[test]
fn reserved_export_locals_need_a_from_clause() {
    parse("export { default } from 'm';");
    assert_eq!(
        parse_error("export { default };"),
        ErrorKind::UnexpectedReserved
    );
}

#[test]
fn module_restrictions_apply_in_scripts() {
    assert_eq!(
        parse_script("import d from 'm';", &Options::default())
            .unwrap_err()
            .kind,
        ErrorKind::ImportDeclAtTopLevel
    );
    assert_eq!(
        parse_script("export default 1;", &Options::default())
            .unwrap_err()
            .kind,
        ErrorKind::ExportDeclAtTopLevel
    );
}

#[test]
fn modules_are_strict() {
    assert_eq!(parse_error("with (a) b;"), ErrorKind::StrictModeWith);
    assert_eq!(parse_error("var x = 010;"), ErrorKind::StrictOctalLiteral);
}

#[test]
fn await_is_reserved_in_modules() {
    assert_eq!(
        parse_error("var await = 1;"),
        ErrorKind::UnexpectedReserved
    );
}

#[test]
fn html_comments_are_rejected_in_modules() {
    assert_eq!(
        parse_error("<!-- nope\nvar a;"),
        ErrorKind::HtmlCommentInModule
    );
}

#[test]
fn imports_and_exports_are_not_nested() {
    assert_eq!(
        parse_error("{ import d from 'm'; }"),
        ErrorKind::ImportDeclAtTopLevel
    );
    assert_eq!(
        parse_error("function f() { export var x; }"),
        ErrorKind::ExportDeclAtTopLevel
    );
}

#[test]
fn dynamic_import_is_an_expression_even_in_modules() {
    let options = Options {
        next: true,
        ..Options::default()
    };
    let program = parse_module("import('m').then(go);", &options).expect("dynamic import");
    assert!(matches!(
        program.body.first(),
        Some(Statement::Expression(_))
    ));
}

#[test]
fn module_parse_is_idempotent() {
    let source = "import d, { a as b } from 'm';\nexport default d;\nexport { b };";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(first, second);
}
