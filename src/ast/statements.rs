//! Statement, declaration, and module nodes.

use serde::Serialize;

use crate::ast::expressions::{ClassBody, Expression, Pattern};
use crate::ast::literals::Literal;
use crate::ast::{Identifier, NodeSpan};

// =============================================================================
// Statement
// =============================================================================

/// Any statement or declaration, including module items. Untagged: each inner
/// node carries its own `type` tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(BlockStatement),
    Break(BreakStatement),
    ClassDeclaration(ClassDeclaration),
    Continue(ContinueStatement),
    Debugger(DebuggerStatement),
    DoWhile(DoWhileStatement),
    Empty(EmptyStatement),
    Expression(ExpressionStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForOfStatement),
    FunctionDeclaration(FunctionDeclaration),
    If(IfStatement),
    Labeled(LabeledStatement),
    Return(ReturnStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    VariableDeclaration(VariableDeclaration),
    While(WhileStatement),
    With(WithStatement),

    // Module items
    Import(ImportDeclaration),
    ExportAll(ExportAllDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportNamed(ExportNamedDeclaration),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BlockStatement")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BreakStatement")]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ContinueStatement")]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DebuggerStatement")]
pub struct DebuggerStatement {
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DoWhileStatement")]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "EmptyStatement")]
pub struct EmptyStatement {
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExpressionStatement")]
pub struct ExpressionStatement {
    pub expression: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The init clause of a C-style `for`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    Declaration(VariableDeclaration),
    Expression(Box<Expression>),
}

/// The left-hand side of `for-in`/`for-of`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForTarget {
    Declaration(VariableDeclaration),
    Pattern(Box<Pattern>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForStatement")]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Box<Expression>>,
    pub update: Option<Box<Expression>>,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForInStatement")]
pub struct ForInStatement {
    pub left: ForTarget,
    pub right: Box<Expression>,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ForOfStatement")]
pub struct ForOfStatement {
    pub left: ForTarget,
    pub right: Box<Expression>,
    pub body: Box<Statement>,
    /// True for `for await (... of ...)` (async iteration, stage-3 pack).
    #[serde(rename = "await")]
    pub is_await: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FunctionDeclaration")]
pub struct FunctionDeclaration {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub generator: bool,
    pub expression: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassDeclaration")]
pub struct ClassDeclaration {
    pub id: Option<Identifier>,
    #[serde(rename = "superClass")]
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "IfStatement")]
pub struct IfStatement {
    pub test: Box<Expression>,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "LabeledStatement")]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ReturnStatement")]
pub struct ReturnStatement {
    pub argument: Option<Box<Expression>>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchCase")]
pub struct SwitchCase {
    pub test: Option<Box<Expression>>,
    pub consequent: Vec<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SwitchStatement")]
pub struct SwitchStatement {
    pub discriminant: Box<Expression>,
    pub cases: Vec<SwitchCase>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThrowStatement")]
pub struct ThrowStatement {
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CatchClause")]
pub struct CatchClause {
    /// `None` for the optional catch binding (stage-3 pack).
    pub param: Option<Pattern>,
    pub body: BlockStatement,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TryStatement")]
pub struct TryStatement {
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclarator")]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Box<Expression>>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclaration")]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
    pub kind: VariableKind,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WhileStatement")]
pub struct WhileStatement {
    pub test: Box<Expression>,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "WithStatement")]
pub struct WithStatement {
    pub object: Box<Expression>,
    pub body: Box<Statement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

// =============================================================================
// Module items
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportSpecifier")]
pub struct ImportSpecifier {
    pub local: Identifier,
    pub imported: Identifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportDefaultSpecifier")]
pub struct ImportDefaultSpecifier {
    pub local: Identifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportNamespaceSpecifier")]
pub struct ImportNamespaceSpecifier {
    pub local: Identifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportSpecifierItem {
    Named(ImportSpecifier),
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ImportDeclaration")]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifierItem>,
    pub source: Literal,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportSpecifier")]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportNamedDeclaration")]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Box<Statement>>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// What follows `export default`: a hoistable/class declaration or an
/// expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultKind {
    Declaration(Box<Statement>),
    Expression(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportDefaultDeclaration")]
pub struct ExportDefaultDeclaration {
    pub declaration: ExportDefaultKind,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ExportAllDeclaration")]
pub struct ExportAllDeclaration {
    pub source: Literal,
    #[serde(flatten)]
    pub span: NodeSpan,
}
