//! Expression and pattern nodes, plus the operator enums.
//!
//! Operators serialize as their surface strings through per-variant renames,
//! so `BinaryOperator::StrictEqual` becomes `"==="` in the ESTree output.

use serde::Serialize;

use crate::ast::jsx::JSXElement;
use crate::ast::literals::{BigIntLiteral, Literal, TemplateLiteral};
use crate::ast::statements::BlockStatement;
use crate::ast::{Identifier, NodeSpan};

// =============================================================================
// Expression
// =============================================================================

/// Any expression. Untagged: each inner node carries its own `type` tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Array(ArrayExpression),
    Arrow(ArrowFunctionExpression),
    Assignment(AssignmentExpression),
    Await(AwaitExpression),
    BigInt(BigIntLiteral),
    Binary(BinaryExpression),
    Call(CallExpression),
    Class(ClassExpression),
    Conditional(ConditionalExpression),
    Do(DoExpression),
    Function(FunctionExpression),
    Identifier(Identifier),
    Import(Import),
    JSXElement(Box<JSXElement>),
    Literal(Literal),
    Logical(LogicalExpression),
    Member(MemberExpression),
    MetaProperty(MetaProperty),
    New(NewExpression),
    Object(ObjectExpression),
    Sequence(SequenceExpression),
    Spread(SpreadElement),
    Super(Super),
    TaggedTemplate(TaggedTemplateExpression),
    Template(TemplateLiteral),
    This(ThisExpression),
    Throw(ThrowExpression),
    Unary(UnaryExpression),
    Update(UpdateExpression),
    Yield(YieldExpression),
}

impl Expression {
    /// True for the simple assignment targets: identifiers and member
    /// expressions.
    pub fn is_simple_target(&self) -> bool {
        matches!(self, Expression::Identifier(_) | Expression::Member(_))
    }

    /// The identifier name, when this expression is a plain identifier.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Expression::Identifier(ident) => Some(ident.name.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// Pattern
// =============================================================================

/// A binding or assignment target. `Member` is only legal in assignment
/// positions, never in binding positions; the parser enforces the split.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    Identifier(Identifier),
    Object(ObjectPattern),
    Array(ArrayPattern),
    Assignment(Box<AssignmentPattern>),
    Rest(Box<RestElement>),
    Member(MemberExpression),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectPattern")]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A member of an object pattern: a destructuring property or a rest element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectPatternProperty {
    Property(Box<PatternProperty>),
    Rest(Box<RestElement>),
}

/// A destructuring property (`{ a: target }`). Serialized as a `Property`
/// node, like its expression counterpart.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property")]
pub struct PatternProperty {
    pub key: Expression,
    pub value: Pattern,
    pub kind: PropertyKind,
    pub computed: bool,
    pub method: bool,
    pub shorthand: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayPattern")]
pub struct ArrayPattern {
    pub elements: Vec<Option<Pattern>>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentPattern")]
pub struct AssignmentPattern {
    pub left: Pattern,
    pub right: Expression,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "RestElement")]
pub struct RestElement {
    pub argument: Pattern,
    #[serde(flatten)]
    pub span: NodeSpan,
}

// =============================================================================
// Operator enums
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    Add,
    #[serde(rename = "-=")]
    Subtract,
    #[serde(rename = "*=")]
    Multiply,
    #[serde(rename = "/=")]
    Divide,
    #[serde(rename = "%=")]
    Modulo,
    #[serde(rename = "**=")]
    Exponentiate,
    #[serde(rename = "<<=")]
    ShiftLeft,
    #[serde(rename = ">>=")]
    ShiftRight,
    #[serde(rename = ">>>=")]
    LogicalShiftRight,
    #[serde(rename = "&=")]
    BitwiseAnd,
    #[serde(rename = "|=")]
    BitwiseOr,
    #[serde(rename = "^=")]
    BitwiseXor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    LooseEqual,
    #[serde(rename = "!=")]
    LooseNotEqual,
    #[serde(rename = "===")]
    StrictEqual,
    #[serde(rename = "!==")]
    StrictNotEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<<")]
    ShiftLeft,
    #[serde(rename = ">>")]
    ShiftRight,
    #[serde(rename = ">>>")]
    LogicalShiftRight,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
    #[serde(rename = "**")]
    Exponentiate,
    #[serde(rename = "&")]
    BitwiseAnd,
    #[serde(rename = "|")]
    BitwiseOr,
    #[serde(rename = "^")]
    BitwiseXor,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Negate,
    #[serde(rename = "~")]
    Complement,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

// =============================================================================
// Expression nodes
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrayExpression")]
pub struct ArrayExpression {
    pub elements: Vec<Option<Expression>>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ObjectExpression")]
pub struct ObjectExpression {
    pub properties: Vec<ObjectMember>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A member of an object literal: a property or (with the stage-3 pack) a
/// spread element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectMember {
    Property(Box<Property>),
    Spread(SpreadElement),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property")]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    pub kind: PropertyKind,
    pub computed: bool,
    pub method: bool,
    pub shorthand: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SpreadElement")]
pub struct SpreadElement {
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FunctionExpression")]
pub struct FunctionExpression {
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

/// The body of an arrow function: a block, or a single expression for the
/// concise form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ArrowFunctionExpression")]
pub struct ArrowFunctionExpression {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub generator: bool,
    pub expression: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassBody")]
pub struct ClassBody {
    pub body: Vec<MethodDefinition>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MethodDefinition")]
pub struct MethodDefinition {
    pub key: Expression,
    pub value: FunctionExpression,
    pub kind: MethodKind,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ClassExpression")]
pub struct ClassExpression {
    pub id: Option<Identifier>,
    #[serde(rename = "superClass")]
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "UnaryExpression")]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub argument: Box<Expression>,
    pub prefix: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "UpdateExpression")]
pub struct UpdateExpression {
    pub operator: UpdateOperator,
    pub argument: Box<Expression>,
    pub prefix: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "BinaryExpression")]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "LogicalExpression")]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AssignmentExpression")]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ConditionalExpression")]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "CallExpression")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "NewExpression")]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MemberExpression")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "SequenceExpression")]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "YieldExpression")]
pub struct YieldExpression {
    pub argument: Option<Box<Expression>>,
    pub delegate: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "AwaitExpression")]
pub struct AwaitExpression {
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "TaggedTemplateExpression")]
pub struct TaggedTemplateExpression {
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "MetaProperty")]
pub struct MetaProperty {
    pub meta: Identifier,
    pub property: Identifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Super")]
pub struct Super {
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThisExpression")]
pub struct ThisExpression {
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The callee node of a dynamic `import(...)` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Import")]
pub struct Import {
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A `do { ... }` expression (V8 extension).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "DoExpression")]
pub struct DoExpression {
    pub body: BlockStatement,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A `throw expr` in expression position (stage-3 pack).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "ThrowExpression")]
pub struct ThrowExpression {
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}
