//! JSX nodes, following the de-facto JSX ESTree names.

use serde::Serialize;

use crate::ast::expressions::Expression;
use crate::ast::literals::Literal;
use crate::ast::NodeSpan;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXIdentifier")]
pub struct JSXIdentifier {
    pub name: String,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXMemberExpression")]
pub struct JSXMemberExpression {
    pub object: Box<JSXElementName>,
    pub property: JSXIdentifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXNamespacedName")]
pub struct JSXNamespacedName {
    pub namespace: JSXIdentifier,
    pub name: JSXIdentifier,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The name of a JSX element: `div`, `a.b.c`, or `ns:name`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXElementName {
    Identifier(JSXIdentifier),
    Member(JSXMemberExpression),
    Namespaced(JSXNamespacedName),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXExpressionContainer")]
pub struct JSXExpressionContainer {
    pub expression: Box<JSXExpression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The payload of an expression container: an expression, or the empty
/// placeholder for `{}` and `{/* comment */}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXExpression {
    Expression(Expression),
    Empty(JSXEmptyExpression),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXEmptyExpression")]
pub struct JSXEmptyExpression {
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadChild")]
pub struct JSXSpreadChild {
    pub expression: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXText")]
pub struct JSXText {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The value of a JSX attribute: a quoted string, an expression container,
/// or a nested element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeValue {
    Literal(Literal),
    Container(JSXExpressionContainer),
    Element(Box<JSXElement>),
}

/// The name of a JSX attribute: `id` or `ns:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeName {
    Identifier(JSXIdentifier),
    Namespaced(JSXNamespacedName),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXAttribute")]
pub struct JSXAttribute {
    pub name: JSXAttributeName,
    pub value: Option<JSXAttributeValue>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXSpreadAttribute")]
pub struct JSXSpreadAttribute {
    pub argument: Box<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXAttributeItem {
    Attribute(JSXAttribute),
    Spread(JSXSpreadAttribute),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXOpeningElement")]
pub struct JSXOpeningElement {
    pub name: JSXElementName,
    pub attributes: Vec<JSXAttributeItem>,
    #[serde(rename = "selfClosing")]
    pub self_closing: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXClosingElement")]
pub struct JSXClosingElement {
    pub name: JSXElementName,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A child of a JSX element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JSXChild {
    Text(JSXText),
    Container(JSXExpressionContainer),
    Spread(JSXSpreadChild),
    Element(Box<JSXElement>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "JSXElement")]
pub struct JSXElement {
    #[serde(rename = "openingElement")]
    pub opening_element: JSXOpeningElement,
    pub children: Vec<JSXChild>,
    #[serde(rename = "closingElement")]
    pub closing_element: Option<JSXClosingElement>,
    #[serde(flatten)]
    pub span: NodeSpan,
}
