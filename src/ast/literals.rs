//! Literal and template nodes.

use serde::Serialize;

use crate::ast::{Expression, NodeSpan};
use crate::scanner::RegexPayload;

/// The cooked value of a `Literal` node. Serializes untagged, so a number is
/// a JSON number, a string a JSON string, and `Null` is JSON `null` (which is
/// also what regex literals carry, the payload being in `regex`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// A string, numeric, boolean, null, or regular-expression literal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Literal {
    pub value: LiteralValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexPayload>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// A big-integer literal (`123n`). `value` is the numeric value with the `n`
/// suffix stripped.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BigIntLiteral {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(flatten)]
    pub span: NodeSpan,
}

/// The cooked/raw pair of a template chunk. The raw form is always present,
/// per ESTree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateElementValue {
    pub cooked: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateElement {
    pub value: TemplateElementValue,
    pub tail: bool,
    #[serde(flatten)]
    pub span: NodeSpan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
    #[serde(flatten)]
    pub span: NodeSpan,
}
