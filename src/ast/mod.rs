//! ESTree-shaped AST node types.
//!
//! Every node struct is internally tagged with `#[serde(tag = "type")]`, so
//! serializing any node (or the whole `Program`) with `serde_json` yields the
//! ESTree JSON shape directly: `{"type": "BinaryExpression", ...}`.
//!
//! Optional location metadata lives in a flattened [`NodeSpan`]: `start`/`end`
//! code-unit offsets when ranges are enabled, `loc` when locations are
//! enabled. Nodes own their children; the tree is rooted at [`Program`].

pub mod expressions;
pub mod jsx;
pub mod literals;
pub mod statements;

pub use expressions::*;
pub use jsx::*;
pub use literals::*;
pub use statements::*;

use serde::Serialize;

// =============================================================================
// Location metadata
// =============================================================================

/// A line/column pair. Lines are 1-based, columns 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Start and end positions of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// Optional per-node location metadata, controlled by the `ranges` and
/// `locations` options. Flattened into every node during serialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NodeSpan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
}

// =============================================================================
// Identifier
// =============================================================================

/// An identifier reference or binding. `name` holds the canonical text with
/// Unicode escapes decoded, so an escaped and an unescaped spelling of the
/// same word carry the same name.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
    #[serde(flatten)]
    pub span: NodeSpan,
}

// =============================================================================
// Program
// =============================================================================

/// Whether a program was parsed as a script or a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
}

/// The root node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Statement>,
    #[serde(rename = "sourceType")]
    pub source_type: SourceType,
    #[serde(flatten)]
    pub span: NodeSpan,
}
