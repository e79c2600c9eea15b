//! esz - an ECMAScript 2018 parser producing ESTree-compatible syntax trees.
//!
//! The crate is a single synchronous pipeline: a UTF-16 code-unit reader, a
//! contextual scanner (with template, regular-expression, and JSX sub-modes),
//! and a recursive-descent parser with one-token lookahead and cover
//! grammars. Parsing is all-or-nothing: the first syntax error aborts and is
//! returned with its source location.
//!
//! ```
//! use esz::{parse_script, Options};
//!
//! let program = parse_script("const fooBar = 123;", &Options::default()).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! Serializing any node with `serde_json` yields the ESTree JSON shape
//! directly, including the `type` tags.

pub mod ast;
mod context;
pub mod errors;
pub mod parser;
pub mod scanner;

pub use ast::{Program, SourceType};
pub use errors::{ErrorKind, ErrorLocation, ParseError};
pub use parser::ParserState;
pub use scanner::{Comment, CommentKind, CommentSink, RegexPayload};

// =============================================================================
// Options
// =============================================================================

/// Parser options. Everything is opt-in; the default parses plain ES2018
/// without metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Enable stage-3 features: BigInt, dynamic `import()`, async iteration,
    /// object rest/spread, optional catch binding, the regex `s` flag, and
    /// `throw` expressions.
    pub next: bool,
    /// Enable the V8 `do { ... }` expression.
    pub v8: bool,
    /// Enable the JSX grammar and lexer mode.
    pub jsx: bool,
    /// Emit `start`/`end` code-unit offsets on every node.
    pub ranges: bool,
    /// Emit `loc.{start,end}.{line,column}` on every node.
    pub locations: bool,
    /// Emit the raw source slice on literal nodes.
    pub raw: bool,
    /// Collect comments into the provided sink.
    pub comments: bool,
}

// =============================================================================
// Entry points
// =============================================================================

/// Parse source text as a script.
pub fn parse_script(source: &str, options: &Options) -> Result<Program, ParseError> {
    ParserState::new(source, options, CommentSink::None).parse_script()
}

/// Parse source text as a module. Module code is implicitly strict.
pub fn parse_module(source: &str, options: &Options) -> Result<Program, ParseError> {
    ParserState::new(source, options, CommentSink::None).parse_module()
}

/// Parse a script, appending every comment to `comments` in source order.
pub fn parse_script_with_comments(
    source: &str,
    options: &Options,
    comments: &mut Vec<Comment>,
) -> Result<Program, ParseError> {
    ParserState::new(source, options, CommentSink::Collect(comments)).parse_script()
}

/// Parse a module, appending every comment to `comments` in source order.
pub fn parse_module_with_comments(
    source: &str,
    options: &Options,
    comments: &mut Vec<Comment>,
) -> Result<Program, ParseError> {
    ParserState::new(source, options, CommentSink::Collect(comments)).parse_module()
}
