//! Recursive-descent parser with one-token lookahead and cover grammars.
//!
//! The parser pulls tokens from the scanner on demand, threading an immutable
//! context word through every recursive call. Speculative lookahead snapshots
//! the primitive scanner/parser state and never constructs AST nodes.

mod scope;
mod state;
mod state_declarations;
mod state_expressions;
mod state_jsx;
mod state_modules;
mod state_patterns;
mod state_statements;

pub use state::ParserState;
