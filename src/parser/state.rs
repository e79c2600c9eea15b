//! Parser state: token administration, snapshots, markers, and ASI.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::ast::{NodeSpan, Position, Program, SourceLocation, SourceType, Statement};
use crate::context::*;
use crate::errors::{ErrorKind, ErrorLocation, ParseError};
use crate::scanner::scanner_impl::{ScannerSnapshot, ScannerState};
use crate::scanner::{CommentSink, Token};
use crate::Options;

use super::scope::{BindingKind, LabelKind};

// =============================================================================
// Markers
// =============================================================================

/// The start position of a node under construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Marker {
    pub index: u32,
    pub line: u32,
    pub column: u32,
}

/// A full snapshot of lexer/parser state for speculative lookahead.
/// Restoration is a constant-time field copy.
pub(crate) struct ParserSnapshot {
    scanner: ScannerSnapshot,
    token: Token,
    flags: u32,
    last_index: usize,
    last_line: u32,
    last_column: u32,
    error_location: Option<ErrorLocation>,
}

// =============================================================================
// ParserState
// =============================================================================

/// One parse invocation's worth of mutable state. The scanner is owned; the
/// context word is threaded by value through the recursive parse methods.
pub struct ParserState<'a> {
    pub(crate) scanner: ScannerState<'a>,
    /// Current token.
    pub(crate) token: Token,
    /// Sticky flags plus parser options, one word.
    pub(crate) flags: u32,
    /// End cursor of the previous token.
    pub(crate) last_index: usize,
    pub(crate) last_line: u32,
    pub(crate) last_column: u32,
    /// Deferred location for errors whose true fault is upstream.
    pub(crate) error_location: Option<ErrorLocation>,
    /// Location of a shorthand-property initializer that is only legal if the
    /// covering object literal is later reinterpreted as a pattern.
    pub(crate) shorthand_init_error: Option<ErrorLocation>,
    /// Location of a legacy octal escape inside the directive prologue,
    /// fatal retroactively if `"use strict"` fires.
    pub(crate) directive_octal: Option<ErrorLocation>,
    /// Active statement labels.
    pub(crate) label_set: FxHashMap<String, LabelKind>,
    /// Scope triple: `var` names, and the layered lexical scopes.
    pub(crate) function_scope: FxHashMap<String, BindingKind>,
    pub(crate) block_scopes: Vec<FxHashMap<String, BindingKind>>,
}

impl<'a> ParserState<'a> {
    pub fn new(source: &str, options: &Options, comments: CommentSink<'a>) -> Self {
        let mut flags = FLAG_NONE;
        if options.jsx {
            flags |= FLAG_OPTIONS_JSX;
        }
        if options.next {
            flags |= FLAG_OPTIONS_NEXT;
        }
        if options.locations {
            flags |= FLAG_OPTIONS_LOC;
        }
        if options.ranges {
            flags |= FLAG_OPTIONS_RANGES;
        }
        if options.raw {
            flags |= FLAG_OPTIONS_RAW;
        }
        if options.comments {
            flags |= FLAG_OPTIONS_ON_COMMENT;
        }
        if options.v8 {
            flags |= FLAG_OPTIONS_V8;
        }
        ParserState {
            scanner: ScannerState::new(source, options.next, comments),
            token: Token::EndOfSource,
            flags,
            last_index: 0,
            last_line: 1,
            last_column: 0,
            error_location: None,
            shorthand_init_error: None,
            directive_octal: None,
            label_set: FxHashMap::default(),
            function_scope: FxHashMap::default(),
            block_scopes: vec![FxHashMap::default()],
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parse a complete script. The directive prologue may promote the whole
    /// program to strict mode.
    pub fn parse_script(&mut self) -> Result<Program, ParseError> {
        let context = CONTEXT_ALLOW_IN;
        trace!(len = self.scanner.source_len(), "parse_script");
        self.next_token(context)?;
        let marker = Marker {
            index: 0,
            line: 1,
            column: 0,
        };
        let mut body = Vec::new();
        let context = self.parse_directive_prologue(context, &mut body)?;
        while self.token != Token::EndOfSource {
            body.push(self.parse_statement_list_item(context)?);
        }
        Ok(Program {
            body,
            source_type: SourceType::Script,
            span: self.finish(marker),
        })
    }

    /// Parse a complete module. Module code is implicitly strict and reserves
    /// `await`.
    pub fn parse_module(&mut self) -> Result<Program, ParseError> {
        let context = CONTEXT_ALLOW_IN | CONTEXT_STRICT | CONTEXT_MODULE | CONTEXT_ALLOW_AWAIT;
        trace!(len = self.scanner.source_len(), "parse_module");
        self.next_token(context)?;
        let marker = Marker {
            index: 0,
            line: 1,
            column: 0,
        };
        let mut body = Vec::new();
        while self.token != Token::EndOfSource {
            body.push(self.parse_module_item(context)?);
        }
        Ok(Program {
            body,
            source_type: SourceType::Module,
            span: self.finish(marker),
        })
    }

    /// Parse the leading string-literal expression statements, promoting the
    /// context to strict when a `"use strict"` directive appears. Returns the
    /// (possibly promoted) context.
    pub(crate) fn parse_directive_prologue(
        &mut self,
        mut context: u32,
        body: &mut Vec<Statement>,
    ) -> Result<u32, ParseError> {
        while self.token == Token::StringLiteral {
            let (statement, directive) = self.parse_directive(context)?;
            body.push(statement);
            match directive {
                Some(raw) => {
                    if raw == "use strict" && context & CONTEXT_STRICT == 0 {
                        context |= CONTEXT_STRICT;
                        self.activate_strict_directive()?;
                    }
                }
                None => break,
            }
        }
        self.directive_octal = None;
        Ok(context)
    }

    /// Validation shared by every `"use strict"` activation site: a legacy
    /// octal escape in any earlier prologue directive becomes fatal.
    pub(crate) fn activate_strict_directive(&mut self) -> Result<(), ParseError> {
        if let Some(location) = self.directive_octal.take() {
            return Err(ParseError::new(ErrorKind::StrictOctalEscape, location));
        }
        Ok(())
    }

    // =========================================================================
    // Token administration
    // =========================================================================

    /// Advance to the next token. Stashes the previous token's end position
    /// and mirrors the scanner's line-break flag into the sticky flags.
    pub(crate) fn next_token(&mut self, context: u32) -> Result<Token, ParseError> {
        self.last_index = self.scanner.index;
        self.last_line = self.scanner.line;
        self.last_column = self.scanner.column;
        let token = self.scanner.scan(context)?;
        if self.scanner.has_preceding_line_break() {
            self.flags |= FLAG_LINE_TERMINATOR;
        } else {
            self.flags &= !FLAG_LINE_TERMINATOR;
        }
        self.token = token;
        Ok(token)
    }

    /// Advance in JSX-children mode.
    pub(crate) fn next_jsx_token(&mut self) -> Result<Token, ParseError> {
        self.last_index = self.scanner.index;
        self.last_line = self.scanner.line;
        self.last_column = self.scanner.column;
        let token = self.scanner.scan_jsx_token()?;
        if self.scanner.has_preceding_line_break() {
            self.flags |= FLAG_LINE_TERMINATOR;
        } else {
            self.flags &= !FLAG_LINE_TERMINATOR;
        }
        self.token = token;
        Ok(token)
    }

    /// Consume the expected token or fail with `UnexpectedToken`.
    pub(crate) fn expect(&mut self, context: u32, token: Token) -> Result<(), ParseError> {
        if self.token != token {
            return Err(self.unexpected());
        }
        self.next_token(context)?;
        Ok(())
    }

    /// Consume the token if it is the current one.
    pub(crate) fn consume(&mut self, context: u32, token: Token) -> Result<bool, ParseError> {
        if self.token == token {
            self.next_token(context)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Automatic semicolon insertion: an explicit `;`, a closing `}`, the end
    /// of the source, or a preceding line terminator all terminate the
    /// statement; anything else is fatal.
    pub(crate) fn consume_semicolon(&mut self, context: u32) -> Result<(), ParseError> {
        if self.token == Token::Semicolon {
            self.next_token(context)?;
            return Ok(());
        }
        if self.token == Token::RightBrace
            || self.token == Token::EndOfSource
            || self.flags & FLAG_LINE_TERMINATOR != 0
        {
            return Ok(());
        }
        Err(self.unexpected())
    }

    /// The current token's string payload.
    pub(crate) fn token_value_string(&self) -> String {
        self.scanner.token_value.as_str().to_string()
    }

    /// The current token's numeric payload.
    pub(crate) fn token_value_number(&self) -> f64 {
        self.scanner.token_value.as_number()
    }

    /// The raw source slice of the current token.
    pub(crate) fn token_raw_slice(&self) -> String {
        self.scanner.raw_slice(self.scanner.start_index, self.scanner.index)
    }

    // =========================================================================
    // Markers and spans
    // =========================================================================

    /// Capture the start of the current token as a node start marker.
    pub(crate) fn start_marker(&self) -> Marker {
        Marker {
            index: self.scanner.start_index as u32,
            line: self.scanner.start_line,
            column: self.scanner.start_column,
        }
    }

    /// Build a node's optional span from its start marker; the end is the
    /// character immediately after the previous token.
    pub(crate) fn finish(&self, marker: Marker) -> NodeSpan {
        let mut span = NodeSpan::default();
        if self.flags & FLAG_OPTIONS_RANGES != 0 {
            span.start = Some(marker.index);
            span.end = Some(self.last_index as u32);
        }
        if self.flags & FLAG_OPTIONS_LOC != 0 {
            span.loc = Some(SourceLocation {
                start: Position {
                    line: marker.line,
                    column: marker.column,
                },
                end: Position {
                    line: self.last_line,
                    column: self.last_column,
                },
            });
        }
        span
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Location of the current token's first character.
    pub(crate) fn token_start_location(&self) -> ErrorLocation {
        ErrorLocation {
            index: self.scanner.start_index as u32,
            line: self.scanner.start_line,
            column: self.scanner.start_column,
        }
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.token_start_location())
    }

    pub(crate) fn error_at(&self, kind: ErrorKind, location: ErrorLocation) -> ParseError {
        ParseError::new(kind, location)
    }

    /// An error at the deferred `error_location` if one was stashed, else at
    /// the current token.
    pub(crate) fn error_deferred(&self, kind: ErrorKind) -> ParseError {
        match self.error_location {
            Some(location) => ParseError::new(kind, location),
            None => self.error(kind),
        }
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        self.error(ErrorKind::UnexpectedToken(self.token.as_str()))
    }

    // =========================================================================
    // Snapshots (speculative lookahead)
    // =========================================================================

    pub(crate) fn save_state(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.save_state(),
            token: self.token,
            flags: self.flags,
            last_index: self.last_index,
            last_line: self.last_line,
            last_column: self.last_column,
            error_location: self.error_location,
        }
    }

    pub(crate) fn restore_state(&mut self, snapshot: ParserSnapshot) {
        self.scanner.restore_state(snapshot.scanner);
        self.token = snapshot.token;
        self.flags = snapshot.flags;
        self.last_index = snapshot.last_index;
        self.last_line = snapshot.last_line;
        self.last_column = snapshot.last_column;
        self.error_location = snapshot.error_location;
    }

    /// Probe: is `let` here the head of a lexical declaration? True when the
    /// next token is an identifier, `{`, or `[`.
    pub(crate) fn let_starts_declaration(&mut self, context: u32) -> Result<bool, ParseError> {
        let snapshot = self.save_state();
        self.next_token(context)?;
        let lexical = self.token.is_identifier()
            || self.token == Token::LeftBrace
            || self.token == Token::LeftBracket;
        trace!(lexical, "let probe");
        self.restore_state(snapshot);
        Ok(lexical)
    }

    /// Probe: does `async` head a function declaration (same line)?
    pub(crate) fn async_starts_function(&mut self, context: u32) -> Result<bool, ParseError> {
        let snapshot = self.save_state();
        self.next_token(context)?;
        let is_function =
            self.token == Token::FunctionKeyword && self.flags & FLAG_LINE_TERMINATOR == 0;
        trace!(is_function, "async probe");
        self.restore_state(snapshot);
        Ok(is_function)
    }

    /// Probe: is `import` here a dynamic `import(...)` call?
    pub(crate) fn import_starts_call(&mut self, context: u32) -> Result<bool, ParseError> {
        let snapshot = self.save_state();
        self.next_token(context)?;
        let is_call = self.token == Token::LeftParen;
        trace!(is_call, "import probe");
        self.restore_state(snapshot);
        Ok(is_call)
    }

    // =========================================================================
    // Identifier helpers shared across grammars
    // =========================================================================

    /// True when the current token can be an identifier reference under the
    /// given context: future-reserved words are identifiers in sloppy mode,
    /// `yield`/`await` depend on the generator/async context.
    pub(crate) fn token_is_identifier_ref(&self, context: u32) -> bool {
        let token = self.token;
        if token.is_identifier() {
            if token == Token::YieldKeyword && context & CONTEXT_ALLOW_YIELD != 0 {
                return false;
            }
            if token == Token::AwaitKeyword
                && context & (CONTEXT_ALLOW_AWAIT | CONTEXT_MODULE) != 0
            {
                return false;
            }
            if token.is_future_reserved() && context & CONTEXT_STRICT != 0 {
                return false;
            }
            return true;
        }
        // Pure future-reserved words are identifiers in sloppy mode.
        token.is_future_reserved() && context & CONTEXT_STRICT == 0
    }

    /// Validate the current token as an identifier reference and surface the
    /// specific error when it is not one.
    pub(crate) fn check_identifier_ref(&self, context: u32) -> Result<(), ParseError> {
        let token = self.token;
        if token == Token::EnumKeyword {
            return Err(self.error(ErrorKind::UnexpectedReserved));
        }
        if token == Token::YieldKeyword && context & CONTEXT_ALLOW_YIELD != 0 {
            return Err(self.error(ErrorKind::DisallowedInContext("yield".to_string())));
        }
        if token == Token::AwaitKeyword {
            if context & CONTEXT_MODULE != 0 {
                return Err(self.error(ErrorKind::UnexpectedReserved));
            }
            if context & CONTEXT_ALLOW_AWAIT != 0 {
                return Err(self.error(ErrorKind::DisallowedInContext("await".to_string())));
            }
        }
        if token.is_future_reserved() && context & CONTEXT_STRICT != 0 {
            return Err(self.error(ErrorKind::UnexpectedStrictReserved));
        }
        if !token.is_identifier() && !token.is_future_reserved() {
            return Err(self.unexpected());
        }
        Ok(())
    }
}
