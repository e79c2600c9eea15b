//! Scanner implementation - the lexical analyzer.
//!
//! The scanner works over UTF-16 code units, so every position it reports is
//! a true code-unit offset and surrogate pairs decode to single code points
//! for identifier classification. One token is produced per `scan` request;
//! sub-modes exist for templates, regular expressions, and JSX.

use crate::context::{CONTEXT_JSX_CHILD, CONTEXT_MODULE, CONTEXT_STRICT};
use crate::errors::{ErrorKind, ErrorLocation, ParseError};
use crate::scanner::char_codes::{
    hex_value, is_binary_digit, is_digit, is_hex_digit, is_line_terminator, is_octal_digit,
    is_white_space_single_line, CharacterCodes as Chars,
};
use crate::scanner::unicode::{
    combine_surrogates, is_high_surrogate, is_identifier_part, is_identifier_start,
    is_low_surrogate,
};
use crate::scanner::{keyword_token, CommentKind, CommentSink, RegexPayload, Token, TokenValue};

// =============================================================================
// Token flags
// =============================================================================

/// The trivia scanned before the current token crossed a line terminator.
pub const TOKEN_FLAG_PRECEDING_LINE_BREAK: u32 = 1;

// Regex flag bits, used to detect duplicates.
const REGEX_FLAG_GLOBAL: u32 = 1;
const REGEX_FLAG_IGNORE_CASE: u32 = 1 << 1;
const REGEX_FLAG_MULTILINE: u32 = 1 << 2;
const REGEX_FLAG_UNICODE: u32 = 1 << 3;
const REGEX_FLAG_STICKY: u32 = 1 << 4;
const REGEX_FLAG_DOT_ALL: u32 = 1 << 5;

/// What an escape sequence cooked down to.
enum Escape {
    Char(char),
    /// Line continuation: contributes nothing.
    Empty,
}

// =============================================================================
// Scanner state
// =============================================================================

/// A snapshot of scanner state, sufficient for arbitrary backtracking.
/// Restoration is a plain field copy; no AST is involved.
#[derive(Clone)]
pub struct ScannerSnapshot {
    pub index: usize,
    pub line: u32,
    pub column: u32,
    pub start_index: usize,
    pub start_line: u32,
    pub start_column: u32,
    pub token: Token,
    pub token_value: TokenValue,
    pub token_raw: String,
    pub token_regex: Option<RegexPayload>,
    pub token_flags: u32,
    pub octal_location: Option<ErrorLocation>,
}

/// The scanner: a UTF-16 code-unit cursor plus the current token.
pub struct ScannerState<'a> {
    /// The source as UTF-16 code units.
    source: Vec<u16>,
    end: usize,
    /// Cursor: code-unit index, 1-based line, 0-based column.
    pub(crate) index: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    /// Current token and its payloads.
    pub(crate) token: Token,
    pub(crate) token_value: TokenValue,
    /// Raw body of the current template chunk, without delimiters.
    pub(crate) token_raw: String,
    pub(crate) token_regex: Option<RegexPayload>,
    pub(crate) token_flags: u32,
    /// Start of the current token (after trivia).
    pub(crate) start_index: usize,
    pub(crate) start_line: u32,
    pub(crate) start_column: u32,
    /// Location of a legacy octal escape seen in the current string token,
    /// kept for retroactive strict-mode directive validation.
    pub(crate) octal_location: Option<ErrorLocation>,
    /// Stage-3 pack: gates BigInt suffixes and the regex `s` flag.
    options_next: bool,
    collect_comments: bool,
    comments: CommentSink<'a>,
}

impl<'a> ScannerState<'a> {
    pub fn new(source: &str, options_next: bool, comments: CommentSink<'a>) -> Self {
        let units: Vec<u16> = source.encode_utf16().collect();
        let end = units.len();
        let collect_comments = !matches!(comments, CommentSink::None);
        ScannerState {
            source: units,
            end,
            index: 0,
            line: 1,
            column: 0,
            token: Token::EndOfSource,
            token_value: TokenValue::None,
            token_raw: String::new(),
            token_regex: None,
            token_flags: 0,
            start_index: 0,
            start_line: 1,
            start_column: 0,
            octal_location: None,
            options_next,
            collect_comments,
            comments,
        }
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    /// The code unit at `index`, or 0 past the end.
    #[inline]
    fn unit(&self, index: usize) -> u16 {
        self.source.get(index).copied().unwrap_or(0)
    }

    #[inline]
    fn current(&self) -> u16 {
        self.unit(self.index)
    }

    #[inline]
    fn peek(&self) -> u16 {
        self.unit(self.index + 1)
    }

    #[inline]
    fn has_next(&self) -> bool {
        self.index < self.end
    }

    /// Advance one unit within a line.
    #[inline]
    fn advance(&mut self) {
        self.index += 1;
        self.column += 1;
    }

    /// Advance over a line terminator. CR followed by LF counts as one
    /// newline.
    #[inline]
    fn advance_newline(&mut self) {
        if self.current() == Chars::CARRIAGE_RETURN && self.peek() == Chars::LINE_FEED {
            self.index += 2;
        } else {
            self.index += 1;
        }
        self.line += 1;
        self.column = 0;
    }

    /// Decode the code point at the cursor: a single unit, or a surrogate
    /// pair when a high surrogate is followed by a valid low surrogate.
    /// Returns the code point and its width in units.
    #[inline]
    fn code_point(&self) -> (u32, usize) {
        let unit = self.current();
        if is_high_surrogate(unit) && is_low_surrogate(self.peek()) {
            (combine_surrogates(unit, self.peek()), 2)
        } else {
            (unit as u32, 1)
        }
    }

    /// Reconstruct the source text spanning `[start, end)` code units.
    pub fn raw_slice(&self, start: usize, end: usize) -> String {
        String::from_utf16_lossy(&self.source[start..end])
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags & TOKEN_FLAG_PRECEDING_LINE_BREAK != 0
    }

    pub fn source_len(&self) -> usize {
        self.end
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[inline]
    fn here(&self) -> ErrorLocation {
        ErrorLocation {
            index: self.index as u32,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.here())
    }

    #[inline]
    fn error_at_start(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(
            kind,
            ErrorLocation {
                index: self.start_index as u32,
                line: self.start_line,
                column: self.start_column,
            },
        )
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            index: self.index,
            line: self.line,
            column: self.column,
            start_index: self.start_index,
            start_line: self.start_line,
            start_column: self.start_column,
            token: self.token,
            token_value: self.token_value.clone(),
            token_raw: self.token_raw.clone(),
            token_regex: self.token_regex.clone(),
            token_flags: self.token_flags,
            octal_location: self.octal_location,
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.index = snapshot.index;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.start_index = snapshot.start_index;
        self.start_line = snapshot.start_line;
        self.start_column = snapshot.start_column;
        self.token = snapshot.token;
        self.token_value = snapshot.token_value;
        self.token_raw = snapshot.token_raw;
        self.token_regex = snapshot.token_regex;
        self.token_flags = snapshot.token_flags;
        self.octal_location = snapshot.octal_location;
    }

    // =========================================================================
    // Main scan loop
    // =========================================================================

    /// Scan the next token. Consumes whitespace and comments until a token is
    /// produced or the end of the source is reached.
    pub fn scan(&mut self, context: u32) -> Result<Token, ParseError> {
        self.token_flags = 0;
        self.token_value = TokenValue::None;
        self.token_regex = None;
        self.token_raw.clear();
        self.octal_location = None;

        loop {
            self.start_index = self.index;
            self.start_line = self.line;
            self.start_column = self.column;

            if !self.has_next() {
                self.token = Token::EndOfSource;
                return Ok(self.token);
            }

            let ch = self.current();
            match ch {
                Chars::LINE_FEED
                | Chars::CARRIAGE_RETURN
                | Chars::LINE_SEPARATOR
                | Chars::PARAGRAPH_SEPARATOR => {
                    self.token_flags |= TOKEN_FLAG_PRECEDING_LINE_BREAK;
                    self.advance_newline();
                }

                _ if is_white_space_single_line(ch) => self.advance(),

                Chars::OPEN_BRACE => return self.one(Token::LeftBrace),
                Chars::CLOSE_BRACE => return self.one(Token::RightBrace),
                Chars::OPEN_PAREN => return self.one(Token::LeftParen),
                Chars::CLOSE_PAREN => return self.one(Token::RightParen),
                Chars::OPEN_BRACKET => return self.one(Token::LeftBracket),
                Chars::CLOSE_BRACKET => return self.one(Token::RightBracket),
                Chars::SEMICOLON => return self.one(Token::Semicolon),
                Chars::COMMA => return self.one(Token::Comma),
                Chars::COLON => return self.one(Token::Colon),
                Chars::QUESTION => return self.one(Token::QuestionMark),
                Chars::TILDE => return self.one(Token::Complement),

                Chars::DOT => {
                    if is_digit(self.peek()) {
                        return self.scan_number(context, true);
                    }
                    if self.unit(self.index + 1) == Chars::DOT
                        && self.unit(self.index + 2) == Chars::DOT
                    {
                        return self.many(3, Token::Ellipsis);
                    }
                    return self.one(Token::Period);
                }

                Chars::SLASH => {
                    if self.peek() == Chars::SLASH {
                        self.skip_single_line_comment(2);
                        continue;
                    }
                    if self.peek() == Chars::ASTERISK {
                        self.skip_multi_line_comment()?;
                        continue;
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::DivideAssign);
                    }
                    return self.one(Token::Divide);
                }

                Chars::LESS_THAN => {
                    if self.peek() == Chars::EXCLAMATION
                        && self.unit(self.index + 2) == Chars::MINUS
                        && self.unit(self.index + 3) == Chars::MINUS
                    {
                        if context & CONTEXT_MODULE != 0 {
                            return Err(self.error(ErrorKind::HtmlCommentInModule));
                        }
                        self.skip_single_line_comment(4);
                        continue;
                    }
                    if self.peek() == Chars::LESS_THAN {
                        if self.unit(self.index + 2) == Chars::EQUALS {
                            return self.many(3, Token::ShiftLeftAssign);
                        }
                        return self.many(2, Token::ShiftLeft);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::LessThanOrEqual);
                    }
                    return self.one(Token::LessThan);
                }

                Chars::GREATER_THAN => {
                    // In JSX child context `>` closes the tag; never part of
                    // a shift operator.
                    if context & CONTEXT_JSX_CHILD != 0 {
                        return self.one(Token::GreaterThan);
                    }
                    if self.peek() == Chars::GREATER_THAN {
                        if self.unit(self.index + 2) == Chars::GREATER_THAN {
                            if self.unit(self.index + 3) == Chars::EQUALS {
                                return self.many(4, Token::LogicalShiftRightAssign);
                            }
                            return self.many(3, Token::LogicalShiftRight);
                        }
                        if self.unit(self.index + 2) == Chars::EQUALS {
                            return self.many(3, Token::ShiftRightAssign);
                        }
                        return self.many(2, Token::ShiftRight);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::GreaterThanOrEqual);
                    }
                    return self.one(Token::GreaterThan);
                }

                Chars::EQUALS => {
                    if self.peek() == Chars::EQUALS {
                        if self.unit(self.index + 2) == Chars::EQUALS {
                            return self.many(3, Token::StrictEqual);
                        }
                        return self.many(2, Token::LooseEqual);
                    }
                    if self.peek() == Chars::GREATER_THAN {
                        return self.many(2, Token::Arrow);
                    }
                    return self.one(Token::Assign);
                }

                Chars::EXCLAMATION => {
                    if self.peek() == Chars::EQUALS {
                        if self.unit(self.index + 2) == Chars::EQUALS {
                            return self.many(3, Token::StrictNotEqual);
                        }
                        return self.many(2, Token::LooseNotEqual);
                    }
                    return self.one(Token::Negate);
                }

                Chars::PLUS => {
                    if self.peek() == Chars::PLUS {
                        return self.many(2, Token::Increment);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::AddAssign);
                    }
                    return self.one(Token::Add);
                }

                Chars::MINUS => {
                    if self.peek() == Chars::MINUS {
                        if self.unit(self.index + 2) == Chars::GREATER_THAN
                            && (self.has_preceding_line_break() || self.start_index == 0)
                        {
                            if context & CONTEXT_MODULE != 0 {
                                return Err(self.error(ErrorKind::HtmlCommentInModule));
                            }
                            self.skip_single_line_comment(3);
                            continue;
                        }
                        return self.many(2, Token::Decrement);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::SubtractAssign);
                    }
                    return self.one(Token::Subtract);
                }

                Chars::ASTERISK => {
                    if self.peek() == Chars::ASTERISK {
                        if self.unit(self.index + 2) == Chars::EQUALS {
                            return self.many(3, Token::ExponentiateAssign);
                        }
                        return self.many(2, Token::Exponentiate);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::MultiplyAssign);
                    }
                    return self.one(Token::Multiply);
                }

                Chars::PERCENT => {
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::ModuloAssign);
                    }
                    return self.one(Token::Modulo);
                }

                Chars::AMPERSAND => {
                    if self.peek() == Chars::AMPERSAND {
                        return self.many(2, Token::LogicalAnd);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::BitwiseAndAssign);
                    }
                    return self.one(Token::BitwiseAnd);
                }

                Chars::BAR => {
                    if self.peek() == Chars::BAR {
                        return self.many(2, Token::LogicalOr);
                    }
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::BitwiseOrAssign);
                    }
                    return self.one(Token::BitwiseOr);
                }

                Chars::CARET => {
                    if self.peek() == Chars::EQUALS {
                        return self.many(2, Token::BitwiseXorAssign);
                    }
                    return self.one(Token::BitwiseXor);
                }

                Chars::DOUBLE_QUOTE | Chars::SINGLE_QUOTE => {
                    return self.scan_string(context, ch);
                }

                Chars::BACKTICK => return self.scan_template(context),

                Chars::HASH => {
                    // A shebang only matches at source position 0; `#`
                    // anywhere else is not part of the grammar.
                    if self.index == 0 && self.peek() == Chars::EXCLAMATION {
                        while self.has_next() && !is_line_terminator(self.current()) {
                            self.advance();
                        }
                        continue;
                    }
                    return Err(self.error(ErrorKind::Unexpected));
                }

                Chars::_0..=Chars::_9 => return self.scan_number(context, false),

                Chars::BACKSLASH => return self.scan_identifier(),

                _ => {
                    let (cp, _) = self.code_point();
                    if is_identifier_start(cp) {
                        return self.scan_identifier();
                    }
                    return Err(self.error(ErrorKind::Unexpected));
                }
            }
        }
    }

    #[inline]
    fn one(&mut self, token: Token) -> Result<Token, ParseError> {
        self.advance();
        self.token = token;
        Ok(token)
    }

    #[inline]
    fn many(&mut self, units: usize, token: Token) -> Result<Token, ParseError> {
        self.index += units;
        self.column += units as u32;
        self.token = token;
        Ok(token)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Skip a `//`, `<!--`, or `-->` comment; `opener` is the delimiter
    /// width in units.
    fn skip_single_line_comment(&mut self, opener: usize) {
        let comment_start = self.index;
        self.index += opener;
        self.column += opener as u32;
        let text_start = self.index;
        while self.has_next() && !is_line_terminator(self.current()) {
            self.advance();
        }
        if self.collect_comments {
            let text = self.raw_slice(text_start, self.index);
            self.comments.emit(
                CommentKind::SingleLine,
                &text,
                comment_start as u32,
                self.index as u32,
            );
        }
    }

    fn skip_multi_line_comment(&mut self) -> Result<(), ParseError> {
        let comment_start = self.index;
        self.index += 2;
        self.column += 2;
        let text_start = self.index;
        loop {
            if !self.has_next() {
                return Err(self.error(ErrorKind::UnterminatedComment));
            }
            let ch = self.current();
            if ch == Chars::ASTERISK && self.peek() == Chars::SLASH {
                let text_end = self.index;
                self.index += 2;
                self.column += 2;
                if self.collect_comments {
                    let text = self.raw_slice(text_start, text_end);
                    self.comments.emit(
                        CommentKind::MultiLine,
                        &text,
                        comment_start as u32,
                        self.index as u32,
                    );
                }
                return Ok(());
            }
            if is_line_terminator(ch) {
                self.token_flags |= TOKEN_FLAG_PRECEDING_LINE_BREAK;
                self.advance_newline();
            } else {
                self.advance();
            }
        }
    }

    // =========================================================================
    // Identifiers and keywords
    // =========================================================================

    fn scan_identifier(&mut self) -> Result<Token, ParseError> {
        let mut name = String::new();
        let mut has_escape = false;

        loop {
            if !self.has_next() {
                break;
            }
            let ch = self.current();
            if ch == Chars::BACKSLASH {
                has_escape = true;
                let cp = self.scan_identifier_escape()?;
                let legal = if name.is_empty() {
                    is_identifier_start(cp)
                } else {
                    is_identifier_part(cp)
                };
                if !legal {
                    return Err(self.error_at_start(ErrorKind::InvalidUnicodeEscapeSequence));
                }
                name.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
                continue;
            }
            let (cp, width) = self.code_point();
            let legal = if name.is_empty() {
                is_identifier_start(cp)
            } else {
                is_identifier_part(cp)
            };
            if !legal {
                break;
            }
            name.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
            self.index += width;
            self.column += width as u32;
        }

        // Identifiers between 2 and 11 characters starting with a lowercase
        // ASCII letter are candidates for the keyword table.
        let first = name.as_bytes().first().copied().unwrap_or(0);
        let candidate = (2..=11).contains(&name.len()) && first.is_ascii_lowercase();
        if candidate {
            if let Some(keyword) = keyword_token(&name) {
                if has_escape {
                    return Err(self.error_at_start(ErrorKind::InvalidEscapedReservedWord));
                }
                self.token_value = TokenValue::String(name);
                self.token = keyword;
                return Ok(keyword);
            }
        } else if has_escape && keyword_token(&name).is_some() {
            return Err(self.error_at_start(ErrorKind::InvalidEscapedReservedWord));
        }

        self.token_value = TokenValue::String(name);
        self.token = Token::Identifier;
        Ok(Token::Identifier)
    }

    /// Scan `\uXXXX` or `\u{...}` at the cursor (on the backslash) and return
    /// the decoded code point.
    fn scan_identifier_escape(&mut self) -> Result<u32, ParseError> {
        self.advance(); // backslash
        if self.current() != Chars::LOWER_U {
            return Err(self.error(ErrorKind::InvalidUnicodeEscapeSequence));
        }
        self.advance();
        self.scan_unicode_escape_value()
    }

    /// Scan the value part of a unicode escape: `XXXX` or `{H+}`, cursor just
    /// past the `u`.
    fn scan_unicode_escape_value(&mut self) -> Result<u32, ParseError> {
        if self.current() == Chars::OPEN_BRACE {
            self.advance();
            let mut value: u32 = 0;
            let mut digits = 0;
            while self.has_next() && self.current() != Chars::CLOSE_BRACE {
                let ch = self.current();
                if !is_hex_digit(ch) {
                    return Err(self.error(ErrorKind::InvalidUnicodeEscapeSequence));
                }
                value = value.saturating_mul(16).saturating_add(hex_value(ch));
                if value > Chars::MAX_CODE_POINT {
                    return Err(self.error(ErrorKind::UnicodeOutOfRange));
                }
                digits += 1;
                self.advance();
            }
            if digits == 0 || self.current() != Chars::CLOSE_BRACE {
                return Err(self.error(ErrorKind::InvalidUnicodeEscapeSequence));
            }
            self.advance();
            Ok(value)
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let ch = self.current();
                if !is_hex_digit(ch) {
                    return Err(self.error(ErrorKind::InvalidUnicodeEscapeSequence));
                }
                value = value * 16 + hex_value(ch);
                self.advance();
            }
            Ok(value)
        }
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    fn scan_number(&mut self, context: u32, leading_dot: bool) -> Result<Token, ParseError> {
        let start = self.index;
        let mut is_float = leading_dot;
        let mut value: f64 = 0.0;
        let mut radix_literal = false;

        if leading_dot {
            self.advance(); // the dot
            while is_digit(self.current()) {
                self.advance();
            }
        } else if self.current() == Chars::_0 {
            self.advance();
            match self.current() {
                Chars::LOWER_X | Chars::UPPER_X => {
                    self.advance();
                    let mut digits = 0;
                    while is_hex_digit(self.current()) {
                        value = value * 16.0 + hex_value(self.current()) as f64;
                        digits += 1;
                        self.advance();
                    }
                    if digits == 0 {
                        return Err(self.error(ErrorKind::MissingHexDigits));
                    }
                    radix_literal = true;
                }
                Chars::LOWER_O | Chars::UPPER_O => {
                    self.advance();
                    let mut digits = 0;
                    while is_octal_digit(self.current()) {
                        value = value * 8.0 + (self.current() - Chars::_0) as f64;
                        digits += 1;
                        self.advance();
                    }
                    if digits == 0 {
                        return Err(self.error(ErrorKind::MissingOctalDigits));
                    }
                    radix_literal = true;
                }
                Chars::LOWER_B | Chars::UPPER_B => {
                    self.advance();
                    let mut digits = 0;
                    while is_binary_digit(self.current()) {
                        value = value * 2.0 + (self.current() - Chars::_0) as f64;
                        digits += 1;
                        self.advance();
                    }
                    if digits == 0 {
                        return Err(self.error(ErrorKind::MissingBinaryDigits));
                    }
                    radix_literal = true;
                }
                ch if is_digit(ch) => {
                    // Legacy octal, or a 0-prefixed decimal when an 8 or 9
                    // shows up. Either way it is fatal in strict mode.
                    if context & CONTEXT_STRICT != 0 {
                        return Err(self.error_at_start(ErrorKind::StrictOctalLiteral));
                    }
                    let mut all_octal = true;
                    let digit_start = self.index;
                    while is_digit(self.current()) {
                        if !is_octal_digit(self.current()) {
                            all_octal = false;
                        }
                        self.advance();
                    }
                    if all_octal {
                        for i in digit_start..self.index {
                            value = value * 8.0 + (self.unit(i) - Chars::_0) as f64;
                        }
                        if self.current() == Chars::LOWER_N {
                            return Err(self.error(ErrorKind::InvalidBigIntLiteral));
                        }
                        self.check_number_boundary()?;
                        self.token_value = TokenValue::Number(value);
                        self.token = Token::NumericLiteral;
                        return Ok(self.token);
                    }
                    // 8 or 9 seen: re-read the digits as decimal and keep
                    // scanning the usual decimal continuations.
                    self.scan_decimal_rest(&mut is_float)?;
                    let raw = self.raw_slice(start, self.index);
                    self.token_value = TokenValue::Number(raw.parse::<f64>().unwrap_or_default());
                    self.token = Token::NumericLiteral;
                    self.check_number_boundary()?;
                    return Ok(self.token);
                }
                _ => {}
            }
        } else {
            while is_digit(self.current()) {
                self.advance();
            }
        }

        if radix_literal {
            if self.current() == Chars::LOWER_N && self.options_next {
                self.advance();
                self.check_number_boundary()?;
                self.token_value = TokenValue::Number(value);
                self.token = Token::BigIntLiteral;
                return Ok(self.token);
            }
            self.check_number_boundary()?;
            self.token_value = TokenValue::Number(value);
            self.token = Token::NumericLiteral;
            return Ok(self.token);
        }

        if !leading_dot {
            self.scan_decimal_rest(&mut is_float)?;
        } else if matches!(self.current(), Chars::LOWER_E | Chars::UPPER_E) {
            self.scan_exponent()?;
            is_float = true;
        }

        if self.current() == Chars::LOWER_N && self.options_next {
            if is_float {
                return Err(self.error(ErrorKind::InvalidBigIntLiteral));
            }
            let mut big: f64 = 0.0;
            for i in start..self.index {
                big = big * 10.0 + (self.unit(i) - Chars::_0) as f64;
            }
            self.advance();
            self.check_number_boundary()?;
            self.token_value = TokenValue::Number(big);
            self.token = Token::BigIntLiteral;
            return Ok(self.token);
        }

        self.check_number_boundary()?;
        let raw = self.raw_slice(start, self.index);
        self.token_value = TokenValue::Number(raw.parse::<f64>().unwrap_or_default());
        self.token = Token::NumericLiteral;
        Ok(self.token)
    }

    /// Scan the fraction and exponent of a decimal literal, cursor past the
    /// integer digits.
    fn scan_decimal_rest(&mut self, is_float: &mut bool) -> Result<(), ParseError> {
        if self.current() == Chars::DOT {
            *is_float = true;
            self.advance();
            while is_digit(self.current()) {
                self.advance();
            }
        }
        if matches!(self.current(), Chars::LOWER_E | Chars::UPPER_E) {
            *is_float = true;
            self.scan_exponent()?;
        }
        Ok(())
    }

    fn scan_exponent(&mut self) -> Result<(), ParseError> {
        self.advance(); // e or E
        if matches!(self.current(), Chars::PLUS | Chars::MINUS) {
            self.advance();
        }
        if !is_digit(self.current()) {
            return Err(self.error(ErrorKind::MissingExponentDigits));
        }
        while is_digit(self.current()) {
            self.advance();
        }
        Ok(())
    }

    /// A numeric literal may not be immediately followed by an identifier
    /// start or another digit.
    fn check_number_boundary(&self) -> Result<(), ParseError> {
        if !self.has_next() {
            return Ok(());
        }
        let (cp, _) = self.code_point();
        if is_identifier_start(cp) || is_digit(self.current()) {
            return Err(self.error(ErrorKind::IdentifierAfterNumber));
        }
        Ok(())
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn scan_string(&mut self, context: u32, quote: u16) -> Result<Token, ParseError> {
        self.advance(); // opening quote
        let mut cooked = String::new();

        loop {
            if !self.has_next() {
                return Err(self.error_at_start(ErrorKind::UnterminatedString));
            }
            let ch = self.current();
            if ch == quote {
                self.advance();
                self.token_value = TokenValue::String(cooked);
                self.token = Token::StringLiteral;
                return Ok(self.token);
            }
            if is_line_terminator(ch) {
                return Err(self.error_at_start(ErrorKind::UnterminatedString));
            }
            if ch == Chars::BACKSLASH {
                match self.scan_escape_sequence(context, false)? {
                    Escape::Char(c) => cooked.push(c),
                    Escape::Empty => {}
                }
                continue;
            }
            let (cp, width) = self.code_point();
            cooked.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
            self.index += width;
            self.column += width as u32;
        }
    }

    /// Scan one escape sequence, cursor on the backslash. In templates the
    /// octal rules harden: any octal escape beyond a lone `\0` is fatal.
    fn scan_escape_sequence(&mut self, context: u32, template: bool) -> Result<Escape, ParseError> {
        let escape_location = self.here();
        self.advance(); // backslash
        if !self.has_next() {
            return Err(self.error_at_start(if template {
                ErrorKind::UnterminatedTemplate
            } else {
                ErrorKind::UnterminatedString
            }));
        }
        let ch = self.current();
        match ch {
            Chars::LOWER_B => {
                self.advance();
                Ok(Escape::Char('\u{8}'))
            }
            Chars::LOWER_T => {
                self.advance();
                Ok(Escape::Char('\t'))
            }
            Chars::LOWER_N => {
                self.advance();
                Ok(Escape::Char('\n'))
            }
            Chars::LOWER_V => {
                self.advance();
                Ok(Escape::Char('\u{B}'))
            }
            Chars::LOWER_F => {
                self.advance();
                Ok(Escape::Char('\u{C}'))
            }
            Chars::LOWER_R => {
                self.advance();
                Ok(Escape::Char('\r'))
            }
            Chars::LOWER_X => {
                self.advance();
                let hi = self.current();
                if !is_hex_digit(hi) {
                    return Err(self.error(ErrorKind::InvalidHexEscapeSequence));
                }
                self.advance();
                let lo = self.current();
                if !is_hex_digit(lo) {
                    return Err(self.error(ErrorKind::InvalidHexEscapeSequence));
                }
                self.advance();
                let value = hex_value(hi) * 16 + hex_value(lo);
                Ok(Escape::Char(
                    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
                ))
            }
            Chars::LOWER_U => {
                self.advance();
                let cp = self.scan_unicode_escape_value()?;
                Ok(Escape::Char(
                    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER),
                ))
            }
            Chars::_8 | Chars::_9 => Err(self.error(ErrorKind::InvalidEightAndNine)),
            Chars::_0..=Chars::_7 => {
                // `\0` not followed by a digit is NUL and always legal.
                if ch == Chars::_0 && !is_digit(self.peek()) {
                    self.advance();
                    return Ok(Escape::Char('\0'));
                }
                if template {
                    return Err(self.error(ErrorKind::TemplateOctalLiteral));
                }
                if context & CONTEXT_STRICT != 0 {
                    return Err(self.error(ErrorKind::StrictOctalEscape));
                }
                // Legacy octal: up to three digits, value at most 255.
                let mut value = (ch - Chars::_0) as u32;
                self.advance();
                if is_octal_digit(self.current()) {
                    value = value * 8 + (self.current() - Chars::_0) as u32;
                    self.advance();
                    if value <= 31 && is_octal_digit(self.current()) {
                        value = value * 8 + (self.current() - Chars::_0) as u32;
                        self.advance();
                    }
                }
                self.octal_location = Some(escape_location);
                Ok(Escape::Char(
                    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
                ))
            }
            Chars::LINE_FEED
            | Chars::CARRIAGE_RETURN
            | Chars::LINE_SEPARATOR
            | Chars::PARAGRAPH_SEPARATOR => {
                self.advance_newline();
                Ok(Escape::Empty)
            }
            _ => {
                let (cp, width) = self.code_point();
                self.index += width;
                self.column += width as u32;
                Ok(Escape::Char(
                    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER),
                ))
            }
        }
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Scan a template chunk from the opening backtick.
    pub fn scan_template(&mut self, context: u32) -> Result<Token, ParseError> {
        self.advance(); // backtick
        self.scan_template_span(context)
    }

    /// Resume template scanning after an interpolation. The cursor sits just
    /// past the `}` that closed it; step back one unit so the brace is
    /// consumed as part of the template body.
    pub fn scan_template_next(&mut self, context: u32) -> Result<Token, ParseError> {
        self.index -= 1;
        self.start_index = self.index;
        self.start_line = self.line;
        self.start_column = self.column.saturating_sub(1);
        self.column = self.start_column;
        self.advance(); // the closing brace of the interpolation
        self.token_raw.clear();
        self.token_regex = None;
        self.octal_location = None;
        self.scan_template_span(context)
    }

    /// Scan template body units until a backtick (tail) or `${` (cont).
    /// Both the cooked and raw forms are recorded; CR and CR+LF normalize
    /// to LF in each.
    fn scan_template_span(&mut self, context: u32) -> Result<Token, ParseError> {
        let mut cooked = String::new();
        let mut raw = String::new();

        loop {
            if !self.has_next() {
                return Err(self.error_at_start(ErrorKind::UnterminatedTemplate));
            }
            let ch = self.current();
            match ch {
                Chars::BACKTICK => {
                    self.advance();
                    self.token_value = TokenValue::String(cooked);
                    self.token_raw = raw;
                    self.token = Token::TemplateTail;
                    return Ok(self.token);
                }
                Chars::DOLLAR if self.peek() == Chars::OPEN_BRACE => {
                    self.index += 2;
                    self.column += 2;
                    self.token_value = TokenValue::String(cooked);
                    self.token_raw = raw;
                    self.token = Token::TemplateCont;
                    return Ok(self.token);
                }
                Chars::BACKSLASH => {
                    let escape_start = self.index;
                    match self.scan_escape_sequence(context, true)? {
                        Escape::Char(c) => cooked.push(c),
                        Escape::Empty => {}
                    }
                    let piece = self.raw_slice(escape_start, self.index);
                    raw.push_str(&piece.replace("\r\n", "\n").replace('\r', "\n"));
                }
                Chars::LINE_FEED
                | Chars::CARRIAGE_RETURN
                | Chars::LINE_SEPARATOR
                | Chars::PARAGRAPH_SEPARATOR => {
                    self.token_flags |= TOKEN_FLAG_PRECEDING_LINE_BREAK;
                    if ch == Chars::CARRIAGE_RETURN || ch == Chars::LINE_FEED {
                        cooked.push('\n');
                        raw.push('\n');
                    } else {
                        let c = char::from_u32(ch as u32).unwrap_or('\n');
                        cooked.push(c);
                        raw.push(c);
                    }
                    self.advance_newline();
                }
                _ => {
                    let (cp, width) = self.code_point();
                    let c = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
                    cooked.push(c);
                    raw.push(c);
                    self.index += width;
                    self.column += width as u32;
                }
            }
        }
    }

    // =========================================================================
    // Regular expressions
    // =========================================================================

    /// Re-scan the current `/` or `/=` token as a regular-expression literal.
    /// Only the parser knows when a slash can head a regex, so this is a
    /// dedicated entry point rather than part of `scan`.
    pub fn re_scan_regex(&mut self) -> Result<Token, ParseError> {
        self.index = self.start_index;
        self.line = self.start_line;
        self.column = self.start_column;
        self.advance(); // opening slash
        let body_start = self.index;

        let mut in_class = false;
        let mut in_escape = false;
        let body_end;
        loop {
            if !self.has_next() {
                return Err(self.error_at_start(ErrorKind::UnterminatedRegExp));
            }
            let ch = self.current();
            if is_line_terminator(ch) {
                return Err(self.error_at_start(ErrorKind::UnterminatedRegExp));
            }
            if in_escape {
                in_escape = false;
            } else {
                match ch {
                    Chars::BACKSLASH => in_escape = true,
                    Chars::OPEN_BRACKET => in_class = true,
                    Chars::CLOSE_BRACKET => in_class = false,
                    Chars::SLASH if !in_class => {
                        body_end = self.index;
                        self.advance();
                        break;
                    }
                    _ => {}
                }
            }
            self.advance();
        }

        let flags_start = self.index;
        let mut mask = 0u32;
        loop {
            if !self.has_next() {
                break;
            }
            let (cp, _) = self.code_point();
            if !is_identifier_part(cp) {
                break;
            }
            let bit = match self.current() {
                Chars::LOWER_G => REGEX_FLAG_GLOBAL,
                Chars::LOWER_I => REGEX_FLAG_IGNORE_CASE,
                Chars::LOWER_M => REGEX_FLAG_MULTILINE,
                Chars::LOWER_U => REGEX_FLAG_UNICODE,
                Chars::LOWER_Y => REGEX_FLAG_STICKY,
                Chars::LOWER_S if self.options_next => REGEX_FLAG_DOT_ALL,
                _ => return Err(self.error(ErrorKind::UnexpectedTokenRegExpFlag)),
            };
            if mask & bit != 0 {
                let c = char::from_u32(self.current() as u32).unwrap_or('?');
                return Err(self.error(ErrorKind::DuplicateRegExpFlag(c)));
            }
            mask |= bit;
            self.advance();
        }

        self.token_regex = Some(RegexPayload {
            pattern: self.raw_slice(body_start, body_end),
            flags: self.raw_slice(flags_start, self.index),
        });
        self.token_value = TokenValue::None;
        self.token = Token::RegularExpression;
        Ok(self.token)
    }

    // =========================================================================
    // JSX sub-modes
    // =========================================================================

    /// Scan the next token in JSX child position: a text chunk (returned as
    /// an identifier token whose value is the raw text), `{`, `<`, or `</`.
    pub fn scan_jsx_token(&mut self) -> Result<Token, ParseError> {
        self.token_flags = 0;
        self.token_value = TokenValue::None;
        self.token_regex = None;
        self.token_raw.clear();
        self.start_index = self.index;
        self.start_line = self.line;
        self.start_column = self.column;

        if !self.has_next() {
            self.token = Token::EndOfSource;
            return Ok(self.token);
        }

        match self.current() {
            Chars::LESS_THAN => {
                if self.peek() == Chars::SLASH {
                    return self.many(2, Token::JSXClose);
                }
                self.one(Token::LessThan)
            }
            Chars::OPEN_BRACE => self.one(Token::LeftBrace),
            _ => {
                let text_start = self.index;
                while self.has_next() {
                    let ch = self.current();
                    if ch == Chars::LESS_THAN || ch == Chars::OPEN_BRACE {
                        break;
                    }
                    if is_line_terminator(ch) {
                        self.token_flags |= TOKEN_FLAG_PRECEDING_LINE_BREAK;
                        self.advance_newline();
                    } else {
                        self.advance();
                    }
                }
                self.token_value = TokenValue::String(self.raw_slice(text_start, self.index));
                self.token = Token::Identifier;
                Ok(self.token)
            }
        }
    }

    /// Extend the current identifier-like token with the JSX continuation
    /// characters: dashes joined with further identifier parts, as in
    /// `<my-custom-tag>`.
    pub fn scan_jsx_identifier(&mut self) -> Result<Token, ParseError> {
        if !self.token.is_identifier_or_keyword() {
            return Ok(self.token);
        }
        let mut name = self.token_value.as_str().to_string();
        loop {
            if !self.has_next() {
                break;
            }
            if self.current() == Chars::MINUS {
                name.push('-');
                self.advance();
                continue;
            }
            let (cp, width) = self.code_point();
            if !is_identifier_part(cp) {
                break;
            }
            name.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
            self.index += width;
            self.column += width as u32;
        }
        self.token_value = TokenValue::String(name);
        Ok(self.token)
    }

    /// Scan a JSX attribute value. Quoted strings take no escape processing;
    /// anything else falls back to the regular scanner (for `{` containers).
    pub fn scan_jsx_attribute_value(&mut self, context: u32) -> Result<Token, ParseError> {
        // Skip trivia manually so the quote scan starts on the delimiter.
        loop {
            let ch = self.current();
            if self.has_next() && is_white_space_single_line(ch) {
                self.advance();
            } else if self.has_next() && is_line_terminator(ch) {
                self.token_flags |= TOKEN_FLAG_PRECEDING_LINE_BREAK;
                self.advance_newline();
            } else {
                break;
            }
        }
        match self.current() {
            quote if quote == Chars::DOUBLE_QUOTE || quote == Chars::SINGLE_QUOTE => {
                self.token_value = TokenValue::None;
                self.token_regex = None;
                self.token_raw.clear();
                self.start_index = self.index;
                self.start_line = self.line;
                self.start_column = self.column;
                self.advance();
                let text_start = self.index;
                loop {
                    if !self.has_next() {
                        return Err(self.error_at_start(ErrorKind::UnterminatedString));
                    }
                    let ch = self.current();
                    if ch == quote {
                        break;
                    }
                    if is_line_terminator(ch) {
                        self.advance_newline();
                    } else {
                        self.advance();
                    }
                }
                let value = self.raw_slice(text_start, self.index);
                self.advance(); // closing quote
                self.token_value = TokenValue::String(value);
                self.token = Token::StringLiteral;
                Ok(self.token)
            }
            _ => self.scan(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CONTEXT_NONE;

    fn scan_all(source: &str) -> Vec<Token> {
        let mut scanner = ScannerState::new(source, true, CommentSink::None);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.scan(CONTEXT_NONE).expect("scan failed");
            if token == Token::EndOfSource {
                return tokens;
            }
            tokens.push(token);
        }
    }

    #[test]
    fn scans_longest_operators_first() {
        assert_eq!(
            scan_all(">>>= >>> >>= >> >= >"),
            vec![
                Token::LogicalShiftRightAssign,
                Token::LogicalShiftRight,
                Token::ShiftRightAssign,
                Token::ShiftRight,
                Token::GreaterThanOrEqual,
                Token::GreaterThan,
            ]
        );
        assert_eq!(
            scan_all("**= ** *= *"),
            vec![
                Token::ExponentiateAssign,
                Token::Exponentiate,
                Token::MultiplyAssign,
                Token::Multiply,
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        let mut scanner = ScannerState::new("while whiles", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::WhileKeyword);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::Identifier);
        assert_eq!(scanner.token_value.as_str(), "whiles");
    }

    #[test]
    fn escaped_keyword_is_fatal() {
        let mut scanner = ScannerState::new("whil\\u0065", true, CommentSink::None);
        let err = scanner.scan(CONTEXT_NONE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEscapedReservedWord);
    }

    #[test]
    fn escaped_identifier_decodes() {
        let mut scanner = ScannerState::new("f\\u006Fo", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::Identifier);
        assert_eq!(scanner.token_value.as_str(), "foo");
    }

    #[test]
    fn numbers_carry_values() {
        let mut scanner = ScannerState::new("0xFF 0o17 0b101 1.5e2 .25", true, CommentSink::None);
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.token_value.as_number(), 255.0);
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.token_value.as_number(), 15.0);
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.token_value.as_number(), 5.0);
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.token_value.as_number(), 150.0);
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.token_value.as_number(), 0.25);
    }

    #[test]
    fn bigint_is_gated_on_next() {
        let mut scanner = ScannerState::new("123n", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::BigIntLiteral);
        assert_eq!(scanner.token_value.as_number(), 123.0);

        let mut scanner = ScannerState::new("123n", false, CommentSink::None);
        let err = scanner.scan(CONTEXT_NONE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::IdentifierAfterNumber);
    }

    #[test]
    fn legacy_octal_is_fatal_in_strict() {
        let mut scanner = ScannerState::new("012", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::NumericLiteral);
        assert_eq!(scanner.token_value.as_number(), 10.0);

        let mut scanner = ScannerState::new("012", true, CommentSink::None);
        let err = scanner.scan(CONTEXT_STRICT).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StrictOctalLiteral);
    }

    #[test]
    fn string_escapes_cook() {
        let mut scanner = ScannerState::new(r#""a\tbA\x41\u{1F600}""#, true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::StringLiteral);
        assert_eq!(scanner.token_value.as_str(), "a\tbAA\u{1F600}");
    }

    #[test]
    fn eight_and_nine_escapes_are_always_fatal() {
        let mut scanner = ScannerState::new(r#""\8""#, true, CommentSink::None);
        let err = scanner.scan(CONTEXT_NONE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEightAndNine);
    }

    #[test]
    fn template_head_and_resume() {
        let mut scanner = ScannerState::new("`a${x}b`", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::TemplateCont);
        assert_eq!(scanner.token_value.as_str(), "a");
        assert_eq!(scanner.token_raw, "a");
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::Identifier);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::RightBrace);
        assert_eq!(scanner.scan_template_next(CONTEXT_NONE).unwrap(), Token::TemplateTail);
        assert_eq!(scanner.token_value.as_str(), "b");
    }

    #[test]
    fn regex_rescans_from_divide() {
        let mut scanner = ScannerState::new("/a[/]b/gi", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::Divide);
        assert_eq!(scanner.re_scan_regex().unwrap(), Token::RegularExpression);
        let regex = scanner.token_regex.clone().unwrap();
        assert_eq!(regex.pattern, "a[/]b");
        assert_eq!(regex.flags, "gi");
    }

    #[test]
    fn duplicate_regex_flags_are_fatal() {
        let mut scanner = ScannerState::new("/./gig", true, CommentSink::None);
        scanner.scan(CONTEXT_NONE).unwrap();
        let err = scanner.re_scan_regex().unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateRegExpFlag('g'));
    }

    #[test]
    fn comments_are_collected() {
        let mut collected = Vec::new();
        {
            let mut scanner = ScannerState::new(
                "// line\n/* block */ 1",
                true,
                CommentSink::Collect(&mut collected),
            );
            assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::NumericLiteral);
        }
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].kind, CommentKind::SingleLine);
        assert_eq!(collected[0].text, " line");
        assert_eq!(collected[1].kind, CommentKind::MultiLine);
        assert_eq!(collected[1].text, " block ");
    }

    #[test]
    fn html_comments_only_outside_modules() {
        let mut scanner = ScannerState::new("<!-- note\n1", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::NumericLiteral);

        let mut scanner = ScannerState::new("<!-- note\n1", true, CommentSink::None);
        let err = scanner.scan(CONTEXT_MODULE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::HtmlCommentInModule);
    }

    #[test]
    fn crlf_counts_as_one_newline() {
        let mut scanner = ScannerState::new("a\r\nb", true, CommentSink::None);
        scanner.scan(CONTEXT_NONE).unwrap();
        scanner.scan(CONTEXT_NONE).unwrap();
        assert_eq!(scanner.start_line, 2);
        assert_eq!(scanner.start_column, 0);
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn shebang_is_skipped_only_at_position_zero() {
        let mut scanner = ScannerState::new("#!/usr/bin/env node\n42", true, CommentSink::None);
        assert_eq!(scanner.scan(CONTEXT_NONE).unwrap(), Token::NumericLiteral);

        let mut scanner = ScannerState::new("1 #", true, CommentSink::None);
        scanner.scan(CONTEXT_NONE).unwrap();
        let err = scanner.scan(CONTEXT_NONE).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unexpected);
    }
}
