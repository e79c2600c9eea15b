//! Character code constants used by the scanner.
//!
//! All constants are UTF-16 code units. Not every constant is referenced
//! today; the table is intentionally complete so scanner extensions never
//! reach for bare hex.

#![allow(dead_code)]

/// Character codes used throughout the scanner.
pub struct CharacterCodes;

impl CharacterCodes {
    // Line terminators
    pub const LINE_FEED: u16 = 0x0A; // \n
    pub const CARRIAGE_RETURN: u16 = 0x0D; // \r
    pub const LINE_SEPARATOR: u16 = 0x2028;
    pub const PARAGRAPH_SEPARATOR: u16 = 0x2029;

    // Whitespace
    pub const TAB: u16 = 0x09;
    pub const VERTICAL_TAB: u16 = 0x0B;
    pub const FORM_FEED: u16 = 0x0C;
    pub const SPACE: u16 = 0x20;
    pub const NON_BREAKING_SPACE: u16 = 0x00A0;
    pub const OGHAM: u16 = 0x1680;
    pub const EN_QUAD: u16 = 0x2000;
    pub const EM_QUAD: u16 = 0x2001;
    pub const EN_SPACE: u16 = 0x2002;
    pub const EM_SPACE: u16 = 0x2003;
    pub const THREE_PER_EM_SPACE: u16 = 0x2004;
    pub const FOUR_PER_EM_SPACE: u16 = 0x2005;
    pub const SIX_PER_EM_SPACE: u16 = 0x2006;
    pub const FIGURE_SPACE: u16 = 0x2007;
    pub const PUNCTUATION_SPACE: u16 = 0x2008;
    pub const THIN_SPACE: u16 = 0x2009;
    pub const HAIR_SPACE: u16 = 0x200A;
    pub const NARROW_NO_BREAK_SPACE: u16 = 0x202F;
    pub const MATHEMATICAL_SPACE: u16 = 0x205F;
    pub const IDEOGRAPHIC_SPACE: u16 = 0x3000;
    pub const ZERO_WIDTH_NO_BREAK_SPACE: u16 = 0xFEFF;

    // Joiners, legal in identifier continuations
    pub const ZERO_WIDTH_NON_JOINER: u16 = 0x200C;
    pub const ZERO_WIDTH_JOINER: u16 = 0x200D;

    // Digits
    pub const _0: u16 = 0x30;
    pub const _1: u16 = 0x31;
    pub const _2: u16 = 0x32;
    pub const _3: u16 = 0x33;
    pub const _4: u16 = 0x34;
    pub const _5: u16 = 0x35;
    pub const _6: u16 = 0x36;
    pub const _7: u16 = 0x37;
    pub const _8: u16 = 0x38;
    pub const _9: u16 = 0x39;

    // Uppercase letters
    pub const UPPER_A: u16 = 0x41;
    pub const UPPER_B: u16 = 0x42;
    pub const UPPER_E: u16 = 0x45;
    pub const UPPER_F: u16 = 0x46;
    pub const UPPER_O: u16 = 0x4F;
    pub const UPPER_X: u16 = 0x58;
    pub const UPPER_Z: u16 = 0x5A;

    // Lowercase letters
    pub const LOWER_A: u16 = 0x61;
    pub const LOWER_B: u16 = 0x62;
    pub const LOWER_D: u16 = 0x64;
    pub const LOWER_E: u16 = 0x65;
    pub const LOWER_F: u16 = 0x66;
    pub const LOWER_G: u16 = 0x67;
    pub const LOWER_I: u16 = 0x69;
    pub const LOWER_M: u16 = 0x6D;
    pub const LOWER_N: u16 = 0x6E;
    pub const LOWER_O: u16 = 0x6F;
    pub const LOWER_R: u16 = 0x72;
    pub const LOWER_S: u16 = 0x73;
    pub const LOWER_T: u16 = 0x74;
    pub const LOWER_U: u16 = 0x75;
    pub const LOWER_V: u16 = 0x76;
    pub const LOWER_X: u16 = 0x78;
    pub const LOWER_Y: u16 = 0x79;
    pub const LOWER_Z: u16 = 0x7A;

    // Punctuation and operators
    pub const EXCLAMATION: u16 = 0x21; // !
    pub const DOUBLE_QUOTE: u16 = 0x22; // "
    pub const HASH: u16 = 0x23; // #
    pub const DOLLAR: u16 = 0x24; // $
    pub const PERCENT: u16 = 0x25; // %
    pub const AMPERSAND: u16 = 0x26; // &
    pub const SINGLE_QUOTE: u16 = 0x27; // '
    pub const OPEN_PAREN: u16 = 0x28; // (
    pub const CLOSE_PAREN: u16 = 0x29; // )
    pub const ASTERISK: u16 = 0x2A; // *
    pub const PLUS: u16 = 0x2B; // +
    pub const COMMA: u16 = 0x2C; // ,
    pub const MINUS: u16 = 0x2D; // -
    pub const DOT: u16 = 0x2E; // .
    pub const SLASH: u16 = 0x2F; // /
    pub const COLON: u16 = 0x3A; // :
    pub const SEMICOLON: u16 = 0x3B; // ;
    pub const LESS_THAN: u16 = 0x3C; // <
    pub const EQUALS: u16 = 0x3D; // =
    pub const GREATER_THAN: u16 = 0x3E; // >
    pub const QUESTION: u16 = 0x3F; // ?
    pub const AT: u16 = 0x40; // @
    pub const OPEN_BRACKET: u16 = 0x5B; // [
    pub const BACKSLASH: u16 = 0x5C; // \
    pub const CLOSE_BRACKET: u16 = 0x5D; // ]
    pub const CARET: u16 = 0x5E; // ^
    pub const UNDERSCORE: u16 = 0x5F; // _
    pub const BACKTICK: u16 = 0x60; // `
    pub const OPEN_BRACE: u16 = 0x7B; // {
    pub const BAR: u16 = 0x7C; // |
    pub const CLOSE_BRACE: u16 = 0x7D; // }
    pub const TILDE: u16 = 0x7E; // ~

    // Control characters
    pub const NULL: u16 = 0x00;
    pub const BACKSPACE: u16 = 0x08;

    // Surrogate ranges
    pub const HIGH_SURROGATE_START: u16 = 0xD800;
    pub const HIGH_SURROGATE_END: u16 = 0xDBFF;
    pub const LOW_SURROGATE_START: u16 = 0xDC00;
    pub const LOW_SURROGATE_END: u16 = 0xDFFF;

    /// Largest valid Unicode code point.
    pub const MAX_CODE_POINT: u32 = 0x10FFFF;
}

/// Check if a code unit is a single-line whitespace character.
#[inline]
pub fn is_white_space_single_line(ch: u16) -> bool {
    matches!(
        ch,
        CharacterCodes::TAB
            | CharacterCodes::VERTICAL_TAB
            | CharacterCodes::FORM_FEED
            | CharacterCodes::SPACE
            | CharacterCodes::NON_BREAKING_SPACE
            | CharacterCodes::OGHAM
            | CharacterCodes::EN_QUAD..=CharacterCodes::HAIR_SPACE
            | CharacterCodes::NARROW_NO_BREAK_SPACE
            | CharacterCodes::MATHEMATICAL_SPACE
            | CharacterCodes::IDEOGRAPHIC_SPACE
            | CharacterCodes::ZERO_WIDTH_NO_BREAK_SPACE
    )
}

/// Check if a code unit terminates a line.
#[inline]
pub fn is_line_terminator(ch: u16) -> bool {
    matches!(
        ch,
        CharacterCodes::LINE_FEED
            | CharacterCodes::CARRIAGE_RETURN
            | CharacterCodes::LINE_SEPARATOR
            | CharacterCodes::PARAGRAPH_SEPARATOR
    )
}

#[inline]
pub fn is_digit(ch: u16) -> bool {
    (CharacterCodes::_0..=CharacterCodes::_9).contains(&ch)
}

#[inline]
pub fn is_binary_digit(ch: u16) -> bool {
    ch == CharacterCodes::_0 || ch == CharacterCodes::_1
}

#[inline]
pub fn is_octal_digit(ch: u16) -> bool {
    (CharacterCodes::_0..=CharacterCodes::_7).contains(&ch)
}

#[inline]
pub fn is_hex_digit(ch: u16) -> bool {
    is_digit(ch)
        || (CharacterCodes::UPPER_A..=CharacterCodes::UPPER_F).contains(&ch)
        || (CharacterCodes::LOWER_A..=CharacterCodes::LOWER_F).contains(&ch)
}

/// Decimal value of a hex digit. Caller must have checked `is_hex_digit`.
#[inline]
pub fn hex_value(ch: u16) -> u32 {
    let ch = ch as u32;
    if ch <= CharacterCodes::_9 as u32 {
        ch - CharacterCodes::_0 as u32
    } else if ch <= CharacterCodes::UPPER_F as u32 {
        ch - CharacterCodes::UPPER_A as u32 + 10
    } else {
        ch - CharacterCodes::LOWER_A as u32 + 10
    }
}
