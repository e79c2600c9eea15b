//! Parse error definitions.
//!
//! Errors are a closed enumeration partitioned into lexical, grammatical,
//! strict-mode, module, and feature-gated kinds. There is no recovery: the
//! first error aborts the parse and is returned to the caller together with
//! the most informative source location known.

use thiserror::Error;

// =============================================================================
// Error kinds
// =============================================================================

/// Every error the scanner or parser can produce.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErrorKind {
    // Lexical
    #[error("Unexpected token")]
    Unexpected,
    #[error("Unexpected token '{0}'")]
    UnexpectedToken(&'static str),
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unterminated template literal")]
    UnterminatedTemplate,
    #[error("Unterminated regular expression literal")]
    UnterminatedRegExp,
    #[error("Unicode escape code point out of range")]
    UnicodeOutOfRange,
    #[error("Invalid Unicode escape sequence")]
    InvalidUnicodeEscapeSequence,
    #[error("Invalid hexadecimal escape sequence")]
    InvalidHexEscapeSequence,
    #[error("Escapes \\8 or \\9 are not syntactically valid escapes")]
    InvalidEightAndNine,
    #[error("Missing hexadecimal digits after '0x'")]
    MissingHexDigits,
    #[error("Missing octal digits after '0o'")]
    MissingOctalDigits,
    #[error("Missing binary digits after '0b'")]
    MissingBinaryDigits,
    #[error("Missing exponent digits")]
    MissingExponentDigits,
    #[error("Identifier starts immediately after numeric literal")]
    IdentifierAfterNumber,
    #[error("Invalid BigInt literal")]
    InvalidBigIntLiteral,
    #[error("Duplicate regular expression flag '{0}'")]
    DuplicateRegExpFlag(char),
    #[error("Unexpected regular expression flag")]
    UnexpectedTokenRegExpFlag,
    #[error("Keyword must not contain escaped characters")]
    InvalidEscapedReservedWord,
    #[error("HTML comments are not allowed in module code")]
    HtmlCommentInModule,

    // Grammatical
    #[error("Unexpected reserved word")]
    UnexpectedReserved,
    #[error("'{0}' may not be used as an identifier in this context")]
    DisallowedInContext(String),
    #[error("Invalid left-hand side in assignment")]
    InvalidLhsInAssignment,
    #[error("Invalid left-hand side expression in prefix operation")]
    InvalidLhsInPrefixOp,
    #[error("Invalid left-hand side expression in postfix operation")]
    InvalidLhsInPostfixOp,
    #[error("Invalid left-hand side in for-in")]
    InvalidLhsInForIn,
    #[error("Invalid left-hand side in for-of")]
    InvalidLhsInForOf,
    #[error("Invalid destructuring assignment target")]
    InvalidDestructuringTarget,
    #[error("Invalid parenthesized pattern")]
    InvalidParenthesizedPattern,
    #[error("Unexpected trailing comma")]
    UnexpectedTrailingComma,
    #[error("Rest parameter may only appear in an arrow function parameter list")]
    UnexpectedRestElement,
    #[error("Invalid arrow function parameter list")]
    InvalidArrowParams,
    #[error("No line break is allowed after async")]
    LineBreakAfterAsync,
    #[error("Rest element must be last element")]
    RestElementLast,
    #[error("Rest parameter must be last formal parameter")]
    ParamAfterRest,
    #[error("Rest elements cannot have a default initializer")]
    RestDefaultInitializer,
    #[error("Missing initializer in {0} declaration")]
    DeclarationMissingInitializer(&'static str),
    #[error("'for-{0}' loop variable declaration may not have an initializer")]
    ForInOfLoopInitializer(&'static str),
    #[error("'for await' loop should be used with 'of'")]
    ForAwaitNotOf,
    #[error("More than one default clause in switch statement")]
    MultipleDefaultsInSwitch,
    #[error("Illegal newline after throw")]
    NewlineAfterThrow,
    #[error("Illegal return statement")]
    IllegalReturn,
    #[error("Illegal continue statement: no surrounding iteration statement")]
    IllegalContinue,
    #[error("Illegal break statement")]
    IllegalBreak,
    #[error("Undefined label '{0}'")]
    UnknownLabel(String),
    #[error("Label '{0}' has already been declared")]
    LabelRedeclaration(String),
    #[error("{0} can't appear in single-statement context")]
    ForbiddenAsStatement(&'static str),
    #[error("Async functions can only be declared at the top level or inside a block")]
    AsyncFunctionInSingleStatementContext,
    #[error("Duplicate binding '{0}'")]
    DuplicateBinding(String),
    #[error("Lexical binding may not be named '{0}'")]
    RestrictedBindingName(String),
    #[error("Duplicate parameter name not allowed in this context")]
    DuplicateParameter,
    #[error("Function declaration must have a name in this context")]
    UnnamedFunctionDecl,
    #[error("Class declaration must have a name in this context")]
    UnnamedClassDecl,
    #[error("Invalid shorthand property initializer")]
    InvalidShorthandAssignment,
    #[error("Property name __proto__ appears more than once in object literal")]
    DuplicateProto,
    #[error("Class constructor may not be an accessor, async method or generator")]
    ConstructorSpecialMethod,
    #[error("A class may only have one constructor")]
    DuplicateConstructor,
    #[error("Classes may not have a static property named prototype")]
    StaticPrototype,
    #[error("'super' keyword unexpected here")]
    UnexpectedSuper,
    #[error("super() is only valid in derived class constructors")]
    BadSuperCall,
    #[error("new.target only allowed within functions")]
    UnexpectedNewTarget,
    #[error("The only valid meta property for new is new.target")]
    InvalidMetaProperty,
    #[error("Yield expression not allowed in formal parameter")]
    YieldInParameter,
    #[error("Await expression not allowed in formal parameter")]
    AwaitInParameter,
    #[error("Getter must not have any formal parameters")]
    BadGetterArity,
    #[error("Setter must have exactly one formal parameter")]
    BadSetterArity,
    #[error("Setter function argument must not be a rest parameter")]
    BadSetterRestParameter,
    #[error("Missing catch or finally after try")]
    NoCatchOrFinally,
    #[error("Cannot use new with import()")]
    InvalidNewWithImport,

    // Strict mode
    #[error("Octal escape sequences are not allowed in strict mode")]
    StrictOctalEscape,
    #[error("Octal escape sequences are not allowed in template strings")]
    TemplateOctalLiteral,
    #[error("Legacy octal literals are not allowed in strict mode")]
    StrictOctalLiteral,
    #[error("Assignment to eval or arguments is not allowed in strict mode")]
    StrictLhsAssignment,
    #[error("Prefix increment/decrement may not have eval or arguments operand in strict mode")]
    StrictLhsPrefix,
    #[error("Postfix increment/decrement may not have eval or arguments operand in strict mode")]
    StrictLhsPostfix,
    #[error("Delete of an unqualified identifier in strict mode")]
    StrictDelete,
    #[error("In strict mode code, functions can only be declared at top level or inside a block")]
    StrictFunction,
    #[error("Parameter name eval or arguments is not allowed in strict mode")]
    StrictParamName,
    #[error("Strict mode code may not include a with statement")]
    StrictModeWith,
    #[error("Unexpected strict mode reserved word")]
    UnexpectedStrictReserved,
    #[error("Unexpected eval or arguments in strict mode")]
    StrictEvalArguments,
    #[error("Illegal 'use strict' directive in function with non-simple parameter list")]
    IllegalUseStrict,

    // Modules
    #[error("Import declarations may only appear at top level of a module")]
    ImportDeclAtTopLevel,
    #[error("Export declarations may only appear at top level of a module")]
    ExportDeclAtTopLevel,
    #[error("Missing declaration after 'export' keyword")]
    MissingDeclarationAfterExport,
    #[error("Duplicate export of '{0}'")]
    DuplicateExport(String),
    #[error("Invalid module specifier")]
    InvalidModuleSpecifier,

    // Feature gated
    #[error("'for await' is only valid in async functions and async generators")]
    NotAnAsyncGenerator,
    #[error("Dynamic import requires exactly one argument")]
    BadImportCallArity,

    // JSX
    #[error("Expected corresponding JSX closing tag for '{0}'")]
    ExpectedJsxClosingTag(String),
    #[error("JSX attribute value should be either an expression container or a quoted text")]
    InvalidJsxAttributeValue,
    #[error("Adjacent JSX elements must be wrapped in an enclosing tag")]
    AdjacentJsxElements,
}

// =============================================================================
// Error locations
// =============================================================================

/// A captured source position, used both for final error reporting and for
/// deferred `error_location` snapshots taken when a potentially-illegal
/// construct is first parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ErrorLocation {
    pub index: u32,
    pub line: u32,
    pub column: u32,
}

/// A fatal parse error: one kind plus the source location it was raised at.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub index: u32,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(kind: ErrorKind, location: ErrorLocation) -> Self {
        ParseError {
            kind,
            index: location.index,
            line: location.line,
            column: location.column,
        }
    }

    /// The location the error was raised at.
    pub fn location(&self) -> ErrorLocation {
        ErrorLocation {
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_with_location() {
        let err = ParseError::new(
            ErrorKind::UnterminatedString,
            ErrorLocation {
                index: 5,
                line: 2,
                column: 1,
            },
        );
        assert_eq!(
            err.to_string(),
            "Line 2, column 1: Unterminated string literal"
        );
    }

    #[test]
    fn parameterized_messages() {
        assert_eq!(
            ErrorKind::DuplicateRegExpFlag('g').to_string(),
            "Duplicate regular expression flag 'g'"
        );
        assert_eq!(
            ErrorKind::ForInOfLoopInitializer("of").to_string(),
            "'for-of' loop variable declaration may not have an initializer"
        );
    }
}
