//! Context and flag bitsets.
//!
//! `CONTEXT_*` bits form the immutable parsing context: a `u32` passed by
//! value into every recursive parse call. Inner calls derive a child context
//! with bit arithmetic; a context is never mutated at a call site.
//!
//! `FLAG_*` bits are the mutable, sticky parser state: they live on the
//! parser and survive across tokens until explicitly cleared. The parser
//! options collapse into the same word so feature checks are a single
//! bitwise AND.

// =============================================================================
// Context bits (immutable, passed by value)
// =============================================================================

pub const CONTEXT_NONE: u32 = 0;
/// Strict mode code.
pub const CONTEXT_STRICT: u32 = 1;
/// Module code (implies strict).
pub const CONTEXT_MODULE: u32 = 1 << 1;
/// `in` is legal as a binary operator (cleared in for-statement heads).
pub const CONTEXT_ALLOW_IN: u32 = 1 << 2;
/// `yield` is a keyword (inside generators).
pub const CONTEXT_ALLOW_YIELD: u32 = 1 << 3;
/// `await` is a keyword (inside async functions and modules).
pub const CONTEXT_ALLOW_AWAIT: u32 = 1 << 4;
/// Directly inside an async function body.
pub const CONTEXT_IN_ASYNC_FUNCTION_BODY: u32 = 1 << 5;
/// Inside the head of a `for` statement.
pub const CONTEXT_IN_FOR_STATEMENT: u32 = 1 << 6;
/// Inside a binding position (parameters, declarators, patterns).
pub const CONTEXT_IN_BINDING: u32 = 1 << 7;
/// Parsing a `let` declaration.
pub const CONTEXT_LET: u32 = 1 << 8;
/// Parsing a `const` declaration.
pub const CONTEXT_CONST: u32 = 1 << 9;
/// Parsing any lexical declaration.
pub const CONTEXT_LEXICAL: u32 = 1 << 10;
/// Declarators must carry an initializer (`const`, outside for-in/of heads).
pub const CONTEXT_REQUIRE_INITIALIZER: u32 = 1 << 11;
/// Inside an `export` declaration.
pub const CONTEXT_EXPORT: u32 = 1 << 12;
/// A function/class name may be omitted (`export default`).
pub const CONTEXT_OPTIONAL_IDENTIFIER: u32 = 1 << 13;
/// Parsing in statement position (single-statement contexts).
pub const CONTEXT_STATEMENT: u32 = 1 << 14;
/// Parsing a method definition.
pub const CONTEXT_METHOD: u32 = 1 << 15;
/// Inside the callee of `new`.
pub const CONTEXT_NEW_EXPRESSION: u32 = 1 << 16;
/// Inside a dynamic `import(...)` call.
pub const CONTEXT_DYNAMIC_IMPORT: u32 = 1 << 17;
/// Scanning/parsing JSX children.
pub const CONTEXT_JSX_CHILD: u32 = 1 << 18;
/// Parsing an arrow function concise body.
pub const CONTEXT_CONCISE_BODY: u32 = 1 << 19;
/// Inside a parenthesized expression group.
pub const CONTEXT_PARENTHESIS: u32 = 1 << 20;
/// Parsing arrow function parameters.
pub const CONTEXT_ARROW: u32 = 1 << 21;
/// Parsing a simple (single identifier) arrow parameter.
pub const CONTEXT_SIMPLE_ARROW: u32 = 1 << 22;
/// `super` property access is legal.
pub const CONTEXT_SUPER: u32 = 1 << 23;
/// The enclosing class body has seen a `constructor` method.
pub const CONTEXT_HAS_CONSTRUCTOR: u32 = 1 << 24;
/// Annex B web-compat productions are legal (sloppy mode).
pub const CONTEXT_ANNEX_B: u32 = 1 << 25;
/// Directly inside an `if` clause (gates Annex B function statements).
pub const CONTEXT_IF_CLAUSE: u32 = 1 << 26;

// =============================================================================
// Flag bits (mutable, sticky across tokens)
// =============================================================================

pub const FLAG_NONE: u32 = 0;
/// The trivia before the current token crossed a line terminator.
pub const FLAG_LINE_TERMINATOR: u32 = 1;
/// Currently inside a function body.
pub const FLAG_IN_FUNCTION_BODY: u32 = 1 << 1;
/// `super` property access is allowed here.
pub const FLAG_ALLOW_SUPER: u32 = 1 << 2;
/// `super(...)` calls are allowed here (derived class constructor).
pub const FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER: u32 = 1 << 3;
/// A rest element was seen in the current cover group.
pub const FLAG_HAS_REST: u32 = 1 << 4;
/// A member expression was seen in the current cover group.
pub const FLAG_HAS_MEMBER_EXPRESSION: u32 = 1 << 5;
/// A reserved word was used where a future pattern may forbid it.
pub const FLAG_HAS_RESERVED_WORD: u32 = 1 << 6;
/// `eval`/`arguments` appeared in a parameter list.
pub const FLAG_HAS_EVAL_ARG_IN_PARAM: u32 = 1 << 7;
/// The parameter list is non-simple (default/rest/destructuring).
pub const FLAG_NON_SIMPLE_PARAMETER: u32 = 1 << 8;
/// Parsing a call argument list.
pub const FLAG_ARGUMENT_LIST: u32 = 1 << 9;
/// An async arrow head is being covered.
pub const FLAG_ASYNC_ARROW: u32 = 1 << 10;
/// An arrow head is being covered.
pub const FLAG_ARROW: u32 = 1 << 11;
/// `break` binds to an enclosing statement.
pub const FLAG_BREAK: u32 = 1 << 12;
/// `continue` binds to an enclosing iteration statement.
pub const FLAG_CONTINUE: u32 = 1 << 13;
/// Inside a switch block.
pub const FLAG_SWITCH: u32 = 1 << 14;
/// A `__proto__` property was seen in the current object literal.
pub const FLAG_HAS_PROTOTYPE: u32 = 1 << 15;
/// The expression just parsed was itself wrapped in parentheses.
pub const FLAG_PARENTHESIZED: u32 = 1 << 16;

// Parser options, folded into the same word.
pub const FLAG_OPTIONS_JSX: u32 = 1 << 20;
pub const FLAG_OPTIONS_NEXT: u32 = 1 << 21;
pub const FLAG_OPTIONS_LOC: u32 = 1 << 22;
pub const FLAG_OPTIONS_RANGES: u32 = 1 << 23;
pub const FLAG_OPTIONS_RAW: u32 = 1 << 24;
pub const FLAG_OPTIONS_ON_COMMENT: u32 = 1 << 25;
pub const FLAG_OPTIONS_V8: u32 = 1 << 26;
