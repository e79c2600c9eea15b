//! Function and class declarations: formal parameters, bodies with the
//! directive prologue and its retroactive strict-mode validation, method
//! definitions, and class bodies.

use rustc_hash::FxHashSet;

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ParseError};
use crate::scanner::Token;

use super::state::{Marker, ParserState};
use super::state_patterns::BindingHint;

/// The context a function body starts from: most caller bits reset, only
/// strictness and module-ness survive.
fn function_child_context(context: u32, is_async: bool, is_generator: bool) -> u32 {
    let mut child = context & (CONTEXT_STRICT | CONTEXT_MODULE | CONTEXT_METHOD);
    child |= CONTEXT_ALLOW_IN;
    if is_generator {
        child |= CONTEXT_ALLOW_YIELD;
    }
    if is_async {
        child |= CONTEXT_ALLOW_AWAIT | CONTEXT_IN_ASYNC_FUNCTION_BODY;
    }
    child
}

impl ParserState<'_> {
    // =========================================================================
    // Function declarations and expressions
    // =========================================================================

    pub(crate) fn parse_function_declaration(
        &mut self,
        context: u32,
        is_async: bool,
    ) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.parse_function_declaration_rest(context, marker, is_async)
    }

    pub(crate) fn parse_async_function_declaration(
        &mut self,
        context: u32,
    ) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // async
        self.parse_function_declaration_rest(context, marker, true)
    }

    fn parse_function_declaration_rest(
        &mut self,
        context: u32,
        marker: Marker,
        is_async: bool,
    ) -> Result<Statement, ParseError> {
        self.next_token(context)?; // function
        let is_generator = self.consume(context, Token::Multiply)?;
        if is_async && is_generator && self.flags & FLAG_OPTIONS_NEXT == 0 {
            return Err(self.error(ErrorKind::NotAnAsyncGenerator));
        }

        let id = if self.token.is_identifier() || self.token.is_future_reserved() {
            let id = self.parse_binding_identifier(context, BindingHint::None)?;
            // Sloppy-mode function declarations behave like vars; strict and
            // block-level ones are lexical.
            if context & CONTEXT_STRICT != 0 {
                self.add_block_name(&id.name)?;
            } else {
                self.add_var_name(&id.name);
            }
            Some(id)
        } else if context & CONTEXT_OPTIONAL_IDENTIFIER != 0 {
            None
        } else {
            return Err(self.error(ErrorKind::UnnamedFunctionDecl));
        };

        let child = function_child_context(context, is_async, is_generator);
        let (params, body) = self.parse_function_params_and_body(child, false, false)?;
        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            id,
            params,
            body,
            is_async,
            generator: is_generator,
            expression: false,
            span: self.finish(marker),
        }))
    }

    /// A function expression; the current token is `function`, `marker` may
    /// reach back to a consumed `async`.
    pub(crate) fn parse_function_expression(
        &mut self,
        context: u32,
        marker: Marker,
        is_async: bool,
    ) -> Result<Expression, ParseError> {
        self.next_token(context)?; // function
        let is_generator = self.consume(context, Token::Multiply)?;
        if is_async && is_generator && self.flags & FLAG_OPTIONS_NEXT == 0 {
            return Err(self.error(ErrorKind::NotAnAsyncGenerator));
        }
        let child = function_child_context(context, is_async, is_generator);

        // The name of a function expression binds inside the function itself
        // and is validated against the function's own context.
        let id = if self.token.is_identifier() || self.token.is_future_reserved() {
            Some(self.parse_binding_identifier(child, BindingHint::None)?)
        } else {
            None
        };

        let (params, body) = self.parse_function_params_and_body(child, false, false)?;
        Ok(Expression::Function(FunctionExpression {
            id,
            params,
            body,
            is_async,
            generator: is_generator,
            expression: false,
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Shared function plumbing
    // =========================================================================

    /// Parse `( params ) { body }` under fresh scopes, with the sticky flags
    /// saved around the function boundary.
    pub(crate) fn parse_function_params_and_body(
        &mut self,
        child: u32,
        allow_super: bool,
        allow_super_call: bool,
    ) -> Result<(Vec<Pattern>, BlockStatement), ParseError> {
        let saved_scopes = self.enter_function_scope();
        let saved_flags = self.flags;
        self.flags &= !(FLAG_BREAK
            | FLAG_CONTINUE
            | FLAG_SWITCH
            | FLAG_NON_SIMPLE_PARAMETER
            | FLAG_HAS_EVAL_ARG_IN_PARAM
            | FLAG_HAS_RESERVED_WORD
            | FLAG_ALLOW_SUPER
            | FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER
            | FLAG_ARGUMENT_LIST);
        self.flags |= FLAG_IN_FUNCTION_BODY;
        if allow_super {
            self.flags |= FLAG_ALLOW_SUPER;
        }
        if allow_super_call {
            self.flags |= FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER;
        }

        let params = self.parse_formal_parameters(child)?;
        let body = self.parse_function_body(child)?;

        self.exit_function_scope(saved_scopes);
        self.flags =
            saved_flags & !FLAG_LINE_TERMINATOR | (self.flags & FLAG_LINE_TERMINATOR);
        Ok((params, body))
    }

    /// `( FormalParameterList )`. Defaults, destructuring, and rest mark the
    /// list non-simple.
    pub(crate) fn parse_formal_parameters(
        &mut self,
        context: u32,
    ) -> Result<Vec<Pattern>, ParseError> {
        self.expect(context, Token::LeftParen)?;
        let binding_context = context | CONTEXT_IN_BINDING;
        let mut params = Vec::new();

        while self.token != Token::RightParen {
            if self.token == Token::Ellipsis {
                self.flags |= FLAG_NON_SIMPLE_PARAMETER;
                let rest_marker = self.start_marker();
                self.next_token(binding_context)?;
                let argument =
                    self.parse_binding_identifier_or_pattern(binding_context, BindingHint::Param)?;
                params.push(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_marker),
                })));
                if self.token == Token::Comma {
                    return Err(self.error(ErrorKind::ParamAfterRest));
                }
                break;
            }
            let param = self.parse_binding_element(binding_context, BindingHint::Param)?;
            if !matches!(param, Pattern::Identifier(_)) {
                self.flags |= FLAG_NON_SIMPLE_PARAMETER;
            }
            params.push(param);
            if !self.consume(binding_context, Token::Comma)? {
                break;
            }
        }
        self.expect(context, Token::RightParen)?;

        // A list that turned non-simple after a duplicate was recorded still
        // rejects the duplicate.
        if self.flags & FLAG_NON_SIMPLE_PARAMETER != 0 {
            let mut names = Vec::new();
            for param in &params {
                Self::collect_pattern_names(param, &mut names);
            }
            let mut seen: FxHashSet<&str> = FxHashSet::default();
            for name in &names {
                if !seen.insert(name.as_str()) {
                    return Err(self.error(ErrorKind::DuplicateParameter));
                }
            }
        }
        Ok(params)
    }

    /// `{ FunctionBody }`. A `"use strict"` directive promotes the body and
    /// retro-validates the parameter list.
    pub(crate) fn parse_function_body(
        &mut self,
        context: u32,
    ) -> Result<BlockStatement, ParseError> {
        let marker = self.start_marker();
        self.expect(context, Token::LeftBrace)?;
        let mut context = context;
        let mut body = Vec::new();

        while self.token == Token::StringLiteral {
            let (statement, directive) = self.parse_directive(context)?;
            body.push(statement);
            match directive {
                Some(raw) => {
                    if raw == "use strict" && context & CONTEXT_STRICT == 0 {
                        if self.flags & FLAG_NON_SIMPLE_PARAMETER != 0 {
                            return Err(self.error(ErrorKind::IllegalUseStrict));
                        }
                        context |= CONTEXT_STRICT;
                        self.activate_strict_directive()?;
                        if self.flags & FLAG_HAS_EVAL_ARG_IN_PARAM != 0 {
                            return Err(self.error(ErrorKind::StrictParamName));
                        }
                        if self.flags & FLAG_HAS_RESERVED_WORD != 0 {
                            return Err(self.error(ErrorKind::UnexpectedStrictReserved));
                        }
                    }
                }
                None => break,
            }
        }
        self.directive_octal = None;

        while self.token != Token::RightBrace {
            body.push(self.parse_statement_list_item(context)?);
        }
        self.expect(context, Token::RightBrace)?;
        Ok(BlockStatement {
            body,
            span: self.finish(marker),
        })
    }

    /// A method body: `( params ) { body }` packaged as a function
    /// expression, with accessor arity validation.
    pub(crate) fn parse_method_function(
        &mut self,
        context: u32,
        is_async: bool,
        is_generator: bool,
        kind: MethodKind,
        allow_super_call: bool,
    ) -> Result<FunctionExpression, ParseError> {
        let marker = self.start_marker();
        if is_async && is_generator && self.flags & FLAG_OPTIONS_NEXT == 0 {
            return Err(self.error(ErrorKind::NotAnAsyncGenerator));
        }
        let child = function_child_context(context | CONTEXT_METHOD, is_async, is_generator);

        let saved_scopes = self.enter_function_scope();
        let saved_flags = self.flags;
        self.flags &= !(FLAG_BREAK
            | FLAG_CONTINUE
            | FLAG_SWITCH
            | FLAG_NON_SIMPLE_PARAMETER
            | FLAG_HAS_EVAL_ARG_IN_PARAM
            | FLAG_HAS_RESERVED_WORD
            | FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER
            | FLAG_ARGUMENT_LIST);
        self.flags |= FLAG_IN_FUNCTION_BODY | FLAG_ALLOW_SUPER;
        if allow_super_call {
            self.flags |= FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER;
        }

        let params = self.parse_formal_parameters(child)?;
        match kind {
            MethodKind::Get => {
                if !params.is_empty() {
                    return Err(self.error(ErrorKind::BadGetterArity));
                }
            }
            MethodKind::Set => {
                if params.len() != 1 {
                    return Err(self.error(ErrorKind::BadSetterArity));
                }
                if matches!(params.first(), Some(Pattern::Rest(_))) {
                    return Err(self.error(ErrorKind::BadSetterRestParameter));
                }
            }
            _ => {}
        }
        let body = self.parse_function_body(child)?;

        self.exit_function_scope(saved_scopes);
        self.flags =
            saved_flags & !FLAG_LINE_TERMINATOR | (self.flags & FLAG_LINE_TERMINATOR);

        Ok(FunctionExpression {
            id: None,
            params,
            body,
            is_async,
            generator: is_generator,
            expression: false,
            span: self.finish(marker),
        })
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(crate) fn parse_class_declaration(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        // Class bodies are always strict.
        let strict = context | CONTEXT_STRICT;
        self.next_token(strict)?; // class

        let id = if self.token.is_identifier() || self.token.is_future_reserved() {
            let id = self.parse_binding_identifier(strict, BindingHint::None)?;
            self.add_block_name(&id.name)?;
            Some(id)
        } else if context & CONTEXT_OPTIONAL_IDENTIFIER != 0 {
            None
        } else {
            return Err(self.error(ErrorKind::UnnamedClassDecl));
        };

        let (super_class, body) = self.parse_class_tail(strict)?;
        Ok(Statement::ClassDeclaration(ClassDeclaration {
            id,
            super_class,
            body,
            span: self.finish(marker),
        }))
    }

    pub(crate) fn parse_class_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let strict = context | CONTEXT_STRICT;
        self.next_token(strict)?; // class

        let id = if self.token.is_identifier() || self.token.is_future_reserved() {
            Some(self.parse_binding_identifier(strict, BindingHint::None)?)
        } else {
            None
        };

        let (super_class, body) = self.parse_class_tail(strict)?;
        Ok(Expression::Class(ClassExpression {
            id,
            super_class,
            body,
            span: self.finish(marker),
        }))
    }

    fn parse_class_tail(
        &mut self,
        context: u32,
    ) -> Result<(Option<Box<Expression>>, ClassBody), ParseError> {
        let super_class = if self.consume(context, Token::ExtendsKeyword)? {
            Some(Box::new(self.parse_left_hand_side_expression(context)?))
        } else {
            None
        };
        let body = self.parse_class_body(context, super_class.is_some())?;
        Ok((super_class, body))
    }

    fn parse_class_body(
        &mut self,
        context: u32,
        has_heritage: bool,
    ) -> Result<ClassBody, ParseError> {
        let marker = self.start_marker();
        self.expect(context, Token::LeftBrace)?;
        let mut body = Vec::new();
        let mut has_constructor = false;
        while self.token != Token::RightBrace {
            if self.consume(context, Token::Semicolon)? {
                continue;
            }
            body.push(self.parse_class_element(context, has_heritage, &mut has_constructor)?);
        }
        self.expect(context, Token::RightBrace)?;
        Ok(ClassBody {
            body,
            span: self.finish(marker),
        })
    }

    fn parse_class_element(
        &mut self,
        context: u32,
        has_heritage: bool,
        has_constructor: &mut bool,
    ) -> Result<MethodDefinition, ParseError> {
        let marker = self.start_marker();

        let mut is_static = false;
        if self.token == Token::StaticKeyword {
            let snapshot = self.save_state();
            self.next_token(context)?;
            if self.token_starts_property_key() {
                is_static = true;
            } else {
                self.restore_state(snapshot);
            }
        }

        let mut is_async = false;
        let mut is_generator = false;
        let mut accessor: Option<MethodKind> = None;

        if self.token == Token::AsyncKeyword {
            let snapshot = self.save_state();
            self.next_token(context)?;
            if self.flags & FLAG_LINE_TERMINATOR == 0 && self.token_starts_property_key() {
                is_async = true;
                if self.token == Token::Multiply {
                    if self.flags & FLAG_OPTIONS_NEXT == 0 {
                        return Err(self.error(ErrorKind::NotAnAsyncGenerator));
                    }
                    is_generator = true;
                    self.next_token(context)?;
                }
            } else {
                self.restore_state(snapshot);
            }
        } else if self.token == Token::Multiply {
            is_generator = true;
            self.next_token(context)?;
        }

        if !is_async
            && !is_generator
            && matches!(self.token, Token::GetKeyword | Token::SetKeyword)
        {
            let which = self.token;
            let snapshot = self.save_state();
            self.next_token(context)?;
            if self.token_starts_property_key() && self.token != Token::Multiply {
                accessor = Some(if which == Token::GetKeyword {
                    MethodKind::Get
                } else {
                    MethodKind::Set
                });
            } else {
                self.restore_state(snapshot);
            }
        }

        let (key, computed, name) = self.parse_property_key(context)?;

        let is_constructor = !is_static && !computed && name.as_deref() == Some("constructor");
        if is_constructor {
            if is_async || is_generator || accessor.is_some() {
                return Err(self.error(ErrorKind::ConstructorSpecialMethod));
            }
            if *has_constructor {
                return Err(self.error(ErrorKind::DuplicateConstructor));
            }
            *has_constructor = true;
        }
        if is_static && !computed && name.as_deref() == Some("prototype") {
            return Err(self.error(ErrorKind::StaticPrototype));
        }

        let kind = if is_constructor {
            MethodKind::Constructor
        } else {
            accessor.unwrap_or(MethodKind::Method)
        };
        let element_context = if is_constructor {
            context | CONTEXT_HAS_CONSTRUCTOR
        } else {
            context
        };
        let value = self.parse_method_function(
            element_context,
            is_async,
            is_generator,
            kind,
            is_constructor && has_heritage,
        )?;

        Ok(MethodDefinition {
            key,
            value,
            kind,
            computed,
            is_static,
            span: self.finish(marker),
        })
    }
}
