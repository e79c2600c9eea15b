//! Statement parsing: the per-token dispatch, iteration statements, labels,
//! and variable declarations.

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ParseError};
use crate::scanner::Token;

use super::scope::LabelKind;
use super::state::ParserState;
use super::state_patterns::BindingHint;

impl ParserState<'_> {
    // =========================================================================
    // Dispatch
    // =========================================================================

    /// StatementListItem: declarations plus statements.
    pub(crate) fn parse_statement_list_item(
        &mut self,
        context: u32,
    ) -> Result<Statement, ParseError> {
        match self.token {
            Token::FunctionKeyword => self.parse_function_declaration(context, false),
            Token::ClassKeyword => self.parse_class_declaration(context),
            Token::ConstKeyword => self.parse_variable_statement(context, VariableKind::Const),
            Token::LetKeyword => {
                if self.let_starts_declaration(context)? {
                    self.parse_variable_statement(context, VariableKind::Let)
                } else {
                    self.parse_statement(context)
                }
            }
            Token::AsyncKeyword => {
                if self.async_starts_function(context)? {
                    self.parse_async_function_declaration(context)
                } else {
                    self.parse_statement(context)
                }
            }
            Token::ImportKeyword => {
                if self.flags & FLAG_OPTIONS_NEXT != 0 && self.import_starts_call(context)? {
                    self.parse_statement(context)
                } else {
                    Err(self.error(ErrorKind::ImportDeclAtTopLevel))
                }
            }
            Token::ExportKeyword => Err(self.error(ErrorKind::ExportDeclAtTopLevel)),
            _ => self.parse_statement(context),
        }
    }

    /// Statement: the single-statement grammar; declarations are rejected
    /// here with their specific errors.
    pub(crate) fn parse_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        match self.token {
            Token::LeftBrace => self.parse_block_statement(context),
            Token::VarKeyword => self.parse_variable_statement(context, VariableKind::Var),
            Token::Semicolon => self.parse_empty_statement(context),
            Token::FunctionKeyword => Err(self.error(if context & CONTEXT_STRICT != 0 {
                ErrorKind::StrictFunction
            } else {
                ErrorKind::ForbiddenAsStatement("function declaration")
            })),
            Token::ClassKeyword => {
                Err(self.error(ErrorKind::ForbiddenAsStatement("class declaration")))
            }
            Token::IfKeyword => self.parse_if_statement(context),
            Token::DoKeyword => self.parse_do_while_statement(context),
            Token::WhileKeyword => self.parse_while_statement(context),
            Token::ForKeyword => self.parse_for_statement(context),
            Token::ContinueKeyword => self.parse_continue_statement(context),
            Token::BreakKeyword => self.parse_break_statement(context),
            Token::ReturnKeyword => self.parse_return_statement(context),
            Token::WithKeyword => self.parse_with_statement(context),
            Token::SwitchKeyword => self.parse_switch_statement(context),
            Token::ThrowKeyword => self.parse_throw_statement(context),
            Token::TryKeyword => self.parse_try_statement(context),
            Token::DebuggerKeyword => self.parse_debugger_statement(context),
            Token::AsyncKeyword => {
                if context & CONTEXT_STATEMENT != 0 && self.async_starts_function(context)? {
                    return Err(self.error(ErrorKind::AsyncFunctionInSingleStatementContext));
                }
                self.parse_expression_or_labeled_statement(context)
            }
            _ => self.parse_expression_or_labeled_statement(context),
        }
    }

    // =========================================================================
    // Simple statements
    // =========================================================================

    fn parse_empty_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        Ok(Statement::Empty(EmptyStatement {
            span: self.finish(marker),
        }))
    }

    pub(crate) fn parse_block_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        self.parse_block_body(context).map(Statement::Block)
    }

    /// `{ ... }` with a fresh lexical scope layered above the current one.
    pub(crate) fn parse_block_body(&mut self, context: u32) -> Result<BlockStatement, ParseError> {
        let marker = self.start_marker();
        self.expect(context, Token::LeftBrace)?;
        self.enter_block_scope();
        let mut body = Vec::new();
        while self.token != Token::RightBrace {
            body.push(self.parse_statement_list_item(context)?);
        }
        self.exit_block_scope();
        self.expect(context, Token::RightBrace)?;
        Ok(BlockStatement {
            body,
            span: self.finish(marker),
        })
    }

    /// Parse one statement of the directive prologue: a full expression
    /// statement, plus the raw directive text (without quotes) when the
    /// statement turned out to be a lone string literal.
    pub(crate) fn parse_directive(
        &mut self,
        context: u32,
    ) -> Result<(Statement, Option<String>), ParseError> {
        let marker = self.start_marker();
        let token_end = self.scanner.index;
        let raw_inner = self
            .scanner
            .raw_slice(self.scanner.start_index + 1, token_end - 1);
        let octal = self.scanner.octal_location;

        let expr = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        let lone_literal = self.last_index == token_end
            && matches!(
                expr,
                Expression::Literal(Literal {
                    value: LiteralValue::String(_),
                    ..
                })
            );
        self.consume_semicolon(context)?;
        let statement = Statement::Expression(ExpressionStatement {
            expression: Box::new(expr),
            span: self.finish(marker),
        });
        if lone_literal {
            if let Some(location) = octal {
                self.directive_octal.get_or_insert(location);
            }
            Ok((statement, Some(raw_inner)))
        } else {
            Ok((statement, None))
        }
    }

    fn parse_debugger_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        self.consume_semicolon(context)?;
        Ok(Statement::Debugger(DebuggerStatement {
            span: self.finish(marker),
        }))
    }

    /// An expression statement, or a labeled statement when a lone
    /// identifier turns out to be followed by a colon.
    fn parse_expression_or_labeled_statement(
        &mut self,
        context: u32,
    ) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        let expr = self.parse_expression(context | CONTEXT_ALLOW_IN)?;

        let expr = if self.token == Token::Colon {
            match expr {
                Expression::Identifier(label) => {
                    self.next_token(context)?;
                    let kind = match self.token {
                        Token::ForKeyword | Token::WhileKeyword | Token::DoKeyword => {
                            LabelKind::Iteration
                        }
                        _ => LabelKind::Other,
                    };
                    self.add_label(&label.name, kind)?;
                    // Annex B: a labelled function declaration in sloppy mode.
                    let body = if self.token == Token::FunctionKeyword
                        && context & CONTEXT_STRICT == 0
                    {
                        self.parse_function_declaration(context | CONTEXT_ANNEX_B, false)?
                    } else {
                        self.parse_statement(context | CONTEXT_STATEMENT)?
                    };
                    self.remove_label(&label.name);
                    return Ok(Statement::Labeled(LabeledStatement {
                        label,
                        body: Box::new(body),
                        span: self.finish(marker),
                    }));
                }
                other => other,
            }
        } else {
            expr
        };

        self.consume_semicolon(context)?;
        Ok(Statement::Expression(ExpressionStatement {
            expression: Box::new(expr),
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_if_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        self.expect(context, Token::LeftParen)?;
        let test = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::RightParen)?;
        let consequent = self.parse_if_clause(context)?;
        let alternate = if self.consume(context, Token::ElseKeyword)? {
            Some(Box::new(self.parse_if_clause(context)?))
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
            span: self.finish(marker),
        }))
    }

    /// The body of an `if`/`else` clause. Annex B admits a bare function
    /// declaration here in sloppy mode.
    fn parse_if_clause(&mut self, context: u32) -> Result<Statement, ParseError> {
        if self.token == Token::FunctionKeyword && context & CONTEXT_STRICT == 0 {
            return self.parse_function_declaration(
                context | CONTEXT_ANNEX_B | CONTEXT_IF_CLAUSE,
                false,
            );
        }
        self.parse_statement(context | CONTEXT_STATEMENT | CONTEXT_IF_CLAUSE)
    }

    /// Run an iteration body with `break`/`continue` bound to it.
    fn parse_iteration_body(&mut self, context: u32) -> Result<Statement, ParseError> {
        let saved = self.flags & (FLAG_BREAK | FLAG_CONTINUE);
        self.flags |= FLAG_BREAK | FLAG_CONTINUE;
        let body = self.parse_statement(context | CONTEXT_STATEMENT);
        self.flags = self.flags & !(FLAG_BREAK | FLAG_CONTINUE) | saved;
        body
    }

    fn parse_do_while_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        let body = self.parse_iteration_body(context)?;
        self.expect(context, Token::WhileKeyword)?;
        self.expect(context, Token::LeftParen)?;
        let test = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::RightParen)?;
        // The trailing semicolon of do-while is optional.
        self.consume(context, Token::Semicolon)?;
        Ok(Statement::DoWhile(DoWhileStatement {
            body: Box::new(body),
            test: Box::new(test),
            span: self.finish(marker),
        }))
    }

    fn parse_while_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        self.expect(context, Token::LeftParen)?;
        let test = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::RightParen)?;
        let body = self.parse_iteration_body(context)?;
        Ok(Statement::While(WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
            span: self.finish(marker),
        }))
    }

    fn parse_continue_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        let label = if self.flags & FLAG_LINE_TERMINATOR == 0
            && self.token_is_identifier_ref(context)
        {
            let id = self.parse_identifier_reference(context)?;
            match self.label_kind(&id.name) {
                Some(LabelKind::Iteration) => {}
                Some(LabelKind::Other) => return Err(self.error(ErrorKind::IllegalContinue)),
                None => return Err(self.error(ErrorKind::UnknownLabel(id.name.clone()))),
            }
            Some(id)
        } else {
            if self.flags & FLAG_CONTINUE == 0 {
                return Err(self.error(ErrorKind::IllegalContinue));
            }
            None
        };
        self.consume_semicolon(context)?;
        Ok(Statement::Continue(ContinueStatement {
            label,
            span: self.finish(marker),
        }))
    }

    fn parse_break_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        let label = if self.flags & FLAG_LINE_TERMINATOR == 0
            && self.token_is_identifier_ref(context)
        {
            let id = self.parse_identifier_reference(context)?;
            if self.label_kind(&id.name).is_none() {
                return Err(self.error(ErrorKind::UnknownLabel(id.name.clone())));
            }
            Some(id)
        } else {
            if self.flags & (FLAG_BREAK | FLAG_SWITCH) == 0 {
                return Err(self.error(ErrorKind::IllegalBreak));
            }
            None
        };
        self.consume_semicolon(context)?;
        Ok(Statement::Break(BreakStatement {
            label,
            span: self.finish(marker),
        }))
    }

    fn parse_return_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        if self.flags & FLAG_IN_FUNCTION_BODY == 0 {
            return Err(self.error(ErrorKind::IllegalReturn));
        }
        let marker = self.start_marker();
        self.next_token(context)?;
        let argument = if self.flags & FLAG_LINE_TERMINATOR != 0
            || matches!(
                self.token,
                Token::Semicolon | Token::RightBrace | Token::EndOfSource
            ) {
            None
        } else {
            Some(Box::new(self.parse_expression(context | CONTEXT_ALLOW_IN)?))
        };
        self.consume_semicolon(context)?;
        Ok(Statement::Return(ReturnStatement {
            argument,
            span: self.finish(marker),
        }))
    }

    fn parse_with_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        if context & CONTEXT_STRICT != 0 {
            return Err(self.error(ErrorKind::StrictModeWith));
        }
        let marker = self.start_marker();
        self.next_token(context)?;
        self.expect(context, Token::LeftParen)?;
        let object = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::RightParen)?;
        let body = self.parse_statement(context | CONTEXT_STATEMENT)?;
        Ok(Statement::With(WithStatement {
            object: Box::new(object),
            body: Box::new(body),
            span: self.finish(marker),
        }))
    }

    fn parse_switch_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        self.expect(context, Token::LeftParen)?;
        let discriminant = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::RightParen)?;
        self.expect(context, Token::LeftBrace)?;

        self.enter_block_scope();
        let saved = self.flags & FLAG_SWITCH;
        self.flags |= FLAG_SWITCH;

        let mut cases = Vec::new();
        let mut seen_default = false;
        while self.token != Token::RightBrace {
            let case_marker = self.start_marker();
            let test = if self.consume(context, Token::CaseKeyword)? {
                Some(Box::new(self.parse_expression(context | CONTEXT_ALLOW_IN)?))
            } else {
                self.expect(context, Token::DefaultKeyword)?;
                if seen_default {
                    return Err(self.error(ErrorKind::MultipleDefaultsInSwitch));
                }
                seen_default = true;
                None
            };
            self.expect(context, Token::Colon)?;
            let mut consequent = Vec::new();
            while !matches!(
                self.token,
                Token::CaseKeyword | Token::DefaultKeyword | Token::RightBrace
            ) {
                consequent.push(self.parse_statement_list_item(context)?);
            }
            cases.push(SwitchCase {
                test,
                consequent,
                span: self.finish(case_marker),
            });
        }

        self.flags = self.flags & !FLAG_SWITCH | saved;
        self.exit_block_scope();
        self.expect(context, Token::RightBrace)?;
        Ok(Statement::Switch(SwitchStatement {
            discriminant: Box::new(discriminant),
            cases,
            span: self.finish(marker),
        }))
    }

    fn parse_throw_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        if self.flags & FLAG_LINE_TERMINATOR != 0 {
            return Err(self.error(ErrorKind::NewlineAfterThrow));
        }
        let argument = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
        self.consume_semicolon(context)?;
        Ok(Statement::Throw(ThrowStatement {
            argument: Box::new(argument),
            span: self.finish(marker),
        }))
    }

    fn parse_try_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        let block = self.parse_block_body(context)?;

        let handler = if self.token == Token::CatchKeyword {
            Some(self.parse_catch_clause(context)?)
        } else {
            None
        };
        let finalizer = if self.consume(context, Token::FinallyKeyword)? {
            Some(self.parse_block_body(context)?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.error(ErrorKind::NoCatchOrFinally));
        }
        Ok(Statement::Try(TryStatement {
            block,
            handler,
            finalizer,
            span: self.finish(marker),
        }))
    }

    fn parse_catch_clause(&mut self, context: u32) -> Result<CatchClause, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // catch
        self.enter_block_scope();
        let param = if self.token == Token::LeftParen {
            self.next_token(context)?;
            let pattern = self.parse_binding_identifier_or_pattern(
                context | CONTEXT_IN_BINDING,
                BindingHint::CatchParam,
            )?;
            self.expect(context, Token::RightParen)?;
            Some(pattern)
        } else if self.flags & FLAG_OPTIONS_NEXT != 0 {
            // Optional catch binding.
            None
        } else {
            return Err(self.unexpected());
        };
        let body = self.parse_block_body(context)?;
        self.exit_block_scope();
        Ok(CatchClause {
            param,
            body,
            span: self.finish(marker),
        })
    }

    // =========================================================================
    // for / for-in / for-of
    // =========================================================================

    fn parse_for_statement(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // for

        let mut is_await = false;
        if self.token == Token::AwaitKeyword {
            if self.flags & FLAG_OPTIONS_NEXT == 0 {
                return Err(self.unexpected());
            }
            if context & CONTEXT_ALLOW_AWAIT == 0 {
                return Err(self.error(ErrorKind::NotAnAsyncGenerator));
            }
            self.next_token(context)?;
            is_await = true;
        }

        self.expect(context, Token::LeftParen)?;
        self.enter_block_scope();
        let head_context = (context | CONTEXT_IN_FOR_STATEMENT) & !CONTEXT_ALLOW_IN;

        enum Head {
            None,
            Declaration(VariableDeclaration),
            Expression(Expression),
        }

        let head = match self.token {
            Token::Semicolon => Head::None,
            Token::VarKeyword => Head::Declaration(
                self.parse_variable_declaration_only(head_context, VariableKind::Var)?,
            ),
            Token::ConstKeyword => Head::Declaration(
                self.parse_variable_declaration_only(head_context, VariableKind::Const)?,
            ),
            Token::LetKeyword => {
                if self.let_starts_declaration(head_context)? {
                    Head::Declaration(
                        self.parse_variable_declaration_only(head_context, VariableKind::Let)?,
                    )
                } else {
                    Head::Expression(self.parse_expression(head_context)?)
                }
            }
            _ => Head::Expression(self.parse_expression(head_context)?),
        };

        let statement = if matches!(self.token, Token::InKeyword | Token::OfKeyword) {
            let of = self.token == Token::OfKeyword;
            let loop_kind = if of { "of" } else { "in" };
            let left = match head {
                Head::Declaration(declaration) => {
                    if declaration.declarations.len() != 1 {
                        return Err(self.error(ErrorKind::ForInOfLoopInitializer(loop_kind)));
                    }
                    if declaration
                        .declarations
                        .first()
                        .is_some_and(|d| d.init.is_some())
                    {
                        return Err(self.error(ErrorKind::ForInOfLoopInitializer(loop_kind)));
                    }
                    ForTarget::Declaration(declaration)
                }
                Head::Expression(expr) => {
                    if !matches!(
                        expr,
                        Expression::Identifier(_)
                            | Expression::Member(_)
                            | Expression::Object(_)
                            | Expression::Array(_)
                    ) {
                        return Err(self.error(if of {
                            ErrorKind::InvalidLhsInForOf
                        } else {
                            ErrorKind::InvalidLhsInForIn
                        }));
                    }
                    let pattern = self.reinterpret_as_pattern(context, expr, false)?;
                    ForTarget::Pattern(Box::new(pattern))
                }
                Head::None => return Err(self.unexpected()),
            };
            self.next_token(context)?; // in / of
            let right = if of {
                self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?
            } else {
                self.parse_expression(context | CONTEXT_ALLOW_IN)?
            };
            self.expect(context, Token::RightParen)?;
            let body = self.parse_iteration_body(context)?;
            if of {
                Statement::ForOf(ForOfStatement {
                    left,
                    right: Box::new(right),
                    body: Box::new(body),
                    is_await,
                    span: self.finish(marker),
                })
            } else {
                if is_await {
                    return Err(self.error(ErrorKind::ForAwaitNotOf));
                }
                Statement::ForIn(ForInStatement {
                    left,
                    right: Box::new(right),
                    body: Box::new(body),
                    span: self.finish(marker),
                })
            }
        } else {
            if is_await {
                return Err(self.error(ErrorKind::ForAwaitNotOf));
            }
            let init = match head {
                Head::None => None,
                Head::Declaration(declaration) => {
                    self.check_for_head_initializers(&declaration)?;
                    Some(ForInit::Declaration(declaration))
                }
                Head::Expression(expr) => Some(ForInit::Expression(Box::new(expr))),
            };
            self.expect(context, Token::Semicolon)?;
            let test = if self.token == Token::Semicolon {
                None
            } else {
                Some(Box::new(self.parse_expression(context | CONTEXT_ALLOW_IN)?))
            };
            self.expect(context, Token::Semicolon)?;
            let update = if self.token == Token::RightParen {
                None
            } else {
                Some(Box::new(self.parse_expression(context | CONTEXT_ALLOW_IN)?))
            };
            self.expect(context, Token::RightParen)?;
            let body = self.parse_iteration_body(context)?;
            Statement::For(ForStatement {
                init,
                test,
                update,
                body: Box::new(body),
                span: self.finish(marker),
            })
        };

        self.exit_block_scope();
        Ok(statement)
    }

    /// Initializer rules deferred for a C-style head: `const` and pattern
    /// declarators still require one.
    fn check_for_head_initializers(
        &self,
        declaration: &VariableDeclaration,
    ) -> Result<(), ParseError> {
        for declarator in &declaration.declarations {
            if declarator.init.is_none() {
                if declaration.kind == VariableKind::Const {
                    return Err(self.error(ErrorKind::DeclarationMissingInitializer("const")));
                }
                if !matches!(declarator.id, Pattern::Identifier(_)) {
                    return Err(
                        self.error(ErrorKind::DeclarationMissingInitializer("destructuring"))
                    );
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Variable declarations
    // =========================================================================

    fn parse_variable_statement(
        &mut self,
        context: u32,
        kind: VariableKind,
    ) -> Result<Statement, ParseError> {
        let declaration = self.parse_variable_declaration_only(context, kind)?;
        self.consume_semicolon(context)?;
        Ok(Statement::VariableDeclaration(declaration))
    }

    /// The declaration without its terminating semicolon, shared with the
    /// `for` head and `export` declarations.
    pub(crate) fn parse_variable_declaration_only(
        &mut self,
        context: u32,
        kind: VariableKind,
    ) -> Result<VariableDeclaration, ParseError> {
        let marker = self.start_marker();
        let declaration_context = match kind {
            VariableKind::Var => context,
            VariableKind::Let => context | CONTEXT_LET | CONTEXT_LEXICAL,
            VariableKind::Const => {
                context | CONTEXT_CONST | CONTEXT_LEXICAL | CONTEXT_REQUIRE_INITIALIZER
            }
        };
        self.next_token(declaration_context)?; // var / let / const

        let mut declarations = vec![self.parse_variable_declarator(declaration_context, kind)?];
        while self.consume(declaration_context, Token::Comma)? {
            declarations.push(self.parse_variable_declarator(declaration_context, kind)?);
        }
        Ok(VariableDeclaration {
            declarations,
            kind,
            span: self.finish(marker),
        })
    }

    fn parse_variable_declarator(
        &mut self,
        context: u32,
        kind: VariableKind,
    ) -> Result<VariableDeclarator, ParseError> {
        let marker = self.start_marker();
        let hint = if kind == VariableKind::Var {
            BindingHint::Var
        } else {
            BindingHint::Lexical
        };
        let id = self.parse_binding_identifier_or_pattern(context | CONTEXT_IN_BINDING, hint)?;

        let init = if self.consume(context, Token::Assign)? {
            Some(Box::new(
                self.parse_assignment_expression(context & !CONTEXT_IN_BINDING)?,
            ))
        } else {
            // A for-in/of head may omit the initializer; C-style heads are
            // validated by the caller.
            let at_for_target = context & CONTEXT_IN_FOR_STATEMENT != 0
                && matches!(self.token, Token::InKeyword | Token::OfKeyword);
            if !at_for_target && context & CONTEXT_IN_FOR_STATEMENT == 0 {
                if context & CONTEXT_REQUIRE_INITIALIZER != 0 {
                    return Err(self.error(ErrorKind::DeclarationMissingInitializer("const")));
                }
                if !matches!(id, Pattern::Identifier(_)) {
                    return Err(
                        self.error(ErrorKind::DeclarationMissingInitializer("destructuring"))
                    );
                }
            }
            None
        };
        Ok(VariableDeclarator {
            id,
            init,
            span: self.finish(marker),
        })
    }
}
