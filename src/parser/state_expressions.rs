//! Expression parsing: the Pratt-style binary climb, unary/update/left-hand
//! side chains, primaries, and the cover grammars for parenthesized heads,
//! arrows, and async arrows.

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ErrorLocation, ParseError};
use crate::scanner::Token;

use super::state::{Marker, ParserState};

/// Map an assignment token onto its operator.
fn assignment_operator(token: Token) -> AssignmentOperator {
    match token {
        Token::AddAssign => AssignmentOperator::Add,
        Token::SubtractAssign => AssignmentOperator::Subtract,
        Token::MultiplyAssign => AssignmentOperator::Multiply,
        Token::DivideAssign => AssignmentOperator::Divide,
        Token::ModuloAssign => AssignmentOperator::Modulo,
        Token::ExponentiateAssign => AssignmentOperator::Exponentiate,
        Token::ShiftLeftAssign => AssignmentOperator::ShiftLeft,
        Token::ShiftRightAssign => AssignmentOperator::ShiftRight,
        Token::LogicalShiftRightAssign => AssignmentOperator::LogicalShiftRight,
        Token::BitwiseAndAssign => AssignmentOperator::BitwiseAnd,
        Token::BitwiseOrAssign => AssignmentOperator::BitwiseOr,
        Token::BitwiseXorAssign => AssignmentOperator::BitwiseXor,
        _ => AssignmentOperator::Assign,
    }
}

/// Map a binary token onto its operator.
fn binary_operator(token: Token) -> BinaryOperator {
    match token {
        Token::LooseEqual => BinaryOperator::LooseEqual,
        Token::LooseNotEqual => BinaryOperator::LooseNotEqual,
        Token::StrictEqual => BinaryOperator::StrictEqual,
        Token::StrictNotEqual => BinaryOperator::StrictNotEqual,
        Token::LessThan => BinaryOperator::LessThan,
        Token::LessThanOrEqual => BinaryOperator::LessThanOrEqual,
        Token::GreaterThan => BinaryOperator::GreaterThan,
        Token::GreaterThanOrEqual => BinaryOperator::GreaterThanOrEqual,
        Token::ShiftLeft => BinaryOperator::ShiftLeft,
        Token::ShiftRight => BinaryOperator::ShiftRight,
        Token::LogicalShiftRight => BinaryOperator::LogicalShiftRight,
        Token::Add => BinaryOperator::Add,
        Token::Subtract => BinaryOperator::Subtract,
        Token::Multiply => BinaryOperator::Multiply,
        Token::Divide => BinaryOperator::Divide,
        Token::Modulo => BinaryOperator::Modulo,
        Token::Exponentiate => BinaryOperator::Exponentiate,
        Token::BitwiseAnd => BinaryOperator::BitwiseAnd,
        Token::BitwiseOr => BinaryOperator::BitwiseOr,
        Token::BitwiseXor => BinaryOperator::BitwiseXor,
        Token::InKeyword => BinaryOperator::In,
        _ => BinaryOperator::Instanceof,
    }
}

/// What the `async`-headed cover parse produced.
enum AsyncHead {
    /// A finished async arrow function.
    Arrow(Expression),
    /// A plain `async(...)` call; the caller continues the binary climb.
    Expr(Expression),
    /// Plain identifier `async`; the caller re-parses normally.
    None,
}

impl ParserState<'_> {
    // =========================================================================
    // Sequences and assignment
    // =========================================================================

    /// Expression: assignment expressions separated by commas.
    pub(crate) fn parse_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let first = self.parse_assignment_expression(context)?;
        if self.token != Token::Comma {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.consume(context, Token::Comma)? {
            expressions.push(self.parse_assignment_expression(context)?);
        }
        Ok(Expression::Sequence(SequenceExpression {
            expressions,
            span: self.finish(marker),
        }))
    }

    /// AssignmentExpression, with cover-grammar resolution: a conditional is
    /// speculatively parsed, then reinterpreted as a pattern when an
    /// assignment operator (or arrow) appears.
    pub(crate) fn parse_assignment_expression(
        &mut self,
        context: u32,
    ) -> Result<Expression, ParseError> {
        if context & CONTEXT_ALLOW_YIELD != 0 && self.token == Token::YieldKeyword {
            return self.parse_yield_expression(context);
        }
        let marker = self.start_marker();

        if self.token == Token::AsyncKeyword {
            match self.parse_async_head(context, marker)? {
                AsyncHead::Arrow(arrow) => return Ok(arrow),
                AsyncHead::Expr(call) => {
                    let left = self.parse_binary_expression(context, 0, marker, Some(call))?;
                    let cond = self.parse_conditional_rest(context, marker, left)?;
                    return self.parse_assignment_rest(context, marker, cond);
                }
                AsyncHead::None => {}
            }
        }

        let expr = self.parse_conditional_expression(context)?;

        if self.token == Token::Arrow {
            return match expr {
                Expression::Identifier(id) => {
                    let param = self.identifier_to_param(context, id)?;
                    self.parse_arrow_tail(
                        context | CONTEXT_SIMPLE_ARROW,
                        marker,
                        vec![param],
                        false,
                    )
                }
                _ => Err(self.error_deferred(ErrorKind::InvalidArrowParams)),
            };
        }

        self.parse_assignment_rest(context, marker, expr)
    }

    /// The assignment-operator tail shared by the plain and async-headed
    /// paths.
    fn parse_assignment_rest(
        &mut self,
        context: u32,
        marker: Marker,
        expr: Expression,
    ) -> Result<Expression, ParseError> {
        if self.token.is_assign_op() {
            let op_token = self.token;
            if let Some(name) = expr.identifier_name() {
                if context & CONTEXT_STRICT != 0 && matches!(name, "eval" | "arguments") {
                    return Err(self.error(ErrorKind::StrictLhsAssignment));
                }
            }
            let left = if op_token == Token::Assign {
                self.reinterpret_as_pattern(context, expr, false)?
            } else {
                match expr {
                    Expression::Identifier(id) => Pattern::Identifier(id),
                    Expression::Member(member) => Pattern::Member(member),
                    _ => return Err(self.error_deferred(ErrorKind::InvalidLhsInAssignment)),
                }
            };
            self.next_token(context)?;
            let right = self.parse_assignment_expression(context)?;
            return Ok(Expression::Assignment(AssignmentExpression {
                operator: assignment_operator(op_token),
                left: Box::new(left),
                right: Box::new(right),
                span: self.finish(marker),
            }));
        }

        // A shorthand initializer that never became a pattern is fatal once
        // the covering production can no longer turn into one.
        if context & (CONTEXT_PARENTHESIS | CONTEXT_IN_FOR_STATEMENT) == 0
            && self.flags & FLAG_ARGUMENT_LIST == 0
        {
            if let Some(location) = self.shorthand_init_error.take() {
                return Err(self.error_at(ErrorKind::InvalidShorthandAssignment, location));
            }
        }
        Ok(expr)
    }

    fn identifier_to_param(
        &mut self,
        context: u32,
        id: Identifier,
    ) -> Result<Pattern, ParseError> {
        if context & CONTEXT_STRICT != 0 && matches!(id.name.as_str(), "eval" | "arguments") {
            return Err(self.error(ErrorKind::StrictParamName));
        }
        Ok(Pattern::Identifier(id))
    }

    // =========================================================================
    // yield / await
    // =========================================================================

    fn parse_yield_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        if context & CONTEXT_IN_BINDING != 0 {
            return Err(self.error(ErrorKind::YieldInParameter));
        }
        let marker = self.start_marker();
        self.next_token(context)?;

        let mut delegate = false;
        let argument = if self.flags & FLAG_LINE_TERMINATOR != 0 {
            None
        } else if self.token == Token::Multiply {
            delegate = true;
            self.next_token(context)?;
            Some(Box::new(self.parse_assignment_expression(context)?))
        } else if matches!(
            self.token,
            Token::RightBrace
                | Token::RightParen
                | Token::RightBracket
                | Token::Comma
                | Token::Semicolon
                | Token::EndOfSource
        ) {
            None
        } else {
            Some(Box::new(self.parse_assignment_expression(context)?))
        };

        Ok(Expression::Yield(YieldExpression {
            argument,
            delegate,
            span: self.finish(marker),
        }))
    }

    fn parse_await_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        if context & CONTEXT_IN_BINDING != 0 {
            return Err(self.error(ErrorKind::AwaitInParameter));
        }
        let marker = self.start_marker();
        self.next_token(context)?;
        let argument = self.parse_unary_expression(context)?;
        Ok(Expression::Await(AwaitExpression {
            argument: Box::new(argument),
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Conditional and binary
    // =========================================================================

    fn parse_conditional_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let test = self.parse_binary_expression(context, 0, marker, None)?;
        self.parse_conditional_rest(context, marker, test)
    }

    fn parse_conditional_rest(
        &mut self,
        context: u32,
        marker: Marker,
        test: Expression,
    ) -> Result<Expression, ParseError> {
        if !self.consume(context, Token::QuestionMark)? {
            return Ok(test);
        }
        let consequent = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
        self.expect(context, Token::Colon)?;
        let alternate = self.parse_assignment_expression(context)?;
        Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span: self.finish(marker),
        }))
    }

    /// The precedence climb over the token precedence bits. `seed` carries a
    /// pre-parsed left operand when the async cover already consumed one.
    fn parse_binary_expression(
        &mut self,
        context: u32,
        min_precedence: u32,
        marker: Marker,
        seed: Option<Expression>,
    ) -> Result<Expression, ParseError> {
        let mut left = match seed {
            Some(expr) => expr,
            None => self.parse_unary_expression(context)?,
        };

        loop {
            let token = self.token;
            let precedence = token.precedence();
            if precedence == 0 {
                break;
            }
            if token == Token::InKeyword && context & CONTEXT_ALLOW_IN == 0 {
                break;
            }
            // `**` is right-associative: it re-enters at its own precedence.
            let right_assoc = token == Token::Exponentiate;
            if precedence < min_precedence || (!right_assoc && precedence == min_precedence) {
                break;
            }
            self.next_token(context)?;
            let right_marker = self.start_marker();
            let right = self.parse_binary_expression(context, precedence, right_marker, None)?;
            left = match token {
                Token::LogicalAnd | Token::LogicalOr => Expression::Logical(LogicalExpression {
                    operator: if token == Token::LogicalAnd {
                        LogicalOperator::And
                    } else {
                        LogicalOperator::Or
                    },
                    left: Box::new(left),
                    right: Box::new(right),
                    span: self.finish(marker),
                }),
                _ => Expression::Binary(BinaryExpression {
                    operator: binary_operator(token),
                    left: Box::new(left),
                    right: Box::new(right),
                    span: self.finish(marker),
                }),
            };
        }
        Ok(left)
    }

    // =========================================================================
    // Unary and update
    // =========================================================================

    pub(crate) fn parse_unary_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();

        if self.token == Token::AwaitKeyword && context & CONTEXT_ALLOW_AWAIT != 0 {
            return self.parse_await_expression(context);
        }

        if self.token.is_update_op() {
            let operator = if self.token == Token::Increment {
                UpdateOperator::Increment
            } else {
                UpdateOperator::Decrement
            };
            self.next_token(context)?;
            let argument = self.parse_unary_expression(context)?;
            self.check_update_target(context, &argument, true)?;
            return Ok(Expression::Update(UpdateExpression {
                operator,
                argument: Box::new(argument),
                prefix: true,
                span: self.finish(marker),
            }));
        }

        if self.flags & FLAG_OPTIONS_NEXT != 0 && self.token == Token::ThrowKeyword {
            self.next_token(context)?;
            let argument = self.parse_unary_expression(context)?;
            return Ok(Expression::Throw(ThrowExpression {
                argument: Box::new(argument),
                span: self.finish(marker),
            }));
        }

        if self.token.is_unary_op() && self.token != Token::AwaitKeyword {
            let token = self.token;
            let operator = match token {
                Token::DeleteKeyword => UnaryOperator::Delete,
                Token::TypeofKeyword => UnaryOperator::Typeof,
                Token::VoidKeyword => UnaryOperator::Void,
                Token::Negate => UnaryOperator::Negate,
                Token::Complement => UnaryOperator::Complement,
                Token::Add => UnaryOperator::Plus,
                _ => UnaryOperator::Minus,
            };
            self.next_token(context)?;
            let argument = self.parse_unary_expression(context)?;
            if token == Token::DeleteKeyword
                && context & CONTEXT_STRICT != 0
                && matches!(argument, Expression::Identifier(_))
            {
                return Err(self.error_at(
                    ErrorKind::StrictDelete,
                    ErrorLocation {
                        index: marker.index,
                        line: marker.line,
                        column: marker.column,
                    },
                ));
            }
            let expr = Expression::Unary(UnaryExpression {
                operator,
                argument: Box::new(argument),
                prefix: true,
                span: self.finish(marker),
            });
            // An exponentiation may not take an unparenthesized unary
            // expression as its base.
            if self.token == Token::Exponentiate {
                return Err(self.error(ErrorKind::UnexpectedToken("**")));
            }
            return Ok(expr);
        }

        self.parse_update_expression(context)
    }

    fn parse_update_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        if self.flags & FLAG_OPTIONS_JSX != 0
            && self.token == Token::LessThan
            && context & CONTEXT_JSX_CHILD == 0
        {
            let element = self.parse_jsx_element(context)?;
            if self.token == Token::LessThan {
                return Err(self.error(ErrorKind::AdjacentJsxElements));
            }
            return Ok(Expression::JSXElement(Box::new(element)));
        }

        let marker = self.start_marker();
        let expr = self.parse_left_hand_side_expression(context)?;

        if self.token.is_update_op()
            && self.flags & FLAG_LINE_TERMINATOR == 0
            && self.flags & (FLAG_ARROW | FLAG_ASYNC_ARROW) == 0
        {
            self.check_update_target(context, &expr, false)?;
            let operator = if self.token == Token::Increment {
                UpdateOperator::Increment
            } else {
                UpdateOperator::Decrement
            };
            self.next_token(context)?;
            return Ok(Expression::Update(UpdateExpression {
                operator,
                argument: Box::new(expr),
                prefix: false,
                span: self.finish(marker),
            }));
        }
        Ok(expr)
    }

    fn check_update_target(
        &self,
        context: u32,
        target: &Expression,
        prefix: bool,
    ) -> Result<(), ParseError> {
        if let Some(name) = target.identifier_name() {
            if context & CONTEXT_STRICT != 0 && matches!(name, "eval" | "arguments") {
                return Err(self.error(if prefix {
                    ErrorKind::StrictLhsPrefix
                } else {
                    ErrorKind::StrictLhsPostfix
                }));
            }
        }
        if !target.is_simple_target() {
            return Err(self.error(if prefix {
                ErrorKind::InvalidLhsInPrefixOp
            } else {
                ErrorKind::InvalidLhsInPostfixOp
            }));
        }
        Ok(())
    }

    // =========================================================================
    // Left-hand side, member, and call chains
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression(
        &mut self,
        context: u32,
    ) -> Result<Expression, ParseError> {
        self.flags &= !(FLAG_ARROW | FLAG_ASYNC_ARROW);
        let marker = self.start_marker();
        let expr = match self.token {
            Token::NewKeyword => self.parse_new_expression(context)?,
            Token::SuperKeyword => self.parse_super_expression(context)?,
            Token::ImportKeyword => self.parse_import_callee(context)?,
            _ => self.parse_primary_expression(context)?,
        };
        if self.flags & (FLAG_ARROW | FLAG_ASYNC_ARROW) != 0 {
            return Ok(expr);
        }
        self.parse_member_or_call_tail(context, expr, marker, true)
    }

    /// Member accesses, calls, and tagged templates hanging off a base
    /// expression. Call arguments are excluded in `new` callee position.
    pub(crate) fn parse_member_or_call_tail(
        &mut self,
        context: u32,
        mut expr: Expression,
        marker: Marker,
        allow_call: bool,
    ) -> Result<Expression, ParseError> {
        loop {
            match self.token {
                Token::Period => {
                    self.next_token(context)?;
                    let property = self.parse_identifier_name(context)?;
                    expr = Expression::Member(MemberExpression {
                        object: Box::new(expr),
                        property: Box::new(Expression::Identifier(property)),
                        computed: false,
                        span: self.finish(marker),
                    });
                }
                Token::LeftBracket => {
                    self.next_token(context)?;
                    let property = self.parse_expression(context | CONTEXT_ALLOW_IN)?;
                    self.expect(context, Token::RightBracket)?;
                    expr = Expression::Member(MemberExpression {
                        object: Box::new(expr),
                        property: Box::new(property),
                        computed: true,
                        span: self.finish(marker),
                    });
                }
                Token::LeftParen if allow_call => {
                    let dynamic_import = matches!(expr, Expression::Import(_));
                    let arguments = self.parse_arguments(context)?;
                    if dynamic_import
                        && (arguments.len() != 1
                            || matches!(arguments.first(), Some(Expression::Spread(_))))
                    {
                        return Err(self.error(ErrorKind::BadImportCallArity));
                    }
                    if let Some(location) = self.shorthand_init_error.take() {
                        return Err(self.error_at(ErrorKind::InvalidShorthandAssignment, location));
                    }
                    expr = Expression::Call(CallExpression {
                        callee: Box::new(expr),
                        arguments,
                        span: self.finish(marker),
                    });
                }
                Token::TemplateCont | Token::TemplateTail => {
                    let quasi = self.parse_template_literal(context)?;
                    expr = Expression::TaggedTemplate(TaggedTemplateExpression {
                        tag: Box::new(expr),
                        quasi,
                        span: self.finish(marker),
                    });
                }
                _ => return Ok(expr),
            }
        }
    }

    pub(crate) fn parse_arguments(&mut self, context: u32) -> Result<Vec<Expression>, ParseError> {
        let saved_flags = self.flags & FLAG_ARGUMENT_LIST;
        self.flags |= FLAG_ARGUMENT_LIST;
        self.next_token(context)?; // (
        let mut arguments = Vec::new();
        while self.token != Token::RightParen {
            if self.token == Token::Ellipsis {
                let marker = self.start_marker();
                self.next_token(context)?;
                let argument = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
                arguments.push(Expression::Spread(SpreadElement {
                    argument: Box::new(argument),
                    span: self.finish(marker),
                }));
            } else {
                arguments.push(self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?);
            }
            if !self.consume(context, Token::Comma)? {
                break;
            }
        }
        self.expect(context, Token::RightParen)?;
        self.flags = self.flags & !FLAG_ARGUMENT_LIST | saved_flags;
        Ok(arguments)
    }

    fn parse_new_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // new

        if self.token == Token::Period {
            self.next_token(context)?;
            if self.token != Token::Identifier || self.token_value_string() != "target" {
                return Err(self.error(ErrorKind::InvalidMetaProperty));
            }
            if self.flags & FLAG_IN_FUNCTION_BODY == 0 && context & CONTEXT_IN_BINDING == 0 {
                return Err(self.error(ErrorKind::UnexpectedNewTarget));
            }
            let property = self.parse_identifier_name(context)?;
            let meta_span = self.finish(marker);
            return Ok(Expression::MetaProperty(MetaProperty {
                meta: Identifier {
                    name: "new".to_string(),
                    span: NodeSpan::default(),
                },
                property,
                span: meta_span,
            }));
        }

        if self.token == Token::ImportKeyword {
            return Err(self.error(ErrorKind::InvalidNewWithImport));
        }

        let callee_marker = self.start_marker();
        let callee = match self.token {
            Token::NewKeyword => self.parse_new_expression(context)?,
            Token::SuperKeyword => self.parse_super_expression(context)?,
            _ => self.parse_primary_expression(context | CONTEXT_NEW_EXPRESSION)?,
        };
        let callee = self.parse_member_or_call_tail(context, callee, callee_marker, false)?;
        let arguments = if self.token == Token::LeftParen {
            self.parse_arguments(context)?
        } else {
            Vec::new()
        };
        Ok(Expression::New(NewExpression {
            callee: Box::new(callee),
            arguments,
            span: self.finish(marker),
        }))
    }

    fn parse_super_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?;
        match self.token {
            Token::LeftParen => {
                if self.flags & FLAG_ALLOW_CONSTRUCTOR_WITH_SUPER == 0 {
                    return Err(self.error(ErrorKind::BadSuperCall));
                }
            }
            Token::Period | Token::LeftBracket => {
                if self.flags & FLAG_ALLOW_SUPER == 0 {
                    return Err(self.error(ErrorKind::UnexpectedSuper));
                }
            }
            _ => return Err(self.error(ErrorKind::UnexpectedSuper)),
        }
        Ok(Expression::Super(Super {
            span: self.finish(marker),
        }))
    }

    /// Dynamic `import(...)`: recognized by one-token lookahead, gated on the
    /// stage-3 pack. Import declarations never reach this path.
    fn parse_import_callee(&mut self, context: u32) -> Result<Expression, ParseError> {
        if self.flags & FLAG_OPTIONS_NEXT == 0 {
            return Err(self.unexpected());
        }
        let marker = self.start_marker();
        self.next_token(context | CONTEXT_DYNAMIC_IMPORT)?;
        if self.token != Token::LeftParen {
            return Err(self.unexpected());
        }
        Ok(Expression::Import(Import {
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // async cover
    // =========================================================================

    /// Resolve an `async`-headed expression: async arrow with one identifier
    /// parameter, async arrow with a parenthesized head, a plain `async(...)`
    /// call, or just the identifier `async`.
    fn parse_async_head(&mut self, context: u32, marker: Marker) -> Result<AsyncHead, ParseError> {
        let snapshot = self.save_state();
        self.next_token(context)?;

        // A line terminator after `async` forces the identifier reading.
        if self.flags & FLAG_LINE_TERMINATOR != 0 {
            self.restore_state(snapshot);
            return Ok(AsyncHead::None);
        }

        if self.token == Token::LeftParen {
            self.flags |= FLAG_ASYNC_ARROW;
            let result = self.parse_async_paren_tail(context, marker);
            self.flags &= !FLAG_ASYNC_ARROW;
            return result;
        }

        if self.token_is_identifier_ref(context) && self.token != Token::FunctionKeyword {
            let id_marker = self.start_marker();
            let name = self.token_value_string();
            self.next_token(context)?;
            if self.token == Token::Arrow && self.flags & FLAG_LINE_TERMINATOR == 0 {
                if context & CONTEXT_STRICT != 0 && matches!(name.as_str(), "eval" | "arguments") {
                    return Err(self.error(ErrorKind::StrictParamName));
                }
                let param = Pattern::Identifier(Identifier {
                    name,
                    span: self.finish(id_marker),
                });
                let arrow = self.parse_arrow_tail(
                    context | CONTEXT_SIMPLE_ARROW,
                    marker,
                    vec![param],
                    true,
                )?;
                return Ok(AsyncHead::Arrow(arrow));
            }
            self.restore_state(snapshot);
            return Ok(AsyncHead::None);
        }

        self.restore_state(snapshot);
        Ok(AsyncHead::None)
    }

    /// After `async (`: a cover of call arguments and arrow parameters,
    /// resolved by the token following `)`.
    fn parse_async_paren_tail(
        &mut self,
        context: u32,
        marker: Marker,
    ) -> Result<AsyncHead, ParseError> {
        let async_end = (self.last_index, self.last_line, self.last_column);
        self.next_token(context)?; // (
        let inner = context | CONTEXT_PARENTHESIS | CONTEXT_ALLOW_IN;

        let mut elements: Vec<Expression> = Vec::new();
        let mut member_loc: Option<ErrorLocation> = None;
        let mut eval_args_loc: Option<ErrorLocation> = None;
        while self.token != Token::RightParen {
            if self.token == Token::Ellipsis {
                let spread_marker = self.start_marker();
                self.next_token(inner)?;
                let argument = self.parse_assignment_expression(inner)?;
                elements.push(Expression::Spread(SpreadElement {
                    argument: Box::new(argument),
                    span: self.finish(spread_marker),
                }));
            } else {
                let el_loc = self.token_start_location();
                let expr = self.parse_assignment_expression(inner)?;
                if matches!(expr, Expression::Member(_)) {
                    member_loc.get_or_insert(el_loc);
                }
                if let Some(name) = expr.identifier_name() {
                    if matches!(name, "eval" | "arguments") {
                        eval_args_loc.get_or_insert(el_loc);
                    }
                }
                elements.push(expr);
            }
            if !self.consume(inner, Token::Comma)? {
                break;
            }
        }
        self.expect(context, Token::RightParen)?;

        if self.token == Token::Arrow && self.flags & FLAG_LINE_TERMINATOR == 0 {
            if let Some(location) = member_loc {
                return Err(self.error_at(ErrorKind::InvalidArrowParams, location));
            }
            if context & CONTEXT_STRICT != 0 {
                if let Some(location) = eval_args_loc {
                    return Err(self.error_at(ErrorKind::StrictParamName, location));
                }
            }
            let mut params = Vec::with_capacity(elements.len());
            let count = elements.len();
            for (i, element) in elements.into_iter().enumerate() {
                let param = self.reinterpret_as_arrow_param(context, element, i + 1 == count)?;
                params.push(param);
            }
            let arrow = self.parse_arrow_tail(context, marker, params, true)?;
            return Ok(AsyncHead::Arrow(arrow));
        }

        if let Some(location) = self.shorthand_init_error.take() {
            return Err(self.error_at(ErrorKind::InvalidShorthandAssignment, location));
        }

        let callee_span = {
            let mut span = NodeSpan::default();
            if self.flags & FLAG_OPTIONS_RANGES != 0 {
                span.start = Some(marker.index);
                span.end = Some(async_end.0 as u32);
            }
            if self.flags & FLAG_OPTIONS_LOC != 0 {
                span.loc = Some(SourceLocation {
                    start: Position {
                        line: marker.line,
                        column: marker.column,
                    },
                    end: Position {
                        line: async_end.1,
                        column: async_end.2,
                    },
                });
            }
            span
        };
        let call = Expression::Call(CallExpression {
            callee: Box::new(Expression::Identifier(Identifier {
                name: "async".to_string(),
                span: callee_span,
            })),
            arguments: elements,
            span: self.finish(marker),
        });
        let call = self.parse_member_or_call_tail(context, call, marker, true)?;
        Ok(AsyncHead::Expr(call))
    }

    // =========================================================================
    // Arrow tails
    // =========================================================================

    /// Parse `=> body` after a resolved parameter list and assemble the arrow
    /// function.
    pub(crate) fn parse_arrow_tail(
        &mut self,
        context: u32,
        marker: Marker,
        params: Vec<Pattern>,
        is_async: bool,
    ) -> Result<Expression, ParseError> {
        if self.flags & FLAG_LINE_TERMINATOR != 0 {
            return Err(self.unexpected());
        }
        self.expect(context, Token::Arrow)?;

        let saved = self.enter_function_scope();
        let saved_flags = self.flags;
        self.flags &= !(FLAG_BREAK | FLAG_CONTINUE | FLAG_SWITCH | FLAG_NON_SIMPLE_PARAMETER);
        self.flags |= FLAG_IN_FUNCTION_BODY;

        // Arrow parameters are lexical: duplicates are always fatal.
        let mut names = Vec::new();
        for param in &params {
            Self::collect_pattern_names(param, &mut names);
        }
        for name in &names {
            self.add_function_arg(context | CONTEXT_STRICT, name)?;
        }
        if params
            .iter()
            .any(|p| !matches!(p, Pattern::Identifier(_)))
        {
            self.flags |= FLAG_NON_SIMPLE_PARAMETER;
        }

        let mut child = context
            & !(CONTEXT_ALLOW_YIELD
                | CONTEXT_ALLOW_AWAIT
                | CONTEXT_IN_ASYNC_FUNCTION_BODY
                | CONTEXT_IN_FOR_STATEMENT
                | CONTEXT_IN_BINDING
                | CONTEXT_PARENTHESIS
                | CONTEXT_SIMPLE_ARROW
                | CONTEXT_STATEMENT);
        if is_async {
            child |= CONTEXT_ALLOW_AWAIT | CONTEXT_IN_ASYNC_FUNCTION_BODY;
        }

        let (body, expression) = if self.token == Token::LeftBrace {
            let block = self.parse_function_body(child | CONTEXT_ARROW)?;
            (ArrowBody::Block(block), false)
        } else {
            let expr =
                self.parse_assignment_expression(child | CONTEXT_CONCISE_BODY | CONTEXT_ALLOW_IN)?;
            (ArrowBody::Expression(Box::new(expr)), true)
        };

        self.exit_function_scope(saved);
        self.flags = saved_flags
            & !(FLAG_ARROW | FLAG_ASYNC_ARROW | FLAG_LINE_TERMINATOR)
            | (self.flags & FLAG_LINE_TERMINATOR);
        self.flags |= if is_async { FLAG_ASYNC_ARROW } else { FLAG_ARROW };

        Ok(Expression::Arrow(ArrowFunctionExpression {
            id: None,
            params,
            body,
            is_async,
            generator: false,
            expression,
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Parenthesized groups
    // =========================================================================

    /// `( ... )`: a cover of a parenthesized expression (or sequence) and an
    /// arrow parameter list, resolved by the token after `)`.
    fn parse_group_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // (
        let inner = context | CONTEXT_PARENTHESIS | CONTEXT_ALLOW_IN;

        if self.token == Token::RightParen {
            self.next_token(context)?;
            if self.token == Token::Arrow {
                return self.parse_arrow_tail(context, marker, Vec::new(), false);
            }
            return Err(self.unexpected());
        }

        let mut elements: Vec<Expression> = Vec::new();
        let mut rest_element: Option<Pattern> = None;
        let mut trailing_comma = false;
        let mut member_loc: Option<ErrorLocation> = None;
        let mut wrapped_loc: Option<ErrorLocation> = None;
        let mut eval_args_loc: Option<ErrorLocation> = None;
        let mut reserved_loc: Option<ErrorLocation> = None;
        self.flags &= !(FLAG_HAS_REST | FLAG_HAS_MEMBER_EXPRESSION);

        loop {
            if self.token == Token::Ellipsis {
                let rest_loc = self.token_start_location();
                let rest_marker = self.start_marker();
                self.next_token(inner)?;
                let argument = self.parse_binding_target(inner | CONTEXT_IN_BINDING)?;
                if self.token == Token::Assign {
                    return Err(self.error(ErrorKind::RestDefaultInitializer));
                }
                self.flags |= FLAG_HAS_REST;
                self.error_location = Some(rest_loc);
                rest_element = Some(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_marker),
                })));
                if self.token == Token::Comma {
                    return Err(self.error(ErrorKind::ParamAfterRest));
                }
                break;
            }

            let el_loc = self.token_start_location();
            self.flags &= !(FLAG_PARENTHESIZED | FLAG_HAS_RESERVED_WORD);
            let expr = self.parse_assignment_expression(inner)?;
            if matches!(expr, Expression::Member(_)) {
                self.flags |= FLAG_HAS_MEMBER_EXPRESSION;
                member_loc.get_or_insert(el_loc);
            }
            if self.flags & FLAG_PARENTHESIZED != 0 {
                wrapped_loc.get_or_insert(el_loc);
            }
            if self.flags & FLAG_HAS_RESERVED_WORD != 0 {
                reserved_loc.get_or_insert(el_loc);
            }
            if let Some(name) = expr.identifier_name() {
                if matches!(name, "eval" | "arguments") {
                    eval_args_loc.get_or_insert(el_loc);
                }
            }
            elements.push(expr);

            if self.token == Token::Comma {
                self.next_token(inner)?;
                if self.token == Token::RightParen {
                    trailing_comma = true;
                    break;
                }
                continue;
            }
            break;
        }
        self.expect(context, Token::RightParen)?;

        if self.token == Token::Arrow && self.flags & FLAG_LINE_TERMINATOR == 0 {
            if let Some(location) = member_loc {
                self.error_location = Some(location);
                return Err(self.error_at(ErrorKind::InvalidArrowParams, location));
            }
            if let Some(location) = wrapped_loc {
                return Err(self.error_at(ErrorKind::InvalidParenthesizedPattern, location));
            }
            if context & CONTEXT_STRICT != 0 {
                if let Some(location) = eval_args_loc {
                    return Err(self.error_at(ErrorKind::StrictParamName, location));
                }
                if let Some(location) = reserved_loc {
                    return Err(self.error_at(ErrorKind::UnexpectedStrictReserved, location));
                }
            }
            let count = elements.len();
            let mut params = Vec::with_capacity(count + 1);
            for (i, element) in elements.into_iter().enumerate() {
                let last = i + 1 == count && rest_element.is_none();
                params.push(self.reinterpret_as_arrow_param(context, element, last)?);
            }
            if let Some(rest) = rest_element {
                params.push(rest);
            }
            return self.parse_arrow_tail(context, marker, params, false);
        }

        if rest_element.is_some() {
            return Err(self.error_deferred(ErrorKind::UnexpectedRestElement));
        }
        if trailing_comma {
            return Err(self.error(ErrorKind::UnexpectedTrailingComma));
        }

        self.flags &= !(FLAG_ARROW | FLAG_ASYNC_ARROW);
        self.flags |= FLAG_PARENTHESIZED;
        if elements.len() == 1 {
            match elements.pop() {
                Some(expr) => Ok(expr),
                None => Err(self.unexpected()),
            }
        } else {
            Ok(Expression::Sequence(SequenceExpression {
                expressions: elements,
                span: self.finish(marker),
            }))
        }
    }

    // =========================================================================
    // Primaries
    // =========================================================================

    pub(crate) fn parse_primary_expression(
        &mut self,
        context: u32,
    ) -> Result<Expression, ParseError> {
        match self.token {
            Token::NumericLiteral | Token::StringLiteral => self.parse_literal(context),
            Token::BigIntLiteral => self.parse_bigint_literal(context),
            Token::Divide | Token::DivideAssign => self.parse_regex_literal(context),
            Token::TrueKeyword | Token::FalseKeyword | Token::NullKeyword => {
                self.parse_keyword_literal(context)
            }
            Token::ThisKeyword => {
                let marker = self.start_marker();
                self.next_token(context)?;
                Ok(Expression::This(ThisExpression {
                    span: self.finish(marker),
                }))
            }
            Token::LeftParen => self.parse_group_expression(context),
            Token::LeftBracket => self.parse_array_literal(context),
            Token::LeftBrace => self.parse_object_literal(context),
            Token::FunctionKeyword => {
                let marker = self.start_marker();
                self.parse_function_expression(context, marker, false)
            }
            Token::ClassKeyword => self.parse_class_expression(context),
            Token::TemplateCont | Token::TemplateTail => {
                self.parse_template_literal(context).map(Expression::Template)
            }
            Token::DoKeyword if self.flags & FLAG_OPTIONS_V8 != 0 => {
                self.parse_do_expression(context)
            }
            Token::AsyncKeyword => {
                let snapshot = self.save_state();
                let marker = self.start_marker();
                self.next_token(context)?;
                if self.token == Token::FunctionKeyword && self.flags & FLAG_LINE_TERMINATOR == 0 {
                    return self.parse_function_expression(context, marker, true);
                }
                self.restore_state(snapshot);
                self.parse_identifier_reference(context)
                    .map(Expression::Identifier)
            }
            _ if self.token.is_identifier_or_keyword() => self
                .parse_identifier_reference(context)
                .map(Expression::Identifier),
            _ => Err(self.unexpected()),
        }
    }

    /// An identifier reference, with the context-sensitive reserved-word
    /// checks applied.
    pub(crate) fn parse_identifier_reference(
        &mut self,
        context: u32,
    ) -> Result<Identifier, ParseError> {
        self.check_identifier_ref(context)?;
        if self.token.is_future_reserved() {
            self.flags |= FLAG_HAS_RESERVED_WORD;
        }
        let marker = self.start_marker();
        let name = self.token_value_string();
        self.next_token(context)?;
        Ok(Identifier {
            name,
            span: self.finish(marker),
        })
    }

    /// An IdentifierName: any identifier or keyword, as after `.`.
    pub(crate) fn parse_identifier_name(&mut self, context: u32) -> Result<Identifier, ParseError> {
        if !self.token.is_identifier_or_keyword() {
            return Err(self.unexpected());
        }
        let marker = self.start_marker();
        let name = self.token_value_string();
        self.next_token(context)?;
        Ok(Identifier {
            name,
            span: self.finish(marker),
        })
    }

    // =========================================================================
    // Literals
    // =========================================================================

    fn literal_raw(&self) -> Option<String> {
        if self.flags & FLAG_OPTIONS_RAW != 0 {
            Some(self.token_raw_slice())
        } else {
            None
        }
    }

    fn parse_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let raw = self.literal_raw();
        let value = if self.token == Token::StringLiteral {
            LiteralValue::String(self.token_value_string())
        } else {
            LiteralValue::Number(self.token_value_number())
        };
        self.next_token(context)?;
        Ok(Expression::Literal(Literal {
            value,
            raw,
            regex: None,
            span: self.finish(marker),
        }))
    }

    fn parse_keyword_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let raw = self.literal_raw();
        let value = match self.token {
            Token::TrueKeyword => LiteralValue::Boolean(true),
            Token::FalseKeyword => LiteralValue::Boolean(false),
            _ => LiteralValue::Null,
        };
        self.next_token(context)?;
        Ok(Expression::Literal(Literal {
            value,
            raw,
            regex: None,
            span: self.finish(marker),
        }))
    }

    fn parse_bigint_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let raw = self.literal_raw();
        let value = self.token_value_number();
        self.next_token(context)?;
        Ok(Expression::BigInt(BigIntLiteral {
            value,
            raw,
            span: self.finish(marker),
        }))
    }

    /// The slash that got here was scanned as a divide token; re-scan it as a
    /// regular expression literal. The pattern body is stored verbatim; the
    /// cooked value of a regex literal is null.
    fn parse_regex_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        self.scanner.re_scan_regex()?;
        self.token = Token::RegularExpression;
        let marker = self.start_marker();
        let raw = self.literal_raw();
        let regex = self.scanner.token_regex.clone();
        self.next_token(context)?;
        Ok(Expression::Literal(Literal {
            value: LiteralValue::Null,
            raw,
            regex,
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Parse a full template literal. The current token is the head chunk
    /// (`TemplateCont`) or a no-substitution template (`TemplateTail`).
    pub(crate) fn parse_template_literal(
        &mut self,
        context: u32,
    ) -> Result<TemplateLiteral, ParseError> {
        let marker = self.start_marker();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();

        if self.token == Token::TemplateTail {
            quasis.push(self.template_element(true));
            self.next_token(context)?;
        } else {
            loop {
                quasis.push(self.template_element(false));
                self.next_token(context)?; // first token of the interpolation
                expressions.push(self.parse_expression(context | CONTEXT_ALLOW_IN)?);
                if self.token != Token::RightBrace {
                    return Err(self.unexpected());
                }
                // Resume template scanning with the brace as part of the body.
                self.last_index = self.scanner.index;
                self.last_line = self.scanner.line;
                self.last_column = self.scanner.column;
                let token = self.scanner.scan_template_next(context)?;
                self.token = token;
                if token == Token::TemplateTail {
                    quasis.push(self.template_element(true));
                    self.next_token(context)?;
                    break;
                }
            }
        }

        Ok(TemplateLiteral {
            quasis,
            expressions,
            span: self.finish(marker),
        })
    }

    fn template_element(&self, tail: bool) -> TemplateElement {
        let mut span = NodeSpan::default();
        if self.flags & FLAG_OPTIONS_RANGES != 0 {
            span.start = Some(self.scanner.start_index as u32);
            span.end = Some(self.scanner.index as u32);
        }
        if self.flags & FLAG_OPTIONS_LOC != 0 {
            span.loc = Some(SourceLocation {
                start: Position {
                    line: self.scanner.start_line,
                    column: self.scanner.start_column,
                },
                end: Position {
                    line: self.scanner.line,
                    column: self.scanner.column,
                },
            });
        }
        TemplateElement {
            value: TemplateElementValue {
                cooked: self.scanner.token_value.as_str().to_string(),
                raw: self.scanner.token_raw.clone(),
            },
            tail,
            span,
        }
    }

    // =========================================================================
    // Array and object literals
    // =========================================================================

    fn parse_array_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // [
        let element_context = context | CONTEXT_ALLOW_IN;
        let mut elements: Vec<Option<Expression>> = Vec::new();

        while self.token != Token::RightBracket {
            if self.token == Token::Comma {
                self.next_token(context)?;
                elements.push(None);
                continue;
            }
            if self.token == Token::Ellipsis {
                let spread_marker = self.start_marker();
                self.next_token(element_context)?;
                let argument = self.parse_assignment_expression(element_context)?;
                elements.push(Some(Expression::Spread(SpreadElement {
                    argument: Box::new(argument),
                    span: self.finish(spread_marker),
                })));
            } else {
                elements.push(Some(self.parse_assignment_expression(element_context)?));
            }
            if self.token != Token::RightBracket {
                self.expect(context, Token::Comma)?;
            }
        }
        self.expect(context, Token::RightBracket)?;
        Ok(Expression::Array(ArrayExpression {
            elements,
            span: self.finish(marker),
        }))
    }

    fn parse_object_literal(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        let saved_proto = self.flags & FLAG_HAS_PROTOTYPE;
        self.flags &= !FLAG_HAS_PROTOTYPE;
        self.next_token(context)?; // {

        let mut properties = Vec::new();
        while self.token != Token::RightBrace {
            properties.push(self.parse_object_member(context)?);
            if self.token != Token::RightBrace {
                self.expect(context, Token::Comma)?;
            }
        }
        self.expect(context, Token::RightBrace)?;
        self.flags = self.flags & !FLAG_HAS_PROTOTYPE | saved_proto;
        Ok(Expression::Object(ObjectExpression {
            properties,
            span: self.finish(marker),
        }))
    }

    fn parse_object_member(&mut self, context: u32) -> Result<ObjectMember, ParseError> {
        let marker = self.start_marker();

        if self.token == Token::Ellipsis {
            if self.flags & FLAG_OPTIONS_NEXT == 0 {
                return Err(self.unexpected());
            }
            self.next_token(context)?;
            let argument = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
            return Ok(ObjectMember::Spread(SpreadElement {
                argument: Box::new(argument),
                span: self.finish(marker),
            }));
        }

        let mut is_async = false;
        let mut is_generator = false;
        let mut kind = PropertyKind::Init;

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

        if !is_async && !is_generator
            && matches!(self.token, Token::GetKeyword | Token::SetKeyword)
        {
            let accessor = self.token;
            let snapshot = self.save_state();
            self.next_token(context)?;
            if self.token_starts_property_key() && self.token != Token::Multiply {
                kind = if accessor == Token::GetKeyword {
                    PropertyKind::Get
                } else {
                    PropertyKind::Set
                };
            } else {
                self.restore_state(snapshot);
            }
        }

        let key_token = self.token;
        let (key, computed, static_name) = self.parse_property_key(context)?;

        if kind != PropertyKind::Init {
            let value =
                self.parse_method_function(context, false, false, kind_to_method(kind), false)?;
            return Ok(ObjectMember::Property(Box::new(Property {
                key,
                value: Expression::Function(value),
                kind,
                computed,
                method: false,
                shorthand: false,
                span: self.finish(marker),
            })));
        }

        if self.token == Token::LeftParen {
            let value = self.parse_method_function(
                context,
                is_async,
                is_generator,
                MethodKind::Method,
                false,
            )?;
            return Ok(ObjectMember::Property(Box::new(Property {
                key,
                value: Expression::Function(value),
                kind: PropertyKind::Init,
                computed,
                method: true,
                shorthand: false,
                span: self.finish(marker),
            })));
        }

        if is_async || is_generator {
            return Err(self.unexpected());
        }

        if self.token == Token::Colon {
            self.next_token(context)?;
            if !computed && static_name.as_deref() == Some("__proto__") {
                if self.flags & FLAG_HAS_PROTOTYPE != 0 {
                    return Err(self.error(ErrorKind::DuplicateProto));
                }
                self.flags |= FLAG_HAS_PROTOTYPE;
            }
            let value = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
            return Ok(ObjectMember::Property(Box::new(Property {
                key,
                value,
                kind: PropertyKind::Init,
                computed,
                method: false,
                shorthand: false,
                span: self.finish(marker),
            })));
        }

        // Shorthand forms: the key doubles as the value, so it must be a
        // valid identifier reference in this context.
        let id = match key {
            Expression::Identifier(ref id) if !computed => id.clone(),
            _ => return Err(self.unexpected()),
        };
        self.check_identifier_token(context, key_token, marker)?;

        if self.token == Token::Assign {
            // CoverInitializedName: only legal if the whole object literal is
            // later reinterpreted as a pattern.
            let location = ErrorLocation {
                index: marker.index,
                line: marker.line,
                column: marker.column,
            };
            self.shorthand_init_error.get_or_insert(location);
            self.next_token(context)?;
            let right = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
            let value = Expression::Assignment(AssignmentExpression {
                operator: AssignmentOperator::Assign,
                left: Box::new(Pattern::Identifier(id)),
                right: Box::new(right),
                span: self.finish(marker),
            });
            return Ok(ObjectMember::Property(Box::new(Property {
                key,
                value,
                kind: PropertyKind::Init,
                computed: false,
                method: false,
                shorthand: true,
                span: self.finish(marker),
            })));
        }

        Ok(ObjectMember::Property(Box::new(Property {
            key,
            value: Expression::Identifier(id),
            kind: PropertyKind::Init,
            computed: false,
            method: false,
            shorthand: true,
            span: self.finish(marker),
        })))
    }

    /// Can the current token begin a property key?
    pub(crate) fn token_starts_property_key(&self) -> bool {
        self.token.is_identifier_or_keyword()
            || matches!(
                self.token,
                Token::StringLiteral
                    | Token::NumericLiteral
                    | Token::LeftBracket
                    | Token::Multiply
            )
    }

    /// Parse a property key. Returns the key expression, whether it is
    /// computed, and its static name for `__proto__`/`constructor` checks.
    pub(crate) fn parse_property_key(
        &mut self,
        context: u32,
    ) -> Result<(Expression, bool, Option<String>), ParseError> {
        match self.token {
            Token::LeftBracket => {
                self.next_token(context)?;
                let key = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
                self.expect(context, Token::RightBracket)?;
                Ok((key, true, None))
            }
            Token::StringLiteral => {
                let name = self.token_value_string();
                let key = self.parse_literal(context)?;
                Ok((key, false, Some(name)))
            }
            Token::NumericLiteral | Token::BigIntLiteral => {
                let name = self.token_value_number().to_string();
                let key = if self.token == Token::BigIntLiteral {
                    self.parse_bigint_literal(context)?
                } else {
                    self.parse_literal(context)?
                };
                Ok((key, false, Some(name)))
            }
            _ if self.token.is_identifier_or_keyword() => {
                let id = self.parse_identifier_name(context)?;
                let name = id.name.clone();
                Ok((Expression::Identifier(id), false, Some(name)))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Validate a saved identifier-like token the way `check_identifier_ref`
    /// validates the current one, reporting at `marker`.
    fn check_identifier_token(
        &self,
        context: u32,
        token: Token,
        marker: Marker,
    ) -> Result<(), ParseError> {
        let location = ErrorLocation {
            index: marker.index,
            line: marker.line,
            column: marker.column,
        };
        if token == Token::EnumKeyword || token.is_reserved() {
            return Err(self.error_at(ErrorKind::UnexpectedReserved, location));
        }
        if token == Token::YieldKeyword && context & CONTEXT_ALLOW_YIELD != 0 {
            return Err(self.error_at(
                ErrorKind::DisallowedInContext("yield".to_string()),
                location,
            ));
        }
        if token == Token::AwaitKeyword
            && context & (CONTEXT_ALLOW_AWAIT | CONTEXT_MODULE) != 0
        {
            return Err(self.error_at(
                ErrorKind::DisallowedInContext("await".to_string()),
                location,
            ));
        }
        if token.is_future_reserved() && context & CONTEXT_STRICT != 0 {
            return Err(self.error_at(ErrorKind::UnexpectedStrictReserved, location));
        }
        Ok(())
    }

    // =========================================================================
    // do-expressions
    // =========================================================================

    fn parse_do_expression(&mut self, context: u32) -> Result<Expression, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // do
        if self.token != Token::LeftBrace {
            return Err(self.unexpected());
        }
        let body = self.parse_block_body(context)?;
        Ok(Expression::Do(DoExpression {
            body,
            span: self.finish(marker),
        }))
    }
}

fn kind_to_method(kind: PropertyKind) -> MethodKind {
    match kind {
        PropertyKind::Get => MethodKind::Get,
        PropertyKind::Set => MethodKind::Set,
        PropertyKind::Init => MethodKind::Method,
    }
}
