//! Binding patterns and the expression-to-pattern reinterpretation walkers.
//!
//! Binding positions (declarations, parameters, catch) parse patterns
//! directly. Assignment targets and arrow parameter lists are first parsed as
//! expressions under a cover grammar, then consumed and rebuilt as patterns
//! here once the disambiguating token appears. Conversion moves the nodes;
//! nothing is tag-flipped in place.

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ParseError};
use crate::scanner::Token;

use super::state::ParserState;

/// How a freshly parsed binding name enters the scope maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BindingHint {
    Var,
    Lexical,
    Param,
    CatchParam,
    /// Validate only; recording happens later (arrow heads).
    None,
}

impl ParserState<'_> {
    // =========================================================================
    // Binding identifiers
    // =========================================================================

    pub(crate) fn parse_binding_identifier(
        &mut self,
        context: u32,
        hint: BindingHint,
    ) -> Result<Identifier, ParseError> {
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

        let name = self.token_value_string();
        if context & CONTEXT_STRICT != 0 && matches!(name.as_str(), "eval" | "arguments") {
            return Err(self.error(if hint == BindingHint::Param {
                ErrorKind::StrictParamName
            } else {
                ErrorKind::StrictLhsAssignment
            }));
        }
        if hint == BindingHint::Param && matches!(name.as_str(), "eval" | "arguments") {
            self.flags |= FLAG_HAS_EVAL_ARG_IN_PARAM;
        }
        if token.is_future_reserved() {
            self.flags |= FLAG_HAS_RESERVED_WORD;
        }

        let marker = self.start_marker();
        self.next_token(context)?;
        self.record_binding(context, hint, &name)?;
        Ok(Identifier {
            name,
            span: self.finish(marker),
        })
    }

    pub(crate) fn record_binding(
        &mut self,
        context: u32,
        hint: BindingHint,
        name: &str,
    ) -> Result<(), ParseError> {
        match hint {
            BindingHint::Var => {
                self.add_var_name(name);
                Ok(())
            }
            BindingHint::Lexical => self.add_block_name(name),
            BindingHint::Param => self.add_function_arg(context, name),
            BindingHint::CatchParam => self.add_catch_arg(name),
            BindingHint::None => Ok(()),
        }
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    /// BindingIdentifier, ObjectBindingPattern, or ArrayBindingPattern.
    pub(crate) fn parse_binding_identifier_or_pattern(
        &mut self,
        context: u32,
        hint: BindingHint,
    ) -> Result<Pattern, ParseError> {
        match self.token {
            Token::LeftBrace => self.parse_object_binding_pattern(context, hint),
            Token::LeftBracket => self.parse_array_binding_pattern(context, hint),
            _ => self
                .parse_binding_identifier(context, hint)
                .map(Pattern::Identifier),
        }
    }

    /// A validation-only binding target, used in cover positions where scope
    /// recording happens after the cover resolves.
    pub(crate) fn parse_binding_target(&mut self, context: u32) -> Result<Pattern, ParseError> {
        self.parse_binding_identifier_or_pattern(context, BindingHint::None)
    }

    /// BindingElement: a pattern with an optional default initializer.
    pub(crate) fn parse_binding_element(
        &mut self,
        context: u32,
        hint: BindingHint,
    ) -> Result<Pattern, ParseError> {
        let marker = self.start_marker();
        let target = self.parse_binding_identifier_or_pattern(context, hint)?;
        if self.token != Token::Assign {
            return Ok(target);
        }
        if hint == BindingHint::Param {
            self.flags |= FLAG_NON_SIMPLE_PARAMETER;
        }
        self.next_token(context)?;
        let default = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
        Ok(Pattern::Assignment(Box::new(AssignmentPattern {
            left: target,
            right: default,
            span: self.finish(marker),
        })))
    }

    fn parse_object_binding_pattern(
        &mut self,
        context: u32,
        hint: BindingHint,
    ) -> Result<Pattern, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // {
        let mut properties = Vec::new();

        while self.token != Token::RightBrace {
            if self.token == Token::Ellipsis {
                if self.flags & FLAG_OPTIONS_NEXT == 0 {
                    return Err(self.unexpected());
                }
                let rest_marker = self.start_marker();
                self.next_token(context)?;
                let argument = self
                    .parse_binding_identifier(context, hint)
                    .map(Pattern::Identifier)?;
                properties.push(ObjectPatternProperty::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_marker),
                })));
                if self.token == Token::Comma {
                    return Err(self.error(ErrorKind::RestElementLast));
                }
                break;
            }

            let prop_marker = self.start_marker();
            let key_token = self.token;
            let (key, computed, name) = self.parse_property_key(context)?;

            let (value, shorthand) = if self.consume(context, Token::Colon)? {
                (self.parse_binding_element(context, hint)?, false)
            } else {
                // Shorthand: the key is the binding.
                let id = match key {
                    Expression::Identifier(ref id) if !computed => id.clone(),
                    _ => return Err(self.unexpected()),
                };
                if key_token.is_reserved() || key_token == Token::EnumKeyword {
                    return Err(self.error(ErrorKind::UnexpectedReserved));
                }
                if context & CONTEXT_STRICT != 0 {
                    if matches!(id.name.as_str(), "eval" | "arguments") {
                        return Err(self.error(ErrorKind::StrictEvalArguments));
                    }
                    if key_token.is_future_reserved() {
                        return Err(self.error(ErrorKind::UnexpectedStrictReserved));
                    }
                }
                self.record_binding(context, hint, &id.name)?;
                if self.token == Token::Assign {
                    if hint == BindingHint::Param {
                        self.flags |= FLAG_NON_SIMPLE_PARAMETER;
                    }
                    self.next_token(context)?;
                    let default = self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
                    (
                        Pattern::Assignment(Box::new(AssignmentPattern {
                            left: Pattern::Identifier(id),
                            right: default,
                            span: self.finish(prop_marker),
                        })),
                        true,
                    )
                } else {
                    (Pattern::Identifier(id), true)
                }
            };

            properties.push(ObjectPatternProperty::Property(Box::new(PatternProperty {
                key,
                value,
                kind: PropertyKind::Init,
                computed,
                method: false,
                shorthand,
                span: self.finish(prop_marker),
            })));

            if self.token != Token::RightBrace {
                self.expect(context, Token::Comma)?;
            }
        }
        self.expect(context, Token::RightBrace)?;
        Ok(Pattern::Object(ObjectPattern {
            properties,
            span: self.finish(marker),
        }))
    }

    fn parse_array_binding_pattern(
        &mut self,
        context: u32,
        hint: BindingHint,
    ) -> Result<Pattern, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // [
        let mut elements: Vec<Option<Pattern>> = Vec::new();

        while self.token != Token::RightBracket {
            if self.token == Token::Comma {
                self.next_token(context)?;
                elements.push(None);
                continue;
            }
            if self.token == Token::Ellipsis {
                let rest_marker = self.start_marker();
                self.next_token(context)?;
                let argument = self.parse_binding_identifier_or_pattern(context, hint)?;
                if self.token == Token::Assign {
                    return Err(self.error(ErrorKind::RestDefaultInitializer));
                }
                elements.push(Some(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: self.finish(rest_marker),
                }))));
                if self.token == Token::Comma {
                    return Err(self.error(ErrorKind::RestElementLast));
                }
                break;
            }
            elements.push(Some(self.parse_binding_element(context, hint)?));
            if self.token != Token::RightBracket {
                self.expect(context, Token::Comma)?;
            }
        }
        self.expect(context, Token::RightBracket)?;
        Ok(Pattern::Array(ArrayPattern {
            elements,
            span: self.finish(marker),
        }))
    }

    // =========================================================================
    // Reinterpretation walkers
    // =========================================================================

    /// Rebuild an already-parsed expression as a pattern. `arrow` selects the
    /// arrow-parameter flavor, which additionally rejects member expressions.
    /// Applying this to something already produced by it is a no-op by
    /// construction: patterns convert to themselves field by field.
    pub(crate) fn reinterpret_as_pattern(
        &mut self,
        context: u32,
        expr: Expression,
        arrow: bool,
    ) -> Result<Pattern, ParseError> {
        match expr {
            Expression::Identifier(id) => {
                if context & CONTEXT_STRICT != 0
                    && matches!(id.name.as_str(), "eval" | "arguments")
                {
                    return Err(self.error(if arrow {
                        ErrorKind::StrictParamName
                    } else {
                        ErrorKind::StrictLhsAssignment
                    }));
                }
                Ok(Pattern::Identifier(id))
            }
            Expression::Object(object) => {
                let count = object.properties.len();
                let mut properties = Vec::with_capacity(count);
                for (i, member) in object.properties.into_iter().enumerate() {
                    match member {
                        ObjectMember::Property(property) => {
                            let property = *property;
                            if property.kind != PropertyKind::Init || property.method {
                                return Err(
                                    self.error_deferred(ErrorKind::InvalidDestructuringTarget)
                                );
                            }
                            let value =
                                self.reinterpret_as_pattern(context, property.value, arrow)?;
                            properties.push(ObjectPatternProperty::Property(Box::new(
                                PatternProperty {
                                    key: property.key,
                                    value,
                                    kind: PropertyKind::Init,
                                    computed: property.computed,
                                    method: false,
                                    shorthand: property.shorthand,
                                    span: property.span,
                                },
                            )));
                        }
                        ObjectMember::Spread(spread) => {
                            if i + 1 != count {
                                return Err(self.error(ErrorKind::RestElementLast));
                            }
                            if matches!(*spread.argument, Expression::Assignment(_)) {
                                return Err(
                                    self.error_deferred(ErrorKind::InvalidDestructuringTarget)
                                );
                            }
                            let argument =
                                self.reinterpret_as_pattern(context, *spread.argument, arrow)?;
                            properties.push(ObjectPatternProperty::Rest(Box::new(RestElement {
                                argument,
                                span: spread.span,
                            })));
                        }
                    }
                }
                self.shorthand_init_error = None;
                Ok(Pattern::Object(ObjectPattern {
                    properties,
                    span: object.span,
                }))
            }
            Expression::Array(array) => {
                let count = array.elements.len();
                let mut elements = Vec::with_capacity(count);
                for (i, element) in array.elements.into_iter().enumerate() {
                    match element {
                        None => elements.push(None),
                        Some(Expression::Spread(spread)) => {
                            if i + 1 != count {
                                return Err(self.error(ErrorKind::RestElementLast));
                            }
                            if matches!(*spread.argument, Expression::Assignment(_)) {
                                return Err(self.error(ErrorKind::RestDefaultInitializer));
                            }
                            let argument =
                                self.reinterpret_as_pattern(context, *spread.argument, arrow)?;
                            elements.push(Some(Pattern::Rest(Box::new(RestElement {
                                argument,
                                span: spread.span,
                            }))));
                        }
                        Some(element) => {
                            elements
                                .push(Some(self.reinterpret_as_pattern(context, element, arrow)?));
                        }
                    }
                }
                self.shorthand_init_error = None;
                Ok(Pattern::Array(ArrayPattern {
                    elements,
                    span: array.span,
                }))
            }
            Expression::Assignment(assignment) => {
                if assignment.operator != AssignmentOperator::Assign {
                    return Err(self.error_deferred(ErrorKind::InvalidDestructuringTarget));
                }
                Ok(Pattern::Assignment(Box::new(AssignmentPattern {
                    left: *assignment.left,
                    right: *assignment.right,
                    span: assignment.span,
                })))
            }
            Expression::Member(member) => {
                if arrow {
                    return Err(self.error_deferred(ErrorKind::InvalidArrowParams));
                }
                Ok(Pattern::Member(member))
            }
            _ => Err(self.error_deferred(if arrow {
                ErrorKind::InvalidArrowParams
            } else {
                ErrorKind::InvalidDestructuringTarget
            })),
        }
    }

    /// Convert one covered group element into an arrow parameter.
    pub(crate) fn reinterpret_as_arrow_param(
        &mut self,
        context: u32,
        expr: Expression,
        last: bool,
    ) -> Result<Pattern, ParseError> {
        match expr {
            Expression::Spread(spread) => {
                if !last {
                    return Err(self.error(ErrorKind::ParamAfterRest));
                }
                if matches!(*spread.argument, Expression::Assignment(_)) {
                    return Err(self.error(ErrorKind::RestDefaultInitializer));
                }
                let argument = self.reinterpret_as_pattern(context, *spread.argument, true)?;
                Ok(Pattern::Rest(Box::new(RestElement {
                    argument,
                    span: spread.span,
                })))
            }
            _ => self.reinterpret_as_pattern(context, expr, true),
        }
    }

    /// Collect the bound names of a pattern, in source order.
    pub(crate) fn collect_pattern_names(pattern: &Pattern, names: &mut Vec<String>) {
        match pattern {
            Pattern::Identifier(id) => names.push(id.name.clone()),
            Pattern::Object(object) => {
                for property in &object.properties {
                    match property {
                        ObjectPatternProperty::Property(p) => {
                            Self::collect_pattern_names(&p.value, names)
                        }
                        ObjectPatternProperty::Rest(r) => {
                            Self::collect_pattern_names(&r.argument, names)
                        }
                    }
                }
            }
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    Self::collect_pattern_names(element, names);
                }
            }
            Pattern::Assignment(assignment) => {
                Self::collect_pattern_names(&assignment.left, names)
            }
            Pattern::Rest(rest) => Self::collect_pattern_names(&rest.argument, names),
            Pattern::Member(_) => {}
        }
    }
}
