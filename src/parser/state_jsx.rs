//! JSX parsing. The lexer's JSX child mode produces text chunks, `{`, `<`,
//! and `</` tokens between tags; attribute values use a specialized string
//! scan without escape processing. Tag-name equality between opening and
//! closing elements is checked textually.

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ParseError};
use crate::scanner::Token;

use super::state::ParserState;

/// Render a JSX element name for the tag-mismatch check.
fn jsx_name_text(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.clone(),
        JSXElementName::Member(member) => {
            format!("{}.{}", jsx_name_text(&member.object), member.property.name)
        }
        JSXElementName::Namespaced(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
    }
}

impl ParserState<'_> {
    /// Parse a JSX element; the current token is `<`. A `CONTEXT_JSX_CHILD`
    /// bit in `context` means the element is nested inside another element's
    /// children, which decides how scanning resumes after the element ends.
    pub(crate) fn parse_jsx_element(&mut self, context: u32) -> Result<JSXElement, ParseError> {
        let marker = self.start_marker();
        let tag_context = context | CONTEXT_JSX_CHILD;
        self.next_token(tag_context)?; // past '<', at the tag name

        let opening_marker = marker;
        let name = self.parse_jsx_element_name(tag_context)?;

        let mut attributes = Vec::new();
        let mut self_closing = false;
        loop {
            match self.token {
                Token::Divide => {
                    self.next_token(tag_context)?;
                    if self.token != Token::GreaterThan {
                        return Err(self.unexpected());
                    }
                    self_closing = true;
                    break;
                }
                Token::GreaterThan => break,
                Token::EndOfSource => {
                    return Err(self.error(ErrorKind::ExpectedJsxClosingTag(jsx_name_text(&name))))
                }
                _ => attributes.push(self.parse_jsx_attribute(tag_context)?),
            }
        }

        if self_closing {
            // Consume the '>' and resume in the enclosing mode.
            self.advance_past_jsx_tag(context)?;
            let opening_element = JSXOpeningElement {
                name,
                attributes,
                self_closing: true,
                span: self.finish(opening_marker),
            };
            return Ok(JSXElement {
                opening_element,
                children: Vec::new(),
                closing_element: None,
                span: self.finish(marker),
            });
        }

        // Children mode starts right after the '>' of the opening tag.
        self.next_jsx_token()?;
        let opening_element = JSXOpeningElement {
            name,
            attributes,
            self_closing: false,
            span: self.finish(opening_marker),
        };

        let mut children = Vec::new();
        let closing_element;
        loop {
            match self.token {
                Token::JSXClose => {
                    let closing = self.parse_jsx_closing_element(context)?;
                    let opening_text = jsx_name_text(&opening_element.name);
                    if jsx_name_text(&closing.name) != opening_text {
                        return Err(self.error(ErrorKind::ExpectedJsxClosingTag(opening_text)));
                    }
                    closing_element = Some(closing);
                    break;
                }
                Token::EndOfSource => {
                    return Err(self.error(ErrorKind::ExpectedJsxClosingTag(jsx_name_text(
                        &opening_element.name,
                    ))))
                }
                Token::LeftBrace => children.push(self.parse_jsx_child_container(context)?),
                Token::LessThan => {
                    let nested = self.parse_jsx_element(context | CONTEXT_JSX_CHILD)?;
                    children.push(JSXChild::Element(Box::new(nested)));
                }
                _ => {
                    // A text chunk, carried as an identifier token whose
                    // value is the raw text between markers.
                    let text_marker = self.start_marker();
                    let value = self.token_value_string();
                    let raw = if self.flags & FLAG_OPTIONS_RAW != 0 {
                        Some(self.token_raw_slice())
                    } else {
                        None
                    };
                    self.next_jsx_token()?;
                    children.push(JSXChild::Text(JSXText {
                        value,
                        raw,
                        span: self.finish(text_marker),
                    }));
                }
            }
        }

        Ok(JSXElement {
            opening_element,
            children,
            closing_element,
            span: self.finish(marker),
        })
    }

    /// After the final `>` of a tag, scanning resumes in the parent's mode:
    /// JSX children if this element is nested, the regular grammar otherwise.
    fn advance_past_jsx_tag(&mut self, context: u32) -> Result<(), ParseError> {
        if context & CONTEXT_JSX_CHILD != 0 {
            self.next_jsx_token()?;
        } else {
            self.next_token(context)?;
        }
        Ok(())
    }

    fn parse_jsx_closing_element(
        &mut self,
        context: u32,
    ) -> Result<JSXClosingElement, ParseError> {
        let marker = self.start_marker();
        let tag_context = context | CONTEXT_JSX_CHILD;
        self.next_token(tag_context)?; // past '</', at the tag name
        let name = self.parse_jsx_element_name(tag_context)?;
        if self.token != Token::GreaterThan {
            return Err(self.unexpected());
        }
        self.advance_past_jsx_tag(context)?;
        Ok(JSXClosingElement {
            name,
            span: self.finish(marker),
        })
    }

    /// Tag names: `div`, `a.b.c`, or `ns:name`. JSX identifiers extend the
    /// regular ones with dashes.
    fn parse_jsx_element_name(&mut self, context: u32) -> Result<JSXElementName, ParseError> {
        let first = self.parse_jsx_identifier(context)?;

        if self.token == Token::Colon {
            self.next_token(context)?;
            let name = self.parse_jsx_identifier(context)?;
            let span = name.span.clone();
            return Ok(JSXElementName::Namespaced(JSXNamespacedName {
                namespace: first,
                name,
                span,
            }));
        }

        let mut name = JSXElementName::Identifier(first);
        while self.consume(context, Token::Period)? {
            let property = self.parse_jsx_identifier(context)?;
            let span = property.span.clone();
            name = JSXElementName::Member(JSXMemberExpression {
                object: Box::new(name),
                property,
                span,
            });
        }
        Ok(name)
    }

    fn parse_jsx_identifier(&mut self, context: u32) -> Result<JSXIdentifier, ParseError> {
        if !self.token.is_identifier_or_keyword() {
            return Err(self.unexpected());
        }
        self.scanner.scan_jsx_identifier()?;
        let marker = self.start_marker();
        let name = self.token_value_string();
        self.next_token(context)?;
        Ok(JSXIdentifier {
            name,
            span: self.finish(marker),
        })
    }

    fn parse_jsx_attribute(&mut self, context: u32) -> Result<JSXAttributeItem, ParseError> {
        let marker = self.start_marker();

        // `{...expr}` spread attribute.
        if self.token == Token::LeftBrace {
            let inner = context & !CONTEXT_JSX_CHILD;
            self.next_token(inner)?;
            self.expect(inner, Token::Ellipsis)?;
            let argument = self.parse_assignment_expression(inner | CONTEXT_ALLOW_IN)?;
            if self.token != Token::RightBrace {
                return Err(self.unexpected());
            }
            self.next_token(context)?;
            return Ok(JSXAttributeItem::Spread(JSXSpreadAttribute {
                argument: Box::new(argument),
                span: self.finish(marker),
            }));
        }

        let name = self.parse_jsx_attribute_name(context)?;
        let value = if self.token == Token::Assign {
            Some(self.parse_jsx_attribute_value(context)?)
        } else {
            None
        };
        Ok(JSXAttributeItem::Attribute(JSXAttribute {
            name,
            value,
            span: self.finish(marker),
        }))
    }

    fn parse_jsx_attribute_name(&mut self, context: u32) -> Result<JSXAttributeName, ParseError> {
        let first = self.parse_jsx_identifier(context)?;
        if self.token == Token::Colon {
            self.next_token(context)?;
            let name = self.parse_jsx_identifier(context)?;
            let span = name.span.clone();
            return Ok(JSXAttributeName::Namespaced(JSXNamespacedName {
                namespace: first,
                name,
                span,
            }));
        }
        Ok(JSXAttributeName::Identifier(first))
    }

    /// Attribute values accept only quoted strings (scanned without escape
    /// processing), expression containers, and nested elements.
    fn parse_jsx_attribute_value(&mut self, context: u32) -> Result<JSXAttributeValue, ParseError> {
        // The current token is `=`; the specialized value scanner starts
        // right after it.
        self.last_index = self.scanner.index;
        self.last_line = self.scanner.line;
        self.last_column = self.scanner.column;
        let token = self.scanner.scan_jsx_attribute_value(context)?;
        self.token = token;
        if self.scanner.has_preceding_line_break() {
            self.flags |= FLAG_LINE_TERMINATOR;
        } else {
            self.flags &= !FLAG_LINE_TERMINATOR;
        }

        match token {
            Token::StringLiteral => {
                let marker = self.start_marker();
                let raw = if self.flags & FLAG_OPTIONS_RAW != 0 {
                    Some(self.token_raw_slice())
                } else {
                    None
                };
                let value = LiteralValue::String(self.token_value_string());
                self.next_token(context)?;
                Ok(JSXAttributeValue::Literal(Literal {
                    value,
                    raw,
                    regex: None,
                    span: self.finish(marker),
                }))
            }
            Token::LeftBrace => {
                let marker = self.start_marker();
                let inner = context & !CONTEXT_JSX_CHILD;
                self.next_token(inner)?;
                if self.token == Token::RightBrace {
                    return Err(self.error(ErrorKind::InvalidJsxAttributeValue));
                }
                let expression = self.parse_assignment_expression(inner | CONTEXT_ALLOW_IN)?;
                if self.token != Token::RightBrace {
                    return Err(self.unexpected());
                }
                self.next_token(context)?;
                Ok(JSXAttributeValue::Container(JSXExpressionContainer {
                    expression: Box::new(JSXExpression::Expression(expression)),
                    span: self.finish(marker),
                }))
            }
            Token::LessThan => {
                let element = self.parse_jsx_element(context & !CONTEXT_JSX_CHILD)?;
                Ok(JSXAttributeValue::Element(Box::new(element)))
            }
            _ => Err(self.error(ErrorKind::InvalidJsxAttributeValue)),
        }
    }

    /// `{ ... }` in child position: an expression container, an empty
    /// expression, or a spread child.
    fn parse_jsx_child_container(&mut self, context: u32) -> Result<JSXChild, ParseError> {
        let marker = self.start_marker();
        let inner = context & !CONTEXT_JSX_CHILD;
        self.next_token(inner)?; // past '{', into the regular grammar

        if self.token == Token::Ellipsis {
            self.next_token(inner)?;
            let expression = self.parse_assignment_expression(inner | CONTEXT_ALLOW_IN)?;
            if self.token != Token::RightBrace {
                return Err(self.unexpected());
            }
            self.next_jsx_token()?;
            return Ok(JSXChild::Spread(JSXSpreadChild {
                expression: Box::new(expression),
                span: self.finish(marker),
            }));
        }

        if self.token == Token::RightBrace {
            let empty_span = self.finish(self.start_marker());
            self.next_jsx_token()?;
            return Ok(JSXChild::Container(JSXExpressionContainer {
                expression: Box::new(JSXExpression::Empty(JSXEmptyExpression {
                    span: empty_span,
                })),
                span: self.finish(marker),
            }));
        }

        let expression = self.parse_expression(inner | CONTEXT_ALLOW_IN)?;
        if self.token != Token::RightBrace {
            return Err(self.unexpected());
        }
        self.next_jsx_token()?;
        Ok(JSXChild::Container(JSXExpressionContainer {
            expression: Box::new(JSXExpression::Expression(expression)),
            span: self.finish(marker),
        }))
    }
}
