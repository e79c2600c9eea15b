//! Module items: import and export declarations.

use rustc_hash::FxHashSet;

use crate::ast::*;
use crate::context::*;
use crate::errors::{ErrorKind, ParseError};
use crate::scanner::Token;

use super::state::ParserState;
use super::state_patterns::BindingHint;

impl ParserState<'_> {
    /// ModuleItem: import/export declarations plus ordinary statements.
    pub(crate) fn parse_module_item(&mut self, context: u32) -> Result<Statement, ParseError> {
        match self.token {
            Token::ImportKeyword => {
                // `import(` is a dynamic import expression, not a declaration.
                if self.flags & FLAG_OPTIONS_NEXT != 0 && self.import_starts_call(context)? {
                    self.parse_statement(context)
                } else {
                    self.parse_import_declaration(context)
                }
            }
            Token::ExportKeyword => self.parse_export_declaration(context),
            _ => self.parse_statement_list_item(context),
        }
    }

    // =========================================================================
    // import
    // =========================================================================

    fn parse_import_declaration(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // import

        // `import 'specifier';`
        if self.token == Token::StringLiteral {
            let source = self.parse_module_specifier(context)?;
            self.consume_semicolon(context)?;
            return Ok(Statement::Import(ImportDeclaration {
                specifiers: Vec::new(),
                source,
                span: self.finish(marker),
            }));
        }

        let mut specifiers = Vec::new();

        // Default binding.
        if self.token.is_identifier() || self.token.is_future_reserved() {
            let spec_marker = self.start_marker();
            let local = self.parse_binding_identifier(context, BindingHint::Lexical)?;
            specifiers.push(ImportSpecifierItem::Default(ImportDefaultSpecifier {
                local,
                span: self.finish(spec_marker),
            }));
            if self.token != Token::Comma {
                return self.finish_import_declaration(context, marker, specifiers);
            }
            self.next_token(context)?;
        }

        match self.token {
            // Namespace import: `* as ns`
            Token::Multiply => {
                let spec_marker = self.start_marker();
                self.next_token(context)?;
                if self.token != Token::AsKeyword {
                    return Err(self.unexpected());
                }
                self.next_token(context)?;
                let local = self.parse_binding_identifier(context, BindingHint::Lexical)?;
                specifiers.push(ImportSpecifierItem::Namespace(ImportNamespaceSpecifier {
                    local,
                    span: self.finish(spec_marker),
                }));
            }
            // Named imports: `{ a, b as c, default as d }`
            Token::LeftBrace => {
                self.next_token(context)?;
                while self.token != Token::RightBrace {
                    let spec_marker = self.start_marker();
                    let imported_token = self.token;
                    let imported = self.parse_identifier_name(context)?;
                    let local = if self.token == Token::AsKeyword {
                        self.next_token(context)?;
                        self.parse_binding_identifier(context, BindingHint::Lexical)?
                    } else {
                        // Without an alias the imported name is also the
                        // binding, so it must be a valid binding identifier.
                        if imported_token.is_reserved() || imported_token.is_future_reserved() {
                            return Err(self.error(ErrorKind::UnexpectedReserved));
                        }
                        self.add_block_name(&imported.name)?;
                        imported.clone()
                    };
                    specifiers.push(ImportSpecifierItem::Named(ImportSpecifier {
                        local,
                        imported,
                        span: self.finish(spec_marker),
                    }));
                    if self.token != Token::RightBrace {
                        self.expect(context, Token::Comma)?;
                    }
                }
                self.expect(context, Token::RightBrace)?;
            }
            _ => return Err(self.unexpected()),
        }

        self.finish_import_declaration(context, marker, specifiers)
    }

    fn finish_import_declaration(
        &mut self,
        context: u32,
        marker: super::state::Marker,
        specifiers: Vec<ImportSpecifierItem>,
    ) -> Result<Statement, ParseError> {
        if self.token != Token::FromKeyword {
            return Err(self.unexpected());
        }
        self.next_token(context)?;
        let source = self.parse_module_specifier(context)?;
        self.consume_semicolon(context)?;
        Ok(Statement::Import(ImportDeclaration {
            specifiers,
            source,
            span: self.finish(marker),
        }))
    }

    fn parse_module_specifier(&mut self, context: u32) -> Result<Literal, ParseError> {
        if self.token != Token::StringLiteral {
            return Err(self.error(ErrorKind::InvalidModuleSpecifier));
        }
        let marker = self.start_marker();
        let raw = if self.flags & FLAG_OPTIONS_RAW != 0 {
            Some(self.token_raw_slice())
        } else {
            None
        };
        let value = LiteralValue::String(self.token_value_string());
        self.next_token(context)?;
        Ok(Literal {
            value,
            raw,
            regex: None,
            span: self.finish(marker),
        })
    }

    // =========================================================================
    // export
    // =========================================================================

    fn parse_export_declaration(&mut self, context: u32) -> Result<Statement, ParseError> {
        let marker = self.start_marker();
        self.next_token(context)?; // export
        let export_context = context | CONTEXT_EXPORT;

        match self.token {
            // `export * from 'mod';`
            Token::Multiply => {
                self.next_token(context)?;
                if self.token != Token::FromKeyword {
                    return Err(self.unexpected());
                }
                self.next_token(context)?;
                let source = self.parse_module_specifier(context)?;
                self.consume_semicolon(context)?;
                Ok(Statement::ExportAll(ExportAllDeclaration {
                    source,
                    span: self.finish(marker),
                }))
            }

            Token::DefaultKeyword => {
                self.next_token(context)?;
                let declaration = match self.token {
                    Token::FunctionKeyword => ExportDefaultKind::Declaration(Box::new(
                        self.parse_function_declaration(
                            export_context | CONTEXT_OPTIONAL_IDENTIFIER,
                            false,
                        )?,
                    )),
                    Token::ClassKeyword => ExportDefaultKind::Declaration(Box::new(
                        self.parse_class_declaration(
                            export_context | CONTEXT_OPTIONAL_IDENTIFIER,
                        )?,
                    )),
                    Token::AsyncKeyword => {
                        if self.async_starts_function(context)? {
                            ExportDefaultKind::Declaration(Box::new(
                                self.parse_async_function_declaration(
                                    export_context | CONTEXT_OPTIONAL_IDENTIFIER,
                                )?,
                            ))
                        } else {
                            let expr =
                                self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
                            self.consume_semicolon(context)?;
                            ExportDefaultKind::Expression(Box::new(expr))
                        }
                    }
                    _ => {
                        let expr =
                            self.parse_assignment_expression(context | CONTEXT_ALLOW_IN)?;
                        self.consume_semicolon(context)?;
                        ExportDefaultKind::Expression(Box::new(expr))
                    }
                };
                Ok(Statement::ExportDefault(ExportDefaultDeclaration {
                    declaration,
                    span: self.finish(marker),
                }))
            }

            // `export { a, b as c } [from 'mod'];`
            Token::LeftBrace => {
                self.next_token(context)?;
                let mut specifiers = Vec::new();
                let mut exported_names: FxHashSet<String> = FxHashSet::default();
                let mut reserved_local = None;
                while self.token != Token::RightBrace {
                    let spec_marker = self.start_marker();
                    let local_token = self.token;
                    let local_loc = self.token_start_location();
                    let local = self.parse_identifier_name(context)?;
                    if local_token.is_reserved() || local_token.is_future_reserved() {
                        // Legal only when a `from` clause re-exports it.
                        reserved_local.get_or_insert(local_loc);
                    }
                    let exported = if self.token == Token::AsKeyword {
                        self.next_token(context)?;
                        self.parse_identifier_name(context)?
                    } else {
                        local.clone()
                    };
                    if !exported_names.insert(exported.name.clone()) {
                        return Err(
                            self.error(ErrorKind::DuplicateExport(exported.name.clone()))
                        );
                    }
                    specifiers.push(ExportSpecifier {
                        local,
                        exported,
                        span: self.finish(spec_marker),
                    });
                    if self.token != Token::RightBrace {
                        self.expect(context, Token::Comma)?;
                    }
                }
                self.expect(context, Token::RightBrace)?;

                let source = if self.token == Token::FromKeyword {
                    self.next_token(context)?;
                    Some(self.parse_module_specifier(context)?)
                } else {
                    if let Some(location) = reserved_local {
                        return Err(self.error_at(ErrorKind::UnexpectedReserved, location));
                    }
                    None
                };
                self.consume_semicolon(context)?;
                Ok(Statement::ExportNamed(ExportNamedDeclaration {
                    declaration: None,
                    specifiers,
                    source,
                    span: self.finish(marker),
                }))
            }

            // `export <declaration>`
            Token::VarKeyword => {
                let declaration = self.export_variable(export_context, VariableKind::Var)?;
                self.finish_export_declaration(marker, declaration)
            }
            Token::ConstKeyword => {
                let declaration = self.export_variable(export_context, VariableKind::Const)?;
                self.finish_export_declaration(marker, declaration)
            }
            Token::LetKeyword => {
                let declaration = self.export_variable(export_context, VariableKind::Let)?;
                self.finish_export_declaration(marker, declaration)
            }
            Token::FunctionKeyword => {
                let declaration = self.parse_function_declaration(export_context, false)?;
                self.finish_export_declaration(marker, declaration)
            }
            Token::ClassKeyword => {
                let declaration = self.parse_class_declaration(export_context)?;
                self.finish_export_declaration(marker, declaration)
            }
            Token::AsyncKeyword => {
                if !self.async_starts_function(context)? {
                    return Err(self.error(ErrorKind::MissingDeclarationAfterExport));
                }
                let declaration = self.parse_async_function_declaration(export_context)?;
                self.finish_export_declaration(marker, declaration)
            }
            _ => Err(self.error(ErrorKind::MissingDeclarationAfterExport)),
        }
    }

    fn export_variable(
        &mut self,
        context: u32,
        kind: VariableKind,
    ) -> Result<Statement, ParseError> {
        let declaration = self.parse_variable_declaration_only(context, kind)?;
        self.consume_semicolon(context)?;
        Ok(Statement::VariableDeclaration(declaration))
    }

    fn finish_export_declaration(
        &mut self,
        marker: super::state::Marker,
        declaration: Statement,
    ) -> Result<Statement, ParseError> {
        Ok(Statement::ExportNamed(ExportNamedDeclaration {
            declaration: Some(Box::new(declaration)),
            specifiers: Vec::new(),
            source: None,
            span: self.finish(marker),
        }))
    }
}
