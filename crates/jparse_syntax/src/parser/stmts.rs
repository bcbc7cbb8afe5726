/// Statement parsing methods.
///
/// ## Notes
/// - `block_statement` decides between a local class, a local variable declaration and an ordinary
///   statement using the pure probes in `lookahead.rs`.
/// - `synchronized (` always starts a statement even though `synchronized` lexes as a modifier.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `{ {BlockStatement} }`
    fn block(&mut self) -> Result<Block, ParseError> {
        self.nested("block", |p| {
            p.expect_op(OperatorId::LBrace)?;
            let mut statements = Vec::new();
            while !p.check_op(OperatorId::RBrace) && !p.is_at_end() {
                statements.push(p.block_statement()?);
            }
            p.expect_op(OperatorId::RBrace)?;
            Ok(Block { statements })
        })
    }

    /// Local class, local variable declaration or statement.
    fn block_statement(&mut self) -> Result<Located<Stmt>, ParseError> {
        self.rule("block_statement", |p| {
            let position = p.here();
            if p.check_modifier(ModifierId::Synchronized) && p.check_op_at(1, OperatorId::LParen) {
                return p.statement();
            }
            if p.is_local_class_ahead() {
                let modifiers = p.modifiers()?;
                let decl = p.type_declaration(modifiers, position)?;
                return Ok(decl.map(Stmt::LocalClass));
            }
            if p.is_local_variable_ahead() {
                let decl = p.local_variable_declaration()?;
                p.expect_op(OperatorId::Semicolon)?;
                return Ok(Located::new(Stmt::LocalVariable(decl), position));
            }
            p.statement()
        })
    }

    /// `{VariableModifier} Type VariableDeclarators` without the terminating `;`.
    fn local_variable_declaration(&mut self) -> Result<LocalVariableDecl, ParseError> {
        self.rule("local_variable_declaration", |p| {
            let modifiers = p.modifiers()?;
            let ty = p.type_()?;
            let declarators = p.variable_declarators(&ty.node)?;
            Ok(LocalVariableDecl {
                modifiers,
                ty,
                declarators,
            })
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Located<Stmt>, ParseError> {
        self.nested("statement", |p| {
            let position = p.here();
            let token = p.peek();
            let stmt = match token.kind {
                TokenKind::Operator(OperatorId::LBrace) => Stmt::Block(p.block()?),
                TokenKind::Operator(OperatorId::Semicolon) => {
                    p.advance()?;
                    Stmt::Empty
                }
                TokenKind::Keyword(KeywordId::If) => p.if_statement()?,
                TokenKind::Keyword(KeywordId::For) => p.for_statement()?,
                TokenKind::Keyword(KeywordId::While) => {
                    p.advance()?;
                    let condition = p.par_expression()?;
                    let body = Box::new(p.statement()?);
                    Stmt::While { condition, body }
                }
                TokenKind::Keyword(KeywordId::Do) => {
                    p.advance()?;
                    let body = Box::new(p.statement()?);
                    p.expect_keyword(KeywordId::While)?;
                    let condition = p.par_expression()?;
                    p.expect_op(OperatorId::Semicolon)?;
                    Stmt::DoWhile { body, condition }
                }
                TokenKind::Keyword(KeywordId::Switch) => p.switch_statement()?,
                TokenKind::Keyword(KeywordId::Try) => p.try_statement()?,
                TokenKind::Keyword(KeywordId::Throw) => {
                    p.advance()?;
                    let expr = p.expression()?;
                    p.expect_op(OperatorId::Semicolon)?;
                    Stmt::Throw(expr)
                }
                TokenKind::Keyword(KeywordId::Return) => {
                    p.advance()?;
                    let value = if p.check_op(OperatorId::Semicolon) {
                        None
                    } else {
                        Some(p.expression()?)
                    };
                    p.expect_op(OperatorId::Semicolon)?;
                    Stmt::Return(value)
                }
                TokenKind::Keyword(KeywordId::Break) => {
                    p.advance()?;
                    let label = p.optional_label()?;
                    Stmt::Break(label)
                }
                TokenKind::Keyword(KeywordId::Continue) => {
                    p.advance()?;
                    let label = p.optional_label()?;
                    Stmt::Continue(label)
                }
                TokenKind::Keyword(KeywordId::Assert) => {
                    p.advance()?;
                    let condition = p.expression()?;
                    let message = if p.eat_op(OperatorId::Colon) {
                        Some(p.expression()?)
                    } else {
                        None
                    };
                    p.expect_op(OperatorId::Semicolon)?;
                    Stmt::Assert { condition, message }
                }
                TokenKind::Modifier(ModifierId::Synchronized) => {
                    p.advance()?;
                    let lock = p.par_expression()?;
                    let body = p.block()?;
                    Stmt::Synchronized { lock, body }
                }
                TokenKind::Identifier if p.check_op_at(1, OperatorId::Colon) => {
                    let label = p.identifier()?;
                    p.advance()?;
                    let body = Box::new(p.statement()?);
                    Stmt::Labeled { label, body }
                }
                _ => {
                    let expr = p.expression()?;
                    p.expect_op(OperatorId::Semicolon)?;
                    Stmt::Expression(expr)
                }
            };
            Ok(Located::new(stmt, position))
        })
    }

    /// `( Expression )`
    fn par_expression(&mut self) -> Result<Located<Expr>, ParseError> {
        self.expect_op(OperatorId::LParen)?;
        let expr = self.expression()?;
        self.expect_op(OperatorId::RParen)?;
        Ok(expr)
    }

    /// `[Ident] ;` after `break` / `continue`.
    fn optional_label(&mut self) -> Result<Option<Ident>, ParseError> {
        let label = if self.check_identifier() {
            Some(self.identifier()?)
        } else {
            None
        };
        self.expect_op(OperatorId::Semicolon)?;
        Ok(label)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.rule("if_statement", |p| {
            p.expect_keyword(KeywordId::If)?;
            let condition = p.par_expression()?;
            let then_branch = Box::new(p.statement()?);
            let else_branch = if p.eat_keyword(KeywordId::Else) {
                Some(Box::new(p.statement()?))
            } else {
                None
            };
            Ok(Stmt::If {
                condition,
                then_branch,
                else_branch,
            })
        })
    }

    /// Classic `for (init; condition; update)` or enhanced `for (T x : iterable)`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.rule("for_statement", |p| {
            p.expect_keyword(KeywordId::For)?;
            p.expect_op(OperatorId::LParen)?;

            if p.is_for_each_ahead() {
                let position = p.here();
                let modifiers = p.modifiers()?;
                let ty = p.type_()?;
                let name = p.identifier()?;
                let extra = p.dims()?;
                p.expect_op(OperatorId::Colon)?;
                let iterable = p.expression()?;
                p.expect_op(OperatorId::RParen)?;
                let body = Box::new(p.statement()?);
                let variable = Located::new(
                    FormalParameter {
                        modifiers,
                        ty: ty.map(|t| extra.apply(t)),
                        name,
                        varargs: false,
                    },
                    position,
                );
                return Ok(Stmt::ForEach {
                    variable,
                    iterable,
                    body,
                });
            }

            let init = if p.check_op(OperatorId::Semicolon) {
                None
            } else if p.is_local_variable_ahead() {
                Some(ForInit::Declaration(p.local_variable_declaration()?))
            } else {
                Some(ForInit::Expressions(p.expression_list()?))
            };
            p.expect_op(OperatorId::Semicolon)?;
            let condition = if p.check_op(OperatorId::Semicolon) {
                None
            } else {
                Some(p.expression()?)
            };
            p.expect_op(OperatorId::Semicolon)?;
            let update = if p.check_op(OperatorId::RParen) {
                Vec::new()
            } else {
                p.expression_list()?
            };
            p.expect_op(OperatorId::RParen)?;
            let body = Box::new(p.statement()?);
            Ok(Stmt::For {
                init,
                condition,
                update,
                body,
            })
        })
    }

    fn expression_list(&mut self) -> Result<Vec<Located<Expr>>, ParseError> {
        let mut exprs = vec![self.expression()?];
        while self.eat_op(OperatorId::Comma) {
            exprs.push(self.expression()?);
        }
        Ok(exprs)
    }

    // ========================================================================
    // Switch
    // ========================================================================

    /// `switch ( Expression ) { {SwitchGroup} }`
    ///
    /// Consecutive labels share one group; an empty trailing group is kept.
    fn switch_statement(&mut self) -> Result<Stmt, ParseError> {
        self.rule("switch_statement", |p| {
            p.expect_keyword(KeywordId::Switch)?;
            let selector = p.par_expression()?;
            p.expect_op(OperatorId::LBrace)?;
            let mut cases = Vec::new();
            while !p.check_op(OperatorId::RBrace) && !p.is_at_end() {
                cases.push(p.switch_group()?);
            }
            p.expect_op(OperatorId::RBrace)?;
            Ok(Stmt::Switch { selector, cases })
        })
    }

    fn switch_group(&mut self) -> Result<Located<SwitchCase>, ParseError> {
        let position = self.here();
        let mut labels = Vec::new();
        while self.check_switch_label() {
            labels.push(self.switch_label()?);
        }
        if labels.is_empty() {
            return Err(self.error_here("expected 'case' or 'default'"));
        }
        let mut body = Vec::new();
        while !self.check_switch_label() && !self.check_op(OperatorId::RBrace) && !self.is_at_end() {
            body.push(self.block_statement()?);
        }
        Ok(Located::new(SwitchCase { labels, body }, position))
    }

    fn check_switch_label(&self) -> bool {
        self.check_keyword(KeywordId::Case)
            || (self.check_modifier(ModifierId::Default) && self.check_op_at(1, OperatorId::Colon))
    }

    /// `case Expression :` or `default :`
    fn switch_label(&mut self) -> Result<Located<CaseLabel>, ParseError> {
        let position = self.here();
        let label = if self.eat_keyword(KeywordId::Case) {
            CaseLabel::Case(self.expression()?)
        } else {
            self.advance()?;
            CaseLabel::Default
        };
        self.expect_op(OperatorId::Colon)?;
        Ok(Located::new(label, position))
    }

    // ========================================================================
    // Try
    // ========================================================================

    /// `try [ResourceSpecification] Block {CatchClause} [finally Block]`
    fn try_statement(&mut self) -> Result<Stmt, ParseError> {
        self.rule("try_statement", |p| {
            p.expect_keyword(KeywordId::Try)?;
            let resources = if p.check_op(OperatorId::LParen) {
                p.resource_specification()?
            } else {
                Vec::new()
            };
            let block = p.block()?;
            let mut catches = Vec::new();
            while p.check_keyword(KeywordId::Catch) {
                catches.push(p.catch_clause()?);
            }
            let finally = if p.eat_keyword(KeywordId::Finally) {
                Some(p.block()?)
            } else {
                None
            };
            if resources.is_empty() && catches.is_empty() && finally.is_none() {
                return Err(p.error_here("expected 'catch' or 'finally'"));
            }
            Ok(Stmt::Try {
                resources,
                block,
                catches,
                finally,
            })
        })
    }

    /// `( Resource {; Resource} [;] )`
    fn resource_specification(&mut self) -> Result<Vec<Located<Resource>>, ParseError> {
        self.expect_op(OperatorId::LParen)?;
        let mut resources = vec![self.resource()?];
        while self.eat_op(OperatorId::Semicolon) {
            if self.check_op(OperatorId::RParen) {
                break;
            }
            resources.push(self.resource()?);
        }
        self.expect_op(OperatorId::RParen)?;
        Ok(resources)
    }

    /// `{VariableModifier} Type Ident = Expression`
    fn resource(&mut self) -> Result<Located<Resource>, ParseError> {
        let position = self.here();
        let modifiers = self.modifiers()?;
        let ty = self.type_()?;
        let name = self.identifier()?;
        self.expect_op(OperatorId::Assign)?;
        let initializer = self.expression()?;
        Ok(Located::new(
            Resource {
                modifiers,
                ty,
                name,
                initializer,
            },
            position,
        ))
    }

    /// `catch ( {VariableModifier} Type {| Type} Ident ) Block`
    fn catch_clause(&mut self) -> Result<Located<CatchClause>, ParseError> {
        self.rule("catch_clause", |p| {
            let position = p.here();
            p.expect_keyword(KeywordId::Catch)?;
            p.expect_op(OperatorId::LParen)?;
            let modifiers = p.modifiers()?;
            let mut types = vec![p.type_()?];
            while p.eat_op(OperatorId::BitOr) {
                types.push(p.type_()?);
            }
            let name = p.identifier()?;
            p.expect_op(OperatorId::RParen)?;
            let block = p.block()?;
            Ok(Located::new(
                CatchClause {
                    modifiers,
                    types,
                    name,
                    block,
                },
                position,
            ))
        })
    }
}
