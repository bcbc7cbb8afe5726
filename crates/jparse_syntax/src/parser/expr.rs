/// Expression parsing methods.
///
/// Expressions are parsed in two stages. This chunk implements stage one: it scans operands (unary
/// expressions with their selectors and postfix operators) and the infix operators between them into
/// a flat [`Item`] sequence, then hands that sequence to [`precedence::fold`].
///
/// ## Notes
/// - A run of adjacent `>` tokens in operator position is fused back into `>>` or `>>>`.
/// - The middle of `a ? b : c` is parsed as a full expression before the sequence is folded.
/// - A dotted name stays a single [`Expr::Name`]; field access is only built on non-name targets.
impl<'a> Parser<'a> {
    // ========================================================================
    // Infix sequence
    // ========================================================================

    fn expression(&mut self) -> Result<Located<Expr>, ParseError> {
        self.nested("expression", |p| {
            let mut items = vec![Item::Operand(Operand::Expr(p.operand()?))];
            while let Some(op) = p.infix_operator()? {
                let operand = if matches!(op, InfixOp::InstanceOf) {
                    Operand::Type(p.type_()?)
                } else {
                    Operand::Expr(p.operand()?)
                };
                items.push(Item::Operator(op));
                items.push(Item::Operand(operand));
            }
            precedence::fold(items)
        })
    }

    /// Consume the infix operator at the cursor, if there is one.
    fn infix_operator(&mut self) -> Result<Option<InfixOp>, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Keyword(KeywordId::Instanceof) => {
                self.advance()?;
                InfixOp::InstanceOf
            }
            TokenKind::Operator(OperatorId::Question) => {
                self.advance()?;
                let middle = self.expression()?;
                self.expect_op(OperatorId::Colon)?;
                InfixOp::Conditional(Box::new(middle))
            }
            TokenKind::Operator(OperatorId::Gt) => {
                let run = self.gt_run();
                for _ in 0..run {
                    self.advance()?;
                }
                InfixOp::Binary(match run {
                    1 => OperatorId::Gt,
                    2 => OperatorId::Shr,
                    _ => OperatorId::Ushr,
                })
            }
            TokenKind::Operator(id) if operators::is_assignment(id) => {
                self.advance()?;
                InfixOp::Assign(id)
            }
            TokenKind::Operator(id) => match operators::precedence_of(id) {
                Some(level) if level > Precedence::Ternary => {
                    self.advance()?;
                    InfixOp::Binary(id)
                }
                _ => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(op))
    }

    fn operand(&mut self) -> Result<Located<Expr>, ParseError> {
        if self.is_lambda_ahead() {
            self.lambda()
        } else {
            self.unary()
        }
    }

    // ========================================================================
    // Unary
    // ========================================================================

    /// Prefix operators, casts, then a primary with selectors and postfix operators.
    fn unary(&mut self) -> Result<Located<Expr>, ParseError> {
        self.nested("unary", |p| {
            let position = p.here();
            if let TokenKind::Operator(
                id @ (OperatorId::PlusPlus
                | OperatorId::MinusMinus
                | OperatorId::Plus
                | OperatorId::Minus
                | OperatorId::Bang
                | OperatorId::Tilde),
            ) = p.peek().kind
            {
                p.advance()?;
                let operand = p.unary()?;
                return Ok(Located::new(
                    Expr::Unary {
                        operator: id,
                        fixity: Fixity::Prefix,
                        operand: Box::new(operand),
                    },
                    position,
                ));
            }

            if p.is_cast_ahead() {
                return p.cast();
            }

            let mut expr = p.primary()?;
            expr = p.selectors(expr)?;
            while let TokenKind::Operator(id @ (OperatorId::PlusPlus | OperatorId::MinusMinus)) = p.peek().kind {
                p.advance()?;
                expr = Located::new(
                    Expr::Unary {
                        operator: id,
                        fixity: Fixity::Postfix,
                        operand: Box::new(expr),
                    },
                    position,
                );
            }
            Ok(expr)
        })
    }

    /// `( Type {& Type} ) operand`
    fn cast(&mut self) -> Result<Located<Expr>, ParseError> {
        self.rule("cast", |p| {
            let position = p.here();
            p.expect_op(OperatorId::LParen)?;
            let ty = p.type_()?;
            let mut additional_bounds = Vec::new();
            while p.eat_op(OperatorId::BitAnd) {
                additional_bounds.push(p.type_()?);
            }
            p.expect_op(OperatorId::RParen)?;
            let expr = p.operand()?;
            Ok(Located::new(
                Expr::Cast {
                    ty,
                    additional_bounds,
                    expr: Box::new(expr),
                },
                position,
            ))
        })
    }

    // ========================================================================
    // Primary
    // ========================================================================

    fn primary(&mut self) -> Result<Located<Expr>, ParseError> {
        self.rule("primary", |p| {
            let position = p.here();
            let token = p.peek();
            let expr = match token.kind {
                TokenKind::Literal(kind) => {
                    p.advance()?;
                    Expr::Literal {
                        kind,
                        text: token.text.clone(),
                    }
                }
                TokenKind::Operator(OperatorId::LParen) => {
                    p.advance()?;
                    let inner = p.expression()?;
                    p.expect_op(OperatorId::RParen)?;
                    Expr::Parenthesized(Box::new(inner))
                }
                TokenKind::Keyword(KeywordId::This) => {
                    p.advance()?;
                    if p.check_op(OperatorId::LParen) {
                        Expr::ConstructorCall {
                            kind: ConstructorCallKind::This,
                            qualifier: None,
                            arguments: p.arguments()?,
                        }
                    } else {
                        Expr::This { qualifier: None }
                    }
                }
                TokenKind::Keyword(KeywordId::Super) => {
                    p.advance()?;
                    p.super_rest(None)?
                }
                TokenKind::Keyword(KeywordId::New) => {
                    p.advance()?;
                    Expr::New(p.creator()?)
                }
                TokenKind::Keyword(KeywordId::Void) => {
                    p.advance()?;
                    p.expect_op(OperatorId::Dot)?;
                    p.expect_keyword(KeywordId::Class)?;
                    Expr::ClassLiteral(Located::new(Type::Void, position))
                }
                TokenKind::BasicType(_) => {
                    let ty = p.type_()?;
                    if p.eat_op(OperatorId::ColonColon) {
                        p.method_reference_rest(MethodReferenceTarget::Type(ty))?
                    } else {
                        p.expect_op(OperatorId::Dot)?;
                        p.expect_keyword(KeywordId::Class)?;
                        Expr::ClassLiteral(ty)
                    }
                }
                TokenKind::Identifier if p.is_type_method_reference_ahead() => {
                    let ty = p.type_()?;
                    p.expect_op(OperatorId::ColonColon)?;
                    p.method_reference_rest(MethodReferenceTarget::Type(ty))?
                }
                TokenKind::Identifier => {
                    let name = p.identifier()?;
                    if p.check_op(OperatorId::LParen) {
                        Expr::MethodInvocation {
                            target: None,
                            type_arguments: None,
                            name,
                            arguments: p.arguments()?,
                        }
                    } else {
                        Expr::name(name)
                    }
                }
                _ => return Err(p.error_here("expected expression")),
            };
            Ok(Located::new(expr, position))
        })
    }

    /// After `super` (or `Outer.super`): `(args)`, `::name`, `.name` or `.name(args)`.
    fn super_rest(&mut self, qualifier: Option<QualifiedName>) -> Result<Expr, ParseError> {
        if qualifier.is_none() && self.check_op(OperatorId::LParen) {
            return Ok(Expr::ConstructorCall {
                kind: ConstructorCallKind::Super,
                qualifier: None,
                arguments: self.arguments()?,
            });
        }
        if self.eat_op(OperatorId::ColonColon) {
            return self.method_reference_rest(MethodReferenceTarget::Super { qualifier });
        }
        if !self.eat_op(OperatorId::Dot) {
            return Err(self.error_here("expected one of '.', '(', '::' after 'super'"));
        }
        let type_arguments = if self.check_op(OperatorId::Lt) {
            Some(self.type_arguments(false)?)
        } else {
            None
        };
        let name = self.identifier()?;
        if self.check_op(OperatorId::LParen) {
            return Ok(Expr::SuperMethodInvocation {
                qualifier,
                type_arguments,
                name,
                arguments: self.arguments()?,
            });
        }
        if type_arguments.is_some() {
            return Err(self.error_here("expected '('"));
        }
        Ok(Expr::SuperFieldAccess { qualifier, name })
    }

    // ========================================================================
    // Selectors
    // ========================================================================

    /// Apply `.name`, `.name(args)`, `.<T>name(args)`, `.this`, `.super...`, `.new Inner(...)`,
    /// `.class`, `[index]` and `::name` to `expr` until none applies.
    fn selectors(&mut self, mut expr: Located<Expr>) -> Result<Located<Expr>, ParseError> {
        let position = expr.position;
        loop {
            if self.check_op(OperatorId::Dot) {
                let next = self.look(1);
                let node = match next.kind {
                    TokenKind::Identifier => {
                        self.advance()?;
                        let name = self.identifier()?;
                        if self.check_op(OperatorId::LParen) {
                            Expr::MethodInvocation {
                                target: Some(Box::new(expr)),
                                type_arguments: None,
                                name,
                                arguments: self.arguments()?,
                            }
                        } else {
                            match expr.node {
                                Expr::Name(mut qualified) => {
                                    qualified.0.push(name);
                                    Expr::Name(qualified)
                                }
                                other => Expr::FieldAccess {
                                    target: Box::new(Located::new(other, position)),
                                    name,
                                },
                            }
                        }
                    }
                    TokenKind::Operator(OperatorId::Lt) => {
                        self.advance()?;
                        let type_arguments = Some(self.type_arguments(false)?);
                        let name = self.identifier()?;
                        Expr::MethodInvocation {
                            target: Some(Box::new(expr)),
                            type_arguments,
                            name,
                            arguments: self.arguments()?,
                        }
                    }
                    TokenKind::Keyword(KeywordId::This) => {
                        let qualifier = self.qualifier_of(expr, 1)?;
                        self.advance()?;
                        self.advance()?;
                        Expr::This {
                            qualifier: Some(qualifier),
                        }
                    }
                    TokenKind::Keyword(KeywordId::Super) if self.check_op_at(2, OperatorId::LParen) => {
                        self.advance()?;
                        self.advance()?;
                        Expr::ConstructorCall {
                            kind: ConstructorCallKind::Super,
                            qualifier: Some(Box::new(expr)),
                            arguments: self.arguments()?,
                        }
                    }
                    TokenKind::Keyword(KeywordId::Super) => {
                        let qualifier = self.qualifier_of(expr, 1)?;
                        self.advance()?;
                        self.advance()?;
                        self.super_rest(Some(qualifier))?
                    }
                    TokenKind::Keyword(KeywordId::Class) => {
                        let qualifier = self.qualifier_of(expr, 1)?;
                        self.advance()?;
                        self.advance()?;
                        Expr::ClassLiteral(Located::new(name_type(qualifier), position))
                    }
                    TokenKind::Keyword(KeywordId::New) => {
                        self.advance()?;
                        self.advance()?;
                        Expr::New(self.inner_creator(expr)?)
                    }
                    _ => {
                        self.advance()?;
                        return Err(self.error_here("expected identifier"));
                    }
                };
                expr = Located::new(node, position);
            } else if self.check_op(OperatorId::LBracket) {
                if self.check_op_at(1, OperatorId::RBracket) {
                    // `Name[]` only continues as `.class` or `::`.
                    let qualifier = self.qualifier_of(expr, 0)?;
                    let ty = Located::new(self.dims()?.apply(name_type(qualifier)), position);
                    let node = if self.eat_op(OperatorId::ColonColon) {
                        self.method_reference_rest(MethodReferenceTarget::Type(ty))?
                    } else {
                        self.expect_op(OperatorId::Dot)?;
                        self.expect_keyword(KeywordId::Class)?;
                        Expr::ClassLiteral(ty)
                    };
                    return Ok(Located::new(node, position));
                }
                self.advance()?;
                let index = self.expression()?;
                self.expect_op(OperatorId::RBracket)?;
                expr = Located::new(
                    Expr::ArrayAccess {
                        array: Box::new(expr),
                        index: Box::new(index),
                    },
                    position,
                );
            } else if self.eat_op(OperatorId::ColonColon) {
                let node = self.method_reference_rest(MethodReferenceTarget::Expr(Box::new(expr)))?;
                return Ok(Located::new(node, position));
            } else {
                return Ok(expr);
            }
        }
    }

    /// The dotted name in `expr`, which must precede `.this`, `.super`, `.class` or `[]`.
    ///
    /// `offset` points at the token the error should be reported on.
    fn qualifier_of(&self, expr: Located<Expr>, offset: usize) -> Result<QualifiedName, ParseError> {
        match expr.node {
            Expr::Name(name) => Ok(name),
            _ => {
                let token = self.look(offset);
                Err(ParseError::syntax("expected identifier", token.describe(), token.position))
            }
        }
    }

    /// After `::`: `[TypeArguments] (Ident | new)`.
    fn method_reference_rest(&mut self, target: MethodReferenceTarget) -> Result<Expr, ParseError> {
        self.rule("method_reference", |p| {
            let type_arguments = if p.check_op(OperatorId::Lt) {
                Some(p.type_arguments(false)?)
            } else {
                None
            };
            let name = if p.eat_keyword(KeywordId::New) {
                MethodReferenceName::New
            } else if p.check_identifier() {
                MethodReferenceName::Method(p.identifier()?)
            } else {
                return Err(p.error_here("expected identifier or 'new'"));
            };
            Ok(Expr::MethodReference {
                target,
                type_arguments,
                name,
            })
        })
    }

    /// `( [Expression {, Expression}] )`
    fn arguments(&mut self) -> Result<Vec<Located<Expr>>, ParseError> {
        self.expect_op(OperatorId::LParen)?;
        let mut arguments = Vec::new();
        if !self.check_op(OperatorId::RParen) {
            arguments = self.expression_list()?;
        }
        self.expect_op(OperatorId::RParen)?;
        Ok(arguments)
    }

    // ========================================================================
    // Lambdas
    // ========================================================================

    /// `x -> body`, `(x, y) -> body` or `(T x, U y) -> body`.
    fn lambda(&mut self) -> Result<Located<Expr>, ParseError> {
        self.rule("lambda", |p| {
            let position = p.here();
            let parameters = if p.check_identifier() {
                LambdaParameters::Single(p.identifier()?)
            } else if p.check_op_at(1, OperatorId::RParen) {
                p.advance()?;
                p.advance()?;
                LambdaParameters::Inferred(Vec::new())
            } else if p.check_identifier_at(1)
                && (p.check_op_at(2, OperatorId::Comma) || p.check_op_at(2, OperatorId::RParen))
            {
                p.expect_op(OperatorId::LParen)?;
                let names = p.identifier_list()?;
                p.expect_op(OperatorId::RParen)?;
                LambdaParameters::Inferred(names)
            } else {
                LambdaParameters::Formal(p.formal_parameters()?)
            };
            p.expect_op(OperatorId::Arrow)?;
            let body = if p.check_op(OperatorId::LBrace) {
                LambdaBody::Block(p.block()?)
            } else {
                LambdaBody::Expression(Box::new(p.expression()?))
            };
            Ok(Located::new(Expr::Lambda { parameters, body }, position))
        })
    }

    // ========================================================================
    // Creators
    // ========================================================================

    /// After `new`: a class instance creation or an array creation.
    fn creator(&mut self) -> Result<Creator, ParseError> {
        self.rule("creator", |p| {
            let position = p.here();
            let element = Located::new(p.element_type(true)?, position);

            if p.check_op_at(p.probe_annotations(0), OperatorId::LBracket) {
                return p.array_creator_rest(element);
            }
            if matches!(element.node, Type::Basic { .. }) {
                return Err(p.error_here("expected '['"));
            }
            if !p.check_op(OperatorId::LParen) {
                return Err(p.error_here("expected '(' or '['"));
            }
            let arguments = p.arguments()?;
            let body = if p.check_op(OperatorId::LBrace) {
                Some(p.class_body()?)
            } else {
                None
            };
            Ok(Creator::Class {
                ty: element,
                arguments,
                body,
            })
        })
    }

    /// `{Annotation} [e1] {{Annotation} [e2]} Dims` or `Dims ArrayInitializer`.
    fn array_creator_rest(&mut self, element: Located<Type>) -> Result<Creator, ParseError> {
        if self.check_op_at(self.probe_annotations(0) + 1, OperatorId::RBracket) {
            let dims = self.dims()?;
            if !self.check_op(OperatorId::LBrace) {
                return Err(self.error_here("expected array initializer"));
            }
            let initializer = self.array_initializer_elements()?;
            return Ok(Creator::Array {
                element,
                dimension_exprs: Vec::new(),
                dimensions: dims.count,
                dimension_annotations: dims.annotations,
                initializer: Some(initializer),
            });
        }

        let mut dimension_exprs = Vec::new();
        let mut dimension_annotations = Vec::new();
        loop {
            let bracket = self.probe_annotations(0);
            if !self.check_op_at(bracket, OperatorId::LBracket) || self.check_op_at(bracket + 1, OperatorId::RBracket) {
                break;
            }
            dimension_annotations.extend(self.annotations()?);
            self.advance()?;
            dimension_exprs.push(self.expression()?);
            self.expect_op(OperatorId::RBracket)?;
        }
        let dims = self.dims()?;
        dimension_annotations.extend(dims.annotations);
        Ok(Creator::Array {
            element,
            dimensions: dimension_exprs.len() + dims.count,
            dimension_exprs,
            dimension_annotations,
            initializer: None,
        })
    }

    /// After `outer.new`: `Ident [TypeArguments] Arguments [ClassBody]`.
    fn inner_creator(&mut self, outer: Located<Expr>) -> Result<Creator, ParseError> {
        self.rule("inner_creator", |p| {
            let name = p.identifier()?;
            let type_arguments = if p.check_op(OperatorId::Lt) {
                Some(p.type_arguments(true)?)
            } else {
                None
            };
            let arguments = p.arguments()?;
            let body = if p.check_op(OperatorId::LBrace) {
                Some(p.class_body()?)
            } else {
                None
            };
            Ok(Creator::Inner {
                outer: Box::new(outer),
                name,
                type_arguments,
                arguments,
                body,
            })
        })
    }

    /// `{ [VariableInitializer {, VariableInitializer}] [,] }`
    fn array_initializer(&mut self) -> Result<Located<Expr>, ParseError> {
        let position = self.here();
        let elements = self.array_initializer_elements()?;
        Ok(Located::new(Expr::ArrayInitializer(elements), position))
    }

    fn array_initializer_elements(&mut self) -> Result<Vec<Located<Expr>>, ParseError> {
        self.nested("array_initializer", |p| {
            p.expect_op(OperatorId::LBrace)?;
            let mut elements = Vec::new();
            while !p.check_op(OperatorId::RBrace) {
                elements.push(p.variable_initializer()?);
                if !p.eat_op(OperatorId::Comma) {
                    break;
                }
            }
            p.expect_op(OperatorId::RBrace)?;
            Ok(elements)
        })
    }
}

/// A dotted name read as a reference type.
fn name_type(name: QualifiedName) -> Type {
    Type::Reference(ReferenceType {
        segments: name.0.into_iter().map(TypeSegment::named).collect(),
        ..ReferenceType::default()
    })
}
