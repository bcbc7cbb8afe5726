/// Declaration parsing methods.
///
/// This chunk covers the compilation unit (package, imports, type declarations), the four kinds of
/// type declaration, class-body members, modifiers and annotations, formal parameters and variable
/// declarators.
///
/// ## Notes
/// - The declaration kind is chosen by the keyword that follows modifiers and annotations.
/// - Inside a class body, `Ident (` is a constructor, `<` starts a generic method or constructor,
///   and anything else is a method (`Type Ident (`) or field (`Type Ident` followed by anything else).
impl<'a> Parser<'a> {
    // ========================================================================
    // Compilation unit
    // ========================================================================

    fn compilation_unit(&mut self) -> Result<CompilationUnit, ParseError> {
        self.rule("compilation_unit", |p| {
            let position = p.here();
            let mut leading = p.modifiers()?;

            let mut package = None;
            if p.check_keyword(KeywordId::Package) {
                if leading.keywords().next().is_some() {
                    return Err(p.error_here("expected type declaration"));
                }
                let annotations = std::mem::take(&mut leading)
                    .items
                    .into_iter()
                    .filter_map(|m| match m.node {
                        Modifier::Annotation(a) => Some(Located::new(a, m.position)),
                        Modifier::Keyword(_) => None,
                    })
                    .collect();
                package = Some(p.package_declaration(annotations, position)?);
            }

            let mut imports = Vec::new();
            if leading.is_empty() {
                while p.check_keyword(KeywordId::Import) {
                    imports.push(p.import_declaration()?);
                }
            }

            let mut types = Vec::new();
            if !leading.is_empty() {
                types.push(p.type_declaration(leading, position)?);
            }
            while !p.is_at_end() {
                if p.eat_op(OperatorId::Semicolon) {
                    continue;
                }
                let position = p.here();
                let modifiers = p.modifiers()?;
                types.push(p.type_declaration(modifiers, position)?);
            }

            Ok(CompilationUnit {
                position,
                package,
                imports,
                types,
            })
        })
    }

    /// `{Annotation} package QualifiedName ;` (annotations already parsed).
    fn package_declaration(
        &mut self,
        annotations: Vec<Located<Annotation>>,
        position: Position,
    ) -> Result<Located<PackageDecl>, ParseError> {
        self.rule("package_declaration", |p| {
            p.expect_keyword(KeywordId::Package)?;
            let name = p.qualified_name()?;
            p.expect_op(OperatorId::Semicolon)?;
            Ok(Located::new(PackageDecl { annotations, name }, position))
        })
    }

    /// `import [static] QualifiedName [. *] ;`
    fn import_declaration(&mut self) -> Result<Located<ImportDecl>, ParseError> {
        self.rule("import_declaration", |p| {
            let position = p.here();
            p.expect_keyword(KeywordId::Import)?;
            let is_static = p.cursor.try_accept(&[ModifierId::Static.into()]).is_some();
            let path = p.qualified_name()?;
            let is_wildcard = if p.eat_op(OperatorId::Dot) {
                p.expect_op(OperatorId::Star)?;
                true
            } else {
                false
            };
            p.expect_op(OperatorId::Semicolon)?;
            Ok(Located::new(
                ImportDecl {
                    path,
                    is_static,
                    is_wildcard,
                },
                position,
            ))
        })
    }

    // ========================================================================
    // Modifiers and annotations
    // ========================================================================

    /// Modifier keywords and annotations in source order.
    fn modifiers(&mut self) -> Result<Modifiers, ParseError> {
        let mut items = Vec::new();
        loop {
            let position = self.here();
            match self.peek().kind {
                TokenKind::Modifier(ModifierId::Synchronized) if self.check_op_at(1, OperatorId::LParen) => break,
                TokenKind::Modifier(id) => {
                    self.advance()?;
                    items.push(Located::new(Modifier::Keyword(id), position));
                }
                TokenKind::Annotation if self.check_annotation() => {
                    let annotation = self.annotation()?;
                    items.push(Located::new(Modifier::Annotation(annotation.node), position));
                }
                _ => break,
            }
        }
        Ok(Modifiers { items })
    }

    /// Zero or more annotations (no modifier keywords).
    fn annotations(&mut self) -> Result<Vec<Located<Annotation>>, ParseError> {
        let mut annotations = Vec::new();
        while self.check_annotation() {
            annotations.push(self.annotation()?);
        }
        Ok(annotations)
    }

    /// `@ QualifiedName [ ( [ElementValuePairs | ElementValue] ) ]`
    fn annotation(&mut self) -> Result<Located<Annotation>, ParseError> {
        self.rule("annotation", |p| {
            let position = p.here();
            p.cursor.accept(&[Pat::Annotation])?;
            let name = p.qualified_name()?;
            let mut arguments = None;
            if p.eat_op(OperatorId::LParen) {
                if p.eat_op(OperatorId::RParen) {
                    arguments = Some(AnnotationArguments::Pairs(Vec::new()));
                } else {
                    let parsed = if p.check_identifier() && p.check_op_at(1, OperatorId::Assign) {
                        AnnotationArguments::Pairs(p.element_value_pairs()?)
                    } else {
                        AnnotationArguments::Single(p.element_value()?)
                    };
                    p.expect_op(OperatorId::RParen)?;
                    arguments = Some(parsed);
                }
            }
            Ok(Located::new(Annotation { name, arguments }, position))
        })
    }

    fn element_value_pairs(&mut self) -> Result<Vec<Located<ElementValuePair>>, ParseError> {
        let mut pairs = Vec::new();
        loop {
            let position = self.here();
            let name = self.identifier()?;
            self.expect_op(OperatorId::Assign)?;
            let value = self.element_value()?;
            pairs.push(Located::new(ElementValuePair { name, value }, position));
            if !self.eat_op(OperatorId::Comma) {
                break;
            }
        }
        Ok(pairs)
    }

    /// `Annotation`, `{ ElementValue {, ElementValue} [,] }` or a conditional expression.
    fn element_value(&mut self) -> Result<Located<ElementValue>, ParseError> {
        self.nested("element_value", |p| {
            let position = p.here();
            if p.check_annotation() {
                let annotation = p.annotation()?;
                return Ok(Located::new(ElementValue::Annotation(Box::new(annotation.node)), position));
            }
            if p.eat_op(OperatorId::LBrace) {
                let mut values = Vec::new();
                while !p.check_op(OperatorId::RBrace) {
                    values.push(p.element_value()?);
                    if !p.eat_op(OperatorId::Comma) {
                        break;
                    }
                }
                p.expect_op(OperatorId::RBrace)?;
                return Ok(Located::new(ElementValue::Array(values), position));
            }
            let expr = p.expression()?;
            Ok(Located::new(ElementValue::Expression(expr.node), position))
        })
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    /// Class, interface, enum or annotation type, chosen by the keyword after the modifiers.
    fn type_declaration(&mut self, modifiers: Modifiers, position: Position) -> Result<Located<TypeDecl>, ParseError> {
        self.rule("type_declaration", |p| {
            let decl = if p.check_keyword(KeywordId::Class) {
                TypeDecl::Class(p.class_declaration(modifiers)?)
            } else if p.check_keyword(KeywordId::Interface) {
                TypeDecl::Interface(p.interface_declaration(modifiers)?)
            } else if p.check_keyword(KeywordId::Enum) {
                TypeDecl::Enum(p.enum_declaration(modifiers)?)
            } else if p.peek().kind == TokenKind::Annotation && p.look(1).kind.is_keyword(KeywordId::Interface) {
                TypeDecl::AnnotationType(p.annotation_type_declaration(modifiers)?)
            } else {
                return Err(p.error_here("expected one of 'class', 'interface', 'enum', '@interface'"));
            };
            Ok(Located::new(decl, position))
        })
    }

    /// `class Ident [TypeParameters] [extends Type] [implements TypeList] ClassBody`
    fn class_declaration(&mut self, modifiers: Modifiers) -> Result<ClassDecl, ParseError> {
        self.rule("class_declaration", |p| {
            p.expect_keyword(KeywordId::Class)?;
            let name = p.identifier()?;
            let type_parameters = p.optional_type_parameters()?;
            let extends = if p.eat_keyword(KeywordId::Extends) {
                Some(p.type_()?)
            } else {
                None
            };
            let implements = if p.eat_keyword(KeywordId::Implements) {
                p.type_list()?
            } else {
                Vec::new()
            };
            let body = p.class_body()?;
            Ok(ClassDecl {
                modifiers,
                name,
                type_parameters,
                extends,
                implements,
                body,
            })
        })
    }

    /// `interface Ident [TypeParameters] [extends TypeList] InterfaceBody`
    fn interface_declaration(&mut self, modifiers: Modifiers) -> Result<InterfaceDecl, ParseError> {
        self.rule("interface_declaration", |p| {
            p.expect_keyword(KeywordId::Interface)?;
            let name = p.identifier()?;
            let type_parameters = p.optional_type_parameters()?;
            let extends = if p.eat_keyword(KeywordId::Extends) {
                p.type_list()?
            } else {
                Vec::new()
            };
            let body = p.class_body()?;
            Ok(InterfaceDecl {
                modifiers,
                name,
                type_parameters,
                extends,
                body,
            })
        })
    }

    /// `enum Ident [implements TypeList] { [EnumConstants] [,] [; ClassBodyDeclarations] }`
    fn enum_declaration(&mut self, modifiers: Modifiers) -> Result<EnumDecl, ParseError> {
        self.rule("enum_declaration", |p| {
            p.expect_keyword(KeywordId::Enum)?;
            let name = p.identifier()?;
            let implements = if p.eat_keyword(KeywordId::Implements) {
                p.type_list()?
            } else {
                Vec::new()
            };
            p.nested("enum_body", |p| {
                p.expect_op(OperatorId::LBrace)?;
                let mut constants = Vec::new();
                while p.check_identifier() || p.check_annotation() {
                    constants.push(p.enum_constant()?);
                    if !p.eat_op(OperatorId::Comma) {
                        break;
                    }
                }
                let mut body = Vec::new();
                if p.eat_op(OperatorId::Semicolon) {
                    body = p.class_body_declarations()?;
                }
                p.expect_op(OperatorId::RBrace)?;
                Ok(EnumDecl {
                    modifiers,
                    name,
                    implements,
                    constants,
                    body,
                })
            })
        })
    }

    /// `{Annotation} Ident [Arguments] [ClassBody]`
    fn enum_constant(&mut self) -> Result<Located<EnumConstant>, ParseError> {
        self.rule("enum_constant", |p| {
            let position = p.here();
            let annotations = p.annotations()?;
            let name = p.identifier()?;
            let arguments = if p.check_op(OperatorId::LParen) {
                Some(p.arguments()?)
            } else {
                None
            };
            let body = if p.check_op(OperatorId::LBrace) {
                Some(p.class_body()?)
            } else {
                None
            };
            Ok(Located::new(
                EnumConstant {
                    annotations,
                    name,
                    arguments,
                    body,
                },
                position,
            ))
        })
    }

    /// `@ interface Ident { {AnnotationTypeElement} }`
    fn annotation_type_declaration(&mut self, modifiers: Modifiers) -> Result<AnnotationTypeDecl, ParseError> {
        self.rule("annotation_type_declaration", |p| {
            p.cursor.accept(&[Pat::Annotation])?;
            p.expect_keyword(KeywordId::Interface)?;
            let name = p.identifier()?;
            let body = p.nested("annotation_type_body", |p| {
                p.expect_op(OperatorId::LBrace)?;
                let mut body = Vec::new();
                while !p.check_op(OperatorId::RBrace) && !p.is_at_end() {
                    if p.eat_op(OperatorId::Semicolon) {
                        continue;
                    }
                    body.push(p.annotation_type_member()?);
                }
                p.expect_op(OperatorId::RBrace)?;
                Ok(body)
            })?;
            Ok(AnnotationTypeDecl { modifiers, name, body })
        })
    }

    /// Element `Type Ident () [default ElementValue] ;`, a constant, or a nested type.
    fn annotation_type_member(&mut self) -> Result<Located<Member>, ParseError> {
        self.rule("annotation_type_member", |p| {
            let position = p.here();
            let modifiers = p.modifiers()?;
            if p.starts_type_declaration() {
                let decl = p.type_declaration(modifiers, position)?;
                return Ok(decl.map(Member::Type));
            }
            let ty = p.type_()?;
            if p.check_identifier() && p.check_op_at(1, OperatorId::LParen) {
                let name = p.identifier()?;
                p.expect_op(OperatorId::LParen)?;
                p.expect_op(OperatorId::RParen)?;
                let extra = p.dims()?;
                let default = if p.cursor.try_accept(&[ModifierId::Default.into()]).is_some() {
                    Some(p.element_value()?)
                } else {
                    None
                };
                p.expect_op(OperatorId::Semicolon)?;
                let ty = ty.map(|t| extra.apply(t));
                return Ok(Located::new(
                    Member::AnnotationElement(AnnotationElementDecl {
                        modifiers,
                        ty,
                        name,
                        default,
                    }),
                    position,
                ));
            }
            let field = p.field_rest(modifiers, ty)?;
            Ok(Located::new(Member::Field(field), position))
        })
    }

    fn starts_type_declaration(&self) -> bool {
        self.check_keyword(KeywordId::Class)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Enum)
            || (self.peek().kind == TokenKind::Annotation && self.look(1).kind.is_keyword(KeywordId::Interface))
    }

    // ========================================================================
    // Class bodies
    // ========================================================================

    /// `{ {ClassBodyDeclaration} }`
    fn class_body(&mut self) -> Result<Vec<Located<Member>>, ParseError> {
        self.nested("class_body", |p| {
            p.expect_op(OperatorId::LBrace)?;
            let members = p.class_body_declarations()?;
            p.expect_op(OperatorId::RBrace)?;
            Ok(members)
        })
    }

    /// Members up to (not including) the closing `}`; stray `;` are skipped.
    fn class_body_declarations(&mut self) -> Result<Vec<Located<Member>>, ParseError> {
        let mut members = Vec::new();
        while !self.check_op(OperatorId::RBrace) && !self.is_at_end() {
            if self.eat_op(OperatorId::Semicolon) {
                continue;
            }
            members.push(self.member_declaration()?);
        }
        Ok(members)
    }

    /// Initializer block, nested type, constructor, method or field.
    fn member_declaration(&mut self) -> Result<Located<Member>, ParseError> {
        self.rule("member_declaration", |p| {
            let position = p.here();

            if p.check_op(OperatorId::LBrace)
                || (p.check_modifier(ModifierId::Static) && p.check_op_at(1, OperatorId::LBrace))
            {
                let is_static = p.cursor.try_accept(&[ModifierId::Static.into()]).is_some();
                let body = p.block()?;
                return Ok(Located::new(
                    Member::Initializer(InitializerDecl { is_static, body }),
                    position,
                ));
            }

            let mut modifiers = p.modifiers()?;
            if p.starts_type_declaration() {
                let decl = p.type_declaration(modifiers, position)?;
                return Ok(decl.map(Member::Type));
            }

            let type_parameters = p.optional_type_parameters()?;
            if !type_parameters.is_empty() {
                for annotation in p.annotations()? {
                    modifiers.items.push(annotation.map(Modifier::Annotation));
                }
            }

            if p.check_identifier() && p.check_op_at(1, OperatorId::LParen) {
                let ctor = p.constructor_rest(modifiers, type_parameters)?;
                return Ok(Located::new(Member::Constructor(ctor), position));
            }

            let return_type = p.type_or_void()?;
            if matches!(return_type.node, Type::Void) || !type_parameters.is_empty() || p.check_op_at(1, OperatorId::LParen) {
                let method = p.method_rest(modifiers, type_parameters, return_type)?;
                return Ok(Located::new(Member::Method(method), position));
            }

            let field = p.field_rest(modifiers, return_type)?;
            Ok(Located::new(Member::Field(field), position))
        })
    }

    /// `Ident FormalParameters [throws TypeList] Block`
    fn constructor_rest(
        &mut self,
        modifiers: Modifiers,
        type_parameters: Vec<Located<TypeParameter>>,
    ) -> Result<ConstructorDecl, ParseError> {
        self.rule("constructor_declaration", |p| {
            let name = p.identifier()?;
            let (receiver, parameters) = p.method_parameters()?;
            let throws = p.throws_clause()?;
            let body = p.block()?;
            Ok(ConstructorDecl {
                modifiers,
                type_parameters,
                name,
                receiver,
                parameters,
                throws,
                body,
            })
        })
    }

    /// `Ident FormalParameters {[]} [throws TypeList] (Block | ;)`
    fn method_rest(
        &mut self,
        modifiers: Modifiers,
        type_parameters: Vec<Located<TypeParameter>>,
        return_type: Located<Type>,
    ) -> Result<MethodDecl, ParseError> {
        self.rule("method_declaration", |p| {
            let name = p.identifier()?;
            let (receiver, parameters) = p.method_parameters()?;
            let extra = p.dims()?;
            let return_type = return_type.map(|t| extra.apply(t));
            let throws = p.throws_clause()?;
            let body = if p.eat_op(OperatorId::Semicolon) {
                None
            } else {
                Some(p.block()?)
            };
            Ok(MethodDecl {
                modifiers,
                type_parameters,
                return_type,
                name,
                receiver,
                parameters,
                throws,
                body,
            })
        })
    }

    /// `VariableDeclarators ;` after a field's type.
    fn field_rest(&mut self, modifiers: Modifiers, ty: Located<Type>) -> Result<FieldDecl, ParseError> {
        self.rule("field_declaration", |p| {
            let declarators = p.variable_declarators(&ty.node)?;
            p.expect_op(OperatorId::Semicolon)?;
            Ok(FieldDecl {
                modifiers,
                ty,
                declarators,
            })
        })
    }

    fn throws_clause(&mut self) -> Result<Vec<Located<Type>>, ParseError> {
        if self.eat_keyword(KeywordId::Throws) {
            self.type_list()
        } else {
            Ok(Vec::new())
        }
    }

    // ========================================================================
    // Parameters and declarators
    // ========================================================================

    /// `( [FormalParameter {, FormalParameter}] )` as in a lambda.
    fn formal_parameters(&mut self) -> Result<Vec<Located<FormalParameter>>, ParseError> {
        self.rule("formal_parameters", |p| {
            p.expect_op(OperatorId::LParen)?;
            let parameters = if p.check_op(OperatorId::RParen) {
                Vec::new()
            } else {
                p.formal_parameter_list()?
            };
            p.expect_op(OperatorId::RParen)?;
            Ok(parameters)
        })
    }

    /// `( [ReceiverParameter] )`, `( ReceiverParameter , FormalParameters )` or `( FormalParameters )`
    /// as in a method or constructor.
    fn method_parameters(
        &mut self,
    ) -> Result<(Option<Located<ReceiverParameter>>, Vec<Located<FormalParameter>>), ParseError> {
        self.rule("formal_parameters", |p| {
            p.expect_op(OperatorId::LParen)?;
            let receiver = if p.is_receiver_parameter_ahead() {
                Some(p.receiver_parameter()?)
            } else {
                None
            };
            let more = match receiver {
                Some(_) => p.eat_op(OperatorId::Comma),
                None => !p.check_op(OperatorId::RParen),
            };
            let parameters = if more { p.formal_parameter_list()? } else { Vec::new() };
            p.expect_op(OperatorId::RParen)?;
            Ok((receiver, parameters))
        })
    }

    /// `FormalParameter {, FormalParameter}`, ending after a variable-arity parameter.
    fn formal_parameter_list(&mut self) -> Result<Vec<Located<FormalParameter>>, ParseError> {
        let mut parameters = Vec::new();
        loop {
            let parameter = self.formal_parameter()?;
            let varargs = parameter.node.varargs;
            parameters.push(parameter);
            if varargs || !self.eat_op(OperatorId::Comma) {
                return Ok(parameters);
            }
        }
    }

    /// `{VariableModifier} Type [{Annotation} ...] Ident Dims`
    fn formal_parameter(&mut self) -> Result<Located<FormalParameter>, ParseError> {
        self.rule("formal_parameter", |p| {
            let position = p.here();
            let modifiers = p.modifiers()?;
            let mut ty = p.type_()?;
            let varargs = p.check_op_at(p.probe_annotations(0), OperatorId::Ellipsis);
            if varargs {
                let annotations = p.annotations()?;
                p.advance()?;
                ty = ty.map(|t| t.with_extra_dimensions(1).with_dimension_annotations(annotations));
            }
            let name = p.identifier()?;
            let extra = p.dims()?;
            Ok(Located::new(
                FormalParameter {
                    modifiers,
                    ty: ty.map(|t| extra.apply(t)),
                    name,
                    varargs,
                },
                position,
            ))
        })
    }

    /// `{Annotation} Type [Ident .] this`
    fn receiver_parameter(&mut self) -> Result<Located<ReceiverParameter>, ParseError> {
        self.rule("receiver_parameter", |p| {
            let position = p.here();
            let annotations = p.annotations()?;
            let ty = p.type_()?;
            let qualifier = if p.check_identifier() {
                let name = p.identifier()?;
                p.expect_op(OperatorId::Dot)?;
                Some(name)
            } else {
                None
            };
            p.expect_keyword(KeywordId::This)?;
            Ok(Located::new(
                ReceiverParameter {
                    annotations,
                    ty,
                    qualifier,
                },
                position,
            ))
        })
    }

    /// `VariableDeclarator {, VariableDeclarator}`; `base` supplies the element type's dimensions.
    fn variable_declarators(&mut self, base: &Type) -> Result<Vec<Located<VariableDeclarator>>, ParseError> {
        let mut declarators = vec![self.variable_declarator(base)?];
        while self.eat_op(OperatorId::Comma) {
            declarators.push(self.variable_declarator(base)?);
        }
        Ok(declarators)
    }

    /// `Ident {[]} [= VariableInitializer]`
    fn variable_declarator(&mut self, base: &Type) -> Result<Located<VariableDeclarator>, ParseError> {
        self.rule("variable_declarator", |p| {
            let position = p.here();
            let name = p.identifier()?;
            let dims = p.dims()?;
            let initializer = if p.eat_op(OperatorId::Assign) {
                Some(p.variable_initializer()?)
            } else {
                None
            };
            Ok(Located::new(
                VariableDeclarator {
                    name,
                    dimensions: base.dimensions() + dims.count,
                    dimension_annotations: dims.annotations,
                    initializer,
                },
                position,
            ))
        })
    }

    /// Array initializer or expression.
    fn variable_initializer(&mut self) -> Result<Located<Expr>, ParseError> {
        if self.check_op(OperatorId::LBrace) {
            self.array_initializer()
        } else {
            self.expression()
        }
    }
}
