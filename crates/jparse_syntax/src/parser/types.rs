/// Type parsing methods.
///
/// This chunk parses type references (primitive and class types with array dimensions), type
/// arguments (explicit lists, wildcards and the creator-only diamond) and type parameters.
///
/// ## Notes
/// - Closing `>` tokens are consumed one at a time; the token contract delivers `>>` as two `>`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// `{Annotation} PrimitiveType Dims` or `ClassType Dims`.
    fn type_(&mut self) -> Result<Located<Type>, ParseError> {
        self.nested("type", |p| {
            let position = p.here();
            let ty = p.element_type(false)?;
            let dims = p.dims()?;
            Ok(Located::new(dims.apply(ty), position))
        })
    }

    /// A type without trailing dimensions; `allow_diamond` as for [`Parser::class_type`].
    fn element_type(&mut self, allow_diamond: bool) -> Result<Type, ParseError> {
        let annotations = self.annotations()?;
        match self.peek().kind {
            TokenKind::BasicType(ty) => {
                self.advance()?;
                Ok(Type::Basic {
                    annotations,
                    ty,
                    dimensions: 0,
                    dimension_annotations: Vec::new(),
                })
            }
            TokenKind::Identifier => Ok(Type::Reference(self.class_type(annotations, allow_diamond)?)),
            _ => Err(self.error_here("expected type")),
        }
    }

    /// A type, or `void` where a method result is expected.
    fn type_or_void(&mut self) -> Result<Located<Type>, ParseError> {
        let position = self.here();
        if self.eat_keyword(KeywordId::Void) {
            Ok(Located::new(Type::Void, position))
        } else {
            self.type_()
        }
    }

    /// `Ident [TypeArgs] { . {Annotation} Ident [TypeArgs] }` without dimensions; `annotations` were
    /// read before the first name.
    ///
    /// `allow_diamond` is set only for the type named in a class instance creation, and `<>` may then
    /// only close the last segment.
    fn class_type(
        &mut self,
        mut annotations: Vec<Located<Annotation>>,
        allow_diamond: bool,
    ) -> Result<ReferenceType, ParseError> {
        let mut segments = Vec::new();
        loop {
            let name = self.identifier()?;
            let arguments = if self.check_op(OperatorId::Lt) {
                Some(self.type_arguments(allow_diamond)?)
            } else {
                None
            };
            let more = self.check_op(OperatorId::Dot) && self.check_identifier_at(self.probe_annotations(1));
            if more && matches!(arguments, Some(TypeArguments::Diamond)) {
                return Err(self.error_here("expected '('"));
            }
            segments.push(TypeSegment {
                annotations,
                name,
                arguments,
            });
            if !more {
                break;
            }
            self.advance()?;
            annotations = self.annotations()?;
        }
        Ok(ReferenceType {
            segments,
            ..ReferenceType::default()
        })
    }

    /// `< TypeArgument {, TypeArgument} >`, or `<>` when `allow_diamond` is set.
    fn type_arguments(&mut self, allow_diamond: bool) -> Result<TypeArguments, ParseError> {
        self.rule("type_arguments", |p| {
            p.expect_op(OperatorId::Lt)?;
            if p.check_op(OperatorId::Gt) {
                if !allow_diamond {
                    return Err(p.error_here("expected type argument"));
                }
                p.advance()?;
                return Ok(TypeArguments::Diamond);
            }
            let mut arguments = vec![p.type_argument()?];
            while p.eat_op(OperatorId::Comma) {
                arguments.push(p.type_argument()?);
            }
            p.expect_op(OperatorId::Gt)?;
            Ok(TypeArguments::List(arguments))
        })
    }

    /// `Type`, `?`, `? extends Type` or `? super Type`.
    fn type_argument(&mut self) -> Result<Located<TypeArgument>, ParseError> {
        let position = self.here();
        if self.eat_op(OperatorId::Question) {
            let bound = if self.eat_keyword(KeywordId::Extends) {
                Some(WildcardBound::Extends(self.type_()?))
            } else if self.eat_keyword(KeywordId::Super) {
                Some(WildcardBound::Super(self.type_()?))
            } else {
                None
            };
            return Ok(Located::new(TypeArgument::Wildcard(bound), position));
        }
        let ty = self.type_()?;
        Ok(Located::new(TypeArgument::Type(ty.node), position))
    }

    /// `Type {, Type}` as in `implements` and `throws` clauses.
    fn type_list(&mut self) -> Result<Vec<Located<Type>>, ParseError> {
        let mut types = vec![self.type_()?];
        while self.eat_op(OperatorId::Comma) {
            types.push(self.type_()?);
        }
        Ok(types)
    }

    // ========================================================================
    // Type parameters
    // ========================================================================

    /// `< TypeParameter {, TypeParameter} >`
    fn type_parameters(&mut self) -> Result<Vec<Located<TypeParameter>>, ParseError> {
        self.rule("type_parameters", |p| {
            p.expect_op(OperatorId::Lt)?;
            let mut parameters = vec![p.type_parameter()?];
            while p.eat_op(OperatorId::Comma) {
                parameters.push(p.type_parameter()?);
            }
            p.expect_op(OperatorId::Gt)?;
            Ok(parameters)
        })
    }

    /// Type parameters if the cursor is at `<`, otherwise an empty list.
    fn optional_type_parameters(&mut self) -> Result<Vec<Located<TypeParameter>>, ParseError> {
        if self.check_op(OperatorId::Lt) {
            self.type_parameters()
        } else {
            Ok(Vec::new())
        }
    }

    /// `{Annotation} Ident [extends Type {& Type}]`
    fn type_parameter(&mut self) -> Result<Located<TypeParameter>, ParseError> {
        let position = self.here();
        let annotations = self.annotations()?;
        let name = self.identifier()?;
        let mut bounds = Vec::new();
        if self.eat_keyword(KeywordId::Extends) {
            bounds.push(self.type_()?);
            while self.eat_op(OperatorId::BitAnd) {
                bounds.push(self.type_()?);
            }
        }
        Ok(Located::new(
            TypeParameter {
                annotations,
                name,
                bounds,
            },
            position,
        ))
    }
}
