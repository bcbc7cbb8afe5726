/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking (`peek`, `look`, `here`) without consuming
/// - Checking / eating / expecting keywords, modifiers and operators
/// - Identifier and qualified-name parsing
///
/// Everything here delegates to the [`TokenCursor`]; no procedure touches the token slice directly.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn peek(&self) -> &'a Token {
        self.cursor.peek()
    }

    fn look(&self, offset: usize) -> &'a Token {
        self.cursor.look(offset)
    }

    /// Position of the current token.
    fn here(&self) -> Position {
        self.peek().position
    }

    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    fn error_here(&self, description: impl Into<String>) -> ParseError {
        self.cursor.error_here(description)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn check_op_at(&self, offset: usize, id: OperatorId) -> bool {
        self.look(offset).kind.is_operator(id)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_modifier(&self, id: ModifierId) -> bool {
        self.peek().kind.is_modifier(id)
    }

    fn check_identifier(&self) -> bool {
        self.peek().kind == TokenKind::Identifier
    }

    fn check_identifier_at(&self, offset: usize) -> bool {
        self.look(offset).kind == TokenKind::Identifier
    }

    /// `@` that starts an annotation rather than `@interface`.
    fn check_annotation(&self) -> bool {
        self.check_annotation_at(0)
    }

    fn check_annotation_at(&self, offset: usize) -> bool {
        self.look(offset).kind == TokenKind::Annotation && !self.look(offset + 1).kind.is_keyword(KeywordId::Interface)
    }

    fn eat_op(&mut self, id: OperatorId) -> bool {
        self.cursor.try_accept(&[id.into()]).is_some()
    }

    fn eat_keyword(&mut self, id: KeywordId) -> bool {
        self.cursor.try_accept(&[id.into()]).is_some()
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<&'a Token, ParseError> {
        self.cursor.accept(&[id.into()])
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&'a Token, ParseError> {
        self.cursor.accept(&[id.into()])
    }

    fn advance(&mut self) -> Result<&'a Token, ParseError> {
        self.cursor.advance()
    }

    /// Require that every token has been consumed.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        self.cursor.accept(&[Pat::EndOfInput]).map(|_| ())
    }

    // ========================================================================
    // Names
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, ParseError> {
        Ok(self.cursor.accept(&[Pat::Identifier])?.text.clone())
    }

    /// `Ident { . Ident }`, stopping before a `.` that is not followed by an identifier.
    fn qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let mut segments = vec![self.identifier()?];
        while self.check_op(OperatorId::Dot) && self.check_identifier_at(1) {
            self.advance()?;
            segments.push(self.identifier()?);
        }
        Ok(QualifiedName(segments))
    }

    /// `Ident { , Ident }`
    fn identifier_list(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut names = vec![self.identifier()?];
        while self.eat_op(OperatorId::Comma) {
            names.push(self.identifier()?);
        }
        Ok(names)
    }

    /// Consume `{Annotation} []` pairs at the cursor.
    fn dims(&mut self) -> Result<Dims, ParseError> {
        let mut dims = Dims::default();
        loop {
            let bracket = self.probe_annotations(0);
            if !(self.check_op_at(bracket, OperatorId::LBracket) && self.check_op_at(bracket + 1, OperatorId::RBracket)) {
                return Ok(dims);
            }
            dims.annotations.extend(self.annotations()?);
            self.advance()?;
            self.advance()?;
            dims.count += 1;
        }
    }
}

/// `[]` pairs read by [`Parser::dims`] and the annotations written before them.
#[derive(Debug, Default)]
struct Dims {
    count: usize,
    annotations: Vec<Located<Annotation>>,
}

impl Dims {
    /// `ty` with these pairs appended.
    fn apply(self, ty: Type) -> Type {
        ty.with_extra_dimensions(self.count).with_dimension_annotations(self.annotations)
    }
}
