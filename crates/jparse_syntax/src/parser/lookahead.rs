/// Pure lookahead probes.
///
/// Java is not LL(1): a cast, a lambda, a local variable declaration and a generic method reference
/// all start with tokens that could begin an ordinary expression. The probes in this chunk scan
/// ahead from the cursor without consuming anything and report where a construct would end.
///
/// ## Notes
/// - Offsets are relative to the cursor; peeking past the end yields the end-of-input sentinel, so
///   every probe terminates.
/// - Probe recursion (type arguments nest) is bounded by [`ParseOptions::max_depth`].
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Offset just past a type starting at `offset`, or `None` if no type starts there.
    ///
    /// Accepts primitive and reference types with type arguments and array dimensions; the diamond
    /// `<>` is not a type.
    fn probe_type(&self, offset: usize) -> Option<usize> {
        self.probe_type_bounded(offset, self.options.max_depth)
    }

    fn probe_type_bounded(&self, offset: usize, budget: usize) -> Option<usize> {
        let budget = budget.checked_sub(1)?;
        let mut i = self.probe_annotations(offset);
        match self.look(i).kind {
            TokenKind::BasicType(_) => i += 1,
            TokenKind::Identifier => {
                i += 1;
                loop {
                    if self.check_op_at(i, OperatorId::Lt) {
                        i = self.probe_type_arguments(i, budget)?;
                    }
                    if self.check_op_at(i, OperatorId::Dot) {
                        let name = self.probe_annotations(i + 1);
                        if self.check_identifier_at(name) {
                            i = name + 1;
                            continue;
                        }
                    }
                    break;
                }
            }
            _ => return None,
        }
        Some(self.probe_dims(i))
    }

    /// Offset just past any annotations starting at `offset`.
    fn probe_annotations(&self, mut offset: usize) -> usize {
        while let Some(end) = self.probe_annotation(offset) {
            offset = end;
        }
        offset
    }

    /// Offset just past one annotation starting at `offset`, if one starts there.
    fn probe_annotation(&self, offset: usize) -> Option<usize> {
        if !self.check_annotation_at(offset) || !self.check_identifier_at(offset + 1) {
            return None;
        }
        let mut i = offset + 2;
        while self.check_op_at(i, OperatorId::Dot) && self.check_identifier_at(i + 1) {
            i += 2;
        }
        if self.check_op_at(i, OperatorId::LParen) {
            i = self.probe_matching_paren(i)? + 1;
        }
        Some(i)
    }

    /// `offset` points at `<`; returns the offset just past the matching `>`.
    fn probe_type_arguments(&self, offset: usize, budget: usize) -> Option<usize> {
        let mut i = offset + 1;
        loop {
            if self.check_op_at(i, OperatorId::Question) {
                i += 1;
                let bound = self.look(i).kind;
                if bound.is_keyword(KeywordId::Extends) || bound.is_keyword(KeywordId::Super) {
                    i = self.probe_type_bounded(i + 1, budget)?;
                }
            } else {
                i = self.probe_type_bounded(i, budget)?;
            }
            if self.check_op_at(i, OperatorId::Comma) {
                i += 1;
            } else if self.check_op_at(i, OperatorId::Gt) {
                return Some(i + 1);
            } else {
                return None;
            }
        }
    }

    fn probe_dims(&self, mut i: usize) -> usize {
        loop {
            let bracket = self.probe_annotations(i);
            if !(self.check_op_at(bracket, OperatorId::LBracket) && self.check_op_at(bracket + 1, OperatorId::RBracket)) {
                return i;
            }
            i = bracket + 2;
        }
    }

    /// Offset just past any modifiers and annotations starting at the cursor.
    ///
    /// `synchronized (` is a statement, not a modifier, so it stops the scan.
    fn probe_modifiers(&self) -> usize {
        let mut i = 0;
        loop {
            let token = self.look(i);
            match token.kind {
                TokenKind::Modifier(ModifierId::Synchronized) if self.check_op_at(i + 1, OperatorId::LParen) => {
                    return i;
                }
                TokenKind::Modifier(_) => i += 1,
                TokenKind::Annotation => match self.probe_annotation(i) {
                    Some(end) => i = end,
                    None => return i,
                },
                _ => return i,
            }
        }
    }

    /// `offset` points at `(`; returns the offset of the matching `)`.
    fn probe_matching_paren(&self, offset: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = offset;
        loop {
            match self.look(i).kind {
                TokenKind::Operator(OperatorId::LParen) => depth += 1,
                TokenKind::Operator(OperatorId::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                TokenKind::EndOfInput => return None,
                _ => {}
            }
            i += 1;
        }
    }

    // ========================================================================
    // Disambiguation
    // ========================================================================

    /// `ident ->` or `( ... ) ->`.
    fn is_lambda_ahead(&self) -> bool {
        if self.check_identifier() {
            return self.check_op_at(1, OperatorId::Arrow);
        }
        if self.check_op(OperatorId::LParen) {
            return self
                .probe_matching_paren(0)
                .is_some_and(|close| self.check_op_at(close + 1, OperatorId::Arrow));
        }
        false
    }

    /// At `(`: does a cast follow?
    ///
    /// The parenthesized content must be a type followed by `)`. A primitive type is always a cast;
    /// a reference type (or intersection `A & B`) only when the next token can start a unary
    /// expression other than `+`/`-`.
    fn is_cast_ahead(&self) -> bool {
        if !self.check_op(OperatorId::LParen) {
            return false;
        }
        let Some(mut end) = self.probe_type(1) else {
            return false;
        };
        if matches!(self.look(self.probe_annotations(1)).kind, TokenKind::BasicType(_)) {
            return self.check_op_at(end, OperatorId::RParen);
        }
        while self.check_op_at(end, OperatorId::BitAnd) {
            match self.probe_type(end + 1) {
                Some(next) => end = next,
                None => return false,
            }
        }
        self.check_op_at(end, OperatorId::RParen) && self.starts_cast_operand(end + 1)
    }

    fn starts_cast_operand(&self, offset: usize) -> bool {
        let token = self.look(offset);
        match token.kind {
            TokenKind::Identifier | TokenKind::Literal(_) | TokenKind::BasicType(_) => true,
            TokenKind::Operator(id) => matches!(id, OperatorId::LParen | OperatorId::Bang | OperatorId::Tilde),
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::This | KeywordId::Super | KeywordId::New | KeywordId::Void
            ),
            _ => false,
        }
    }

    /// In statement context: do modifiers/annotations, a type and an identifier follow?
    fn is_local_variable_ahead(&self) -> bool {
        let start = self.probe_modifiers();
        self.probe_type(start)
            .is_some_and(|end| self.check_identifier_at(end))
    }

    /// In statement context: does a local class/interface/enum declaration follow?
    fn is_local_class_ahead(&self) -> bool {
        let start = self.probe_modifiers();
        let kind = self.look(start).kind;
        kind.is_keyword(KeywordId::Class) || kind.is_keyword(KeywordId::Interface) || kind.is_keyword(KeywordId::Enum)
    }

    /// After a method's `(`: `{Annotation} Type [Ident .] this`.
    fn is_receiver_parameter_ahead(&self) -> bool {
        let Some(end) = self.probe_type(self.probe_annotations(0)) else {
            return false;
        };
        let this = if self.check_identifier_at(end) && self.check_op_at(end + 1, OperatorId::Dot) {
            end + 2
        } else {
            end
        };
        self.look(this).kind.is_keyword(KeywordId::This)
    }

    /// In a `for (` header: `[modifiers] Type name :`.
    fn is_for_each_ahead(&self) -> bool {
        let start = self.probe_modifiers();
        self.probe_type(start).is_some_and(|end| {
            self.check_identifier_at(end) && self.check_op_at(self.probe_dims(end + 1), OperatorId::Colon)
        })
    }

    /// In expression context: a type that only reads as a type (`List<String>`, `int[]`) followed
    /// by `::`.
    fn is_type_method_reference_ahead(&self) -> bool {
        let Some(end) = self.probe_type(0) else {
            return false;
        };
        if !self.check_op_at(end, OperatorId::ColonColon) {
            return false;
        }
        matches!(self.peek().kind, TokenKind::BasicType(_))
            || (0..end).any(|i| self.check_op_at(i, OperatorId::Lt) || self.check_op_at(i, OperatorId::LBracket))
    }

    /// Number of adjacent `>` tokens at the cursor that form one shift operator (1, 2 or 3).
    fn gt_run(&self) -> usize {
        let mut run = 1;
        while run < 3
            && self.check_op_at(run, OperatorId::Gt)
            && self.look(run).is_adjacent_to(self.look(run - 1))
        {
            run += 1;
        }
        run
    }
}
