/// Parse a token stream into a [`CompilationUnit`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `jparse_syntax::lexer` or any producer honouring the same
///   token contract, terminated by exactly one end-of-input token.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<CompilationUnit, ParseError> {
    Parser::new(tokens)?.parse_compilation_unit()
}

/// Parse a compilation unit with explicit options, returning the recorded trace alongside the tree.
///
/// The trace is empty unless [`ParseOptions::record_trace`] is set.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_options(
    tokens: &[Token],
    options: ParseOptions,
) -> Result<(CompilationUnit, Vec<TraceEvent>), ParseError> {
    let mut parser = Parser::with_options(tokens, options)?;
    let unit = parser.parse_compilation_unit()?;
    Ok((unit, parser.into_trace()))
}

/// Parse a single expression.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_expression(tokens: &[Token]) -> Result<Located<Expr>, ParseError> {
    Parser::new(tokens)?.parse_expression()
}

/// Parse a single block statement, local declarations included.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_statement(tokens: &[Token]) -> Result<Located<Stmt>, ParseError> {
    Parser::new(tokens)?.parse_statement()
}

/// Parse a single type, or `void`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_type(tokens: &[Token]) -> Result<Located<Type>, ParseError> {
    Parser::new(tokens)?.parse_type()
}

/// Parse a single `{ ... }` block.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_block(tokens: &[Token]) -> Result<Block, ParseError> {
    Parser::new(tokens)?.parse_block()
}

/// Parse a single class-body member.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_member(tokens: &[Token]) -> Result<Located<Member>, ParseError> {
    Parser::new(tokens)?.parse_member()
}
