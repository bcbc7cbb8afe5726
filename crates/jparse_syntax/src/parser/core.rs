/// Parser core types and entry methods.
///
/// This chunk defines [`Parser`], its configuration ([`ParseOptions`]) and the optional procedure
/// trace ([`TraceEvent`]), plus the `rule` / `nested` wrappers every grammar procedure runs through.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Default bound on nested expression, statement, block, type and body productions.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default bound, in bytes, on the call stack one parse may grow by: half of the 2 MiB stack Rust
/// gives spawned threads.
pub const DEFAULT_STACK_BUDGET: usize = 1024 * 1024;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of expression / statement / type / body productions before the parse fails
    /// with "nesting too deep".
    pub max_depth: usize,
    /// Maximum call-stack growth, in bytes, before the parse fails with "nesting too deep". Guards
    /// debug builds, where a single nesting level can cost tens of kilobytes of stack.
    pub stack_budget: usize,
    /// Record a [`TraceEvent`] on entry to and exit from every grammar procedure.
    pub record_trace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            stack_budget: DEFAULT_STACK_BUDGET,
            record_trace: false,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_stack_budget(mut self, stack_budget: usize) -> Self {
        self.stack_budget = stack_budget;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePhase {
    Enter,
    Exit,
}

/// One grammar-procedure boundary, recorded when [`ParseOptions::record_trace`] is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub procedure: &'static str,
    pub phase: TracePhase,
    /// Token index at the time of the event.
    pub cursor: usize,
}

/// Parser state.
///
/// ## Notes
/// - The parser owns only a cursor over a borrowed token slice; independent parsers can run on
///   different threads.
/// - Grammar procedures are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    options: ParseOptions,
    depth: usize,
    /// Stack address at the outermost nested production.
    stack_base: usize,
    trace: Vec<TraceEvent>,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options.
    ///
    /// ## Errors
    /// - A syntax error if `tokens` does not end with exactly one end-of-input token.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Result<Self, ParseError> {
        Ok(Self {
            cursor: TokenCursor::new(tokens)?,
            options,
            depth: 0,
            stack_base: 0,
            trace: Vec::new(),
        })
    }

    /// Events recorded so far (empty unless tracing is enabled).
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<TraceEvent> {
        self.trace
    }

    /// Parse the whole token stream as a compilation unit.
    pub fn parse_compilation_unit(&mut self) -> Result<CompilationUnit, ParseError> {
        let result = self.compilation_unit();
        self.log_failure(result)
    }

    /// Parse exactly one expression followed by end of input.
    pub fn parse_expression(&mut self) -> Result<Located<Expr>, ParseError> {
        let result = self.expression().and_then(|e| self.expect_end().map(|_| e));
        self.log_failure(result)
    }

    /// Parse exactly one block statement (declarations included) followed by end of input.
    pub fn parse_statement(&mut self) -> Result<Located<Stmt>, ParseError> {
        let result = self.block_statement().and_then(|s| self.expect_end().map(|_| s));
        self.log_failure(result)
    }

    /// Parse exactly one type (or `void`) followed by end of input.
    pub fn parse_type(&mut self) -> Result<Located<Type>, ParseError> {
        let result = self.type_or_void().and_then(|t| self.expect_end().map(|_| t));
        self.log_failure(result)
    }

    /// Parse exactly one `{ ... }` block followed by end of input.
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let result = self.block().and_then(|b| self.expect_end().map(|_| b));
        self.log_failure(result)
    }

    /// Parse exactly one class-body member (field, method, constructor, initializer or nested type).
    pub fn parse_member(&mut self) -> Result<Located<Member>, ParseError> {
        let result = self.member_declaration().and_then(|m| self.expect_end().map(|_| m));
        self.log_failure(result)
    }

    fn log_failure<T>(&self, result: Result<T, ParseError>) -> Result<T, ParseError> {
        if let Err(error) = &result {
            tracing::debug!(target: "jparse::grammar", %error, cursor = self.cursor.index(), "parse failed");
        }
        result
    }

    // ========================================================================
    // Procedure wrappers
    // ========================================================================

    /// Run one grammar procedure, recording entry and exit when tracing is on.
    fn rule<T>(
        &mut self,
        procedure: &'static str,
        body: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if !self.options.record_trace {
            return body(self);
        }
        self.record(procedure, TracePhase::Enter);
        let result = body(self);
        self.record(procedure, TracePhase::Exit);
        result
    }

    /// Like [`Parser::rule`], and also counts against [`ParseOptions::max_depth`] and
    /// [`ParseOptions::stack_budget`].
    fn nested<T>(
        &mut self,
        procedure: &'static str,
        body: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let here = stack_address();
        if self.depth == 0 {
            self.stack_base = here;
        }
        if self.depth >= self.options.max_depth || self.stack_base.abs_diff(here) > self.options.stack_budget {
            return Err(self.error_here("nesting too deep"));
        }
        self.depth += 1;
        let result = self.rule(procedure, body);
        self.depth -= 1;
        result
    }

    fn record(&mut self, procedure: &'static str, phase: TracePhase) {
        let cursor = self.cursor.index();
        tracing::trace!(target: "jparse::grammar", procedure, ?phase, cursor);
        self.trace.push(TraceEvent { procedure, phase, cursor });
    }
}

/// Address of a local in the caller's frame; differences between two calls measure stack growth.
#[inline(always)]
fn stack_address() -> usize {
    let marker = 0u8;
    std::hint::black_box(&marker) as *const u8 as usize
}
