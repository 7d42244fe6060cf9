/// Parser state.
///
/// ## Notes
/// - One instance compiles one unit; inline `code("...")` bodies get a nested instance of their own.
/// - The cursor only moves forward and the output is append-only.
/// - Parsing stops at the first error.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    out: OutputWriter,
    registry: Option<&'a TypeRegistry>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `asl_syntax::lexer`.
    /// - `config`: Output layout.
    pub fn new(tokens: &'a [Token], config: EmitConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            out: OutputWriter::new(config),
            registry: None,
        }
    }

    /// Attach a builtin type registry, consulted for diagnostics on two-sided calls.
    pub fn with_registry(mut self, registry: Option<&'a TypeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Compile the entire token stream.
    ///
    /// An empty token stream yields empty output.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`]; no partial output is returned.
    pub fn parse(mut self) -> Result<String, ParseError> {
        self.block()?;
        if !self.is_at_end() {
            // A block only stops early at `}`, `case` or `default`, none of which may appear here.
            return Err(self.error_here("end of input"));
        }
        Ok(self.out.finish())
    }
}
