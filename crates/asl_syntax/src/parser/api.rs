/// Compile a token stream to output-language text.
///
/// This is the main public entrypoint for parsing. Builtin-form calls are checked against the process-wide type
/// registry when one was loaded via [`crate::types::load`].
///
/// ## Parameters
/// - `tokens`: Token stream produced by `asl_syntax::lexer`.
/// - `pretty`: Emit CRLF line breaks after statements and block openers.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), pretty = pretty))]
pub fn parse(tokens: &[Token], pretty: bool) -> Result<String, ParseError> {
    Parser::new(tokens, EmitConfig::new().with_pretty(pretty))
        .with_registry(types::global())
        .parse()
}
