/// Expression parsing.
///
/// Expressions are returned as text rather than written directly, since calls, array selects and `foreach` need to
/// place them inside surrounding output.
///
/// ## Notes
/// - The grammar is flat: an expression is `term (op term)*` over every binary operator, comparisons and logical
///   operators included. Operands are echoed without added parentheses, so no precedence is decided here; the output
///   language applies its own.
/// - The operator chain is a loop, so its length does not grow the call stack. Only brackets, calls and inline code
///   recurse.
/// - Operators are emitted without surrounding spaces.
impl<'a> Parser<'a> {
    // ========================================================================
    // Operator chain
    // ========================================================================

    fn expression(&mut self) -> Result<String, ParseError> {
        let mut output = self.term()?;
        while let Some(op) = self.binary_operator()? {
            output.push_str(&op);
            output.push_str(&self.term()?);
        }
        Ok(output)
    }

    /// Consume a binary operator, if one starts here.
    fn binary_operator(&mut self) -> Result<Option<String>, ParseError> {
        let arithmetic = [
            (PunctuationId::Plus, "+"),
            (PunctuationId::Minus, "-"),
            (PunctuationId::Star, "*"),
            (PunctuationId::Slash, "/"),
        ];
        for (id, text) in arithmetic {
            if self.match_punct(id) {
                return Ok(Some(String::from(text)));
            }
        }
        self.relational_operator()
    }

    /// Consume a comparison or logical operator, if one starts here.
    ///
    /// `&&`, `||` and `!=` arrive as two delimiter tokens. Any operator may be followed by `=` (`<=`, `==`).
    fn relational_operator(&mut self) -> Result<Option<String>, ParseError> {
        let mut op = if self.match_punct(PunctuationId::Lt) {
            String::from("<")
        } else if self.match_punct(PunctuationId::Gt) {
            String::from(">")
        } else if self.match_punct(PunctuationId::Amp) {
            self.expect_punct(PunctuationId::Amp)?;
            String::from("&&")
        } else if self.match_punct(PunctuationId::Pipe) {
            self.expect_punct(PunctuationId::Pipe)?;
            String::from("||")
        } else if self.match_punct(PunctuationId::Assign) {
            String::from("=")
        } else if self.match_punct(PunctuationId::Bang) {
            self.expect_punct(PunctuationId::Assign)?;
            String::from("!=")
        } else {
            return Ok(None);
        };

        if self.match_punct(PunctuationId::Assign) {
            op.push('=');
        }
        Ok(Some(op))
    }

    // ========================================================================
    // Terms
    // ========================================================================

    fn term(&mut self) -> Result<String, ParseError> {
        if self.match_punct(PunctuationId::LParen) {
            let inner = self.expression()?;
            self.expect_punct(PunctuationId::RParen)?;
            return Ok(format!("({inner})"));
        }
        if self.check_punct(PunctuationId::LBracket) {
            return self.array_literal();
        }
        self.identifier_expr()
    }

    /// `[e1, e2, ...]`, emitted as `[e1,e2,...]`.
    fn array_literal(&mut self) -> Result<String, ParseError> {
        self.expect_punct(PunctuationId::LBracket)?;
        let mut items = Vec::new();
        if !self.check_punct(PunctuationId::RBracket) {
            items.push(self.expression()?);
            while self.match_punct(PunctuationId::Comma) {
                items.push(self.expression()?);
            }
        }
        self.expect_punct(PunctuationId::RBracket)?;
        Ok(format!("[{}]", items.join(",")))
    }

    /// Resolve a term by lookahead: inline code, call, array select, unary operator or a plain token.
    fn identifier_expr(&mut self) -> Result<String, ParseError> {
        if self.check_keyword(KeywordId::Code) {
            return self.inline_code();
        }

        let is_unary = self.check_punct(PunctuationId::Bang) || self.check_punct(PunctuationId::Minus);

        if !is_unary && self.check_next_punct(PunctuationId::LParen) {
            let name = self.identifier("function name")?;
            let call = self.call(name)?;
            return Ok(format!("({call})"));
        }

        if !is_unary && self.check_next_punct(PunctuationId::LBracket) {
            let name = self.identifier("array name")?;
            self.expect_punct(PunctuationId::LBracket)?;
            let index = self.expression()?;
            self.expect_punct(PunctuationId::RBracket)?;
            return Ok(format!("({name} select ({index}))"));
        }

        if is_unary {
            let op = self.advance().map(|t| t.text.as_str()).unwrap_or_default();
            let operand = self.term()?;
            return Ok(format!("{op}{operand}"));
        }

        Ok(self.identifier("expression")?.to_string())
    }

    // ========================================================================
    // Calls
    // ========================================================================

    /// Parse `name(args)` or `name(left)(right)` after the name; the result is not parenthesised.
    ///
    /// A single argument list is a call of user code (`[args] call name`). A second list directly after the first
    /// makes it a builtin command in operator form: `left name right`, where a side with several arguments becomes
    /// an array and an empty side is left out.
    fn call(&mut self, name: &str) -> Result<String, ParseError> {
        self.expect_punct(PunctuationId::LParen)?;
        let left = self.arguments()?;
        self.expect_punct(PunctuationId::RParen)?;

        if !self.match_punct(PunctuationId::LParen) {
            return Ok(format!("[{}] call {name}", left.join(", ")));
        }

        let right = self.arguments()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.check_builtin(name, left.len(), right.len());

        let mut parts = Vec::with_capacity(3);
        if !left.is_empty() {
            parts.push(operand(&left));
        }
        parts.push(name.to_string());
        if !right.is_empty() {
            parts.push(operand(&right));
        }
        Ok(parts.join(" "))
    }

    /// Comma-separated expressions up to (not including) `)`.
    fn arguments(&mut self) -> Result<Vec<String>, ParseError> {
        let mut args = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            args.push(self.expression()?);
            if !self.match_punct(PunctuationId::Comma) && !self.check_punct(PunctuationId::RParen) {
                return Err(self.error_here(")"));
            }
        }
        Ok(args)
    }

    /// Compare a builtin-form call against the registry. Only logs; the emitted shape never depends on it.
    fn check_builtin(&self, name: &str, left: usize, right: usize) {
        let Some(registry) = self.registry else {
            return;
        };
        let signatures = registry.lookup_all(name);
        if signatures.is_empty() {
            tracing::debug!(name, "builtin call form used for a name the type registry does not know");
        } else if !signatures.iter().any(|sig| sig.accepts(left, right)) {
            tracing::debug!(name, left, right, "no registered signature takes these operand counts");
        }
    }

    // ========================================================================
    // Inline code
    // ========================================================================

    /// `code("...")`: compile the string body as its own unit and splice it as `{...}`.
    fn inline_code(&mut self) -> Result<String, ParseError> {
        self.expect_keyword(KeywordId::Code)?;
        self.expect_punct(PunctuationId::LParen)?;
        let literal = self.string_literal()?;
        self.expect_punct(PunctuationId::RParen)?;

        let body = &literal[1..literal.len() - 1];
        if body.is_empty() {
            return Ok(String::from("{}"));
        }

        tracing::debug!(len = body.len(), "compiling inline code");
        let tokens = lexer::tokenize(body.as_bytes(), true);
        let inner = Parser::new(&tokens, EmitConfig::dense())
            .with_registry(self.registry)
            .parse()?;
        Ok(format!("{{{inner}}}"))
    }
}

/// One side of a builtin form: a single argument as is, several as an array.
fn operand(args: &[String]) -> String {
    if args.len() > 1 {
        format!("[{}]", args.join(", "))
    } else {
        args.join(", ")
    }
}
