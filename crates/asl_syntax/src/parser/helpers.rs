/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Error construction at the cursor
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Return the token `offset` places after the current one.
    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token is spelled exactly `text`.
    fn check_text(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(text))
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(id))
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_some_and(|t| t.is_punctuation(id))
    }

    /// Return `true` if the token after the current one is `id`.
    fn check_next_punct(&self, id: PunctuationId) -> bool {
        self.peek_at(1).is_some_and(|t| t.is_punctuation(id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<(), ParseError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.error_here(keywords::as_str(id)))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<(), ParseError> {
        if self.match_punct(id) {
            Ok(())
        } else {
            Err(self.error_here(punctuation::as_str(id)))
        }
    }

    /// Consume a name-like token: anything but a delimiter or a directive.
    fn identifier(&mut self, what: &str) -> Result<&'a str, ParseError> {
        match self.peek() {
            Some(token) if !token.is_directive && token.punctuation_id().is_none() => {
                self.pos += 1;
                Ok(&token.text)
            }
            _ => Err(self.error_here(what)),
        }
    }

    /// Consume a quoted string literal token.
    fn string_literal(&mut self) -> Result<&'a str, ParseError> {
        match self.peek() {
            Some(token) if token.is_string_literal() => {
                self.pos += 1;
                Ok(&token.text)
            }
            _ => Err(self.error_here("string literal")),
        }
    }

    /// Error for "expected `expected`" at the cursor.
    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected(expected, token),
            None => ParseError::eof(expected),
        }
    }
}
