/// Statement productions.
///
/// Every production validates its tokens and emits the output text for them in the same pass. Block bodies are
/// emitted by [`Parser::block`], which stops (without consuming) at `}`, `case`, `default` or the end of input.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    fn block(&mut self) -> Result<(), ParseError> {
        while !self.is_block_end() {
            self.statement()?;
        }
        Ok(())
    }

    fn is_block_end(&self) -> bool {
        self.is_at_end()
            || self.check_punct(PunctuationId::RBrace)
            || self.check_keyword(KeywordId::Case)
            || self.check_keyword(KeywordId::Default)
    }

    /// `{` block `}` with the braces validated but not emitted.
    fn braced_block(&mut self) -> Result<(), ParseError> {
        self.expect_punct(PunctuationId::LBrace)?;
        self.block()?;
        self.expect_punct(PunctuationId::RBrace)
    }

    fn statement(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.peek() else {
            return Ok(());
        };
        if token.is_directive {
            return self.directive();
        }

        match token.keyword_id() {
            Some(KeywordId::Var) => self.var_decl(),
            Some(KeywordId::If) => self.if_stmt(),
            Some(KeywordId::While) => self.while_stmt(),
            Some(KeywordId::Switch) => self.switch_stmt(),
            Some(KeywordId::For) => self.for_stmt(),
            Some(KeywordId::Foreach) => self.foreach_stmt(),
            Some(KeywordId::Func) => self.func_def(),
            Some(KeywordId::Return) => self.return_stmt(),
            Some(KeywordId::Try) => self.try_catch(),
            Some(KeywordId::ExitWith) => self.exit_with(),
            Some(KeywordId::WaitUntil) => self.wait_until(),
            _ => self.assignment_or_call(),
        }
    }

    /// Preprocessor lines always sit on a line of their own.
    fn directive(&mut self) -> Result<(), ParseError> {
        if let Some(token) = self.advance() {
            self.out.line_break();
            self.out.write(&token.text);
            self.out.line_break();
        }
        Ok(())
    }

    // ========================================================================
    // Declarations and assignments
    // ========================================================================

    fn var_decl(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Var)?;
        let name = self.identifier("identifier")?;
        self.out.write(name);

        if self.match_punct(PunctuationId::Assign) {
            self.out.write(" = ");
            let value = self.expression()?;
            self.out.write(&value);
        }

        self.expect_punct(PunctuationId::Semicolon)?;
        self.out.writeln(";");
        Ok(())
    }

    /// `name = expr;` or a statement-level call `name(...)[(...)];`.
    fn assignment_or_call(&mut self) -> Result<(), ParseError> {
        let name = self.identifier("statement")?;

        if self.match_punct(PunctuationId::Assign) {
            self.out.write(name);
            self.out.write(" = ");
            let value = self.expression()?;
            self.out.write(&value);
        } else {
            // Statement-level calls are not parenthesised.
            let call = self.call(name)?;
            self.out.write(&call);
        }

        self.expect_punct(PunctuationId::Semicolon)?;
        self.out.writeln(";");
        Ok(())
    }

    fn func_def(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Func)?;
        let name = self.identifier("function name")?;
        self.out.write(name);
        self.out.writeln(" = {");

        self.expect_punct(PunctuationId::LParen)?;
        self.parameters()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.braced_block()?;

        self.out.writeln("};");
        Ok(())
    }

    /// Emit the `params [...]` prologue; an empty list emits nothing.
    fn parameters(&mut self) -> Result<(), ParseError> {
        let mut entries = Vec::new();

        while !self.check_punct(PunctuationId::RParen) {
            let name = self.identifier("parameter name")?;
            if self.match_punct(PunctuationId::Assign) {
                let value = self.default_value()?;
                entries.push(format!("[\"{name}\",{value}]"));
            } else {
                entries.push(format!("\"{name}\""));
            }

            if !self.match_punct(PunctuationId::Comma) && !self.check_punct(PunctuationId::RParen) {
                return Err(self.error_here(")"));
            }
        }

        if !entries.is_empty() {
            self.out.write("params [");
            self.out.write(&entries.join(","));
            self.out.writeln("];");
        }
        Ok(())
    }

    /// A single literal token, optionally negated.
    fn default_value(&mut self) -> Result<String, ParseError> {
        let negative = self.match_punct(PunctuationId::Minus);
        let value = self.identifier("default value")?;
        Ok(if negative { format!("-{value}") } else { value.to_string() })
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    fn if_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::If)?;
        let condition = self.expression()?;
        self.out.write("if (");
        self.out.write(&condition);
        self.out.writeln(") then {");
        self.braced_block()?;

        // `else` is matched by text; it is not a reserved word.
        if self.check_text("else") {
            self.pos += 1;
            self.out.writeln("} else {");
            self.braced_block()?;
        }

        self.out.writeln("};");
        Ok(())
    }

    fn while_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::While)?;
        let condition = self.expression()?;
        self.out.write("while {");
        self.out.write(&condition);
        self.out.writeln("} do {");
        self.braced_block()?;
        // No line break after a while loop, even when pretty-printing.
        self.out.write("};");
        Ok(())
    }

    fn switch_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Switch)?;
        let subject = self.expression()?;
        self.out.write("switch (");
        self.out.write(&subject);
        self.out.writeln(") do {");

        self.expect_punct(PunctuationId::LBrace)?;
        self.switch_arms()?;
        self.expect_punct(PunctuationId::RBrace)?;

        self.out.writeln("};");
        Ok(())
    }

    /// `case expr:` / `default:` arms up to the closing `}`; non-empty bodies get their own block.
    fn switch_arms(&mut self) -> Result<(), ParseError> {
        while !self.check_punct(PunctuationId::RBrace) {
            if self.match_keyword(KeywordId::Case) {
                let value = self.expression()?;
                self.expect_punct(PunctuationId::Colon)?;
                self.out.write("case ");
                self.out.write(&value);
                self.out.writeln(":");

                if !self.is_block_end() {
                    self.arm_body()?;
                }
            } else if self.match_keyword(KeywordId::Default) {
                self.expect_punct(PunctuationId::Colon)?;
                self.out.writeln("default:");

                if !self.check_punct(PunctuationId::RBrace) {
                    self.arm_body()?;
                }
            } else if self.is_at_end() {
                return Err(ParseError::eof("}"));
            } else {
                return Err(self.error_here("case"));
            }
        }
        Ok(())
    }

    fn arm_body(&mut self) -> Result<(), ParseError> {
        self.out.writeln("{");
        self.block()?;
        self.out.writeln("};");
        Ok(())
    }

    fn for_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::For)?;
        // `var` in the initialiser is optional and dropped.
        self.match_keyword(KeywordId::Var);

        let init = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        let step = self.expression()?;

        self.out.write(&format!("for [{{{init}}}, {{{condition}}}, {{{step}}}] do {{"));
        self.out.writeln("");
        self.braced_block()?;
        self.out.writeln("};");
        Ok(())
    }

    /// `foreach [name =>] expr { ... }`; the optional binding names the loop variable.
    fn foreach_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Foreach)?;

        let binding = if self.is_foreach_binding() {
            let name = self.identifier("identifier")?;
            self.expect_punct(PunctuationId::Assign)?;
            self.expect_punct(PunctuationId::Gt)?;
            Some(name)
        } else {
            None
        };

        let collection = self.expression()?;
        self.expect_punct(PunctuationId::LBrace)?;
        self.out.writeln("{");
        if let Some(name) = binding {
            self.out.write(name);
            self.out.writeln(" = _x;");
        }
        self.block()?;
        self.expect_punct(PunctuationId::RBrace)?;

        self.out.write("} forEach (");
        self.out.write(&collection);
        self.out.writeln(");");
        Ok(())
    }

    fn is_foreach_binding(&self) -> bool {
        self.peek_at(1).is_some_and(|t| t.is_punctuation(PunctuationId::Assign))
            && self.peek_at(2).is_some_and(|t| t.is_punctuation(PunctuationId::Gt))
    }

    fn return_stmt(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Return)?;
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        self.out.write("return ");
        self.out.write(&value);
        self.out.writeln(";");
        Ok(())
    }

    fn try_catch(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::Try)?;
        self.expect_punct(PunctuationId::LBrace)?;
        self.out.writeln("try {");
        self.block()?;
        self.expect_punct(PunctuationId::RBrace)?;

        self.expect_keyword(KeywordId::Catch)?;
        self.expect_punct(PunctuationId::LBrace)?;
        self.out.writeln("} catch {");
        self.block()?;
        self.expect_punct(PunctuationId::RBrace)?;

        self.out.writeln("};");
        Ok(())
    }

    fn exit_with(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::ExitWith)?;
        self.expect_punct(PunctuationId::LBrace)?;
        self.out.writeln("if (true) exitWith {");
        self.block()?;
        self.expect_punct(PunctuationId::RBrace)?;
        self.out.writeln("};");
        Ok(())
    }

    fn wait_until(&mut self) -> Result<(), ParseError> {
        self.expect_keyword(KeywordId::WaitUntil)?;
        self.expect_punct(PunctuationId::LParen)?;
        let mut condition = self.expression()?;
        if self.match_punct(PunctuationId::Semicolon) {
            condition.push(';');
            condition.push_str(&self.expression()?);
        }
        self.expect_punct(PunctuationId::RParen)?;
        self.expect_punct(PunctuationId::Semicolon)?;

        self.out.write("waitUntil {");
        self.out.write(&condition);
        self.out.writeln("};");
        Ok(())
    }
}
