//! Lexer for the asl language
//!
//! Handles tokenization including:
//! - Comment removal (`//` and `/* */`) outside string literals
//! - Single-byte delimiters (`= ; { } ( ) [ ] < > ! , : & | + - * /`)
//! - String literals kept verbatim with their escapes
//! - Preprocessor directive lines (`#define ...`) as whole-line tokens
//!
//! Lexing never fails: unterminated strings and comments simply run to the end of input, and every byte ends up in
//! some token or is dropped as whitespace.
//!
//! ## Module Structure
//!
//! - `tokens` - Token type
//! - `comments` - escape stripping and comment removal pre-passes

mod comments;
pub mod tokens;

pub use tokens::Token;

use asl_core::lang::keywords;
use asl_core::lang::punctuation;

/// Byte that starts a preprocessor directive line.
const DIRECTIVE_MARKER: u8 = b'#';

/// Tokenize asl source bytes.
///
/// With `strip_escapes`, every unmasked backslash is removed first; this is how the body of an inline
/// `code("...")` literal is re-lexed.
///
/// ## Examples
/// ```rust
/// use asl_syntax::lexer::tokenize;
///
/// let texts: Vec<String> = tokenize(b"var a = 1;", false).into_iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["var", "a", "=", "1", ";"]);
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len(), strip_escapes = strip_escapes))]
pub fn tokenize(source: &[u8], strip_escapes: bool) -> Vec<Token> {
    let unescaped;
    let source = if strip_escapes {
        unescaped = comments::strip_escapes(source);
        unescaped.as_slice()
    } else {
        source
    };

    let stripped = comments::remove_comments(source);
    let tokens = Lexer::new(&stripped).tokenize();
    tracing::trace!(token_count = tokens.len(), "lexed");
    tokens
}

/// Return `true` for bytes that may continue an identifier.
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// [Outside string] → see '"' → [Inside string] → see unmasked '"' → [Outside string]
//        ↓                          ↓
//   see '#' → [Directive line]   see '\' → mask next byte
// ============================================================================

/// Byte scanner over comment-stripped source.
struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
    /// Bytes of the token being accumulated.
    pending: Vec<u8>,
    pending_line: usize,
    pending_column: usize,
    in_string: bool,
    /// One-shot mask set by a backslash.
    masked: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            pending: Vec::new(),
            pending_line: 1,
            pending_column: 1,
            in_string: false,
            masked: false,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while let Some((b, line, column)) = self.advance() {
            self.scan_byte(b, line, column);
        }
        // An unterminated string or a token without a trailing delimiter still becomes a token.
        self.flush();
        self.tokens
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// Consume one byte, returning it with the position it was read at.
    fn advance(&mut self) -> Option<(u8, usize, usize)> {
        let b = self.peek()?;
        let at = (b, self.line, self.column);
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(at)
    }

    fn push_byte(&mut self, b: u8, line: usize, column: usize) {
        if self.pending.is_empty() {
            self.pending_line = line;
            self.pending_column = column;
        }
        self.pending.push(b);
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.tokens.push(Token::new(text, self.pending_line, self.pending_column));
        self.pending.clear();
    }

    /// Close a pending keyword when `next` cannot extend it.
    fn close_keyword_before(&mut self, next: u8) {
        if is_identifier_byte(next) || self.pending.is_empty() {
            return;
        }
        let is_keyword = std::str::from_utf8(&self.pending).is_ok_and(keywords::is_keyword_ignore_case);
        if is_keyword {
            self.flush();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_byte(&mut self, b: u8, line: usize, column: usize) {
        let masked = std::mem::take(&mut self.masked);

        if self.in_string {
            self.push_byte(b, line, column);
            if masked {
                return;
            }
            match b {
                b'\\' => self.masked = true,
                b'"' => self.in_string = false,
                _ => {}
            }
            return;
        }

        if masked {
            // A masked byte outside a string never opens a string or starts a new mask.
            if matches!(b, b'"' | b'\\') {
                self.push_byte(b, line, column);
                return;
            }
        } else if b == b'\\' {
            self.push_byte(b, line, column);
            self.masked = true;
            return;
        } else if b == b'"' {
            self.close_keyword_before(b);
            self.push_byte(b, line, column);
            self.in_string = true;
            return;
        }

        match b {
            DIRECTIVE_MARKER => {
                self.flush();
                self.scan_directive(line, column);
            }
            b' ' | b'\t' | b'\r' | b'\n' => self.flush(),
            _ if punctuation::is_delimiter(b) => {
                self.flush();
                self.tokens.push(Token::new(char::from(b).to_string(), line, column));
            }
            _ => {
                self.close_keyword_before(b);
                self.push_byte(b, line, column);
            }
        }
    }

    /// Capture the rest of the line after `#` as a directive token, then swallow the line break(s).
    fn scan_directive(&mut self, line: usize, column: usize) {
        let start = self.pos - 1;
        while self.peek().is_some_and(|b| b != b'\n' && b != b'\r') {
            self.advance();
        }
        let text = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        self.tokens.push(Token::directive(text, line, column));

        while self.peek().is_some_and(|b| b == b'\n' || b == b'\r') {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<String> {
        tokenize(src.as_bytes(), false).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_var_assignment() {
        assert_eq!(texts("var a = 1;"), ["var", "a", "=", "1", ";"]);
    }

    #[test]
    fn test_delimiters_split_tokens() {
        assert_eq!(
            texts("a=b;c(x,y)[1]{}<>!:&|+-*/"),
            [
                "a", "=", "b", ";", "c", "(", "x", ",", "y", ")", "[", "1", "]", "{", "}", "<", ">", "!", ":", "&",
                "|", "+", "-", "*", "/"
            ]
        );
    }

    #[test]
    fn test_whitespace_only_separates() {
        assert_eq!(texts("  foo \t bar\r\n baz  "), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_keyword_prefix_stays_one_identifier() {
        assert_eq!(texts("var ifActive = 1;"), ["var", "ifActive", "=", "1", ";"]);
        assert_eq!(texts("whileX;"), ["whileX", ";"]);
    }

    #[test]
    fn test_keyword_closed_by_non_identifier_byte() {
        assert_eq!(texts("if.x"), ["if", ".x"]);
        assert_eq!(texts("code\"a\""), ["code", "\"a\""]);
    }

    #[test]
    fn test_string_literal_is_verbatim() {
        assert_eq!(texts("x = \"a b; c\";"), ["x", "=", "\"a b; c\"", ";"]);
        assert_eq!(texts(r#"x = "say \"hi\"";"#), ["x", "=", r#""say \"hi\"""#, ";"]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(texts("x = \"open"), ["x", "=", "\"open"]);
    }

    #[test]
    fn test_trailing_token_without_delimiter_is_kept() {
        assert_eq!(texts("x = 1"), ["x", "=", "1"]);
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(texts("a; // b;\nc; /* d; */ e;"), ["a", ";", "c", ";", "e", ";"]);
    }

    #[test]
    fn test_directive_line() {
        let tokens = tokenize(b"#define X 1\r\n\r\nhint X;", false);
        assert!(tokens[0].is_directive);
        assert_eq!(tokens[0].text, "#define X 1");
        assert_eq!(tokens[1].text, "hint");
        assert!(!tokens[1].is_directive);
    }

    #[test]
    fn test_directive_flushes_pending() {
        let tokens = tokenize(b"a#include \"x.h\"\nb", false);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "#include \"x.h\"", "b"]);
        assert!(tokens[1].is_directive);
    }

    #[test]
    fn test_hash_inside_string_is_text() {
        assert_eq!(texts("x = \"#no\";"), ["x", "=", "\"#no\"", ";"]);
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = tokenize(b"var a;\n  b = 10;", false);
        let positions: Vec<(&str, usize, usize)> =
            tokens.iter().map(|t| (t.text.as_str(), t.line, t.column)).collect();
        assert_eq!(
            positions,
            [
                ("var", 1, 1),
                ("a", 1, 5),
                (";", 1, 6),
                ("b", 2, 3),
                ("=", 2, 5),
                ("10", 2, 7),
                (";", 2, 9)
            ]
        );
    }

    #[test]
    fn test_strip_escapes_mode() {
        let tokens = tokenize(br#"hint \"x\";"#, true);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["hint", "\"x\"", ";"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize(b"", false).is_empty());
        assert!(tokenize(b"  \r\n // only a comment", false).is_empty());
    }
}
