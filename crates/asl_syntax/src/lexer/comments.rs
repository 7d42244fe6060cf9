//! Pre-passes run over raw source bytes before the main scan.

/// Drop every unmasked backslash, keeping the byte it masks.
///
/// Used when re-lexing the body of an inline `code("...")` literal, where `\"` stands for a plain quote.
pub(crate) fn strip_escapes(code: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(code.len());
    let mut masked = false;

    for &b in code {
        if b == b'\\' && !masked {
            masked = true;
            continue;
        }
        out.push(b);
        masked = false;
    }

    out
}

/// Delete `//` line comments and `/* */` block comments outside string literals.
///
/// A line comment stops before its newline, so line numbers of later tokens are unchanged. An unterminated block
/// comment runs to the end of input.
pub(crate) fn remove_comments(code: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(code.len());
    let mut in_string = false;
    let mut masked = false;
    let mut i = 0;

    while i < code.len() {
        let b = code[i];

        if masked {
            masked = false;
            out.push(b);
            i += 1;
            continue;
        }

        match b {
            b'\\' => masked = true,
            b'"' => in_string = !in_string,
            b'/' if !in_string => match code.get(i + 1) {
                Some(b'/') => {
                    i = code[i..]
                        .iter()
                        .position(|&c| c == b'\n')
                        .map_or(code.len(), |offset| i + offset);
                    continue;
                }
                Some(b'*') => {
                    // The search starts after "/*" so that "/*/" does not close itself.
                    i = code[i + 2..]
                        .windows(2)
                        .position(|w| w == b"*/")
                        .map_or(code.len(), |offset| i + 2 + offset + 2);
                    continue;
                }
                _ => {}
            },
            _ => {}
        }

        out.push(b);
        i += 1;
    }

    out
}
