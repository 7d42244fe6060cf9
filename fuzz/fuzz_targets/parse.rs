#![no_main]

use asl::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The lexer takes raw bytes; invalid UTF-8 is part of the input space.
    let strip_escapes = data.first().is_some_and(|b| b & 1 == 1);
    let tokens = lexer::tokenize(data, strip_escapes);
    for pretty in [false, true] {
        let _ = parser::parse(&tokens, pretty);
    }
});
