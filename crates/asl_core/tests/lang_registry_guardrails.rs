use std::collections::HashMap;

use asl_core::lang::keywords;
use asl_core::lang::punctuation::{self, PunctuationCategory};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(
            info.canonical,
            info.canonical.to_ascii_lowercase(),
            "keyword spellings are lowercase: {}",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_plain_identifier_words() {
    for info in keywords::KEYWORDS {
        assert!(
            info.canonical.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
            "keyword {:?} must be made of identifier bytes so the lexer can accumulate it",
            info.canonical
        );
    }
}

#[test]
fn punctuation_spellings_unique_and_single_byte() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(info.canonical.len(), 1, "delimiters are single bytes: {:?}", info.canonical);
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::from_byte(info.canonical.as_bytes()[0]), Some(info.id));
        assert_eq!(punctuation::category(info.id), info.category);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn every_bracket_has_a_partner() {
    let delimiters: Vec<&str> = punctuation::PUNCTUATION
        .iter()
        .filter(|p| p.category == PunctuationCategory::Delimiter)
        .map(|p| p.canonical)
        .collect();

    for (open, close) in [("(", ")"), ("[", "]"), ("{", "}")] {
        assert!(delimiters.contains(&open), "missing opener {open}");
        assert!(delimiters.contains(&close), "missing closer {close}");
    }
    assert_eq!(delimiters.len(), 6);
}
