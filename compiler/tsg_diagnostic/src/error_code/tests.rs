use std::collections::HashSet;

use super::*;

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let classes = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_grammar_error(),
        ];
        assert_eq!(
            classes.iter().filter(|c| **c).count(),
            1,
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn test_codes_are_unique() {
    let seen: HashSet<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(ErrorCode::E1010.to_string(), "E1010");
    assert_eq!(format!("[{}]", ErrorCode::E0005), "[E0005]");
}

#[test]
fn test_descriptions_are_lowercase_phrases() {
    for code in ErrorCode::ALL {
        let text = code.description();
        assert!(!text.is_empty());
        assert!(!text.ends_with('.'), "{code}: {text}");
        assert_eq!(text, text.to_lowercase(), "{code}");
    }
}
