use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected `;`, found `}`")
        .with_label(Span::new(0, 5), "here")
        .with_note("statements are separated by `;`")
        .with_suggestion("add a semicolon");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_default_message_is_description() {
    let diag = Diagnostic::error(ErrorCode::E1010);
    assert_eq!(diag.message, "nesting too deep");
    let diag = Diagnostic::warning(ErrorCode::E1013);
    assert!(!diag.is_error());
}

#[test]
fn test_unclosed_delimiter() {
    let diag = unclosed_delimiter(Span::new(0, 1), Span::new(10, 10), '(');
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[0].message, "expected `)`");
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 10)));
}

#[test]
fn test_unexpected_token_message() {
    let diag = unexpected_token(Span::new(3, 4), "`)`", "`;`");
    assert_eq!(diag.message, "expected `)`, found `;`");
    assert_eq!(expected_expression(Span::new(0, 1), "`]`").code, ErrorCode::E1002);
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::error(ErrorCode::E1007)
        .with_message("invalid assignment target")
        .with_label(Span::new(0, 5), "primary")
        .with_secondary_label(Span::new(10, 15), "secondary")
        .with_note("a note")
        .with_suggestion("a suggestion");

    assert_eq!(
        diag.to_string(),
        "error [E1007]: invalid assignment target\n  \
         --> 0..5: primary\n      \
         10..15: secondary\n  \
         = note: a note\n  \
         = help: a suggestion"
    );
}
