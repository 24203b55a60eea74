use super::*;

#[test]
fn test_line_from_offset() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1);
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_offset_to_line_col_counts_chars() {
    let source = "let é = 1;\nx";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    // `é` is two bytes wide.
    assert_eq!(table.offset_to_line_col(source, 7), (1, 7));
    assert_eq!(table.offset_to_line_col(source, 12), (2, 1));
}

#[test]
fn test_line_text() {
    let source = "a = 1;\r\nb = 2;\nc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), "a = 1;");
    assert_eq!(table.line_text(source, 2), "b = 2;");
    assert_eq!(table.line_text(source, 3), "c");
    assert_eq!(table.line_text(source, 9), "");
}

#[test]
fn test_line_number_of_span() {
    let source = "one\ntwo\nthree";
    assert_eq!(line_number(source, Span::new(4, 7)), 2);
    assert_eq!(line_number(source, Span::new(8, 13)), 3);
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 40), (1, 3));
}
