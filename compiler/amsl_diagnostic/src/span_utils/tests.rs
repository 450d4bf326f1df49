use super::*;

#[test]
fn single_line() {
    let source = "{ let x = 1; x }";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 6), (1, 7));
    assert_eq!(table.line_text(source, 1), source);
}

#[test]
fn multi_line_lookup() {
    let source = "{\n  let x = 1;\n  y\n}";
    let table = LineOffsetTable::build(source);
    let y = source.find('y').unwrap_or_default();
    assert_eq!(table.offset_to_line_col(source, y), (3, 3));
    assert_eq!(table.line_text(source, 2), "  let x = 1;");
    assert_eq!(table.line_text(source, 4), "}");
}

#[test]
fn offset_at_newline_belongs_to_its_line() {
    let source = "ab\ncd";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(2), 1);
    assert_eq!(table.line_from_offset(3), 2);
}

#[test]
fn counts_chars_not_bytes() {
    let source = "\"é\" x";
    let table = LineOffsetTable::build(source);
    let x = source.find('x').unwrap_or_default();
    assert_eq!(table.offset_to_line_col(source, x), (1, 5));
}
