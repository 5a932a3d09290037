use super::*;
use pretty_assertions::assert_eq;

#[test]
fn zero_is_default() {
    assert_eq!(SourceLocation::ZERO, SourceLocation::default());
    assert!(SourceLocation::ZERO.is_line_start());
}

#[test]
fn line_number_is_one_based() {
    let loc = SourceLocation::new(10, 4, 2);
    assert_eq!(loc.line_number(), 5);
}

#[test]
fn advance_columns_moves_offset_and_column() {
    let loc = SourceLocation::new(6, 1, 0).advance_columns(3);
    assert_eq!(loc, SourceLocation::new(9, 1, 3));
    assert!(!loc.is_line_start());
}

#[test]
fn debug_and_display_formats() {
    let loc = SourceLocation::new(12, 2, 5);
    assert_eq!(format!("{loc:?}"), "2:5@12");
    assert_eq!(format!("{loc}"), "3:6");
}
