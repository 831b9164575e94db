use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_token_exposes_category_and_span() {
    let lexeme = b"lexeme";
    let begin = ByteCursor::new(lexeme);
    let end = begin.end();
    let token = Token::new(1, begin, end);

    assert_eq!(token.category(), 1);
    assert_eq!(token.span(), (begin, end));
    assert_eq!(token.len(), 6);
    assert!(token.is_match());
    assert_eq!(token.lexeme(), b"lexeme");
}

#[test]
fn no_match_is_empty_at_position() {
    let token = Token::no_match(4usize);
    assert_eq!(token.category(), NO_CATEGORY);
    assert_eq!(token.span(), (4, 4));
    assert!(!token.is_match());
    assert!(token.is_empty());
}

#[test]
fn vacant_token_uses_vacant_value() {
    let token: Token<usize, Option<i32>> = Token::vacant(2);
    assert_eq!(token.value(), &None);
    assert!(!token.is_match());
}

#[test]
#[should_panic(expected = "inconsistent with span")]
fn matched_category_requires_non_empty_span() {
    let _ = Token::new(0, 3usize, 3usize);
}

#[test]
#[should_panic(expected = "inconsistent with span")]
fn no_category_requires_empty_span() {
    let _ = Token::new(NO_CATEGORY, 0usize, 1usize);
}

#[test]
fn raw_erases_value_keeping_span() {
    let token = Token::with_value(2, 0usize, 3usize, String::from("abc"));
    assert_eq!(token.raw(), Token::new(2, 0, 3));
    let (raw, value) = token.into_parts();
    assert_eq!(raw.category(), 2);
    assert_eq!(value, "abc");
}

#[test]
fn convert_widens_value() {
    let narrow = Token::with_value(0, 1usize, 2usize, 7u8);
    let wide: Token<usize, u32> = narrow.convert();
    assert_eq!(wide.span(), (1, 2));
    assert_eq!(wide.category(), 0);
    assert_eq!(*wide.value(), 7u32);
}

#[test]
fn map_value_keeps_category_and_span() {
    let token = Token::with_value(1, 0usize, 2usize, 21).map_value(|v| v * 2);
    assert_eq!(token.category(), 1);
    assert_eq!(token.span(), (0, 2));
    assert_eq!(token.into_value(), 42);
}

#[test]
fn char_token_text() {
    let source = "héllo world";
    let begin = CharCursor::new(source);
    let end = CharCursor::at(source, 6);
    let token = Token::new(0, begin, end);
    assert_eq!(token.text(), "héllo");
}
