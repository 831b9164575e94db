//! End-to-end tokenization scenarios over byte input.
//!
//! Rules are plain unit structs, the way a caller would write them, and
//! every scenario drives them through the public [`Lexer`] surface.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cell::Cell;

use lexis_core::{
    evaluate, token_value, tokenize, vacant, with_value, ByteCursor, Cursor, Eof, Lexer, Rule,
    Sentinel, Stop, Token, NO_CATEGORY,
};
use pretty_assertions::assert_eq;

fn run<'a, S>(pred: impl Fn(u8) -> bool, mut pos: ByteCursor<'a>, end: &S) -> ByteCursor<'a>
where
    S: Sentinel<ByteCursor<'a>> + ?Sized,
{
    while !end.is_end(pos) && pos.peek().is_some_and(&pred) {
        pos = pos.next();
    }
    pos
}

macro_rules! byte_rule {
    ($(#[$meta:meta])* $name:ident, |$pos:ident, $end:ident| $body:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        struct $name;

        impl<'a, S: Sentinel<ByteCursor<'a>> + ?Sized> Rule<ByteCursor<'a>, S> for $name {
            type Payload = ();
            type Value = ();

            fn scan(&self, $pos: ByteCursor<'a>, $end: &S) -> (ByteCursor<'a>, ()) {
                ($body, ())
            }

            fn finalize(&self, _: &Token<ByteCursor<'a>>, (): ()) {}
        }
    };
}

byte_rule!(
    /// Maximal run of ASCII digits.
    Number,
    |pos, end| run(|b| b.is_ascii_digit(), pos, end)
);

byte_rule!(
    /// Maximal run of ASCII alphanumerics.
    Word,
    |pos, end| run(|b| b.is_ascii_alphanumeric(), pos, end)
);

byte_rule!(
    /// A single ASCII punctuation byte.
    Punct,
    |pos, end| {
        if !end.is_end(pos) && pos.peek().is_some_and(|b| b.is_ascii_punctuation()) {
            pos.next()
        } else {
            pos
        }
    }
);

byte_rule!(
    /// Maximal run of non-space bytes.
    Unit,
    |pos, end| run(|b| b != b' ', pos, end)
);

fn offsets<V>(tokens: &[Token<ByteCursor<'_>, V>]) -> Vec<(usize, usize, usize)> {
    tokens
        .iter()
        .map(|token| (token.category(), token.begin().offset(), token.end().offset()))
        .collect()
}

// === Longest Match ===

#[test]
fn word_outruns_number_then_stops_at_punctuation() {
    let lexer = Lexer::new((Number, Word));
    let start = ByteCursor::from("123abc!");
    let end = start.end();
    let mut tokens = Vec::new();

    let stop = lexer.scan(start, &end, &mut tokens);

    assert_eq!(offsets(&tokens), vec![(1, 0, 6)]);
    assert_eq!(tokens[0].lexeme(), b"123abc");
    assert_eq!(lexer.category_of::<Word>(), Some(tokens[0].category()));
    assert_eq!(stop, Stop::Unmatched(ByteCursor::at(start.rest(), 6)));
    assert_ne!(stop.position(), end);
}

#[test]
fn punctuation_rule_completes_the_input() {
    let lexer = Lexer::new((Number, Word, Punct));
    let start = ByteCursor::from("123abc!");
    let end = start.end();
    let mut tokens = Vec::new();

    let stop = lexer.scan(start, &end, &mut tokens);

    assert_eq!(offsets(&tokens), vec![(1, 0, 6), (2, 6, 7)]);
    assert_eq!(stop, Stop::Exhausted(end));
    assert_eq!(stop.position().offset(), 7);
}

#[test]
fn earlier_rule_wins_equal_length() {
    let lexer = Lexer::new((Number, Unit, Word));
    let start = ByteCursor::from("123abc !");
    let end = start.end();

    let token = lexer.tokenize(start, &end);

    assert_eq!(token.category(), 1);
    assert_eq!(lexer.category_of::<Unit>(), Some(1));
    assert_eq!(token.len(), 6);
    for _ in 0..8 {
        assert_eq!(lexer.tokenize(start, &end), token);
    }
}

#[test]
fn empty_input_is_exhausted_immediately() {
    let lexer = Lexer::new((Number, Word));
    let start = ByteCursor::from("");
    let mut tokens = Vec::new();

    let stop = lexer.scan(start, &start.end(), &mut tokens);

    assert!(tokens.is_empty());
    assert_eq!(stop, Stop::Exhausted(start));
    assert_eq!(stop.position().offset(), 0);
}

#[test]
fn unmatched_start_yields_no_match_token() {
    let start = ByteCursor::from("!");
    let token: Token<ByteCursor<'_>> = tokenize(start, &Eof, &(Number, Word));
    assert_eq!(token.category(), NO_CATEGORY);
    assert_eq!(token.span(), (start, start));
}

// === Values ===

token_value! {
    #[derive(Clone, Debug, PartialEq)]
    enum Value {
        Length(usize) = 1,
    }
    vacant [0]
}

fn word_length(token: &Token<ByteCursor<'_>>, (): ()) -> usize {
    token.len()
}

#[test]
fn winning_value_is_tagged_by_category() {
    let lexer = Lexer::<_, Value>::with_values((Number, evaluate(Word, word_length)));
    let start = ByteCursor::from("123abc!");

    let token = lexer.tokenize(start, &Eof);

    assert_eq!(token.category(), 1);
    assert_eq!(token.value(), &Value::Length(6));
    assert_eq!(token.value().category(), Some(token.category()));
}

#[test]
fn valueless_winner_carries_vacant() {
    let lexer = Lexer::<_, Value>::with_values((Number, evaluate(Word, word_length)));
    let start = ByteCursor::from("123 abc");

    let tokens = lexer.tokenize_all(start, &Eof);

    assert!(tokens.is_err());
    let token = lexer.tokenize(start, &Eof);
    assert_eq!(token.category(), 0);
    assert_eq!(token.value(), &Value::Vacant);
}

#[test]
fn no_match_carries_vacant() {
    let lexer = Lexer::<_, Value>::with_values((Number, evaluate(Word, word_length)));
    let token = lexer.tokenize(ByteCursor::from("?"), &Eof);
    assert!(!token.is_match());
    assert_eq!(token.into_value(), Value::Vacant);
}

#[test]
fn valued_tokens_erase_to_their_base() {
    let lexer = Lexer::<_, Option<&str>>::with_values((
        with_value(Number, "number"),
        with_value(Word, "word"),
    ));
    let tokens = lexer.tokenize_all(ByteCursor::from("12ab"), &Eof).unwrap();

    let (base, value) = tokens[0].into_parts();

    assert_eq!(value, Some("word"));
    assert_eq!(base, Token::new(1, tokens[0].begin(), tokens[0].end()));
}

// === Finalize ===

#[test]
fn only_the_winner_is_evaluated() {
    let number_calls = Cell::new(0);
    let word_calls = Cell::new(0);
    let lexer = Lexer::<_, Option<usize>>::with_values((
        evaluate(Number, |token: &Token<ByteCursor<'_>>, ()| {
            number_calls.set(number_calls.get() + 1);
            token.len()
        }),
        evaluate(Word, |token: &Token<ByteCursor<'_>>, ()| {
            word_calls.set(word_calls.get() + 1);
            token.len()
        }),
        vacant::<usize, _>(Punct),
    ));

    let tokens = lexer.tokenize_all(ByteCursor::from("42 "), &Eof);

    assert!(tokens.is_err());
    assert_eq!((number_calls.get(), word_calls.get()), (1, 0));
}

// === Rule Ownership ===

#[test]
fn borrowed_and_boxed_rules_tokenize_alike() {
    let number = Number;
    let word = Word;
    let by_value = Lexer::new((Number, Word, Punct));
    let by_ref = Lexer::new((&number, &word, Punct));
    let boxed = Lexer::new((Box::new(Number), Box::new(Word), Box::new(Punct)));
    let source = ByteCursor::from("a1.22!");

    let expected = offsets(&by_value.tokenize_all(source, &Eof).unwrap());

    assert_eq!(offsets(&by_ref.tokenize_all(source, &Eof).unwrap()), expected);
    assert_eq!(offsets(&boxed.tokenize_all(source, &Eof).unwrap()), expected);
    assert_eq!(expected, vec![(1, 0, 2), (2, 2, 3), (0, 3, 5), (2, 5, 6)]);
}

#[test]
fn dynamic_rules_share_one_lexer_type() {
    type Dyn<'a> = Box<dyn Rule<ByteCursor<'a>, Eof, Payload = (), Value = ()>>;
    let rules: (Dyn<'_>, Dyn<'_>) = (Box::new(Unit), Box::new(Number));
    let lexer = Lexer::new(rules);
    let tokens = lexer.tokenize_all(ByteCursor::from("99"), &Eof).unwrap();
    assert_eq!(offsets(&tokens), vec![(0, 0, 2)]);
}

// === Iteration ===

#[test]
fn iterator_and_scan_agree() {
    let lexer = Lexer::new((Number, Word, Punct));
    let start = ByteCursor::from("x1+y2 z");
    let mut collected = Vec::new();

    let stop = lexer.scan(start, &Eof, &mut collected);
    let mut iter = lexer.tokens(start, &Eof);
    let iterated: Vec<_> = iter.by_ref().collect();

    assert_eq!(iterated, collected);
    assert_eq!(iter.stop(), Some(stop));
    assert_eq!(stop.position().offset(), 5);
}
