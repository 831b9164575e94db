//! The demonstration rule set: a small C-like token vocabulary.
//!
//! Keywords are declared before identifiers, so a keyword ties with the
//! identifier reading of the same text and wins it. Operators are matched
//! as literals before single punctuation, so `==` outruns `=`.

use lexis_core::{
    literal, one_if, take_while, token_value, CharCursor, Cursor, Lexer, Position, Rule, Sentinel,
    Token,
};

const KEYWORDS: &[&str] = &[
    "else", "fn", "for", "if", "let", "match", "return", "while",
];

const OPERATORS: &[&[char]] = &[
    &['=', '='],
    &['!', '='],
    &['<', '='],
    &['>', '='],
    &['-', '>'],
    &['=', '>'],
    &['&', '&'],
    &['|', '|'],
    &['.', '.', '='],
    &['.', '.'],
];

token_value! {
    /// Value of a demonstration token.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Value {
        /// Decimal literal; `None` when it overflows `u64`.
        Number(Option<u64>) = 1,
        Keyword(&'static str) = 2,
        /// Contents of a string literal, without the quotes.
        Text(String) = 6,
    }
    vacant [0, 3, 4, 5]
}

pub type Rules = (Whitespace, Number, Keyword, Identifier, Operator, Punct, StringLit);

/// Lexer over the demonstration rules.
pub fn lexer() -> Lexer<Rules, Value> {
    Lexer::with_values((
        Whitespace,
        Number,
        Keyword,
        Identifier,
        Operator,
        Punct,
        StringLit,
    ))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn ident_end<'a, S>(pos: CharCursor<'a>, end: &S) -> CharCursor<'a>
where
    S: Sentinel<CharCursor<'a>> + ?Sized,
{
    match pos.peek() {
        Some(c) if !end.is_end(pos) && (c.is_alphabetic() || c == '_') => {
            take_while(is_ident_char).scan(pos, end).0
        }
        _ => pos,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Whitespace;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Whitespace {
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        take_while(char::is_whitespace).scan(pos, end)
    }

    fn finalize(&self, _: &Token<CharCursor<'a>>, (): ()) {}
}

#[derive(Clone, Copy, Debug)]
pub struct Number;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Number {
    type Payload = ();
    type Value = Option<u64>;

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        take_while(|c: char| c.is_ascii_digit()).scan(pos, end)
    }

    fn finalize(&self, token: &Token<CharCursor<'a>>, (): ()) -> Option<u64> {
        token.text().parse().ok()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Keyword;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Keyword {
    type Payload = &'static str;
    type Value = &'static str;

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, &'static str) {
        let candidate = ident_end(pos, end);
        let word = pos.slice_to(candidate);
        match KEYWORDS.iter().find(|keyword| **keyword == word) {
            Some(&keyword) => (candidate, keyword),
            None => (pos, ""),
        }
    }

    fn finalize(&self, _: &Token<CharCursor<'a>>, keyword: &'static str) -> &'static str {
        keyword
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Identifier;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Identifier {
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        (ident_end(pos, end), ())
    }

    fn finalize(&self, _: &Token<CharCursor<'a>>, (): ()) {}
}

#[derive(Clone, Copy, Debug)]
pub struct Operator;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Operator {
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        let longest = OPERATORS
            .iter()
            .map(|&op| literal(op).scan(pos, end).0)
            .max_by_key(|candidate| pos.distance(*candidate))
            .unwrap_or(pos);
        (longest, ())
    }

    fn finalize(&self, _: &Token<CharCursor<'a>>, (): ()) {}
}

#[derive(Clone, Copy, Debug)]
pub struct Punct;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for Punct {
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        one_if(|c: char| c.is_ascii_punctuation()).scan(pos, end)
    }

    fn finalize(&self, _: &Token<CharCursor<'a>>, (): ()) {}
}

/// Double-quoted string without escapes. Unterminated strings don't match.
#[derive(Clone, Copy, Debug)]
pub struct StringLit;

impl<'a, S: Sentinel<CharCursor<'a>> + ?Sized> Rule<CharCursor<'a>, S> for StringLit {
    type Payload = ();
    type Value = String;

    fn scan(&self, pos: CharCursor<'a>, end: &S) -> (CharCursor<'a>, ()) {
        let (open, ()) = one_if(|c: char| c == '"').scan(pos, end);
        if open == pos {
            return (pos, ());
        }
        let body = take_while(|c: char| c != '"' && c != '\n').scan(open, end).0;
        let (close, ()) = one_if(|c: char| c == '"').scan(body, end);
        if close == body {
            (pos, ())
        } else {
            (close, ())
        }
    }

    fn finalize(&self, token: &Token<CharCursor<'a>>, (): ()) -> String {
        let text = token.text();
        text.get(1..text.len() - 1).unwrap_or_default().to_owned()
    }
}
