//! Categorized lexemes.
//!
//! A [`Token`] records which rule demarcated a lexeme, the two positions
//! bounding it, and the value computed for it. The value-less form
//! `Token<P>` (with `V = ()`) is the common base every valued token can be
//! erased to with [`Token::raw`].
//!
//! # Invariant
//!
//! `category == NO_CATEGORY` exactly when `begin == end`. A rule that
//! advances zero units never produces a token, so the driver can always
//! make progress past a successful match.

use crate::position::{ByteCursor, CharCursor, Position};
use crate::value::TokenValue;

/// Category of the token returned when no rule matched.
pub const NO_CATEGORY: usize = usize::MAX;

/// A categorized lexeme with an associated value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<P, V = ()> {
    category: usize,
    begin: P,
    end: P,
    value: V,
}

impl<P: Position> Token<P> {
    /// Create a value-less token for `[begin, end)`.
    ///
    /// # Panics
    /// Panics if the span contradicts the category: a matched category
    /// needs a non-empty span and `NO_CATEGORY` needs an empty one.
    pub fn new(category: usize, begin: P, end: P) -> Self {
        assert!(
            (category == NO_CATEGORY) == (begin == end),
            "category {category} is inconsistent with span {begin:?}..{end:?}",
        );
        Token {
            category,
            begin,
            end,
            value: (),
        }
    }

    /// The no-match token at `pos`.
    pub fn no_match(pos: P) -> Self {
        Token::new(NO_CATEGORY, pos, pos)
    }

    /// Attach a value to this token, keeping category and span.
    pub fn attach<V>(self, value: V) -> Token<P, V> {
        Token {
            category: self.category,
            begin: self.begin,
            end: self.end,
            value,
        }
    }
}

impl<P: Position, V> Token<P, V> {
    /// Create a token for `[begin, end)` carrying `value`.
    ///
    /// # Panics
    /// Same contract as [`Token::new`].
    pub fn with_value(category: usize, begin: P, end: P, value: V) -> Self {
        Token::new(category, begin, end).attach(value)
    }

    /// The no-match token at `pos`, carrying the vacant value.
    pub fn vacant(pos: P) -> Self
    where
        V: TokenValue,
    {
        Token::no_match(pos).attach(V::vacant())
    }

    /// Index of the rule that produced this token, or [`NO_CATEGORY`].
    #[inline]
    pub fn category(&self) -> usize {
        self.category
    }

    /// Returns `true` if a rule matched.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.category != NO_CATEGORY
    }

    /// Start of the lexeme.
    #[inline]
    pub fn begin(&self) -> P {
        self.begin
    }

    /// End of the lexeme (exclusive).
    #[inline]
    pub fn end(&self) -> P {
        self.end
    }

    /// `(begin, end)` pair.
    #[inline]
    pub fn span(&self) -> (P, P) {
        (self.begin, self.end)
    }

    /// Length of the lexeme as measured by the position type.
    #[inline]
    pub fn len(&self) -> usize {
        self.begin.distance(self.end)
    }

    /// Returns `true` for the no-match token, whose span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The value computed for this token.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the token, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Split into the value-less base and the value.
    pub fn into_parts(self) -> (Token<P>, V) {
        let raw = self.raw();
        (raw, self.value)
    }

    /// The value-less base: same category and span, value dropped.
    pub fn raw(&self) -> Token<P> {
        Token {
            category: self.category,
            begin: self.begin,
            end: self.end,
            value: (),
        }
    }

    /// Re-derive the value, keeping category and span exactly.
    pub fn map_value<U>(self, f: impl FnOnce(V) -> U) -> Token<P, U> {
        Token {
            category: self.category,
            begin: self.begin,
            end: self.end,
            value: f(self.value),
        }
    }

    /// Widen the value into a type that represents it without loss.
    pub fn convert<U: From<V>>(self) -> Token<P, U> {
        self.map_value(U::from)
    }
}

impl<'a, V> Token<ByteCursor<'a>, V> {
    /// The bytes of the lexeme.
    pub fn lexeme(&self) -> &'a [u8] {
        self.begin.slice_to(self.end)
    }
}

impl<'a, V> Token<CharCursor<'a>, V> {
    /// The text of the lexeme.
    pub fn text(&self) -> &'a str {
        self.begin.slice_to(self.end)
    }
}

#[cfg(test)]
mod tests;
