//! The rule contract and the stock adapters built on it.
//!
//! A rule is scanned at every step, by every lexer position, so scanning
//! is split from value production: [`Rule::scan`] reports how far the
//! candidate lexeme extends together with a cheap intermediate payload,
//! and [`Rule::finalize`] turns that payload into the token value. The
//! step tokenizer finalizes only the winning rule, once.
//!
//! Rules are usually unit structs implementing [`Rule`] directly, or one
//! of the adapters here:
//!
//! - [`scan`]: a matcher closure; no value.
//! - [`capture`]: a matcher closure that also returns its value.
//! - [`evaluate`]: add a finalize step computed from the token.
//! - [`with_value`]: a constant value for every winning token.
//! - [`vacant`]: lift a value-less rule into an `Option<T>` lexer.
//! - [`take_while`], [`one_if`], [`literal`]: matchers over any [`Cursor`].

use std::marker::PhantomData;

use crate::position::{Cursor, Sentinel};
use crate::token::Token;

/// A matcher demarcating a candidate lexeme at a position.
///
/// `S` is the end sentinel type and defaults to the position type.
pub trait Rule<P, S: ?Sized = P> {
    /// Intermediate result captured while scanning.
    type Payload;

    /// Final value of a token won by this rule.
    type Value;

    /// Scan from `pos`, returning the end of the candidate lexeme and the
    /// payload. Returning `pos` itself means the rule does not match.
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload);

    /// Convert the payload of a winning scan into the token value.
    ///
    /// `token` carries the category and span the rule won with.
    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> Self::Value;
}

impl<P, S: ?Sized, R: Rule<P, S> + ?Sized> Rule<P, S> for &R {
    type Payload = R::Payload;
    type Value = R::Value;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload) {
        (**self).scan(pos, end)
    }

    #[inline]
    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> Self::Value {
        (**self).finalize(token, payload)
    }
}

impl<P, S: ?Sized, R: Rule<P, S> + ?Sized> Rule<P, S> for Box<R> {
    type Payload = R::Payload;
    type Value = R::Value;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload) {
        (**self).scan(pos, end)
    }

    #[inline]
    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> Self::Value {
        (**self).finalize(token, payload)
    }
}

// === Closure Adapters ===

/// Rule from a matcher closure. See [`scan`].
#[derive(Clone, Copy, Debug)]
pub struct Scan<F>(F);

/// Rule from a closure `(pos, &end) -> end_of_lexeme`, producing no value.
pub fn scan<P, S: ?Sized, F>(matcher: F) -> Scan<F>
where
    F: Fn(P, &S) -> P,
{
    Scan(matcher)
}

impl<P, S: ?Sized, F> Rule<P, S> for Scan<F>
where
    F: Fn(P, &S) -> P,
{
    type Payload = ();
    type Value = ();

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, ()) {
        ((self.0)(pos, end), ())
    }

    #[inline]
    fn finalize(&self, _: &Token<P>, (): ()) {}
}

/// Rule from a capturing matcher closure. See [`capture`].
#[derive(Clone, Copy, Debug)]
pub struct Capture<F>(F);

/// Rule from a closure `(pos, &end) -> (end_of_lexeme, value)`.
///
/// The value is computed during every scan, won or lost. Use
/// [`evaluate`] for values that are expensive to compute.
pub fn capture<P, S: ?Sized, T, F>(matcher: F) -> Capture<F>
where
    F: Fn(P, &S) -> (P, T),
{
    Capture(matcher)
}

impl<P, S: ?Sized, T, F> Rule<P, S> for Capture<F>
where
    F: Fn(P, &S) -> (P, T),
{
    type Payload = T;
    type Value = T;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, T) {
        (self.0)(pos, end)
    }

    #[inline]
    fn finalize(&self, _: &Token<P>, payload: T) -> T {
        payload
    }
}

// === Value Adapters ===

/// Rule with an extra finalize step. See [`evaluate`].
#[derive(Clone, Copy, Debug)]
pub struct Evaluate<R, G> {
    rule: R,
    eval: G,
}

/// Derive the token value from the won token and the inner rule's value.
///
/// `eval` runs once per token, and only when `rule` wins the step. The
/// token type of a closure passed as `eval` must be annotated.
pub fn evaluate<P, T, U, R, G>(rule: R, eval: G) -> Evaluate<R, G>
where
    G: Fn(&Token<P>, T) -> U,
{
    Evaluate { rule, eval }
}

impl<P, S: ?Sized, R, G, U> Rule<P, S> for Evaluate<R, G>
where
    R: Rule<P, S>,
    G: Fn(&Token<P>, R::Value) -> U,
{
    type Payload = R::Payload;
    type Value = U;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload) {
        self.rule.scan(pos, end)
    }

    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> U {
        let inner = self.rule.finalize(token, payload);
        (self.eval)(token, inner)
    }
}

/// Rule carrying a constant value. See [`with_value`].
#[derive(Clone, Copy, Debug)]
pub struct WithValue<R, T> {
    rule: R,
    value: T,
}

/// Give every token won by `rule` a clone of `value`.
///
/// The inner rule is still finalized; its own value is dropped.
pub fn with_value<R, T: Clone>(rule: R, value: T) -> WithValue<R, T> {
    WithValue { rule, value }
}

impl<P, S: ?Sized, R, T> Rule<P, S> for WithValue<R, T>
where
    R: Rule<P, S>,
    T: Clone,
{
    type Payload = R::Payload;
    type Value = T;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload) {
        self.rule.scan(pos, end)
    }

    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> T {
        drop(self.rule.finalize(token, payload));
        self.value.clone()
    }
}

/// Value-less rule inside an `Option<T>` lexer. See [`vacant`].
pub struct Vacant<R, T> {
    rule: R,
    value: PhantomData<fn() -> T>,
}

/// Lift a value-less `rule` so a lexer sharing the value type `Option<T>`
/// can hold it. Its tokens carry `None`.
pub fn vacant<T, R>(rule: R) -> Vacant<R, T> {
    Vacant {
        rule,
        value: PhantomData,
    }
}

impl<R: Clone, T> Clone for Vacant<R, T> {
    fn clone(&self) -> Self {
        vacant(self.rule.clone())
    }
}

impl<R: std::fmt::Debug, T> std::fmt::Debug for Vacant<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vacant").field(&self.rule).finish()
    }
}

impl<P, S: ?Sized, R, T> Rule<P, S> for Vacant<R, T>
where
    R: Rule<P, S, Value = ()>,
{
    type Payload = R::Payload;
    type Value = Option<T>;

    #[inline]
    fn scan(&self, pos: P, end: &S) -> (P, Self::Payload) {
        self.rule.scan(pos, end)
    }

    fn finalize(&self, token: &Token<P>, payload: Self::Payload) -> Option<T> {
        self.rule.finalize(token, payload);
        None
    }
}

// === Cursor Matchers ===

/// Maximal run of matching items. See [`take_while`].
#[derive(Clone, Copy, Debug)]
pub struct TakeWhile<F>(F);

/// Match the longest run of items satisfying `pred`.
pub fn take_while<F>(pred: F) -> TakeWhile<F> {
    TakeWhile(pred)
}

impl<C, S, F> Rule<C, S> for TakeWhile<F>
where
    C: Cursor,
    S: Sentinel<C> + ?Sized,
    F: Fn(C::Item) -> bool,
{
    type Payload = ();
    type Value = ();

    fn scan(&self, mut pos: C, end: &S) -> (C, ()) {
        while !end.is_end(pos) {
            match pos.peek() {
                Some(item) if (self.0)(item) => pos = pos.next(),
                _ => break,
            }
        }
        (pos, ())
    }

    #[inline]
    fn finalize(&self, _: &Token<C>, (): ()) {}
}

/// A single matching item. See [`one_if`].
#[derive(Clone, Copy, Debug)]
pub struct OneIf<F>(F);

/// Match exactly one item satisfying `pred`.
pub fn one_if<F>(pred: F) -> OneIf<F> {
    OneIf(pred)
}

impl<C, S, F> Rule<C, S> for OneIf<F>
where
    C: Cursor,
    S: Sentinel<C> + ?Sized,
    F: Fn(C::Item) -> bool,
{
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: C, end: &S) -> (C, ()) {
        if end.is_end(pos) {
            return (pos, ());
        }
        match pos.peek() {
            Some(item) if (self.0)(item) => (pos.next(), ()),
            _ => (pos, ()),
        }
    }

    #[inline]
    fn finalize(&self, _: &Token<C>, (): ()) {}
}

/// An exact item sequence. See [`literal`].
#[derive(Clone, Copy, Debug)]
pub struct Literal<'l, T>(&'l [T]);

/// Match exactly `items`, or nothing.
pub fn literal<T>(items: &[T]) -> Literal<'_, T> {
    Literal(items)
}

impl<C, S, T> Rule<C, S> for Literal<'_, T>
where
    C: Cursor<Item = T>,
    S: Sentinel<C> + ?Sized,
    T: Copy + PartialEq,
{
    type Payload = ();
    type Value = ();

    fn scan(&self, start: C, end: &S) -> (C, ()) {
        let mut pos = start;
        for &expected in self.0 {
            if end.is_end(pos) || pos.peek() != Some(expected) {
                return (start, ());
            }
            pos = pos.next();
        }
        (pos, ())
    }

    #[inline]
    fn finalize(&self, _: &Token<C>, (): ()) {}
}
