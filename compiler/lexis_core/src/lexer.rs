//! The lexer driver: repeated longest-match steps over an input range.
//!
//! A [`Lexer`] owns its rules for its whole lifetime and holds no scan
//! state. Each pass starts at a caller-supplied position and runs until
//! one of two terminal states:
//!
//! - [`Stop::Exhausted`]: the end sentinel was reached.
//! - [`Stop::Unmatched`]: no rule advanced at the reported position.
//!
//! Every produced token is non-empty, so a pass over finite input always
//! terminates.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::UnrecognizedInput;
use crate::position::{Position, Sentinel};
use crate::registry::{CategoryRegistry, RuleTypes};
use crate::step::{RuleList, RuleSet};
use crate::token::Token;
use crate::value::TokenValue;

/// Where and why a pass stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stop<P> {
    /// The end sentinel was reached at this position.
    Exhausted(P),
    /// No rule matched at this position.
    Unmatched(P),
}

impl<P: Copy> Stop<P> {
    /// The position the pass stopped at.
    pub fn position(&self) -> P {
        match *self {
            Stop::Exhausted(pos) | Stop::Unmatched(pos) => pos,
        }
    }

    /// Returns `true` if the whole input was tokenized.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Stop::Exhausted(_))
    }
}

/// Tokenizer over a fixed, ordered tuple of rules.
///
/// Rule `i` of `R` produces tokens of category `i`; `V` is the value
/// type of every token (see [`crate::value`]).
pub struct Lexer<R, V = ()> {
    rules: R,
    value: PhantomData<fn() -> V>,
}

impl<R: RuleList> Lexer<R> {
    /// Lexer producing value-less tokens.
    pub fn new(rules: R) -> Self {
        Lexer {
            rules,
            value: PhantomData,
        }
    }
}

impl<R: RuleList, V: TokenValue> Lexer<R, V> {
    /// Lexer producing tokens with value type `V`.
    pub fn with_values(rules: R) -> Self {
        Lexer {
            rules,
            value: PhantomData,
        }
    }
}

impl<R: RuleList, V> Lexer<R, V> {
    /// The rules, in category order.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Number of rules, which is also the number of categories.
    pub fn rule_count(&self) -> usize {
        R::LEN
    }

    /// Produce the single token starting at `pos`.
    pub fn tokenize<P, S>(&self, pos: P, end: &S) -> Token<P, V>
    where
        S: ?Sized,
        R: RuleSet<P, S, V>,
    {
        self.rules.tokenize(pos, end)
    }

    /// Tokenize from `pos` until the input is exhausted or unmatched,
    /// appending every token to `sink`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn scan<P, S, K>(&self, pos: P, end: &S, sink: &mut K) -> Stop<P>
    where
        P: Position,
        S: Sentinel<P> + ?Sized,
        R: RuleSet<P, S, V>,
        K: Extend<Token<P, V>>,
    {
        let mut tokens = self.tokens(pos, end);
        sink.extend(tokens.by_ref());
        tokens.finish()
    }

    /// Lazily tokenize from `pos`. The iterator's [`Tokens::stop`]
    /// reports the terminal state once it is drained.
    pub fn tokens<'l, P, S>(&'l self, pos: P, end: &'l S) -> Tokens<'l, R, P, S, V>
    where
        S: ?Sized,
    {
        Tokens {
            rules: &self.rules,
            pos,
            end,
            recognized: 0,
            stop: None,
            value: PhantomData,
        }
    }

    /// Tokenize the whole input from `pos`, treating unmatched input as
    /// an error.
    ///
    /// # Errors
    /// Returns [`UnrecognizedInput`] with the stop position if no rule
    /// matches before the end sentinel is reached.
    pub fn tokenize_all<P, S>(
        &self,
        pos: P,
        end: &S,
    ) -> Result<Vec<Token<P, V>>, UnrecognizedInput<P>>
    where
        P: Position,
        S: Sentinel<P> + ?Sized,
        R: RuleSet<P, S, V>,
    {
        let mut tokens = Vec::new();
        match self.scan(pos, end, &mut tokens) {
            Stop::Exhausted(_) => Ok(tokens),
            Stop::Unmatched(position) => Err(UnrecognizedInput {
                position,
                recognized: tokens.len(),
            }),
        }
    }
}

impl<R: RuleList + RuleTypes, V> Lexer<R, V> {
    /// Category of rule type `T`, if it occurs exactly once.
    ///
    /// Walks the rule types without building a [`CategoryRegistry`].
    pub fn category_of<T: ?Sized + 'static>(&self) -> Option<usize> {
        let mut category = 0;
        let mut found = None;
        let mut duplicated = false;
        R::visit(&mut |rule| {
            if rule.is::<T>() {
                duplicated |= found.is_some();
                found = Some(category);
            }
            category += 1;
        });
        found.filter(|_| !duplicated)
    }

    /// The category table of this lexer's rule types.
    ///
    /// The table depends only on `R`, so build it once per use site
    /// rather than per token.
    pub fn registry(&self) -> CategoryRegistry {
        CategoryRegistry::of::<R>()
    }
}

impl<R: RuleList + Default, V> Default for Lexer<R, V> {
    fn default() -> Self {
        Lexer {
            rules: R::default(),
            value: PhantomData,
        }
    }
}

impl<R: Clone, V> Clone for Lexer<R, V> {
    fn clone(&self) -> Self {
        Lexer {
            rules: self.rules.clone(),
            value: PhantomData,
        }
    }
}

impl<R: fmt::Debug, V> fmt::Debug for Lexer<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("rules", &self.rules)
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

/// Iterator over the tokens of one pass. See [`Lexer::tokens`].
pub struct Tokens<'l, R, P, S: ?Sized, V> {
    rules: &'l R,
    pos: P,
    end: &'l S,
    recognized: usize,
    stop: Option<Stop<P>>,
    value: PhantomData<fn() -> V>,
}

impl<R, P: Copy, S: ?Sized, V> Tokens<'_, R, P, S, V> {
    /// Current scan position: the end of the last token produced.
    pub fn position(&self) -> P {
        self.pos
    }

    /// Number of tokens produced so far.
    pub fn recognized(&self) -> usize {
        self.recognized
    }

    /// The terminal state, once the iterator has returned `None`.
    pub fn stop(&self) -> Option<Stop<P>> {
        self.stop
    }
}

impl<R, P, S, V> Tokens<'_, R, P, S, V>
where
    P: Position,
    S: Sentinel<P> + ?Sized,
    R: RuleSet<P, S, V>,
{
    /// Drain the remaining tokens and return the terminal state.
    pub fn finish(mut self) -> Stop<P> {
        loop {
            if let Some(stop) = self.stop {
                return stop;
            }
            let _ = self.next();
        }
    }

    fn halt(&mut self, stop: Stop<P>) {
        debug!(tokens = self.recognized, ?stop, "scan stopped");
        self.stop = Some(stop);
    }
}

impl<R, P, S, V> Iterator for Tokens<'_, R, P, S, V>
where
    P: Position,
    S: Sentinel<P> + ?Sized,
    R: RuleSet<P, S, V>,
{
    type Item = Token<P, V>;

    fn next(&mut self) -> Option<Token<P, V>> {
        if self.stop.is_some() {
            return None;
        }
        if self.end.is_end(self.pos) {
            self.halt(Stop::Exhausted(self.pos));
            return None;
        }

        let token = self.rules.tokenize(self.pos, self.end);
        if !token.is_match() {
            self.halt(Stop::Unmatched(self.pos));
            return None;
        }

        debug_assert!(token.begin() != token.end(), "lexeme cannot be empty");
        trace!(
            category = token.category(),
            length = token.len(),
            "token"
        );
        self.pos = token.end();
        self.recognized += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stop.is_some() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<R, P, S, V> FusedIterator for Tokens<'_, R, P, S, V>
where
    P: Position,
    S: Sentinel<P> + ?Sized,
    R: RuleSet<P, S, V>,
{
}
