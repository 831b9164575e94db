//! Single-step longest-match tokenization.
//!
//! [`RuleSet`] is implemented for tuples of rules. One step scans every
//! rule from the same position, in declaration order, and keeps the
//! candidate with the greatest nonzero length. Comparison is strict, so
//! among rules tying for the longest match the first declared wins.
//!
//! Scanning only captures payloads. Once every rule has been tried, the
//! winner alone is finalized, with the token shell it won, and its value
//! is embedded into `V` under the winner's category.

use crate::position::{Position, Sentinel};
use crate::rule::Rule;
use crate::token::Token;
use crate::value::{Embed, TokenValue};

/// An ordered, fixed collection of rules tokenizing into `Token<P, V>`.
///
/// Rule `i` of the tuple has category `i`.
pub trait RuleSet<P, S: ?Sized, V> {
    /// Number of rules in the set.
    const LEN: usize;

    /// Produce the single token starting at `pos`, or the no-match token.
    fn tokenize(&self, pos: P, end: &S) -> Token<P, V>;
}

/// Rule tuples a [`Lexer`](crate::Lexer) can own: non-empty, at most
/// twelve rules.
pub trait RuleList {
    /// Number of rules in the list.
    const LEN: usize;
}

/// The empty set matches nothing.
impl<P, S, V> RuleSet<P, S, V> for ()
where
    P: Position,
    S: Sentinel<P> + ?Sized,
    V: TokenValue,
{
    const LEN: usize = 0;

    #[inline]
    fn tokenize(&self, pos: P, _: &S) -> Token<P, V> {
        Token::vacant(pos)
    }
}

/// Run one longest-match step of `rules` at `pos`.
pub fn tokenize<P, S, V, R>(pos: P, end: &S, rules: &R) -> Token<P, V>
where
    S: ?Sized,
    R: RuleSet<P, S, V> + ?Sized,
{
    rules.tokenize(pos, end)
}

macro_rules! impl_rule_set {
    ($len:literal; $( $idx:tt => $rule:ident, $payload:ident, $variant:ident );+ $(;)?) => {
        impl<$($rule),+> RuleList for ($($rule,)+) {
            const LEN: usize = $len;
        }

        impl<P, S, V, $($rule),+> RuleSet<P, S, V> for ($($rule,)+)
        where
            P: Position,
            S: Sentinel<P> + ?Sized,
            $(
                $rule: Rule<P, S>,
                V: Embed<$idx, <$rule as Rule<P, S>>::Value>,
            )+
        {
            const LEN: usize = $len;

            #[allow(unused_assignments, reason = "the last rule's candidate is never compared again")]
            fn tokenize(&self, pos: P, end: &S) -> Token<P, V> {
                enum Pending<$($payload),+> {
                    None,
                    $( $variant($payload), )+
                }

                if end.is_end(pos) {
                    return Token::vacant(pos);
                }

                let mut best_length = 0;
                let mut best_end = pos;
                let mut pending: Pending<$(<$rule as Rule<P, S>>::Payload),+> = Pending::None;

                $(
                    let (candidate, payload) = self.$idx.scan(pos, end);
                    let length = pos.distance(candidate);
                    if length > best_length {
                        best_length = length;
                        best_end = candidate;
                        pending = Pending::$variant(payload);
                    }
                )+

                match pending {
                    Pending::None => Token::vacant(pos),
                    $(
                        Pending::$variant(payload) => {
                            let shell = Token::new($idx, pos, best_end);
                            let value = self.$idx.finalize(&shell, payload);
                            shell.attach(<V as Embed<$idx, <$rule as Rule<P, S>>::Value>>::embed(value))
                        }
                    )+
                }
            }
        }
    };
}

impl_rule_set!(1; 0 => R0, A0, Rule0);
impl_rule_set!(2; 0 => R0, A0, Rule0; 1 => R1, A1, Rule1);
impl_rule_set!(3; 0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2);
impl_rule_set!(4;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3
);
impl_rule_set!(5;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4
);
impl_rule_set!(6;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5
);
impl_rule_set!(7;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6
);
impl_rule_set!(8;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6; 7 => R7, A7, Rule7
);
impl_rule_set!(9;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6; 7 => R7, A7, Rule7;
    8 => R8, A8, Rule8
);
impl_rule_set!(10;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6; 7 => R7, A7, Rule7;
    8 => R8, A8, Rule8; 9 => R9, A9, Rule9
);
impl_rule_set!(11;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6; 7 => R7, A7, Rule7;
    8 => R8, A8, Rule8; 9 => R9, A9, Rule9; 10 => R10, A10, Rule10
);
impl_rule_set!(12;
    0 => R0, A0, Rule0; 1 => R1, A1, Rule1; 2 => R2, A2, Rule2; 3 => R3, A3, Rule3;
    4 => R4, A4, Rule4; 5 => R5, A5, Rule5; 6 => R6, A6, Rule6; 7 => R7, A7, Rule7;
    8 => R8, A8, Rule8; 9 => R9, A9, Rule9; 10 => R10, A10, Rule10; 11 => R11, A11, Rule11
);

#[cfg(test)]
mod tests;
