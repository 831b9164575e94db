use std::cell::Cell;

use super::*;
use crate::rule::{capture, evaluate, scan, vacant};
use crate::token::NO_CATEGORY;
use pretty_assertions::assert_eq;

/// Rule advancing a fixed number of units, clamped to the end.
#[derive(Clone, Copy, Debug)]
struct Fixed(usize);

impl Rule<usize> for Fixed {
    type Payload = ();
    type Value = ();

    fn scan(&self, pos: usize, end: &usize) -> (usize, ()) {
        ((pos + self.0).min(*end), ())
    }

    fn finalize(&self, _: &Token<usize>, (): ()) {}
}

/// Rule counting how often it is finalized.
struct Counted<'c> {
    length: usize,
    finalized: &'c Cell<usize>,
}

impl Rule<usize> for Counted<'_> {
    type Payload = usize;
    type Value = usize;

    fn scan(&self, pos: usize, end: &usize) -> (usize, usize) {
        ((pos + self.length).min(*end), self.length)
    }

    fn finalize(&self, _: &Token<usize>, payload: usize) -> usize {
        self.finalized.set(self.finalized.get() + 1);
        payload
    }
}

// === Longest Match ===

#[test]
fn longest_candidate_wins() {
    let token: Token<usize> = tokenize(0, &10, &(Fixed(2), Fixed(5), Fixed(3)));
    assert_eq!(token.category(), 1);
    assert_eq!(token.span(), (0, 5));
}

#[test]
fn first_declared_wins_ties() {
    let token: Token<usize> = tokenize(0, &10, &(Fixed(1), Fixed(4), Fixed(4)));
    assert_eq!(token.category(), 1);

    let repeated: Token<usize> = tokenize(0, &10, &(Fixed(1), Fixed(4), Fixed(4)));
    assert_eq!(repeated, token);
}

#[test]
fn zero_length_matches_never_win() {
    let token: Token<usize> = tokenize(3, &10, &(Fixed(0), Fixed(0)));
    assert_eq!(token, Token::no_match(3));
}

#[test]
fn exhausted_input_is_no_match() {
    let token: Token<usize> = tokenize(7, &7, &(Fixed(1),));
    assert_eq!(token.category(), NO_CATEGORY);
    assert_eq!(token.span(), (7, 7));
}

#[test]
fn empty_rule_set_matches_nothing() {
    let token: Token<usize> = tokenize(0, &5, &());
    assert!(!token.is_match());
    assert_eq!(<() as RuleSet<usize, usize, ()>>::LEN, 0);
}

#[test]
fn candidates_are_clamped_by_rules_not_driver() {
    let token: Token<usize> = tokenize(8, &10, &(Fixed(5),));
    assert_eq!(token.span(), (8, 10));
}

// === Finalize ===

#[test]
fn only_winner_is_finalized() {
    let short = Cell::new(0);
    let long = Cell::new(0);
    let rules = (
        Counted {
            length: 2,
            finalized: &short,
        },
        Counted {
            length: 3,
            finalized: &long,
        },
    );

    let token: Token<usize, Option<usize>> = tokenize(0, &10, &rules);

    assert_eq!(token.value(), &Some(3));
    assert_eq!((short.get(), long.get()), (0, 1));
}

#[test]
fn no_match_finalizes_nothing() {
    let calls = Cell::new(0);
    let rules = (Counted {
        length: 0,
        finalized: &calls,
    },);

    let token: Token<usize, Option<usize>> = tokenize(0, &10, &rules);

    assert_eq!(token.value(), &None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn finalize_receives_winning_shell() {
    let seen = Cell::new(None);
    let rules = (
        Fixed(1),
        evaluate(Fixed(4), |token: &Token<usize>, ()| {
            seen.set(Some((token.category(), token.span())));
        }),
    );

    let _: Token<usize> = tokenize(2, &10, &rules);

    assert_eq!(seen.get(), Some((1, (2, 6))));
}

// === Value Combination ===

#[test]
fn unit_value_discards_rule_values() {
    let rules = (
        capture(|pos: usize, _: &usize| (pos + 3, "three")),
        Fixed(1),
    );
    let token: Token<usize> = tokenize(0, &10, &rules);
    assert_eq!(token, Token::new(0, 0, 3));
}

#[test]
fn shared_value_type_wraps_in_option() {
    let rules = (
        vacant::<u32, _>(Fixed(4)),
        capture(|pos: usize, _: &usize| (pos + 2, 20_u32)),
    );

    let valueless: Token<usize, Option<u32>> = tokenize(0, &10, &rules);
    assert_eq!(valueless.category(), 0);
    assert_eq!(valueless.value(), &None);

    let rules = (
        vacant::<u32, _>(Fixed(1)),
        capture(|pos: usize, _: &usize| (pos + 2, 20_u32)),
    );
    let valued: Token<usize, Option<u32>> = tokenize(0, &10, &rules);
    assert_eq!(valued.category(), 1);
    assert_eq!(valued.value(), &Some(20));
}

crate::token_value! {
    #[derive(Clone, Debug, PartialEq)]
    enum Mixed {
        Length(usize) = 1,
        Name(&'static str) = 2,
    }
    vacant [0]
}

#[test]
fn heterogeneous_values_are_tagged_by_category() {
    let rules = |plain: usize, long: usize, named: usize| {
        (
            Fixed(plain),
            capture(move |pos: usize, _: &usize| (pos + long, long)),
            capture(move |pos: usize, _: &usize| (pos + named, "name")),
        )
    };

    let token: Token<usize, Mixed> = tokenize(0, &10, &rules(1, 3, 2));
    assert_eq!((token.category(), token.value()), (1, &Mixed::Length(3)));

    let token: Token<usize, Mixed> = tokenize(0, &10, &rules(1, 2, 3));
    assert_eq!((token.category(), token.value()), (2, &Mixed::Name("name")));

    let token: Token<usize, Mixed> = tokenize(0, &10, &rules(4, 2, 3));
    assert_eq!((token.category(), token.value()), (0, &Mixed::Vacant));

    let token: Token<usize, Mixed> = tokenize(0, &10, &rules(0, 0, 0));
    assert_eq!(token.value(), &Mixed::Vacant);
}

// === Arity ===

#[test]
fn twelve_rules_form_a_set() {
    let rules = (
        Fixed(1),
        Fixed(2),
        Fixed(3),
        Fixed(4),
        Fixed(5),
        Fixed(6),
        Fixed(7),
        Fixed(8),
        Fixed(9),
        Fixed(10),
        Fixed(11),
        Fixed(12),
    );
    let token: Token<usize> = tokenize(0, &20, &rules);
    assert_eq!(token.category(), 11);
    assert_eq!(<(Fixed, Fixed, Fixed) as RuleList>::LEN, 3);
}

#[test]
fn closures_scan_through_adapter() {
    let rules = (scan(|pos: usize, end: &usize| (pos + 2).min(*end)),);
    let token: Token<usize> = tokenize(9, &10, &rules);
    assert_eq!(token.span(), (9, 10));
}
