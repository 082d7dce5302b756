//! Tie-breaking between two hands of the same [`Category`].
//!
//! Every rule reads ranks by position from descending-sorted hands, pulls out
//! the fields that matter for the category (quad rank, pair ranks, kickers) and
//! compares them field by field.
//!
//! Two rules keep the game's established, asymmetric behaviour:
//!
//! - Flush and high card: the first hand wins at the first position where it is
//!   higher. A position where the second hand is higher never decides, so these
//!   comparisons only ever return [`TieBreak::First`] or [`TieBreak::Equal`].
//! - Three of a kind: once trips and first kicker match, the second hand can only
//!   win if its second kicker beats its own first kicker, which a sorted trips
//!   hand never allows. A better second kicker on the second hand reads as equal.
//!
//! Both are pinned by tests; any change to them changes payouts.

use super::Category;
use crate::cards::Rank;
use crate::hand::Hand;
use core::cmp::Ordering;

/// Result of comparing two hands: equal, first greater, or second greater.
/// The discriminants are the game's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TieBreak {
    Equal = 0,
    First = 1,
    Second = 2,
}

impl TieBreak {
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The result with the roles of the two hands swapped.
    pub const fn reversed(self) -> Self {
        match self {
            TieBreak::Equal => TieBreak::Equal,
            TieBreak::First => TieBreak::Second,
            TieBreak::Second => TieBreak::First,
        }
    }

    fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => TieBreak::First,
            Ordering::Less => TieBreak::Second,
            Ordering::Equal => TieBreak::Equal,
        }
    }
}

/// Decide which of two same-category hands is stronger.
///
/// ```
/// use triple_pocket::evaluator::{break_tie, Category, TieBreak};
/// use triple_pocket::hand::Hand;
///
/// let a: Hand = "Qs Qh 4d 4c 3s".parse().unwrap();
/// let b: Hand = "Qs Qh Jd Jc 2s".parse().unwrap();
/// assert_eq!(break_tie(&a, &b, Category::TwoPairs), TieBreak::Second);
/// ```
pub fn break_tie(first: &Hand, second: &Hand, category: Category) -> TieBreak {
    match category {
        Category::RoyalFlush => TieBreak::Equal,
        Category::StraightFlush | Category::Straight => straight(first, second),
        Category::FourOfAKind => four_of_a_kind(first, second),
        Category::FullHouse => full_house(first, second),
        Category::Flush | Category::HighCard => high_card(first, second),
        Category::ThreeOfAKind => three_of_a_kind(first, second),
        Category::TwoPairs => two_pairs(first, second),
        Category::OnePair => one_pair(first, second),
    }
}

/// Compare equal-length field lists; the first differing field decides.
fn compare_fields(first: &[Rank], second: &[Rank]) -> TieBreak {
    first
        .iter()
        .zip(second)
        .map(|(a, b)| a.cmp(b))
        .find(|ord| ord.is_ne())
        .map_or(TieBreak::Equal, TieBreak::from_ordering)
}

fn straight(first: &Hand, second: &Hand) -> TieBreak {
    compare_fields(&[first.rank(0)], &[second.rank(0)])
}

/// `[quad rank, kicker]`. The quad block starts at position 0 or 1.
fn quads_key(hand: &Hand) -> [Rank; 2] {
    if hand.rank(0) == hand.rank(1) {
        [hand.rank(0), hand.rank(4)]
    } else {
        [hand.rank(1), hand.rank(0)]
    }
}

fn four_of_a_kind(first: &Hand, second: &Hand) -> TieBreak {
    compare_fields(&quads_key(first), &quads_key(second))
}

/// `[trips rank, pair rank]` for either trips-then-pair or pair-then-trips.
fn full_house_key(hand: &Hand) -> [Rank; 2] {
    if hand.rank(0) == hand.rank(1) && hand.rank(0) == hand.rank(2) {
        [hand.rank(0), hand.rank(3)]
    } else {
        [hand.rank(2), hand.rank(0)]
    }
}

fn full_house(first: &Hand, second: &Hand) -> TieBreak {
    compare_fields(&full_house_key(first), &full_house_key(second))
}

fn high_card(first: &Hand, second: &Hand) -> TieBreak {
    for (a, b) in first.ranks().into_iter().zip(second.ranks()) {
        if a > b {
            return TieBreak::First;
        }
        // a higher card on `second` does not settle it; keep scanning
    }
    TieBreak::Equal
}

struct TripsKey {
    trips: Rank,
    kickers: [Rank; 2],
}

impl TripsKey {
    fn of(hand: &Hand) -> Self {
        let r = hand.ranks();
        if r[0] == r[1] && r[0] == r[2] {
            Self { trips: r[0], kickers: [r[3], r[4]] }
        } else if r[1] == r[2] && r[1] == r[3] {
            Self { trips: r[1], kickers: [r[0], r[4]] }
        } else {
            Self { trips: r[2], kickers: [r[0], r[1]] }
        }
    }
}

fn three_of_a_kind(first: &Hand, second: &Hand) -> TieBreak {
    let (a, b) = (TripsKey::of(first), TripsKey::of(second));
    match compare_fields(&[a.trips, a.kickers[0]], &[b.trips, b.kickers[0]]) {
        TieBreak::Equal => {}
        decided => return decided,
    }
    if a.kickers[1] > b.kickers[1] {
        TieBreak::First
    } else if b.kickers[1] > b.kickers[0] {
        TieBreak::Second
    } else {
        TieBreak::Equal
    }
}

/// `[high pair, low pair, kicker]` across the three possible layouts.
fn two_pairs_key(hand: &Hand) -> [Rank; 3] {
    let r = hand.ranks();
    if r[0] == r[1] && r[2] == r[3] {
        [r[0], r[2], r[4]]
    } else if r[0] == r[1] {
        [r[0], r[3], r[2]]
    } else {
        [r[1], r[3], r[0]]
    }
}

fn two_pairs(first: &Hand, second: &Hand) -> TieBreak {
    compare_fields(&two_pairs_key(first), &two_pairs_key(second))
}

/// `[pair rank, kicker, kicker, kicker]` with kickers high to low.
fn one_pair_key(hand: &Hand) -> [Rank; 4] {
    let r = hand.ranks();
    if r[0] == r[1] {
        [r[0], r[2], r[3], r[4]]
    } else if r[1] == r[2] {
        [r[1], r[0], r[3], r[4]]
    } else if r[2] == r[3] {
        [r[2], r[0], r[1], r[4]]
    } else {
        [r[3], r[0], r[1], r[2]]
    }
}

fn one_pair(first: &Hand, second: &Hand) -> TieBreak {
    compare_fields(&one_pair_key(first), &one_pair_key(second))
}
