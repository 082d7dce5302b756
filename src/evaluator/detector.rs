//! Category predicates over a descending-sorted five-card [`Hand`].
//!
//! Each predicate only looks at card positions, so it is only meaningful inside
//! the priority order of [`DETECTORS`]: a hand with four of a kind also
//! satisfies the three of a kind and pair predicates.

use super::Category;
use crate::hand::Hand;

pub type Detect = fn(&Hand) -> bool;

/// Detectors in priority order, strongest first. The first match wins.
pub const DETECTORS: [(Category, Detect); Category::COUNT] = [
    (Category::RoyalFlush, is_royal_flush),
    (Category::StraightFlush, is_straight_flush),
    (Category::FourOfAKind, is_four_of_a_kind),
    (Category::FullHouse, is_full_house),
    (Category::Flush, is_flush),
    (Category::Straight, is_straight),
    (Category::ThreeOfAKind, is_three_of_a_kind),
    (Category::TwoPairs, is_two_pairs),
    (Category::OnePair, is_one_pair),
    (Category::HighCard, is_high_card),
];

/// True when positions `from..=to` all share a rank.
fn same_rank(hand: &Hand, from: usize, to: usize) -> bool {
    (from + 1..=to).all(|i| hand.rank(i) == hand.rank(from))
}

pub fn is_royal_flush(hand: &Hand) -> bool {
    use crate::cards::Rank::*;
    hand.ranks() == [Ace, King, Queen, Jack, Ten] && is_flush(hand)
}

pub fn is_straight_flush(hand: &Hand) -> bool {
    is_flush(hand) && is_straight(hand)
}

pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    same_rank(hand, 0, 3) || same_rank(hand, 1, 4)
}

pub fn is_full_house(hand: &Hand) -> bool {
    (same_rank(hand, 0, 2) && same_rank(hand, 3, 4))
        || (same_rank(hand, 0, 1) && same_rank(hand, 2, 4))
}

pub fn is_flush(hand: &Hand) -> bool {
    let suit = hand.cards()[0].suit();
    hand.cards().iter().all(|c| c.suit() == suit)
}

/// Five consecutive ranks. The ace only plays high.
pub fn is_straight(hand: &Hand) -> bool {
    hand.cards().windows(2).all(|w| w[0].rank().value() == w[1].rank().value() + 1)
}

pub fn is_three_of_a_kind(hand: &Hand) -> bool {
    (0..=2).any(|start| same_rank(hand, start, start + 2))
}

pub fn is_two_pairs(hand: &Hand) -> bool {
    (same_rank(hand, 0, 1) && same_rank(hand, 2, 3))
        || (same_rank(hand, 0, 1) && same_rank(hand, 3, 4))
        || (same_rank(hand, 1, 2) && same_rank(hand, 3, 4))
}

pub fn is_one_pair(hand: &Hand) -> bool {
    (0..4).any(|start| same_rank(hand, start, start + 1))
}

pub fn is_high_card(_hand: &Hand) -> bool {
    true
}
