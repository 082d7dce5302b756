pub(crate) mod combinations;
pub(crate) mod detector;
pub mod tiebreak;

pub use combinations::{combinations, Combinations7Choose5, HANDS_PER_HOLE};
pub use tiebreak::{break_tie, TieBreak};

use crate::hand::{Hand, HandError};
use std::fmt;
use std::str::FromStr;

/// Poker hand category from weakest to strongest. Ordinals run 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

const NAMES: [&str; Category::COUNT] = [
    "high card",
    "one pair",
    "two pairs",
    "three of a kind",
    "straight",
    "flush",
    "full house",
    "four of a kind",
    "straight flush",
    "royal flush",
];

impl Category {
    pub const COUNT: usize = 10;

    /// All categories in ascending strength.
    pub const ALL: [Category; Category::COUNT] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Zero-based position in [`Category::ALL`], used to index static tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// The display label, e.g. `"two pairs"`.
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryParseError {
    #[error("unknown category name: '{0}'")]
    Name(String),
    #[error("category ordinal out of range 1..=10: {0}")]
    Ordinal(u8),
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == t)
            .ok_or_else(|| CategoryParseError::Name(s.to_string()))
    }
}

impl TryFrom<u8> for Category {
    type Error = CategoryParseError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Category::ALL
            .get(usize::from(v).wrapping_sub(1))
            .copied()
            .ok_or(CategoryParseError::Ordinal(v))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("no candidate hands to choose from")]
    EmptyPool,
}

/// The strongest hand found in a pool of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    pub category: Category,
    pub hand: Hand,
}

/// Classify a five-card hand into exactly one category.
///
/// ```
/// use triple_pocket::evaluator::{classify, Category};
/// use triple_pocket::hand::Hand;
///
/// let hand: Hand = "Ks Kd 9c 9h 2s".parse().unwrap();
/// assert_eq!(classify(&hand), Category::TwoPairs);
/// ```
pub fn classify(hand: &Hand) -> Category {
    detector::DETECTORS
        .iter()
        .find(|(_, detect)| detect(hand))
        .map_or(Category::HighCard, |(category, _)| *category)
}

/// Pick the best hand from `hands`, scanning in order.
///
/// A candidate replaces the running best only when its category is higher or
/// [`break_tie`] reports it strictly greater, so among equal hands the first one
/// seen is kept.
pub fn best_hand(hands: &[Hand]) -> Result<BestHand, EvalError> {
    let (first, rest) = hands.split_first().ok_or(EvalError::EmptyPool)?;
    let mut best = BestHand { category: classify(first), hand: *first };

    for hand in rest {
        let category = classify(hand);
        let replaces = category > best.category
            || (category == best.category
                && break_tie(&best.hand, hand, category) == TieBreak::Second);
        if replaces {
            best = BestHand { category, hand: *hand };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.name().parse::<Category>().unwrap(), c);
            assert_eq!(c.to_string(), c.name());
        }
        assert!("pair".parse::<Category>().is_err());
    }

    #[test]
    fn ordinals_follow_strength() {
        assert_eq!(Category::HighCard.ordinal(), 1);
        assert_eq!(Category::RoyalFlush.ordinal(), 10);
        assert_eq!(Category::try_from(7).unwrap(), Category::FullHouse);
        assert_eq!(Category::try_from(0), Err(CategoryParseError::Ordinal(0)));
        assert_eq!(Category::try_from(11), Err(CategoryParseError::Ordinal(11)));
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn classify_every_category() {
        assert_eq!(classify(&hand("As Ks Qs Js 10s")), Category::RoyalFlush);
        assert_eq!(classify(&hand("9h 8h 7h 6h 5h")), Category::StraightFlush);
        assert_eq!(classify(&hand("Kc Kd Kh Ks 2s")), Category::FourOfAKind);
        assert_eq!(classify(&hand("Tc Td Th 2s 2h")), Category::FullHouse);
        assert_eq!(classify(&hand("Ah 9h 7h 3h 2h")), Category::Flush);
        assert_eq!(classify(&hand("9s 8h 7d 6c 5s")), Category::Straight);
        assert_eq!(classify(&hand("Qc Qd Qh 9s 2c")), Category::ThreeOfAKind);
        assert_eq!(classify(&hand("Jc Jd 9c 9h 2s")), Category::TwoPairs);
        assert_eq!(classify(&hand("Ah Ad Ts 9c 2d")), Category::OnePair);
        assert_eq!(classify(&hand("Ah Kd 7s 5c 2d")), Category::HighCard);
    }

    #[test]
    fn wheel_is_not_a_straight() {
        assert_eq!(classify(&hand("Ac 5d 4h 3s 2c")), Category::HighCard);
        assert_eq!(classify(&hand("Ac 5c 4c 3c 2c")), Category::Flush);
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert_eq!(best_hand(&[]), Err(EvalError::EmptyPool));
    }

    #[test]
    fn higher_category_replaces_running_best() {
        let pool = [hand("Ah Kd 7s 5c 2d"), hand("Jc Jd 9c 9h 2s"), hand("Ah Ad Ts 9c 2d")];
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::TwoPairs);
        assert_eq!(best.hand, pool[1]);
    }

    #[test]
    fn strictly_better_tie_break_replaces() {
        let pool = [hand("Kc Kd 7s 5c 2d"), hand("Ac Ad 7h 5h 2h")];
        let best = best_hand(&pool).unwrap();
        assert_eq!(best.category, Category::OnePair);
        assert_eq!(best.hand, pool[1]);
    }

    #[test]
    fn exact_tie_keeps_first_seen() {
        let first = hand("Qc Qd 9s 6c 3d");
        let second = hand("Qh Qs 9c 6d 3h");
        let best = best_hand(&[hand("Jc Td 8s 5c 2d"), first, second]).unwrap();
        assert_eq!(best.category, Category::OnePair);
        assert_eq!(best.hand, first);
        assert_eq!(best.hand.cards()[0], Card::new(Rank::Queen, Suit::Clubs));
    }
}
