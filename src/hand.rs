use crate::cards::{parse_cards, Card, Rank};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole hand")]
    DuplicateHoleCards,
    #[error("duplicate cards in community cards")]
    DuplicateCommunityCards,
    #[error("card {0} appears more than once in the round")]
    DuplicateCard(Card),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("expected exactly five community cards, got {0}")]
    CommunityCount(usize),
    #[error("expected exactly five cards in a hand, got {0}")]
    CardCount(usize),
    #[error("hand is not sorted by descending rank")]
    Unsorted,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Two private cards dealt to one side.
///
/// ```
/// use triple_pocket::cards::{Card, Rank, Suit};
/// use triple_pocket::hand::HoleHand;
///
/// let hole = HoleHand::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleHand([Card; 2]);

impl HoleHand {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self([a, b]))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0[0]
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.0[1]
    }

    pub fn as_array(&self) -> [Card; 2] {
        self.0
    }

    /// True when both cards share a rank.
    pub fn is_pocket_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }
}

impl FromStr for HoleHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// The five shared cards.
///
/// ```
/// use triple_pocket::hand::Community;
///
/// let community: Community = "Ks Qs Js 10s 2s".parse().unwrap();
/// assert_eq!(community.as_array().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Community([Card; 5]);

impl Community {
    pub fn try_new(cards: [Card; 5]) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCommunityCards);
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] =
            slice.try_into().map_err(|_| HandError::CommunityCount(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn as_array(&self) -> [Card; 5] {
        self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl FromStr for Community {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Five cards ordered by descending rank.
///
/// Every classifier and tie-break rule indexes into this ordering, so the only
/// ways to build a `Hand` either sort the cards or check that they are sorted.
/// Sorting is stable: cards of equal rank keep their input order.
///
/// ```
/// use triple_pocket::cards::{parse_cards, Rank};
/// use triple_pocket::hand::Hand;
///
/// let cards = parse_cards("2c 9h Ad 9s Kc").unwrap();
/// let hand = Hand::try_from(cards.as_slice()).unwrap();
/// assert_eq!(hand.ranks(), [Rank::Ace, Rank::King, Rank::Nine, Rank::Nine, Rank::Two]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    /// Sort `cards` by descending rank and wrap them.
    pub fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Self(cards)
    }

    /// Wrap cards that are already in descending rank order.
    pub fn try_from_sorted(cards: [Card; 5]) -> Result<Self, HandError> {
        if cards.windows(2).any(|w| w[0].rank() < w[1].rank()) {
            return Err(HandError::Unsorted);
        }
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    pub fn ranks(&self) -> [Rank; 5] {
        self.0.map(Card::rank)
    }

    /// Rank at position `i` (0 is the highest card).
    pub fn rank(&self, i: usize) -> Rank {
        self.0[i].rank()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; 5] = slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self::new(cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_from(cards.as_slice())
    }
}

/// Check that the eleven cards of a round are pairwise distinct.
///
/// Dealing from a [`Deck`](crate::deck::Deck) guarantees this already; the
/// adjudication functions do not call it and evaluate whatever cards they are given.
pub fn validate_round(
    player: &HoleHand,
    dealer_first: &HoleHand,
    dealer_second: &HoleHand,
    community: &Community,
) -> Result<(), HandError> {
    let mut seen: HashSet<Card> = HashSet::with_capacity(11);
    let all = player
        .as_array()
        .into_iter()
        .chain(dealer_first.as_array())
        .chain(dealer_second.as_array())
        .chain(community.as_array());
    for card in all {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn hole_hand_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleHand::try_new(a, a), Err(HandError::DuplicateHoleCards)));
    }

    #[test]
    fn arity_is_checked() {
        let cards = parse_cards("As Kd Qh").unwrap();
        assert_eq!(HoleHand::from_slice(&cards), Err(HandError::HoleCount(3)));
        assert_eq!(Community::from_slice(&cards), Err(HandError::CommunityCount(3)));
        assert_eq!(Hand::try_from(cards.as_slice()), Err(HandError::CardCount(3)));
    }

    #[test]
    fn community_rejects_repeats() {
        let c = Card::new(Rank::Two, Suit::Clubs);
        let cards = [
            c,
            c,
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(Community::try_new(cards), Err(HandError::DuplicateCommunityCards));
    }

    #[test]
    fn hand_sort_is_stable_for_equal_ranks() {
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let hand = Hand::new([
            Card::new(Rank::Two, Suit::Clubs),
            ad,
            Card::new(Rank::King, Suit::Spades),
            as_,
            Card::new(Rank::Ten, Suit::Spades),
        ]);
        assert_eq!(hand.cards()[0], ad);
        assert_eq!(hand.cards()[1], as_);
        assert_eq!(hand.rank(4), Rank::Two);
    }

    #[test]
    fn try_from_sorted_rejects_ascending_input() {
        let cards = parse_cards("2c 3c 4c 5c 6c").unwrap();
        let arr: [Card; 5] = cards.as_slice().try_into().unwrap();
        assert_eq!(Hand::try_from_sorted(arr), Err(HandError::Unsorted));

        let sorted = Hand::new(arr);
        assert_eq!(Hand::try_from_sorted(*sorted.cards()), Ok(sorted));
    }

    #[test]
    fn validate_round_finds_repeated_card() {
        let player: HoleHand = "Ad As".parse().unwrap();
        let first: HoleHand = "4h As".parse().unwrap();
        let second: HoleHand = "2c 8c".parse().unwrap();
        let community: Community = "Ks Qs Js 10s 2s".parse().unwrap();
        let err = validate_round(&player, &first, &second, &community).unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));

        let first: HoleHand = "4h 3d".parse().unwrap();
        validate_round(&player, &first, &second, &community).unwrap();
    }

    #[test]
    fn parsing_interfaces_work() {
        let hole: HoleHand = "As Kd".parse().unwrap();
        assert_eq!(hole.first(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hole.second(), Card::new(Rank::King, Suit::Diamonds));
        assert!(!hole.is_pocket_pair());

        let community: Community = "2c, 3c 4c 5d 6h".parse().unwrap();
        assert_eq!(community.as_slice().len(), 5);
        assert!("2c 3c".parse::<Community>().is_err());
    }
}
