use crate::cards::{Card, Rank, Suit};
use crate::hand::{Community, HandError, HoleHand};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: needed {needed} cards, {left} left")]
    Exhausted { needed: usize, left: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A standard 52-card deck. Cards are drawn from the end.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit (diamonds, hearts, spades, clubs), deuce to ace.
    ///
    /// ```
    /// use triple_pocket::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn take<const N: usize>(&mut self) -> Result<[Card; N], DeckError> {
        let left = self.cards.len();
        if left < N {
            return Err(DeckError::Exhausted { needed: N, left });
        }
        // top of the deck first, same order as repeated `draw`
        let mut drawn = self.cards.split_off(left - N);
        drawn.reverse();
        drawn.try_into().map_err(|_| DeckError::Exhausted { needed: N, left })
    }

    /// Draw two cards as a hole hand. Nothing is drawn if fewer than two remain.
    pub fn draw_hole_hand(&mut self) -> Result<HoleHand, DeckError> {
        let [a, b] = self.take::<2>()?;
        Ok(HoleHand::try_new(a, b)?)
    }

    /// Draw the five community cards. Nothing is drawn if fewer than five remain.
    pub fn draw_community(&mut self) -> Result<Community, DeckError> {
        let cards = self.take::<5>()?;
        Ok(Community::try_new(cards)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn unshuffled_deck_draws_clubs_ace_first() {
        let mut d = Deck::standard();
        assert_eq!(d.cards[0], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(d.draw(), Some(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(d.draw(), Some(Card::new(Rank::King, Suit::Clubs)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn hole_hand_and_community_take_from_the_top() {
        let mut d = Deck::standard();
        let hole = d.draw_hole_hand().unwrap();
        assert_eq!(hole.first(), Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(hole.second(), Card::new(Rank::King, Suit::Clubs));
        let community = d.draw_community().unwrap();
        assert_eq!(community.as_array()[0], Card::new(Rank::Queen, Suit::Clubs));
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn exhausted_deck_draws_nothing() {
        let mut d = Deck::standard();
        for _ in 0..49 {
            d.draw();
        }
        assert_eq!(d.draw_community(), Err(DeckError::Exhausted { needed: 5, left: 3 }));
        assert_eq!(d.len(), 3);
        assert!(d.draw_hole_hand().is_ok());
        assert_eq!(d.draw_hole_hand(), Err(DeckError::Exhausted { needed: 2, left: 1 }));
    }

    #[test]
    fn a_full_round_fits_in_one_deck() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let holes: Vec<HoleHand> = (0..3).map(|_| d.draw_hole_hand().unwrap()).collect();
        let community = d.draw_community().unwrap();
        assert_eq!(d.len(), 41);
        crate::hand::validate_round(&holes[0], &holes[1], &holes[2], &community).unwrap();
    }
}
