//! Round adjudication: best hand per side, winner, and wager multiples.

use crate::evaluator::{best_hand, break_tie, combinations, Category, EvalError, TieBreak};
use crate::hand::{Community, Hand, HoleHand};
use log::debug;

/// Player bonus when the player wins, indexed by [`Category::index`].
const BONUS: [i64; Category::COUNT] = [
    1,  // high card
    1,  // one pair
    1,  // two pairs
    1,  // three of a kind
    1,  // straight
    2,  // flush
    4,  // full house
    10, // four of a kind
    20, // straight flush
    50, // royal flush
];

/// Multiple paid to the player for winning with `category`.
pub const fn bonus(category: Category) -> i64 {
    BONUS[category.index()]
}

/// Who took the round. Discriminants are the game's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Winner {
    Tie = 0,
    Player = 1,
    Dealer = 2,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("winner code out of range 0..=2: {0}")]
pub struct WinnerCodeError(pub u8);

impl TryFrom<u8> for Winner {
    type Error = WinnerCodeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Winner::Tie),
            1 => Ok(Winner::Player),
            2 => Ok(Winner::Dealer),
            _ => Err(WinnerCodeError(v)),
        }
    }
}

/// A tie-break between the player's hand (first) and the dealer's (second).
impl From<TieBreak> for Winner {
    fn from(t: TieBreak) -> Self {
        match t {
            TieBreak::Equal => Winner::Tie,
            TieBreak::First => Winner::Player,
            TieBreak::Second => Winner::Dealer,
        }
    }
}

/// `(player, dealer)` multiples for a finished round.
///
/// The bonus is looked up by the player's category only, whatever the dealer held.
///
/// ```
/// use triple_pocket::evaluator::Category;
/// use triple_pocket::outcome::{wager_multiples, Winner};
///
/// assert_eq!(wager_multiples(Winner::Player, Category::RoyalFlush), (50, -50));
/// assert_eq!(wager_multiples(Winner::Dealer, Category::Straight), (-1, 1));
/// assert_eq!(wager_multiples(Winner::Tie, Category::StraightFlush), (0, 0));
/// ```
pub const fn wager_multiples(winner: Winner, player_category: Category) -> (i64, i64) {
    match winner {
        Winner::Dealer => (-1, 1),
        Winner::Tie => (0, 0),
        Winner::Player => {
            let m = bonus(player_category);
            (m, -m)
        }
    }
}

/// The dealer's two hole hands. The dealer plays the best hand from either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerHoles {
    pub first: HoleHand,
    pub second: HoleHand,
}

impl DealerHoles {
    pub fn new(first: HoleHand, second: HoleHand) -> Self {
        Self { first, second }
    }
}

/// The adjudicated result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome {
    pub winner: Winner,
    pub player_category: Category,
    pub dealer_category: Category,
    pub player_multiplier: i64,
    pub dealer_multiplier: i64,
    pub player_best: Hand,
    pub dealer_best: Hand,
}

impl Outcome {
    /// `(player category name, dealer category name, player multiple, dealer multiple)`.
    pub fn as_tuple(&self) -> (&'static str, &'static str, i64, i64) {
        (
            self.player_category.name(),
            self.dealer_category.name(),
            self.player_multiplier,
            self.dealer_multiplier,
        )
    }
}

/// Adjudicate a round between the player's hole hand and the dealer's two.
///
/// The player's pool is the 21 hands from `player` plus `community`; the
/// dealer's pool is the 42 hands from both dealer hole hands, scanned first
/// hand first. Cards are taken as given; see [`crate::hand::validate_round`]
/// for an optional distinctness check.
///
/// ```
/// use triple_pocket::hand::{Community, HoleHand};
/// use triple_pocket::outcome::{determine_outcome, DealerHoles};
///
/// let player: HoleHand = "Ad 6s".parse().unwrap();
/// let dealer = DealerHoles::new("4h 3s".parse().unwrap(), "2c 8c".parse().unwrap());
/// let community: Community = "6h 5s 4s 3s 2s".parse().unwrap();
///
/// let outcome = determine_outcome(&player, &dealer, &community).unwrap();
/// assert_eq!(outcome.as_tuple(), ("straight flush", "flush", 20, -20));
/// ```
pub fn determine_outcome(
    player: &HoleHand,
    dealer: &DealerHoles,
    community: &Community,
) -> Result<Outcome, EvalError> {
    let player_pool = combinations(player, community);
    let player_best = best_hand(&player_pool)?;
    debug!("player best: {} {:?}", player_best.category, player_best.hand.cards());

    let mut dealer_pool = combinations(&dealer.first, community);
    dealer_pool.extend(combinations(&dealer.second, community));
    let dealer_best = best_hand(&dealer_pool)?;
    debug!("dealer best: {} {:?}", dealer_best.category, dealer_best.hand.cards());

    let winner = match player_best.category.cmp(&dealer_best.category) {
        core::cmp::Ordering::Greater => Winner::Player,
        core::cmp::Ordering::Less => Winner::Dealer,
        core::cmp::Ordering::Equal => {
            let t = break_tie(&player_best.hand, &dealer_best.hand, player_best.category);
            debug!("both sides hold {}, tie-break {:?}", player_best.category, t);
            Winner::from(t)
        }
    };

    let (player_multiplier, dealer_multiplier) = wager_multiples(winner, player_best.category);
    Ok(Outcome {
        winner,
        player_category: player_best.category,
        dealer_category: dealer_best.category,
        player_multiplier,
        dealer_multiplier,
        player_best: player_best.hand,
        dealer_best: dealer_best.hand,
    })
}
