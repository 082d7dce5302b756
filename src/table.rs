//! Table: round flow between the player and the dealer.
//!
//! Each round is dealt from a freshly shuffled deck. Three hole hands are drawn
//! and offered to the player in turn through a [`PocketChooser`]; every refused
//! hand goes to the dealer, and the player must keep the third if both earlier
//! offers are refused. The round is then adjudicated with
//! [`determine_outcome`] and both chip stacks are settled.

use crate::config::GameConfig;
use crate::deck::{Deck, DeckError};
use crate::evaluator::EvalError;
use crate::hand::{Community, HoleHand};
use crate::ledger::{ChipStack, Wager};
use crate::outcome::{determine_outcome, DealerHoles, Outcome};
use core::fmt;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Which of the two optional offers is being made. The third hole hand is never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offer {
    First,
    Second,
}

/// Decides whether the player picks up an offered hole hand.
pub trait PocketChooser {
    /// Return true to keep `hole`.
    fn accept(&mut self, hole: &HoleHand, offer: Offer) -> bool;
}

impl<F> PocketChooser for F
where
    F: FnMut(&HoleHand, Offer) -> bool,
{
    fn accept(&mut self, hole: &HoleHand, offer: Offer) -> bool {
        self(hole, offer)
    }
}

/// Always keeps the first offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptFirst;

impl PocketChooser for AcceptFirst {
    fn accept(&mut self, _hole: &HoleHand, _offer: Offer) -> bool {
        true
    }
}

/// Keeps a pocket pair or any hand holding an ace; otherwise waits for the next offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptStrong;

impl PocketChooser for AcceptStrong {
    fn accept(&mut self, hole: &HoleHand, _offer: Offer) -> bool {
        use crate::cards::Rank;
        hole.is_pocket_pair() || hole.as_array().iter().any(|c| c.rank() == Rank::Ace)
    }
}

/// How the three drawn hole hands were split between the sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketSelection {
    pub player: HoleHand,
    pub dealer: DealerHoles,
    /// The offer the player accepted, or `None` when they were left with the third hand.
    pub accepted: Option<Offer>,
}

/// Offer `holes` to the player in order and hand the rest to the dealer.
///
/// The dealer's hole hands keep draw order.
///
/// ```
/// use triple_pocket::hand::HoleHand;
/// use triple_pocket::table::{select_pockets, Offer};
///
/// let holes: [HoleHand; 3] =
///     ["7c 2d", "Ah Kh", "9s 9d"].map(|s| s.parse().unwrap());
/// let sel = select_pockets(holes, &mut |_: &HoleHand, offer: Offer| offer == Offer::Second);
/// assert_eq!(sel.player, holes[1]);
/// assert_eq!((sel.dealer.first, sel.dealer.second), (holes[0], holes[2]));
/// ```
pub fn select_pockets<C>(holes: [HoleHand; 3], chooser: &mut C) -> PocketSelection
where
    C: PocketChooser + ?Sized,
{
    let [a, b, c] = holes;
    if chooser.accept(&a, Offer::First) {
        PocketSelection { player: a, dealer: DealerHoles::new(b, c), accepted: Some(Offer::First) }
    } else if chooser.accept(&b, Offer::Second) {
        PocketSelection { player: b, dealer: DealerHoles::new(a, c), accepted: Some(Offer::Second) }
    } else {
        PocketSelection { player: c, dealer: DealerHoles::new(a, b), accepted: None }
    }
}

/// Whether the game can go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStatus {
    Continuing,
    PlayerBusted,
    DealerBusted,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableStatus::Continuing => "continuing",
            TableStatus::PlayerBusted => "player out of chips",
            TableStatus::DealerBusted => "dealer out of chips",
        };
        f.write_str(s)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("invalid wager {amount}: must be between {min} and {max}")]
    InvalidWager { amount: u64, min: u64, max: u64 },
    #[error("game over ({0}); reset the table to play again")]
    GameOver(TableStatus),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundReport {
    pub round: u64,
    pub wager: u64,
    pub selection: PocketSelection,
    pub community: Community,
    pub outcome: Outcome,
    pub player_chips: u64,
    pub dealer_chips: u64,
    pub status: TableStatus,
}

/// A heads-up table between the player and the dealer.
#[derive(Debug, Clone)]
pub struct Table {
    config: GameConfig,
    player: ChipStack,
    dealer: ChipStack,
    rng: ChaCha8Rng,
    rounds: u64,
}

impl Table {
    /// A new table with both sides at the configured starting chips.
    /// `seed` drives every shuffle, so equal seeds replay equal games.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            player: ChipStack::new(config.starting_chips),
            dealer: ChipStack::new(config.starting_chips),
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> ChipStack {
        self.player
    }

    pub fn dealer(&self) -> ChipStack {
        self.dealer
    }

    /// Rounds played since the last reset.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn status(&self) -> TableStatus {
        if self.dealer.is_empty() {
            TableStatus::DealerBusted
        } else if self.player.is_empty() {
            TableStatus::PlayerBusted
        } else {
            TableStatus::Continuing
        }
    }

    /// The largest wager both sides can cover.
    pub fn max_wager(&self) -> u64 {
        self.player.chips().min(self.dealer.chips())
    }

    /// The wager picker for the next round.
    pub fn opening_wager(&self) -> Wager {
        Wager::opening(self.config.wager, self.max_wager())
    }

    /// `requested` moved into the range [`Table::play_round`] accepts: raised to
    /// the minimum wager, then capped at [`Table::max_wager`].
    pub fn clamp_wager(&self, requested: u64) -> u64 {
        requested.max(self.config.wager.min).min(self.max_wager())
    }

    /// Restore both stacks to the starting chips. The shuffle sequence carries on.
    pub fn reset(&mut self) {
        self.player = ChipStack::new(self.config.starting_chips);
        self.dealer = ChipStack::new(self.config.starting_chips);
        self.rounds = 0;
        info!("table reset: both sides at {}", self.player);
    }

    /// Play one round for `wager` chips.
    pub fn play_round<C>(&mut self, wager: u64, chooser: &mut C) -> Result<RoundReport, TableError>
    where
        C: PocketChooser + ?Sized,
    {
        let status = self.status();
        if status != TableStatus::Continuing {
            return Err(TableError::GameOver(status));
        }
        let max = self.max_wager();
        if !self.config.wager.allows(wager, max) {
            return Err(TableError::InvalidWager { amount: wager, min: self.config.wager.min, max });
        }

        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        let holes = [deck.draw_hole_hand()?, deck.draw_hole_hand()?, deck.draw_hole_hand()?];
        let selection = select_pockets(holes, chooser);
        let community = deck.draw_community()?;

        let outcome = determine_outcome(&selection.player, &selection.dealer, &community)?;
        let player_chips = self.player.apply(outcome.player_multiplier, wager);
        let dealer_chips = self.dealer.apply(outcome.dealer_multiplier, wager);
        self.rounds += 1;

        info!(
            "round {}: wager {} | player {} vs dealer {} -> {:?} | player {} dealer {}",
            self.rounds,
            wager,
            outcome.player_category,
            outcome.dealer_category,
            outcome.winner,
            player_chips,
            dealer_chips
        );

        let status = self.status();
        if status != TableStatus::Continuing {
            warn!("game over after {} rounds: {}", self.rounds, status);
        }

        Ok(RoundReport {
            round: self.rounds,
            wager,
            selection,
            community,
            outcome,
            player_chips,
            dealer_chips,
            status,
        })
    }
}
