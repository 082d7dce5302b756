//! triple-pocket: Triple Pocket Hold'em evaluation and round adjudication
//!
//! Heads-up Hold'em against a dealer who plays the best hand out of *two* hole
//! hands. The library classifies five-card hands, picks the best hand from each
//! side's pool, breaks ties within a category, and turns the result into wager
//! multiples.
//!
//! Goals:
//! - Deterministic evaluation, reproducible shuffles from a seed
//! - Small public API built on typed hands (`HoleHand`, `Community`, `Hand`)
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: adjudicate a round
//! ```
//! use triple_pocket::hand::{Community, HoleHand};
//! use triple_pocket::outcome::{determine_outcome, DealerHoles, Winner};
//!
//! let player: HoleHand = "Ad 8s".parse().unwrap();
//! let dealer = DealerHoles::new("4h 3s".parse().unwrap(), "2c 8c".parse().unwrap());
//! let community: Community = "6s 5h 4h 9s 2s".parse().unwrap();
//!
//! let outcome = determine_outcome(&player, &dealer, &community).unwrap();
//! assert_eq!(outcome.winner, Winner::Dealer);
//! assert_eq!(outcome.as_tuple(), ("high card", "straight", -1, 1));
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run -- eval -p "Ad 8s" -d "4h 3s" -d "2c 8c" -c "6s 5h 4h 9s 2s"
//! cargo run -- play --seed 7 --rounds 50
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod ledger;
pub mod outcome;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
