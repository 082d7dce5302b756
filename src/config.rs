use crate::ledger::WagerLimits;

/// Table setup: starting balances and wager limits.
///
/// ```
/// use triple_pocket::config::GameConfig;
///
/// let cfg = GameConfig::default().with_starting_chips(500).with_min_wager(25);
/// assert_eq!(cfg.starting_chips, 500);
/// assert_eq!(cfg.wager.min, 25);
/// assert_eq!(cfg.wager.initial, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub starting_chips: u64,
    pub wager: WagerLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { starting_chips: 1000, wager: WagerLimits::default() }
    }
}

impl GameConfig {
    pub fn with_starting_chips(mut self, chips: u64) -> Self {
        self.starting_chips = chips;
        self
    }

    pub fn with_initial_wager(mut self, amount: u64) -> Self {
        self.wager.initial = amount;
        self
    }

    pub fn with_min_wager(mut self, amount: u64) -> Self {
        self.wager.min = amount;
        self
    }

    pub fn with_wager_increment(mut self, amount: u64) -> Self {
        self.wager.increment = amount;
        self
    }
}
