//! Chip balances and the wager picker.

use std::fmt;

/// A side's chip balance. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ChipStack(u64);

impl ChipStack {
    pub const fn new(chips: u64) -> Self {
        Self(chips)
    }

    pub const fn chips(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add `multiplier * wager` to the balance, flooring at zero. Returns the new balance.
    ///
    /// ```
    /// use triple_pocket::ledger::ChipStack;
    ///
    /// let mut stack = ChipStack::new(150);
    /// assert_eq!(stack.apply(4, 100), 550);
    /// assert_eq!(stack.apply(-10, 100), 0);
    /// ```
    pub fn apply(&mut self, multiplier: i64, wager: u64) -> u64 {
        let next = i128::from(self.0) + i128::from(multiplier) * i128::from(wager);
        self.0 = u64::try_from(next.max(0)).unwrap_or(u64::MAX);
        self.0
    }
}

impl fmt::Display for ChipStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chips", self.0)
    }
}

/// Bounds and step for choosing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WagerLimits {
    pub initial: u64,
    pub min: u64,
    pub increment: u64,
}

impl Default for WagerLimits {
    fn default() -> Self {
        Self { initial: 100, min: 10, increment: 10 }
    }
}

impl WagerLimits {
    /// Whether `amount` may be staked when both sides can cover at most `max`.
    ///
    /// A side short of the minimum may still stake everything it can cover.
    pub fn allows(&self, amount: u64, max: u64) -> bool {
        amount > 0 && amount <= max && (amount >= self.min || amount == max)
    }
}

/// A wager being adjusted before a round, kept within `[min, max]`.
///
/// `max` is the most both sides can cover, `min(player chips, dealer chips)`.
/// When `max` is below the limits' minimum the wager is pinned to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wager {
    amount: u64,
    max: u64,
    limits: WagerLimits,
}

impl Wager {
    /// The opening wager: the initial amount raised to the minimum, capped at `max`.
    pub fn opening(limits: WagerLimits, max: u64) -> Self {
        Self { amount: limits.initial.max(limits.min).min(max), max, limits }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Step up by one increment, capped at `max`.
    pub fn raise(&mut self) -> u64 {
        self.amount = self.amount.saturating_add(self.limits.increment).min(self.max);
        self.amount
    }

    /// Step down by one increment, floored at the minimum.
    pub fn lower(&mut self) -> u64 {
        self.amount = self
            .amount
            .saturating_sub(self.limits.increment)
            .max(self.limits.min)
            .min(self.max);
        self.amount
    }
}
