//! Betting slip: the caller-owned set of picks awaiting placement.
//!
//! Placement only produces pending [`BetRecord`]s; storing them is the
//! caller's job.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SlipConfig;
use crate::error::{GamedayError, Result};
use crate::odds::AmericanOdds;
use crate::portfolio::{BetRecord, BetStatus};

/// Market a pick was taken from on the game card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Market {
    Home,
    Away,
    Spread,
    OverUnder,
    Moneyline,
}

impl Market {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Spread => "spread",
            Self::OverUnder => "over-under",
            Self::Moneyline => "moneyline",
        }
    }
}

/// A pick clicked on a game card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    pub game_id: String,
    pub market: Market,
    pub team: String,
    pub odds: AmericanOdds,
}

/// A selection with its stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipEntry {
    #[serde(flatten)]
    pub selection: Selection,
    pub amount: Decimal,
}

impl SlipEntry {
    /// # Errors
    /// Returns [`GamedayError::Overflow`] when the profit does not fit in a
    /// `Decimal`.
    pub fn to_win(&self) -> Result<Decimal> {
        self.selection.odds.to_win(self.amount)
    }

    /// # Errors
    /// Returns [`GamedayError::Overflow`] when the payout does not fit in a
    /// `Decimal`.
    pub fn payout(&self) -> Result<Decimal> {
        self.selection.odds.payout(self.amount)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SlipTotals {
    pub total_wagered: Decimal,
    pub total_payout: Decimal,
    pub potential_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetSlip {
    config: SlipConfig,
    entries: Vec<SlipEntry>,
}

impl BetSlip {
    #[must_use]
    pub fn new(config: SlipConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Builds a slip from stored entries, validating and clamping stakes.
    ///
    /// # Errors
    /// Returns [`GamedayError::InvalidStake`] for a negative stake.
    pub fn from_entries(config: SlipConfig, entries: Vec<SlipEntry>) -> Result<Self> {
        let mut slip = Self::new(config);
        for entry in entries {
            let amount = slip.checked_stake(entry.amount)?;
            slip.upsert(SlipEntry {
                selection: entry.selection,
                amount,
            });
        }
        Ok(slip)
    }

    #[must_use]
    pub fn entries(&self) -> &[SlipEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a pick at the default stake. A pick with an id already on the
    /// slip replaces it in place.
    pub fn add(&mut self, selection: Selection) {
        tracing::debug!(id = %selection.id, odds = %selection.odds, "Adding selection to slip");
        let amount = self.config.default_stake.min(self.config.max_stake);
        self.upsert(SlipEntry { selection, amount });
    }

    /// Removes a pick.
    ///
    /// # Errors
    /// Returns [`GamedayError::UnknownSelection`] if no pick has this id.
    pub fn remove(&mut self, id: &str) -> Result<SlipEntry> {
        let pos = self.position(id)?;
        tracing::debug!(id, "Removing selection from slip");
        Ok(self.entries.remove(pos))
    }

    /// Sets the stake of one pick, clamped to the configured maximum.
    ///
    /// # Errors
    /// Returns [`GamedayError::InvalidStake`] for a negative amount or
    /// [`GamedayError::UnknownSelection`] if no pick has this id.
    pub fn update_amount(&mut self, id: &str, amount: Decimal) -> Result<()> {
        let amount = self.checked_stake(amount)?;
        let pos = self.position(id)?;
        self.entries[pos].amount = amount;
        Ok(())
    }

    /// Sets every pick to the same stake.
    ///
    /// # Errors
    /// Returns [`GamedayError::InvalidStake`] for a negative amount.
    pub fn apply_quick_amount(&mut self, amount: Decimal) -> Result<()> {
        let amount = self.checked_stake(amount)?;
        for entry in &mut self.entries {
            entry.amount = amount;
        }
        Ok(())
    }

    #[must_use]
    pub fn quick_amounts(&self) -> &[Decimal] {
        &self.config.quick_amounts
    }

    /// # Errors
    /// Returns [`GamedayError::Overflow`] when a total does not fit in a
    /// `Decimal`.
    pub fn totals(&self) -> Result<SlipTotals> {
        let mut totals = SlipTotals::default();
        for entry in &self.entries {
            totals.total_wagered = totals
                .total_wagered
                .checked_add(entry.amount)
                .ok_or(GamedayError::Overflow { operation: "total_wagered" })?;
            totals.total_payout = totals
                .total_payout
                .checked_add(entry.payout()?)
                .ok_or(GamedayError::Overflow { operation: "total_payout" })?;
        }
        totals.potential_profit = totals.total_payout - totals.total_wagered;
        Ok(totals)
    }

    /// Placement requires a non-zero total stake.
    #[must_use]
    pub fn can_place(&self) -> bool {
        self.entries.iter().any(|e| !e.amount.is_zero())
    }

    /// Drains the slip into pending bet records stamped at `placed_at`.
    ///
    /// Picks left at a zero stake are cleared without producing a record.
    /// Returns an empty list and leaves the slip untouched when nothing is
    /// staked.
    ///
    /// # Errors
    /// Returns [`GamedayError::Overflow`] when a payout does not fit in a
    /// `Decimal`. The slip is left untouched.
    pub fn place(&mut self, placed_at: DateTime<Utc>) -> Result<Vec<BetRecord>> {
        if !self.can_place() {
            return Ok(Vec::new());
        }

        let records = self
            .entries
            .iter()
            .filter(|entry| !entry.amount.is_zero())
            .map(|entry| -> Result<BetRecord> {
                Ok(BetRecord {
                    potential_payout: entry.payout()?,
                    id: Some(entry.selection.id.clone()),
                    game_id: Some(entry.selection.game_id.clone()),
                    bet_type: Some(entry.selection.market.as_str().to_string()),
                    team: Some(entry.selection.team.clone()),
                    amount: entry.amount,
                    odds: entry.selection.odds,
                    status: BetStatus::Pending,
                    placed_at: Some(placed_at),
                    settled_at: None,
                })
            })
            .collect::<Result<Vec<BetRecord>>>()?;

        self.entries.clear();
        tracing::debug!(count = records.len(), "Placed bets from slip");
        Ok(records)
    }

    fn checked_stake(&self, amount: Decimal) -> Result<Decimal> {
        if amount < Decimal::ZERO {
            return Err(GamedayError::InvalidStake { amount });
        }
        Ok(amount.min(self.config.max_stake))
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.selection.id == id)
            .ok_or_else(|| GamedayError::UnknownSelection { id: id.to_string() })
    }

    fn upsert(&mut self, entry: SlipEntry) {
        let existing = self
            .entries
            .iter()
            .position(|e| e.selection.id == entry.selection.id);
        match existing {
            Some(pos) => self.entries[pos] = entry,
            None => self.entries.push(entry),
        }
    }
}

impl Default for BetSlip {
    fn default() -> Self {
        Self::new(SlipConfig::default())
    }
}
