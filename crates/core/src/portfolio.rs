//! Bet history statistics.
//!
//! Stats are a full snapshot recomputed from the history on every call.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GamedayError, Result};
use crate::odds::AmericanOdds;

/// Settlement state of a recorded wager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    #[default]
    Pending,
    Won,
    Lost,
    Pushed,
}

impl BetStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Won => "WON",
            Self::Lost => "LOST",
            Self::Pushed => "PUSH",
        }
    }
}

/// A wager as stored in the bet history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub game_id: Option<String>,
    /// Market the wager was placed on (spread, moneyline, over-under, ...).
    #[serde(default)]
    pub bet_type: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    pub amount: Decimal,
    pub odds: AmericanOdds,
    pub potential_payout: Decimal,
    #[serde(default)]
    pub status: BetStatus,
    #[serde(default)]
    pub placed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_bets: usize,
    pub total_wagered: Decimal,
    /// Payouts collected on won bets.
    pub total_won: Decimal,
    /// Stakes forfeited on lost bets.
    pub total_lost: Decimal,
    pub net_profit: Decimal,
    /// Percent of settled won/lost bets that won. Pushes and pending bets
    /// are excluded. Zero when nothing has settled.
    pub win_rate: Decimal,
    /// `(total_won - total_lost) / total_wagered * 100`, zero when nothing
    /// was wagered.
    pub roi: Decimal,
    pub active_bets: usize,
    pub won_count: usize,
    pub lost_count: usize,
    pub pushed_bets: usize,
}

/// Reduces a bet history into portfolio statistics.
///
/// # Errors
/// Returns [`GamedayError::Overflow`] when a money total or the ROI does not
/// fit in a `Decimal`.
///
/// # Examples
/// ```
/// use gameday_core::portfolio::aggregate;
///
/// let stats = aggregate(&[]).unwrap();
/// assert_eq!(stats.total_bets, 0);
/// assert!(stats.win_rate.is_zero());
/// assert!(stats.roi.is_zero());
/// ```
pub fn aggregate(bets: &[BetRecord]) -> Result<PortfolioStats> {
    let mut stats = PortfolioStats {
        total_bets: bets.len(),
        ..PortfolioStats::default()
    };

    for bet in bets {
        stats.total_wagered = checked_sum(stats.total_wagered, bet.amount, "total_wagered")?;
        match bet.status {
            BetStatus::Won => {
                stats.won_count += 1;
                stats.total_won = checked_sum(stats.total_won, bet.potential_payout, "total_won")?;
            }
            BetStatus::Lost => {
                stats.lost_count += 1;
                stats.total_lost = checked_sum(stats.total_lost, bet.amount, "total_lost")?;
            }
            BetStatus::Pending => stats.active_bets += 1,
            BetStatus::Pushed => stats.pushed_bets += 1,
        }
    }

    stats.net_profit = stats
        .total_won
        .checked_sub(stats.total_lost)
        .ok_or(GamedayError::Overflow { operation: "net_profit" })?;

    let settled = stats.won_count + stats.lost_count;
    if settled > 0 {
        stats.win_rate =
            Decimal::from(stats.won_count) / Decimal::from(settled) * Decimal::ONE_HUNDRED;
    }
    if !stats.total_wagered.is_zero() {
        stats.roi = stats
            .net_profit
            .checked_div(stats.total_wagered)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(GamedayError::Overflow { operation: "roi" })?;
    }

    tracing::debug!(
        total_bets = stats.total_bets,
        win_rate = %stats.win_rate,
        roi = %stats.roi,
        "Aggregated bet history"
    );

    Ok(stats)
}

fn checked_sum(total: Decimal, amount: Decimal, operation: &'static str) -> Result<Decimal> {
    total
        .checked_add(amount)
        .ok_or(GamedayError::Overflow { operation })
}

/// Bets with the given status, in history order.
#[must_use]
pub fn filter_by_status(bets: &[BetRecord], status: BetStatus) -> Vec<&BetRecord> {
    bets.iter().filter(|b| b.status == status).collect()
}
