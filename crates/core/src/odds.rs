//! American odds arithmetic.
//!
//! A positive price is the profit on a $100 stake (underdog), a negative
//! price is the stake needed to profit $100 (favorite).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GamedayError, Result};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Validated, non-zero American odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Creates odds from a signed American price.
    ///
    /// # Errors
    /// Returns [`GamedayError::InvalidOdds`] when `odds` is zero.
    pub fn new(odds: i32) -> Result<Self> {
        if odds == 0 {
            return Err(GamedayError::InvalidOdds { odds });
        }
        Ok(Self(odds))
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_underdog(self) -> bool {
        self.0 > 0
    }

    /// Profit for `amount` staked at these odds.
    ///
    /// ```text
    /// odds > 0: amount * odds / 100
    /// odds < 0: amount * 100 / |odds|
    /// ```
    ///
    /// # Errors
    /// Returns [`GamedayError::Overflow`] when the result does not fit in a
    /// `Decimal`.
    ///
    /// # Examples
    /// ```
    /// use gameday_core::odds::AmericanOdds;
    /// use rust_decimal_macros::dec;
    ///
    /// let odds = AmericanOdds::new(150).unwrap();
    /// assert_eq!(odds.to_win(dec!(100)).unwrap(), dec!(150));
    /// ```
    pub fn to_win(self, amount: Decimal) -> Result<Decimal> {
        let won = if self.0 > 0 {
            amount
                .checked_mul(Decimal::from(self.0))
                .and_then(|v| v.checked_div(HUNDRED))
        } else {
            amount
                .checked_mul(HUNDRED)
                .and_then(|v| v.checked_div(Decimal::from(self.0.unsigned_abs())))
        };
        won.ok_or(GamedayError::Overflow { operation: "to_win" })
    }

    /// Stake returned plus profit.
    ///
    /// # Errors
    /// Returns [`GamedayError::Overflow`] when the result does not fit in a
    /// `Decimal`.
    pub fn payout(self, amount: Decimal) -> Result<Decimal> {
        amount
            .checked_add(self.to_win(amount)?)
            .ok_or(GamedayError::Overflow { operation: "payout" })
    }

    /// # Errors
    /// Returns [`GamedayError::Overflow`] when the payout does not fit in a
    /// `Decimal`.
    pub fn profit(self, amount: Decimal) -> Result<Decimal> {
        self.payout(amount)?
            .checked_sub(amount)
            .ok_or(GamedayError::Overflow { operation: "profit" })
    }

    /// Win probability implied by the price, in `(0, 1)`.
    #[must_use]
    pub fn implied_probability(self) -> Decimal {
        if self.0 > 0 {
            HUNDRED / (Decimal::from(self.0) + HUNDRED)
        } else {
            let abs = Decimal::from(self.0.unsigned_abs());
            abs / (abs + HUNDRED)
        }
    }

    /// European (decimal) odds: total return per unit staked.
    #[must_use]
    pub fn decimal_odds(self) -> Decimal {
        if self.0 > 0 {
            Decimal::ONE + Decimal::from(self.0) / HUNDRED
        } else {
            Decimal::ONE + HUNDRED / Decimal::from(self.0.unsigned_abs())
        }
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = GamedayError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Profit on `amount` at raw American `odds`.
///
/// # Errors
/// Returns [`GamedayError::InvalidOdds`] when `odds` is zero, or
/// [`GamedayError::Overflow`] when the result does not fit in a `Decimal`.
pub fn to_win(amount: Decimal, odds: i32) -> Result<Decimal> {
    AmericanOdds::new(odds)?.to_win(amount)
}

/// Stake plus profit on `amount` at raw American `odds`.
///
/// # Errors
/// Returns [`GamedayError::InvalidOdds`] when `odds` is zero, or
/// [`GamedayError::Overflow`] when the result does not fit in a `Decimal`.
pub fn payout(amount: Decimal, odds: i32) -> Result<Decimal> {
    AmericanOdds::new(odds)?.payout(amount)
}

/// `payout - amount`.
///
/// # Errors
/// Returns [`GamedayError::InvalidOdds`] when `odds` is zero, or
/// [`GamedayError::Overflow`] when the result does not fit in a `Decimal`.
pub fn profit(amount: Decimal, odds: i32) -> Result<Decimal> {
    AmericanOdds::new(odds)?.profit(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ============================================
    // Payout Arithmetic
    // ============================================

    #[test]
    fn underdog_to_win() {
        assert_eq!(to_win(dec!(100), 150).unwrap(), dec!(150));
        assert_eq!(to_win(dec!(25), 240).unwrap(), dec!(60));
    }

    #[test]
    fn favorite_to_win() {
        let won = to_win(dec!(100), -150).unwrap();
        assert!((won - dec!(66.6666666)).abs() < dec!(0.0001));

        assert_eq!(to_win(dec!(110), -110).unwrap(), dec!(100));
    }

    #[test]
    fn payout_includes_stake() {
        assert_eq!(payout(dec!(100), 150).unwrap(), dec!(250));
        assert_eq!(payout(dec!(50), -200).unwrap(), dec!(75));
    }

    #[test]
    fn profit_matches_to_win() {
        for odds in [-500, -150, -110, -100, 100, 105, 150, 700] {
            for amount in [dec!(0), dec!(1), dec!(25), dec!(99.99), dec!(10000)] {
                let diff = profit(amount, odds).unwrap() - to_win(amount, odds).unwrap();
                assert!(diff.abs() < dec!(0.0000001), "odds {odds} amount {amount}");
            }
        }
    }

    #[test]
    fn zero_stake_wins_nothing() {
        assert_eq!(to_win(Decimal::ZERO, -300).unwrap(), Decimal::ZERO);
        assert_eq!(payout(Decimal::ZERO, 300).unwrap(), Decimal::ZERO);
    }

    // ============================================
    // Validation
    // ============================================

    #[test]
    fn zero_odds_rejected() {
        assert_eq!(
            to_win(dec!(100), 0),
            Err(GamedayError::InvalidOdds { odds: 0 })
        );
        assert!(payout(dec!(100), 0).is_err());
        assert!(profit(dec!(100), 0).is_err());
        assert!(AmericanOdds::try_from(0).is_err());
    }

    #[test]
    fn extreme_negative_odds_do_not_overflow() {
        let odds = AmericanOdds::new(i32::MIN).unwrap();
        assert!(odds.to_win(dec!(100)).unwrap() > Decimal::ZERO);
    }

    #[test]
    fn oversized_stake_reports_overflow() {
        assert_eq!(
            to_win(Decimal::MAX, 150),
            Err(GamedayError::Overflow { operation: "to_win" })
        );
        assert!(payout(Decimal::MAX, -110).is_err());
        assert!(profit(Decimal::MAX, 700).is_err());

        // +1 shrinks the profit, so only adding the stake back overflows.
        assert_eq!(
            payout(Decimal::MAX, 1),
            Err(GamedayError::Overflow { operation: "payout" })
        );
    }

    #[test]
    fn deserialize_rejects_zero() {
        assert!(serde_json::from_str::<AmericanOdds>("0").is_err());
        let odds: AmericanOdds = serde_json::from_str("-110").unwrap();
        assert_eq!(odds.value(), -110);
        assert_eq!(serde_json::to_string(&odds).unwrap(), "-110");
    }

    // ============================================
    // Derived Prices
    // ============================================

    #[test]
    fn implied_probability_even_money() {
        let odds = AmericanOdds::new(100).unwrap();
        assert_eq!(odds.implied_probability(), dec!(0.5));
        assert_eq!(AmericanOdds::new(-100).unwrap().implied_probability(), dec!(0.5));
    }

    #[test]
    fn implied_probability_favorite_and_dog() {
        let fav = AmericanOdds::new(-150).unwrap().implied_probability();
        assert_eq!(fav, dec!(0.6));

        let dog = AmericanOdds::new(150).unwrap().implied_probability();
        assert_eq!(dog, dec!(0.4));
    }

    #[test]
    fn decimal_odds_conversion() {
        assert_eq!(AmericanOdds::new(150).unwrap().decimal_odds(), dec!(2.5));
        assert_eq!(AmericanOdds::new(-200).unwrap().decimal_odds(), dec!(1.5));
    }

    #[test]
    fn display_has_sign() {
        assert_eq!(AmericanOdds::new(150).unwrap().to_string(), "+150");
        assert_eq!(AmericanOdds::new(-110).unwrap().to_string(), "-110");
        assert!(AmericanOdds::new(120).unwrap().is_underdog());
    }
}
