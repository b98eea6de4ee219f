use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GamedayError>;

/// Errors raised by the dashboard computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GamedayError {
    /// American odds of zero have no defined payout.
    #[error("Invalid odds {odds}: American odds must be non-zero")]
    InvalidOdds {
        /// Rejected odds value.
        odds: i32,
    },

    /// Stakes must not be negative.
    #[error("Invalid stake {amount}: stake must not be negative")]
    InvalidStake {
        /// Rejected stake.
        amount: Decimal,
    },

    /// The betting slip has no selection with this id.
    #[error("No selection with id {id} on the betting slip")]
    UnknownSelection {
        /// Requested selection id.
        id: String,
    },

    /// A money amount left the range `Decimal` can represent.
    #[error("Arithmetic overflow computing {operation}")]
    Overflow {
        /// Quantity being computed when the overflow occurred.
        operation: &'static str,
    },
}
