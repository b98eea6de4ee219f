use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub slip: SlipConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Betting slip stake limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipConfig {
    /// Stake assigned to a selection when it is added to the slip.
    pub default_stake: Decimal,
    /// Stakes above this are clamped.
    pub max_stake: Decimal,
    /// One-click stakes applied to every selection.
    pub quick_amounts: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            default_stake: Decimal::new(25, 0),
            max_stake: Decimal::new(10_000, 0),
            quick_amounts: vec![
                Decimal::new(10, 0),
                Decimal::new(25, 0),
                Decimal::new(50, 0),
                Decimal::new(100, 0),
            ],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}
