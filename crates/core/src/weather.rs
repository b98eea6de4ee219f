//! Weather impact scoring for game-day conditions.
//!
//! Each category (temperature, wind, precipitation, field) contributes at
//! most one band. The bands within a category are exclusive and the highest
//! applicable one wins. The summed score is clamped to [`MAX_IMPACT`].

use serde::{Deserialize, Serialize};

/// Upper bound of the impact score.
pub const MAX_IMPACT: u8 = 10;

const FREEZING_F: f64 = 32.0;
const HEAT_F: f64 = 85.0;
const STRONG_WIND_MPH: f64 = 20.0;
const MODERATE_WIND_MPH: f64 = 10.0;
const RAIN_CHANCE_PCT: f64 = 70.0;

/// Playing surface state reported for a venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCondition {
    #[default]
    Normal,
    Wet,
    Muddy,
    /// Any surface the scorer has no band for (turf, frozen, ...).
    #[serde(other)]
    Other,
}

/// Environmental readings for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConditions {
    #[serde(default)]
    pub game_id: Option<String>,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Miles per hour.
    pub wind_speed: f64,
    /// Percent, 0-100.
    pub precipitation_chance: f64,
    #[serde(default)]
    pub field_condition: FieldCondition,
    /// Free-form sky description (sunny, rain, snow, ...). Display only.
    #[serde(default)]
    pub weather_condition: Option<String>,
}

/// Display band for an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Minimal,
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// Fixed bands: >=7 high, >=4 moderate, >=2 low, otherwise minimal.
    #[must_use]
    pub const fn from_score(impact: u8) -> Self {
        match impact {
            7.. => Self::High,
            4..=6 => Self::Moderate,
            2..=3 => Self::Low,
            _ => Self::Minimal,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal Impact",
            Self::Low => "Low Impact",
            Self::Moderate => "Moderate Impact",
            Self::High => "High Impact",
        }
    }
}

/// Scored conditions: bounded impact plus the reasons, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub impact: u8,
    pub factors: Vec<String>,
}

impl WeatherImpact {
    #[must_use]
    pub const fn level(&self) -> ImpactLevel {
        ImpactLevel::from_score(self.impact)
    }

    /// True for moderate or high impact.
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        self.impact >= 4
    }
}

/// Scores the conditions of a single game.
///
/// # Examples
/// ```
/// use gameday_core::weather::{score, FieldCondition, GameConditions};
///
/// let conditions = GameConditions {
///     game_id: None,
///     temperature: 20.0,
///     wind_speed: 25.0,
///     precipitation_chance: 80.0,
///     field_condition: FieldCondition::Muddy,
///     weather_condition: None,
/// };
/// let impact = score(&conditions);
/// assert_eq!(impact.impact, 10);
/// assert_eq!(impact.factors.len(), 4);
/// ```
#[must_use]
pub fn score(conditions: &GameConditions) -> WeatherImpact {
    let mut raw: u8 = 0;
    let mut factors = Vec::new();
    let mut add = |points: u8, factor: &str| {
        raw += points;
        factors.push(factor.to_string());
    };

    if conditions.temperature < FREEZING_F {
        add(3, "Freezing temperatures affect ball handling");
    } else if conditions.temperature > HEAT_F {
        add(2, "High heat increases fatigue");
    }

    if conditions.wind_speed > STRONG_WIND_MPH {
        add(4, "Strong winds significantly affect passing game");
    } else if conditions.wind_speed > MODERATE_WIND_MPH {
        add(2, "Moderate winds may affect kicking game");
    }

    if conditions.precipitation_chance > RAIN_CHANCE_PCT {
        add(3, "High chance of rain affects ball security");
    }

    match conditions.field_condition {
        FieldCondition::Muddy => add(3, "Muddy field reduces traction and speed"),
        FieldCondition::Wet => add(2, "Wet field increases fumble risk"),
        FieldCondition::Normal | FieldCondition::Other => {}
    }

    WeatherImpact {
        impact: raw.min(MAX_IMPACT),
        factors,
    }
}

/// Number of games whose conditions score moderate or higher.
#[must_use]
pub fn count_significant(conditions: &[GameConditions]) -> usize {
    conditions
        .iter()
        .filter(|c| score(c).is_significant())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(temp: f64, wind: f64, precip: f64, field: FieldCondition) -> GameConditions {
        GameConditions {
            game_id: None,
            temperature: temp,
            wind_speed: wind,
            precipitation_chance: precip,
            field_condition: field,
            weather_condition: None,
        }
    }

    // ============================================
    // Scoring
    // ============================================

    #[test]
    fn extreme_conditions_clamp_to_ten() {
        let impact = score(&conditions(20.0, 25.0, 80.0, FieldCondition::Muddy));
        assert_eq!(impact.impact, 10);
        assert_eq!(impact.factors.len(), 4);
        assert_eq!(impact.level(), ImpactLevel::High);
    }

    #[test]
    fn mild_conditions_score_zero() {
        let impact = score(&conditions(70.0, 5.0, 10.0, FieldCondition::Normal));
        assert_eq!(impact.impact, 0);
        assert!(impact.factors.is_empty());
        assert_eq!(impact.level(), ImpactLevel::Minimal);
    }

    #[test]
    fn factors_follow_evaluation_order() {
        let impact = score(&conditions(90.0, 15.0, 75.0, FieldCondition::Wet));
        assert_eq!(impact.impact, 9);
        assert_eq!(
            impact.factors,
            vec![
                "High heat increases fatigue",
                "Moderate winds may affect kicking game",
                "High chance of rain affects ball security",
                "Wet field increases fumble risk",
            ]
        );
    }

    #[test]
    fn wind_bands_are_exclusive() {
        let strong = score(&conditions(60.0, 30.0, 0.0, FieldCondition::Normal));
        assert_eq!(strong.impact, 4);
        assert_eq!(strong.factors.len(), 1);

        let moderate = score(&conditions(60.0, 12.0, 0.0, FieldCondition::Normal));
        assert_eq!(moderate.impact, 2);
    }

    #[test]
    fn thresholds_are_strict() {
        let impact = score(&conditions(32.0, 10.0, 70.0, FieldCondition::Normal));
        assert_eq!(impact.impact, 0);

        let impact = score(&conditions(85.0, 20.0, 70.0, FieldCondition::Normal));
        assert_eq!(impact.impact, 2);
    }

    #[test]
    fn unknown_field_scores_nothing() {
        let impact = score(&conditions(60.0, 0.0, 0.0, FieldCondition::Other));
        assert_eq!(impact.impact, 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let c = conditions(28.0, 14.0, 90.0, FieldCondition::Wet);
        assert_eq!(score(&c), score(&c));
    }

    // ============================================
    // Classification
    // ============================================

    #[test]
    fn level_bands() {
        assert_eq!(ImpactLevel::from_score(0), ImpactLevel::Minimal);
        assert_eq!(ImpactLevel::from_score(1), ImpactLevel::Minimal);
        assert_eq!(ImpactLevel::from_score(2), ImpactLevel::Low);
        assert_eq!(ImpactLevel::from_score(3), ImpactLevel::Low);
        assert_eq!(ImpactLevel::from_score(4), ImpactLevel::Moderate);
        assert_eq!(ImpactLevel::from_score(6), ImpactLevel::Moderate);
        assert_eq!(ImpactLevel::from_score(7), ImpactLevel::High);
        assert_eq!(ImpactLevel::from_score(10), ImpactLevel::High);
    }

    #[test]
    fn count_significant_games() {
        let games = vec![
            conditions(20.0, 25.0, 80.0, FieldCondition::Muddy),
            conditions(70.0, 5.0, 10.0, FieldCondition::Normal),
            conditions(60.0, 25.0, 0.0, FieldCondition::Normal),
            conditions(60.0, 12.0, 0.0, FieldCondition::Normal),
        ];
        assert_eq!(count_significant(&games), 2);
        assert_eq!(count_significant(&[]), 0);
    }

    #[test]
    fn field_condition_deserializes_unknown_as_other() {
        let c: GameConditions = serde_json::from_str(
            r#"{"temperature": 50, "wind_speed": 3, "precipitation_chance": 0, "field_condition": "turf"}"#,
        )
        .unwrap();
        assert_eq!(c.field_condition, FieldCondition::Other);

        let c: GameConditions = serde_json::from_str(
            r#"{"temperature": 50, "wind_speed": 3, "precipitation_chance": 0, "field_condition": "muddy"}"#,
        )
        .unwrap();
        assert_eq!(c.field_condition, FieldCondition::Muddy);
    }
}
