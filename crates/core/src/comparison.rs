//! Head-to-head team stat comparison.
//!
//! Equality uses a fixed absolute tolerance of [`EQUAL_EPSILON`]. It is not
//! scaled to the stat, so large-magnitude stats (yards per game) rarely tie
//! while small ones (turnovers per game) tie readily.

use serde::{Deserialize, Serialize};

pub const EQUAL_EPSILON: f64 = 0.1;

/// Which side of a comparison holds the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Advantage {
    ABetter,
    BBetter,
    Equal,
}

impl Advantage {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ABetter => "↑",
            Self::BBetter => "↓",
            Self::Equal => "=",
        }
    }
}

/// Compares two stat values under the given polarity.
///
/// # Examples
/// ```
/// use gameday_core::comparison::{compare, Advantage};
///
/// assert_eq!(compare(10.05, 10.0, true), Advantage::Equal);
/// assert_eq!(compare(10.2, 10.0, true), Advantage::ABetter);
/// assert_eq!(compare(10.2, 10.0, false), Advantage::BBetter);
/// ```
#[must_use]
pub fn compare(a: f64, b: f64, higher_is_better: bool) -> Advantage {
    if (a - b).abs() < EQUAL_EPSILON {
        return Advantage::Equal;
    }
    let a_better = if higher_is_better { a > b } else { a < b };
    if a_better {
        Advantage::ABetter
    } else {
        Advantage::BBetter
    }
}

/// Bar widths as a percentage of the larger value. Both are zero when the
/// larger value is not positive.
#[must_use]
pub fn bar_widths(a: f64, b: f64) -> (f64, f64) {
    let max = a.max(b);
    if max > 0.0 {
        (a / max * 100.0, b / max * 100.0)
    } else {
        (0.0, 0.0)
    }
}

/// Season record and per-game metrics for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_name: String,
    #[serde(default)]
    pub conference: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub points_per_game: f64,
    pub points_allowed_per_game: f64,
    pub rushing_yards_per_game: f64,
    pub passing_yards_per_game: f64,
    pub turnovers_per_game: f64,
    pub third_down_percentage: f64,
    pub red_zone_percentage: f64,
    pub strength_of_schedule: f64,
}

impl TeamStats {
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        win_percentage(self.wins, self.losses)
    }

    #[must_use]
    pub const fn value(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::PointsPerGame => self.points_per_game,
            StatKind::RushingYardsPerGame => self.rushing_yards_per_game,
            StatKind::PassingYardsPerGame => self.passing_yards_per_game,
            StatKind::ThirdDownPercentage => self.third_down_percentage,
            StatKind::RedZonePercentage => self.red_zone_percentage,
            StatKind::PointsAllowedPerGame => self.points_allowed_per_game,
            StatKind::TurnoversPerGame => self.turnovers_per_game,
            StatKind::StrengthOfSchedule => self.strength_of_schedule,
        }
    }
}

/// A compared metric, with its fixed polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    PointsPerGame,
    RushingYardsPerGame,
    PassingYardsPerGame,
    ThirdDownPercentage,
    RedZonePercentage,
    PointsAllowedPerGame,
    TurnoversPerGame,
    StrengthOfSchedule,
}

impl StatKind {
    pub const ALL: [Self; 8] = [
        Self::PointsPerGame,
        Self::RushingYardsPerGame,
        Self::PassingYardsPerGame,
        Self::ThirdDownPercentage,
        Self::RedZonePercentage,
        Self::PointsAllowedPerGame,
        Self::TurnoversPerGame,
        Self::StrengthOfSchedule,
    ];

    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        !matches!(self, Self::PointsAllowedPerGame | Self::TurnoversPerGame)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PointsPerGame => "Points Per Game",
            Self::RushingYardsPerGame => "Rushing Yards Per Game",
            Self::PassingYardsPerGame => "Passing Yards Per Game",
            Self::ThirdDownPercentage => "Third Down Conversion %",
            Self::RedZonePercentage => "Red Zone Efficiency %",
            Self::PointsAllowedPerGame => "Points Allowed Per Game",
            Self::TurnoversPerGame => "Turnovers Per Game",
            Self::StrengthOfSchedule => "Strength of Schedule",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::PointsPerGame | Self::PointsAllowedPerGame => " pts",
            Self::RushingYardsPerGame | Self::PassingYardsPerGame => " yds",
            Self::ThirdDownPercentage | Self::RedZonePercentage => "%",
            Self::TurnoversPerGame | Self::StrengthOfSchedule => "",
        }
    }
}

/// One row of a head-to-head comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub kind: StatKind,
    pub first: f64,
    pub second: f64,
    pub advantage: Advantage,
    pub first_width: f64,
    pub second_width: f64,
}

/// Compares two teams across every [`StatKind`].
#[must_use]
pub fn compare_teams(first: &TeamStats, second: &TeamStats) -> Vec<StatComparison> {
    StatKind::ALL
        .iter()
        .map(|&kind| {
            let a = first.value(kind);
            let b = second.value(kind);
            let (first_width, second_width) = bar_widths(a, b);
            StatComparison {
                kind,
                first: a,
                second: b,
                advantage: compare(a, b, kind.higher_is_better()),
                first_width,
                second_width,
            }
        })
        .collect()
}

/// Percent of decided games won, zero before any game is played.
#[must_use]
pub fn win_percentage(wins: u32, losses: u32) -> f64 {
    let total = wins.saturating_add(losses);
    if total == 0 {
        return 0.0;
    }
    f64::from(wins) / f64::from(total) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Favored {
    First,
    Second,
}

/// Matchup pick by win percentage. A tie goes to the second team.
#[must_use]
pub fn favored(first: &TeamStats, second: &TeamStats) -> Favored {
    if first.win_percentage() > second.win_percentage() {
        Favored::First
    } else {
        Favored::Second
    }
}
