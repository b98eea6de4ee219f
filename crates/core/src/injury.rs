//! Injury report grouping.
//!
//! Injury impact is kept separate from the weather score; the two are
//! independent signals and never blended here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ratings at or above this count as high impact.
pub const HIGH_IMPACT_RATING: u8 = 4;

/// Availability designation on an injury report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryStatus {
    Out,
    Probable,
    Healthy,
    /// Also covers designations the dashboard does not recognise.
    #[default]
    #[serde(other)]
    Questionable,
}

impl InjuryStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::Questionable => "QUESTIONABLE",
            Self::Probable => "PROBABLE",
            Self::Healthy => "HEALTHY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub team: String,
    pub player: String,
    pub position: String,
    pub injury_type: String,
    pub status: InjuryStatus,
    /// 0 (negligible) to 5 (season-altering).
    pub impact_rating: u8,
}

impl InjuryReport {
    #[must_use]
    pub const fn is_high_impact(&self) -> bool {
        self.impact_rating >= HIGH_IMPACT_RATING
    }
}

/// All reports for one team, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInjuries {
    pub team: String,
    pub reports: Vec<InjuryReport>,
    pub high_impact_count: usize,
}

impl TeamInjuries {
    #[must_use]
    pub const fn has_concerns(&self) -> bool {
        self.high_impact_count > 0
    }
}

/// Reports grouped by exact team name.
///
/// Teams are kept in the order they first appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjuryBoard {
    teams: Vec<TeamInjuries>,
}

impl InjuryBoard {
    #[must_use]
    pub fn teams(&self) -> &[TeamInjuries] {
        &self.teams
    }

    #[must_use]
    pub fn get(&self, team: &str) -> Option<&TeamInjuries> {
        self.teams.iter().find(|t| t.team == team)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Groups reports by team name (case-sensitive) and counts high-impact
/// injuries per team.
#[must_use]
pub fn group_by_team(reports: &[InjuryReport]) -> InjuryBoard {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut teams: Vec<TeamInjuries> = Vec::new();

    for report in reports {
        let slot = *index.entry(report.team.as_str()).or_insert_with(|| {
            teams.push(TeamInjuries {
                team: report.team.clone(),
                reports: Vec::new(),
                high_impact_count: 0,
            });
            teams.len() - 1
        });
        let group = &mut teams[slot];
        if report.is_high_impact() {
            group.high_impact_count += 1;
        }
        group.reports.push(report.clone());
    }

    tracing::debug!(
        reports = reports.len(),
        teams = teams.len(),
        "Grouped injury reports"
    );

    InjuryBoard { teams }
}

/// League-wide injury counts shown in the analysis summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InjurySummary {
    pub high_impact_total: usize,
    pub questionable_total: usize,
}

#[must_use]
pub fn summarize(reports: &[InjuryReport]) -> InjurySummary {
    reports
        .iter()
        .fold(InjurySummary::default(), |mut acc, report| {
            if report.is_high_impact() {
                acc.high_impact_total += 1;
            }
            if report.status == InjuryStatus::Questionable {
                acc.questionable_total += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(team: &str, player: &str, status: InjuryStatus, rating: u8) -> InjuryReport {
        InjuryReport {
            team: team.to_string(),
            player: player.to_string(),
            position: "WR".to_string(),
            injury_type: "Hamstring".to_string(),
            status,
            impact_rating: rating,
        }
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let reports = vec![
            report("Georgia", "A", InjuryStatus::Out, 5),
            report("Alabama", "B", InjuryStatus::Probable, 2),
            report("Georgia", "C", InjuryStatus::Questionable, 3),
        ];
        let board = group_by_team(&reports);

        let names: Vec<&str> = board.teams().iter().map(|t| t.team.as_str()).collect();
        assert_eq!(names, vec!["Georgia", "Alabama"]);

        let georgia = board.get("Georgia").unwrap();
        let players: Vec<&str> = georgia.reports.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, vec!["A", "C"]);
        assert_eq!(georgia.high_impact_count, 1);
        assert!(georgia.has_concerns());

        let alabama = board.get("Alabama").unwrap();
        assert_eq!(alabama.high_impact_count, 0);
        assert!(!alabama.has_concerns());
    }

    #[test]
    fn team_keys_are_case_sensitive() {
        let reports = vec![
            report("Texas", "A", InjuryStatus::Out, 4),
            report("texas", "B", InjuryStatus::Out, 4),
        ];
        let board = group_by_team(&reports);
        assert_eq!(board.len(), 2);
        assert!(board.get("TEXAS").is_none());
    }

    #[test]
    fn high_impact_threshold_is_four() {
        let reports = vec![
            report("Ohio State", "A", InjuryStatus::Out, 3),
            report("Ohio State", "B", InjuryStatus::Out, 4),
            report("Ohio State", "C", InjuryStatus::Out, 5),
        ];
        assert_eq!(group_by_team(&reports).teams()[0].high_impact_count, 2);
    }

    #[test]
    fn empty_input_gives_empty_board() {
        let board = group_by_team(&[]);
        assert!(board.is_empty());
        assert_eq!(summarize(&[]), InjurySummary::default());
    }

    #[test]
    fn summary_counts() {
        let reports = vec![
            report("Georgia", "A", InjuryStatus::Questionable, 5),
            report("Alabama", "B", InjuryStatus::Questionable, 1),
            report("Alabama", "C", InjuryStatus::Out, 4),
        ];
        let summary = summarize(&reports);
        assert_eq!(summary.high_impact_total, 2);
        assert_eq!(summary.questionable_total, 2);
    }

    #[test]
    fn unknown_status_falls_back_to_questionable() {
        let json = r#"{"team":"LSU","player":"X","position":"QB","injury_type":"Ankle","status":"day-to-day","impact_rating":3}"#;
        let parsed: InjuryReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, InjuryStatus::Questionable);
    }
}
