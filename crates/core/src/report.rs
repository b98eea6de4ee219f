#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use crate::comparison::{compare_teams, favored, Favored, TeamStats};
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::injury::{summarize, InjuryBoard, InjuryReport};
use crate::portfolio::PortfolioStats;
use crate::slip::BetSlip;
use crate::weather::{self, GameConditions};

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════\n";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────\n";

/// Plain-text renderings of the dashboard panels.
pub struct ReportFormatter<'a> {
    display: &'a DisplayConfig,
}

impl<'a> ReportFormatter<'a> {
    #[must_use]
    pub const fn new(display: &'a DisplayConfig) -> Self {
        Self { display }
    }

    /// # Errors
    /// Returns [`crate::GamedayError::Overflow`] when a stake's payout does
    /// not fit in a `Decimal`.
    pub fn slip(&self, slip: &BetSlip) -> Result<String> {
        let cur = &self.display.currency_symbol;
        let mut output = header("BETTING SLIP");

        if slip.is_empty() {
            output.push_str("No bets selected\n");
            return Ok(output);
        }

        for entry in slip.entries() {
            output.push_str(&format!(
                "{:<24} {:<10} {:>6}   stake {}{:.2}   to win {}{:.2}\n",
                entry.selection.team,
                entry.selection.market.as_str(),
                entry.selection.odds.to_string(),
                cur,
                entry.amount,
                cur,
                entry.to_win()?
            ));
        }

        let quick: Vec<String> = slip
            .quick_amounts()
            .iter()
            .map(|amount| format!("{}{}", cur, amount))
            .collect();
        output.push_str(&format!("Quick Stakes:          {}\n", quick.join("  ")));

        let totals = slip.totals()?;
        output.push('\n');
        output.push_str(LIGHT_RULE);
        output.push_str(&format!(
            "Total Wager:           {}{:.2}\n",
            cur, totals.total_wagered
        ));
        output.push_str(&format!(
            "Potential Payout:      {}{:.2}\n",
            cur, totals.total_payout
        ));
        output.push_str(&format!(
            "Potential Profit:      {}{:.2}\n",
            cur, totals.potential_profit
        ));
        output.push_str(HEAVY_RULE);
        Ok(output)
    }

    #[must_use]
    pub fn portfolio(&self, stats: &PortfolioStats) -> String {
        let cur = &self.display.currency_symbol;
        let mut output = header("PORTFOLIO");

        output.push_str(&format!("Total Bets:            {}\n", stats.total_bets));
        output.push_str(&format!("Active Bets:           {}\n", stats.active_bets));
        output.push_str(&format!(
            "Settled:               {} won / {} lost / {} push\n",
            stats.won_count, stats.lost_count, stats.pushed_bets
        ));
        output.push('\n');
        output.push_str(&format!(
            "Total Wagered:         {}{:.2}\n",
            cur, stats.total_wagered
        ));
        output.push_str(&format!("Total Won:             {}{:.2}\n", cur, stats.total_won));
        output.push_str(&format!("Total Lost:            {}{:.2}\n", cur, stats.total_lost));
        output.push_str(&format!(
            "Net Profit:            {}{:.2}\n",
            cur, stats.net_profit
        ));
        output.push('\n');

        if stats.won_count + stats.lost_count > 0 {
            output.push_str(&format!("Win Rate:              {:.1}%\n", stats.win_rate));
        } else {
            output.push_str("Win Rate:              N/A (no settled bets)\n");
        }
        let sign = if stats.roi.is_sign_negative() { "" } else { "+" };
        output.push_str(&format!("ROI:                   {}{:.1}%\n", sign, stats.roi));
        output.push_str(HEAVY_RULE);
        output
    }

    #[must_use]
    pub fn weather(&self, conditions: &[GameConditions]) -> String {
        let mut output = header("WEATHER IMPACT");

        for (i, game) in conditions.iter().enumerate() {
            let impact = weather::score(game);
            let label = game
                .game_id
                .clone()
                .unwrap_or_else(|| format!("Game {}", i + 1));
            output.push_str(&format!(
                "{:<28} {:>2}/10  {}\n",
                label,
                impact.impact,
                impact.level().label()
            ));
            output.push_str(&format!(
                "    {:.0}°F, wind {:.0} mph, rain {:.0}%\n",
                game.temperature, game.wind_speed, game.precipitation_chance
            ));
            for factor in &impact.factors {
                output.push_str(&format!("    - {}\n", factor));
            }
        }

        output.push_str(LIGHT_RULE);
        output.push_str(&format!(
            "Weather Alerts:        {}\n",
            weather::count_significant(conditions)
        ));
        output.push_str(HEAVY_RULE);
        output
    }

    #[must_use]
    pub fn injuries(&self, reports: &[InjuryReport], board: &InjuryBoard) -> String {
        let summary = summarize(reports);
        let mut output = header("INJURY REPORT");

        for team in board.teams() {
            output.push_str(&format!(
                "{} ({} reports)\n",
                team.team,
                team.reports.len()
            ));
            for report in &team.reports {
                output.push_str(&format!(
                    "    {:<22} {:<4} {:<14} {:<13} {}/5\n",
                    report.player,
                    report.position,
                    report.injury_type,
                    report.status.label(),
                    report.impact_rating
                ));
            }
            if team.has_concerns() {
                let plural = if team.high_impact_count > 1 { "s" } else { "" };
                output.push_str(&format!(
                    "    ⚠️  {} has {} high-impact injury concern{}\n",
                    team.team, team.high_impact_count, plural
                ));
            }
            output.push('\n');
        }

        output.push_str(LIGHT_RULE);
        output.push_str(&format!(
            "Key Injuries:          {}\n",
            summary.high_impact_total
        ));
        output.push_str(&format!(
            "Questionable:          {}\n",
            summary.questionable_total
        ));
        output.push_str(HEAVY_RULE);
        output
    }

    #[must_use]
    pub fn comparison(&self, first: &TeamStats, second: &TeamStats) -> String {
        let mut output = header("TEAM COMPARISON");
        output.push_str(&format!(
            "{:<28} {:>10}   {:>10}\n",
            "", first.team_name, second.team_name
        ));
        output.push_str(&format!(
            "{:<28} {:>10}   {:>10}\n",
            "Record",
            format!("{}-{}", first.wins, first.losses),
            format!("{}-{}", second.wins, second.losses)
        ));
        output.push_str(LIGHT_RULE);

        for row in compare_teams(first, second) {
            output.push_str(&format!(
                "{:<28} {:>10} {} {:<10}\n",
                row.kind.label(),
                format!("{:.1}{}", row.first, row.kind.unit()),
                row.advantage.symbol(),
                format!("{:.1}{}", row.second, row.kind.unit())
            ));
        }

        output.push_str(LIGHT_RULE);
        let pick = match favored(first, second) {
            Favored::First => &first.team_name,
            Favored::Second => &second.team_name,
        };
        output.push_str(&format!("Favored:               {}\n", pick));
        output.push_str(HEAVY_RULE);
        output
    }
}

fn header(title: &str) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(HEAVY_RULE);
    output.push_str(&format!("{:^63}\n", title));
    output.push_str(HEAVY_RULE);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injury::{group_by_team, InjuryStatus};
    use crate::odds::AmericanOdds;
    use crate::portfolio::aggregate;
    use crate::slip::{Market, Selection};
    use crate::weather::FieldCondition;

    #[test]
    fn empty_portfolio_reports_no_settled_bets() {
        let display = DisplayConfig::default();
        let text = ReportFormatter::new(&display).portfolio(&aggregate(&[]).unwrap());
        assert!(text.contains("PORTFOLIO"));
        assert!(text.contains("N/A (no settled bets)"));
        assert!(text.contains("ROI:                   +0.0%"));
    }

    #[test]
    fn empty_slip_message() {
        let display = DisplayConfig::default();
        let text = ReportFormatter::new(&display)
            .slip(&BetSlip::default())
            .unwrap();
        assert!(text.contains("No bets selected"));
    }

    #[test]
    fn slip_report_lists_quick_stakes_and_totals() {
        let display = DisplayConfig::default();
        let mut slip = BetSlip::default();
        slip.add(Selection {
            id: "uga-ml".to_string(),
            game_id: "uga-bama".to_string(),
            market: Market::Moneyline,
            team: "Georgia".to_string(),
            odds: AmericanOdds::new(150).unwrap(),
        });
        let top = slip.quick_amounts()[3];
        slip.apply_quick_amount(top).unwrap();

        let text = ReportFormatter::new(&display).slip(&slip).unwrap();
        assert!(text.contains("Quick Stakes:          $10  $25  $50  $100\n"));
        assert!(text.contains("Total Wager:           $100.00"));
        assert!(text.contains("Potential Payout:      $250.00"));
    }

    #[test]
    fn weather_report_lists_factors() {
        let display = DisplayConfig::default();
        let games = vec![GameConditions {
            game_id: Some("army-navy".to_string()),
            temperature: 25.0,
            wind_speed: 22.0,
            precipitation_chance: 10.0,
            field_condition: FieldCondition::Normal,
            weather_condition: Some("snow".to_string()),
        }];
        let text = ReportFormatter::new(&display).weather(&games);
        assert!(text.contains("army-navy"));
        assert!(text.contains("7/10"));
        assert!(text.contains("High Impact"));
        assert!(text.contains("Freezing temperatures affect ball handling"));
        assert!(text.contains("Weather Alerts:        1"));
    }

    #[test]
    fn injury_report_flags_concerns() {
        let display = DisplayConfig::default();
        let reports = vec![InjuryReport {
            team: "Michigan".to_string(),
            player: "J. Doe".to_string(),
            position: "QB".to_string(),
            injury_type: "Shoulder".to_string(),
            status: InjuryStatus::Out,
            impact_rating: 5,
        }];
        let board = group_by_team(&reports);
        let text = ReportFormatter::new(&display).injuries(&reports, &board);
        assert!(text.contains("Michigan has 1 high-impact injury concern\n"));
        assert!(text.contains("OUT"));
    }
}
