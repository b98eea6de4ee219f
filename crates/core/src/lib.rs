pub mod comparison;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod injury;
pub mod odds;
pub mod portfolio;
pub mod report;
pub mod slip;
pub mod weather;

pub use comparison::{compare, compare_teams, Advantage, StatComparison, StatKind, TeamStats};
pub use config::{AppConfig, DisplayConfig, SlipConfig};
pub use config_loader::ConfigLoader;
pub use error::{GamedayError, Result};
pub use injury::{group_by_team, InjuryBoard, InjuryReport, InjuryStatus, TeamInjuries};
pub use odds::AmericanOdds;
pub use portfolio::{aggregate, BetRecord, BetStatus, PortfolioStats};
pub use report::ReportFormatter;
pub use slip::{BetSlip, Market, Selection, SlipEntry, SlipTotals};
pub use weather::{score, FieldCondition, GameConditions, ImpactLevel, WeatherImpact};
