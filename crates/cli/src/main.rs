use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use gameday_core::config_loader::DEFAULT_CONFIG_PATH;
use gameday_core::{
    aggregate, group_by_team, BetRecord, BetSlip, ConfigLoader, GameConditions, InjuryReport,
    ReportFormatter, SlipEntry, TeamStats,
};

#[derive(Parser)]
#[command(name = "gameday")]
#[command(about = "College football odds, impact, and bet history reports", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Profile overlay read from Config.{profile}.toml next to the config file
    #[arg(short, long, global = true)]
    profile: Option<String>,
    /// Optional log file path (logs to file instead of stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show stake, payout and profit for a betting slip
    Slip {
        /// JSON array of slip entries
        file: PathBuf,
    },
    /// Score weather impact for each game
    Weather {
        /// JSON array of game conditions
        file: PathBuf,
    },
    /// Group injury reports by team
    Injuries {
        /// JSON array of injury reports
        file: PathBuf,
    },
    /// Summarize bet history
    Portfolio {
        /// JSON array of bet records
        file: PathBuf,
    },
    /// Compare two teams head-to-head
    Compare {
        /// JSON array of team stats
        file: PathBuf,
        /// First team name
        #[arg(long)]
        first: String,
        /// Second team name
        #[arg(long)]
        second: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match cli.profile.as_deref() {
        Some(profile) => ConfigLoader::load_with_profile_from(&cli.config, profile)?,
        None => ConfigLoader::load_from(&cli.config)?,
    };
    let formatter = ReportFormatter::new(&config.display);

    let output = match cli.command {
        Commands::Slip { file } => {
            let entries: Vec<SlipEntry> = load_records(&file)?;
            let slip = BetSlip::from_entries(config.slip.clone(), entries)
                .context("Invalid betting slip")?;
            formatter.slip(&slip).context("Failed to total betting slip")?
        }
        Commands::Weather { file } => {
            let conditions: Vec<GameConditions> = load_records(&file)?;
            formatter.weather(&conditions)
        }
        Commands::Injuries { file } => {
            let reports: Vec<InjuryReport> = load_records(&file)?;
            let board = group_by_team(&reports);
            formatter.injuries(&reports, &board)
        }
        Commands::Portfolio { file } => {
            let bets: Vec<BetRecord> = load_records(&file)?;
            let stats = aggregate(&bets).context("Failed to aggregate bet history")?;
            formatter.portfolio(&stats)
        }
        Commands::Compare {
            file,
            first,
            second,
        } => {
            let teams: Vec<TeamStats> = load_records(&file)?;
            let a = find_team(&teams, &first)?;
            let b = find_team(&teams, &second)?;
            formatter.comparison(a, b)
        }
    };

    print!("{output}");
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    if let Some(path) = log_file {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

fn find_team<'a>(teams: &'a [TeamStats], name: &str) -> Result<&'a TeamStats> {
    match teams.iter().find(|t| t.team_name == name) {
        Some(team) => Ok(team),
        None => bail!("Team {name} not found in stats file"),
    }
}
