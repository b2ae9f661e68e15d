//! Command line entry point for elo-rank
//!
//! Applies a single match result to two ranks and prints the new ranks,
//! using rating options from the environment or a TOML file.

use anyhow::{anyhow, Result};
use clap::Parser;
use elo_rank::config::AppConfig;
use elo_rank::{EloUpdater, MatchOutcome, MatchResult, Rateable, RatedEntity, UpdateOptions};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Elo rank calculator with proficiency-tiered K-factors
#[derive(Parser)]
#[command(
    name = "elo-rank",
    version,
    about = "Compute new Elo ranks for two competitors after a match",
    long_about = "Applies a win, loss or draw (reported from the first competitor's point of \
                 view) to two ranks. The K-factor is chosen from each competitor's current \
                 proficiency tier. Omitted ranks start at the configured default rank."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Current rank of the reporting competitor
    #[arg(long, value_name = "RANK", allow_negative_numbers = true)]
    rank: Option<i64>,

    /// Current rank of the opponent
    #[arg(long, value_name = "RANK", allow_negative_numbers = true)]
    opponent_rank: Option<i64>,

    /// Match result from the reporting competitor's perspective
    #[arg(
        short,
        long,
        value_name = "RESULT",
        help = "Match result: win, lose or draw"
    )]
    result: Option<MatchResult>,

    /// Only update the reporting competitor
    #[arg(long)]
    one_way: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration and exit without computing ranks")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment, then apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    elo_rank::config::validate_config(&config)?;
    Ok(config)
}

fn entity_for(rank: Option<i64>) -> RatedEntity {
    rank.map(RatedEntity::with_rank).unwrap_or_default()
}

fn print_outcome(outcome: &MatchOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!(
        "rank:          {} -> {} ({:+})",
        outcome.old_rank,
        outcome.new_rank,
        outcome.rank_delta()
    );
    if outcome.opponent_updated {
        println!(
            "opponent rank: {} -> {} ({:+})",
            outcome.opponent_old_rank,
            outcome.opponent_new_rank,
            outcome.opponent_rank_delta()
        );
    } else {
        println!("opponent rank: {} (unchanged)", outcome.opponent_old_rank);
    }
    Ok(())
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let updater = EloUpdater::new(config.rating)?;

    if args.dry_run {
        info!("Configuration validation successful");
        debug!(options = ?updater.options(), "Effective rating options");
        return Ok(());
    }

    let result = args
        .result
        .ok_or_else(|| anyhow!("--result is required unless --dry-run is given"))?;

    let mut entity = entity_for(args.rank);
    let mut opponent = entity_for(args.opponent_rank);
    let update = UpdateOptions {
        one_way: args.one_way,
        ..Default::default()
    };

    let outcome = updater.apply_result(&mut entity, &mut opponent, result, &update)?;
    debug!(
        rank = ?entity.rank(),
        opponent_rank = ?opponent.rank(),
        "Ranks after update"
    );

    print_outcome(&outcome, args.json)
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
