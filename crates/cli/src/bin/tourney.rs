use clap::{Parser, Subcommand};
use cli::{args::ActivityArgs, commands, files};
use rand::{SeedableRng, rngs::StdRng};
use scoring::models::{ActivityMetrics, RewardPool, Standing, UserStatisticsSnapshot};
use scoring::services::achievements;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_PULLS: u64 = 10_000;

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Tournament scoring and reward resolution", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single activity
    Score {
        #[command(subcommand)]
        activity: ActivityArgs,
    },
    /// Draw rewards from a pool file
    Pull {
        #[arg(long)]
        pool: PathBuf,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_PULLS))]
        count: u64,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// List achievements unlocked by a statistics snapshot
    Achievements {
        #[arg(long)]
        stats: PathBuf,
    },
    /// Rank standings and report movement since the last run
    Leaderboard {
        #[arg(long)]
        standings: PathBuf,

        #[arg(long, env = "TOURNEY_SNAPSHOT", default_value = "./leaderboard-snapshot.json")]
        snapshot: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "tourney={},cli={},scoring={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Score { activity } => {
            let metrics = ActivityMetrics::from(activity);
            println!("{}", commands::score(&metrics)?);
        }
        Commands::Pull { pool, count, seed } => {
            tracing::info!("Loading reward pool from: {}", pool.display());
            let pool: RewardPool = files::read_json(&pool)?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            print!("{}", commands::pull(&pool, count as usize, &mut rng));
        }
        Commands::Achievements { stats } => {
            let snapshot: UserStatisticsSnapshot = files::read_json(&stats)?;
            print!(
                "{}",
                commands::achievements(&achievements::catalogue(), &snapshot)
            );
        }
        Commands::Leaderboard {
            standings,
            snapshot,
        } => {
            let current: Vec<Standing> = files::read_json(&standings)?;
            let previous = files::load_snapshot(&snapshot)?;

            let (table, next) = commands::leaderboard(current, &previous);
            print!("{}", table);

            files::save_snapshot(&snapshot, &next)?;
        }
    }

    Ok(())
}
