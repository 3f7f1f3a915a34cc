//! AI Simulator CLI - headless euchre games between seat agents.
//!
//! Runs seeded games through the engine's controller and writes per-game
//! metrics for comparing agents and difficulty tiers.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use engine::domain::derive_game_seed;
use engine::{Difficulty, GameConfig, Team};
use metrics::{build_game_metrics, SimulationConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AgentKind, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Headless euchre simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Agent for all seats (shortcut to set all 4 seats to the same agent)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AgentKind>,

    /// Agent for seat 0 (South)
    #[arg(long, default_value = "policy")]
    seat0: AgentKind,

    /// Agent for seat 1 (West)
    #[arg(long, default_value = "policy")]
    seat1: AgentKind,

    /// Agent for seat 2 (North)
    #[arg(long, default_value = "policy")]
    seat2: AgentKind,

    /// Agent for seat 3 (East)
    #[arg(long, default_value = "policy")]
    seat3: AgentKind,

    /// Difficulty for both teams (easy, medium, hard, expert)
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Override the North/South difficulty
    #[arg(long)]
    ns_difficulty: Option<Difficulty>,

    /// Override the East/West difficulty
    #[arg(long)]
    ew_difficulty: Option<Difficulty>,

    /// Throw the hand in when everyone passes instead of sticking the dealer
    #[arg(long)]
    no_stick: bool,

    /// Points needed to win
    #[arg(long, default_value = "10")]
    winning_score: u8,

    /// Base seed; each game's seed is derived from it. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_kinds = match args.seats {
        Some(kind) => [kind; 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let agents = seat_kinds.map(AgentKind::registry_name);
    let difficulties = [
        args.ns_difficulty.unwrap_or(args.difficulty),
        args.ew_difficulty.unwrap_or(args.difficulty),
    ];

    let config = GameConfig {
        difficulty: args.difficulty,
        stick_the_dealer: !args.no_stick,
        winning_score: args.winning_score,
        ..GameConfig::default()
    };
    config.validate()?;

    let simulator = Simulator::new(config, agents, difficulties)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    if args.show_output {
        info!(
            games = args.games,
            base_seed,
            ?agents,
            ns = %difficulties[0],
            ew = %difficulties[1],
            "starting simulation"
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = derive_game_seed(base_seed, u64::from(game_num));

        match simulator.simulate_game(game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let sim_config = SimulationConfig {
                    agents: agents.map(String::from),
                    difficulties,
                    stick_the_dealer: simulator.config().stick_the_dealer,
                    winning_score: simulator.config().winning_score,
                    total_games: args.games,
                };
                let metrics = build_game_metrics(
                    game_num,
                    sim_config,
                    &result,
                    args.metrics_level,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_num, error = %e, "failed to write metrics");
                }

                if args.verbose {
                    info!(game_num, scores = ?result.final_scores, winner = %result.winner, "game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, game_seed, error = %e, "game failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let written = output_writer.games_written();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV ({written} games) written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let games = results.len() as f64;
    let hands: usize = results.iter().map(|r| r.history.len()).sum();
    let redeals: u32 = results.iter().map(|r| r.history.redeals).sum();
    println!("Average hands per game: {:.1}", hands as f64 / games);
    if redeals > 0 {
        println!("Thrown-in deals: {}", redeals);
    }

    println!("\n=== Results by Team ===");
    for team in Team::ALL {
        let wins = results.iter().filter(|r| r.winner == team).count();
        let euchred: usize = results.iter().map(|r| r.history.times_euchred(team)).sum();
        let marches: usize = results.iter().map(|r| r.history.marches(team)).sum();
        let made: usize = results
            .iter()
            .map(|r| r.history.hands_made_by(team).count())
            .sum();
        let avg_score = results
            .iter()
            .map(|r| f64::from(r.final_scores[team.index()]))
            .sum::<f64>()
            / games;
        println!(
            "{}: wins={} ({:.1}%), avg score={:.1}, hands made={}, euchred={}, marches={}",
            team,
            wins,
            wins as f64 / games * 100.0,
            avg_score,
            made,
            euchred,
            marches
        );
    }
}
