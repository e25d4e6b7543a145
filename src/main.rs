//! Squadro engine command line.
//!
//! ## Usage
//!
//! - `squadro demo` - Play the engine against itself
//! - `squadro best-move 0 7 2` - Replay piece ids from the start and print
//!   the engine's reply

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use squadro_ai::controller::{play_match, ExternalMove, SelfPlayConfig};
use squadro_ai::core::Board;
use squadro_ai::search::{SearchConfig, Searcher};

/// Squadro: a parallel alpha-beta and rollout engine
#[derive(Parser)]
#[command(name = "squadro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full match of the engine against itself
    Demo {
        /// Thinking time per move in milliseconds
        #[arg(long, default_value_t = 1000)]
        move_time_ms: u64,
        /// Stop after this many plies
        #[arg(long, default_value_t = 400)]
        max_plies: u32,
        /// Base seed for both sides
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Worker threads (0 = one per CPU)
        #[arg(long)]
        threads: Option<usize>,
        /// JSON search configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the engine's move after a sequence of piece ids (0-9)
    BestMove {
        /// Thinking time in milliseconds
        #[arg(long, default_value_t = 10_000)]
        move_time_ms: u64,
        /// JSON search configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Moves played so far, as internal piece ids
        #[arg(allow_negative_numbers = true)]
        moves: Vec<i32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::BestMove {
            move_time_ms,
            config,
            moves,
        }) => best_move(load_config(config.as_deref())?, move_time_ms, &moves),
        Some(Commands::Demo {
            move_time_ms,
            max_plies,
            seed,
            threads,
            config,
        }) => {
            let mut search = load_config(config.as_deref())?;
            if let Some(threads) = threads {
                search = search.with_threads(threads);
            }
            let config = SelfPlayConfig::new()
                .with_move_time(Duration::from_millis(move_time_ms))
                .with_max_plies(max_plies)
                .with_seed(seed)
                .with_search(search);
            run_demo(&config)
        }
        None => run_demo(&SelfPlayConfig::new()),
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SearchConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

fn run_demo(config: &SelfPlayConfig) -> Result<()> {
    println!("Squadro self-play, {:?} per move\n", config.move_time);

    let record = play_match(config)?;
    for ply in &record.plies {
        let external = ExternalMove::from_piece(ply.piece);
        print!("{:>3}. {} pawn {}", ply.ply + 1, ply.player, external.pawn);
        if !ply.captured.is_empty() {
            let captured: Vec<String> = ply.captured.iter().map(ToString::to_string).collect();
            print!("  captures {}", captured.join(", "));
        }
        println!();
    }

    println!("\n{}", record.final_board);
    match record.winner {
        Some(winner) => println!("{winner} wins in {} plies", record.len()),
        None => println!("No winner after {} plies", record.len()),
    }
    Ok(())
}

fn best_move(config: SearchConfig, move_time_ms: u64, moves: &[i32]) -> Result<()> {
    let mut board = Board::new();
    for (index, &raw) in moves.iter().enumerate() {
        board
            .apply_move_raw(raw)
            .with_context(|| format!("replaying move {} ({raw})", index + 1))?;
    }

    let mut searcher = Searcher::new(config)?;
    match searcher.find_best_move(&board, Duration::from_millis(move_time_ms))? {
        Some(piece) => {
            let stats = searcher.stats();
            println!(
                "{} plays {piece} (pawn {}), depth {}, {} nodes",
                board.current_player(),
                ExternalMove::from_piece(piece).pawn,
                stats.completed_depth(),
                stats.nodes
            );
        }
        None => println!("No legal move\n{board}"),
    }
    Ok(())
}
