//! `sogo` command line.
//!
//! Usage:
//!
//! - `sogo demo [--white K] [--black K] [--seed S]`
//! - `sogo batch [-n N] [--white K] [--black K] [--seed S] [--sequential] [--json]`
//! - `sogo verify`
//!
//! Strategy kinds: `random`, `stack`, `greedy`.

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use sogo::geometry::{CellClass, LineKind};
use sogo::{play_match, Board, Catalog, GameRng, Outcome, SampleConfig, Sampler, StrategyKind, Token};

#[derive(Parser, Debug)]
#[command(name = "sogo")]
#[command(about = "Sogo (4x4x4 connect four) rules engine and baseline bots")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one match and print the final board
    Demo {
        /// Strategy for White (moves first)
        #[arg(long, default_value = "greedy")]
        white: StrategyKind,

        /// Strategy for Black
        #[arg(long, default_value = "random")]
        black: StrategyKind,

        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Play many matches and report win/draw statistics
    Batch {
        /// Number of matches
        #[arg(short = 'n', long = "count", default_value = "1000")]
        count: u64,

        #[arg(long, default_value = "random")]
        white: StrategyKind,

        #[arg(long, default_value = "random")]
        black: StrategyKind,

        #[arg(long, default_value = "42")]
        seed: u64,

        /// Run on a single thread
        #[arg(long)]
        sequential: bool,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the geometry catalog and print its line counts
    Verify,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let catalog = match Catalog::try_build() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            error!("geometry catalog failed verification: {}", err);
            process::exit(2);
        }
    };

    let result = match args.command {
        Command::Demo { white, black, seed } => demo(catalog, white, black, seed),
        Command::Batch {
            count,
            white,
            black,
            seed,
            sequential,
            json,
        } => {
            let config = SampleConfig::new()
                .with_games(count)
                .with_seed(seed)
                .with_white(white)
                .with_black(black)
                .with_parallel(!sequential);
            batch(catalog, config, json)
        }
        Command::Verify => {
            verify(&catalog);
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("{}", err);
        process::exit(1);
    }
}

fn demo(
    catalog: Arc<Catalog>,
    white: StrategyKind,
    black: StrategyKind,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(catalog);
    let mut rng = GameRng::new(seed);
    let record = play_match(&mut board, white.build().as_ref(), black.build().as_ref(), &mut rng)?;

    print!("{board}");
    match record.outcome {
        Outcome::Win(token) => {
            println!("{} ({}) wins after {} moves.", token, strategy_for(token, white, black), record.length());
            for line in &record.winning_lines {
                println!("  {line}");
            }
        }
        Outcome::Draw => println!("Draw after {} moves.", record.length()),
    }
    Ok(())
}

fn strategy_for(token: Token, white: StrategyKind, black: StrategyKind) -> StrategyKind {
    match token {
        Token::White => white,
        Token::Black => black,
    }
}

fn batch(catalog: Arc<Catalog>, config: SampleConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        games = config.games,
        white = %config.white,
        black = %config.black,
        seed = config.seed,
        "running sample"
    );
    let stats = Sampler::new(catalog, config).run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

fn verify(catalog: &Catalog) {
    println!("{} lines", catalog.lines().len());
    for kind in LineKind::ALL {
        println!("  {:?}: {}", kind, catalog.count(kind));
    }

    println!("lines per cell:");
    for class in [CellClass::Corner, CellClass::Edge, CellClass::Face, CellClass::Interior] {
        let counts: Vec<usize> = catalog
            .cells()
            .iter()
            .filter(|c| c.class() == class)
            .map(|&c| catalog.lines_through(c).len())
            .collect();
        let min = counts.iter().min().copied().unwrap_or(0);
        let max = counts.iter().max().copied().unwrap_or(0);
        println!("  {:?} ({} cells): {}..={}", class, counts.len(), min, max);
    }

    let incidences: usize = catalog.cells().iter().map(|&c| catalog.lines_through(c).len()).sum();
    println!("{incidences} cell/line incidences");
    println!("cross-validation against sweep generator: ok");
}
