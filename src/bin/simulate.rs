use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use future_food_lab::error::Result;
use future_food_lab::models::Catalog;
use future_food_lab::simulator::{print_summary, run_simulation, write_csv, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play random rounds to see how the scoring and achievements behave")]
struct Args {
    /// Number of rounds to play
    #[arg(long, default_value = "200")]
    rounds: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Fewest ingredients per round
    #[arg(long, default_value = "2")]
    min: usize,

    /// Most ingredients per round
    #[arg(long, default_value = "6")]
    max: usize,

    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output CSV file for per-round results
    #[arg(long, default_value = "simulation_rounds.csv")]
    csv: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = SimulationConfig {
        rounds: args.rounds,
        seed: args.seed,
        min_ingredients: args.min,
        max_ingredients: args.max,
    };
    config.validate()?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    info!(rounds = config.rounds, seed = config.seed, "running simulation");
    let results = run_simulation(&config, &catalog);

    print_summary(&results);

    write_csv(&results, &args.csv)?;
    println!("Wrote per-round results to {:?}", args.csv);
    Ok(())
}
