//! CLI entry point for the water jugs solver.
//!
//! Usage:
//!   water-jugs --algorithm <depth-first|breadth-first> [options]
//!
//! Options:
//!   --small <n>          Capacity of the smaller jug (default: 3)
//!   --large <n>          Capacity of the larger jug (default: 5)
//!   --small-initial <n>  Initial volume of the smaller jug (default: 0)
//!   --large-initial <n>  Initial volume of the larger jug (default: 0)
//!   --target <n>         Volume to measure in either jug (default: 4)
//!   --json               Print the result as JSON
//!   --time               Report the time spent searching

mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use water_jugs::{replay, solve, Algorithm, JugConfig, SearchStats, SolverResult, State, Volume};

/// Search finished with a solution
const EXIT_SOLVED: u8 = 0;
/// Configuration rejected before searching
const EXIT_INVALID: u8 = 1;
/// Every reachable state was tried without reaching the target
const EXIT_NO_SOLUTION: u8 = 2;

#[derive(Parser)]
#[command(name = "water-jugs")]
#[command(about = "Solving the water jugs problem using search algorithms")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " by ", env!("CARGO_PKG_AUTHORS")))]
struct Cli {
    /// Search algorithm to use
    #[arg(short = 'x', long, value_enum)]
    algorithm: Algorithm,

    /// Capacity of the smaller jug
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    small: i64,

    /// Capacity of the larger jug
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    large: i64,

    /// Initial volume of the smaller jug
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    small_initial: i64,

    /// Initial volume of the larger jug
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    large_initial: i64,

    /// Volume to measure in either jug
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    target: i64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Report the time spent searching
    #[arg(long)]
    time: bool,
}

/// JSON output format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    algorithm: Algorithm,
    config: JugConfig,
    start: State,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<[Volume; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<&'static str>>,
    #[serde(flatten)]
    stats: SearchStats,
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::from(EXIT_SOLVED),
        Ok(false) => ExitCode::from(EXIT_NO_SOLUTION),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_INVALID)
        }
    }
}

/// Validate the arguments, run the search and print the outcome.
///
/// Returns whether a solution was found.
fn run(cli: Cli) -> Result<bool> {
    let config = JugConfig::new(cli.small, cli.large, cli.target)
        .context("cannot set up the jugs")?;
    let start = config
        .start(cli.small_initial, cli.large_initial)
        .context("cannot build the start state")?;

    info!(%start, algorithm = %cli.algorithm, "starting search");
    let result = solve(start, &config, cli.algorithm);

    if cli.json {
        let output = format_result(&result, config, start)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result.solution {
            Some(solution) => println!("{solution}"),
            None => println!("No solution found"),
        }
        if cli.time {
            println!("Elapsed: {} ms", result.stats.time_elapsed_ms);
        }
    }

    Ok(result.is_solved())
}

fn format_result(result: &SolverResult, config: JugConfig, start: State) -> Result<SearchOutput> {
    let moves = match &result.solution {
        Some(solution) => Some(
            replay(solution, &config)?
                .into_iter()
                .map(|step| step.operator.label())
                .collect(),
        ),
        None => None,
    };

    Ok(SearchOutput {
        algorithm: result.algorithm,
        config,
        start,
        solved: result.is_solved(),
        solution: result
            .solution
            .as_ref()
            .map(|s| s.iter().map(|state| [state.smaller(), state.larger()]).collect()),
        moves,
        stats: result.stats.clone(),
    })
}
