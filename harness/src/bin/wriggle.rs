//! `wriggle`: solve a TJ-Wriggle puzzle file from the command line.
//!
//! ```text
//! wriggle puzzles/corridor.txt solution.txt --strategy astar --heuristic manhattan -v
//! ```
//!
//! Prints the effective branching factor for A* runs, writes the solution
//! file, and optionally writes a JSON report. Exits non-zero only on I/O,
//! decode, or configuration errors; an unsolvable puzzle exits zero.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wriggle_harness::branching::format_branching_factor;
use wriggle_harness::bundle::{report_digest, report_json, write_solution_file};
use wriggle_harness::runner::solve_puzzle_text;
use wriggle_search::heuristic::HeuristicKind;
use wriggle_search::policy::{SearchPolicyV1, StrategyV1, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(name = "wriggle", version, about = "Solve TJ-Wriggle puzzles with classical search")]
struct Cli {
    /// Puzzle file to solve.
    puzzle: PathBuf,

    /// Where to write the solution file.
    #[arg(default_value = "solution.txt")]
    solution: PathBuf,

    /// Search strategy: bfts, id-dfts, grbefgs, astar.
    #[arg(long, default_value = "astar")]
    strategy: StrategyV1,

    /// Heuristic for grbefgs and astar: manhattan, obstacles.
    #[arg(long, default_value = "manhattan")]
    heuristic: HeuristicKind,

    /// Depth bound for id-dfts.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Let id-dfts deepen without bound. May never return on unsolvable puzzles.
    #[arg(long)]
    unbounded: bool,

    /// Also write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = SearchPolicyV1 {
        strategy: cli.strategy,
        heuristic: cli.heuristic,
        max_depth: (!cli.unbounded).then_some(cli.max_depth),
    };
    let puzzle_text = fs::read_to_string(&cli.puzzle)
        .with_context(|| format!("reading puzzle {}", cli.puzzle.display()))?;

    println!("Solving {}...", cli.puzzle.display());
    let run = solve_puzzle_text(&puzzle_text, &policy)
        .with_context(|| format!("solving {}", cli.puzzle.display()))?;
    let report = &run.report;

    let solution_text = if let Some(solution) = &report.solution {
        println!("Solution found: {} actions.", solution.len());
        match report.branching_factor {
            Some(b_star) => println!("b* = {}", format_branching_factor(b_star)),
            None if policy.strategy == StrategyV1::AStar => println!("b* could not be found"),
            None => {}
        }
        let text = write_solution_file(&cli.solution, &run.board, solution, report.elapsed)?;
        println!("Solution written to {}", cli.solution.display());
        Some(text)
    } else {
        println!("Could not find a solution ({}).", report.outcome.name());
        None
    };

    if let Some(path) = &cli.report {
        let bytes = report_json(&puzzle_text, report, solution_text.as_deref())?;
        fs::write(path, &bytes).with_context(|| format!("writing report {}", path.display()))?;
        info!(
            path = %path.display(),
            digest = %report_digest(&bytes),
            "report written"
        );
    }

    Ok(())
}
