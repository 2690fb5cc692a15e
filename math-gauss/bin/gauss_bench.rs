//! Gaussian elimination baseline
//!
//! Builds the reference system, solves it, prints the elapsed time of the
//! solve and checks the result against its closed form.
//!
//! Usage:
//!     cargo run --release --bin gauss-bench -- -s 2048

use anyhow::Context;
use clap::Parser;
use math_audio_gauss::parallel::current_num_threads;
use math_audio_gauss::{GaussConfig, LinearSystem, gauss_solve, verify_reference_solution};
use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_SIZE: usize = 1024;

#[derive(Parser, Debug)]
#[command(
    name = "gauss-bench",
    about = "Solve the reference dense system by Gaussian elimination and time it"
)]
struct Cli {
    /// Matrix dimension (non-positive values fall back to the default)
    #[arg(short, long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    size: i64,

    /// Number of threads for parallel elimination (0 = use all available cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Rows below the pivot needed before elimination goes parallel (0 = never)
    #[arg(long, default_value_t = 256)]
    parallel_threshold: usize,

    /// Log progress every N elimination steps (0 = silent)
    #[arg(long, default_value_t = 0)]
    print_interval: usize,

    /// Write the run report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the closed-form check of the solution
    #[arg(long)]
    no_verify: bool,
}

#[derive(Debug, Serialize)]
struct RunReport {
    size: usize,
    seconds: f64,
    row_swaps: usize,
    verified: bool,
    threads: usize,
}

fn resolve_size(requested: i64) -> usize {
    if requested > 0 {
        requested as usize
    } else {
        log::warn!("size {requested} is not positive, using {DEFAULT_SIZE}");
        println!("  -s is negative... using {DEFAULT_SIZE}");
        DEFAULT_SIZE
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure the rayon thread pool")?;
    }

    let size = resolve_size(cli.size);
    let config = GaussConfig {
        parallel_threshold: cli.parallel_threshold,
        print_interval: cli.print_interval,
    };

    let system = LinearSystem::reference(size)?;
    let solution = match gauss_solve(system, &config) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let seconds = solution.elapsed.as_secs_f64();
    println!("Size: {size} rows");
    println!("Time: {seconds:.6} seconds");

    let verified = if cli.no_verify {
        false
    } else {
        if let Err(e) = verify_reference_solution(&solution.x) {
            eprintln!("Incorrect solution: {e}");
            std::process::exit(1);
        }
        println!("Correct solution found.");
        true
    };

    if let Some(path) = cli.json {
        let report = RunReport {
            size,
            seconds,
            row_swaps: solution.row_swaps,
            verified,
            threads: current_num_threads(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}
