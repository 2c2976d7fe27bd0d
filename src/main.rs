use clap::{Parser, Subcommand};
use hulllib::Algorithm;
use hulllib::cli_commands::*;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

/// Compare convex hull algorithms on integer point sets
#[derive(Parser)]
#[command(name = "hull", version)]
struct Cli {
    /// Log per-run details (iteration counts, hull sizes) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the convex hull of a WKT MULTIPOINT or POLYGON
    Hull {
        /// Geometry in WKT format, integer coordinates
        input: String,
        /// Hull algorithm: fast (monotone chain) or slow (brute force)
        #[arg(short, long, default_value = "fast")]
        algorithm: Algorithm,
        /// Save the hull WKT to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run both algorithms on a WKT geometry and compare iteration counts
    Compare {
        /// Geometry in WKT format, integer coordinates
        input: String,
    },
    /// Run both algorithms on random points and compare iteration counts
    Random {
        /// Number of points to generate
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
        /// Coordinates are drawn from [0, extent)
        #[arg(short, long, default_value_t = 1000)]
        extent: i32,
        /// Seed for reproducible point sets
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Read commands from stdin: add X Y, fast, slow, clear, show, quit
    Session,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let res = match cli.command {
        Command::Hull {
            input,
            algorithm,
            output,
        } => compute_convex_hull(&input, algorithm, output.as_deref(), &mut stdout).map(|_| ()),
        Command::Compare { input } => compare_wkt(&input, &mut stdout).map(|_| ()),
        Command::Random {
            count,
            extent,
            seed,
        } => compare_random(count, extent, seed, &mut stdout).map(|_| ()),
        Command::Session => run_session(io::stdin().lock(), &mut stdout).map(|_| ()),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
