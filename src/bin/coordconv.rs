//! Coordinate Conversion Tool
//!
//! Interactive converter between Cartesian, polar, spherical and cylindrical
//! coordinates. Reads answers from stdin and prints prompts and results to
//! stdout; logs go to stderr.
//!
//! Usage:
//!   cargo run --bin coordconv -- [--precision N] [--format text|json] [--once] [-v]

use std::io;

use clap::{ArgAction, Parser};
use coordconv::constants::MAX_PRECISION;
use coordconv::{OutputStyle, Shell, ShellConfig};
use log::LevelFilter;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Coordinate Conversion Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts points between Cartesian, polar, spherical and cylindrical coordinates",
    long_about = None
)]
struct Args {
    /// Number of decimal digits in results; skips the precision prompt
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: Option<u8>,

    /// Output style of the results
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Text)]
    format: OutputStyle,

    /// Exit after the first conversion
    #[arg(long, action = ArgAction::SetTrue)]
    once: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ShellConfig {
        precision: args.precision.map(usize::from),
        style: args.format,
        once: args.once,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run()?;

    Ok(())
}
