use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;

use crate::broadcast::Simulation;
use crate::common::config::RunConfig;
use crate::common::locations::load_locations;

mod broadcast;
mod common;
mod error;
mod report;

const USAGE: &str = "Usage: bip-broadcast <locations.txt>";

/// Builds a minimum-power broadcast tree with the Broadcast Incremental Power heuristic.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File with one `(x,y)` node location per line; the first node is the source
    input: PathBuf,
}

/// Parse the command line. On failure returns the process exit code: `0` after
/// printing help or version, `-1` after printing the usage line to stdout.
fn parse_args<I, T>(args: I) -> Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            0
        }
        _ => {
            println!("{}", USAGE);
            -1
        }
    })
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = RunConfig::for_input(&cli.input)?;
    let locations = load_locations(&cli.input).with_context(|| format!("Failed to load {}", cli.input.display()))?;
    info!("Computing broadcast tree over {} nodes", locations.len());
    let mut simulation = Simulation::new(locations, config.match_tolerance)?;

    let stdout = io::stdout();
    let mut report = report::reporter_for(&config, Box::new(stdout.lock()));
    let tree = simulation.run(report.as_mut())?;
    report.finish(&tree)?;
    Ok(())
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("bip_broadcast"), LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => process::exit(code),
    };

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_argument_is_a_usage_error() {
        assert_eq!(parse_args(["bip-broadcast"]).unwrap_err(), -1);
    }

    #[test]
    fn single_input_argument_is_accepted() {
        let cli = parse_args(["bip-broadcast", "nodes.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("nodes.txt"));
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        assert_eq!(parse_args(["bip-broadcast", "nodes.txt", "more.txt"]).unwrap_err(), -1);
    }
}
