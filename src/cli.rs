//! CLI argument parsing for seqio

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::{DEFAULT_COUNT, DEFAULT_ITERATIONS, DEFAULT_UNIT};

#[derive(Parser, Debug)]
#[command(name = "seqio")]
#[command(version)]
#[command(about = "Sequential write/read throughput benchmark", long_about = None)]
pub struct Cli {
    /// Amount of measurement units (-u) to be written
    #[arg(
        short = 'c',
        value_name = "COUNT",
        default_value_t = DEFAULT_COUNT,
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Destination file for the benchmark. You must have write permission
    /// in its parent directory.
    #[arg(short = 'd', value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Number of write/read iterations
    #[arg(
        short = 'i',
        value_name = "ITERATIONS",
        default_value_t = DEFAULT_ITERATIONS,
        allow_negative_numbers = true
    )]
    pub iterations: i64,

    /// Remove the destination file afterwards
    #[arg(short = 'r')]
    pub remove: bool,

    /// Measurement unit: b or B (bytes), k (kB), K (KiB), m (MB), M (MiB),
    /// g (GB), G (GiB), t (TB), T (TiB). Anything else counts as GiB.
    /// The whole amount is held in memory, so pick something that fits.
    #[arg(short = 'u', value_name = "UNIT", default_value_t = DEFAULT_UNIT)]
    pub unit: char,
}

impl Cli {
    /// Print the usage text to stdout, as done when no destination is given.
    pub fn print_usage() {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["seqio"]);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.iterations, 4);
        assert_eq!(cli.unit, 'G');
        assert!(!cli.remove);
        assert!(cli.destination.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "seqio", "-c", "8", "-i", "2", "-u", "M", "-r", "-d", "/tmp/bench.dat",
        ]);
        assert_eq!(cli.count, 8);
        assert_eq!(cli.iterations, 2);
        assert_eq!(cli.unit, 'M');
        assert!(cli.remove);
        assert_eq!(cli.destination, Some(PathBuf::from("/tmp/bench.dat")));
    }

    #[test]
    fn test_negative_count_accepted() {
        let cli = Cli::parse_from(["seqio", "-c", "-5", "-d", "/tmp/bench.dat"]);
        assert_eq!(cli.count, -5);
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }
}
