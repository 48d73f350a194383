use clap::Parser;
use log::{error, info};

use seqio::bench::{remove_destination, SequentialBenchmark};
use seqio::cli::Cli;
use seqio::config::RunConfig;
use seqio::Result;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let Some(config) = RunConfig::from_cli(&cli) else {
        Cli::print_usage();
        return;
    };

    if let Err(err) = run(config) {
        error!("{}", err);
        std::process::exit(err.exit_code());
    }
}

fn run(config: RunConfig) -> Result<()> {
    info!("{}", config.describe());

    let mut benchmark = SequentialBenchmark::new(config.clone());
    let report = benchmark.run()?;
    println!("{}", report);

    if config.remove_file {
        remove_destination(&config.destination);
    }

    Ok(())
}
