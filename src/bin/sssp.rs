use std::process::ExitCode;

use clap::Parser;
use edgelist_sssp::config::{Cli, Config, OutputFormat};
use edgelist_sssp::shortest_distances;

fn run(config: &Config) -> edgelist_sssp::Result<String> {
    let distances = shortest_distances(config)?;
    log::info!(
        "{} of {} vertices reachable from {}",
        distances.reachable_count(),
        distances.len(),
        distances.start()
    );

    match config.format {
        OutputFormat::Text => Ok(distances.to_string()),
        OutputFormat::Json => distances.to_json().map(|json| json + "\n"),
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = Config::from(Cli::parse());

    // Render fully before printing so a failure leaves stdout empty
    match run(&config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
