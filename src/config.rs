//! Command line configuration for the `sssp` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Start vertex used when none is given
pub const DEFAULT_START_VERTEX: &str = "A";

/// How distances are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<vertex>: <distance>` lines
    Text,
    /// A JSON document
    Json,
}

/// Single-source shortest distances over a weighted undirected edge list
#[derive(Parser, Debug, Clone)]
#[command(name = "sssp", version, about)]
pub struct Cli {
    /// Edge list file: one `<vertex> <vertex> <weight>` per line
    pub input: PathBuf,

    /// Vertex to measure distances from
    #[arg(env = "SSSP_START", default_value = DEFAULT_START_VERTEX)]
    pub start: String,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub start: String,
    pub format: OutputFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            start: cli.start,
            format: cli.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_defaults_to_a() {
        let cli = Cli::try_parse_from(["sssp", "graph.txt"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.input, PathBuf::from("graph.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        // SSSP_START may be set in the environment running the tests
        if std::env::var_os("SSSP_START").is_none() {
            assert_eq!(config.start, DEFAULT_START_VERTEX);
        }
    }

    #[test]
    fn start_and_format_can_be_overridden() {
        let cli = Cli::try_parse_from(["sssp", "--format", "json", "graph.txt", "Q"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.start, "Q");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["sssp"]).is_err());
    }
}
