//! Runtime configuration.
//!
//! Command line arguments win over the environment; `main` loads a `.env`
//! file via `dotenv` before parsing, so it can supply any of the variables.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

pub const ENV_INPUT: &str = "PREFIX_OVERLAP_INPUT";
pub const ENV_FORMAT: &str = "PREFIX_OVERLAP_FORMAT";
pub const ENV_LOG_CONFIG: &str = "PREFIX_OVERLAP_LOG_CONFIG";

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, coloured report
    #[default]
    #[value(alias = "text")]
    Terminal,
    Csv,
    /// Pretty printed array of results
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "prefix-overlap", about = "Detect overlapping IPv4/IPv6 prefixes")]
pub struct Config {
    /// Prefix file to check (`.json` or one CIDR per line)
    #[arg(env = ENV_INPUT)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, env = ENV_FORMAT, value_enum, ignore_case = true, default_value_t)]
    pub format: OutputFormat,

    /// log4rs configuration file
    #[arg(long, env = ENV_LOG_CONFIG, default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}
