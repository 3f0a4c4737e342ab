//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
///
/// Durations are taken as floating point seconds and rounded to whole
/// seconds at startup; omitted values fall back to clap's defaults here.
#[derive(Parser)]
#[command(name = "stoplight")]
#[command(about = "A state-managed traffic light simulator with per-light countdown control")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Number of independent lights to run
    #[arg(short, long, default_value = "1")]
    pub lights: usize,

    /// Red duration in seconds
    #[arg(short, long, default_value = "5")]
    pub red: f64,

    /// Yellow duration in seconds
    #[arg(short, long, default_value = "3")]
    pub yellow: f64,

    /// Green duration in seconds
    #[arg(short, long, default_value = "5")]
    pub green: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
