//! Command-line arguments for the Quote Display.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a quotes file. Plain text files hold one quote per line;
    /// files ending in `.json` hold an array of `{id, quote}` records.
    /// Uses the built-in Mark Twain catalog when omitted.
    #[clap(long)]
    pub quotes_path: Option<String>,

    /// Simulated source latency in milliseconds before a reply arrives.
    #[clap(long, default_value_t = 400)]
    pub latency_ms: u64,

    /// Probability in [0.0, 1.0] that a request fails with a simulated outage.
    #[clap(long, default_value_t = 0.0)]
    pub failure_rate: f64,

    /// Name to greet on startup. The display asks to log in when omitted.
    #[clap(long)]
    pub name: Option<String>,
}
