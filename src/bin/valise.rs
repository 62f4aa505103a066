//! Valise - chat client entry point
//!
//! Starts the terminal chat client against a running mock travel API.
//! Use `valise-api` to start the service itself.

use clap::Parser;
use valise::config::Settings;
use valise::runner::{run_tui, AppConfig};

/// Valise - your pocket travel concierge 🧳
#[derive(Parser, Debug)]
#[command(name = "valise")]
#[command(version, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Base URL of the travel API (overrides settings)
    #[arg(long, env = "VALISE_API_URL")]
    api_url: Option<String>,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from(&args);

    let mut settings = Settings::load_or_default();
    if let Some(api_url) = &args.api_url {
        settings.api_url = api_url.clone();
    }

    run_tui(config, settings)
}
