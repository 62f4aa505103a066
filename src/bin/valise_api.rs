//! Valise API - mock travel-booking service entry point
//!
//! Serves the travel routes the concierge talks to. Every route except the
//! airport lookup returns a fixed payload.

use clap::Parser;
use valise::config::Settings;
use valise::runner::{run_api, AppConfig};

/// Valise API - mock travel-booking service
#[derive(Parser, Debug)]
#[command(name = "valise-api")]
#[command(version, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Address to listen on (overrides settings)
    #[arg(long, env = "VALISE_BIND_ADDR")]
    bind: Option<String>,
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
    if let Some(bind) = &args.bind {
        settings.bind_addr = bind.clone();
    }

    run_api(config, settings)
}
