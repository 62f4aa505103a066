//! Application Runner Module
//!
//! Provides shared entry point functions for the chat client and the mock
//! API service. These functions are called by the binary entry points.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Shared application configuration.
///
/// Runtime options common to both binaries. Address overrides are handled
/// by the individual binaries and merged into [`Settings`] before they
/// reach this module.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
}

impl AppConfig {
    fn default_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "info,valise=debug"
        }
    }
}

/// Run the mock travel API service.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub fn run_api(config: AppConfig, settings: Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::api::server::serve(settings.bind_addr))
}

/// Run the terminal chat client.
///
/// # Errors
///
/// Returns an error if the TUI feature is not enabled or terminal setup fails.
#[cfg(feature = "tui")]
pub fn run_tui(config: AppConfig, settings: Settings) -> anyhow::Result<()> {
    use std::fs::File;

    use crate::config::XdgDirs;

    // Log to a file so the alternate screen stays clean
    let dirs = XdgDirs::new();
    dirs.ensure_dirs()?;
    let log_file = File::create(dirs.state.join("tui.log"))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::tui::run(settings))
}

#[cfg(not(feature = "tui"))]
pub fn run_tui(_config: AppConfig, _settings: Settings) -> anyhow::Result<()> {
    anyhow::bail!("TUI feature not enabled. Recompile with --features tui")
}
