//! XDG Base Directory support.

use std::path::PathBuf;

/// XDG directory paths for Valise.
pub struct XdgDirs {
    /// Config directory (~/.config/valise or XDG_CONFIG_HOME/valise)
    pub config: PathBuf,
    /// State directory (~/.local/state/valise or XDG_STATE_HOME/valise),
    /// home of the TUI log file
    pub state: PathBuf,
}

impl XdgDirs {
    /// Get XDG directories, respecting environment variables.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            config: std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| home.join(".config"))
                .join("valise"),
            state: std::env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| home.join(".local/state"))
                .join("valise"),
        }
    }

    /// Ensure both directories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [&self.config, &self.state] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
