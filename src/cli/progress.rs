//! Progress bar for the planning phase.
//!
//! - **Quiet Mode**: no bar (`--quiet` or the `PYXPLOD_QUIET` env var)
//! - **Non-TTY**: no bar when stderr is not a terminal (CI, pipes, tests)

use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

pub const QUIET_ENV_VAR: &str = "PYXPLOD_QUIET";

const TEMPLATE_FILES: &str = "{spinner} {msg} [{bar:30}] {pos}/{len} files ({percent}%)";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var_os(QUIET_ENV_VAR).is_some();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        !self.quiet_mode && std::io::stderr().is_terminal()
    }

    /// A bar over `len` files, or a hidden bar if progress should not be shown.
    pub fn create_bar(&self, len: u64) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template(TEMPLATE_FILES)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let pb = ProgressBar::new(len).with_style(style);
        pb.set_message("Processing files...");
        pb
    }
}
