//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use capture_config::Config;
use std::path::Path;
use tracing::info;

mod init;
mod rules;
mod run;
mod table;
mod version;

pub use init::InitStrategy;
pub use rules::RulesStrategy;
pub use run::{RunInput, RunStrategy};
pub use table::{TableInput, TableStrategy};
pub use version::VersionStrategy;

/// Load the config from `path`, or from `~/capture/config.json` when absent.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, |path| {
        info!("Using config file {}", path.display());
        Config::load_from(path)
    })
}

/// Contract shared by all command strategies.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
