use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the diagnostic log subscriber when `verbose` is set.
///
/// Logs go to stderr so they never mix with translations on stdout. Fails
/// when a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    if !verbose {
        return Ok(());
    }
    fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}
