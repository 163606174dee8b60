//! Init command implementation

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::Settings;

/// Write the default config file.
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    Settings::write_default(path, force)?;
    info!("wrote default config to {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}
