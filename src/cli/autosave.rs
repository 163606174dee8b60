//! Autosave command implementation

use std::path::Path;

use anyhow::Result;

use crate::config::Settings;
use crate::xlsx::export_list;

/// Import a sample list and re-export it in the flat autosave format.
pub fn autosave_command(input: &Path, output: &Path, settings: &Settings) -> Result<()> {
    let shipment = super::load_shipment(input, settings)?;
    export_list(output, &shipment, &settings.import)?;
    println!("Wrote {} ({} samples)", output.display(), shipment.len());
    Ok(())
}
