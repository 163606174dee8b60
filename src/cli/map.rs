//! Map command implementation

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::xlsx::export_map;

/// Import a sample list and export its packing map.
pub fn map_command(input: &Path, output: &Path, number: &str, settings: &Settings) -> Result<()> {
    let mut shipment = super::load_shipment(input, settings)?;
    shipment.set_number(number);
    export_map(output, &shipment)?;
    info!("packing map written to {}", output.display());
    println!(
        "Wrote {} ({} samples, {} boxes)",
        output.display(),
        shipment.len(),
        shipment.boxes_count()
    );
    Ok(())
}
