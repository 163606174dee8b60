//! CLI command implementations

pub mod autosave;
pub mod init;
pub mod map;
pub mod show;

use std::path::Path;

use anyhow::Result;

use crate::config::Settings;
use crate::shipment::Shipment;
use crate::xlsx::import_list;

/// Import a sample list into a fresh registry configured from `settings`.
pub(crate) fn load_shipment(input: &Path, settings: &Settings) -> Result<Shipment> {
    let samples = import_list(input, &settings.import)?;
    let mut shipment = Shipment::new(settings.box_options());
    shipment.add_samples(samples, 0);
    Ok(shipment)
}
