//! Show command implementation

use std::path::Path;

use anyhow::Result;

use crate::config::Settings;
use crate::shipment::Shipment;

/// Import a sample list and print it together with the materialized grid.
pub fn show_command(input: &Path, settings: &Settings) -> Result<()> {
    let shipment = super::load_shipment(input, settings)?;
    print_list(&shipment);
    println!();
    print_grid(&shipment);
    Ok(())
}

fn print_list(shipment: &Shipment) {
    println!(
        "{} samples, {} boxes",
        shipment.len(),
        shipment.boxes_count()
    );
    for (index, sample) in shipment.samples().iter().enumerate() {
        let mark = if sample.packed() { "x" } else { " " };
        println!(
            "{:>4} [{}] {:<16} {:<8} {}",
            index,
            mark,
            sample.code(),
            sample.weight(),
            sample.location()
        );
    }
}

fn print_grid(shipment: &Shipment) {
    let columns = shipment.box_options().columns();
    for row in 0..shipment.grid_rows() {
        let mut line = String::new();
        for column in 0..columns {
            let text = shipment.cell(row, column).unwrap_or("");
            line.push_str(&format!("{:<18}", text));
        }
        println!("{}", line.trim_end());
    }
}
