//! Sample-list and packing-map export.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use tracing::info;

use crate::config::ColumnIdentifiers;
use crate::shipment::Shipment;

/// Character width of a map cell in the exported sheet.
const CELL_WIDTH: f64 = 16.0;
/// Character width of the narrow list columns.
const LIST_WIDTH: f64 = 8.0;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("the shipment list is empty, nothing to export")]
    EmptyList,
    #[error("the shipment number is not set")]
    NoNumber,
    #[error(transparent)]
    Xlsx(#[from] XlsxError),
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9D9D9))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn cell_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Write the flat sample list (autosave format): one row per sample, the
/// identifier names as a header row.
pub fn export_list(
    path: &Path,
    shipment: &Shipment,
    identifiers: &ColumnIdentifiers,
) -> Result<(), ExportError> {
    if shipment.is_empty() {
        return Err(ExportError::EmptyList);
    }

    let mut workbook = Workbook::new();
    let header = header_format();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(format!("shipment list {}", shipment.number()))?;

    let titles = [
        identifiers.storage.as_str(),
        identifiers.rack.as_str(),
        identifiers.box_.as_str(),
        identifiers.row.as_str(),
        identifiers.column.as_str(),
        identifiers.code.as_str(),
        identifiers.weight.as_str(),
    ];
    for (col, title) in titles.iter().enumerate() {
        worksheet.set_column_width(col as u16, LIST_WIDTH)?;
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }
    // The code column holds the longest values.
    worksheet.set_column_width(5, CELL_WIDTH)?;

    for (i, sample) in shipment.samples().iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, sample.storage())?;
        worksheet.write_string(row, 1, sample.rack())?;
        worksheet.write_string(row, 2, sample.box_())?;
        worksheet.write_string(row, 3, sample.row())?;
        worksheet.write_string(row, 4, sample.column())?;
        worksheet.write_string(row, 5, sample.code())?;
        worksheet.write_string(row, 6, sample.weight())?;
    }

    workbook.save(path)?;
    info!(
        "exported list of {} samples to {}",
        shipment.len(),
        path.display()
    );
    Ok(())
}

/// Write the packing map: one tabular block per box.
///
/// Each block starts with the box label row (`number.box`), then a header
/// row of column letters, then the box rows each led by a 1-based row
/// number. Blocks are separated by the configured number of blank rows.
pub fn export_map(path: &Path, shipment: &Shipment) -> Result<(), ExportError> {
    if shipment.is_empty() {
        return Err(ExportError::EmptyList);
    }
    if shipment.number().is_empty() {
        return Err(ExportError::NoNumber);
    }

    let options = shipment.box_options();
    let mut workbook = Workbook::new();
    let header = header_format();
    let cells = cell_format();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(format!("Shipment {}", shipment.number()))?;

    for column in 0..options.columns() {
        worksheet.set_column_width((column + 1) as u16, CELL_WIDTH)?;
    }

    let rows_per_block = 2 + options.rows() + options.separator();
    for block in 0..shipment.boxes_count() {
        let top = (rows_per_block * block) as u32;

        // Box label row.
        worksheet.write_string_with_format(
            top,
            1,
            format!("{}.{}", shipment.number(), block + 1),
            &header,
        )?;

        // Column-letter header row.
        for column in 0..options.columns() {
            let letter = char::from(b'a' + (column % 26) as u8);
            worksheet.write_string_with_format(
                top + 1,
                (column + 1) as u16,
                letter.to_string(),
                &header,
            )?;
        }

        for row in 0..options.rows() {
            let file_row = top + 2 + row as u32;
            worksheet.write_string_with_format(
                file_row,
                0,
                (row + 1).to_string(),
                &header,
            )?;
            for column in 0..options.columns() {
                let index = column + options.columns() * row + options.capacity() * block;
                let value = shipment
                    .get(index)
                    .map(|sample| sample.label())
                    .unwrap_or_default();
                worksheet.write_string_with_format(
                    file_row,
                    (column + 1) as u16,
                    value,
                    &cells,
                )?;
            }
        }
    }

    workbook.save(path)?;
    info!(
        "exported packing map ({} boxes) to {}",
        shipment.boxes_count(),
        path.display()
    );
    Ok(())
}
