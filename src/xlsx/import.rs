//! Sample-list import.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::info;

use crate::config::ColumnIdentifiers;
use crate::domain::Sample;

/// Import failure. The registry is never touched on failure: import builds
/// a complete list or nothing.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to open spreadsheet: {0}")]
    Open(#[from] calamine::Error),
    #[error("the workbook has no sheets")]
    NoSheet,
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("the sheet has no data rows")]
    NoData,
}

/// Read the first worksheet of `path` into samples.
///
/// The first row is the header; its cells are matched exactly against the
/// identifiers. Storage, rack, box, row, column and code are required,
/// weight is optional. A sample arriving with a weight is considered
/// already packed.
pub fn import_list(path: &Path, identifiers: &ColumnIdentifiers) -> Result<Vec<Sample>, ImportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheet)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(ImportError::NoData)?;
    let find = |name: &str| header.iter().position(|cell| cell_text(cell) == name);

    let mut missing = Vec::new();
    let mut require = |name: &str| {
        let found = find(name);
        if found.is_none() {
            missing.push(name.to_string());
        }
        found
    };
    let col_storage = require(&identifiers.storage);
    let col_rack = require(&identifiers.rack);
    let col_box = require(&identifiers.box_);
    let col_row = require(&identifiers.row);
    let col_column = require(&identifiers.column);
    let col_code = require(&identifiers.code);
    let col_weight = find(&identifiers.weight);
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    let field = |row: &[Data], col: Option<usize>| {
        col.and_then(|c| row.get(c)).map(cell_text).unwrap_or_default()
    };

    let mut samples = Vec::new();
    for row in rows {
        let code = field(row, col_code);
        if code.is_empty() {
            continue;
        }
        let mut sample = Sample::new(
            code,
            field(row, col_storage),
            field(row, col_rack),
            field(row, col_box),
            field(row, col_row),
            field(row, col_column),
        );
        let weight = field(row, col_weight);
        if !weight.is_empty() {
            sample.set_weight(weight);
            sample.set_packed(true);
        }
        samples.push(sample);
    }
    if samples.is_empty() {
        return Err(ImportError::NoData);
    }

    info!("imported {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Text of one cell. Spreadsheets store bare numbers as floats; a whole
/// number is rendered integer-style so a rack stored as `3.0` reads back as
/// `"3"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
