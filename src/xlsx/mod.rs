//! Spreadsheet import and export.
//!
//! The sample list comes in as the first worksheet of an `.xls`/`.xlsx`
//! file whose header row is matched against the configured column
//! identifiers. Going out, the flat list can be re-exported (autosave) and
//! the packing map is written as one tabular block per box.

mod export;
mod import;

pub use export::{export_list, export_map, ExportError};
pub use import::{import_list, ImportError};
