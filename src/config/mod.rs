//! Settings: box geometry, weight range, spreadsheet column identifiers.
//!
//! Stored as TOML. Every key has a default; a missing or unparsable file
//! falls back to the defaults with a warning instead of failing startup.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::BoxOptions;
use crate::voice::WeightRange;

/// Default configuration content for `samplepack init`.
pub const DEFAULT_CONFIG: &str = r#"# Samplepack configuration
# ========================

# Box geometry: samples are packed into rows x columns boxes; `separator`
# blank rows are drawn between boxes in the packing map.
[box]
rows = 9
columns = 9
separator = 2

# Bounds (exclusive) on what spoken number is accepted as a weight.
[voice]
lower_bound = 0.0
upper_bound = 1.5

# Header names matched (exactly) against the first row of an imported
# sample list. All but `weight` are required in the file.
[import]
storage = "Storage"
rack = "Rack"
box = "Box"
row = "Row"
column = "Column"
code = "Code"
weight = "Weight"
"#;

/// Box geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxSettings {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_separator")]
    pub separator: usize,
}

/// Weight plausibility bounds for voice input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
}

/// Column-name identifiers matched against a sample list's header row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnIdentifiers {
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_rack")]
    pub rack: String,
    #[serde(default = "default_box", rename = "box")]
    pub box_: String,
    #[serde(default = "default_row")]
    pub row: String,
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default = "default_code")]
    pub code: String,
    #[serde(default = "default_weight")]
    pub weight: String,
}

/// All settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default, rename = "box")]
    pub box_: BoxSettings,
    #[serde(default)]
    pub voice: VoiceSettings,
    #[serde(default)]
    pub import: ColumnIdentifiers,
}

fn default_rows() -> usize {
    9
}

fn default_columns() -> usize {
    9
}

fn default_separator() -> usize {
    2
}

fn default_lower_bound() -> f64 {
    0.0
}

fn default_upper_bound() -> f64 {
    1.5
}

fn default_storage() -> String {
    "Storage".to_string()
}

fn default_rack() -> String {
    "Rack".to_string()
}

fn default_box() -> String {
    "Box".to_string()
}

fn default_row() -> String {
    "Row".to_string()
}

fn default_column() -> String {
    "Column".to_string()
}

fn default_code() -> String {
    "Code".to_string()
}

fn default_weight() -> String {
    "Weight".to_string()
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            separator: default_separator(),
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl Default for ColumnIdentifiers {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            rack: default_rack(),
            box_: default_box(),
            row: default_row(),
            column: default_column(),
            code: default_code(),
            weight: default_weight(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. Any read or parse failure logs a warning
    /// and yields the defaults; configuration problems never stop startup.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Could not read config file {}: {}; using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "Could not parse config file {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write the commented default config to `path`.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        std::fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Box geometry with the clamping the geometry layer applies.
    pub fn box_options(&self) -> BoxOptions {
        BoxOptions::new(self.box_.rows, self.box_.columns, self.box_.separator)
    }

    pub fn weight_range(&self) -> WeightRange {
        WeightRange::new(self.voice.lower_bound, self.voice.upper_bound)
    }
}
