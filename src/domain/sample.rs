//! The sample record.

use serde::{Deserialize, Serialize};

/// One physical specimen awaiting packing.
///
/// The identifying `code` and the five location fields describe where the
/// sample resides before packing and never change after creation. The weight
/// stays empty until the operator records it; `packed` tracks whether the
/// sample has been physically placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    code: String,
    #[serde(default)]
    weight: String,
    #[serde(default)]
    packed: bool,
    storage: String,
    rack: String,
    #[serde(rename = "box")]
    box_: String,
    row: String,
    column: String,
}

impl Sample {
    pub fn new(
        code: impl Into<String>,
        storage: impl Into<String>,
        rack: impl Into<String>,
        box_: impl Into<String>,
        row: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            weight: String::new(),
            packed: false,
            storage: storage.into(),
            rack: rack.into(),
            box_: box_.into(),
            row: row.into(),
            column: column.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn packed(&self) -> bool {
        self.packed
    }

    pub fn set_packed(&mut self, packed: bool) {
        self.packed = packed;
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn rack(&self) -> &str {
        &self.rack
    }

    pub fn box_(&self) -> &str {
        &self.box_
    }

    pub fn row(&self) -> &str {
        &self.row
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Pre-packing location as `storage.rack.box.row.column`.
    pub fn location(&self) -> String {
        format!(
            "{}.{}.{}.{}.{}",
            self.storage, self.rack, self.box_, self.row, self.column
        )
    }

    /// Display label for a grid cell: the code alone until the sample is
    /// packed, then the code with its recorded weight.
    pub fn label(&self) -> String {
        if self.packed {
            format!("{} {}", self.code, self.weight)
        } else {
            self.code.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_includes_weight_once_packed() {
        let mut sample = Sample::new("AB-12", "1", "2", "3", "4", "5");
        assert_eq!(sample.label(), "AB-12");

        sample.set_weight("0.8");
        sample.set_packed(true);
        assert_eq!(sample.label(), "AB-12 0.8");
    }

    #[test]
    fn test_location_is_dot_separated() {
        let sample = Sample::new("X", "st", "r", "b", "2", "7");
        assert_eq!(sample.location(), "st.r.b.2.7");
    }
}
