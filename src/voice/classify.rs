//! Utterance classification.

/// Exclusive bounds on what parsed value counts as a plausible weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    pub lower: f64,
    pub upper: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.5,
        }
    }
}

impl WeightRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Strictly-inside check on both bounds.
    pub fn contains(&self, value: f64) -> bool {
        value > self.lower && value < self.upper
    }
}

/// What the session made of one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// A plausible weight reading, parsed from the normalized utterance.
    Weight(f64),
    /// Looked like a number but was malformed or out of range. Kept distinct
    /// from [`Classification::Phrase`] so the caller can report "weight not
    /// accepted" instead of treating the utterance as noise.
    Unrecognized,
    /// Anything else, normalized: matched against the command vocabulary by
    /// the caller, noise otherwise.
    Phrase(String),
}

/// Classify one utterance against the weight range.
///
/// Dictated weights arrive as digits separated by spaces ("one five" for
/// 1.5), so normalization turns the first space into the decimal separator
/// and strips the rest.
pub fn classify(utterance: &str, range: WeightRange) -> Classification {
    let normalized = normalize(utterance);
    if let Ok(value) = normalized.parse::<f64>() {
        if range.contains(value) {
            return Classification::Weight(value);
        }
    }
    if normalized.contains('.') {
        return Classification::Unrecognized;
    }
    Classification::Phrase(normalized)
}

fn normalize(utterance: &str) -> String {
    utterance.replacen(' ', ".", 1).replace(' ', "")
}
