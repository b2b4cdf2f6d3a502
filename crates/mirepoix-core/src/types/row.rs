use serde::{Deserialize, Serialize};

/// One row of the labeled ingredient dataset.
///
/// Mirrors the CSV schema:
///
/// ```text
/// input,                        name,     qty, range_end, unit,   comment
/// "2 tbsp of garlic, chopped",  "garlic", 2.0, 0.0,       "tbsp", "chopped"
/// ```
///
/// Every field is optional at the parsing layer; rows without `input` or
/// `name` cannot be aligned and are dropped before training.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetRow {
    /// The raw ingredient line.
    pub input: Option<String>,
    /// Ground-truth ingredient name.
    pub name: Option<String>,
    /// Ground-truth quantity.
    pub qty: Option<f64>,
    /// Upper end of a quantity range; the dataset uses 0 for "no range".
    pub range_end: Option<f64>,
    /// Ground-truth unit string.
    pub unit: Option<String>,
    /// Ground-truth free-text comment.
    pub comment: Option<String>,
}

impl DatasetRow {
    /// Whether the row carries the fields alignment requires.
    #[must_use]
    pub fn is_trainable(&self) -> bool {
        self.input.is_some() && self.name.is_some()
    }
}
