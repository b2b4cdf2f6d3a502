//! # Label alignment against ground-truth fields
//!
//! Matches each token of a raw ingredient line to the dataset row's
//! structured fields, producing the per-token label sequence the trainer
//! learns from.

use tracing::trace;

use crate::error::{MirepoixError, Result};
use crate::parser::classify::{as_float, token_match};
use crate::parser::iob::Label;
use crate::parser::lexicon::standardize;
use crate::parser::normalize::Normalizer;
use crate::parser::tokenizer::Tokenizer;
use crate::types::DatasetRow;

/// A tokenized input line with one label slot per token.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedLine {
    /// Tokens of the normalized input line.
    pub tokens: Vec<String>,
    /// Parallel label sequence; `None` marks an unlabeled token.
    pub labels: Vec<Option<Label>>,
}

/// Aligns raw input lines against their ground-truth fields.
pub struct Aligner {
    normalizer: Normalizer,
    tokenizer: Tokenizer,
}

impl Aligner {
    /// Constructs a new `Aligner`.
    ///
    /// # Errors
    ///
    /// Returns `MirepoixError::Regex` if pattern compilation fails (should
    /// never happen with the static patterns involved).
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Label every token of the row's `input` line.
    ///
    /// Rules are evaluated in fixed priority order, first match wins:
    ///
    /// 1. token parses to the row quantity — `Quantity`;
    /// 2. token parses to the row range end — `RangeEnd`;
    /// 3. the standardized token matches a standardized unit-field token —
    ///    `Unit`;
    /// 4. the token matches a name-field token up to pluralization —
    ///    `Name`;
    /// 5. the token appears verbatim among the comment-field tokens —
    ///    `Comment`;
    /// 6. otherwise unlabeled.
    ///
    /// The order is a disambiguation policy: a token that is both the
    /// target quantity and present in the comment is always `Quantity`.
    ///
    /// # Errors
    ///
    /// Returns `MirepoixError::MissingField` when the row lacks `input` or
    /// `name`; such rows are expected to be filtered out upstream.
    pub fn align(&self, row: &DatasetRow) -> Result<AlignedLine> {
        let input = row
            .input
            .as_deref()
            .ok_or(MirepoixError::MissingField { field: "input" })?;
        let name = row
            .name
            .as_deref()
            .ok_or(MirepoixError::MissingField { field: "name" })?;

        let tokens = self.tokenizer.tokenize(&self.normalizer.normalize(input));
        let name_tokens = self.field_tokens(name);
        let unit_tokens = self.field_tokens(row.unit.as_deref().unwrap_or(""));
        let comment_tokens = self.field_tokens(row.comment.as_deref().unwrap_or(""));

        let labels = tokens
            .iter()
            .map(|token| {
                self.label_token(token, row, &name_tokens, &unit_tokens, &comment_tokens)
            })
            .collect();
        trace!(input, ?labels, "aligned line");

        Ok(AlignedLine { tokens, labels })
    }

    fn label_token(
        &self,
        token: &str,
        row: &DatasetRow,
        name_tokens: &[String],
        unit_tokens: &[String],
        comment_tokens: &[String],
    ) -> Option<Label> {
        let value = as_float(token);
        if value.is_some() && value == row.qty {
            return Some(Label::Quantity);
        }
        if value.is_some() && value == row.range_end {
            return Some(Label::RangeEnd);
        }

        let standardized = standardize(token).to_lowercase();
        if unit_tokens
            .iter()
            .any(|u| token_match(&standardized, standardize(u)))
        {
            return Some(Label::Unit);
        }

        let lowered = token.to_lowercase();
        if name_tokens.iter().any(|n| token_match(&lowered, n)) {
            return Some(Label::Name);
        }
        if comment_tokens.contains(&lowered) {
            return Some(Label::Comment);
        }

        None
    }

    /// Normalize, lowercase and tokenize a ground-truth field.
    fn field_tokens(&self, field: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(&self.normalizer.normalize(field).to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatasetRow;

    fn aligner() -> Aligner {
        Aligner::new().unwrap()
    }

    fn garlic_row() -> DatasetRow {
        DatasetRow {
            input: Some("2 tbsp of garlic, chopped".into()),
            name: Some("garlic".into()),
            qty: Some(2.0),
            range_end: Some(0.0),
            unit: Some("tbsp".into()),
            comment: Some("chopped".into()),
        }
    }

    #[test]
    fn aligns_reference_line() {
        let aligned = aligner().align(&garlic_row()).unwrap();
        assert_eq!(
            aligned.tokens,
            ["2", "tbsp", "of", "garlic", ",", "chopped"]
        );
        assert_eq!(
            aligned.labels,
            [
                Some(Label::Quantity),
                Some(Label::Unit),
                None,
                Some(Label::Name),
                None,
                Some(Label::Comment),
            ]
        );
    }

    #[test]
    fn aligns_mixed_number_quantity() {
        let row = DatasetRow {
            input: Some("1 1/2 cups flour".into()),
            name: Some("flour".into()),
            qty: Some(1.5),
            range_end: Some(0.0),
            unit: Some("cup".into()),
            comment: None,
        };
        let aligned = aligner().align(&row).unwrap();
        assert_eq!(aligned.tokens, ["1$1/2", "cups", "flour"]);
        assert_eq!(
            aligned.labels,
            [Some(Label::Quantity), Some(Label::Unit), Some(Label::Name)]
        );
    }

    #[test]
    fn unit_matches_across_abbreviation_family() {
        // Ground truth spells the unit out; the line abbreviates it.
        let row = DatasetRow {
            input: Some("2 T. butter".into()),
            name: Some("butter".into()),
            qty: Some(2.0),
            range_end: Some(0.0),
            unit: Some("tablespoon".into()),
            comment: None,
        };
        let aligned = aligner().align(&row).unwrap();
        assert_eq!(aligned.tokens, ["2", "T", ".", "butter"]);
        assert_eq!(aligned.labels[1], Some(Label::Unit));
    }

    #[test]
    fn name_matches_up_to_pluralization() {
        let row = DatasetRow {
            input: Some("3 shallots, minced".into()),
            name: Some("shallot".into()),
            qty: Some(3.0),
            range_end: Some(0.0),
            unit: None,
            comment: Some("minced".into()),
        };
        let aligned = aligner().align(&row).unwrap();
        assert_eq!(aligned.labels[1], Some(Label::Name));
        assert_eq!(aligned.labels[3], Some(Label::Comment));
    }

    #[test]
    fn quantity_outranks_comment() {
        // "2" appears in the comment text but still labels as quantity.
        let row = DatasetRow {
            input: Some("2 eggs".into()),
            name: Some("eggs".into()),
            qty: Some(2.0),
            range_end: Some(0.0),
            unit: None,
            comment: Some("2 large".into()),
        };
        let aligned = aligner().align(&row).unwrap();
        assert_eq!(aligned.labels[0], Some(Label::Quantity));
    }

    #[test]
    fn range_end_labels_second_quantity() {
        let row = DatasetRow {
            input: Some("2 - 3 cloves garlic".into()),
            name: Some("garlic".into()),
            qty: Some(2.0),
            range_end: Some(3.0),
            unit: Some("clove".into()),
            comment: None,
        };
        let aligned = aligner().align(&row).unwrap();
        assert_eq!(aligned.tokens, ["2", "-", "3", "cloves", "garlic"]);
        assert_eq!(aligned.labels[0], Some(Label::Quantity));
        assert_eq!(aligned.labels[2], Some(Label::RangeEnd));
        assert_eq!(aligned.labels[3], Some(Label::Unit));
    }

    #[test]
    fn absent_row_fields_never_match() {
        let row = DatasetRow {
            input: Some("pinch of salt".into()),
            name: Some("salt".into()),
            qty: None,
            range_end: None,
            unit: None,
            comment: None,
        };
        let aligned = aligner().align(&row).unwrap();
        // "pinch" is a unit spelling, but the row has no unit field to
        // match against; only the name rule fires.
        assert_eq!(aligned.labels, [None, None, Some(Label::Name)]);
    }

    #[test]
    fn missing_required_fields_error() {
        let mut row = garlic_row();
        row.input = None;
        assert!(matches!(
            aligner().align(&row),
            Err(MirepoixError::MissingField { field: "input" })
        ));

        let mut row = garlic_row();
        row.name = None;
        assert!(matches!(
            aligner().align(&row),
            Err(MirepoixError::MissingField { field: "name" })
        ));
    }
}
