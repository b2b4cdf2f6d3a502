//! # Semantic labels and the IOB tagging scheme
//!
//! Defines the closed label set for ingredient-line tokens and the
//! conversion between flat label sequences and Begin/Inside/Outside tags
//! consumed by the sequence model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MirepoixError, Result};

/// Semantic label for a single token. A token with no label is represented
/// as `None` in an `Option<Label>` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The quantity value (`2`, `1$1/2`).
    Quantity,
    /// The upper end of a quantity range (`2 - 3`).
    RangeEnd,
    /// A unit of measure (`tbsp`, `cups`).
    Unit,
    /// Part of the ingredient name.
    Name,
    /// Part of the free-text comment (`chopped`).
    Comment,
}

impl Label {
    /// Wire name used inside IOB tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Quantity => "QTY",
            Label::RangeEnd => "QTY-UR",
            Label::Unit => "UNIT",
            Label::Name => "INGR",
            Label::Comment => "CMNT",
        }
    }

    /// Parse a wire name back into a label.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "QTY" => Some(Label::Quantity),
            "QTY-UR" => Some(Label::RangeEnd),
            "UNIT" => Some(Label::Unit),
            "INGR" => Some(Label::Name),
            "CMNT" => Some(Label::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a flat label sequence into IOB tags.
///
/// `None` emits `O`; a labeled token emits `B-<label>` when it starts a
/// span (first position, or a different label than its predecessor) and
/// `I-<label>` otherwise. Two same-label spans separated by a `None`
/// token each begin with `B-`.
pub fn iob_tag(labels: &[Option<Label>]) -> Vec<String> {
    let mut tags = Vec::with_capacity(labels.len());

    for (i, label) in labels.iter().enumerate() {
        let tag = match label {
            None => "O".to_string(),
            Some(l) if i == 0 || labels[i - 1] != Some(*l) => format!("B-{l}"),
            Some(l) => format!("I-{l}"),
        };
        tags.push(tag);
    }

    tags
}

/// Strip IOB tags back into a flat label sequence.
///
/// `O` becomes `None`; `B-`/`I-` prefixed tags become their label. Any
/// other tag value — an unknown prefix or an unknown label name — only
/// arises from a misbehaving model and is a hard decode error.
pub fn remove_iob<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Option<Label>>> {
    let mut labels = Vec::with_capacity(tags.len());

    for tag in tags {
        let tag = tag.as_ref();
        if tag == "O" {
            labels.push(None);
            continue;
        }

        let label = tag
            .strip_prefix("B-")
            .or_else(|| tag.strip_prefix("I-"))
            .and_then(Label::parse)
            .ok_or_else(|| MirepoixError::MalformedTag {
                tag: tag.to_string(),
            })?;
        labels.push(Some(label));
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_round_trip() {
        for label in [
            Label::Quantity,
            Label::RangeEnd,
            Label::Unit,
            Label::Name,
            Label::Comment,
        ] {
            assert_eq!(Label::parse(label.as_str()), Some(label));
        }
        assert_eq!(Label::parse("BOGUS"), None);
    }

    #[test]
    fn tagging_marks_span_starts() {
        let labels = [
            None,
            Some(Label::Quantity),
            Some(Label::Quantity),
            Some(Label::Unit),
        ];
        assert_eq!(iob_tag(&labels), ["O", "B-QTY", "I-QTY", "B-UNIT"]);
    }

    #[test]
    fn same_label_across_gap_restarts_span() {
        let labels = [Some(Label::Name), None, Some(Label::Name)];
        assert_eq!(iob_tag(&labels), ["B-INGR", "O", "B-INGR"]);
    }

    #[test]
    fn first_position_is_begin() {
        assert_eq!(iob_tag(&[Some(Label::Comment)]), ["B-CMNT"]);
        assert!(iob_tag(&[]).is_empty());
    }

    #[test]
    fn remove_iob_inverts_tagging() {
        let labels = vec![
            Some(Label::Quantity),
            Some(Label::Unit),
            None,
            Some(Label::Name),
            None,
            Some(Label::Comment),
            Some(Label::Comment),
        ];
        let tags = iob_tag(&labels);
        assert_eq!(remove_iob(&tags).unwrap(), labels);
    }

    #[test]
    fn remove_iob_rejects_malformed_tags() {
        assert!(matches!(
            remove_iob(&["X-QTY"]),
            Err(MirepoixError::MalformedTag { .. })
        ));
        assert!(matches!(
            remove_iob(&["B-BOGUS"]),
            Err(MirepoixError::MalformedTag { .. })
        ));
        assert!(matches!(
            remove_iob(&[""]),
            Err(MirepoixError::MalformedTag { .. })
        ));
    }
}
