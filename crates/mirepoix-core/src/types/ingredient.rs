use serde::{Deserialize, Serialize};

/// The structured record reconstructed from a tagged ingredient line.
///
/// Produced by the inverse pipeline: predicted tags are stripped of their
/// IOB prefixes, tokens are grouped per label, and each group is rejoined
/// into readable text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Numeric quantity, when a quantity token was found.
    pub quantity: Option<f64>,
    /// Upper end of a quantity range.
    pub range_end: Option<f64>,
    /// Unit text as written (rejoined, not standardized).
    pub unit: Option<String>,
    /// Ingredient name.
    pub name: Option<String>,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl ParsedIngredient {
    /// Returns `true` if no field was reconstructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.range_end.is_none()
            && self.unit.is_none()
            && self.name.is_none()
            && self.comment.is_none()
    }
}

impl std::fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedIngredient(")?;
        let mut sep = "";
        if let Some(qty) = self.quantity {
            write!(f, "qty={qty}")?;
            sep = ", ";
        }
        if let Some(end) = self.range_end {
            write!(f, "{sep}range_end={end}")?;
            sep = ", ";
        }
        if let Some(ref unit) = self.unit {
            write!(f, "{sep}unit={unit:?}")?;
            sep = ", ";
        }
        if let Some(ref name) = self.name {
            write!(f, "{sep}name={name:?}")?;
            sep = ", ";
        }
        if let Some(ref comment) = self.comment {
            write!(f, "{sep}comment={comment:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let parsed = ParsedIngredient::default();
        assert!(parsed.is_empty());
        assert_eq!(parsed.to_string(), "ParsedIngredient()");
    }

    #[test]
    fn display_lists_present_fields() {
        let parsed = ParsedIngredient {
            quantity: Some(2.0),
            range_end: None,
            unit: Some("tbsp".into()),
            name: Some("garlic".into()),
            comment: Some("chopped".into()),
        };
        let display = parsed.to_string();
        assert!(display.contains("qty=2"));
        assert!(display.contains("\"garlic\""));
        assert!(!display.contains("range_end"));
    }

    #[test]
    fn serialization_round_trip() {
        let parsed = ParsedIngredient {
            quantity: Some(1.5),
            range_end: Some(2.0),
            unit: Some("cup".into()),
            name: Some("flour".into()),
            comment: None,
        };
        let json = serde_json::to_string(&parsed).unwrap();
        let back: ParsedIngredient = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, back);
    }
}
