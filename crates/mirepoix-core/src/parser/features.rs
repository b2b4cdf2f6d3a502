//! # Per-token feature extraction
//!
//! Builds the feature vector the sequence model consumes: token identity,
//! casing, numeric/unit/symbol classification, parenthetical and
//! comma-context flags, plus the same classification features for the
//! immediate neighbors. Boundary tokens carry a sentinel in place of the
//! missing neighbor.

use serde::{Deserialize, Serialize};

use crate::parser::classify::is_quantity;
use crate::parser::lexicon::{is_symbol, is_unit};

/// Classification features for a neighboring token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborFeatures {
    /// Lower-cased token text.
    pub token: String,
    /// Token is title-cased.
    pub capitalized: bool,
    /// Token is a quantity.
    pub numeric: bool,
    /// Token is a recognized unit spelling.
    pub standard_unit: bool,
    /// Token is a single symbol character.
    pub symbol: bool,
}

/// Feature vector for one token, with a one-token look-behind/look-ahead
/// window. `None` neighbors mark the line start/end boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFeatures {
    /// Lower-cased token text.
    pub token: String,
    /// Token is title-cased.
    pub capitalized: bool,
    /// Token sits inside an open parenthetical.
    pub parenthetical: bool,
    /// Token is a quantity.
    pub numeric: bool,
    /// Token is a recognized unit spelling.
    pub standard_unit: bool,
    /// Token is a single symbol character.
    pub symbol: bool,
    /// An odd number of top-level commas precede this token.
    pub follows_comma: bool,
    /// Features of the previous token; `None` on the first token.
    pub prev: Option<NeighborFeatures>,
    /// Features of the next token; `None` on the last token.
    pub next: Option<NeighborFeatures>,
}

/// Extract one [`TokenFeatures`] per token.
///
/// The parenthetical flag is a depth-1 boolean: `(` raises it for the
/// tokens that follow, `)` clears it before the closing token is emitted,
/// and a nested `(` does not deepen it. Each top-level `,` toggles the
/// comma flag for the tokens after it.
pub fn extract_features<S: AsRef<str>>(tokens: &[S]) -> Vec<TokenFeatures> {
    let mut features = Vec::with_capacity(tokens.len());
    let mut follows_comma = false;
    let mut parenthetical = false;

    for (i, raw) in tokens.iter().enumerate() {
        let token = raw.as_ref();
        if token == ")" {
            parenthetical = false;
        }

        let prev = i
            .checked_sub(1)
            .map(|p| neighbor_features(tokens[p].as_ref()));
        let next = tokens.get(i + 1).map(|n| neighbor_features(n.as_ref()));

        features.push(TokenFeatures {
            token: token.to_lowercase(),
            capitalized: is_titlecase(token),
            parenthetical,
            numeric: is_quantity(token),
            standard_unit: is_unit(token),
            symbol: is_symbol(token),
            follows_comma,
            prev,
            next,
        });

        if !parenthetical && token == "," {
            follows_comma = !follows_comma;
        }
        if token == "(" {
            parenthetical = true;
        }
    }

    features
}

fn neighbor_features(token: &str) -> NeighborFeatures {
    NeighborFeatures {
        token: token.to_lowercase(),
        capitalized: is_titlecase(token),
        numeric: is_quantity(token),
        standard_unit: is_unit(token),
        symbol: is_symbol(token),
    }
}

/// Title-case check: uppercase letters only start cased runs, lowercase
/// letters only continue them, and at least one cased letter is present.
fn is_titlecase(token: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;

    for c in token.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            has_cased = true;
            prev_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }

    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &[&str]) -> Vec<String> {
        line.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn titlecase_check() {
        assert!(is_titlecase("Garlic"));
        assert!(!is_titlecase("garlic"));
        assert!(!is_titlecase("GARLIC"));
        assert!(!is_titlecase("2"));
        assert!(!is_titlecase(""));
    }

    #[test]
    fn boundary_tokens_have_sentinel_neighbors() {
        let f = extract_features(&tokens(&["2", "tbsp", "garlic"]));
        assert!(f[0].prev.is_none());
        assert!(f[0].next.is_some());
        assert!(f[2].prev.is_some());
        assert!(f[2].next.is_none());
    }

    #[test]
    fn classification_features() {
        let f = extract_features(&tokens(&["2", "Tbsp", "of", "Garlic", ","]));
        assert!(f[0].numeric);
        assert!(!f[0].capitalized);
        assert!(f[1].standard_unit);
        assert!(f[1].capitalized);
        assert_eq!(f[1].token, "tbsp");
        assert!(f[4].symbol);

        let prev = f[1].prev.as_ref().unwrap();
        assert_eq!(prev.token, "2");
        assert!(prev.numeric);
        let next = f[1].next.as_ref().unwrap();
        assert_eq!(next.token, "of");
        assert!(!next.standard_unit);
    }

    #[test]
    fn parenthetical_flag_covers_interior_only() {
        let f = extract_features(&tokens(&["1", "can", "(", "15", "oz", ")", "beans"]));
        assert!(!f[2].parenthetical, "the `(` itself is outside");
        assert!(f[3].parenthetical);
        assert!(f[4].parenthetical);
        assert!(!f[5].parenthetical, "the `)` is emitted already cleared");
        assert!(!f[6].parenthetical);
    }

    #[test]
    fn nested_paren_does_not_deepen() {
        let f = extract_features(&tokens(&["(", "a", "(", "b", ")", "c"]));
        // The second `(` is inside and changes nothing; the single `)`
        // closes everything.
        assert!(f[1].parenthetical);
        assert!(f[3].parenthetical);
        assert!(!f[4].parenthetical);
        assert!(!f[5].parenthetical);
    }

    #[test]
    fn commas_toggle_follows_comma() {
        let f = extract_features(&tokens(&["garlic", ",", "chopped", ",", "peeled"]));
        assert!(!f[0].follows_comma);
        assert!(!f[1].follows_comma, "the comma itself keeps the old state");
        assert!(f[2].follows_comma);
        assert!(!f[4].follows_comma, "a second comma toggles back");
    }

    #[test]
    fn parenthesized_commas_do_not_toggle() {
        let f = extract_features(&tokens(&["(", "a", ",", "b", ")", "c"]));
        assert!(!f[5].follows_comma);
    }

    #[test]
    fn empty_sequence() {
        assert!(extract_features(&tokens(&[])).is_empty());
    }
}
