//! Quantity recognition and the pluralization-aware token matcher.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::lexicon;

static RE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(\.\d+)?$").expect("valid decimal regex"));

static RE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\$)?(\d+)/(\d+)$").expect("valid fraction regex"));

/// Check whether a token is numeric: a plain integer/decimal (`2`, `2.5`)
/// or a fused fraction (`1/2`, `1$1/2`). Full-token, non-negative only.
pub fn is_quantity(token: &str) -> bool {
    RE_DECIMAL.is_match(token) || RE_FRACTION.is_match(token)
}

/// Parse a quantity token into a numeric value rounded to two decimal
/// places, rounding half up (`1/8` is 0.13, not 0.12).
///
/// Returns `None` for anything that is not a quantity token.
pub fn as_float(token: &str) -> Option<f64> {
    if let Some(caps) = RE_DECIMAL.captures(token) {
        let value: f64 = caps[0].parse().ok()?;
        return Some(round_half_up(value));
    }

    if let Some(caps) = RE_FRACTION.captures(token) {
        let whole: f64 = match caps.get(1) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0.0,
        };
        let numerator: f64 = caps[2].parse().ok()?;
        let denominator: f64 = caps[3].parse().ok()?;
        return Some(round_half_up(whole + numerator / denominator));
    }

    None
}

/// Round to two decimal places, always rounding a half up.
fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Check whether two tokens denote the same word up to naive
/// pluralization.
///
/// Exact equality matches. Otherwise a non-stopword, non-symbol token
/// contained in an `s`-final counterpart matches (`shallot` vs
/// `shallots`), in either direction. This is a heuristic, not
/// lemmatization: any substring of an `s`-final token is accepted.
pub fn token_match(x: &str, y: &str) -> bool {
    if x.is_empty() || y.is_empty() {
        return false;
    }
    if x == y {
        return true;
    }

    if !lexicon::is_stopword(x) && !lexicon::is_symbol(x) && y.ends_with('s') && y.contains(x) {
        return true;
    }
    if !lexicon::is_stopword(y) && !lexicon::is_symbol(y) && x.ends_with('s') && x.contains(y) {
        return true;
    }

    false
}
