//! # Text normalization for ingredient lines
//!
//! Cleans a raw ingredient line into a canonical plaintext form before
//! tokenization: markup stripped, unicode fraction glyphs expanded, mixed
//! numbers fused into a single `whole$num/den` token, quantity/unit clumps
//! split and whitespace collapsed.

use regex::Regex;

use crate::error::Result;
use crate::parser::lexicon;

/// Normalizer for raw ingredient text.
///
/// Normalization never fails and is idempotent: feeding its own output back
/// in returns the same string. Empty or whitespace-only input yields the
/// empty string.
pub struct Normalizer {
    re_markup: Regex,
    re_mixed_number: Regex,
    re_digit_letter: Regex,
    re_loose_slash: Regex,
    re_spaces: Regex,
}

impl Normalizer {
    /// Constructs a new `Normalizer` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `MirepoixError::Regex` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_markup: Regex::new(r"<[^<]+?>")?,
            re_mixed_number: Regex::new(r"(\d+)\s+(\d)/(\d)")?,
            re_digit_letter: Regex::new(r"(\d+)([a-zA-Z])")?,
            re_loose_slash: Regex::new(r"([^0-9\s])/")?,
            re_spaces: Regex::new(r"\s+")?,
        })
    }

    /// Normalize one line of raw ingredient text.
    ///
    /// Steps, in fixed order: strip `<...>` markup, expand unicode fraction
    /// glyphs, fuse mixed numbers (`1 1/2` becomes `1$1/2`), split digit
    /// runs from a following letter (`2tbsp` becomes `2 tbsp`), space out
    /// `/` after a non-digit (`fl/oz` becomes `fl / oz`), collapse
    /// whitespace and trim.
    ///
    /// # Examples
    /// ```
    /// use mirepoix_core::parser::Normalizer;
    ///
    /// let normalizer = Normalizer::new().unwrap();
    /// assert_eq!(normalizer.normalize("1\u{00bd} cups flour"), "1$1/2 cups flour");
    /// assert_eq!(normalizer.normalize("2tbsp olive oil"), "2 tbsp olive oil");
    /// ```
    pub fn normalize(&self, line: &str) -> String {
        let stripped = self.re_markup.replace_all(line, "");
        let expanded = self.expand_glyphs(&stripped);
        let fused = self
            .re_mixed_number
            .replace_all(&expanded, "${1}$$${2}/${3}");
        let split = self.re_digit_letter.replace_all(&fused, "$1 $2");
        let slashed = self.re_loose_slash.replace_all(&split, "$1 / ");
        self.re_spaces
            .replace_all(&slashed, " ")
            .trim()
            .to_string()
    }

    /// Sequence form of [`normalize`](Self::normalize): maps the
    /// single-line operation over a slice of lines.
    pub fn normalize_all<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        lines.iter().map(|l| self.normalize(l.as_ref())).collect()
    }

    /// Replace every unicode digit/fraction glyph with its plaintext form.
    ///
    /// A glyph directly following an ASCII digit gets a separating space so
    /// `1½` reads `1 1/2` rather than `11/2`.
    fn expand_glyphs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        for c in text.chars() {
            match lexicon::glyph_to_plain(c) {
                Some(plain) => {
                    if prev.is_some_and(|p| p.is_ascii_digit()) {
                        out.push(' ');
                    }
                    out.push_str(plain);
                }
                None => out.push(c),
            }
            prev = Some(c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn empty_and_whitespace_input() {
        let n = normalizer();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \t "), "");
    }

    #[test]
    fn strips_markup() {
        let n = normalizer();
        assert_eq!(n.normalize("<b>2 cups</b> flour"), "2 cups flour");
        assert_eq!(n.normalize("2 cups <a href=x>flour"), "2 cups flour");
    }

    #[test]
    fn glyph_expansion_spaces_after_digit() {
        let n = normalizer();
        assert_eq!(n.expand_glyphs("1½ cups"), "1 1/2 cups");
        assert_eq!(n.expand_glyphs("½ cup"), "1/2 cup");
        assert_eq!(n.expand_glyphs("add ½"), "add 1/2");
    }

    #[test]
    fn mixed_numbers_fuse_into_one_token() {
        let n = normalizer();
        assert_eq!(n.normalize("1 1/2 cups flour"), "1$1/2 cups flour");
        assert_eq!(n.normalize("1½ cups flour"), "1$1/2 cups flour");
        // A bare fraction has no whole part to fuse with.
        assert_eq!(n.normalize("1/2 cup sugar"), "1/2 cup sugar");
    }

    #[test]
    fn splits_quantity_unit_clumps() {
        let n = normalizer();
        assert_eq!(n.normalize("2tbsp garlic"), "2 tbsp garlic");
        assert_eq!(n.normalize("350g beef"), "350 g beef");
    }

    #[test]
    fn spaces_non_numeric_slash() {
        let n = normalizer();
        assert_eq!(n.normalize("3 fl/oz milk"), "3 fl / oz milk");
        // Numeric fractions are untouched.
        assert_eq!(n.normalize("1/4 tsp salt"), "1/4 tsp salt");
    }

    #[test]
    fn collapses_whitespace() {
        let n = normalizer();
        assert_eq!(n.normalize("  2   cups\tflour "), "2 cups flour");
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = normalizer();
        for line in [
            "2 tbsp of garlic, chopped",
            "1½ cups flour",
            "1 1/2 cups flour",
            "<i>3</i> fl/oz milk",
            "2tbsp butter",
            "",
        ] {
            let once = n.normalize(line);
            assert_eq!(n.normalize(&once), once, "not idempotent for {line:?}");
        }
    }

    #[test]
    fn normalize_all_maps_each_line() {
        let n = normalizer();
        let out = n.normalize_all(&["2tbsp butter", "1½ cups flour"]);
        assert_eq!(out, ["2 tbsp butter", "1$1/2 cups flour"]);
    }
}
