//! # Tokenizer / Detokenizer for normalized ingredient lines
//!
//! Splits a normalized line into a flat token sequence, treating
//! punctuation as standalone tokens. The paired detokenizer approximately
//! inverts the split back into a human-readable string, re-prettifying
//! mixed fractions into unicode glyphs along the way.

use regex::Regex;

use crate::error::Result;
use crate::parser::lexicon;

/// Closing punctuation binds left onto the preceding piece when rejoining.
const CLOSERS: &[&str] = &[".", ",", ":", ";", "!", "]", ")"];

/// Tokenizer for normalized ingredient text.
pub struct Tokenizer {
    re_punct: Regex,
    re_abbrev_dot: Regex,
    re_spaces: Regex,
    re_mixed_number: Regex,
}

impl Tokenizer {
    /// Constructs a new `Tokenizer` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `MirepoixError::Regex` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_punct: Regex::new(r"([\[\](),!:;])")?,
            re_abbrev_dot: Regex::new(r"([a-zA-Z])\.")?,
            re_spaces: Regex::new(r"\s+")?,
            re_mixed_number: Regex::new(r"^(\d+)\$(\d+)/(\d+)$")?,
        })
    }

    /// Split a normalized line into an ordered sequence of non-empty
    /// tokens. Brackets, commas and other listed punctuation become their
    /// own tokens; a `.` trailing a letter is split off so abbreviation
    /// periods stand alone.
    ///
    /// # Examples
    /// ```
    /// use mirepoix_core::parser::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("2 tbsp of garlic, chopped");
    /// assert_eq!(tokens, ["2", "tbsp", "of", "garlic", ",", "chopped"]);
    /// ```
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let padded = self.re_punct.replace_all(line, " $1 ");
        let padded = self.re_abbrev_dot.replace_all(&padded, "$1 .");
        self.re_spaces
            .replace_all(&padded, " ")
            .trim()
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Approximately invert [`tokenize`](Self::tokenize) into a readable
    /// string.
    ///
    /// Mixed-number tokens `whole$num/den` emit the whole part followed by
    /// the unicode glyph for `num/den` when one exists (plaintext
    /// otherwise). Closing punctuation attaches to the previous piece, and
    /// a piece placed right after a lone `(` or `[` is pulled into it. The
    /// round trip is lossy for whitespace style and non-glyph fractions.
    pub fn detokenize<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut pieces: Vec<String> = Vec::new();

        for raw in tokens {
            let token = raw.as_ref();

            if let Some(caps) = self.re_mixed_number.captures(token) {
                pieces.push(caps[1].to_string());
                let fraction = format!("{}/{}", &caps[2], &caps[3]);
                match lexicon::plain_to_glyph(&fraction) {
                    Some(glyph) => pieces.push(glyph.to_string()),
                    None => pieces.push(fraction),
                }
            } else if CLOSERS.contains(&token) {
                match pieces.last_mut() {
                    Some(last) => last.push_str(token),
                    None => pieces.push(token.to_string()),
                }
            } else {
                pieces.push(token.to_string());
            }

            // An opening bracket absorbs its first contained piece.
            if pieces.len() > 1 {
                let before = pieces.len() - 2;
                if pieces[before] == "(" || pieces[before] == "[" {
                    let merged = pieces.remove(before + 1);
                    pieces[before].push_str(&merged);
                }
            }
        }

        pieces.join(" ")
    }
}
