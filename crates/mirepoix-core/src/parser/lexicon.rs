//! Static lookup tables for units, stopwords, symbols and fractions.
//!
//! All tables are process-wide, initialized once and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Every recognized unit spelling mapped to its canonical singular form.
const UNIT_FORMS: &[(&str, &str)] = &[
    ("T", "tablespoon"),
    ("T.", "tablespoon"),
    ("tbsp", "tablespoon"),
    ("tbsp.", "tablespoon"),
    ("Tbsp", "tablespoon"),
    ("Tbsp.", "tablespoon"),
    ("tablespoon", "tablespoon"),
    ("tablespoons", "tablespoon"),
    ("t", "teaspoon"),
    ("t.", "teaspoon"),
    ("tsp", "teaspoon"),
    ("tsp.", "teaspoon"),
    ("teaspoon", "teaspoon"),
    ("teaspoons", "teaspoon"),
    ("cup", "cup"),
    ("c", "cup"),
    ("C", "cup"),
    ("c.", "cup"),
    ("C.", "cup"),
    ("cups", "cup"),
    ("Cup", "cup"),
    ("Cups", "cup"),
    ("fl", "fluid"),
    ("fluid", "fluid"),
    ("fl oz", "fluid ounce"),
    ("fl.oz.", "fluid ounce"),
    ("fl.oz", "fluid ounce"),
    ("fluid ounce", "fluid ounce"),
    ("qt", "quart"),
    ("qt.", "quart"),
    ("quart", "quart"),
    ("quarts", "quart"),
    ("gal", "gallon"),
    ("gallon", "gallon"),
    ("gallons", "gallon"),
    ("ml", "milliliter"),
    ("mL", "milliliter"),
    ("milliliter", "milliliter"),
    ("milliliters", "milliliter"),
    ("millilitre", "milliliter"),
    ("millilitres", "milliliter"),
    ("l", "liter"),
    ("L", "liter"),
    ("liter", "liter"),
    ("liters", "liter"),
    ("litre", "liter"),
    ("litres", "liter"),
    ("g", "gram"),
    ("g.", "gram"),
    ("gram", "gram"),
    ("grams", "gram"),
    ("mg", "milligram"),
    ("milligram", "milligram"),
    ("milligrams", "milligram"),
    ("k", "kilogram"),
    ("kg", "kilogram"),
    ("kilogram", "kilogram"),
    ("kilograms", "kilogram"),
    ("oz", "ounce"),
    ("oz.", "ounce"),
    ("ounce", "ounce"),
    ("ounces", "ounce"),
    ("lb", "pound"),
    ("lbs", "pound"),
    ("lb.", "pound"),
    ("lbs.", "pound"),
    ("pound", "pound"),
    ("pounds", "pound"),
    ("in", "inch"),
    ("in.", "inch"),
    ("inch", "inch"),
    ("inches", "inch"),
    ("cm", "centimeter"),
    ("centimeter", "centimeter"),
    ("centimeters", "centimeter"),
    ("clove", "clove"),
    ("slice", "slice"),
    ("piece", "piece"),
    ("fillet", "fillet"),
    ("sprig", "sprig"),
    ("stick", "stick"),
    ("leave", "leaf"),
    ("package", "package"),
    ("can", "can"),
    ("bottle", "bottle"),
    ("handful", "handful"),
    ("dash", "dash"),
    ("pinch", "pinch"),
    ("cloves", "clove"),
    ("slices", "slice"),
    ("pieces", "piece"),
    ("fillets", "fillet"),
    ("sprigs", "sprig"),
    ("sticks", "stick"),
    ("leaves", "leaf"),
    ("packages", "package"),
    ("cans", "can"),
    ("bottles", "bottle"),
    ("handfuls", "handful"),
    ("dashes", "dash"),
    ("pinches", "pinch"),
];

/// Unicode digit/fraction/exponent glyphs and their plaintext expansions.
const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅐', "1/7"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
    ('⅑', "1/9"),
    ('⅒', "1/10"),
    ('¹', "1"),
    ('²', "2"),
    ('³', "3"),
    ('⁴', "4"),
    ('⁵', "5"),
    ('⁶', "6"),
    ('⁷', "7"),
    ('⁸', "8"),
    ('⁹', "9"),
    ('⁄', "/"),
    ('₁', "1"),
    ('₂', "2"),
    ('₃', "3"),
    ('₄', "4"),
    ('₅', "5"),
    ('₆', "6"),
    ('₇', "7"),
    ('₈', "8"),
    ('₉', "9"),
];

/// The common fractions that detokenization renders back as single glyphs.
const COMMON_FRACTIONS: &[(&str, char)] = &[
    ("1/2", '½'),
    ("1/3", '⅓'),
    ("2/3", '⅔'),
    ("1/4", '¼'),
    ("3/4", '¾'),
    ("1/5", '⅕'),
    ("2/5", '⅖'),
    ("3/5", '⅗'),
    ("4/5", '⅘'),
    ("1/6", '⅙'),
    ("5/6", '⅚'),
    ("1/7", '⅐'),
    ("1/8", '⅛'),
    ("3/8", '⅜'),
    ("5/8", '⅝'),
    ("7/8", '⅞'),
    ("1/9", '⅑'),
    ("1/10", '⅒'),
];

/// Stopwords exempt from the pluralization heuristic in `token_match`.
const STOPWORDS: &[&str] = &[
    "a", "an", "at", "any", "as", "about", "by", "but", "for", "in", "is", "it", "its", "or",
    "of", "to",
];

/// Punctuation and symbol characters treated as standalone tokens.
const SYMBOLS: &[char] = &[
    ',', '.', '(', ')', ':', ';', '/', '"', '\'', '!', '@', '#', '$', '%', '&', '-', '+', '?',
];

static UNITS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_FORMS.iter().copied().collect());

static GLYPH_TO_PLAIN: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| FRACTION_GLYPHS.iter().copied().collect());

static PLAIN_TO_GLYPH: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| COMMON_FRACTIONS.iter().copied().collect());

/// Check whether the token is a recognized unit spelling (exact,
/// case-sensitive match).
pub fn is_unit(token: &str) -> bool {
    UNITS.contains_key(token)
}

/// Convert a unit spelling into its standard singular form.
///
/// Unknown tokens pass through unchanged, e.g. `Tbsp.`, `T` and
/// `tablespoons` all map to `tablespoon` while `unknownxyz` stays itself.
pub fn standardize(token: &str) -> &str {
    UNITS.get(token).copied().unwrap_or(token)
}

/// Sequence form of [`standardize`]: maps the single-token operation over a
/// slice of tokens.
pub fn standardize_all<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| standardize(t.as_ref()).to_string())
        .collect()
}

/// Check whether the token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Check whether the token is a single symbol character.
pub fn is_symbol(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if SYMBOLS.contains(&c))
}

/// Plaintext expansion of a unicode digit/fraction glyph, if any.
pub fn glyph_to_plain(c: char) -> Option<&'static str> {
    GLYPH_TO_PLAIN.get(&c).copied()
}

/// Unicode glyph for a plaintext `n/d` fraction, restricted to the common
/// fractions that have one.
pub fn plain_to_glyph(fraction: &str) -> Option<char> {
    PLAIN_TO_GLYPH.get(fraction).copied()
}
