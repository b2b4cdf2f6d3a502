//! Structured reconstruction from a labeled token sequence.

use crate::parser::classify::as_float;
use crate::parser::iob::Label;
use crate::parser::tokenizer::Tokenizer;
use crate::types::ParsedIngredient;

/// Group a labeled token sequence into a structured ingredient record.
///
/// Tokens are gathered per label in order of appearance; the text fields
/// are rejoined with the detokenizer, and the quantity fields take the
/// numeric value of their first token.
pub fn decode_labels(
    tokens: &[String],
    labels: &[Option<Label>],
    tokenizer: &Tokenizer,
) -> ParsedIngredient {
    let mut quantity = Vec::new();
    let mut range_end = Vec::new();
    let mut unit = Vec::new();
    let mut name = Vec::new();
    let mut comment = Vec::new();

    for (token, label) in tokens.iter().zip(labels) {
        match label {
            Some(Label::Quantity) => quantity.push(token.clone()),
            Some(Label::RangeEnd) => range_end.push(token.clone()),
            Some(Label::Unit) => unit.push(token.clone()),
            Some(Label::Name) => name.push(token.clone()),
            Some(Label::Comment) => comment.push(token.clone()),
            None => {}
        }
    }

    let rejoin = |group: &[String]| {
        if group.is_empty() {
            None
        } else {
            Some(tokenizer.detokenize(group))
        }
    };

    ParsedIngredient {
        quantity: quantity.first().and_then(|t| as_float(t)),
        range_end: range_end.first().and_then(|t| as_float(t)),
        unit: rejoin(&unit),
        name: rejoin(&name),
        comment: rejoin(&comment),
    }
}
