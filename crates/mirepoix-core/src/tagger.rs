//! # Inference pipeline
//!
//! Ties the deterministic stages together around a trained sequence model:
//! raw line in, structured ingredient record out.

use tracing::debug;

use crate::crf::{ModelHandle, SequenceModel};
use crate::error::{MirepoixError, Result};
use crate::parser::decode::decode_labels;
use crate::parser::features::extract_features;
use crate::parser::iob::remove_iob;
use crate::parser::normalize::Normalizer;
use crate::parser::tokenizer::Tokenizer;
use crate::types::ParsedIngredient;

/// Tags raw ingredient lines with a trained sequence model and decodes the
/// predictions into structured records.
pub struct IngredientTagger<M: SequenceModel> {
    model: M,
    handle: ModelHandle,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
}

impl<M: SequenceModel> IngredientTagger<M> {
    /// Create a tagger over a model implementation and the handle of a
    /// trained model file.
    ///
    /// # Errors
    ///
    /// Returns `MirepoixError::Regex` if pattern compilation fails (should
    /// never happen with the static patterns involved).
    pub fn new(model: M, handle: ModelHandle) -> Result<Self> {
        Ok(Self {
            model,
            handle,
            normalizer: Normalizer::new()?,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Tag one raw line and decode it into a structured record.
    ///
    /// Degenerate input (empty or whitespace-only) decodes to an empty
    /// record without consulting the model. Model failures, malformed
    /// predicted tags and length mismatches are fatal.
    pub fn tag_line(&self, line: &str) -> Result<ParsedIngredient> {
        let tokens = self.tokenizer.tokenize(&self.normalizer.normalize(line));
        if tokens.is_empty() {
            return Ok(ParsedIngredient::default());
        }

        let features = extract_features(&tokens);
        let tags = self.model.tag(&features, &self.handle)?;
        if tags.len() != tokens.len() {
            return Err(MirepoixError::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }

        let labels = remove_iob(&tags)?;
        debug!(line, ?tags, "tagged line");
        Ok(decode_labels(&tokens, &labels, &self.tokenizer))
    }

    /// Tag a batch of raw lines in order.
    pub fn tag_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<ParsedIngredient>> {
        lines.iter().map(|l| self.tag_line(l.as_ref())).collect()
    }

    /// The handle this tagger consults.
    #[must_use]
    pub fn handle(&self) -> &ModelHandle {
        &self.handle
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;
    use crate::crf::TrainConfig;
    use crate::parser::features::TokenFeatures;

    /// Stub model that looks predicted tags up by token text.
    struct LookupModel {
        tags: HashMap<&'static str, &'static str>,
    }

    impl LookupModel {
        fn garlic() -> Self {
            let tags = HashMap::from([
                ("2", "B-QTY"),
                ("tbsp", "B-UNIT"),
                ("of", "O"),
                ("garlic", "B-INGR"),
                (",", "O"),
                ("chopped", "B-CMNT"),
            ]);
            Self { tags }
        }
    }

    impl SequenceModel for LookupModel {
        fn train(
            &self,
            _features: &[Vec<TokenFeatures>],
            _tags: &[Vec<String>],
            _config: &TrainConfig,
            output: &Path,
        ) -> crate::error::Result<ModelHandle> {
            Ok(ModelHandle::new(output))
        }

        fn tag(
            &self,
            features: &[TokenFeatures],
            _model: &ModelHandle,
        ) -> crate::error::Result<Vec<String>> {
            Ok(features
                .iter()
                .map(|f| self.tags.get(f.token.as_str()).copied().unwrap_or("O").to_string())
                .collect())
        }
    }

    /// Stub model that returns a fixed, possibly wrong-length sequence.
    struct FixedModel(Vec<&'static str>);

    impl SequenceModel for FixedModel {
        fn train(
            &self,
            _features: &[Vec<TokenFeatures>],
            _tags: &[Vec<String>],
            _config: &TrainConfig,
            output: &Path,
        ) -> crate::error::Result<ModelHandle> {
            Ok(ModelHandle::new(output))
        }

        fn tag(
            &self,
            _features: &[TokenFeatures],
            _model: &ModelHandle,
        ) -> crate::error::Result<Vec<String>> {
            Ok(self.0.iter().map(|t| t.to_string()).collect())
        }
    }

    fn tagger<M: SequenceModel>(model: M) -> IngredientTagger<M> {
        IngredientTagger::new(model, ModelHandle::new("stub.crfsuite")).unwrap()
    }

    #[test]
    fn tags_and_decodes_a_line() {
        let t = tagger(LookupModel::garlic());
        let parsed = t.tag_line("2 tbsp of garlic, chopped").unwrap();

        assert_eq!(parsed.quantity, Some(2.0));
        assert_eq!(parsed.unit.as_deref(), Some("tbsp"));
        assert_eq!(parsed.name.as_deref(), Some("garlic"));
        assert_eq!(parsed.comment.as_deref(), Some("chopped"));
    }

    #[test]
    fn empty_line_decodes_empty_without_model() {
        let t = tagger(FixedModel(vec!["B-QTY"]));
        assert!(t.tag_line("").unwrap().is_empty());
        assert!(t.tag_line("   ").unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_fatal() {
        let t = tagger(FixedModel(vec!["B-QTY"]));
        assert!(matches!(
            t.tag_line("2 eggs"),
            Err(MirepoixError::LengthMismatch { tokens: 2, tags: 1 })
        ));
    }

    #[test]
    fn malformed_tag_is_fatal() {
        let t = tagger(FixedModel(vec!["B-QTY", "SOMETHING"]));
        assert!(matches!(
            t.tag_line("2 eggs"),
            Err(MirepoixError::MalformedTag { .. })
        ));
    }

    #[test]
    fn batch_preserves_order() {
        let t = tagger(LookupModel::garlic());
        let parsed = t
            .tag_lines(&["2 tbsp of garlic, chopped", "garlic"])
            .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].quantity, Some(2.0));
        assert_eq!(parsed[1].name.as_deref(), Some("garlic"));
    }
}
