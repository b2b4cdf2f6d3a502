//! # CRF-backed sequence model
//!
//! Implements [`SequenceModel`] over the pure-Rust `crfs` CRFsuite port:
//! L-BFGS training into a `.crfsuite` model file, and tagging by reading
//! the model bytes back. Feature vectors are flattened into weighted
//! attributes the same way python-crfsuite encodes feature dicts: string
//! features as `key=value` with weight 1, boolean features as a bare key
//! weighted 1 or 0, and `start`/`end` markers at the line boundaries.

use std::path::Path;

use crfs::train::Trainer;
use crfs::{Attribute, Model};
use tracing::debug;

use mirepoix_core::crf::{ModelHandle, SequenceModel, TrainConfig};
use mirepoix_core::error::{MirepoixError, Result};
use mirepoix_core::parser::{NeighborFeatures, TokenFeatures};

/// Linear-chain CRF implementation of the sequence-model contract.
pub struct CrfTagger;

impl SequenceModel for CrfTagger {
    fn train(
        &self,
        features: &[Vec<TokenFeatures>],
        tags: &[Vec<String>],
        config: &TrainConfig,
        output: &Path,
    ) -> Result<ModelHandle> {
        let mut trainer = Trainer::lbfgs();
        trainer.verbose(config.verbose);

        for (line_features, line_tags) in features.iter().zip(tags) {
            let xseq: Vec<Vec<Attribute>> = line_features.iter().map(attributes).collect();
            let yseq: Vec<&str> = line_tags.iter().map(String::as_str).collect();
            trainer
                .append(&xseq, &yseq)
                .map_err(|e| MirepoixError::Training(e.to_string()))?;
        }

        if let Some(c2) = config.c2 {
            trainer
                .params_mut()
                .set_c2(c2)
                .map_err(|e| MirepoixError::Training(e.to_string()))?;
        }

        trainer
            .train(output)
            .map_err(|e| MirepoixError::Training(e.to_string()))?;
        debug!(output = %output.display(), lines = features.len(), "trained CRF model");

        Ok(ModelHandle::new(output))
    }

    fn tag(&self, features: &[TokenFeatures], model: &ModelHandle) -> Result<Vec<String>> {
        let data = std::fs::read(model.path()).map_err(|e| {
            MirepoixError::ModelLoad(format!("{}: {e}", model.path().display()))
        })?;
        let model = Model::new(&data).map_err(|e| MirepoixError::ModelLoad(e.to_string()))?;
        let tagger = model
            .tagger()
            .map_err(|e| MirepoixError::ModelLoad(e.to_string()))?;

        let xseq: Vec<Vec<Attribute>> = features.iter().map(attributes).collect();
        let predicted = tagger
            .tag(&xseq)
            .map_err(|e| MirepoixError::Inference(e.to_string()))?;

        Ok(predicted.into_iter().map(String::from).collect())
    }
}

/// Flatten one feature vector into weighted CRF attributes.
fn attributes(f: &TokenFeatures) -> Vec<Attribute> {
    attribute_pairs(f)
        .into_iter()
        .map(|(name, weight)| Attribute::new(name, weight))
        .collect()
}

/// The `(attribute name, weight)` encoding of one feature vector.
///
/// String features become `key=value` with weight 1; boolean features
/// keep their bare key with weight 1 or 0; a missing neighbor becomes the
/// `start`/`end` boundary marker.
fn attribute_pairs(f: &TokenFeatures) -> Vec<(String, f64)> {
    let mut pairs = Vec::with_capacity(18);

    pairs.push((format!("token={}", f.token), 1.0));
    pairs.push(flag("capitalized", f.capitalized));
    pairs.push(flag("parenthetical", f.parenthetical));
    pairs.push(flag("numeric", f.numeric));
    pairs.push(flag("standardunit", f.standard_unit));
    pairs.push(flag("symbol", f.symbol));
    pairs.push(flag("followscomma", f.follows_comma));

    match &f.prev {
        None => pairs.push(flag("start", true)),
        Some(prev) => push_neighbor(&mut pairs, "-1", prev),
    }
    match &f.next {
        None => pairs.push(flag("end", true)),
        Some(next) => push_neighbor(&mut pairs, "+1", next),
    }

    pairs
}

fn push_neighbor(pairs: &mut Vec<(String, f64)>, prefix: &str, neighbor: &NeighborFeatures) {
    pairs.push((format!("{prefix}token={}", neighbor.token), 1.0));
    pairs.push(flag(&format!("{prefix}capitalized"), neighbor.capitalized));
    pairs.push(flag(&format!("{prefix}numeric"), neighbor.numeric));
    pairs.push(flag(
        &format!("{prefix}standardunit"),
        neighbor.standard_unit,
    ));
    pairs.push(flag(&format!("{prefix}symbol"), neighbor.symbol));
}

fn flag(name: &str, on: bool) -> (String, f64) {
    (name.to_string(), if on { 1.0 } else { 0.0 })
}
