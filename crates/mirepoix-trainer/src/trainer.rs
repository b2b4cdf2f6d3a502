//! Training orchestration: dataset in, `.crfsuite` model file out.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use mirepoix_core::crf::{ModelHandle, SequenceModel, TrainConfig};

use crate::data::{TrainingSequence, build_sequences, load_rows, split_sequences};

/// Options for a training run.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Output model file; picked automatically when absent.
    pub output: Option<PathBuf>,
    /// Fraction of lines held out for evaluation, in `(0, 1)`.
    pub test_prop: f64,
    /// L2 regularization coefficient.
    pub c2: Option<f64>,
    /// Show the model implementation's progress output.
    pub verbose: bool,
    /// Seed for the holdout split.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            output: None,
            test_prop: 0.0,
            c2: None,
            verbose: false,
            seed: 42,
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Handle of the trained model file.
    pub model: ModelHandle,
    /// Number of lines trained on.
    pub train_lines: usize,
    /// Number of lines held out.
    pub test_lines: usize,
    /// Per-token accuracy on the holdout, when one was drawn.
    pub token_accuracy: Option<f64>,
}

/// Train a sequence model from a labeled CSV dataset.
///
/// Loads and filters the rows, aligns them into feature/tag sequences,
/// optionally holds a fraction out, trains, and evaluates token accuracy
/// on the holdout.
pub fn train_from_csv<M: SequenceModel>(
    model: &M,
    dataset: &Path,
    options: &TrainOptions,
) -> anyhow::Result<TrainReport> {
    let rows = load_rows(dataset)?;
    if rows.is_empty() {
        anyhow::bail!("dataset {} contains no trainable rows", dataset.display());
    }

    let sequences = build_sequences(&rows)?;
    let (train, test) = split_sequences(sequences, options.test_prop, options.seed);

    let output = match &options.output {
        Some(path) => path.clone(),
        None => next_free_model_path(Path::new(".")),
    };
    let config = TrainConfig {
        c2: options.c2,
        verbose: options.verbose,
    };

    let features: Vec<_> = train.iter().map(|s| s.features.clone()).collect();
    let tags: Vec<_> = train.iter().map(|s| s.tags.clone()).collect();
    let handle = model
        .train(&features, &tags, &config, &output)
        .context("training failed")?;
    info!(model = %output.display(), lines = train.len(), "model trained and saved");

    let token_accuracy = if test.is_empty() {
        None
    } else {
        let accuracy = evaluate(model, &handle, &test)?;
        info!(accuracy, held_out = test.len(), "holdout evaluation");
        Some(accuracy)
    };

    Ok(TrainReport {
        model: handle,
        train_lines: train.len(),
        test_lines: test.len(),
        token_accuracy,
    })
}

/// Per-token accuracy of the model's predictions against reference tags.
pub fn evaluate<M: SequenceModel>(
    model: &M,
    handle: &ModelHandle,
    sequences: &[TrainingSequence],
) -> anyhow::Result<f64> {
    let mut correct = 0usize;
    let mut total = 0usize;

    for sequence in sequences {
        let predicted = model.tag(&sequence.features, handle)?;
        correct += predicted
            .iter()
            .zip(&sequence.tags)
            .filter(|(p, t)| p == t)
            .count();
        total += sequence.tags.len();
    }

    if total == 0 {
        anyhow::bail!("no tokens to evaluate");
    }
    Ok(correct as f64 / total as f64)
}

/// First free `model{i}.crfsuite` path under `dir`, counting from 1.
pub fn next_free_model_path(dir: &Path) -> PathBuf {
    let mut i = 1usize;
    loop {
        let candidate = dir.join(format!("model{i}.crfsuite"));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}
