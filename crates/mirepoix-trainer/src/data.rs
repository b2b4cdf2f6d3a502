//! Dataset loading and preparation for CRF training.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use oorandom::Rand32;
use tracing::info;

use mirepoix_core::parser::{Aligner, extract_features, iob_tag};
use mirepoix_core::types::DatasetRow;
use mirepoix_core::TokenFeatures;

/// One aligned training example: a tokenized line with its per-token
/// features and IOB tags.
#[derive(Debug, Clone)]
pub struct TrainingSequence {
    /// Tokens of the normalized input line.
    pub tokens: Vec<String>,
    /// One feature vector per token.
    pub features: Vec<TokenFeatures>,
    /// One IOB tag per token.
    pub tags: Vec<String>,
}

/// Read dataset rows from any CSV source, dropping rows that cannot be
/// aligned (missing `input` or `name`).
pub fn read_rows<R: Read>(reader: R) -> anyhow::Result<Vec<DatasetRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in csv_reader.deserialize() {
        let row: DatasetRow = record.context("failed to parse dataset row")?;
        if row.is_trainable() {
            rows.push(row);
        } else {
            skipped += 1;
        }
    }

    info!(kept = rows.len(), skipped, "loaded dataset rows");
    Ok(rows)
}

/// Read dataset rows from a CSV file.
pub fn load_rows(path: &Path) -> anyhow::Result<Vec<DatasetRow>> {
    let file =
        File::open(path).with_context(|| format!("failed to open dataset {}", path.display()))?;
    read_rows(file)
}

/// Align every row and extract its feature and tag sequences.
pub fn build_sequences(rows: &[DatasetRow]) -> anyhow::Result<Vec<TrainingSequence>> {
    let aligner = Aligner::new()?;

    rows.iter()
        .map(|row| {
            let aligned = aligner.align(row)?;
            let features = extract_features(&aligned.tokens);
            let tags = iob_tag(&aligned.labels);
            Ok(TrainingSequence {
                tokens: aligned.tokens,
                features,
                tags,
            })
        })
        .collect()
}

/// Split sequences into a training set and a held-out test set.
///
/// Draws an exact `test_prop` fraction (rounded to the nearest line) with
/// a seeded shuffle; both halves keep their original relative order. A
/// fraction outside `(0, 1)` keeps everything in the training set.
pub fn split_sequences(
    sequences: Vec<TrainingSequence>,
    test_prop: f64,
    seed: u64,
) -> (Vec<TrainingSequence>, Vec<TrainingSequence>) {
    if test_prop <= 0.0 || test_prop >= 1.0 {
        return (sequences, Vec::new());
    }

    let total = sequences.len();
    let holdout = (total as f64 * test_prop).round() as usize;

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = Rand32::new(seed);
    for i in (1..total).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        indices.swap(i, j);
    }
    let held: HashSet<usize> = indices.into_iter().take(holdout).collect();

    let mut train = Vec::with_capacity(total - holdout);
    let mut test = Vec::with_capacity(holdout);
    for (i, sequence) in sequences.into_iter().enumerate() {
        if held.contains(&i) {
            test.push(sequence);
        } else {
            train.push(sequence);
        }
    }

    (train, test)
}
