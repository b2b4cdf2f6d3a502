//! # Mirepoix
//!
//! Recipe ingredient-line tagging: deterministic normalization,
//! tokenization and ground-truth alignment, IOB tagging and feature
//! extraction for a linear-chain CRF, and the inverse pipeline that turns
//! predicted tags back into structured `(quantity, unit, name, comment)`
//! records.
//!
//! This facade re-exports the public API of the workspace crates; see
//! `mirepoix-core` for the pipeline and `mirepoix-trainer` for dataset
//! preparation and training.

pub use mirepoix_core::{
    AlignedLine, Aligner, DatasetRow, IngredientTagger, Label, MirepoixError, ModelHandle,
    ParsedIngredient, Result, SequenceModel, TokenFeatures, TrainConfig, extract_features,
    iob_tag, remove_iob,
};
pub use mirepoix_core::parser::{Normalizer, Tokenizer};
pub use mirepoix_trainer::{
    CrfTagger, TrainOptions, TrainReport, TrainingSequence, train_from_csv,
};
