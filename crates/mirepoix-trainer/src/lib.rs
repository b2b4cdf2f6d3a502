//! # Mirepoix Trainer
//!
//! Turns a labeled ingredient dataset into a trained CRF model: CSV
//! loading and filtering, ground-truth alignment into feature/tag
//! sequences, holdout splitting, and the `crfs`-backed implementation of
//! the core's sequence-model contract.

pub mod data;
pub mod model;
pub mod trainer;

pub use data::{TrainingSequence, build_sequences, load_rows, read_rows, split_sequences};
pub use model::CrfTagger;
pub use trainer::{TrainOptions, TrainReport, evaluate, next_free_model_path, train_from_csv};
