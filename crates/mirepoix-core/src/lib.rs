//! # Mirepoix Core
//!
//! The deterministic heart of the Mirepoix ingredient tagger: text
//! normalization, tokenization with an approximate inverse, quantity and
//! unit recognition, ground-truth label alignment, IOB tagging and
//! per-token feature extraction. The statistical sequence model itself is
//! an external collaborator behind the [`crf::SequenceModel`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use mirepoix_core::parser::{Normalizer, Tokenizer};
//!
//! let normalizer = Normalizer::new().unwrap();
//! let tokenizer = Tokenizer::new().unwrap();
//!
//! let tokens = tokenizer.tokenize(&normalizer.normalize("2 tbsp of garlic, chopped"));
//! assert_eq!(tokens, ["2", "tbsp", "of", "garlic", ",", "chopped"]);
//! ```
pub mod crf;
pub mod error;
pub mod parser;
pub mod tagger;
pub mod types;

// Re-export primary API
pub use crf::{ModelHandle, SequenceModel, TrainConfig};
pub use error::{MirepoixError, Result};
pub use parser::{
    AlignedLine, Aligner, Label, Normalizer, TokenFeatures, Tokenizer, extract_features, iob_tag,
    remove_iob,
};
pub use tagger::IngredientTagger;
pub use types::{DatasetRow, ParsedIngredient};
