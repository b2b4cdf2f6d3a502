use thiserror::Error;

/// Errors that can occur during Mirepoix core operations.
#[derive(Debug, Error)]
pub enum MirepoixError {
    /// A regex pattern failed to compile (should not happen with the static
    /// patterns defined in this crate).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A dataset row reached the aligner without a required field.
    #[error("dataset row is missing required field `{field}`")]
    MissingField {
        /// Name of the missing column.
        field: &'static str,
    },

    /// The model file could not be read or decoded.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The model training run failed.
    #[error("model training failed: {0}")]
    Training(String),

    /// The model failed while tagging a feature sequence.
    #[error("model tagging failed: {0}")]
    Inference(String),

    /// A predicted tag is outside the `O` / `B-` / `I-` scheme, or names an
    /// unknown label. Only a misbehaving model produces this.
    #[error("malformed tag {tag:?} in predicted sequence")]
    MalformedTag {
        /// The offending tag value.
        tag: String,
    },

    /// The model returned a tag sequence of the wrong length.
    #[error("predicted {tags} tags for a sequence of {tokens} tokens")]
    LengthMismatch {
        /// Number of tokens submitted for tagging.
        tokens: usize,
        /// Number of tags the model returned.
        tags: usize,
    },
}

/// Result type alias for Mirepoix operations.
pub type Result<T> = std::result::Result<T, MirepoixError>;
