pub mod align;
pub mod classify;
pub mod decode;
pub mod features;
pub mod iob;
pub mod lexicon;
pub mod normalize;
pub mod tokenizer;

pub use align::{AlignedLine, Aligner};
pub use decode::decode_labels;
pub use features::{NeighborFeatures, TokenFeatures, extract_features};
pub use iob::{Label, iob_tag, remove_iob};
pub use normalize::Normalizer;
pub use tokenizer::Tokenizer;
