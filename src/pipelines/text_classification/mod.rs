/// The classifier seam
pub mod classifier;

/// Argmax, labels and rounding
pub mod prediction;

/// Pipeline
pub mod pipeline;

/// BERT-backed classifier
pub mod bert;

pub use bert::BertClassifier;
pub use classifier::Classifier;
pub use pipeline::Pipeline;
pub use prediction::{round_confidence, Classification, Prediction};
