use crate::error::Result;

/// Anything that can score a single text against the label set
pub trait Classifier: Send + Sync {
    /// Class probabilities for `text`, indexed by class id
    fn probabilities(&self, text: &str) -> Result<Vec<f32>>;
}
