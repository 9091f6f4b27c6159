use std::sync::Arc;

use crate::error::Result;

use super::{Classification, Classifier};

/// Text Classification Pipeline
///
/// Cheap to clone; every clone shares the same loaded classifier.
#[derive(Clone)]
pub struct Pipeline {
    classifier: Arc<dyn Classifier>,
}

impl Pipeline {
    /// Wrap a loaded classifier
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Classify a single text
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let probabilities = self.classifier.probabilities(text)?;

        Classification::from_probabilities(&probabilities)
    }
}
