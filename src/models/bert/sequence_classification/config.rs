use bert_burn::model::BertModelConfig;
use burn::{nn::LinearConfig, tensor::backend::Backend};

use crate::labels::Label;

use super::model::Model;

/// Encoder settings plus the width of the classification head
#[derive(burn::config::Config)]
pub struct Config {
    /// The base BERT config
    pub model: BertModelConfig,

    /// Number of output classes
    pub n_classes: usize,
}

impl Config {
    /// A head sized for the fixed mental health label set
    pub fn for_labels(model: BertModelConfig) -> Self {
        Config::new(model, Label::ALL.len())
    }

    /// Initializes a Bert model with default weights
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        Model {
            model: self.model.init(device),
            output: LinearConfig::new(self.model.hidden_size, self.n_classes).init(device),
            n_classes: self.n_classes,
        }
    }
}
