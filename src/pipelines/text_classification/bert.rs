use std::sync::Mutex;

use burn::tensor::backend::Backend;
use tokenizers::Tokenizer;

use crate::{
    config::Config,
    error::{Error, Result},
    models::bert::sequence_classification::{self as bert, Batcher, Model},
    utils::hugging_face::resolve_model_files,
};

use super::Classifier;

/// A pretrained BERT sequence classifier and its tokenizer
pub struct BertClassifier<B: Backend> {
    /// Module parameters are not guaranteed `Sync` on every backend, so calls are serialized
    model: Mutex<Model<B>>,

    batcher: Batcher<B>,
}

impl<B: Backend> BertClassifier<B> {
    /// Pair an initialized model with its batcher
    pub fn new(model: Model<B>, batcher: Batcher<B>) -> Self {
        Self {
            model: Mutex::new(model),
            batcher,
        }
    }

    /// Fetch (or locate) the model files, then build the tokenizer and model on `device`
    pub async fn load(config: &Config, device: B::Device) -> Result<Self> {
        let files = resolve_model_files(&config.model_name).await?;

        let model_config = bert::load_config(&files, config.max_seq_length)?;

        let tokenizer = Tokenizer::from_file(&files.tokenizer).map_err(Error::tokenizer)?;
        let batcher = Batcher::new(
            tokenizer,
            config.max_seq_length,
            model_config.model.pad_token_id,
            device.clone(),
        )?;

        log::debug!("Loading weights from {}", files.weights.display());

        let model = bert::load_pretrained::<B>(&model_config, &files.weights, &device)?;

        Ok(Self::new(model, batcher))
    }
}

impl<B: Backend> Classifier for BertClassifier<B> {
    fn probabilities(&self, text: &str) -> Result<Vec<f32>> {
        let input = self.batcher.batch(vec![text.to_string()])?;

        let model = self.model.lock().map_err(|_| Error::Poisoned)?;

        // A batch of one, so the flattened row is the whole output
        let probabilities = model.infer(input).into_data().convert::<f32>().value;

        Ok(probabilities)
    }
}
