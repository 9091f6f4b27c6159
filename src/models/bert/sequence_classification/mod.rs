/// Batcher
pub mod batcher;

/// Model Configuration
pub mod config;

/// Pretrained checkpoint loading
pub mod loader;

/// Model
pub mod model;

pub use batcher::Batcher;
pub use config::Config;
pub use loader::{load_config, load_pretrained};
pub use model::Model;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use bert_burn::model::BertModelConfig;
    use burn::backend::LibTorch;
    use tokenizers::{
        models::wordlevel::WordLevel, pre_tokenizers::whitespace::Whitespace, Tokenizer,
    };

    pub type TestBackend = LibTorch<f32>;

    /// A small HF-style BERT `config.json`
    pub fn tiny_bert_json() -> serde_json::Value {
        serde_json::json!({
            "architectures": ["BertForSequenceClassification"],
            "model_type": "bert",
            "num_attention_heads": 2,
            "num_hidden_layers": 2,
            "layer_norm_eps": 1e-12,
            "hidden_size": 8,
            "intermediate_size": 16,
            "vocab_size": 16,
            "max_position_embeddings": 16,
            "type_vocab_size": 2,
            "hidden_dropout_prob": 0.1,
            "pad_token_id": 0
        })
    }

    /// The small config, prepared for inference
    pub fn tiny_bert_config() -> BertModelConfig {
        let mut config: BertModelConfig = serde_json::from_value(tiny_bert_json()).unwrap();
        config.hidden_dropout_prob = 0.0;
        config.with_pooling_layer = Some(true);
        config
    }

    /// A whitespace word tokenizer over a seven-word vocabulary
    pub fn word_tokenizer() -> Tokenizer {
        let vocab: HashMap<String, u32> = ["[PAD]", "[UNK]", "i", "feel", "tired", "and", "sad"]
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i as u32))
            .collect();

        let model = WordLevel::builder()
            .vocab(vocab)
            .unk_token("[UNK]".to_string())
            .build()
            .unwrap();

        let mut tokenizer = Tokenizer::new(model);
        tokenizer.with_pre_tokenizer(Whitespace::default());
        tokenizer
    }
}
