use bert_burn::data::BertInferenceBatch;
use burn::{nn::attention::generate_padding_mask, tensor::backend::Backend};
use tokenizers::{Tokenizer, TruncationParams};

use crate::error::{Error, Result};

/// Turns raw text into padded, masked BERT inputs
#[derive(Clone)]
pub struct Batcher<B: Backend> {
    /// Tokenizer for converting text to token IDs
    tokenizer: Tokenizer,

    /// Maximum sequence length for tokenized text
    max_seq_length: usize,

    /// ID of the padding token
    pad_token_id: usize,

    /// Device on which to perform computation (e.g., CPU or CUDA device)
    device: B::Device,
}

impl<B: Backend> Batcher<B> {
    /// Creates a new batcher, configuring the tokenizer to truncate at `max_seq_length`
    pub fn new(
        mut tokenizer: Tokenizer,
        max_seq_length: usize,
        pad_token_id: usize,
        device: B::Device,
    ) -> Result<Self> {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_seq_length,
                ..Default::default()
            }))
            .map_err(Error::tokenizer)?;

        Ok(Self {
            tokenizer,
            max_seq_length,
            pad_token_id,
            device,
        })
    }

    /// Tokenize the given items and pad them to the longest one
    pub fn batch(&self, items: Vec<String>) -> Result<BertInferenceBatch<B>> {
        let mut token_ids_list = Vec::with_capacity(items.len());

        for input in items {
            let tokens = self
                .tokenizer
                .encode(input, true)
                .map_err(Error::tokenizer)?;

            let token_ids: Vec<_> = tokens.get_ids().iter().map(|t| *t as usize).collect();

            token_ids_list.push(token_ids);
        }

        let pad_mask = generate_padding_mask(
            self.pad_token_id,
            token_ids_list,
            Some(self.max_seq_length),
            &self.device,
        );

        Ok(BertInferenceBatch {
            tokens: pad_mask.tensor,
            mask_pad: pad_mask.mask,
        })
    }
}
