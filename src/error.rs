/// Errors raised while loading the model or classifying text
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The tokenizer could not be loaded or could not encode the input
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// The model configuration is missing or malformed
    #[error("model config error: {0}")]
    Config(String),

    /// A model file could not be fetched from the Hugging Face Hub
    #[error("unable to download {file} for {model}: {source}")]
    Download {
        /// The model repository
        model: String,

        /// The requested file
        file: String,

        /// The underlying hub error
        #[source]
        source: hf_hub::api::tokio::ApiError,
    },

    /// The safetensors weights could not be read
    #[error("unable to read model weights: {0}")]
    Weights(#[from] candle_core::Error),

    /// A required tensor is absent from the weights file
    #[error("tensor {0} not found in model weights")]
    MissingTensor(String),

    /// The classification head does not match the label set
    #[error("classification head has shape {found:?}, expected [{n_classes}, {hidden_size}]")]
    HeadShape {
        /// The shape stored in the weights file
        found: Vec<usize>,

        /// Number of labels
        n_classes: usize,

        /// Hidden size of the encoder
        hidden_size: usize,
    },

    /// The model produced a class id with no label
    #[error("no label for class id {0}")]
    UnknownClass(usize),

    /// The model produced no scores at all
    #[error("model returned no class scores")]
    EmptyOutput,

    /// A thread panicked while holding the model
    #[error("model lock poisoned")]
    Poisoned,

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap any tokenizer failure
    pub fn tokenizer(err: impl std::fmt::Display) -> Self {
        Self::Tokenizer(err.to_string())
    }
}
