use std::num::ParseIntError;

/// Environment variable naming the model repository or local model directory
pub static MODEL_ENV: &str = "HF_MODEL";

/// Environment variable naming the HTTP listen port
pub static PORT_ENV: &str = "PY_PORT";

/// The published mental health classifier
pub static DEFAULT_MODEL: &str = "ethandavey/mental-health-diagnosis-bert";

/// Decimal places of confidence printed by the one-shot CLI
pub const CLI_PRECISION: u32 = 2;

/// Decimal places of confidence returned by the HTTP endpoint
pub const HTTP_PRECISION: u32 = 4;

/// Largest supported number of confidence decimal places
pub const MAX_PRECISION: u32 = 15;

/// Runtime settings shared by both entry points
#[derive(burn::config::Config, Debug)]
pub struct Config {
    /// Hugging Face model id, or a local directory holding the model files
    #[config(default = "DEFAULT_MODEL.to_string()")]
    pub model_name: String,

    /// Port the HTTP server listens on
    #[config(default = 5001)]
    pub port: u16,

    /// Inputs are truncated to this many tokens
    #[config(default = 128)]
    pub max_seq_length: usize,

    /// Decimal places of the reported confidence
    #[config(default = 4)]
    pub precision: u32,

    /// Skip accelerator detection and run on the CPU
    #[config(default = false)]
    pub force_cpu: bool,
}

impl Config {
    /// Resolve model and port settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve only the model setting from the process environment
    pub fn model_from_env() -> Self {
        Self::model_from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the model from an arbitrary key lookup. Server settings keep their defaults.
    pub fn model_from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::new();

        if let Some(model_name) = lookup(MODEL_ENV).filter(|value| !value.is_empty()) {
            config.model_name = model_name;
        }

        config
    }

    /// Resolve model and port from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::model_from_lookup(&lookup);

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: port.clone(),
                    source,
                })?;
        }

        Ok(config)
    }
}

/// Reject precisions whose rounding scale would overflow
pub fn validate_precision(precision: u32) -> Result<u32, ConfigError> {
    if precision > MAX_PRECISION {
        return Err(ConfigError::InvalidPrecision(precision));
    }

    Ok(precision)
}

/// Configuration Error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The port variable is not a valid port number
    #[error("invalid {} value {value:?}: {source}", PORT_ENV)]
    InvalidPort {
        /// The raw value
        value: String,

        /// The parse failure
        source: ParseIntError,
    },

    /// Too many decimal places requested
    #[error("precision {0} exceeds the maximum of {} decimal places", MAX_PRECISION)]
    InvalidPrecision(u32),
}
