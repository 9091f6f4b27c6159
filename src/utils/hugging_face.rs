use std::path::{Path, PathBuf};

use hf_hub::api::tokio::{Api, ApiRepo};

use crate::error::{Error, Result};

/// HF model configuration file
pub static CONFIG_FILE: &str = "config.json";

/// HF model weights file
pub static WEIGHTS_FILE: &str = "model.safetensors";

/// HF fast tokenizer file
pub static TOKENIZER_FILE: &str = "tokenizer.json";

/// Paths to the files needed to run a pretrained classifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelFiles {
    /// The HF `config.json`
    pub config: PathBuf,

    /// The safetensors weights
    pub weights: PathBuf,

    /// The `tokenizer.json`
    pub tokenizer: PathBuf,
}

impl ModelFiles {
    /// Locate the model files inside a local directory
    pub fn in_dir(dir: &Path) -> Result<Self> {
        let files = Self {
            config: dir.join(CONFIG_FILE),
            weights: dir.join(WEIGHTS_FILE),
            tokenizer: dir.join(TOKENIZER_FILE),
        };

        for path in [&files.config, &files.weights, &files.tokenizer] {
            if !path.is_file() {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} does not exist", path.display()),
                )));
            }
        }

        Ok(files)
    }
}

/// Resolve model files either from a local directory or from the Hugging Face Hub.
/// Hub downloads are cached, so files already present will not be downloaded again.
pub async fn resolve_model_files(model_name: &str) -> Result<ModelFiles> {
    let local = Path::new(model_name);
    if local.is_dir() {
        log::debug!("Using local model directory {}", local.display());

        return ModelFiles::in_dir(local);
    }

    download_hf_model(model_name).await
}

/// Download model config, weights and tokenizer from Hugging Face Hub
pub async fn download_hf_model(model_name: &str) -> Result<ModelFiles> {
    let api = Api::new().map_err(|source| Error::Download {
        model: model_name.to_string(),
        file: "hub client".to_string(),
        source,
    })?;
    let repo = api.model(model_name.to_string());

    Ok(ModelFiles {
        config: fetch(&repo, model_name, CONFIG_FILE).await?,
        weights: fetch(&repo, model_name, WEIGHTS_FILE).await?,
        tokenizer: fetch(&repo, model_name, TOKENIZER_FILE).await?,
    })
}

async fn fetch(repo: &ApiRepo, model_name: &str, file: &str) -> Result<PathBuf> {
    log::debug!("Fetching {file} for {model_name}");

    repo.get(file).await.map_err(|source| Error::Download {
        model: model_name.to_string(),
        file: file.to_string(),
        source,
    })
}
