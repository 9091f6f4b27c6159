use std::path::Path;

use bert_burn::model::{BertModel, BertModelConfig};
use burn::{
    config::Config as _,
    module::{ConstantRecord, Module, Param},
    nn::LinearRecord,
    tensor::{backend::Backend, Data, Shape, Tensor},
};
use candle_core::{DType, Device as CandleDevice, Tensor as CandleTensor};

use crate::{
    error::{Error, Result},
    utils::hugging_face::ModelFiles,
};

use super::{model::ModelRecord, Config, Model};

/// Tensor name of the classification head weight in HF checkpoints
pub static HEAD_WEIGHT: &str = "classifier.weight";

/// Tensor name of the classification head bias in HF checkpoints
pub static HEAD_BIAS: &str = "classifier.bias";

/// Read the HF config and prepare it for inference
pub fn load_config(files: &ModelFiles, max_seq_length: usize) -> Result<Config> {
    let mut bert_config = BertModelConfig::load(&files.config).map_err(|e| {
        Error::Config(format!(
            "unable to load {}: {}",
            files.config.display(),
            e
        ))
    })?;

    // Inference only
    bert_config.hidden_dropout_prob = 0.0;
    bert_config.max_seq_len = Some(max_seq_length);
    bert_config.with_pooling_layer = Some(true);

    Ok(Config::for_labels(bert_config))
}

/// Load the encoder and the classification head from a safetensors checkpoint
pub fn load_pretrained<B: Backend>(
    config: &Config,
    weights: &Path,
    device: &B::Device,
) -> Result<Model<B>> {
    let output = load_head::<B>(
        weights,
        config.n_classes,
        config.model.hidden_size,
        device,
    )?;

    let model = config.init::<B>(device).load_record(ModelRecord {
        model: BertModel::from_safetensors(weights.to_path_buf(), device, config.model.clone()),
        output,
        n_classes: ConstantRecord::new(),
    });

    Ok(model)
}

/// Read `classifier.weight` and `classifier.bias` into a burn `Linear` record.
/// PyTorch stores linear weights as `[out, in]` while burn expects `[in, out]`.
fn load_head<B: Backend>(
    weights: &Path,
    n_classes: usize,
    hidden_size: usize,
    device: &B::Device,
) -> Result<LinearRecord<B>> {
    let mut tensors = candle_core::safetensors::load(weights, &CandleDevice::Cpu)?;

    let weight = tensors
        .remove(HEAD_WEIGHT)
        .ok_or_else(|| Error::MissingTensor(HEAD_WEIGHT.to_string()))?;
    let bias = tensors
        .remove(HEAD_BIAS)
        .ok_or_else(|| Error::MissingTensor(HEAD_BIAS.to_string()))?;

    let (weight, bias) = head_values(&weight, &bias, n_classes, hidden_size)?;

    let weight: Tensor<B, 2> = Tensor::from_data(
        Data::new(weight, Shape::new([n_classes, hidden_size])).convert::<B::FloatElem>(),
        device,
    );
    let bias: Tensor<B, 1> = Tensor::from_data(
        Data::new(bias, Shape::new([n_classes])).convert::<B::FloatElem>(),
        device,
    );

    Ok(LinearRecord {
        weight: Param::from_tensor(weight.transpose()),
        bias: Some(Param::from_tensor(bias)),
    })
}

/// Validate head shapes and flatten them to `f32` values
fn head_values(
    weight: &CandleTensor,
    bias: &CandleTensor,
    n_classes: usize,
    hidden_size: usize,
) -> Result<(Vec<f32>, Vec<f32>)> {
    if weight.dims() != [n_classes, hidden_size] || bias.dims() != [n_classes] {
        return Err(Error::HeadShape {
            found: weight.dims().to_vec(),
            n_classes,
            hidden_size,
        });
    }

    let weight = weight.to_dtype(DType::F32)?.flatten_all()?.to_vec1::<f32>()?;
    let bias = bias.to_dtype(DType::F32)?.to_vec1::<f32>()?;

    Ok((weight, bias))
}
