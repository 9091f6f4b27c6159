//! HTTP classifier: loads the model once, then answers `POST /predict`

use anyhow::anyhow;
use burn::backend::LibTorch;
use mental_health_bert::{
    config::{validate_precision, Config, HTTP_PRECISION},
    pipelines::text_classification::{BertClassifier, Pipeline},
    server::{self, AppState},
    utils::{device, logging},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: serve [OPTIONS]

Serves POST /predict on 0.0.0.0.

Options:
  -h, --help           Print help
  -m, --model          Model id or local model directory (defaults to $HF_MODEL)
  --port               Port to listen on (defaults to $PY_PORT, then 5001)
  -p, --precision      Decimal places of the confidence (defaults to 4, at most 15)
  --cpu                Run on the CPU even if an accelerator is available
";

#[derive(Debug)]
struct Args {
    model: Option<String>,
    port: Option<u16>,
    precision: Option<u32>,
    force_cpu: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            model: pargs.opt_value_from_str(["-m", "--model"])?,
            port: pargs.opt_value_from_str("--port")?,
            precision: pargs
                .opt_value_from_str(["-p", "--precision"])?
                .map(validate_precision)
                .transpose()?,
            force_cpu: pargs.contains("--cpu"),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(args) = Args::parse()? else {
        print!("{}", HELP);

        return Ok(());
    };

    logging::init("info");

    let mut config = Config::from_env()?
        .with_precision(args.precision.unwrap_or(HTTP_PRECISION))
        .with_force_cpu(args.force_cpu);

    if let Some(model) = args.model {
        config.model_name = model;
    }

    if let Some(port) = args.port {
        config.port = port;
    }

    let device = device::select_device(config.force_cpu);

    log::info!(
        "Loading tokenizer and model: {} -> device: {}",
        config.model_name,
        device::describe(&device)
    );

    let classifier = BertClassifier::<LibTorch<f32>>::load(&config, device).await?;

    log::info!("Model loaded");

    let state = AppState::new(Pipeline::new(classifier), config.precision);

    server::serve(state, config.port).await?;

    Ok(())
}
