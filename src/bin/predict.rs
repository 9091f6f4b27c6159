//! One-shot classifier: reads `{"text": ...}` from standard input and prints
//! `{"prediction": ..., "confidence": ...}` to standard output

use std::io;

use anyhow::anyhow;
use burn::backend::LibTorch;
use mental_health_bert::{
    config::{validate_precision, Config, CLI_PRECISION},
    pipelines::text_classification::{BertClassifier, Pipeline},
    utils::{device, logging},
};
use pico_args::Arguments;

const HELP: &str = "\
Usage: predict [OPTIONS] < request.json

Reads one JSON object with a \"text\" field from standard input.

Options:
  -h, --help           Print help
  -m, --model          Model id or local model directory (defaults to $HF_MODEL)
  -p, --precision      Decimal places of the confidence (defaults to 2, at most 15)
  --cpu                Run on the CPU even if an accelerator is available
";

#[derive(Debug)]
struct Args {
    model: Option<String>,
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

    logging::init("warn");

    // The port is a server setting, so only the model is read from the environment
    let mut config = Config::model_from_env()
        .with_precision(args.precision.unwrap_or(CLI_PRECISION))
        .with_force_cpu(args.force_cpu);

    if let Some(model) = args.model {
        config.model_name = model;
    }

    let device = device::select_device(config.force_cpu);

    log::info!(
        "Loading tokenizer and model: {} -> device: {}",
        config.model_name,
        device::describe(&device)
    );

    let classifier = BertClassifier::<LibTorch<f32>>::load(&config, device).await?;
    let pipeline = Pipeline::new(classifier);

    mental_health_bert::cli::predict::run(&pipeline, config.precision, io::stdin(), io::stdout())?;

    Ok(())
}
