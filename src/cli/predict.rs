use std::io::{Read, Write};

use serde::Deserialize;

use crate::pipelines::text_classification::{Pipeline, Prediction};

/// The JSON object read from standard input
#[derive(Debug, Deserialize)]
pub struct Request {
    /// The text to classify
    pub text: String,
}

/// Read one request from `input`, classify it, and write one JSON line to `output`
pub fn run<R: Read, W: Write>(
    pipeline: &Pipeline,
    precision: u32,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Prediction> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(|e| anyhow!("Unable to read standard input: {}", e))?;

    let request: Request =
        serde_json::from_str(&raw).map_err(|e| anyhow!("Invalid request: {}", e))?;

    let classification = pipeline.classify(&request.text)?;
    let prediction = Prediction::strict(&classification, precision)?;

    serde_json::to_writer(&mut output, &prediction)?;
    writeln!(output)?;
    output.flush()?;

    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::CLI_PRECISION, labels::Label,
        pipelines::text_classification::classifier::testing,
    };

    fn pipeline() -> Pipeline {
        Pipeline::new(testing::Fixed::new(vec![0.031, 0.012, 0.81234, 0.1, 0.04466]))
    }

    fn run_with(input: &str) -> anyhow::Result<(Prediction, String)> {
        let mut out = Vec::new();
        let prediction = run(&pipeline(), CLI_PRECISION, input.as_bytes(), &mut out)?;

        Ok((prediction, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn test_prints_one_json_line() {
        let (prediction, out) = run_with(r#"{"text": "I feel hopeless and exhausted"}"#).unwrap();

        assert_eq!(out, "{\"prediction\":\"Depression\",\"confidence\":0.81}\n");
        assert_eq!(prediction.prediction, Label::Depression.name());
    }

    #[test]
    fn test_confidence_has_two_decimals() {
        let (_, out) = run_with(r#"{"text": "I feel hopeless and exhausted"}"#).unwrap();

        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        let confidence = value["confidence"].as_f64().unwrap();

        assert!((0.0..=1.0).contains(&confidence));
        assert_eq!((confidence * 100.0).round() / 100.0, confidence);
        assert!(Label::ALL
            .iter()
            .any(|label| label.name() == value["prediction"].as_str().unwrap()));
    }

    #[test]
    fn test_empty_text_is_still_classified() {
        let (prediction, _) = run_with(r#"{"text": ""}"#).unwrap();

        assert_eq!(prediction.prediction, "Depression");
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert!(run_with(r#"{"text": "ok", "user": 4}"#).is_ok());
    }

    #[test]
    fn test_missing_text_fails() {
        let err = run_with(r#"{"message": "hello"}"#).unwrap_err();

        assert!(err.to_string().contains("Invalid request"));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(run_with("not json").is_err());
    }

    #[test]
    fn test_unknown_class_fails() {
        let pipeline = Pipeline::new(testing::Fixed::new(vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0]));
        let mut out = Vec::new();

        let err = run(&pipeline, CLI_PRECISION, r#"{"text": "x"}"#.as_bytes(), &mut out)
            .unwrap_err();

        assert!(err.to_string().contains("no label for class id 5"));
        assert!(out.is_empty());
    }
}
