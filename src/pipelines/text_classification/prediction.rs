use serde::Serialize;

use crate::{
    config::MAX_PRECISION,
    error::{Error, Result},
    labels::{Label, UNKNOWN_LABEL},
};

/// The winning class for one input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Index of the highest-probability class
    pub class_id: usize,

    /// Probability of that class, unrounded
    pub confidence: f32,
}

impl Classification {
    /// Take the argmax of a probability vector. The first index wins on ties.
    pub fn from_probabilities(probabilities: &[f32]) -> Result<Self> {
        let mut best: Option<(usize, f32)> = None;

        for (class_id, &p) in probabilities.iter().enumerate() {
            match best {
                Some((_, top)) if p <= top => {}
                _ if p.is_nan() => {}
                _ => best = Some((class_id, p)),
            }
        }

        best.map(|(class_id, confidence)| Classification {
            class_id,
            confidence,
        })
        .ok_or(Error::EmptyOutput)
    }

    /// The label for this class, if the class id is in range
    pub fn label(&self) -> Option<Label> {
        Label::from_index(self.class_id)
    }
}

/// The JSON body returned to callers
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    /// The predicted label name
    pub prediction: String,

    /// Probability of the predicted label, rounded
    pub confidence: f64,
}

impl Prediction {
    /// Build a prediction, failing if the class id has no label
    pub fn strict(classification: &Classification, precision: u32) -> Result<Self> {
        let label = classification
            .label()
            .ok_or(Error::UnknownClass(classification.class_id))?;

        Ok(Self {
            prediction: label.name().to_string(),
            confidence: round_confidence(classification.confidence, precision),
        })
    }

    /// Build a prediction, reporting `Unknown` for class ids without a label
    pub fn lenient(classification: &Classification, precision: u32) -> Self {
        let prediction = classification
            .label()
            .map(|label| label.name())
            .unwrap_or(UNKNOWN_LABEL);

        Self {
            prediction: prediction.to_string(),
            confidence: round_confidence(classification.confidence, precision),
        }
    }
}

/// Round half to even at `decimals` places (at most `MAX_PRECISION`), clamped to `[0, 1]`
pub fn round_confidence(confidence: f32, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_PRECISION) as i32);
    let rounded = (f64::from(confidence) * scale).round_ties_even() / scale;

    rounded.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_argmax_picks_highest() {
        let c = Classification::from_probabilities(&[0.1, 0.05, 0.7, 0.1, 0.05]).unwrap();

        assert_eq!(c.class_id, 2);
        assert_eq!(c.confidence, 0.7);
        assert_eq!(c.label(), Some(Label::Depression));
    }

    #[test]
    fn test_argmax_first_wins_on_tie() {
        let c = Classification::from_probabilities(&[0.2, 0.4, 0.4, 0.0, 0.0]).unwrap();

        assert_eq!(c.class_id, 1);
    }

    #[test]
    fn test_argmax_skips_nan() {
        let c = Classification::from_probabilities(&[f32::NAN, 0.3, 0.7]).unwrap();

        assert_eq!(c.class_id, 2);
    }

    #[test]
    fn test_empty_output_is_an_error() {
        assert!(matches!(
            Classification::from_probabilities(&[]),
            Err(Error::EmptyOutput)
        ));
    }

    #[test]
    fn test_rounding_two_and_four_places() {
        assert_eq!(round_confidence(0.87654, 2), 0.88);
        assert_eq!(round_confidence(0.87654, 4), 0.8765);
        assert_eq!(round_confidence(0.5, 2), 0.5);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        assert_eq!(round_confidence(0.125, 2), 0.12);
        assert_eq!(round_confidence(0.375, 2), 0.38);
        assert_eq!(round_confidence(0.03125, 4), 0.0312);
    }

    #[test]
    fn test_huge_precision_is_capped() {
        let rounded = round_confidence(0.5, 400);

        assert!(!rounded.is_nan());
        assert_eq!(rounded, 0.5);
        assert_eq!(round_confidence(0.25, u32::MAX), 0.25);
    }

    #[test]
    fn test_rounding_stays_in_unit_interval() {
        assert_eq!(round_confidence(1.0, 4), 1.0);
        assert_eq!(round_confidence(0.99999, 4), 1.0);
        assert_eq!(round_confidence(0.0, 2), 0.0);
    }

    #[test]
    fn test_strict_rejects_out_of_range_class() {
        let c = Classification {
            class_id: 7,
            confidence: 0.9,
        };

        assert!(matches!(
            Prediction::strict(&c, 2),
            Err(Error::UnknownClass(7))
        ));
    }

    #[test]
    fn test_lenient_falls_back_to_unknown() {
        let c = Classification {
            class_id: 7,
            confidence: 0.9,
        };

        let prediction = Prediction::lenient(&c, 4);

        assert_eq!(prediction.prediction, "Unknown");
        assert_eq!(prediction.confidence, 0.9);
    }

    #[test]
    fn test_serialized_shape() {
        let c = Classification {
            class_id: 0,
            confidence: 0.91234,
        };

        let json = serde_json::to_value(Prediction::strict(&c, 2).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"prediction": "Anxiety", "confidence": 0.91})
        );
    }
}
