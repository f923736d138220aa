use crate::types::{Label, Prediction, Probabilities};

/// Pick the label with the larger class probability.
/// REAL only when the real-class probability strictly wins; ties go to FAKE.
pub fn decide(probs: Probabilities) -> Prediction {
    if probs.real > probs.fake {
        Prediction {
            label: Label::Real,
            confidence: probs.real,
        }
    } else {
        Prediction {
            label: Label::Fake,
            confidence: probs.fake,
        }
    }
}
