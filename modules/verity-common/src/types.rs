use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VerityError;

/// Allowed drift from 1.0 when checking that a probability pair sums to one.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Verdict for a piece of news text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Real => write!(f, "REAL"),
            Label::Fake => write!(f, "FAKE"),
        }
    }
}

/// Class probabilities as produced by a classifier.
///
/// Index 0 of the raw vector is the fake class, index 1 the real class,
/// matching the label encoding the model was trained with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities {
    pub fake: f64,
    pub real: f64,
}

impl Probabilities {
    pub fn from_vector(vector: &[f64]) -> Result<Self, VerityError> {
        let [fake, real] = vector else {
            return Err(VerityError::Classifier(format!(
                "expected 2 class probabilities, got {}",
                vector.len()
            )));
        };

        for p in [*fake, *real] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(VerityError::Classifier(format!(
                    "probability out of range: {p}"
                )));
            }
        }

        if (fake + real - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(VerityError::Classifier(format!(
                "probabilities do not sum to 1: {fake} + {real}"
            )));
        }

        Ok(Self {
            fake: *fake,
            real: *real,
        })
    }
}

/// Outcome of one classification request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    /// Probability of the winning class (0.0-1.0)
    pub confidence: f64,
}

impl Prediction {
    /// Confidence as a percentage with two decimals, e.g. `90.00%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}
