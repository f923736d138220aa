use std::sync::Arc;

use tracing::debug;

use crate::decision::decide;
use crate::error::VerityError;
use crate::normalize::{is_blank, normalize_text};
use crate::types::{Prediction, Probabilities};

/// A pre-trained binary text classifier.
///
/// Implementations are loaded once and shared read-only between requests.
/// The returned vector is `[p_fake, p_real]`.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, VerityError>;
}

/// Runs one submission through validation, normalization and the decision rule.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn predict(&self, input: &str) -> Result<Prediction, VerityError> {
        if is_blank(input) {
            return Err(VerityError::EmptyInput);
        }

        let normalized = normalize_text(input);
        let vector = self.classifier.predict_proba(&normalized)?;
        let probs = Probabilities::from_vector(&vector)?;
        let prediction = decide(probs);

        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            "Classified submission"
        );

        Ok(prediction)
    }
}
