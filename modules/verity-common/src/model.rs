//! On-disk classifier artifact: a TF-IDF vectorizer feeding a logistic
//! regression, serialized as JSON.
//!
//! ```json
//! {
//!   "vectorizer": {
//!     "vocabulary": { "aliens": 0, "new york": 1 },
//!     "idf": [2.1, 1.4],
//!     "ngram_range": [1, 2],
//!     "sublinear_tf": false,
//!     "normalize": true
//!   },
//!   "classifier": { "coef": [-1.7, 0.3], "intercept": 0.05 }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::info;

use crate::classifier::Classifier;
use crate::error::VerityError;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Longest n-gram an artifact may ask for.
pub const MAX_NGRAM: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
    /// L2-normalize each document vector
    #[serde(default = "default_true")]
    pub normalize: bool,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

/// Linear text model: sparse TF-IDF features and a logistic link for the
/// real class. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearTextModel {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LogisticRegression,
}

impl LinearTextModel {
    /// Read and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VerityError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            VerityError::ModelLoad(format!("cannot read {}: {e}", path.display()))
        })?;
        let model = Self::from_json(&raw)?;

        info!(
            path = %path.display(),
            features = model.vectorizer.idf.len(),
            "Loaded classifier artifact"
        );

        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self, VerityError> {
        let model: Self = serde_json::from_str(raw)
            .map_err(|e| VerityError::ModelLoad(format!("malformed artifact: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), VerityError> {
        let v = &self.vectorizer;
        let c = &self.classifier;

        if v.idf.len() != c.coef.len() {
            return Err(VerityError::ModelLoad(format!(
                "idf has {} columns but coef has {}",
                v.idf.len(),
                c.coef.len()
            )));
        }

        let (min_n, max_n) = v.ngram_range;
        if min_n == 0 || min_n > max_n || max_n > MAX_NGRAM {
            return Err(VerityError::ModelLoad(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        if let Some((term, idx)) = v.vocabulary.iter().find(|(_, i)| **i >= v.idf.len()) {
            return Err(VerityError::ModelLoad(format!(
                "vocabulary term {term:?} points at column {idx}, only {} columns",
                v.idf.len()
            )));
        }

        let all_finite = v
            .idf
            .iter()
            .chain(c.coef.iter())
            .chain(std::iter::once(&c.intercept))
            .all(|w| w.is_finite());
        if !all_finite {
            return Err(VerityError::ModelLoad("non-finite weight".to_string()));
        }

        Ok(())
    }

    /// Sparse TF-IDF vector for a document, as (column, weight) pairs.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        let v = &self.vectorizer;
        let tokens: Vec<&str> = TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = v.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&idx) = v.vocabulary.get(&gram) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if v.sublinear_tf { 1.0 + count.ln() } else { count };
                (idx, tf * v.idf[idx])
            })
            .collect();

        features.sort_by_key(|(idx, _)| *idx);

        if v.normalize {
            let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in features.iter_mut() {
                    *w /= norm;
                }
            }
        }

        features
    }

    /// Probability that the text belongs to the real class.
    pub fn real_probability(&self, text: &str) -> f64 {
        let score = self
            .transform(text)
            .iter()
            .fold(self.classifier.intercept, |acc, (idx, w)| {
                acc + w * self.classifier.coef[*idx]
            });
        sigmoid(score)
    }
}

impl Classifier for LinearTextModel {
    fn predict_proba(&self, text: &str) -> Result<Vec<f64>, VerityError> {
        let real = self.real_probability(text);
        Ok(vec![1.0 - real, real])
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
