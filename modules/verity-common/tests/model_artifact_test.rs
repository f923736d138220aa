//! Classifier artifact tests: load JSON models from disk and run them
//! through the predictor.
//!
//! Run with: cargo test -p verity-common --test model_artifact_test

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use verity_common::{Classifier, Label, LinearTextModel, Predictor, VerityError};

const NEWS_MODEL: &str = r#"{
    "vectorizer": {
        "vocabulary": {
            "aliens": 0,
            "landed": 1,
            "moon": 2,
            "successfully": 3,
            "immortal": 4,
            "new york": 5
        },
        "idf": [1.0, 1.0, 1.0, 1.0, 1.5, 1.2],
        "ngram_range": [1, 2]
    },
    "classifier": {
        "coef": [-3.0, 0.0, 2.0, 2.0, -4.0, 0.5],
        "intercept": 0.0
    }
}"#;

fn write_model(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_model_from_disk() {
    let file = write_model(NEWS_MODEL);
    let model = LinearTextModel::load(file.path()).unwrap();

    assert_eq!(model.vectorizer.idf.len(), 6);
    assert_eq!(model.vectorizer.ngram_range, (1, 2));
    assert!(model.vectorizer.normalize);
    assert!(!model.vectorizer.sublinear_tf);
}

#[test]
fn loaded_model_separates_example_headlines() {
    let file = write_model(NEWS_MODEL);
    let model = Arc::new(LinearTextModel::load(file.path()).unwrap());
    let predictor = Predictor::new(model);

    let real = predictor
        .predict("India successfully landed Chandrayaan-3 on the Moon in 2023")
        .unwrap();
    assert_eq!(real.label, Label::Real);
    assert!(real.confidence > 0.5);

    let fake = predictor
        .predict("Aliens have landed in New York City")
        .unwrap();
    assert_eq!(fake.label, Label::Fake);

    let fake = predictor
        .predict("Scientists say drinking water makes you immortal")
        .unwrap();
    assert_eq!(fake.label, Label::Fake);
}

#[test]
fn model_output_is_a_probability_pair() {
    let model = LinearTextModel::from_json(NEWS_MODEL).unwrap();
    for text in ["", "moon", "aliens aliens aliens", "unknown words only"] {
        let p = model.predict_proba(text).unwrap();
        assert_eq!(p.len(), 2);
        assert!(p.iter().all(|x| (0.0..=1.0).contains(x)));
        assert!((p[0] + p[1] - 1.0).abs() < 1e-9);
    }
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LinearTextModel::load(dir.path().join("missing.json")).unwrap_err();
    match err {
        VerityError::ModelLoad(msg) => assert!(msg.contains("missing.json")),
        other => panic!("expected ModelLoad, got {other:?}"),
    }
}

#[test]
fn truncated_file_is_a_load_error() {
    let file = write_model(&NEWS_MODEL[..NEWS_MODEL.len() / 2]);
    assert!(matches!(
        LinearTextModel::load(file.path()),
        Err(VerityError::ModelLoad(_))
    ));
}

#[test]
fn oversized_ngram_range_is_a_load_error() {
    let file = write_model(
        r#"{
            "vectorizer": { "vocabulary": {}, "idf": [], "ngram_range": [1, 300000000] },
            "classifier": { "coef": [], "intercept": 0.0 }
        }"#,
    );
    match LinearTextModel::load(file.path()) {
        Err(VerityError::ModelLoad(msg)) => assert!(msg.contains("ngram_range")),
        other => panic!("expected ModelLoad, got {other:?}"),
    }
}
