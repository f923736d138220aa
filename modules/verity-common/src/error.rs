use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerityError {
    #[error("Please enter text")]
    EmptyInput,

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
