pub mod types;
pub mod normalize;
pub mod decision;
pub mod classifier;
pub mod model;
pub mod config;
pub mod error;

pub use types::*;
pub use normalize::*;
pub use decision::decide;
pub use classifier::{Classifier, Predictor};
pub use model::LinearTextModel;
pub use config::Config;
pub use error::VerityError;
