use thiserror::Error;

/// Errors from the external emotion-ranking capability.
///
/// These never cross the classifier boundary outward: `EmotionClassifier`
/// converts every failure into its neutral default reading.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The model failed to load or initialize.
    #[error("Model load error: {0}")]
    Load(String),

    /// The model failed during inference.
    #[error("Inference error: {0}")]
    Inference(String),
}

impl From<fastembed::Error> for ModelError {
    fn from(err: fastembed::Error) -> Self {
        ModelError::Inference(format!("Embedding error: {}", err))
    }
}
