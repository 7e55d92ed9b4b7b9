//! External emotion-ranking capability.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One emotion label with its confidence score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label (e.g. "sadness", "joy")
    pub label: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
}

/// Defines the public interface for an emotion-ranking model.
///
/// This trait abstracts the specific implementation of the model, allowing
/// different backends (local embeddings, remote inference) to be used
/// interchangeably, and lets tests inject a deterministic stub. Calls are
/// synchronous; a host wrapping this in a concurrent server owns request
/// timeouts and the reentrancy of the concrete backend.
pub trait EmotionModel: Send + Sync {
    /// Rank emotions for a text, strongest first.
    ///
    /// Returns up to the backend's top-k entries; an empty list means the
    /// model could not produce a prediction.
    fn rank(&self, text: &str) -> Result<Vec<EmotionScore>, ModelError>;
}
