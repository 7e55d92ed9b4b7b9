//! # Solace Backend Core
//!
//! Library core for a conversational mental-health support service.
//! Classifies user-submitted text for crisis risk and emotional tone and
//! produces either a scripted intervention message or emotion-guided
//! response metadata.
//!
//! The HTTP layer consuming this crate is out of scope, as is logging
//! configuration: the library emits `tracing` events and leaves subscriber
//! installation to the host process.

pub mod error;
pub mod triage;

pub use error::ModelError;
pub use triage::{
    emotion_context, CrisisAssessment, CrisisDetector, EmbeddingEmotionModel, EmotionClassifier,
    EmotionModel, EmotionReading, EmotionScore, SupportAnalyzer, ToneGuidance, TriagePacket,
};
