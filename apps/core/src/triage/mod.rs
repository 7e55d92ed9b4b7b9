//! # Triage Module
//!
//! Fast, support-facing analysis for Solace. Classifies user messages for
//! crisis risk and emotional tone BEFORE any response is generated.
//!
//! ## Components
//! - `crisis`: Crisis detection using weighted keyword matching
//! - `emotion`: Emotion classification wrapping an external model
//! - `model`: The injected emotion-ranking capability
//! - `semantic`: Embedding-based emotion ranking (local backend)
//! - `guidance`: Response tone guidance per emotion
//! - `packet`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod crisis;
pub mod emotion;
pub mod guidance;
pub mod model;
pub mod packet;
pub mod semantic;

// Re-export main types for convenience
pub use analyzer::SupportAnalyzer;
pub use crisis::{CrisisAssessment, CrisisDetector, KeywordMatch};
pub use emotion::{EmotionClassifier, EmotionReading};
pub use guidance::{emotion_context, ToneGuidance};
pub use model::{EmotionModel, EmotionScore};
pub use packet::TriagePacket;
pub use semantic::EmbeddingEmotionModel;
