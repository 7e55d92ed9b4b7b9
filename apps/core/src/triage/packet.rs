//! Triage Packet - Output structure for message triage.
//!
//! One serializable packet per analyzed message, suitable for a JSON
//! response body.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::crisis::CrisisAssessment;
use super::emotion::EmotionReading;
use super::guidance::ToneGuidance;

/// Complete packet from triage of one user message
#[derive(Debug, Clone, Serialize)]
pub struct TriagePacket {
    /// Original user message
    pub message: String,

    /// Crisis assessment from the keyword detector
    pub crisis: CrisisAssessment,

    /// Rendered intervention message, present when a crisis was detected
    pub crisis_message: Option<String>,

    /// Emotion reading from the classifier
    pub emotion: EmotionReading,

    /// Tone guidance for the primary emotion
    pub guidance: ToneGuidance,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of the triage
    pub timestamp: DateTime<Utc>,
}

impl TriagePacket {
    /// Whether either component flagged a crisis
    pub fn needs_intervention(&self) -> bool {
        self.crisis.is_crisis || self.emotion.is_crisis
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Emotion: {} ({:.0}%), Crisis: {} (severity {:.2}), Tone: {}",
            self.emotion.primary_emotion,
            self.emotion.confidence * 100.0,
            if self.crisis.is_crisis { "yes" } else { "no" },
            self.crisis.severity,
            self.guidance.tone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::guidance::emotion_context;

    fn sample_packet(is_crisis: bool) -> TriagePacket {
        TriagePacket {
            message: "test message".to_string(),
            crisis: CrisisAssessment {
                is_crisis,
                severity: if is_crisis { 1.0 } else { 0.0 },
                matched_keywords: vec![],
            },
            crisis_message: None,
            emotion: EmotionReading {
                primary_emotion: "sadness".to_string(),
                confidence: 0.75,
                ranked_emotions: vec![],
                is_crisis: false,
            },
            guidance: emotion_context("sadness"),
            processing_time_ms: 1,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_needs_intervention() {
        assert!(sample_packet(true).needs_intervention());
        assert!(!sample_packet(false).needs_intervention());
    }

    #[test]
    fn test_summary() {
        let summary = sample_packet(true).summary();

        assert!(summary.contains("Emotion: sadness"));
        assert!(summary.contains("Crisis: yes"));
        assert!(summary.contains("Tone: empathetic"));
    }
}
