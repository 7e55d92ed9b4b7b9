//! Support Analyzer - Main orchestrator for message triage.
//!
//! Runs crisis detection and emotion classification independently on the
//! same input; neither component sees the other's output. The caller (API
//! layer) decides which result to surface.

use chrono::Utc;
use std::time::Instant;

use super::crisis::CrisisDetector;
use super::emotion::EmotionClassifier;
use super::guidance;
use super::packet::TriagePacket;

/// Orchestrates the triage components over one user message
pub struct SupportAnalyzer {
    crisis_detector: CrisisDetector,
    emotion_classifier: EmotionClassifier,
}

impl SupportAnalyzer {
    /// Create an analyzer around an emotion classifier.
    ///
    /// The classifier carries its own availability state; the crisis
    /// detector is always available.
    pub fn new(emotion_classifier: EmotionClassifier) -> Self {
        Self {
            crisis_detector: CrisisDetector::new(),
            emotion_classifier,
        }
    }

    /// Triage a user message and produce a packet.
    ///
    /// `sentiment_score` is an optional externally computed score in [-1, 1],
    /// forwarded to the crisis detector.
    pub fn analyze(&self, message: &str, sentiment_score: Option<f32>) -> TriagePacket {
        let start = Instant::now();

        let crisis = self.crisis_detector.detect(message, sentiment_score);
        let crisis_message = if crisis.is_crisis {
            Some(self.crisis_detector.render_crisis_message(crisis.severity))
        } else {
            None
        };

        let emotion = self.emotion_classifier.classify(message);
        let guidance = guidance::emotion_context(&emotion.primary_emotion);

        TriagePacket {
            message: message.to_string(),
            crisis,
            crisis_message,
            emotion,
            guidance,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::triage::model::{EmotionModel, EmotionScore};

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("solace_core=warn")
            .try_init();
    }

    struct StubModel(Vec<EmotionScore>);

    impl EmotionModel for StubModel {
        fn rank(&self, _text: &str) -> Result<Vec<EmotionScore>, ModelError> {
            Ok(self.0.clone())
        }
    }

    struct FailingModel;

    impl EmotionModel for FailingModel {
        fn rank(&self, _text: &str) -> Result<Vec<EmotionScore>, ModelError> {
            Err(ModelError::Inference("injected fault".to_string()))
        }
    }

    fn analyzer_with(predictions: Vec<(&str, f32)>) -> SupportAnalyzer {
        let scores = predictions
            .into_iter()
            .map(|(label, confidence)| EmotionScore {
                label: label.to_string(),
                confidence,
            })
            .collect();
        SupportAnalyzer::new(EmotionClassifier::new(Box::new(StubModel(scores))))
    }

    #[test]
    fn test_crisis_message_rendered_on_crisis() {
        init_logging();
        let analyzer = analyzer_with(vec![("sadness", 0.9)]);

        let packet = analyzer.analyze("I want to end my life", None);

        assert!(packet.crisis.is_crisis);
        assert_eq!(packet.crisis.severity, 1.0);
        let message = packet.crisis_message.as_deref().expect("crisis message");
        assert!(message.contains("988"));
        assert!(message.contains("741741"));
        assert!(packet.needs_intervention());
    }

    #[test]
    fn test_no_crisis_message_for_calm_text() {
        let analyzer = analyzer_with(vec![("joy", 0.8)]);

        let packet = analyzer.analyze("What a beautiful morning", None);

        assert!(!packet.crisis.is_crisis);
        assert!(packet.crisis_message.is_none());
        assert_eq!(packet.guidance.tone, "positive");
    }

    #[test]
    fn test_components_are_independent() {
        // Emotion backend fails, crisis detection still works
        let analyzer = SupportAnalyzer::new(EmotionClassifier::new(Box::new(FailingModel)));

        let packet = analyzer.analyze("I feel suicidal", Some(-0.9));

        assert!(packet.crisis.is_crisis);
        assert_eq!(packet.emotion.primary_emotion, "neutral");
        assert_eq!(packet.guidance.tone, "professional");
    }

    #[test]
    fn test_guidance_follows_primary_emotion() {
        let analyzer = analyzer_with(vec![("fear", 0.7), ("sadness", 0.2)]);

        let packet = analyzer.analyze("I'm worried about tomorrow", None);

        assert_eq!(packet.emotion.primary_emotion, "fear");
        assert_eq!(packet.guidance.tone, "reassuring");
        assert_eq!(packet.guidance.approach, "grounding and support");
    }

    #[test]
    fn test_unknown_emotion_label_gets_neutral_guidance() {
        let analyzer = analyzer_with(vec![("surprise", 0.9)]);

        let packet = analyzer.analyze("wow, really?", None);

        assert_eq!(packet.emotion.primary_emotion, "surprise");
        assert_eq!(packet.guidance.tone, "professional");
    }

    #[test]
    fn test_empty_message() {
        let analyzer = analyzer_with(vec![("neutral", 1.0)]);

        let packet = analyzer.analyze("", None);

        assert!(!packet.crisis.is_crisis);
        assert!(packet.crisis_message.is_none());
        assert!(packet.message.is_empty());
    }

    #[test]
    fn test_packet_serializes_to_json() {
        let analyzer = analyzer_with(vec![("sadness", 0.91234), ("fear", 0.05)]);

        let packet = analyzer.analyze("I feel hopeless", Some(-0.9));
        let json = serde_json::to_value(&packet).expect("packet serializes");

        assert_eq!(json["crisis"]["is_crisis"], true);
        assert_eq!(
            json["crisis"]["matched_keywords"][0]["keyword"],
            "hopeless"
        );
        assert_eq!(json["emotion"]["primary_emotion"], "sadness");
        assert_eq!(json["emotion"]["is_crisis"], true);
        assert_eq!(json["guidance"]["tone"], "empathetic");
        assert!(json["crisis_message"].as_str().unwrap().contains("988"));
    }
}
