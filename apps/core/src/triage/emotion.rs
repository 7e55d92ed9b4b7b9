//! Emotion Classification wrapping an external ranked-emotion model.
//!
//! Degrades to a neutral default whenever the model is unavailable or fails,
//! and independently flags crisis phrases in its output.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::model::{EmotionModel, EmotionScore};
use crate::error::ModelError;

/// Crisis indicator phrases checked by the classifier.
///
/// Maintained separately from the detector's weighted table; this list only
/// flags a boolean and carries no severity.
const CRISIS_INDICATORS: &[&str] = &[
    "kill myself",
    "kill me",
    "suicide",
    "suicidal",
    "want to die",
    "wanna die",
    "wish i was dead",
    "wish i were dead",
    "end my life",
    "end it all",
    "end my suffering",
    "no point living",
    "no reason to live",
    "better off dead",
    "harm myself",
    "hurt myself",
    "cutting myself",
    "self harm",
    "self-harm",
    "overdose",
    "poison myself",
    "hang myself",
    "slit wrists",
    "jump off",
    "throw myself",
    "crash my car",
    "dont want to live",
    "hopeless",
    "worthless",
    "meaningless",
    "cant take it anymore",
    "cant do this anymore",
    "nobody cares",
    "everyone would be better off",
    "no one loves me",
    "alone forever",
    "no point",
];

/// Input budget of the underlying model, in characters (not tokens)
const MAX_INPUT_CHARS: usize = 512;

/// Characters of text carried in the crisis warning log
const LOG_EXCERPT_CHARS: usize = 100;

/// Result of emotion classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionReading {
    /// Top-ranked emotion label
    pub primary_emotion: String,
    /// Confidence of the top-ranked label, rounded to 3 decimals
    pub confidence: f32,
    /// All returned emotions, strongest first
    pub ranked_emotions: Vec<EmotionScore>,
    /// Whether a crisis indicator phrase was found in the text
    pub is_crisis: bool,
}

/// Emotion classifier with graceful degradation.
///
/// `None` in the model slot means the backend failed to load; every call
/// then returns the neutral default reading.
pub struct EmotionClassifier {
    model: Option<Box<dyn EmotionModel>>,
}

impl EmotionClassifier {
    /// Create a classifier around an already-constructed model
    pub fn new(model: Box<dyn EmotionModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Run a fallible model constructor once, capturing failure.
    ///
    /// A failed load is logged and leaves the classifier in its unavailable
    /// state; it is never re-raised.
    pub fn load<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn EmotionModel>, ModelError>,
    {
        info!("Loading emotion classification model...");

        match load() {
            Ok(model) => {
                info!("Emotion classifier loaded successfully");
                Self { model: Some(model) }
            }
            Err(e) => {
                error!("Failed to load emotion classifier: {}", e);
                Self { model: None }
            }
        }
    }

    /// Create a classifier with no backend.
    ///
    /// Every reading is the neutral default.
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    /// Classify emotion from user text.
    ///
    /// Never fails: an unavailable model, a model error, and an empty
    /// prediction list all resolve to the neutral default reading.
    pub fn classify(&self, text: &str) -> EmotionReading {
        let model = match &self.model {
            Some(model) => model,
            None => return Self::default_reading(),
        };

        let predictions = match model.rank(truncate_chars(text, MAX_INPUT_CHARS)) {
            Ok(predictions) => predictions,
            Err(e) => {
                error!("Emotion classification error: {}", e);
                return Self::default_reading();
            }
        };

        let primary = match predictions.first() {
            Some(primary) => primary,
            None => return Self::default_reading(),
        };

        let is_crisis = self.check_crisis(text);
        if is_crisis {
            warn!(
                "CRISIS DETECTED in text: {}",
                truncate_chars(text, LOG_EXCERPT_CHARS)
            );
        }

        EmotionReading {
            primary_emotion: primary.label.clone(),
            confidence: round3(primary.confidence),
            ranked_emotions: predictions
                .iter()
                .map(|p| EmotionScore {
                    label: p.label.clone(),
                    confidence: round3(p.confidence),
                })
                .collect(),
            is_crisis,
        }
    }

    /// Check for crisis indicator phrases in text
    fn check_crisis(&self, text: &str) -> bool {
        let text_lower = text.to_lowercase();

        for indicator in CRISIS_INDICATORS {
            if text_lower.contains(indicator) {
                warn!("CRISIS INDICATOR DETECTED: '{}'", indicator);
                return true;
            }
        }

        false
    }

    /// The neutral default reading
    fn default_reading() -> EmotionReading {
        EmotionReading {
            primary_emotion: "neutral".to_string(),
            confidence: 0.0,
            ranked_emotions: vec![EmotionScore {
                label: "neutral".to_string(),
                confidence: 1.0,
            }],
            is_crisis: false,
        }
    }
}

/// Truncate to at most `max` characters without splitting a UTF-8 scalar
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Round to 3 decimal places
fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
