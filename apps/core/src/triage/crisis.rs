//! Crisis Detection using weighted keyword matching.
//!
//! Scans user text for crisis phrases carrying per-phrase severity weights.
//! No ML model required - pure substring matching.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Crisis phrases with severity weights (0.0 - 1.0).
///
/// Matching is substring-based on lowercased input: no tokenization and no
/// word-boundary checks, so a phrase also matches inside a longer word.
const CRISIS_KEYWORDS: &[(&str, f32)] = &[
    ("end my life", 1.0),
    ("kill myself", 1.0),
    ("kill me", 1.0),
    ("suicide", 1.0),
    ("suicidal", 1.0),
    ("want to die", 1.0),
    ("wanna die", 1.0),
    ("wish i was dead", 1.0),
    ("wish i were dead", 1.0),
    ("end it all", 1.0),
    ("end my suffering", 1.0),
    ("no point living", 1.0),
    ("no reason to live", 1.0),
    ("better off dead", 1.0),
    ("harm myself", 1.0),
    ("hurt myself", 1.0),
    ("cutting myself", 1.0),
    ("self harm", 1.0),
    ("self-harm", 1.0),
    ("overdose", 1.0),
    ("poison myself", 1.0),
    ("hang myself", 1.0),
    ("slit wrists", 1.0),
    ("jump off", 1.0),
    ("throw myself", 1.0),
    ("crash my car", 1.0),
    ("dont want to live", 1.0),
    ("hopeless", 0.8),
    ("worthless", 0.8),
    ("meaningless", 0.8),
    ("cant take it anymore", 0.8),
    ("cant do this anymore", 0.8),
    ("nobody cares", 0.75),
    ("everyone would be better off", 0.9),
    ("no one loves me", 0.75),
    ("alone forever", 0.7),
    ("no point", 0.8),
];

/// Severity at or above which text is treated as a crisis
const SEVERITY_THRESHOLD: f32 = 0.70;

/// Boost applied to severity when sentiment is very negative
const SENTIMENT_BOOST: f32 = 0.1;

/// Sentiment score below which the boost applies
const SENTIMENT_FLOOR: f32 = -0.7;

/// Fixed body of the crisis message: preamble, resources, closing
const CRISIS_RESOURCES: &str = "\
I hear you. What you're feeling is real and important. You don't have to face this alone.

IMMEDIATE HELP AVAILABLE - REACH OUT NOW:

National Suicide Prevention Lifeline: 988
  Available 24/7 - Free & Confidential

Crisis Text Line: Text \"HELLO\" to 741741
  Text-based support available 24/7

Emergency Services: 911
  If in immediate danger, call 911 or go to the nearest ER

International Crisis Lines:
  UK: 116 123 (Samaritans)
  Australia: 1300 659 467 (Lifeline)
  Canada: 1-833-456-4566

Your life has value. These feelings are temporary. Professional support works.
I'm here to listen. Please reach out to one of these resources.
";

/// A crisis phrase found in user text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// The matched phrase
    pub keyword: String,
    /// Severity weight of the phrase (0.0 - 1.0)
    pub weight: f32,
}

/// Result of crisis detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisAssessment {
    /// Whether severity crossed the crisis threshold
    pub is_crisis: bool,
    /// Maximum weight among matched phrases (0.0 - 1.0)
    pub severity: f32,
    /// All phrases that matched, in table order
    pub matched_keywords: Vec<KeywordMatch>,
}

impl CrisisAssessment {
    fn none() -> Self {
        Self {
            is_crisis: false,
            severity: 0.0,
            matched_keywords: vec![],
        }
    }
}

/// Crisis detector over the weighted keyword table
pub struct CrisisDetector {
    severity_threshold: f32,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    /// Create a new crisis detector with the default threshold
    pub fn new() -> Self {
        Self {
            severity_threshold: SEVERITY_THRESHOLD,
        }
    }

    /// Detect crisis indicators in user text.
    ///
    /// `sentiment_score` is an externally computed score in [-1, 1]; very
    /// negative sentiment boosts the severity of an existing match by 0.1,
    /// clamped to 1.0. Empty text yields the zero result. This method never
    /// fails for any input.
    pub fn detect(&self, text: &str, sentiment_score: Option<f32>) -> CrisisAssessment {
        if text.is_empty() {
            return CrisisAssessment::none();
        }

        let text_lower = text.to_lowercase();
        let mut matched_keywords = Vec::new();
        let mut severity = 0.0f32;

        for (keyword, weight) in CRISIS_KEYWORDS {
            if text_lower.contains(keyword) {
                warn!("Crisis keyword found: '{}' (severity: {})", keyword, weight);
                matched_keywords.push(KeywordMatch {
                    keyword: (*keyword).to_string(),
                    weight: *weight,
                });
                severity = severity.max(*weight);
            }
        }

        if let Some(score) = sentiment_score {
            if score < SENTIMENT_FLOOR && !matched_keywords.is_empty() {
                severity = (severity + SENTIMENT_BOOST).min(1.0);
            }
        }

        CrisisAssessment {
            is_crisis: severity >= self.severity_threshold,
            severity,
            matched_keywords,
        }
    }

    /// Render the crisis intervention message for a given severity.
    ///
    /// Only the urgency banner varies with severity; the resources block is
    /// fixed. Band boundaries are inclusive on the lower bound.
    pub fn render_crisis_message(&self, severity: f32) -> String {
        let urgency = if severity >= 0.95 {
            "IMMEDIATE CRISIS - EMERGENCY SUPPORT NEEDED"
        } else if severity >= 0.85 {
            "URGENT CRISIS - IMMEDIATE SUPPORT RECOMMENDED"
        } else {
            "CRISIS SUPPORT AVAILABLE"
        };

        format!("{}\n\n{}", urgency, CRISIS_RESOURCES)
    }

    /// Compose detection and rendering.
    ///
    /// Returns the rendered intervention message when a crisis is detected.
    pub fn crisis_response(&self, text: &str, sentiment_score: Option<f32>) -> Option<String> {
        let assessment = self.detect(text, sentiment_score);

        if assessment.is_crisis {
            Some(self.render_crisis_message(assessment.severity))
        } else {
            None
        }
    }
}
