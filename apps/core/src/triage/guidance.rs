//! Response tone guidance keyed by emotion label.
//!
//! Static lookup consumed by the response-generation layer; unknown labels
//! fall back to the neutral entry.

use serde::Serialize;

/// Response-style guidance for an emotion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneGuidance {
    /// Overall tone to adopt
    pub tone: &'static str,
    /// Conversational approach
    pub approach: &'static str,
    /// Keywords worth weaving into the response
    pub suggested_keywords: &'static [&'static str],
}

/// Fallback guidance for unknown labels
const NEUTRAL_GUIDANCE: ToneGuidance = ToneGuidance {
    tone: "professional",
    approach: "informational",
    suggested_keywords: &["help", "suggest", "available"],
};

/// Guidance table; `neutral` doubles as the fallback entry
const EMOTION_CONTEXT: &[(&str, ToneGuidance)] = &[
    (
        "sadness",
        ToneGuidance {
            tone: "empathetic",
            approach: "validation and support",
            suggested_keywords: &["understand", "valid", "support", "help"],
        },
    ),
    (
        "anxiety",
        ToneGuidance {
            tone: "calming",
            approach: "grounding and reassurance",
            suggested_keywords: &["calm", "manage", "tools", "control"],
        },
    ),
    (
        "anger",
        ToneGuidance {
            tone: "non-judgmental",
            approach: "acknowledgment and channeling",
            suggested_keywords: &["understand", "valid", "express", "move forward"],
        },
    ),
    (
        "fear",
        ToneGuidance {
            tone: "reassuring",
            approach: "grounding and support",
            suggested_keywords: &["safe", "support", "manageable", "together"],
        },
    ),
    (
        "joy",
        ToneGuidance {
            tone: "positive",
            approach: "encouragement",
            suggested_keywords: &["great", "celebrate", "continue"],
        },
    ),
    ("neutral", NEUTRAL_GUIDANCE),
];

/// Get response guidance for an emotion label.
///
/// Pure lookup with no side effects; unknown labels return the neutral entry.
pub fn emotion_context(emotion: &str) -> ToneGuidance {
    EMOTION_CONTEXT
        .iter()
        .find(|(label, _)| *label == emotion)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(NEUTRAL_GUIDANCE)
}
