//! Embedding-based emotion ranking using FastEmbed.
//!
//! Ranks emotions via cosine similarity between the input text and
//! per-emotion description templates, using the AllMiniLML6V2 model.
//! No fine-tuned emotion model required.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::PathBuf;
use tracing::{info, warn};

use super::model::{EmotionModel, EmotionScore};
use crate::error::ModelError;

/// Emotion description for semantic matching
struct EmotionTemplate {
    label: &'static str,
    descriptions: &'static [&'static str],
}

/// Templates for the seven labels of the reference emotion model
const EMOTION_TEMPLATES: &[EmotionTemplate] = &[
    EmotionTemplate {
        label: "anger",
        descriptions: &[
            "feeling angry furious or outraged",
            "this makes me so mad",
            "irritated and resentful",
        ],
    },
    EmotionTemplate {
        label: "disgust",
        descriptions: &[
            "feeling disgusted or repulsed",
            "that is gross and revolting",
        ],
    },
    EmotionTemplate {
        label: "fear",
        descriptions: &[
            "feeling scared afraid or terrified",
            "dread and panic about what might happen",
        ],
    },
    EmotionTemplate {
        label: "joy",
        descriptions: &[
            "feeling happy delighted or excited",
            "this is wonderful great news",
            "grateful and hopeful",
        ],
    },
    EmotionTemplate {
        label: "neutral",
        descriptions: &["a plain factual statement", "ordinary everyday conversation"],
    },
    EmotionTemplate {
        label: "sadness",
        descriptions: &[
            "feeling sad unhappy or heartbroken",
            "feeling down lonely and depressed",
            "i feel like crying",
        ],
    },
    EmotionTemplate {
        label: "surprise",
        descriptions: &[
            "feeling shocked astonished or amazed",
            "that was completely unexpected",
        ],
    },
];

/// Number of emotions returned per ranking
const TOP_K: usize = 3;

/// Emotion ranking model built on text embeddings
pub struct EmbeddingEmotionModel {
    model: TextEmbedding,
    label_embeddings: Vec<(&'static str, Vec<f32>)>,
}

impl EmbeddingEmotionModel {
    /// Load the embedding model and pre-compute label embeddings.
    ///
    /// `cache_dir` is where the model weights are cached between runs.
    pub fn try_new(cache_dir: PathBuf) -> Result<Self, ModelError> {
        let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
        options.show_download_progress = false;
        options.cache_dir = cache_dir;

        let model = TextEmbedding::try_new(options)
            .map_err(|e| ModelError::Load(format!("Failed to load embedding model: {}", e)))?;

        let mut this = Self {
            model,
            label_embeddings: Vec::new(),
        };
        this.precompute_label_embeddings();
        Ok(this)
    }

    /// Pre-compute one embedding per emotion template
    fn precompute_label_embeddings(&mut self) {
        info!("Pre-computing emotion label embeddings...");

        for template in EMOTION_TEMPLATES {
            let combined_text = template.descriptions.join(" ");

            match self.model.embed(vec![combined_text], None) {
                Ok(embeddings) if !embeddings.is_empty() => {
                    self.label_embeddings
                        .push((template.label, embeddings[0].clone()));
                }
                Ok(_) => warn!("Empty embedding for emotion '{}'", template.label),
                Err(e) => warn!("Failed to embed emotion '{}': {}", template.label, e),
            }
        }

        info!(
            "Pre-computed {} emotion embeddings",
            self.label_embeddings.len()
        );
    }
}

impl EmotionModel for EmbeddingEmotionModel {
    fn rank(&self, text: &str) -> Result<Vec<EmotionScore>, ModelError> {
        let embeddings = self.model.embed(vec![text.to_string()], None)?;
        let query_embedding = match embeddings.first() {
            Some(embedding) => embedding,
            None => return Ok(vec![]),
        };

        // Negative similarities carry no signal for a confidence score
        let mut scores: Vec<(&str, f32)> = self
            .label_embeddings
            .iter()
            .map(|(label, emb)| (*label, cosine_similarity(query_embedding, emb).max(0.0)))
            .collect();

        let total: f32 = scores.iter().map(|(_, score)| score).sum();
        if total == 0.0 {
            return Ok(vec![]);
        }

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.truncate(TOP_K);

        Ok(scores
            .into_iter()
            .map(|(label, score)| EmotionScore {
                label: label.to_string(),
                confidence: score / total,
            })
            .collect())
    }
}

/// Calculate cosine similarity between two vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);

        let c = vec![0.0, 1.0, 0.0];
        assert!((cosine_similarity(&a, &c) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_template_labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for template in EMOTION_TEMPLATES {
            assert!(seen.insert(template.label));
        }
    }

    #[test]
    fn test_model_creation_and_ranking() {
        // This test requires the model to be downloaded
        // In CI, this might be skipped
        let cache_dir = std::env::temp_dir().join("solace-embeddings");
        if let Ok(model) = EmbeddingEmotionModel::try_new(cache_dir) {
            assert_eq!(model.label_embeddings.len(), EMOTION_TEMPLATES.len());

            let ranked = model.rank("I am so happy today, this is great").unwrap();
            assert!(!ranked.is_empty());
            assert!(ranked.len() <= TOP_K);

            // Ranked descending with normalized confidences
            for pair in ranked.windows(2) {
                assert!(pair[0].confidence >= pair[1].confidence);
            }
            for score in &ranked {
                assert!((0.0..=1.0).contains(&score.confidence));
            }
        }
    }
}
