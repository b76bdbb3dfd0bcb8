// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Emotional vector engine: maps text onto the 5-D emotional space.
//!
//! Text is lowercased and split into word tokens. Each token is matched
//! against the lexicon (label substring or exact synonym, first entry
//! wins), matched points are averaged into a single vector, and the vector
//! is then described qualitatively, summarized by scalar metrics, and
//! compared to fixed reference points and to every lexicon entry.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::EmotionConfig;
use crate::error::Result;
use crate::lexicon::{self, EmotionPoint, LexiconEntry, LEXICON};
use crate::markov::{EmotionalFlow, TransitionMatrix};
use crate::qualitative::QualitativeAnalysis;
use crate::stats::std_dev;

/// Reference points for cosine similarity.
pub static REFERENCE_VECTORS: [(&str, EmotionPoint); 4] = [
    ("positive_calm", EmotionPoint::new(0.8, -0.8, 0.0, 0.7, 0.3)),
    ("negative_excited", EmotionPoint::new(-0.8, 0.8, 0.0, 0.6, 0.4)),
    ("neutral", EmotionPoint::new(0.0, 0.0, 0.0, 0.5, 0.5)),
    ("complex_mixed", EmotionPoint::new(0.0, 0.0, 0.0, 0.5, 0.9)),
];

/// An analyzed emotional vector with its creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalVector {
    #[serde(flatten)]
    pub point: EmotionPoint,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalMetrics {
    /// Euclidean norm of the vector.
    pub intensity: f64,
    /// The valence component.
    pub polarity: f64,
    /// `1 - std` across the five components.
    pub stability: f64,
    /// Distinct matched emotions over matched tokens.
    pub diversity: f64,
    /// `1 - certainty`.
    pub ambiguity: f64,
    pub complexity_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Smooth,
    Moderate,
    Abrupt,
}

/// Movement between two consecutively matched emotions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTransition {
    pub from: String,
    pub to: String,
    pub distance: f64,
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Index of `from` in the matched sequence.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosestEmotion {
    pub label: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathematicalAnalysis {
    pub vector_norm: f64,
    /// Cosine similarity against each of [`REFERENCE_VECTORS`].
    pub reference_similarities: BTreeMap<String, f64>,
    /// Nearest lexicon entries, ascending distance.
    pub closest_emotions: Vec<ClosestEmotion>,
    /// (valence, arousal)
    pub projection_2d: [f64; 2],
    pub dimensionality: usize,
    pub coordinates: [f64; 5],
}

/// Full result of [`analyze_text_emotion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    pub text: String,
    pub emotional_vector: EmotionalVector,
    pub qualitative_analysis: QualitativeAnalysis,
    /// Matching token count per lexicon label.
    pub detected_emotions: BTreeMap<String, usize>,
    /// Matched labels in token order.
    pub emotion_sequence: Vec<String>,
    pub emotional_metrics: EmotionalMetrics,
    pub transitions: Vec<EmotionTransition>,
    pub mathematical_analysis: MathematicalAnalysis,
    pub timestamp: DateTime<Utc>,
}

/// Lowercase word tokens: maximal runs of alphanumerics or `_`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Lexicon entries matched by `text`, one per matching token, token order.
pub fn match_emotions(text: &str) -> Vec<&'static LexiconEntry> {
    tokenize(text)
        .iter()
        .filter_map(|token| lexicon::match_token(token))
        .collect()
}

/// Mean of the matched points, or the neutral point when nothing matched.
pub fn mean_point(matches: &[&LexiconEntry]) -> EmotionPoint {
    if matches.is_empty() {
        return EmotionPoint::NEUTRAL;
    }
    let mut sum = [0.0f64; 5];
    for entry in matches {
        for (acc, x) in sum.iter_mut().zip(entry.point.to_array()) {
            *acc += x;
        }
    }
    let n = matches.len() as f64;
    EmotionPoint::from_array(sum.map(|s| s / n))
}

/// Cosine similarity with a small denominator guard.
pub fn cosine_similarity(a: EmotionPoint, b: EmotionPoint) -> f64 {
    a.dot(b) / (a.norm() * b.norm() + 1e-10)
}

/// Text-to-emotion engine with a precomputed Markov transition matrix.
#[derive(Debug, Clone)]
pub struct EmotionalBridge {
    config: EmotionConfig,
    transitions: TransitionMatrix,
}

static SHARED: Lazy<EmotionalBridge> = Lazy::new(|| EmotionalBridge::new(EmotionConfig::default()));

impl Default for EmotionalBridge {
    fn default() -> Self {
        Self::new(EmotionConfig::default())
    }
}

impl EmotionalBridge {
    /// Build the engine and its transition matrix. An invalid config (see
    /// [`EmotionConfig::validate`]) is logged, not rejected; a
    /// `self_transition` outside `[0, 1)` gives rows that are not
    /// probability distributions.
    pub fn new(config: EmotionConfig) -> Self {
        let issues = config.validate();
        if !issues.is_empty() {
            tracing::warn!(?issues, "emotional bridge built from an invalid config");
        }
        let transitions = TransitionMatrix::from_lexicon(config.self_transition);
        tracing::debug!(
            states = transitions.len(),
            self_transition = config.self_transition,
            "transition matrix built"
        );
        Self {
            config,
            transitions,
        }
    }

    /// Process-wide engine with the default configuration, built on first use.
    pub fn shared() -> &'static EmotionalBridge {
        &SHARED
    }

    pub fn config(&self) -> &EmotionConfig {
        &self.config
    }

    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    /// Analyze `text`, stamped with the current time.
    pub fn analyze(&self, text: &str) -> EmotionalAnalysis {
        self.analyze_at(text, Utc::now())
    }

    /// Analyze `text` with an explicit timestamp. Pure in both arguments.
    pub fn analyze_at(&self, text: &str, timestamp: DateTime<Utc>) -> EmotionalAnalysis {
        let matches = match_emotions(text);
        let point = mean_point(&matches);

        let mut detected_emotions = BTreeMap::new();
        for entry in &matches {
            *detected_emotions.entry(entry.label.to_string()).or_insert(0) += 1;
        }

        let emotional_metrics = self.metrics(point, &matches, detected_emotions.len());
        let transitions = self.detect_transitions(&matches);
        let mathematical_analysis = self.mathematical_analysis(point);

        tracing::debug!(
            tokens_matched = matches.len(),
            distinct = detected_emotions.len(),
            valence = point.valence,
            arousal = point.arousal,
            "text analyzed"
        );

        EmotionalAnalysis {
            text: text.to_string(),
            emotional_vector: EmotionalVector { point, timestamp },
            qualitative_analysis: QualitativeAnalysis::from_point(point),
            detected_emotions,
            emotion_sequence: matches.iter().map(|e| e.label.to_string()).collect(),
            emotional_metrics,
            transitions,
            mathematical_analysis,
            timestamp,
        }
    }

    /// Project the most likely emotion sequence from `label`.
    ///
    /// Fails with [`AttuneError::UnknownLabel`](crate::error::AttuneError::UnknownLabel)
    /// if `label` is not in the lexicon.
    pub fn predict_flow(&self, label: &str, steps: usize) -> Result<EmotionalFlow<'_>> {
        EmotionalFlow::new(&self.transitions, label, steps)
    }

    fn metrics(
        &self,
        point: EmotionPoint,
        matches: &[&LexiconEntry],
        distinct: usize,
    ) -> EmotionalMetrics {
        EmotionalMetrics {
            intensity: point.norm(),
            polarity: point.valence,
            stability: 1.0 - std_dev(&point.to_array()),
            diversity: distinct as f64 / matches.len().max(1) as f64,
            ambiguity: 1.0 - point.certainty,
            complexity_score: point.complexity,
        }
    }

    fn classify_transition(&self, distance: f64) -> TransitionKind {
        if distance < self.config.smooth_threshold {
            TransitionKind::Smooth
        } else if distance < self.config.abrupt_threshold {
            TransitionKind::Moderate
        } else {
            TransitionKind::Abrupt
        }
    }

    fn detect_transitions(&self, matches: &[&LexiconEntry]) -> Vec<EmotionTransition> {
        matches
            .windows(2)
            .enumerate()
            .map(|(position, pair)| {
                let distance = pair[0].point.distance(pair[1].point);
                EmotionTransition {
                    from: pair[0].label.to_string(),
                    to: pair[1].label.to_string(),
                    distance,
                    kind: self.classify_transition(distance),
                    position,
                }
            })
            .collect()
    }

    fn mathematical_analysis(&self, point: EmotionPoint) -> MathematicalAnalysis {
        let reference_similarities = REFERENCE_VECTORS
            .iter()
            .map(|(name, reference)| (name.to_string(), cosine_similarity(point, *reference)))
            .collect();

        let mut closest_emotions: Vec<ClosestEmotion> = LEXICON
            .iter()
            .map(|e| ClosestEmotion {
                label: e.label.to_string(),
                distance: point.distance(e.point),
            })
            .collect();
        closest_emotions.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        closest_emotions.truncate(self.config.closest_count);

        MathematicalAnalysis {
            vector_norm: point.norm(),
            reference_similarities,
            closest_emotions,
            projection_2d: [point.valence, point.arousal],
            dimensionality: 5,
            coordinates: point.to_array(),
        }
    }
}

/// Analyze `text` with the shared default engine.
pub fn analyze_text_emotion(text: &str) -> EmotionalAnalysis {
    EmotionalBridge::shared().analyze(text)
}

/// Project `steps` steps from `label` with the shared default engine.
pub fn predict_emotional_flow(label: &str, steps: usize) -> Result<EmotionalFlow<'static>> {
    EmotionalBridge::shared().predict_flow(label, steps)
}
