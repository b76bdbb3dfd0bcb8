// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Static emotional lexicon. Ten emotion labels placed in the 5-D
//! (valence, arousal, dominance, certainty, complexity) space, each with an
//! optional list of synonym tokens.
//!
//! Order is significant: token matching scans entries top to bottom and
//! the first hit wins, and the Markov transition matrix is indexed in the
//! same order.

use serde::{Deserialize, Serialize};

/// A point in the 5-D emotional space.
///
/// Valence, arousal and dominance lie in [-1, 1]; certainty and complexity
/// in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionPoint {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
    pub certainty: f64,
    pub complexity: f64,
}

impl EmotionPoint {
    /// Vector produced when no lexicon term matches.
    pub const NEUTRAL: EmotionPoint = EmotionPoint::new(0.0, 0.0, 0.0, 0.5, 0.5);

    pub const fn new(
        valence: f64,
        arousal: f64,
        dominance: f64,
        certainty: f64,
        complexity: f64,
    ) -> Self {
        Self {
            valence,
            arousal,
            dominance,
            certainty,
            complexity,
        }
    }

    pub fn from_array(a: [f64; 5]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4])
    }

    pub fn to_array(self) -> [f64; 5] {
        [
            self.valence,
            self.arousal,
            self.dominance,
            self.certainty,
            self.complexity,
        ]
    }

    pub fn dot(self, other: EmotionPoint) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance.
    pub fn distance(self, other: EmotionPoint) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Whether every component lies within its declared bound.
    pub fn in_bounds(self) -> bool {
        let bipolar = |x: f64| (-1.0..=1.0).contains(&x);
        let unipolar = |x: f64| (0.0..=1.0).contains(&x);
        bipolar(self.valence)
            && bipolar(self.arousal)
            && bipolar(self.dominance)
            && unipolar(self.certainty)
            && unipolar(self.complexity)
    }
}

/// One lexicon row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub label: &'static str,
    pub point: EmotionPoint,
    pub synonyms: &'static [&'static str],
}

impl LexiconEntry {
    /// Label contained in the token, or the token listed as a synonym.
    pub fn matches(&self, token: &str) -> bool {
        token.contains(self.label) || self.synonyms.contains(&token)
    }
}

pub static LEXICON: [LexiconEntry; 10] = [
    LexiconEntry {
        label: "alegria",
        point: EmotionPoint::new(0.8, 0.6, 0.4, 0.7, 0.3),
        synonyms: &["feliz", "content", "radiante", "jubiloso"],
    },
    LexiconEntry {
        label: "tristeza",
        point: EmotionPoint::new(-0.7, -0.3, -0.5, 0.6, 0.4),
        synonyms: &["triste", "deprimido", "melancólico", "desolado"],
    },
    LexiconEntry {
        label: "raiva",
        point: EmotionPoint::new(-0.6, 0.8, 0.7, 0.8, 0.5),
        synonyms: &["irritado", "furioso", "indignado", "bravo"],
    },
    LexiconEntry {
        label: "medo",
        point: EmotionPoint::new(-0.5, 0.7, -0.6, 0.4, 0.6),
        synonyms: &["assustado", "atemorizado", "apreensivo", "receoso"],
    },
    LexiconEntry {
        label: "nojo",
        point: EmotionPoint::new(-0.8, 0.3, 0.2, 0.9, 0.3),
        synonyms: &["repulsa", "aversão", "repugnância", "nojo"],
    },
    LexiconEntry {
        label: "surpresa",
        point: EmotionPoint::new(0.3, 0.9, 0.1, 0.2, 0.7),
        synonyms: &["surpreso", "espantado", "pasmo", "atônito"],
    },
    LexiconEntry {
        label: "gratidão",
        point: EmotionPoint::new(0.9, 0.4, 0.3, 0.8, 0.4),
        synonyms: &[],
    },
    LexiconEntry {
        label: "esperança",
        point: EmotionPoint::new(0.7, 0.5, 0.6, 0.5, 0.6),
        synonyms: &[],
    },
    LexiconEntry {
        label: "culpa",
        point: EmotionPoint::new(-0.6, 0.4, -0.3, 0.7, 0.7),
        synonyms: &[],
    },
    LexiconEntry {
        label: "vergonha",
        point: EmotionPoint::new(-0.8, 0.5, -0.8, 0.9, 0.6),
        synonyms: &[],
    },
];

/// Position of `label` in the lexicon.
pub fn index_of(label: &str) -> Option<usize> {
    LEXICON.iter().position(|e| e.label == label)
}

pub fn lookup(label: &str) -> Option<&'static LexiconEntry> {
    LEXICON.iter().find(|e| e.label == label)
}

/// First entry matching `token`, if any.
pub fn match_token(token: &str) -> Option<&'static LexiconEntry> {
    LEXICON.iter().find(|e| e.matches(token))
}
