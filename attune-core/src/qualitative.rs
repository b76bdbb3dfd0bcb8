// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Qualitative description of an emotional vector: per-dimension bands,
//! the dominant dimension, and an overall valence/arousal quadrant label.

use serde::{Deserialize, Serialize};

use crate::lexicon::EmotionPoint;

/// The five axes of the emotional space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Valence,
    Arousal,
    Dominance,
    Certainty,
    Complexity,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Self::Valence,
        Self::Arousal,
        Self::Dominance,
        Self::Certainty,
        Self::Complexity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Valence => "valence",
            Self::Arousal => "arousal",
            Self::Dominance => "dominance",
            Self::Certainty => "certainty",
            Self::Complexity => "complexity",
        }
    }

    pub fn value(self, point: EmotionPoint) -> f64 {
        match self {
            Self::Valence => point.valence,
            Self::Arousal => point.arousal,
            Self::Dominance => point.dominance,
            Self::Certainty => point.certainty,
            Self::Complexity => point.complexity,
        }
    }

    /// Magnitude used to rank dimensions: absolute value on the bipolar
    /// axes, raw value on the unipolar ones.
    pub fn salience(self, point: EmotionPoint) -> f64 {
        let v = self.value(point);
        match self {
            Self::Valence | Self::Arousal | Self::Dominance => v.abs(),
            Self::Certainty | Self::Complexity => v,
        }
    }

    /// Band label for `value` on this axis.
    pub fn describe(self, value: f64) -> &'static str {
        // Bipolar axes band at ±0.3 / ±0.6, unipolar at 0.2 steps.
        let labels: [&'static str; 5] = match self {
            Self::Valence => [
                "very positive",
                "positive",
                "neutral",
                "negative",
                "very negative",
            ],
            Self::Arousal => [
                "very excited/active",
                "excited/active",
                "neutral/calm",
                "calm/passive",
                "very calm/passive",
            ],
            Self::Dominance => [
                "very dominant/in control",
                "dominant/in control",
                "neutral/balanced",
                "submissive/little control",
                "very submissive/no control",
            ],
            Self::Certainty => [
                "very certain/defined",
                "certain/defined",
                "moderately certain",
                "uncertain/ambiguous",
                "very uncertain/confused",
            ],
            Self::Complexity => [
                "very complex/nuanced",
                "complex/detailed",
                "moderately complex",
                "simple/direct",
                "very simple/basic",
            ],
        };
        let thresholds: [f64; 4] = match self {
            Self::Valence | Self::Arousal | Self::Dominance => [0.6, 0.3, -0.3, -0.6],
            Self::Certainty | Self::Complexity => [0.8, 0.6, 0.4, 0.2],
        };
        let band = thresholds
            .iter()
            .position(|&t| value > t)
            .unwrap_or(thresholds.len());
        labels[band]
    }
}

/// Valence/arousal quadrant classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallState {
    /// High valence + high arousal
    Euphoric,
    /// High valence + low arousal
    Serene,
    /// Low valence + high arousal
    Distressed,
    /// Low valence + low arousal
    Depressed,
    /// Valence and arousal both near zero
    Neutral,
    Mixed,
}

impl OverallState {
    pub fn classify(point: EmotionPoint) -> Self {
        let (v, a) = (point.valence, point.arousal);
        if v > 0.5 && a > 0.5 {
            Self::Euphoric
        } else if v > 0.5 && a < -0.5 {
            Self::Serene
        } else if v < -0.5 && a > 0.5 {
            Self::Distressed
        } else if v < -0.5 && a < -0.5 {
            Self::Depressed
        } else if v.abs() < 0.3 && a.abs() < 0.3 {
            Self::Neutral
        } else {
            Self::Mixed
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Euphoric => "Euphoric/Energetic",
            Self::Serene => "Serene/Content",
            Self::Distressed => "Distressed/Anxious",
            Self::Depressed => "Depressed/Lethargic",
            Self::Neutral => "Neutral/Balanced",
            Self::Mixed => "Mixed/Complex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeAnalysis {
    pub valence: String,
    pub arousal: String,
    pub dominance: String,
    pub certainty: String,
    pub complexity: String,
    pub dominant_dimension: Dimension,
    pub dominant_description: String,
    pub overall_state: String,
}

impl QualitativeAnalysis {
    pub fn from_point(point: EmotionPoint) -> Self {
        let describe = |d: Dimension| d.describe(d.value(point)).to_string();

        // First maximum wins on ties.
        let mut dominant = Dimension::Valence;
        for d in Dimension::ALL.into_iter().skip(1) {
            if d.salience(point) > dominant.salience(point) {
                dominant = d;
            }
        }

        Self {
            valence: describe(Dimension::Valence),
            arousal: describe(Dimension::Arousal),
            dominance: describe(Dimension::Dominance),
            certainty: describe(Dimension::Certainty),
            complexity: describe(Dimension::Complexity),
            dominant_dimension: dominant,
            dominant_description: describe(dominant),
            overall_state: OverallState::classify(point).name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valence_bands() {
        let d = Dimension::Valence;
        assert_eq!(d.describe(0.9), "very positive");
        assert_eq!(d.describe(0.6), "positive");
        assert_eq!(d.describe(0.31), "positive");
        assert_eq!(d.describe(0.3), "neutral");
        assert_eq!(d.describe(0.0), "neutral");
        assert_eq!(d.describe(-0.3), "negative");
        assert_eq!(d.describe(-0.6), "very negative");
        assert_eq!(d.describe(-1.0), "very negative");
    }

    #[test]
    fn test_certainty_bands() {
        let d = Dimension::Certainty;
        assert_eq!(d.describe(0.9), "very certain/defined");
        assert_eq!(d.describe(0.7), "certain/defined");
        assert_eq!(d.describe(0.5), "moderately certain");
        assert_eq!(d.describe(0.3), "uncertain/ambiguous");
        assert_eq!(d.describe(0.2), "very uncertain/confused");
    }

    #[test]
    fn test_other_axes() {
        assert_eq!(Dimension::Arousal.describe(-0.4), "calm/passive");
        assert_eq!(Dimension::Dominance.describe(0.7), "very dominant/in control");
        assert_eq!(Dimension::Complexity.describe(0.5), "moderately complex");
    }

    #[test]
    fn test_overall_quadrants() {
        let p = |v, a| EmotionPoint::new(v, a, 0.0, 0.5, 0.5);
        assert_eq!(OverallState::classify(p(0.8, 0.6)), OverallState::Euphoric);
        assert_eq!(OverallState::classify(p(0.8, -0.6)), OverallState::Serene);
        assert_eq!(OverallState::classify(p(-0.8, 0.6)), OverallState::Distressed);
        assert_eq!(OverallState::classify(p(-0.8, -0.6)), OverallState::Depressed);
        assert_eq!(OverallState::classify(p(0.1, -0.2)), OverallState::Neutral);
        assert_eq!(OverallState::classify(p(0.4, 0.0)), OverallState::Mixed);
        assert_eq!(OverallState::classify(p(0.5, 0.9)), OverallState::Mixed);
    }

    #[test]
    fn test_neutral_point_description() {
        let q = QualitativeAnalysis::from_point(EmotionPoint::NEUTRAL);
        assert_eq!(q.valence, "neutral");
        assert_eq!(q.arousal, "neutral/calm");
        assert_eq!(q.dominance, "neutral/balanced");
        assert_eq!(q.certainty, "moderately certain");
        assert_eq!(q.complexity, "moderately complex");
        // Certainty and complexity tie at 0.5; certainty comes first.
        assert_eq!(q.dominant_dimension, Dimension::Certainty);
        assert_eq!(q.dominant_description, "moderately certain");
        assert_eq!(q.overall_state, "Neutral/Balanced");
    }

    #[test]
    fn test_dominant_uses_absolute_bipolar() {
        let q = QualitativeAnalysis::from_point(EmotionPoint::new(-0.9, 0.1, 0.2, 0.4, 0.3));
        assert_eq!(q.dominant_dimension, Dimension::Valence);
        assert_eq!(q.dominant_description, "very negative");
    }

    #[test]
    fn test_dimension_serializes_snake_case() {
        let json = serde_json::to_string(&Dimension::Complexity).unwrap();
        assert_eq!(json, "\"complexity\"");
    }
}
