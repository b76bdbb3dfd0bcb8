// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Discrete-time Markov chain over the lexicon's emotion labels.
//!
//! Each row keeps a fixed self-transition probability and spreads the
//! remaining mass over the other labels in proportion to the similarity
//! kernel `1 / (1 + d)`, where `d` is the Euclidean distance between the
//! two lexicon points. Nearby emotions are therefore the likelier next
//! states.
//!
//! Projection is standard propagation: step 1 is the starting label's row,
//! and each later distribution is the previous row vector times the matrix.

use std::iter::FusedIterator;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{AttuneError, Result};
use crate::lexicon::{self, EmotionPoint, LEXICON};

/// Row-stochastic transition matrix indexed in lexicon order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    matrix: DMatrix<f64>,
}

impl TransitionMatrix {
    /// Build the matrix from the static lexicon.
    pub fn from_lexicon(self_transition: f64) -> Self {
        let points: Vec<EmotionPoint> = LEXICON.iter().map(|e| e.point).collect();
        Self::from_points(&points, self_transition)
    }

    /// Build a matrix over arbitrary points, indexed in slice order.
    ///
    /// With a single point the whole mass stays on it.
    fn from_points(points: &[EmotionPoint], self_transition: f64) -> Self {
        let n = points.len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for i in 0..n {
            if n == 1 {
                matrix[(i, i)] = 1.0;
                continue;
            }
            let total: f64 = (0..n)
                .filter(|&j| j != i)
                .map(|j| similarity(points[i], points[j]))
                .sum();
            for j in 0..n {
                matrix[(i, j)] = if i == j {
                    self_transition
                } else {
                    (1.0 - self_transition) * similarity(points[i], points[j]) / total
                };
            }
        }

        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    /// Probability of moving from state `from` to state `to` in one step.
    pub fn probability(&self, from: usize, to: usize) -> f64 {
        self.matrix[(from, to)]
    }

    /// Row `index` as a probability vector.
    pub fn row(&self, index: usize) -> DVector<f64> {
        self.matrix.row(index).transpose()
    }

    /// One propagation step: `p' = p · T`.
    pub fn propagate(&self, distribution: &DVector<f64>) -> DVector<f64> {
        self.matrix.tr_mul(distribution)
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

fn similarity(a: EmotionPoint, b: EmotionPoint) -> f64 {
    1.0 / (1.0 + a.distance(b))
}

/// One projected step of the emotional flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    /// 1-based step number.
    pub step: usize,
    pub predicted_emotion: String,
    /// Probability of the predicted label at this step.
    pub probability: f64,
    /// Full distribution over lexicon labels, lexicon order.
    pub probability_vector: Vec<f64>,
    /// Lexicon coordinates of the predicted label.
    pub emotional_vector: EmotionPoint,
}

/// Lazy projection of the most likely emotion sequence.
///
/// Yields exactly the requested number of steps and is consumed as it
/// goes; project again to restart.
#[derive(Debug)]
pub struct EmotionalFlow<'a> {
    transitions: &'a TransitionMatrix,
    distribution: Option<DVector<f64>>,
    start: usize,
    step: usize,
    steps: usize,
}

impl<'a> EmotionalFlow<'a> {
    /// Project `steps` steps starting from `label`.
    pub fn new(transitions: &'a TransitionMatrix, label: &str, steps: usize) -> Result<Self> {
        let start = lexicon::index_of(label)
            .filter(|&i| i < transitions.len())
            .ok_or_else(|| AttuneError::UnknownLabel(label.to_string()))?;
        Ok(Self {
            transitions,
            distribution: None,
            start,
            step: 0,
            steps,
        })
    }
}

impl Iterator for EmotionalFlow<'_> {
    type Item = FlowStep;

    fn next(&mut self) -> Option<FlowStep> {
        if self.step >= self.steps {
            return None;
        }

        let probs = match self.distribution.take() {
            None => self.transitions.row(self.start),
            Some(prev) => self.transitions.propagate(&prev),
        };

        // First index of the maximum.
        let mut best = 0;
        for (i, &p) in probs.iter().enumerate() {
            if p > probs[best] {
                best = i;
            }
        }

        self.step += 1;
        let entry = &LEXICON[best];
        let item = FlowStep {
            step: self.step,
            predicted_emotion: entry.label.to_string(),
            probability: probs[best],
            probability_vector: probs.iter().copied().collect(),
            emotional_vector: entry.point,
        };
        self.distribution = Some(probs);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EmotionalFlow<'_> {}

impl FusedIterator for EmotionalFlow<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_stochastic() {
        let t = TransitionMatrix::from_lexicon(0.3);
        assert_eq!(t.len(), LEXICON.len());
        for i in 0..t.len() {
            let sum: f64 = t.row(i).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "row {i} sums to {sum}");
            assert!((t.probability(i, i) - 0.3).abs() < 1e-15);
        }
    }

    #[test]
    fn test_closer_emotions_more_likely() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let alegria = lexicon::index_of("alegria").unwrap();
        let gratidao = lexicon::index_of("gratidão").unwrap();
        let vergonha = lexicon::index_of("vergonha").unwrap();
        assert!(t.probability(alegria, gratidao) > t.probability(alegria, vergonha));
    }

    #[test]
    fn test_single_point_chain() {
        let t = TransitionMatrix::from_points(&[EmotionPoint::NEUTRAL], 0.3);
        assert_eq!(t.probability(0, 0), 1.0);
    }

    #[test]
    fn test_flow_length_and_numbering() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let flow = EmotionalFlow::new(&t, "alegria", 3).unwrap();
        assert_eq!(flow.len(), 3);
        let steps: Vec<FlowStep> = flow.collect();
        assert_eq!(steps.len(), 3);
        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.step, i + 1);
            let sum: f64 = s.probability_vector.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_step_is_start_row() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let first = EmotionalFlow::new(&t, "medo", 1).unwrap().next().unwrap();
        let row: Vec<f64> = t.row(lexicon::index_of("medo").unwrap()).iter().copied().collect();
        assert_eq!(first.probability_vector, row);
        // Self-transition dominates a single step.
        assert_eq!(first.predicted_emotion, "medo");
        assert!((first.probability - 0.3).abs() < 1e-15);
        assert_eq!(first.emotional_vector, lexicon::lookup("medo").unwrap().point);
    }

    #[test]
    fn test_second_step_propagates() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let steps: Vec<FlowStep> = EmotionalFlow::new(&t, "raiva", 2).unwrap().collect();
        let first = DVector::from_vec(steps[0].probability_vector.clone());
        let expected = t.as_matrix().transpose() * first;
        for (a, b) in expected.iter().zip(&steps[1].probability_vector) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_steps() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let mut flow = EmotionalFlow::new(&t, "nojo", 0).unwrap();
        assert_eq!(flow.len(), 0);
        assert!(flow.next().is_none());
    }

    #[test]
    fn test_exhausted_flow_stays_exhausted() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let mut flow = EmotionalFlow::new(&t, "culpa", 1).unwrap();
        assert!(flow.next().is_some());
        assert!(flow.next().is_none());
        assert!(flow.next().is_none());
    }

    #[test]
    fn test_unknown_label() {
        let t = TransitionMatrix::from_lexicon(0.3);
        let err = EmotionalFlow::new(&t, "euforia", 3).unwrap_err();
        assert_eq!(err, AttuneError::UnknownLabel("euforia".into()));
    }
}
