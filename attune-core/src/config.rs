// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Configuration for the Attune analyzers.
//!
//! Aggregates the frequency analyzer and emotion engine parameters into a
//! single `AttuneConfig` with presets for different matching strictness.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AttuneError, Result};

/// Frequency analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Sample rate assumed when the caller does not provide one (Hz).
    pub default_sample_rate: f64,
    /// Number of dominant frequencies extracted from the spectrum.
    pub top_k: usize,
    /// Returned in place of dominant frequencies when the spectrum has
    /// fewer than `top_k` positive bins.
    pub fallback_frequencies: Vec<f64>,
    /// Absolute tolerance for Solfeggio matching (Hz).
    pub solfeggio_tolerance_hz: f64,
    /// Maximum distance of a frequency ratio from its nearest integer.
    pub harmonic_tolerance: f64,
    /// Guards the resonance ratio against a zero mean.
    pub resonance_epsilon: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            default_sample_rate: 1000.0,
            top_k: 3,
            fallback_frequencies: vec![528.0, 432.0, 396.0],
            solfeggio_tolerance_hz: 10.0,
            harmonic_tolerance: 0.02,
            resonance_epsilon: 1e-6,
        }
    }
}

/// Emotion engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Probability mass kept on the current label per Markov step [0, 1).
    pub self_transition: f64,
    /// Transitions shorter than this distance are "smooth".
    pub smooth_threshold: f64,
    /// Transitions at or beyond this distance are "abrupt".
    pub abrupt_threshold: f64,
    /// Number of nearest lexicon entries reported.
    pub closest_count: usize,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            self_transition: 0.3,
            smooth_threshold: 0.5,
            abrupt_threshold: 1.0,
            closest_count: 3,
        }
    }
}

/// Full Attune configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttuneConfig {
    pub signal: SignalConfig,
    pub emotion: EmotionConfig,
}

impl AttuneConfig {
    /// Standard tolerances: 10 Hz Solfeggio window, 2% harmonic window.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Tight matching windows and a stickier Markov chain.
    pub fn strict() -> Self {
        Self {
            signal: SignalConfig {
                solfeggio_tolerance_hz: 5.0,
                harmonic_tolerance: 0.01,
                ..SignalConfig::default()
            },
            emotion: EmotionConfig {
                self_transition: 0.5,
                ..EmotionConfig::default()
            },
        }
    }

    /// Wide matching windows and a more exploratory Markov chain.
    pub fn lenient() -> Self {
        Self {
            signal: SignalConfig {
                solfeggio_tolerance_hz: 20.0,
                harmonic_tolerance: 0.05,
                ..SignalConfig::default()
            },
            emotion: EmotionConfig {
                self_transition: 0.15,
                smooth_threshold: 0.6,
                abrupt_threshold: 1.2,
                ..EmotionConfig::default()
            },
        }
    }

    /// Look up a preset by name.
    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "standard" | "default" => Some(Self::standard()),
            "strict" => Some(Self::strict()),
            "lenient" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AttuneError::InvalidConfig(vec![format!("parse error: {e}")]))?;
        let issues = config.validate();
        if !issues.is_empty() {
            return Err(AttuneError::InvalidConfig(issues));
        }
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AttuneError::InvalidConfig(vec![format!("cannot read {}: {e}", path.display())])
        })?;
        Self::from_json(&contents)
    }

    /// Validate the configuration, returning any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = self.signal.validate();
        issues.extend(self.emotion.validate());
        issues
    }
}

impl SignalConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(self.default_sample_rate.is_finite() && self.default_sample_rate > 0.0) {
            issues.push(format!(
                "signal.default_sample_rate {} must be finite and > 0",
                self.default_sample_rate
            ));
        }
        if self.top_k == 0 {
            issues.push("signal.top_k must be > 0".into());
        }
        if self.fallback_frequencies.len() != self.top_k {
            issues.push(format!(
                "signal.fallback_frequencies has {} entries, expected top_k = {}",
                self.fallback_frequencies.len(),
                self.top_k
            ));
        }
        if self.solfeggio_tolerance_hz < 0.0 {
            issues.push(format!(
                "signal.solfeggio_tolerance_hz {} must be >= 0",
                self.solfeggio_tolerance_hz
            ));
        }
        if !(0.0..0.5).contains(&self.harmonic_tolerance) {
            issues.push(format!(
                "signal.harmonic_tolerance {} out of range [0, 0.5)",
                self.harmonic_tolerance
            ));
        }
        if self.resonance_epsilon <= 0.0 {
            issues.push(format!(
                "signal.resonance_epsilon {} must be > 0",
                self.resonance_epsilon
            ));
        }

        issues
    }
}

impl EmotionConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(0.0..1.0).contains(&self.self_transition) {
            issues.push(format!(
                "emotion.self_transition {} out of range [0, 1)",
                self.self_transition
            ));
        }
        if self.smooth_threshold > self.abrupt_threshold {
            issues.push(format!(
                "emotion.smooth_threshold {} exceeds abrupt_threshold {}",
                self.smooth_threshold, self.abrupt_threshold
            ));
        }
        if self.closest_count == 0 {
            issues.push("emotion.closest_count must be > 0".into());
        }

        issues
    }
}
