// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Vibrational signal analysis: dominant frequencies, resonance, Solfeggio
//! alignment, harmonic structure and signal quality of a sampled series.
//!
//! Every score here is a deterministic function of the samples and the
//! sample rate. The resonance score is a dispersion ratio (standard
//! deviation over absolute mean, clipped to [0, 1]) and carries no
//! physical meaning beyond that.

use serde::{Deserialize, Serialize};

use crate::config::SignalConfig;
use crate::error::{AttuneError, Result};
use crate::harmonics::{detect_harmonics, HarmonicPatterns};
use crate::solfeggio::{solfeggio_alignment, SolfeggioAlignment};
use crate::spectrum;
use crate::stats::{mean, peak, std_dev};

/// Amplitude statistics of the raw samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalQuality {
    /// Mean of `|x|`.
    pub mean_amplitude: f64,
    /// Population standard deviation of `x`.
    pub std_amplitude: f64,
    /// `max(x) - min(x)`.
    pub dynamic_range: f64,
    /// Adjacent sample pairs whose sign (-1, 0, +1) differs.
    pub zero_crossings: usize,
    /// `clip(1 - std / (max|x| + 1e-6), 0, 1)`.
    pub quality_score: f64,
}

/// Full result of [`analyze_signal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAnalysis {
    /// Strongest positive frequencies (Hz), highest magnitude first.
    pub dominant_frequencies: Vec<f64>,
    pub harmonic_patterns: HarmonicPatterns,
    /// Dispersion heuristic in [0, 1].
    pub resonance_score: f64,
    pub solfeggio_alignment: SolfeggioAlignment,
    pub signal_quality: SignalQuality,
    /// True when `dominant_frequencies` holds the configured fallback.
    ///
    /// Set whenever the spectrum has fewer than `top_k` positive bins, so
    /// the one or two real peaks of a very short signal are discarded.
    pub spectrum_fallback: bool,
}

/// Frequency analyzer bound to a [`SignalConfig`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    config: SignalConfig,
}

impl FrequencyAnalyzer {
    /// Bind `config` as given. An invalid config (see
    /// [`SignalConfig::validate`]) is logged, not rejected; load through
    /// [`AttuneConfig::from_json`](crate::config::AttuneConfig::from_json)
    /// to reject it.
    pub fn new(config: SignalConfig) -> Self {
        let issues = config.validate();
        if !issues.is_empty() {
            tracing::warn!(?issues, "frequency analyzer built from an invalid config");
        }
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Analyze at the configured default sample rate.
    pub fn analyze_default_rate(&self, samples: &[f64]) -> Result<SignalAnalysis> {
        self.analyze(samples, self.config.default_sample_rate)
    }

    /// Analyze `samples` recorded at `sample_rate` Hz.
    ///
    /// Fails with [`AttuneError::InvalidInput`] for empty or non-finite
    /// samples and for a sample rate that is not a positive finite number.
    pub fn analyze(&self, samples: &[f64], sample_rate: f64) -> Result<SignalAnalysis> {
        validate_input(samples, sample_rate)?;
        let cfg = &self.config;

        let bins = spectrum::positive_bins(samples, sample_rate);
        let (dominant_frequencies, spectrum_fallback) = match spectrum::strongest(&bins, cfg.top_k) {
            Some(top) => (top.iter().map(|b| b.frequency).collect(), false),
            None => {
                tracing::warn!(
                    samples = samples.len(),
                    positive_bins = bins.len(),
                    "degenerate spectrum, using fallback frequencies"
                );
                (cfg.fallback_frequencies.clone(), true)
            }
        };

        let resonance_score = resonance_score(samples, cfg.resonance_epsilon);
        let solfeggio_alignment =
            solfeggio_alignment(&dominant_frequencies, cfg.solfeggio_tolerance_hz);
        let harmonic_patterns = detect_harmonics(&dominant_frequencies, cfg.harmonic_tolerance);
        let signal_quality = signal_quality(samples);

        tracing::debug!(
            samples = samples.len(),
            sample_rate,
            ?dominant_frequencies,
            resonance_score,
            alignments = solfeggio_alignment.alignment_count,
            harmonics = harmonic_patterns.harmonic_count,
            "signal analyzed"
        );

        Ok(SignalAnalysis {
            dominant_frequencies,
            harmonic_patterns,
            resonance_score,
            solfeggio_alignment,
            signal_quality,
            spectrum_fallback,
        })
    }
}

/// Analyze a signal with the default configuration.
pub fn analyze_signal(samples: &[f64], sample_rate: f64) -> Result<SignalAnalysis> {
    FrequencyAnalyzer::default().analyze(samples, sample_rate)
}

fn validate_input(samples: &[f64], sample_rate: f64) -> Result<()> {
    if samples.is_empty() {
        return Err(AttuneError::InvalidInput("samples must not be empty".into()));
    }
    if let Some(pos) = samples.iter().position(|x| !x.is_finite()) {
        return Err(AttuneError::InvalidInput(format!(
            "sample {pos} is not finite ({})",
            samples[pos]
        )));
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(AttuneError::InvalidInput(format!(
            "sample rate must be positive and finite, got {sample_rate}"
        )));
    }
    Ok(())
}

/// `clip(std / (|mean| + epsilon), 0, 1)`.
pub fn resonance_score(samples: &[f64], epsilon: f64) -> f64 {
    (std_dev(samples) / (mean(samples).abs() + epsilon)).clamp(0.0, 1.0)
}

pub fn signal_quality(samples: &[f64]) -> SignalQuality {
    let abs: Vec<f64> = samples.iter().map(|x| x.abs()).collect();
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max_abs = peak(samples);
    let std_amplitude = std_dev(samples);

    let sign = |x: f64| {
        if x > 0.0 {
            1
        } else if x < 0.0 {
            -1
        } else {
            0
        }
    };
    let zero_crossings = samples
        .windows(2)
        .filter(|w| sign(w[0]) != sign(w[1]))
        .count();

    SignalQuality {
        mean_amplitude: mean(&abs),
        std_amplitude,
        // Saturates rather than overflowing for near-limit samples.
        dynamic_range: (max - min).min(f64::MAX),
        zero_crossings,
        quality_score: (1.0 - std_amplitude / (max_abs + 1e-6)).clamp(0.0, 1.0),
    }
}

/// Plain-language suggestions derived from an analysis.
pub fn recommendations(analysis: &SignalAnalysis) -> Vec<String> {
    let mut out = Vec::new();

    if analysis.resonance_score < 0.3 {
        out.push(
            "Consider practices to increase vibrational resonance (meditation, breathwork)".into(),
        );
    }

    match &analysis.solfeggio_alignment.primary_resonance {
        None => out.push("Explore Solfeggio frequency music to enhance harmonic alignment".into()),
        Some(primary) => out.push(format!("Your primary resonance aligns with: {primary}")),
    }

    if analysis.harmonic_patterns.harmonic_count == 0 {
        out.push("Work on developing harmonic balance through sound healing".into());
    }

    if analysis.signal_quality.quality_score < 0.5 {
        out.push(
            "Signal quality could be improved - ensure calm environment for analysis".into(),
        );
    }

    out
}
