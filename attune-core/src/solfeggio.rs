// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Solfeggio reference frequencies and tolerance-based alignment.

use serde::{Deserialize, Serialize};

/// A named reference frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolfeggioTone {
    pub frequency: f64,
    pub label: &'static str,
}

/// The nine Solfeggio tones, ascending.
pub static SOLFEGGIO_TONES: [SolfeggioTone; 9] = [
    SolfeggioTone { frequency: 174.0, label: "Pain Relief" },
    SolfeggioTone { frequency: 285.0, label: "Energy & Safety" },
    SolfeggioTone { frequency: 396.0, label: "Liberation from Fear" },
    SolfeggioTone { frequency: 417.0, label: "Facilitation of Change" },
    SolfeggioTone { frequency: 528.0, label: "Transformation & Miracles (DNA Repair)" },
    SolfeggioTone { frequency: 639.0, label: "Connection & Relationships" },
    SolfeggioTone { frequency: 741.0, label: "Awakening Intuition" },
    SolfeggioTone { frequency: 852.0, label: "Spiritual Order" },
    SolfeggioTone { frequency: 963.0, label: "Divine Consciousness" },
];

/// A detected frequency lying within tolerance of a reference tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolfeggioMatch {
    pub detected_frequency: f64,
    pub reference_frequency: f64,
    pub label: String,
    /// `|detected - reference|` in Hz.
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolfeggioAlignment {
    pub aligned_frequencies: Vec<SolfeggioMatch>,
    pub alignment_count: usize,
    /// Label of the first match, if any.
    pub primary_resonance: Option<String>,
}

/// Match each frequency against every reference tone.
///
/// A frequency within `tolerance_hz` (inclusive) of several tones matches
/// all of them. Matches are ordered by input frequency, then by tone.
pub fn solfeggio_alignment(frequencies: &[f64], tolerance_hz: f64) -> SolfeggioAlignment {
    let aligned_frequencies: Vec<SolfeggioMatch> = frequencies
        .iter()
        .flat_map(|&freq| {
            SOLFEGGIO_TONES.iter().filter_map(move |tone| {
                let deviation = (freq - tone.frequency).abs();
                (deviation <= tolerance_hz).then(|| SolfeggioMatch {
                    detected_frequency: freq,
                    reference_frequency: tone.frequency,
                    label: tone.label.to_string(),
                    deviation,
                })
            })
        })
        .collect();

    let primary_resonance = aligned_frequencies.first().map(|m| m.label.clone());
    SolfeggioAlignment {
        alignment_count: aligned_frequencies.len(),
        aligned_frequencies,
        primary_resonance,
    }
}
