// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Integer-ratio (harmonic) relationships between detected frequencies.

use serde::{Deserialize, Serialize};

/// Two frequencies whose ratio is close to an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicRelation {
    /// The lower frequency of the pair.
    pub fundamental: f64,
    /// The higher frequency of the pair.
    pub harmonic: f64,
    /// Nearest integer to `harmonic / fundamental`.
    pub ratio: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicPatterns {
    pub detected_harmonics: Vec<HarmonicRelation>,
    pub harmonic_count: usize,
    /// Relations per input frequency.
    pub harmonic_richness: f64,
}

/// Name of an integer frequency ratio.
pub fn harmonic_name(ratio: u32) -> String {
    match ratio {
        1 => "Unison".into(),
        2 => "Octave".into(),
        3 => "Perfect Fifth (12th)".into(),
        4 => "Double Octave".into(),
        5 => "Major Third (17th)".into(),
        6 => "Perfect Fifth + Octave".into(),
        n => format!("Harmonic {n}"),
    }
}

/// Check every unordered pair for a near-integer ratio.
///
/// Pairs containing a zero frequency are skipped. A pair is harmonic when
/// `|ratio - round(ratio)| < tolerance`, with `ratio = max / min`.
pub fn detect_harmonics(frequencies: &[f64], tolerance: f64) -> HarmonicPatterns {
    let mut detected_harmonics = Vec::new();

    for (i, &f1) in frequencies.iter().enumerate() {
        for &f2 in &frequencies[i + 1..] {
            if f1 == 0.0 || f2 == 0.0 {
                continue;
            }
            let (low, high) = if f2 > f1 { (f1, f2) } else { (f2, f1) };
            let ratio = high / low;
            let nearest = ratio.round();
            if (ratio - nearest).abs() < tolerance {
                let ratio = nearest as u32;
                detected_harmonics.push(HarmonicRelation {
                    fundamental: low,
                    harmonic: high,
                    ratio,
                    kind: harmonic_name(ratio),
                });
            }
        }
    }

    let harmonic_count = detected_harmonics.len();
    HarmonicPatterns {
        detected_harmonics,
        harmonic_count,
        harmonic_richness: harmonic_count as f64 / frequencies.len().max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_and_twelfth() {
        let patterns = detect_harmonics(&[100.0, 200.0, 300.0], 0.02);
        // (100,200) → 2, (100,300) → 3; 300/200 = 1.5 is not harmonic.
        assert_eq!(patterns.harmonic_count, 2);
        let first = &patterns.detected_harmonics[0];
        assert_eq!((first.fundamental, first.harmonic, first.ratio), (100.0, 200.0, 2));
        assert_eq!(first.kind, "Octave");
        let second = &patterns.detected_harmonics[1];
        assert_eq!((second.fundamental, second.harmonic, second.ratio), (100.0, 300.0, 3));
        assert_eq!(second.kind, "Perfect Fifth (12th)");
        assert!((patterns.harmonic_richness - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_independent_of_pair_direction() {
        let patterns = detect_harmonics(&[400.0, 100.0], 0.02);
        assert_eq!(patterns.harmonic_count, 1);
        let rel = &patterns.detected_harmonics[0];
        assert_eq!((rel.fundamental, rel.harmonic, rel.ratio), (100.0, 400.0, 4));
        assert_eq!(rel.kind, "Double Octave");
    }

    #[test]
    fn test_unison() {
        let patterns = detect_harmonics(&[440.0, 440.0], 0.02);
        assert_eq!(patterns.detected_harmonics[0].ratio, 1);
        assert_eq!(patterns.detected_harmonics[0].kind, "Unison");
    }

    #[test]
    fn test_near_integer_within_tolerance() {
        let patterns = detect_harmonics(&[100.0, 201.0], 0.02);
        assert_eq!(patterns.harmonic_count, 1);
        let patterns = detect_harmonics(&[100.0, 203.0], 0.02);
        assert_eq!(patterns.harmonic_count, 0);
    }

    #[test]
    fn test_zero_frequencies_skipped() {
        let patterns = detect_harmonics(&[0.0, 100.0, 0.0], 0.02);
        assert_eq!(patterns.harmonic_count, 0);
        assert_eq!(patterns.harmonic_richness, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let patterns = detect_harmonics(&[], 0.02);
        assert_eq!(patterns.harmonic_count, 0);
        assert_eq!(patterns.harmonic_richness, 0.0);
    }

    #[test]
    fn test_harmonic_names() {
        assert_eq!(harmonic_name(5), "Major Third (17th)");
        assert_eq!(harmonic_name(6), "Perfect Fifth + Octave");
        assert_eq!(harmonic_name(7), "Harmonic 7");
        assert_eq!(harmonic_name(12), "Harmonic 12");
    }
}
