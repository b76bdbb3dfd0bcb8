// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Discrete Fourier spectrum of a real time series.
//!
//! The transform is the forward, unnormalized DFT of arbitrary length.
//! Bin `i` of an `N`-point transform sits at `i * fs / N` for the first
//! half and is folded to negative frequencies for the second half, so the
//! frequency axis spans `[-fs/2, fs/2)`. Only strictly positive bins take
//! part in dominant-frequency selection; DC and mirrored bins are dropped.

use std::cmp::Ordering;

use num_complex::Complex64;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::stats;

/// One positive-frequency bin of the spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralBin {
    /// Index into the full transform.
    pub index: usize,
    /// Bin centre frequency (Hz).
    pub frequency: f64,
    /// Magnitude `|X[index]|`.
    pub magnitude: f64,
}

/// Forward DFT of a real signal.
pub fn dft(samples: &[f64]) -> Vec<Complex64> {
    let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Frequency of bin `index` in an `n`-point transform sampled at `sample_rate`.
///
/// Bins `0..=(n-1)/2` are non-negative; the rest fold to `(index - n)`.
/// The spacing is computed as `1 / (n * (1 / fs))` so the axis matches the
/// conventional `fftfreq` layout bit-for-bit.
pub fn bin_frequency(index: usize, n: usize, sample_rate: f64) -> f64 {
    let spacing = 1.0 / (n as f64 * (1.0 / sample_rate));
    let positive_bins = (n - 1) / 2 + 1;
    let k = if index < positive_bins {
        index as f64
    } else {
        index as f64 - n as f64
    };
    k * spacing
}

/// Strictly positive bins of the spectrum, in ascending bin order.
///
/// When the samples are large enough for the transform to overflow, they
/// are divided by their peak magnitude first. Magnitudes are then relative
/// to that peak; their ranking is unchanged.
pub fn positive_bins(samples: &[f64], sample_rate: f64) -> Vec<SpectralBin> {
    let n = samples.len();
    let peak = stats::peak(samples);
    let coefficients = if peak > f64::MAX / (2.0 * n.max(1) as f64) {
        let scaled: Vec<f64> = samples.iter().map(|x| x / peak).collect();
        dft(&scaled)
    } else {
        dft(samples)
    };
    coefficients
        .iter()
        .enumerate()
        .filter_map(|(index, c)| {
            let frequency = bin_frequency(index, n, sample_rate);
            (frequency > 0.0).then(|| SpectralBin {
                index,
                frequency,
                magnitude: c.norm(),
            })
        })
        .collect()
}

/// The `k` strongest bins, highest magnitude first.
///
/// Equal magnitudes keep ascending bin order (the sort is stable). Returns
/// `None` when fewer than `k` positive bins exist.
pub fn strongest(bins: &[SpectralBin], k: usize) -> Option<Vec<SpectralBin>> {
    if bins.len() < k {
        return None;
    }
    let mut ranked = bins.to_vec();
    ranked.sort_by(|a, b| {
        b.magnitude
            .partial_cmp(&a.magnitude)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);
    Some(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, amp: f64, fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|t| amp * (2.0 * PI * freq * t as f64 / fs).sin())
            .collect()
    }

    #[test]
    fn test_bin_frequency_even_length() {
        // n = 8, fs = 8 → [0, 1, 2, 3, -4, -3, -2, -1]
        let freqs: Vec<f64> = (0..8).map(|i| bin_frequency(i, 8, 8.0)).collect();
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_bin_frequency_odd_length() {
        // n = 5, fs = 5 → [0, 1, 2, -2, -1]
        let freqs: Vec<f64> = (0..5).map(|i| bin_frequency(i, 5, 5.0)).collect();
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn test_positive_bins_count() {
        assert_eq!(positive_bins(&[1.0], 100.0).len(), 0);
        assert_eq!(positive_bins(&[1.0, 2.0], 100.0).len(), 0);
        assert_eq!(positive_bins(&[1.0; 7], 100.0).len(), 3);
        assert_eq!(positive_bins(&[1.0; 8], 100.0).len(), 3);
    }

    #[test]
    fn test_dft_of_impulse_is_flat() {
        let spectrum = dft(&[1.0, 0.0, 0.0, 0.0]);
        for c in spectrum {
            assert!((c.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dft_empty() {
        assert!(dft(&[]).is_empty());
    }

    #[test]
    fn test_single_tone_peak() {
        let fs = 1000.0;
        let samples = sine(50.0, 1.0, fs, 1000);
        let bins = positive_bins(&samples, fs);
        let top = strongest(&bins, 1).unwrap();
        assert!((top[0].frequency - 50.0).abs() < 1e-9);
        assert!((top[0].magnitude - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_near_max_samples_keep_ranking() {
        let fs = 1000.0;
        let quiet: Vec<f64> = sine(50.0, 1.0, fs, 1000)
            .iter()
            .zip(sine(120.0, 0.5, fs, 1000))
            .map(|(a, b)| a + b)
            .collect();
        let loud: Vec<f64> = quiet.iter().map(|x| x * 0.6 * f64::MAX).collect();
        let top = strongest(&positive_bins(&loud, fs), 2).unwrap();
        assert!(top.iter().all(|b| b.magnitude.is_finite()));
        assert!((top[0].frequency - 50.0).abs() < 1e-9);
        assert!((top[1].frequency - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_strongest_ties_prefer_lower_index() {
        let bins = vec![
            SpectralBin { index: 1, frequency: 1.0, magnitude: 2.0 },
            SpectralBin { index: 2, frequency: 2.0, magnitude: 5.0 },
            SpectralBin { index: 3, frequency: 3.0, magnitude: 2.0 },
            SpectralBin { index: 4, frequency: 4.0, magnitude: 2.0 },
        ];
        let top = strongest(&bins, 3).unwrap();
        let idx: Vec<usize> = top.iter().map(|b| b.index).collect();
        assert_eq!(idx, vec![2, 1, 3]);
    }

    #[test]
    fn test_strongest_insufficient_bins() {
        let bins = vec![SpectralBin { index: 1, frequency: 1.0, magnitude: 1.0 }];
        assert!(strongest(&bins, 3).is_none());
        assert_eq!(strongest(&bins, 1).unwrap().len(), 1);
    }
}
