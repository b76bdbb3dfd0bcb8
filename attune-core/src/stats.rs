// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Population statistics over slices.
//!
//! Finite inputs near the edge of the `f64` range would overflow a plain
//! sum. In that case the slice is divided by its peak magnitude, summed,
//! and the result scaled back, so finite input always gives finite output.

/// Largest `|x|` in the slice, 0 for an empty slice.
pub fn peak(xs: &[f64]) -> f64 {
    xs.iter().fold(0.0, |m, x| m.max(x.abs()))
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let sum = xs.iter().sum::<f64>();
    if sum.is_finite() || xs.is_empty() {
        return sum / n;
    }
    let scale = peak(xs);
    scale * (xs.iter().map(|x| x / scale).sum::<f64>() / n)
}

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn std_dev(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / n;
    if var.is_finite() || xs.is_empty() {
        return var.sqrt();
    }
    let scale = peak(xs);
    let ms = m / scale;
    let var = xs
        .iter()
        .map(|x| (x / scale - ms) * (x / scale - ms))
        .sum::<f64>()
        / n;
    scale * var.sqrt()
}
