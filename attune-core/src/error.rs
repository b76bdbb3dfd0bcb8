// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Error taxonomy shared by the frequency analyzer and the emotion engine.
//!
//! Degenerate but well-formed input (an empty positive spectrum, text with
//! no lexicon hits) never errors; it resolves to documented fallback values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttuneError {
    /// Malformed numeric arguments: empty or non-finite samples, a
    /// non-positive sample rate.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Markov projection requested from a label absent from the lexicon.
    #[error("unknown emotion label: {0:?}")]
    UnknownLabel(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

pub type Result<T> = std::result::Result<T, AttuneError>;
