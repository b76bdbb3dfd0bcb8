// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

pub mod config;
pub mod error;
pub mod stats;
pub mod spectrum;
pub mod solfeggio;
pub mod harmonics;
pub mod vibration;
pub mod lexicon;
pub mod qualitative;
pub mod markov;
pub mod emotion;

pub use config::{AttuneConfig, EmotionConfig, SignalConfig};
pub use error::{AttuneError, Result};
pub use vibration::{analyze_signal, recommendations, FrequencyAnalyzer, SignalAnalysis};
pub use emotion::{analyze_text_emotion, predict_emotional_flow, EmotionalAnalysis, EmotionalBridge};
pub use markov::{EmotionalFlow, FlowStep, TransitionMatrix};
pub use lexicon::{EmotionPoint, LexiconEntry, LEXICON};
