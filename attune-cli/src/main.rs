// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! `attune` runs the frequency analyzer and the emotional vector engine
//! from the command line. Results go to stdout as JSON; logs go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use attune_core::config::AttuneConfig;
use attune_core::{recommendations, EmotionalBridge, FrequencyAnalyzer, LEXICON};

#[derive(Debug, Parser)]
#[command(name = "attune")]
#[command(about = "Vibrational signal and emotional text analysis", long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Named preset: standard, strict or lenient.
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a sampled signal given as a JSON array of numbers.
    Signal {
        /// File holding the samples. Reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Sample rate in Hz. Defaults to the configured rate.
        #[arg(long)]
        sample_rate: Option<f64>,
    },
    /// Map text onto the emotional space.
    Emotion {
        /// Text to analyze. Reads stdin when omitted.
        #[arg(long)]
        text: Option<String>,
    },
    /// Project the most likely emotion sequence from a lexicon label.
    Flow {
        #[arg(long = "from")]
        from: String,

        #[arg(long, default_value_t = 3)]
        steps: usize,
    },
    /// Print the emotion lexicon.
    Lexicon,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.preset.as_deref())?;

    let output = match cli.command {
        Command::Signal { input, sample_rate } => {
            run_signal(&config, input.as_deref(), sample_rate)?
        }
        Command::Emotion { text } => run_emotion(&config, text)?,
        Command::Flow { from, steps } => run_flow(&config, &from, steps)?,
        Command::Lexicon => lexicon_json(),
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn resolve_config(path: Option<&Path>, preset: Option<&str>) -> Result<AttuneConfig> {
    if let Some(path) = path {
        return AttuneConfig::load_from_file(path)
            .with_context(|| format!("load config {}", path.display()));
    }
    match preset {
        None => Ok(AttuneConfig::default()),
        Some(name) => match AttuneConfig::from_preset(name) {
            Some(config) => Ok(config),
            None => bail!("unknown preset {name:?} (expected standard, strict or lenient)"),
        },
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

fn parse_samples(raw: &str) -> Result<Vec<f64>> {
    serde_json::from_str(raw).context("samples must be a JSON array of numbers")
}

fn run_signal(
    config: &AttuneConfig,
    input: Option<&Path>,
    sample_rate: Option<f64>,
) -> Result<serde_json::Value> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read samples {}", path.display()))?,
        None => read_stdin()?,
    };
    let samples = parse_samples(&raw)?;

    let analyzer = FrequencyAnalyzer::new(config.signal.clone());
    let analysis = match sample_rate {
        Some(rate) => analyzer.analyze(&samples, rate),
        None => analyzer.analyze_default_rate(&samples),
    }
    .context("analyze signal")?;

    tracing::info!(
        samples = samples.len(),
        sample_rate = sample_rate.unwrap_or(analyzer.config().default_sample_rate),
        "signal command done"
    );

    let recommendations = recommendations(&analysis);
    Ok(json!({
        "analysis": analysis,
        "recommendations": recommendations,
    }))
}

fn run_emotion(config: &AttuneConfig, text: Option<String>) -> Result<serde_json::Value> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };
    let bridge = EmotionalBridge::new(config.emotion.clone());
    let analysis = bridge.analyze(text.trim_end());
    Ok(serde_json::to_value(analysis)?)
}

fn run_flow(config: &AttuneConfig, from: &str, steps: usize) -> Result<serde_json::Value> {
    let bridge = EmotionalBridge::new(config.emotion.clone());
    let flow: Vec<_> = bridge
        .predict_flow(from, steps)
        .with_context(|| format!("project flow from {from:?}"))?
        .collect();
    Ok(json!({
        "current_emotion": from,
        "steps": steps,
        "predicted_flow": flow,
    }))
}

fn lexicon_json() -> serde_json::Value {
    let entries: Vec<_> = LEXICON
        .iter()
        .map(|e| {
            json!({
                "label": e.label,
                "vector": e.point,
                "synonyms": e.synonyms,
            })
        })
        .collect();
    json!(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flow() {
        let cli = Cli::try_parse_from(["attune", "flow", "--from", "medo", "--steps", "3"]).unwrap();
        match cli.command {
            Command::Flow { from, steps } => {
                assert_eq!(from, "medo");
                assert_eq!(steps, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flow_default_steps() {
        let cli = Cli::try_parse_from(["attune", "flow", "--from", "alegria"]).unwrap();
        match cli.command {
            Command::Flow { steps, .. } => assert_eq!(steps, 3),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_config_and_preset_conflict() {
        let err = Cli::try_parse_from([
            "attune", "--config", "a.json", "--preset", "strict", "lexicon",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn test_resolve_config() {
        assert_eq!(resolve_config(None, None).unwrap(), AttuneConfig::default());
        assert_eq!(
            resolve_config(None, Some("strict")).unwrap(),
            AttuneConfig::strict()
        );
        assert!(resolve_config(None, Some("loud")).is_err());
        assert!(resolve_config(Some(Path::new("/nonexistent/attune.json")), None).is_err());
    }

    #[test]
    fn test_parse_samples() {
        assert_eq!(parse_samples("[1, 2.5, -3]").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(parse_samples("1 2 3").is_err());
        assert!(parse_samples("[\"a\"]").is_err());
    }

    #[test]
    fn test_flow_json() {
        let out = run_flow(&AttuneConfig::default(), "alegria", 2).unwrap();
        assert_eq!(out["predicted_flow"].as_array().unwrap().len(), 2);
        assert!(run_flow(&AttuneConfig::default(), "joy", 2).is_err());
    }

    #[test]
    fn test_emotion_json() {
        let out = run_emotion(&AttuneConfig::default(), Some("feliz\n".into())).unwrap();
        assert_eq!(out["text"], "feliz");
        assert_eq!(out["detected_emotions"]["alegria"], 1);
    }

    #[test]
    fn test_lexicon_json() {
        let out = lexicon_json();
        let entries = out.as_array().unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0]["label"], "alegria");
        assert_eq!(entries[0]["vector"]["valence"], 0.8);
    }
}
