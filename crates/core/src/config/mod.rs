use std::{num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{AlgorithmKind, Result, SortVizError};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunConfig,
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.run.validate()?;
        self.playback.validate()
    }
}

/// Whether the renderer should draw flat or raised bars. The core only
/// passes this through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimensionality {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

/// Configuration of a single sorting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub algorithm: AlgorithmKind,
    /// Length of the shuffled `1..=size` input.
    pub size: usize,
    /// Throttle period: surface every `throttle`-th elementary mutation.
    pub throttle: usize,
    pub dimensions: Dimensionality,
    /// Seed for the input shuffle. Unseeded runs differ every time.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::Quick,
            size: 100,
            throttle: 10,
            dimensions: Dimensionality::TwoD,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        self.throttle_period().map(|_| ())
    }

    /// The throttle as a period, rejecting zero.
    pub fn throttle_period(&self) -> Result<NonZeroUsize> {
        throttle_period(self.throttle)
    }
}

pub(crate) fn throttle_period(throttle: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(throttle).ok_or_else(|| {
        SortVizError::invalid(format!("throttle must be at least 1, got {throttle}"))
    })
}

/// Settings for the driver that paces calls into the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between two ticks.
    pub interval_ms: u64,
    /// Algorithms shown side by side in comparison mode.
    pub compare_algorithms: Vec<AlgorithmKind>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1,
            compare_algorithms: vec![
                AlgorithmKind::Quick,
                AlgorithmKind::Bubble,
                AlgorithmKind::Merge,
                AlgorithmKind::Insertion,
            ],
        }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> Result<()> {
        if self.compare_algorithms.is_empty() {
            return Err(SortVizError::invalid(
                "comparison needs at least one algorithm",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.run.algorithm, AlgorithmKind::Quick);
        assert_eq!(config.playback.compare_algorithms.len(), 4);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config = AppConfig::from_json_str(
            r#"{ "run": { "algorithm": "shellsort", "dimensions": "3d", "seed": 9 } }"#,
        )
        .unwrap();

        assert_eq!(config.run.algorithm, AlgorithmKind::Shell);
        assert_eq!(config.run.dimensions, Dimensionality::ThreeD);
        assert_eq!(config.run.seed, Some(9));
        assert_eq!(config.run.throttle, 10);
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn rejects_zero_throttle() {
        let err = AppConfig::from_json_str(r#"{ "run": { "throttle": 0 } }"#).unwrap_err();

        assert!(matches!(err, SortVizError::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_unknown_algorithm_names() {
        let err = AppConfig::from_json_str(r#"{ "run": { "algorithm": "heapsort" } }"#)
            .unwrap_err();

        assert!(err.to_string().contains("heapsort"));
    }

    #[test]
    fn rejects_empty_comparison() {
        let err = AppConfig::from_json_str(r#"{ "playback": { "compare_algorithms": [] } }"#)
            .unwrap_err();

        assert!(matches!(err, SortVizError::InvalidConfiguration(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load("does/not/exist.json").unwrap_err();

        assert!(matches!(err, SortVizError::Io(_)));
    }
}
