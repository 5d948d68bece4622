//! Configuration for margin filtering.
//!
//! Both tunables of the line number filter are configuration, not behavior:
//! callers override them per invocation by building a filter from a config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunables for line number detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineNumberConfig {
    /// Minimum number of candidates (and of accepted line numbers) needed to
    /// believe the document carries a line numbering scheme.
    pub min_line_numbers: usize,

    /// Minimum share of accepted line numbers among all tokens that fall in
    /// the margin band.
    pub min_line_number_ratio_similar_x: f64,
}

impl Default for LineNumberConfig {
    fn default() -> Self {
        Self {
            min_line_numbers: 10,
            min_line_number_ratio_similar_x: 0.8,
        }
    }
}

impl LineNumberConfig {
    /// Set the minimum number of line numbers.
    pub fn with_min_line_numbers(mut self, min_line_numbers: usize) -> Self {
        self.min_line_numbers = min_line_numbers;
        self
    }

    /// Set the minimum density ratio within the margin band.
    pub fn with_min_ratio(mut self, ratio: f64) -> Self {
        self.min_line_number_ratio_similar_x = ratio;
        self
    }

    /// Check that the ratio is a usable fraction.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.min_line_number_ratio_similar_x;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidConfig(format!(
                "min_line_number_ratio_similar_x must be within [0, 1], got {}",
                ratio
            )));
        }
        Ok(())
    }
}

/// Tunables for the average token length check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenLengthConfig {
    /// Documents whose non-blank tokens average fewer characters than this
    /// are treated as character-scattered and cleared.
    pub min_token_length_ratio: f64,
}

impl Default for TokenLengthConfig {
    fn default() -> Self {
        Self {
            min_token_length_ratio: 2.0,
        }
    }
}

impl TokenLengthConfig {
    /// Check that the threshold is a non-negative number.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.min_token_length_ratio;
        if ratio.is_nan() || ratio < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_token_length_ratio must be a non-negative number, got {}",
                ratio
            )));
        }
        Ok(())
    }
}

/// Configuration of the whole filter pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Line number detection settings.
    pub line_numbers: LineNumberConfig,

    /// Average token length check; disabled when absent.
    pub token_length: Option<TokenLengthConfig>,
}

impl FilterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of line numbers.
    pub fn with_min_line_numbers(mut self, min_line_numbers: usize) -> Self {
        self.line_numbers.min_line_numbers = min_line_numbers;
        self
    }

    /// Set the minimum density ratio within the margin band.
    pub fn with_min_ratio(mut self, ratio: f64) -> Self {
        self.line_numbers.min_line_number_ratio_similar_x = ratio;
        self
    }

    /// Enable the average token length check.
    pub fn with_token_length(mut self, config: TokenLengthConfig) -> Self {
        self.token_length = Some(config);
        self
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.line_numbers.validate()?;
        if let Some(token_length) = &self.token_length {
            token_length.validate()?;
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
