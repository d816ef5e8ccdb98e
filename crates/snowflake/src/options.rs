//! Snowflake construction options.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnowflakeError};

/// Fewest spikes drawn when `numSpikes` is left unset.
pub const MIN_RANDOM_SPIKES: u32 = 2;

/// Most spikes drawn when `numSpikes` is left unset.
pub const MAX_RANDOM_SPIKES: u32 = 5;

/// Parameters controlling the snowflake shape.
///
/// Keys use the camelCase names of the configuration mapping
/// (`numArms`, `armLength`, ...). Missing keys keep their defaults. Any
/// other key is kept in [`extra`](Self::extra) and has no effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnowflakeOptions {
    /// Number of rotated arm copies.
    pub num_arms: u32,
    /// Length scale of each arm.
    pub arm_length: f64,
    /// Arm width near the center.
    pub arm_thickness: f64,
    /// Spikes along each half-arm. `None` draws a value in
    /// `[MIN_RANDOM_SPIKES, MAX_RANDOM_SPIKES]` at build time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_spikes: Option<u32>,
    /// Fixed offset between consecutive spike segments.
    pub spacer: f64,
    /// Unrecognized keys, stored as given.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for SnowflakeOptions {
    fn default() -> Self {
        Self {
            num_arms: 6,
            arm_length: 100.0,
            arm_thickness: 3.0,
            num_spikes: None,
            spacer: 0.5,
            extra: BTreeMap::new(),
        }
    }
}

impl SnowflakeOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SnowflakeError::Config(e.to_string()))
    }

    /// Parse options from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SnowflakeError::Config(e.to_string()))
    }

    /// Validate options.
    ///
    /// Checks everything except the spike count when it is unset, since
    /// that is only known once drawn.
    pub fn validate(&self) -> Result<()> {
        if self.num_arms == 0 {
            return Err(SnowflakeError::InvalidOptions(
                "numArms must be at least 1".into(),
            ));
        }
        if self.num_spikes == Some(0) {
            return Err(SnowflakeError::InvalidOptions(
                "numSpikes must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("armLength", self.arm_length),
            ("armThickness", self.arm_thickness),
            ("spacer", self.spacer),
        ] {
            if !value.is_finite() {
                return Err(SnowflakeError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.arm_length <= 0.0 {
            return Err(SnowflakeError::InvalidOptions(
                "armLength must be positive".into(),
            ));
        }
        if self.arm_thickness <= 0.0 {
            return Err(SnowflakeError::InvalidOptions(
                "armThickness must be positive".into(),
            ));
        }
        self.spike_length_range().map(|_| ())
    }

    /// Inclusive integer range spike lengths are drawn from:
    /// `[ceil(armThickness), floor(armLength / 2)]`.
    pub fn spike_length_range(&self) -> Result<(i64, i64)> {
        let lo = self.arm_thickness.ceil() as i64;
        let hi = (self.arm_length / 2.0).floor() as i64;
        if lo > hi {
            return Err(SnowflakeError::InvalidOptions(format!(
                "armThickness {} leaves no room for spikes on an arm of length {}",
                self.arm_thickness, self.arm_length
            )));
        }
        Ok((lo, hi))
    }

    /// Spacing budget per spike for a given spike count.
    pub fn gap_size(&self, num_spikes: u32) -> f64 {
        (self.arm_length / f64::from(num_spikes)) / 2.0
    }
}
