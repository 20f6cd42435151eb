use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::verify::Limits;

pub const SEED_ENV: &str = "TELEPORTER_ABI_SEED";
pub const ITERATIONS_ENV: &str = "TELEPORTER_ABI_ITERATIONS";

/// Settings for the round-trip harness.
///
/// Resolution order: defaults, then the TOML file, then environment, then
/// command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Random instances checked per envelope kind.
    pub iterations: u32,
    pub max_sequence_len: usize,
    /// Base seed; a random one is drawn and logged when absent.
    pub seed: Option<u64>,
    /// Check kinds on separate threads.
    pub parallel: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 32,
            max_sequence_len: Limits::default().max_sequence_len,
            seed: None,
            parallel: true,
        }
    }
}

impl HarnessConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config: {}", path.display()));
            }
        };
        toml::from_str(&raw).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Blank values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(SEED_ENV)
            && !raw.trim().is_empty()
        {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid {SEED_ENV} '{raw}'"))?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(ITERATIONS_ENV)
            && !raw.trim().is_empty()
        {
            self.iterations = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid {ITERATIONS_ENV} '{raw}'"))?;
        }
        Ok(())
    }

    pub fn with_overrides(mut self, seed: Option<u64>, iterations: Option<u32>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(iterations) = iterations {
            self.iterations = iterations;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            anyhow::bail!("iterations must be at least 1");
        }
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_sequence_len: self.max_sequence_len,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
