//! Optional TOML configuration for a generator run.
//!
//! A config may narrow the UHF band, change the raster, add guard
//! channels and pin the shuffle seed. It can never widen the band past
//! 225.000 – 399.750 MHz or make the 243.000 MHz guard assignable.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::band::{Band, FreqKhz, GUARD_FREQ_KHZ, MAX_UHF_FREQ_KHZ, MIN_UHF_FREQ_KHZ};
use crate::error::{FreqGenError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfigInput {
    pub seed: Option<u64>,
    pub band: BandConfigInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandConfigInput {
    pub min_khz: Option<FreqKhz>,
    pub max_khz: Option<FreqKhz>,
    pub step_khz: Option<FreqKhz>,
    pub guard_khz: Option<Vec<FreqKhz>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
    pub band: Band,
}

impl GeneratorConfigInput {
    pub fn resolve(self) -> Result<GeneratorConfig> {
        let defaults = Band::default();
        let mut band = Band {
            min_khz: self.band.min_khz.unwrap_or(defaults.min_khz),
            max_khz: self.band.max_khz.unwrap_or(defaults.max_khz),
            step_khz: self.band.step_khz.unwrap_or(defaults.step_khz),
            guard_khz: self
                .band
                .guard_khz
                .map(BTreeSet::from_iter)
                .unwrap_or(defaults.guard_khz),
        };
        // Extra guards only add to the emergency channel.
        band.guard_khz.insert(GUARD_FREQ_KHZ);

        if band.step_khz == 0 {
            return Err(FreqGenError::InvalidConfig(
                "band.step_khz must be positive".into(),
            ));
        }
        if band.min_khz < MIN_UHF_FREQ_KHZ || band.max_khz > MAX_UHF_FREQ_KHZ {
            return Err(FreqGenError::InvalidConfig(format!(
                "band {}..={} kHz is outside {MIN_UHF_FREQ_KHZ}..={MAX_UHF_FREQ_KHZ} kHz",
                band.min_khz, band.max_khz
            )));
        }
        if band.min_khz > band.max_khz {
            return Err(FreqGenError::InvalidConfig(format!(
                "band.min_khz {} is above band.max_khz {}",
                band.min_khz, band.max_khz
            )));
        }
        if band.min_khz % band.step_khz != 0 {
            return Err(FreqGenError::InvalidConfig(format!(
                "band.min_khz {} is not a multiple of band.step_khz {}",
                band.min_khz, band.step_khz
            )));
        }

        Ok(GeneratorConfig {
            seed: self.seed,
            band,
        })
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(GeneratorConfig::default());
        }
        let parsed: GeneratorConfigInput = toml::from_str(input)
            .map_err(|e| FreqGenError::InvalidConfig(format!("invalid TOML: {e}")))?;
        parsed.resolve()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }
}
