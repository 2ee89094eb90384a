//! # UHF Band
//!
//! Channel plan for the ATC UHF fields: an inclusive kHz range, a channel
//! step, and guard frequencies that are never handed out.
//!
//! The default plan is 225.000 – 399.750 MHz on a 25 kHz raster with the
//! 243.000 MHz guard channel removed.

use std::collections::BTreeSet;

/// Frequency in kHz.
pub type FreqKhz = u32;

pub const MIN_UHF_FREQ_KHZ: FreqKhz = 225_000;
pub const MAX_UHF_FREQ_KHZ: FreqKhz = 399_750;
pub const FREQ_STEP_KHZ: FreqKhz = 25;
pub const GUARD_FREQ_KHZ: FreqKhz = 243_000;

/// Channel plan.
///
/// Configs go through `GeneratorConfigInput::resolve`, which keeps the
/// minimum on the raster. A `Band` may also be built directly; then
/// [`Band::channels`] starts at the first raster channel at or above
/// `min_khz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub min_khz: FreqKhz,
    pub max_khz: FreqKhz,
    pub step_khz: FreqKhz,
    pub guard_khz: BTreeSet<FreqKhz>,
}

impl Default for Band {
    fn default() -> Self {
        Self {
            min_khz: MIN_UHF_FREQ_KHZ,
            max_khz: MAX_UHF_FREQ_KHZ,
            step_khz: FREQ_STEP_KHZ,
            guard_khz: BTreeSet::from([GUARD_FREQ_KHZ]),
        }
    }
}

impl Band {
    /// In range and on the channel raster. Guard channels count as valid.
    pub fn is_valid(&self, freq: FreqKhz) -> bool {
        (self.min_khz..=self.max_khz).contains(&freq) && freq % self.step_khz == 0
    }

    /// A channel that may be assigned to a station: valid and not a guard.
    pub fn is_assignable(&self, freq: FreqKhz) -> bool {
        self.is_valid(freq) && !self.guard_khz.contains(&freq)
    }

    /// Parse a raw field and return it only if it is an assignable channel.
    pub fn parse_assignable(&self, field: &str) -> Option<FreqKhz> {
        field
            .trim()
            .parse::<FreqKhz>()
            .ok()
            .filter(|&freq| self.is_assignable(freq))
    }

    /// Every assignable channel in ascending order.
    pub fn channels(&self) -> impl Iterator<Item = FreqKhz> + '_ {
        let first = self.min_khz.div_ceil(self.step_khz) * self.step_khz;
        (first..=self.max_khz)
            .step_by(self.step_khz as usize)
            .filter(|freq| !self.guard_khz.contains(freq))
    }

    /// Candidate pool: all channels minus every frequency in `exclude`.
    pub fn available<'a>(
        &self,
        exclude: impl IntoIterator<Item = &'a BTreeSet<FreqKhz>>,
    ) -> BTreeSet<FreqKhz> {
        let mut out: BTreeSet<FreqKhz> = self.channels().collect();
        for set in exclude {
            for freq in set {
                out.remove(freq);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_bounds() {
        let band = Band::default();
        assert!(band.is_valid(225_000));
        assert!(band.is_valid(399_750));
        assert!(!band.is_valid(224_975));
        assert!(!band.is_valid(399_775));
        assert!(!band.is_valid(399_950));
        assert!(!band.is_valid(300_010));
    }

    #[test]
    fn guard_is_valid_but_not_assignable() {
        let band = Band::default();
        assert!(band.is_valid(GUARD_FREQ_KHZ));
        assert!(!band.is_assignable(GUARD_FREQ_KHZ));
        assert!(!band.channels().any(|f| f == GUARD_FREQ_KHZ));
    }

    #[test]
    fn channel_count() {
        // (399750 - 225000) / 25 + 1 channels, less the guard.
        assert_eq!(Band::default().channels().count(), 6990);
    }

    #[test]
    fn parse_assignable_fields() {
        let band = Band::default();
        assert_eq!(band.parse_assignable("300025"), Some(300_025));
        assert_eq!(band.parse_assignable("243000"), None);
        assert_eq!(band.parse_assignable("abc"), None);
        assert_eq!(band.parse_assignable("-300000"), None);
        assert_eq!(band.parse_assignable("0"), None);
        assert_eq!(band.parse_assignable("300010"), None);
    }

    #[test]
    fn available_excludes_sets() {
        let band = Band {
            min_khz: 225_000,
            max_khz: 225_100,
            step_khz: 25,
            guard_khz: BTreeSet::from([225_050]),
        };
        let reserved = BTreeSet::from([225_000]);
        let assigned = BTreeSet::from([225_100, 999_999]);
        let pool = band.available([&reserved, &assigned]);
        assert_eq!(pool, BTreeSet::from([225_025, 225_075]));
    }

    #[test]
    fn unaligned_minimum_starts_on_raster() {
        let band = Band {
            min_khz: 225_010,
            max_khz: 225_060,
            step_khz: 25,
            guard_khz: BTreeSet::new(),
        };
        assert_eq!(band.channels().collect::<Vec<_>>(), vec![225_025, 225_050]);
    }
}
