//! # Frequency Pool
//!
//! Shuffle-once, draw-without-replacement pool of channels. Candidates are
//! permuted a single time at construction and then popped from the tail,
//! so every frequency leaves the pool at most once per run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::band::FreqKhz;
use crate::error::{FreqGenError, Result};

#[derive(Debug, Clone)]
pub struct FrequencyPool {
    freqs: Vec<FreqKhz>,
}

impl FrequencyPool {
    /// Build a pool from `candidates`, shuffled with `rng`.
    ///
    /// Pass candidates in a stable order (e.g. from a `BTreeSet`) if the
    /// draw sequence must be reproducible from the rng seed.
    pub fn new(candidates: impl IntoIterator<Item = FreqKhz>, rng: &mut StdRng) -> Self {
        let mut freqs: Vec<FreqKhz> = candidates.into_iter().collect();
        freqs.shuffle(rng);
        Self { freqs }
    }

    /// Take one frequency out of the pool.
    ///
    /// Fails with [`FreqGenError::ExhaustedPool`] once every candidate has
    /// been handed out.
    pub fn next(&mut self) -> Result<FreqKhz> {
        self.freqs.pop().ok_or(FreqGenError::ExhaustedPool)
    }

    /// Frequencies still available.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}
