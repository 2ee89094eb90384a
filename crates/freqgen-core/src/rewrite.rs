//! # Station File Rewriter
//!
//! Single pass over `stations+ils.dat` that fills the ATC UHF fields from
//! a [`FrequencyPool`]. In [`AssignMode::Preserve`] a pre-scan collects the
//! channels that are already validly assigned, removes them from the pool
//! and rewinds the input before the main pass.
//!
//! The run is not transactional: if the pool runs dry part-way, lines
//! already written stay written and the error propagates.

use std::collections::BTreeSet;
use std::io::{BufRead, Seek, Write};

use rand::rngs::StdRng;

use crate::band::{Band, FreqKhz};
use crate::error::Result;
use crate::pool::FrequencyPool;
use crate::station::{AtcChannel, StationLine};

/// How existing ATC channel fields are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignMode {
    /// Replace every ATC channel on every station line.
    #[default]
    Regenerate,
    /// Keep channels that already hold an assignable frequency.
    Preserve,
}

/// Counters for one rewrite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// All lines written, including pass-through lines.
    pub lines: usize,
    /// Lines carrying station fields.
    pub stations: usize,
    /// Fields filled from the pool.
    pub assigned: usize,
    /// Fields kept as-is in preserve mode.
    pub preserved: usize,
    /// Pool frequencies left unused at the end.
    pub pool_remaining: usize,
}

/// Per-line assignment state: owns the pool for the duration of a run.
#[derive(Debug)]
pub struct StationRewriter {
    band: Band,
    pool: FrequencyPool,
    mode: AssignMode,
    report: RewriteReport,
}

impl StationRewriter {
    pub fn new(band: Band, pool: FrequencyPool, mode: AssignMode) -> Self {
        Self {
            band,
            pool,
            mode,
            report: RewriteReport::default(),
        }
    }

    /// Parse one raw line and fill its ATC channels.
    pub fn rewrite_line(&mut self, raw: &str, line_no: usize) -> Result<StationLine> {
        let mut line = StationLine::parse(raw, line_no)?;
        self.report.lines += 1;
        if line.is_passthrough() {
            return Ok(line);
        }
        self.report.stations += 1;

        for channel in AtcChannel::ALL {
            let keep = match self.mode {
                AssignMode::Regenerate => false,
                AssignMode::Preserve => line
                    .channel(channel)
                    .and_then(|field| self.band.parse_assignable(field))
                    .is_some(),
            };
            if keep {
                self.report.preserved += 1;
                continue;
            }

            let freq = self.pool.next()?;
            tracing::debug!(
                line = line_no,
                channel = channel.name(),
                old = line.channel(channel).unwrap_or_default(),
                new = freq,
                "assigned"
            );
            line.set_channel(channel, freq);
            self.report.assigned += 1;
        }
        Ok(line)
    }

    pub fn finish(self) -> RewriteReport {
        RewriteReport {
            pool_remaining: self.pool.len(),
            ..self.report
        }
    }
}

/// Collect every assignable frequency already present in the ATC fields.
///
/// Lines are validated the same way as in the main pass, so a short
/// station line fails here before any output is produced.
pub fn scan_assigned_frequencies<R: BufRead>(
    reader: R,
    band: &Band,
) -> Result<BTreeSet<FreqKhz>> {
    let mut assigned = BTreeSet::new();
    for (idx, raw) in reader.lines().enumerate() {
        let raw = raw?;
        let line = StationLine::parse(&raw, idx + 1)?;
        for (channel, freq) in line.assigned_channels(band) {
            if !assigned.insert(freq) {
                tracing::warn!(
                    line = idx + 1,
                    channel = channel.name(),
                    freq,
                    "frequency already assigned to another station; keeping duplicate"
                );
            }
        }
    }
    Ok(assigned)
}

/// Rewrite a whole station file from `input` into `output`.
///
/// The pool is the band's channels minus `reserved` and, in preserve mode,
/// minus the channels already assigned in `input`. `rng` shuffles it once.
pub fn rewrite_stations<R, W>(
    input: &mut R,
    output: &mut W,
    band: &Band,
    reserved: &BTreeSet<FreqKhz>,
    mode: AssignMode,
    rng: &mut StdRng,
) -> Result<RewriteReport>
where
    R: BufRead + Seek,
    W: Write,
{
    let already_assigned = match mode {
        AssignMode::Regenerate => BTreeSet::new(),
        AssignMode::Preserve => {
            let assigned = scan_assigned_frequencies(input.by_ref(), band)?;
            input.rewind()?;
            for freq in assigned.intersection(reserved) {
                tracing::warn!(freq, "kept station frequency is reserved by the radiomap");
            }
            assigned
        }
    };

    let candidates = band.available([reserved, &already_assigned]);
    tracing::info!(
        reserved = reserved.len(),
        kept = already_assigned.len(),
        pool = candidates.len(),
        "frequency pool ready"
    );

    let pool = FrequencyPool::new(candidates, rng);
    let mut rewriter = StationRewriter::new(band.clone(), pool, mode);
    for (idx, raw) in input.by_ref().lines().enumerate() {
        let raw = raw?;
        let line = rewriter.rewrite_line(&raw, idx + 1)?;
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    Ok(rewriter.finish())
}
