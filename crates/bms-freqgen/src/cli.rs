//! Command-line driver: argument parsing and file wiring around
//! [`freqgen_core::rewrite_stations`].

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use freqgen_core::radiomap::read_reserved_frequencies;
use freqgen_core::{rewrite_stations, AssignMode, GeneratorConfig, RewriteReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fill unique UHF frequencies for airbases.
#[derive(Parser, Debug, Clone)]
#[command(name = "bms-freqgen", version, about = "Fill unique UHF frequencies for airbases")]
pub struct Cli {
    /// Path to the theater's stations+ils.dat file.
    pub stations_path: PathBuf,

    /// Path to the theater's radiomaps.dat file.
    pub radiomap_path: PathBuf,

    /// Where to write the rewritten station file.
    #[arg(short, long, default_value = "new_stations+ils.dat")]
    pub output: PathBuf,

    /// Preserve already-assigned ATC UHF frequencies.
    #[arg(short, long, default_value_t = false)]
    pub keep: bool,

    /// Seed for the frequency shuffle (overrides the config file).
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file overriding the UHF band and seed.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> AssignMode {
        if self.keep {
            AssignMode::Preserve
        } else {
            AssignMode::Regenerate
        }
    }
}

/// Run one generator pass. Output is written fresh, never over the input.
pub fn run(cli: &Cli) -> anyhow::Result<RewriteReport> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if same_file(&cli.stations_path, &cli.output) {
        bail!(
            "output {} would overwrite the input station file",
            cli.output.display()
        );
    }

    let seed = cli
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    tracing::info!(
        stations = %cli.stations_path.display(),
        radiomap = %cli.radiomap_path.display(),
        output = %cli.output.display(),
        mode = ?cli.mode(),
        seed,
        "bms-freqgen starting"
    );

    let radiomap = File::open(&cli.radiomap_path)
        .with_context(|| format!("failed to open radiomap {}", cli.radiomap_path.display()))?;
    let reserved = read_reserved_frequencies(BufReader::new(radiomap))
        .with_context(|| format!("failed to read radiomap {}", cli.radiomap_path.display()))?;
    tracing::info!(reserved = reserved.len(), "radiomap loaded");

    let stations = File::open(&cli.stations_path).with_context(|| {
        format!("failed to open stations {}", cli.stations_path.display())
    })?;
    let output = File::create(&cli.output)
        .with_context(|| format!("failed to create output {}", cli.output.display()))?;

    let report = rewrite_stations(
        &mut BufReader::new(stations),
        &mut BufWriter::new(output),
        &config.band,
        &reserved,
        cli.mode(),
        &mut StdRng::seed_from_u64(seed),
    )
    .with_context(|| format!("failed to rewrite {}", cli.stations_path.display()))?;

    tracing::info!(
        lines = report.lines,
        stations = report.stations,
        assigned = report.assigned,
        preserved = report.preserved,
        pool_remaining = report.pool_remaining,
        "wrote {}",
        cli.output.display()
    );
    Ok(report)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
