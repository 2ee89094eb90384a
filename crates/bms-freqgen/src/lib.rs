//! bms-freqgen
//!
//! Command-line front end for [`freqgen_core`]: reads a theater's
//! `stations+ils.dat` and `radiomaps.dat` and writes a new station file
//! with unique ATC UHF frequencies filled in.

pub mod cli;

pub use cli::{run, Cli};
