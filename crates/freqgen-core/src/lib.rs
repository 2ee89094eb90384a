//! # freqgen-core
//!
//! Assigns unique ATC UHF frequencies to the airbases of a Falcon BMS
//! theater.
//!
//! ## Crate structure
//!
//! - [`band`] — UHF channel plan, validity rules
//! - [`pool`] — Shuffle-once frequency pool
//! - [`radiomap`] — `radiomaps.dat` reader (reserved frequencies)
//! - [`station`] — `stations+ils.dat` line parser
//! - [`rewrite`] — Station file rewriter
//! - [`config`] — Optional TOML configuration
//! - [`error`] — Error taxonomy

pub mod band;
pub mod config;
pub mod error;
pub mod pool;
pub mod radiomap;
pub mod rewrite;
pub mod station;

pub use band::{Band, FreqKhz};
pub use config::GeneratorConfig;
pub use error::{FreqGenError, Result};
pub use pool::FrequencyPool;
pub use rewrite::{rewrite_stations, AssignMode, RewriteReport};
