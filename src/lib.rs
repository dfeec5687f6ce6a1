//! # genaddr
//!
//! Brute-force Ethereum vanity address generator with wildcard patterns.
//!
//! ## Architecture
//!
//! - `matcher`: wildcard pattern engine (`*`, `#`, `@`, comma alternation)
//! - `crypto`: key generation and address derivation
//! - `worker`: parallel generation loop and worker pool
//! - `stats`: shared attempt counter and throughput
//! - `output`: append-mode match file
//! - `config`: CLI configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod output;
pub mod stats;
pub mod worker;

pub use config::Config;
pub use crypto::{Address, Keypair};
pub use matcher::{Pattern, PatternError, PatternSet};
pub use output::{OutputError, OutputSink};
pub use stats::SearchStats;
pub use worker::{VanityResult, WorkerPool};
