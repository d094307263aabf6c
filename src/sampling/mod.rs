//! Match and sampling drivers.
//!
//! ## Overview
//!
//! - **play_match**: one match between two strategies on a board
//! - **Sampler**: many seeded matches, sequential or on the rayon pool
//! - **SampleStats**: wins, draws and game lengths over a sample
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use sogo::geometry::Catalog;
//! use sogo::sampling::{SampleConfig, Sampler};
//!
//! let catalog = Arc::new(Catalog::build());
//! let config = SampleConfig::default().with_games(10).with_seed(7);
//! let stats = Sampler::new(catalog, config).run().unwrap();
//! assert_eq!(stats.games, 10);
//! ```

pub mod config;
pub mod playout;
pub mod runner;
pub mod stats;

pub use config::SampleConfig;
pub use playout::{play_match, MatchRecord, Outcome};
pub use runner::Sampler;
pub use stats::SampleStats;
