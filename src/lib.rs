//! Lost updates on a shared counter.
//!
//! A fixed number of worker threads each increment one shared counter a fixed
//! number of times. The default increment is a plain read followed by a write
//! back, with nothing guarding the pair, so concurrent workers overwrite each
//! other's progress and the final value usually falls short of
//! `workers * increments`.
//!
//! ```no_run
//! use race_counter::{Coordinator, ExperimentConfig};
//!
//! let report = Coordinator::new(ExperimentConfig::default()).run()?;
//! println!("{}", report.summary_line());
//! # Ok::<(), race_counter::RaceError>(())
//! ```

pub mod config;
pub mod coordinator;
pub mod counter;
pub mod error;
pub mod report;
pub mod spawner;
pub mod worker;

pub use config::{ExperimentConfig, NUM_INCREMENTS, NUM_WORKERS};
pub use coordinator::{report_run, Coordinator, Phase};
pub use counter::{CounterHandle, SharedCounter, Strategy};
pub use error::RaceError;
pub use report::Report;
pub use spawner::{Spawner, ThreadSpawner};
pub use worker::Worker;
