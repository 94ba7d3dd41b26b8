//! Twenty threads, a million unguarded increments each, one shared counter.
//!
//! Run with: cargo run --release --bin counter_race

use race_counter::{report_run, Coordinator, ExperimentConfig};
use std::io;
use std::process;

fn main() {
    let mut coordinator = Coordinator::new(ExperimentConfig::default());
    let code = report_run(&mut coordinator, &mut io::stdout(), &mut io::stderr());
    process::exit(code);
}
