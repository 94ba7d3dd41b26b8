use crate::config::ExperimentConfig;
use crate::counter::Strategy;
use serde::Serialize;
use std::fmt;

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub workers: usize,
    pub increments_per_worker: u64,
    pub spawned: usize,
    pub joined: usize,
    pub final_value: u64,
    pub expected: u64,
}

impl Report {
    pub fn new(config: &ExperimentConfig, spawned: usize, joined: usize, final_value: u64) -> Self {
        Report {
            strategy: config.strategy,
            workers: config.workers,
            increments_per_worker: config.increments,
            spawned,
            joined,
            final_value,
            expected: config.expected_total(),
        }
    }

    /// The one line the experiment prints.
    pub fn summary_line(&self) -> String {
        format!("Final value of counter is: {}", self.final_value)
    }

    pub fn lost_updates(&self) -> u64 {
        self.expected.saturating_sub(self.final_value)
    }

    /// Fraction of the expected increments that were overwritten.
    pub fn loss_ratio(&self) -> f64 {
        if self.expected == 0 {
            return 0.0;
        }
        self.lost_updates() as f64 / self.expected as f64
    }

    pub fn is_exact(&self) -> bool {
        self.final_value == self.expected
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(final_value: u64) -> Report {
        Report::new(&ExperimentConfig::new(20, 1_000_000), 20, 20, final_value)
    }

    #[test]
    fn summary_line_format() {
        let r = report(13_371_337);
        assert_eq!(r.summary_line(), "Final value of counter is: 13371337");
        assert_eq!(r.to_string(), r.summary_line());
    }

    #[test]
    fn lost_updates_against_expected() {
        let r = report(15_000_000);
        assert_eq!(r.expected, 20_000_000);
        assert_eq!(r.lost_updates(), 5_000_000);
        assert!((r.loss_ratio() - 0.25).abs() < f64::EPSILON);
        assert!(!r.is_exact());
    }

    #[test]
    fn exact_run_loses_nothing() {
        let r = report(20_000_000);
        assert!(r.is_exact());
        assert_eq!(r.lost_updates(), 0);
        assert_eq!(r.loss_ratio(), 0.0);
    }

    #[test]
    fn empty_run_has_zero_ratio() {
        let r = Report::new(&ExperimentConfig::new(0, 1_000_000), 0, 0, 0);
        assert_eq!(r.expected, 0);
        assert_eq!(r.loss_ratio(), 0.0);
        assert!(r.is_exact());
    }

    #[test]
    fn serializes_strategy_by_name() {
        let json = serde_json::to_value(report(1)).unwrap();
        assert_eq!(json["strategy"], "unsynchronized");
        assert_eq!(json["final_value"], 1);
        assert_eq!(json["expected"], 20_000_000);
    }
}
