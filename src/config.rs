use crate::counter::Strategy;

/// Workers started by the experiment binary.
pub const NUM_WORKERS: usize = 20;

/// Increments performed by each worker.
pub const NUM_INCREMENTS: u64 = 1_000_000;

/// Parameters of one run. There is no file or environment layer; the binary
/// always uses `ExperimentConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    pub workers: usize,
    pub increments: u64,
    pub strategy: Strategy,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            workers: NUM_WORKERS,
            increments: NUM_INCREMENTS,
            strategy: Strategy::Unsynchronized,
        }
    }
}

impl ExperimentConfig {
    pub fn new(workers: usize, increments: u64) -> Self {
        ExperimentConfig {
            workers,
            increments,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The value a correctly synchronized run would end with.
    pub fn expected_total(&self) -> u64 {
        (self.workers as u64).saturating_mul(self.increments)
    }
}
