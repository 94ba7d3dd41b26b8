use crate::counter::{CounterHandle, Strategy};

/// One unit of concurrent work: a fixed number of increments on the shared counter.
///
/// A `Worker` value is the created state. It runs once a spawner moves it into
/// a thread, and it has terminated when the coordinator's join returns.
/// Nothing is returned; the counter is the only channel back.
#[derive(Debug)]
pub struct Worker {
    id: usize,
    counter: CounterHandle,
    increments: u64,
    strategy: Strategy,
}

impl Worker {
    pub fn new(id: usize, counter: CounterHandle, increments: u64, strategy: Strategy) -> Self {
        Worker {
            id,
            counter,
            increments,
            strategy,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn increments(&self) -> u64 {
        self.increments
    }

    /// Runs the increment loop to completion. No yielding, no cancellation.
    pub fn run(self) {
        for _ in 0..self.increments {
            self.counter.increment(self.strategy);
        }
    }
}
