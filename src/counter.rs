//! The shared counter and the ways of incrementing it.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Handle given to every worker. Nobody owns the counter exclusively.
pub type CounterHandle = Arc<SharedCounter>;

// =============================================================================
// Increment strategies
// =============================================================================

/// How a single increment touches the counter.
///
/// Only `Unsynchronized` is used by the experiment binary. The other two are
/// there so the lost updates can be compared against runs that lose nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Read the value, then write back value + 1 as a separate step.
    #[default]
    Unsynchronized,
    /// One indivisible `fetch_add`.
    Atomic,
    /// The same read/write pair as `Unsynchronized`, under a mutex.
    Locked,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Unsynchronized, Strategy::Atomic, Strategy::Locked];

    /// True when concurrent increments can overwrite each other.
    pub fn can_lose_updates(self) -> bool {
        matches!(self, Strategy::Unsynchronized)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Unsynchronized => "unsynchronized",
            Strategy::Atomic => "atomic",
            Strategy::Locked => "locked",
        };
        f.write_str(name)
    }
}

// =============================================================================
// SharedCounter
// =============================================================================

/// A single integer contended by every worker.
///
/// Plain memory written from several threads at once is undefined behaviour
/// in Rust, so the cell is an `AtomicU64`. The unsynchronized increment still
/// reads and writes in two separate relaxed operations: nothing stops another
/// worker from storing between them, which is exactly a lost update.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: AtomicU64,
    guard: Mutex<()>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh counter at zero, ready to hand out to workers.
    pub fn handle() -> CounterHandle {
        Arc::new(Self::new())
    }

    pub fn increment(&self, strategy: Strategy) {
        match strategy {
            Strategy::Unsynchronized => self.read_then_write(),
            Strategy::Atomic => {
                self.value.fetch_add(1, Ordering::Relaxed);
            }
            Strategy::Locked => {
                // A poisoned guard protects no data of its own, keep going.
                let _held = self.guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                self.read_then_write();
            }
        }
    }

    fn read_then_write(&self) {
        let current = self.value.load(Ordering::Relaxed);
        self.value.store(current.wrapping_add(1), Ordering::Relaxed);
    }

    /// Current value. Joining the workers first makes all of their writes visible.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SharedCounter::new().get(), 0);
        assert_eq!(SharedCounter::handle().get(), 0);
    }

    #[test]
    fn every_strategy_counts_exactly_on_one_thread() {
        for strategy in Strategy::ALL {
            let counter = SharedCounter::new();
            for _ in 0..500 {
                counter.increment(strategy);
            }
            assert_eq!(counter.get(), 500, "strategy {strategy}");
        }
    }

    #[test]
    fn synchronized_strategies_never_lose_updates() {
        for strategy in [Strategy::Atomic, Strategy::Locked] {
            let counter = SharedCounter::handle();
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let counter = Arc::clone(&counter);
                    thread::spawn(move || {
                        for _ in 0..10_000 {
                            counter.increment(strategy);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(counter.get(), 80_000, "strategy {strategy}");
        }
    }

    #[test]
    fn unsynchronized_never_overcounts() {
        let counter = SharedCounter::handle();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..10_000 {
                        counter.increment(Strategy::Unsynchronized);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let value = counter.get();
        assert!(value <= 80_000, "counted {value}");
    }

    #[test]
    fn only_the_default_strategy_loses_updates() {
        assert_eq!(Strategy::default(), Strategy::Unsynchronized);
        assert!(Strategy::Unsynchronized.can_lose_updates());
        assert!(!Strategy::Atomic.can_lose_updates());
        assert!(!Strategy::Locked.can_lose_updates());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::Unsynchronized.to_string(), "unsynchronized");
        assert_eq!(
            serde_json::to_string(&Strategy::Locked).unwrap(),
            "\"locked\""
        );
    }
}
