use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("failed to spawn worker {index} ({spawned} already running): {source}")]
    Spawn {
        index: usize,
        spawned: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker {index} panicked before finishing its increments")]
    WorkerPanicked { index: usize },
}

impl RaceError {
    pub fn spawn(index: usize, spawned: usize, source: io::Error) -> Self {
        Self::Spawn {
            index,
            spawned,
            source,
        }
    }
}
