//! Turning workers into running threads.
//!
//! The coordinator only sees the `Spawner` trait, so tests can swap in a
//! spawner that refuses the k-th worker and check the fail-fast path without
//! exhausting real system resources.

use crate::worker::Worker;
use std::io;
use std::thread::{self, JoinHandle};

pub trait Spawner {
    /// Starts `worker` concurrently. An error means the worker never started.
    fn spawn(&self, worker: Worker) -> io::Result<JoinHandle<()>>;
}

/// Spawns each worker on its own named OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl ThreadSpawner {
    pub fn new() -> Self {
        ThreadSpawner
    }

    pub fn thread_name(id: usize) -> String {
        format!("worker-{}", id)
    }
}

impl Spawner for ThreadSpawner {
    fn spawn(&self, worker: Worker) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(Self::thread_name(worker.id()))
            .spawn(move || worker.run())
    }
}

impl<S: Spawner + ?Sized> Spawner for &S {
    fn spawn(&self, worker: Worker) -> io::Result<JoinHandle<()>> {
        (**self).spawn(worker)
    }
}
