//! Spawning the workers, waiting for all of them and reading the result.

use crate::config::ExperimentConfig;
use crate::counter::SharedCounter;
use crate::error::RaceError;
use crate::report::Report;
use crate::spawner::{Spawner, ThreadSpawner};
use crate::worker::Worker;
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spawning,
    WaitingForAll,
    Reporting,
    Done,
}

pub struct Coordinator<S: Spawner = ThreadSpawner> {
    config: ExperimentConfig,
    spawner: S,
    history: Vec<Phase>,
}

impl Coordinator<ThreadSpawner> {
    pub fn new(config: ExperimentConfig) -> Self {
        Self::with_spawner(config, ThreadSpawner::new())
    }
}

impl<S: Spawner> Coordinator<S> {
    pub fn with_spawner(config: ExperimentConfig, spawner: S) -> Self {
        Coordinator {
            config,
            spawner,
            history: vec![Phase::Idle],
        }
    }

    pub fn phase(&self) -> Phase {
        self.history.last().copied().unwrap_or(Phase::Idle)
    }

    /// Phases entered by the latest run, starting with `Idle`.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    fn enter(&mut self, phase: Phase) {
        self.history.push(phase);
    }

    /// Runs one experiment.
    ///
    /// The first spawn failure ends the run at once. Workers that already
    /// started are not joined: their handles are dropped and they keep running
    /// detached until the process exits. Once every worker is up, all of them
    /// are joined before the counter is read, so the report only ever reflects
    /// finished workers.
    pub fn run(&mut self) -> Result<Report, RaceError> {
        let counter = SharedCounter::handle();

        self.history = vec![Phase::Idle];
        self.enter(Phase::Spawning);
        let mut handles = Vec::with_capacity(self.config.workers);
        for id in 0..self.config.workers {
            let worker = Worker::new(
                id,
                Arc::clone(&counter),
                self.config.increments,
                self.config.strategy,
            );
            match self.spawner.spawn(worker) {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    self.enter(Phase::Done);
                    return Err(RaceError::spawn(id, handles.len(), source));
                }
            }
        }
        let spawned = handles.len();

        self.enter(Phase::WaitingForAll);
        let mut joined = 0;
        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                self.enter(Phase::Done);
                return Err(RaceError::WorkerPanicked { index });
            }
            joined += 1;
        }

        self.enter(Phase::Reporting);
        let report = Report::new(&self.config, spawned, joined, counter.get());
        self.enter(Phase::Done);

        Ok(report)
    }
}

/// Runs the experiment and writes its outcome the way the binary prints it.
///
/// The summary line goes to `out` only on success. A failure writes one
/// `error:` line to `err` and leaves `out` untouched. Returns the process exit
/// code.
pub fn report_run<S: Spawner>(
    coordinator: &mut Coordinator<S>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match coordinator.run() {
        Ok(report) => match writeln!(out, "{}", report.summary_line()).and_then(|()| out.flush()) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Err(race) => {
            // Nothing better to do if stderr itself is gone.
            let _ = writeln!(err, "{} {}", "error:".red().bold(), race);
            1
        }
    }
}
