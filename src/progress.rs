//! Advisory reporting hook. Nothing reported here feeds back into mining.

use tracing::info;

use crate::types::ItemsetLength;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Level `level` is about to be evaluated from a pool of `pool_size`
    /// itemsets (distinct items for level 1, |L_{k-1}| afterwards).
    LevelStarted {
        level: ItemsetLength,
        pool_size: usize,
    },
    /// Level `level` admitted `frequent` itemsets.
    LevelFinished {
        level: ItemsetLength,
        frequent: usize,
    },
}

pub trait Progress {
    fn level_started(&mut self, _level: ItemsetLength, _pool_size: usize) {}
    fn level_finished(&mut self, _level: ItemsetLength, _frequent: usize) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn level_started(&mut self, level: ItemsetLength, pool_size: usize) {
        info!(level, pool_size, "evaluating level");
    }

    fn level_finished(&mut self, level: ItemsetLength, frequent: usize) {
        info!(level, frequent, "level done");
    }
}

impl<F> Progress for F
where
    F: FnMut(ProgressEvent),
{
    fn level_started(&mut self, level: ItemsetLength, pool_size: usize) {
        self(ProgressEvent::LevelStarted { level, pool_size })
    }

    fn level_finished(&mut self, level: ItemsetLength, frequent: usize) {
        self(ProgressEvent::LevelFinished { level, frequent })
    }
}
