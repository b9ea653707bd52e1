//! Inter-call pacing port.

use std::thread;
use std::time::Duration;

/// Injectable wait between consecutive backend calls, so tests can run
/// without wall-clock delays.
pub trait Pacer {
    fn pause(&self, interval: Duration);
}

/// Wall-clock pacer used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Pacer that skips the wait entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&self, _interval: Duration) {}
}
