use std::thread;
use std::time::Duration;

/// Holds a frame on screen between suspension points.
pub trait Pacer: Send + Sync {
    fn wait(&self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn wait(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Runs as fast as the worker can step. Used headlessly and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelayPacer;

impl Pacer for NoDelayPacer {
    fn wait(&self, _delay: Duration) {
        thread::yield_now();
    }
}
