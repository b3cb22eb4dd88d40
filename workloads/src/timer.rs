use std::time::{Duration, Instant};

/// The value produced by a unit of work together with the wall-clock time it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Returns the elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Replaces the measured value, keeping the elapsed time.
    pub fn map<U, F>(self, f: F) -> Timed<U>
    where
        F: FnOnce(T) -> U,
    {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Executes `work` exactly once and measures how long it took.
///
/// Whatever `work` returns is handed back untouched, so a fallible unit of work yields a
/// `Timed<Result<..>>` and its error reaches the caller unchanged.
///
/// # Arguments
/// * `work` - The unit of work to measure.
///
/// # Returns
/// The work's output and its elapsed wall-clock time.
pub fn measure<T, F>(work: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = work();

    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Computes how many `count` units were processed per second.
///
/// # Returns
/// `None` if `elapsed` is zero, the rate is undefined then.
pub fn rate(count: u64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    (secs > 0.0).then(|| count as f64 / secs)
}
