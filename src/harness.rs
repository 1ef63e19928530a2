//! Pass/sample timing harness.
//!
//! One run times `passes` batches of `samples` back-to-back invocations
//! of the operation under test. Means divide by the pass count only, so
//! a mean still aggregates a full batch of samples. Ticks are the
//! nanoseconds of the monotonic clock (10^9 ticks per second).

use serde::Serialize;
use std::time::Instant;

/// Aggregated cost of one harness run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PassStats {
    pub cumulative_millis: u64,
    pub cumulative_ticks: u128,
    pub mean_millis: f64,
    pub mean_ticks: f64,
}

/// Time `passes` batches of `samples` invocations of `op`.
///
/// Panics from `op` propagate, and a slow operation simply blocks until
/// the run completes. Zero passes produce NaN means.
pub fn run_passes<F: FnMut()>(mut op: F, passes: u32, samples: u32) -> PassStats {
    let mut cumulative_millis: u64 = 0;
    let mut cumulative_ticks: u128 = 0;

    for _ in 0..passes {
        let start = Instant::now();
        for _ in 0..samples {
            op();
        }
        let elapsed = start.elapsed();
        cumulative_millis += elapsed.as_millis() as u64;
        cumulative_ticks += elapsed.as_nanos();
    }

    PassStats {
        cumulative_millis,
        cumulative_ticks,
        mean_millis: cumulative_millis as f64 / f64::from(passes),
        mean_ticks: cumulative_ticks as f64 / f64::from(passes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn invokes_op_passes_times_samples() {
        let mut calls = 0u32;
        run_passes(|| calls += 1, 7, 13);
        assert_eq!(calls, 7 * 13);
    }

    #[test]
    fn accumulates_at_least_the_injected_duration() {
        // sleep guarantees a lower bound only, so no upper bound is asserted
        let stats = run_passes(|| std::thread::sleep(Duration::from_millis(2)), 3, 4);
        assert!(stats.cumulative_millis >= 24);
        assert!(stats.cumulative_ticks >= 24_000_000);
    }

    #[test]
    fn means_divide_by_passes_only() {
        let stats = run_passes(|| std::thread::sleep(Duration::from_millis(1)), 4, 5);
        assert!((stats.mean_millis - stats.cumulative_millis as f64 / 4.0).abs() < f64::EPSILON);
        assert!((stats.mean_ticks - stats.cumulative_ticks as f64 / 4.0).abs() < 1.0);
        // each pass sleeps at least samples * 1ms
        assert!(stats.mean_millis >= 5.0);
    }
}
