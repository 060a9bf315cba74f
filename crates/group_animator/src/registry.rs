// SPDX-License-Identifier: MIT OR Apache-2.0
//! Active-run registry and progress estimation.

use crate::driver::AnimationDriver;
use std::time::Instant;

/// Drivers started by the animator and not yet cancelled
#[derive(Debug)]
pub struct ActiveRuns<D> {
    drivers: Vec<D>,
}

impl<D: AnimationDriver> ActiveRuns<D> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    /// Track newly committed drivers. Earlier drivers stay tracked.
    pub fn extend(&mut self, drivers: impl IntoIterator<Item = D>) {
        self.drivers.extend(drivers);
    }

    /// Cancel every tracked driver and forget them
    pub fn cancel_all(&mut self) {
        if !self.drivers.is_empty() {
            tracing::debug!("Cancelling {} active drivers", self.drivers.len());
        }
        for mut driver in self.drivers.drain(..) {
            driver.cancel();
        }
    }

    /// Get tracked driver count
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Whether nothing is tracked
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl<D: AnimationDriver> Default for ActiveRuns<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// When the current run started, in timeline terms
///
/// A run resumed at `offset_ms` behaves as if it had started `offset_ms`
/// before `instant`. Keeping the offset separate avoids subtracting from an
/// `Instant`, which can underflow close to process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStart {
    /// Wall-clock instant `start` was called
    pub instant: Instant,
    /// Timeline position the run resumed from (ms)
    pub offset_ms: u32,
}

impl RunStart {
    /// Elapsed timeline time at `now` (ms)
    pub fn elapsed_ms(&self, now: Instant) -> u128 {
        now.saturating_duration_since(self.instant).as_millis() + u128::from(self.offset_ms)
    }

    /// Fraction of `length_ms` elapsed at `now`, clamped to `[0, 1]`
    ///
    /// A zero-length timeline is always complete.
    pub fn percent(&self, now: Instant, length_ms: u32) -> f32 {
        if length_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.instant).as_secs_f64() * 1000.0
            + f64::from(self.offset_ms);
        (elapsed / f64::from(length_ms)).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::AnimationTarget;
    use crate::testing::{DriverCall, RecordingTarget};
    use std::time::Duration;

    #[test]
    fn test_cancel_all_clears() {
        let target = RecordingTarget::new();
        let mut runs = ActiveRuns::new();
        runs.extend([target.begin_driver().unwrap(), target.begin_driver().unwrap()]);
        assert_eq!(runs.len(), 2);

        runs.cancel_all();
        assert!(runs.is_empty());
        let cancels = target
            .calls()
            .iter()
            .filter(|c| **c == DriverCall::Cancel)
            .count();
        assert_eq!(cancels, 2);

        // Idempotent on an empty registry
        runs.cancel_all();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_percent_bounds() {
        let start = RunStart {
            instant: Instant::now(),
            offset_ms: 0,
        };
        assert_eq!(start.percent(start.instant, 1000), 0.0);
        assert_eq!(start.percent(start.instant + Duration::from_millis(500), 1000), 0.5);
        assert_eq!(start.percent(start.instant + Duration::from_millis(5000), 1000), 1.0);
        assert_eq!(start.percent(start.instant, 0), 1.0);
    }

    #[test]
    fn test_percent_counts_resume_offset() {
        let start = RunStart {
            instant: Instant::now(),
            offset_ms: 1500,
        };
        assert_eq!(start.percent(start.instant, 2000), 0.75);
        assert_eq!(start.elapsed_ms(start.instant + Duration::from_millis(100)), 1600);
    }
}
