// SPDX-License-Identifier: MIT OR Apache-2.0
//! Batch scheduler.
//!
//! Turns an ordered run of entries into the fewest driver invocations:
//! consecutive entries sharing a `(delay, duration)` pair go through one
//! driver, and the driver is committed as soon as the pair changes.

use crate::driver::{AnimationDriver, AnimationTarget};
use crate::error::DriverError;
use crate::property::Property;

/// An entry with the timing it will actually be played with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEntry {
    /// Effective delay (ms)
    pub delay: u32,
    /// Effective duration (ms)
    pub duration: u32,
    /// Animated channel
    pub property: Property,
    /// Value to animate to
    pub value: f32,
}

impl ScheduledEntry {
    /// The timing pair batches are split on
    pub fn timing(&self) -> (u32, u32) {
        (self.delay, self.duration)
    }
}

/// Driver failure part-way through a run
///
/// Drivers committed before the failure are handed back so the caller can
/// still cancel them.
#[derive(Debug)]
pub struct BatchFailure<D> {
    /// Drivers committed before the failure, in commit order
    pub committed: Vec<D>,
    /// The underlying failure
    pub error: DriverError,
}

/// Issue driver invocations for one target
///
/// Returns the committed drivers in commit order; the last element is the
/// most recently committed one. An empty input acquires nothing.
pub fn schedule_and_run<T, I>(target: &T, entries: I) -> Result<Vec<T::Driver>, BatchFailure<T::Driver>>
where
    T: AnimationTarget,
    I: IntoIterator<Item = ScheduledEntry>,
{
    let mut committed = Vec::new();
    let mut active: Option<((u32, u32), T::Driver)> = None;

    for entry in entries {
        if let Some((timing, driver)) = active.take_if(|(timing, _)| *timing != entry.timing()) {
            commit(driver, timing, &mut committed)?;
        }

        if active.is_none() {
            let mut driver = match target.begin_driver() {
                Ok(driver) => driver,
                Err(error) => return Err(BatchFailure { committed, error }),
            };
            driver.configure(entry.delay, entry.duration);
            active = Some((entry.timing(), driver));
        }

        if let Some((_, driver)) = active.as_mut() {
            tracing::trace!(
                "Batch ({}ms, {}ms): {} -> {}",
                entry.delay,
                entry.duration,
                entry.property,
                entry.value
            );
            driver.set_target(entry.property, entry.value);
        }
    }

    if let Some((timing, driver)) = active {
        commit(driver, timing, &mut committed)?;
    }

    Ok(committed)
}

fn commit<D: AnimationDriver>(
    mut driver: D,
    (delay, duration): (u32, u32),
    committed: &mut Vec<D>,
) -> Result<(), BatchFailure<D>> {
    tracing::debug!("Committing batch at ({}ms, {}ms)", delay, duration);
    match driver.commit() {
        Ok(()) => {
            committed.push(driver);
            Ok(())
        }
        Err(error) => Err(BatchFailure {
            committed: std::mem::take(committed),
            error,
        }),
    }
}
