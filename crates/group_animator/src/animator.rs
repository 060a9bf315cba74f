// SPDX-License-Identifier: MIT OR Apache-2.0
//! The group animator: builder surface and run control.
//!
//! The per-property calls (`rotation`, `alpha`, ...) use the current default
//! timing. For an explicit duration use [`GroupAnimator::animate_for`], and for
//! an explicit duration and delay use [`GroupAnimator::animate_with`].
//!
//! ```ignore
//! let mut animator = GroupAnimator::new(AnimatorConfig::default());
//! animator
//!     .using_target(&view)
//!     .using_duration(1000)
//!     .rotation(360.0)?
//!     .using_timing(1000, 1000)
//!     .alpha(0.0)?
//!     .using_timing(500, 1500)
//!     .scale_x(0.0)?;
//! animator.start()?;
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::AnimatorConfig;
use crate::driver::{AnimationTarget, TargetId};
use crate::entry::Entry;
use crate::error::{AnimatorError, Result};
use crate::property::Property;
use crate::registry::{ActiveRuns, RunStart};
use crate::resume;
use crate::reverse;
use crate::scheduler;
use crate::timeline::{TargetSlot, TargetTimeline, TimelineStore};
use std::rc::Rc;

/// Grouped multi-property animation over one or more targets
pub struct GroupAnimator<T: AnimationTarget> {
    store: TimelineStore<T>,
    target: Option<T>,
    default_duration: u32,
    default_delay: u32,
    run_start: Option<RunStart>,
    active: ActiveRuns<T::Driver>,
    clock: Rc<dyn Clock>,
}

impl<T: AnimationTarget> GroupAnimator<T> {
    /// Create an animator on the system clock
    pub fn new(config: AnimatorConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Create an animator reading time from `clock`
    pub fn with_clock(config: AnimatorConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            store: TimelineStore::new(config.collision),
            target: None,
            default_duration: config.default_duration_ms,
            default_delay: config.default_delay_ms,
            run_start: None,
            active: ActiveRuns::new(),
            clock,
        }
    }

    // ------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------

    /// Direct subsequent registrations at `target`
    pub fn using_target(&mut self, target: &T) -> &mut Self {
        self.target = Some(target.clone());
        self
    }

    /// Set both default duration and delay
    pub fn using_timing(&mut self, duration: u32, delay: u32) -> &mut Self {
        self.default_duration = duration;
        self.default_delay = delay;
        self
    }

    /// Set the default duration
    pub fn using_duration(&mut self, duration: u32) -> &mut Self {
        self.default_duration = duration;
        self
    }

    /// Set the default delay
    pub fn with_delay(&mut self, delay: u32) -> &mut Self {
        self.default_delay = delay;
        self
    }

    /// Animate `property` to `value` with the default timing
    ///
    /// This is what every per-property call goes through; see
    /// [`animate_for`](Self::animate_for) and [`animate_with`](Self::animate_with)
    /// for explicit timing.
    pub fn animate(&mut self, property: Property, value: f32) -> Result<&mut Self> {
        self.animate_with(property, value, self.default_duration, self.default_delay)
    }

    /// Animate `property` to `value` over `duration` after the default delay
    pub fn animate_for(&mut self, property: Property, value: f32, duration: u32) -> Result<&mut Self> {
        self.animate_with(property, value, duration, self.default_delay)
    }

    /// Animate `property` to `value` over `duration` after `start_delay`
    pub fn animate_with(
        &mut self,
        property: Property,
        value: f32,
        duration: u32,
        start_delay: u32,
    ) -> Result<&mut Self> {
        let target = self.target.as_ref().ok_or(AnimatorError::NoTarget)?;
        self.store
            .register(target, Entry::new(property, value, duration, start_delay));
        Ok(self)
    }

    /// Animate the x translation
    pub fn translation_x(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::TranslationX, value)
    }

    /// Animate the y translation
    pub fn translation_y(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::TranslationY, value)
    }

    /// Animate the z translation
    pub fn translation_z(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::TranslationZ, value)
    }

    /// Animate the x scale
    pub fn scale_x(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::ScaleX, value)
    }

    /// Animate the y scale
    pub fn scale_y(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::ScaleY, value)
    }

    /// Animate the rotation
    pub fn rotation(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::Rotation, value)
    }

    /// Animate the rotation around the x axis
    pub fn rotation_x(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::RotationX, value)
    }

    /// Animate the rotation around the y axis
    pub fn rotation_y(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::RotationY, value)
    }

    /// Animate the x coordinate
    pub fn x(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::X, value)
    }

    /// Animate the y coordinate
    pub fn y(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::Y, value)
    }

    /// Animate the z coordinate
    pub fn z(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::Z, value)
    }

    /// Animate the alpha
    pub fn alpha(&mut self, value: f32) -> Result<&mut Self> {
        self.animate(Property::Alpha, value)
    }

    // ------------------------------------------------------------------
    // Run control
    // ------------------------------------------------------------------

    /// Play the whole timeline from the beginning
    pub fn start(&mut self) -> Result<()> {
        self.start_at_ms(0)
    }

    /// Play from a fraction of the timeline, clamped to `[0, 1]`
    pub fn start_at(&mut self, fraction: f32) -> Result<()> {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let offset = (f64::from(fraction) * f64::from(self.animation_length())).round() as u32;
        self.start_at_ms(offset)
    }

    /// Play from `offset_ms` into the timeline, clamped to its length
    ///
    /// Drivers from an earlier run are not cancelled; call [`cancel`] first
    /// when restarting. On a driver failure the drivers already committed by
    /// this call stay tracked, so `cancel` still reaches them.
    ///
    /// [`cancel`]: Self::cancel
    pub fn start_at_ms(&mut self, offset_ms: u32) -> Result<()> {
        let offset_ms = offset_ms.min(self.animation_length());
        tracing::debug!(
            "Starting {} targets at {}ms of {}ms",
            self.store.target_count(),
            offset_ms,
            self.animation_length()
        );

        for slot in self.store.slots() {
            let projected = resume::project(slot.timeline.iter(), offset_ms);
            match scheduler::schedule_and_run(&slot.target, projected) {
                Ok(committed) => self.active.extend(committed),
                Err(failure) => {
                    tracing::warn!("Driver failed for {:?}: {}", slot.target.target_id(), failure.error);
                    self.active.extend(failure.committed);
                    return Err(failure.error.into());
                }
            }
        }

        self.run_start = Some(RunStart {
            instant: self.clock.now(),
            offset_ms,
        });
        Ok(())
    }

    /// Cancel every driver started so far
    pub fn cancel(&mut self) {
        self.active.cancel_all();
    }

    /// Build the time-reversed animator, sampling target values now
    ///
    /// The result shares no state with `self` beyond the targets and clock.
    pub fn clone_reverse(&self) -> Self {
        let store = reverse::reverse_of(&self.store, |target, property| target.value(property));
        Self {
            store,
            target: self.target.clone(),
            default_duration: self.default_duration,
            default_delay: self.default_delay,
            run_start: None,
            active: ActiveRuns::new(),
            clock: Rc::clone(&self.clock),
        }
    }

    /// Fraction of the timeline elapsed since the last start, in `[0, 1]`
    ///
    /// A zero-length timeline reports `1.0`; one that was never started
    /// reports `0.0`.
    pub fn animation_percent(&self) -> f32 {
        let length = self.animation_length();
        if length == 0 {
            return 1.0;
        }
        self.run_start
            .map_or(0.0, |start| start.percent(self.clock.now(), length))
    }

    /// Timeline time elapsed since the last start (ms), if started
    pub fn elapsed_ms(&self) -> Option<u128> {
        self.run_start.map(|start| start.elapsed_ms(self.clock.now()))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Maximum total duration over every registered entry (ms)
    pub fn animation_length(&self) -> u32 {
        self.store.animation_length()
    }

    /// Duration applied when a registration omits one (ms)
    pub fn default_duration(&self) -> u32 {
        self.default_duration
    }

    /// Delay applied when a registration omits one (ms)
    pub fn default_delay(&self) -> u32 {
        self.default_delay
    }

    /// Timeline registered for a target
    pub fn timeline(&self, id: TargetId) -> Option<&TargetTimeline> {
        self.store.timeline(id)
    }

    /// Every target with its timeline
    pub fn targets(&self) -> impl Iterator<Item = &TargetSlot<T>> {
        self.store.slots()
    }

    /// Get target count
    pub fn target_count(&self) -> usize {
        self.store.target_count()
    }

    /// Number of drivers currently tracked for cancellation
    pub fn active_run_count(&self) -> usize {
        self.active.len()
    }

    /// Whether `start` has been called on this animator
    pub fn is_started(&self) -> bool {
        self.run_start.is_some()
    }
}

impl<T: AnimationTarget> Default for GroupAnimator<T> {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

impl<T: AnimationTarget + std::fmt::Debug> std::fmt::Debug for GroupAnimator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupAnimator")
            .field("store", &self.store)
            .field("target", &self.target)
            .field("default_duration", &self.default_duration)
            .field("default_delay", &self.default_delay)
            .field("run_start", &self.run_start)
            .field("active_runs", &self.active.len())
            .finish_non_exhaustive()
    }
}
