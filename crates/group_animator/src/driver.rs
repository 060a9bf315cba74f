// SPDX-License-Identifier: MIT OR Apache-2.0
//! Capabilities the animator consumes from targets and their drivers.
//!
//! The animator never touches platform state directly. A target reports its
//! live property values and hands out drivers; a driver accepts one
//! `(delay, duration)` configuration plus any number of property targets, and
//! plays them once committed on whatever loop the platform runs.

use crate::error::DriverError;
use crate::property::Property;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of an animation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub Uuid);

impl TargetId {
    /// Create a new random target ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

/// An object whose properties can be animated
pub trait AnimationTarget: Clone {
    /// Batch driver type handed out by this target
    type Driver: AnimationDriver;

    /// Identity used to key this target's timeline
    fn target_id(&self) -> TargetId;

    /// Current live value of a property
    ///
    /// Must return a defined default (usually `0.0`) for channels the target
    /// does not support.
    fn value(&self, property: Property) -> f32;

    /// Acquire a fresh, unconfigured driver
    fn begin_driver(&self) -> Result<Self::Driver, DriverError>;
}

/// A configurable batch of property animations that plays as one unit
pub trait AnimationDriver {
    /// Set the delay and duration shared by every property in the batch
    fn configure(&mut self, delay_ms: u32, duration_ms: u32);

    /// Add a property to animate towards `value`
    fn set_target(&mut self, property: Property, value: f32);

    /// Start playback
    fn commit(&mut self) -> Result<(), DriverError>;

    /// Request cancellation. Best effort; values are not reset.
    fn cancel(&mut self);
}
