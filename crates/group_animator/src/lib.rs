// SPDX-License-Identifier: MIT OR Apache-2.0
//! Grouped multi-property animation scheduling.
//!
//! This crate plays batches of property animations against one or more
//! targets:
//! - Entries ordered by start delay, duration and property
//! - Minimal batching of entries that share timing into one driver
//! - Resuming a timeline part-way through
//! - Mirrored reverse timelines built from live property values
//! - Progress estimation and cancellation of running drivers
//!
//! ## Architecture
//!
//! The animator is built on:
//! - A timeline store keyed by target
//! - Opaque target/driver capabilities supplied by the host
//! - A batch scheduler fed by the resume projector
//! - A registry of committed drivers

pub mod animator;
pub mod clock;
pub mod config;
pub mod driver;
pub mod entry;
pub mod error;
pub mod property;
pub mod registry;
pub mod resume;
pub mod reverse;
pub mod scheduler;
pub mod timeline;

#[cfg(test)]
mod testing;

pub use animator::GroupAnimator;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AnimatorConfig;
pub use driver::{AnimationDriver, AnimationTarget, TargetId};
pub use entry::{Entry, EntryKey};
pub use error::{AnimatorError, DriverError, Result};
pub use property::Property;
pub use registry::{ActiveRuns, RunStart};
pub use scheduler::{BatchFailure, ScheduledEntry};
pub use timeline::{CollisionPolicy, TargetSlot, TargetTimeline, TimelineStore};
