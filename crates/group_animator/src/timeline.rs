// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-target timelines and the store that groups them.

use crate::driver::{AnimationTarget, TargetId};
use crate::entry::{Entry, EntryKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// What to do when an entry's key is already present in a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Keep the entry registered first and drop the newcomer
    #[default]
    KeepFirst,
    /// Replace the stored value with the newcomer's
    KeepLast,
}

/// The ordered set of entries for one target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetTimeline {
    entries: BTreeMap<EntryKey, f32>,
}

impl TargetTimeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns false if the key collided and the stored
    /// value was kept.
    pub fn insert(&mut self, entry: Entry, policy: CollisionPolicy) -> bool {
        match self.entries.entry(entry.key()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry.value);
                true
            }
            btree_map::Entry::Occupied(mut slot) => {
                let (kept, discarded) = match policy {
                    CollisionPolicy::KeepFirst => (*slot.get(), entry.value),
                    CollisionPolicy::KeepLast => (entry.value, slot.insert(entry.value)),
                };
                tracing::debug!(
                    "Entry collision on {} at ({}ms, {}ms): kept {}, discarded {}",
                    entry.property,
                    entry.start_delay,
                    entry.duration,
                    kept,
                    discarded
                );
                policy == CollisionPolicy::KeepLast
            }
        }
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Entry> + '_ {
        self.entries.iter().map(|(key, value)| Entry::from_key(*key, *value))
    }

    /// Look up the entry stored under a key
    pub fn get(&self, key: &EntryKey) -> Option<Entry> {
        self.entries.get(key).map(|value| Entry::from_key(*key, *value))
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A target together with its timeline
#[derive(Debug, Clone)]
pub struct TargetSlot<T> {
    /// The animated target
    pub target: T,
    /// Entries registered for it
    pub timeline: TargetTimeline,
}

/// Timelines for every registered target, plus the aggregate length
#[derive(Debug, Clone)]
pub struct TimelineStore<T> {
    slots: IndexMap<TargetId, TargetSlot<T>>,
    animation_length: u32,
    policy: CollisionPolicy,
}

impl<T: AnimationTarget> TimelineStore<T> {
    /// Create an empty store
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            slots: IndexMap::new(),
            animation_length: 0,
            policy,
        }
    }

    /// Register an entry against a target
    ///
    /// The aggregate length grows even when the entry collides, since a
    /// colliding entry shares the stored entry's total duration.
    pub fn register(&mut self, target: &T, entry: Entry) -> bool {
        let slot = self
            .slots
            .entry(target.target_id())
            .or_insert_with(|| TargetSlot {
                target: target.clone(),
                timeline: TargetTimeline::new(),
            });

        tracing::debug!(
            "Registering {} -> {} ({}ms after {}ms) on {:?}",
            entry.property,
            entry.value,
            entry.duration,
            entry.start_delay,
            target.target_id()
        );
        let stored = slot.timeline.insert(entry, self.policy);
        self.animation_length = self.animation_length.max(entry.total_duration());
        stored
    }

    /// Raise the aggregate length to at least `length`
    pub(crate) fn extend_length(&mut self, length: u32) {
        self.animation_length = self.animation_length.max(length);
    }

    /// Maximum total duration over every entry of every target
    pub fn animation_length(&self) -> u32 {
        self.animation_length
    }

    /// Collision policy applied on registration
    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Timeline of one target
    pub fn timeline(&self, id: TargetId) -> Option<&TargetTimeline> {
        self.slots.get(&id).map(|slot| &slot.timeline)
    }

    /// All targets with their timelines, in first-registration order
    pub fn slots(&self) -> impl Iterator<Item = &TargetSlot<T>> {
        self.slots.values()
    }

    /// Get target count
    pub fn target_count(&self) -> usize {
        self.slots.len()
    }
}
