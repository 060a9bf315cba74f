// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation entries and their ordering key.

use crate::property::Property;
use std::cmp::Ordering;

/// Ordering and identity key of an entry
///
/// Keys compare by `(start_delay, duration, property id)`. The animated value
/// never takes part, so two entries that differ only in value share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    /// Delay before the entry starts playing (ms)
    pub start_delay: u32,
    /// Playing time (ms)
    pub duration: u32,
    /// Animated channel
    pub property: Property,
}

impl EntryKey {
    /// Delay plus duration
    pub fn total_duration(&self) -> u32 {
        self.start_delay.saturating_add(self.duration)
    }
}

impl Ord for EntryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start_delay, self.duration, self.property.id()).cmp(&(
            other.start_delay,
            other.duration,
            other.property.id(),
        ))
    }
}

impl PartialOrd for EntryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One scheduled change of one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Animated channel
    pub property: Property,
    /// Value the property animates to
    pub value: f32,
    /// Playing time (ms)
    pub duration: u32,
    /// Delay before playing (ms)
    pub start_delay: u32,
}

impl Entry {
    /// Create a new entry
    pub fn new(property: Property, value: f32, duration: u32, start_delay: u32) -> Self {
        Self {
            property,
            value,
            duration,
            start_delay,
        }
    }

    /// Rebuild an entry from its key and value
    pub fn from_key(key: EntryKey, value: f32) -> Self {
        Self::new(key.property, value, key.duration, key.start_delay)
    }

    /// Get the ordering key
    pub fn key(&self) -> EntryKey {
        EntryKey {
            start_delay: self.start_delay,
            duration: self.duration,
            property: self.property,
        }
    }

    /// Delay plus duration
    pub fn total_duration(&self) -> u32 {
        self.key().total_duration()
    }
}
