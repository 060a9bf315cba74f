// SPDX-License-Identifier: MIT OR Apache-2.0
//! Resume projection: re-timing a timeline to start part-way through.

use crate::entry::Entry;
use crate::scheduler::ScheduledEntry;

/// Re-time one entry for a start `offset_ms` into the timeline
///
/// Returns `None` when the entry has already finished by a non-zero offset.
/// At offset 0 every entry is kept, zero-length snaps included. An entry that
/// has not started yet keeps its duration with a shortened delay; one that is
/// mid-flight starts immediately and plays only its remaining time.
pub fn project_entry(entry: &Entry, offset_ms: u32) -> Option<ScheduledEntry> {
    let total = entry.total_duration();
    if offset_ms > 0 && total <= offset_ms {
        return None;
    }

    let (delay, duration) = if offset_ms <= entry.start_delay {
        (entry.start_delay - offset_ms, entry.duration)
    } else {
        (0, total - offset_ms)
    };

    Some(ScheduledEntry {
        delay,
        duration,
        property: entry.property,
        value: entry.value,
    })
}

/// Re-time an ordered run of entries, keeping their original order
///
/// `offset_ms` must already be clamped to the animation length.
pub fn project<I>(entries: I, offset_ms: u32) -> Vec<ScheduledEntry>
where
    I: IntoIterator<Item = Entry>,
{
    let projected: Vec<ScheduledEntry> = entries
        .into_iter()
        .filter_map(|entry| project_entry(&entry, offset_ms))
        .collect();
    if offset_ms > 0 {
        tracing::debug!("Projected {} entries from {}ms", projected.len(), offset_ms);
    }
    projected
}
