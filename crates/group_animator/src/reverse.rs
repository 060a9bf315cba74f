// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reverse projection: mirroring a timeline back towards live values.

use crate::driver::AnimationTarget;
use crate::entry::Entry;
use crate::property::Property;
use crate::timeline::TimelineStore;

/// Build the time-mirrored store of `source`
///
/// Each entry keeps its duration and starts at `length - total_duration`, so
/// what plays last forward plays first in reverse. Values are read through
/// `live` at call time, not copied from the source entries.
pub fn reverse_of<T, F>(source: &TimelineStore<T>, mut live: F) -> TimelineStore<T>
where
    T: AnimationTarget,
    F: FnMut(&T, Property) -> f32,
{
    let length = source.animation_length();
    let mut reversed = TimelineStore::new(source.policy());

    for slot in source.slots() {
        for entry in slot.timeline.iter().rev() {
            let mirrored = Entry::new(
                entry.property,
                live(&slot.target, entry.property),
                entry.duration,
                length - entry.total_duration(),
            );
            reversed.register(&slot.target, mirrored);
        }
    }

    // Entries that all start late still leave the mirror as long as the source.
    reversed.extend_length(length);
    tracing::debug!(
        "Reversed {} targets over {}ms",
        reversed.target_count(),
        length
    );
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTarget;
    use crate::timeline::CollisionPolicy;

    #[test]
    fn test_reverse_mirrors_start_times() {
        let target = RecordingTarget::new();
        target.set_value(Property::Rotation, 0.0);
        target.set_value(Property::Alpha, 1.0);
        target.set_value(Property::ScaleX, 1.0);

        let mut store = TimelineStore::new(CollisionPolicy::KeepFirst);
        store.register(&target, Entry::new(Property::Rotation, 360.0, 1000, 0));
        store.register(&target, Entry::new(Property::Alpha, 0.0, 1000, 1000));
        store.register(&target, Entry::new(Property::ScaleX, 0.0, 500, 1500));

        let reversed = reverse_of(&store, |t, p| t.value(p));
        assert_eq!(reversed.animation_length(), 2000);

        let mut entries: Vec<Entry> = reversed
            .timeline(target.target_id())
            .map(|t| t.iter().collect())
            .unwrap_or_default();
        entries.sort_by_key(|e| e.property.id());
        assert_eq!(
            entries,
            vec![
                Entry::new(Property::ScaleX, 1.0, 500, 0),
                Entry::new(Property::Rotation, 0.0, 1000, 1000),
                Entry::new(Property::Alpha, 1.0, 1000, 0),
            ]
        );
    }

    #[test]
    fn test_full_span_entries_start_at_zero() {
        let target = RecordingTarget::new();
        let mut store = TimelineStore::new(CollisionPolicy::KeepFirst);
        store.register(&target, Entry::new(Property::X, 5.0, 800, 200));
        store.register(&target, Entry::new(Property::Y, 5.0, 1000, 0));

        let reversed = reverse_of(&store, |_, _| 0.0);
        let delays: Vec<(Property, u32)> = reversed
            .timeline(target.target_id())
            .map(|t| t.iter().map(|e| (e.property, e.start_delay)).collect())
            .unwrap_or_default();
        assert!(delays.contains(&(Property::X, 0)));
        assert!(delays.contains(&(Property::Y, 0)));
    }

    #[test]
    fn test_length_preserved_when_nothing_starts_at_zero() {
        let target = RecordingTarget::new();
        let mut store = TimelineStore::new(CollisionPolicy::KeepFirst);
        store.register(&target, Entry::new(Property::Z, 1.0, 100, 400));

        let reversed = reverse_of(&store, |_, _| 0.0);
        assert_eq!(reversed.animation_length(), 500);
        let entry = reversed
            .timeline(target.target_id())
            .and_then(|t| t.iter().next())
            .unwrap();
        assert_eq!(entry.start_delay, 0);
        assert_eq!(entry.duration, 100);
    }

    #[test]
    fn test_targets_mirror_against_group_length() {
        let a = RecordingTarget::new();
        let b = RecordingTarget::new();
        let mut store = TimelineStore::new(CollisionPolicy::KeepFirst);
        store.register(&a, Entry::new(Property::X, 1.0, 100, 0));
        store.register(&b, Entry::new(Property::Y, 1.0, 500, 500));

        let reversed = reverse_of(&store, |_, _| 0.0);
        assert_eq!(reversed.animation_length(), 1000);

        let first = |id| {
            reversed
                .timeline(id)
                .and_then(|t| t.iter().next())
                .map(|e| (e.start_delay, e.duration))
        };
        // A finishes early going forward, so it starts late in reverse.
        assert_eq!(first(a.target_id()), Some((900, 100)));
        assert_eq!(first(b.target_id()), Some((0, 500)));
    }

    #[test]
    fn test_values_are_sampled_in_descending_order() {
        let target = RecordingTarget::new();
        let mut store = TimelineStore::new(CollisionPolicy::KeepFirst);
        store.register(&target, Entry::new(Property::Rotation, 1.0, 1000, 0));
        store.register(&target, Entry::new(Property::Alpha, 1.0, 1000, 1000));

        let mut visited = Vec::new();
        reverse_of(&store, |_, p| {
            visited.push(p);
            0.0
        });
        assert_eq!(visited, vec![Property::Alpha, Property::Rotation]);
    }
}
