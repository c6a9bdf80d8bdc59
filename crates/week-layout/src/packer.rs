//! Pack one day-column of events into non-overlapping side-by-side slots.
//!
//! Events are sorted by start time and swept left to right into overlap clusters.
//! Each cluster of `n` events is split into `n` equal-width slots; a member's slot
//! is its position within the cluster in start order. Vertical placement comes
//! straight from the time of day.

use serde::{Deserialize, Serialize};

use crate::event::SplitEvent;
use crate::time::{hours_between, hours_since_midnight};

/// Stacking order given to every positioned event.
pub const BASE_Z_INDEX: i32 = 1;

/// A fragment with its box geometry inside a day-column.
///
/// `top`/`height` are pixels; `left`/`width` are percentages of the column width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEvent<P = ()> {
    pub id: String,
    pub top: f64,
    pub height: f64,
    pub width: f64,
    pub left: f64,
    pub z_index: i32,
    /// Index of the overlap cluster this event was placed in.
    pub overlap_group: usize,
    pub original_event: SplitEvent<P>,
}

impl<P> PositionedEvent<P> {
    /// Right edge of the horizontal interval `[left, left + width)`.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Lay out the events of a single day-column.
///
/// Callers are expected to pass fragments that already belong to one day (see
/// [`crate::grouping::group_by_day`]); day membership is not re-checked.
///
/// Returns exactly one `PositionedEvent` per input. Callers must not rely on the
/// output order.
pub fn pack_day_column<P: Clone>(
    events: &[SplitEvent<P>],
    pixels_per_hour: f64,
) -> Vec<PositionedEvent<P>> {
    if events.is_empty() {
        return Vec::new();
    }

    // `sort_by_key` is stable, so equal starts keep their input order.
    let mut sorted: Vec<&SplitEvent<P>> = events.iter().collect();
    sorted.sort_by_key(|e| e.start);

    let clusters = build_clusters(&sorted);

    tracing::debug!(
        events = events.len(),
        clusters = clusters.len(),
        pixels_per_hour,
        "packed day column"
    );

    let mut positioned = Vec::with_capacity(events.len());
    for (group, cluster) in clusters.iter().enumerate() {
        let width = 100.0 / cluster.len() as f64;
        for (slot, event) in cluster.iter().enumerate() {
            positioned.push(PositionedEvent {
                id: event.id.clone(),
                top: pixels_per_hour * hours_since_midnight(event.start),
                height: pixels_per_hour * hours_between(event.start, event.end),
                width,
                left: slot as f64 * width,
                z_index: BASE_Z_INDEX,
                overlap_group: group,
                original_event: (*event).clone(),
            });
        }
    }

    positioned
}

/// Sweep start-sorted events into overlap clusters.
///
/// An event joins the open cluster when it overlaps any member; otherwise the
/// open cluster is closed and the event starts a new one. A zero-length event
/// that overlaps no member is closed off as its own cluster without closing the
/// open one: nothing after it in start order can overlap it, but later events
/// may still overlap the open cluster's longer members.
fn build_clusters<'a, P>(sorted: &[&'a SplitEvent<P>]) -> Vec<Vec<&'a SplitEvent<P>>> {
    let mut clusters = Vec::new();
    let mut current: Vec<&SplitEvent<P>> = Vec::new();

    for &event in sorted {
        if current.is_empty() || current.iter().any(|member| member.overlaps(event)) {
            current.push(event);
        } else if event.start == event.end {
            clusters.push(vec![event]);
        } else {
            clusters.push(std::mem::take(&mut current));
            current.push(event);
        }
    }

    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CalendarEvent;
    use chrono::{TimeZone, Utc};

    fn ev(id: &str, sh: u32, sm: u32, eh: u32, em: u32) -> SplitEvent {
        CalendarEvent {
            id: id.to_string(),
            start: Utc.with_ymd_and_hms(2024, 1, 1, sh, sm, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 1, eh, em, 0).unwrap(),
            payload: (),
        }
    }

    fn ids(cluster: &[&SplitEvent]) -> Vec<String> {
        cluster.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn chain_forms_one_cluster() {
        let events = [ev("a", 9, 0, 10, 0), ev("b", 9, 45, 11, 0), ev("c", 10, 30, 12, 0)];
        let sorted: Vec<&SplitEvent> = events.iter().collect();
        let clusters = build_clusters(&sorted);
        assert_eq!(clusters.len(), 1);
        assert_eq!(ids(&clusters[0]), ["a", "b", "c"]);
    }

    #[test]
    fn back_to_back_events_split_clusters() {
        let events = [ev("a", 9, 0, 10, 0), ev("b", 10, 0, 11, 0)];
        let sorted: Vec<&SplitEvent> = events.iter().collect();
        let clusters = build_clusters(&sorted);
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn isolated_instant_keeps_cluster_open() {
        // "z" sits on "a"'s start instant and overlaps nothing, but "b" still
        // overlaps "a" and must share its cluster.
        let events = [ev("a", 9, 0, 10, 0), ev("z", 9, 0, 9, 0), ev("b", 9, 15, 9, 45)];
        let sorted: Vec<&SplitEvent> = events.iter().collect();
        let clusters = build_clusters(&sorted);
        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), ["z"]);
        assert_eq!(ids(&clusters[1]), ["a", "b"]);
    }
}
