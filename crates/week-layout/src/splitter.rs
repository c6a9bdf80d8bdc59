//! Split events that cross midnight into one fragment per UTC day.
//!
//! The first fragment keeps the true start, the last keeps the true end, and every
//! day in between covers `00:00:00.000`–`23:59:59.999`.

use crate::event::{CalendarEvent, SplitEvent};
use crate::time::{end_of_day, start_of_day};

/// Split one event into per-day fragments, in chronological order.
///
/// An event that starts and ends on the same UTC day is returned as-is in a
/// single-element vector. The result is never empty.
///
/// The walk covers every day from the start date to the end date inclusive, so an
/// event ending exactly at midnight produces a zero-length `[00:00, 00:00]`
/// fragment on its final day.
pub fn split_by_day<P: Clone>(event: CalendarEvent<P>) -> Vec<SplitEvent<P>> {
    let first_day = event.start.date_naive();
    let last_day = event.end.date_naive();

    // Same day, or an inverted range we leave alone.
    if last_day <= first_day {
        return vec![event];
    }

    let fragments: Vec<SplitEvent<P>> = first_day
        .iter_days()
        .take_while(|day| *day <= last_day)
        .map(|day| {
            let start = if day == first_day {
                event.start
            } else {
                start_of_day(day)
            };
            let end = if day == last_day {
                event.end
            } else {
                end_of_day(day)
            };
            event.with_range(start, end)
        })
        .collect();

    tracing::trace!(
        id = %event.id,
        fragments = fragments.len(),
        "split multi-day event"
    );

    fragments
}

/// Split every event, keeping fragments of earlier inputs ahead of later ones.
pub fn split_all<P, I>(events: I) -> Vec<SplitEvent<P>>
where
    P: Clone,
    I: IntoIterator<Item = CalendarEvent<P>>,
{
    events.into_iter().flat_map(split_by_day).collect()
}
