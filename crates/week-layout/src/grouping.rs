//! Bucket day-local fragments into day-columns.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::SplitEvent;

/// Group fragments by the UTC date of their start.
///
/// Input should already be split (see [`crate::splitter::split_by_day`]) so each
/// fragment lies within one day. Days come out in ascending order; within a day,
/// fragments keep their input order.
pub fn group_by_day<P, I>(events: I) -> BTreeMap<NaiveDate, Vec<SplitEvent<P>>>
where
    I: IntoIterator<Item = SplitEvent<P>>,
{
    let mut days: BTreeMap<NaiveDate, Vec<SplitEvent<P>>> = BTreeMap::new();
    for event in events {
        days.entry(event.start.date_naive()).or_default().push(event);
    }
    days
}
