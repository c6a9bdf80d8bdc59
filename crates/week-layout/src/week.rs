//! Compose split → group → pack over a visible range of days.
//!
//! This is the whole layout pass a week view runs whenever its events or its
//! visible week change.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::event::CalendarEvent;
use crate::grouping::group_by_day;
use crate::packer::{pack_day_column, PositionedEvent};
use crate::splitter::split_all;
use crate::time::{end_of_day, start_of_day};

/// The positioned events of one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn<P = ()> {
    pub date: NaiveDate,
    pub events: Vec<PositionedEvent<P>>,
}

/// First day of the week containing `date`, for weeks starting on `first_weekday`.
///
/// # Errors
/// Returns `LayoutError::InvalidDate` when that day would fall before
/// `NaiveDate::MIN`.
pub fn week_start(date: NaiveDate, first_weekday: Weekday) -> Result<NaiveDate> {
    let offset = (7 + date.weekday().num_days_from_monday()
        - first_weekday.num_days_from_monday())
        % 7;
    date
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| LayoutError::InvalidDate(date.to_string()))
}

/// Lay out `day_count` consecutive day-columns starting at `first_day`.
///
/// Always returns exactly `day_count` columns, including empty days. Events that
/// do not touch the range are skipped, and the rest are clamped to the range
/// before splitting, so a long event only yields fragments for visible days.
///
/// `config` is assumed valid (see [`LayoutConfig::validate`]).
pub fn layout_days<P, I>(
    events: I,
    first_day: NaiveDate,
    day_count: u32,
    config: &LayoutConfig,
) -> Vec<DayColumn<P>>
where
    P: Clone,
    I: IntoIterator<Item = CalendarEvent<P>>,
{
    let days: Vec<NaiveDate> = first_day.iter_days().take(day_count as usize).collect();
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return Vec::new();
    };
    let range_start = start_of_day(first);
    let range_end = end_of_day(last);

    // A clamped edge already sits on start_of_day/end_of_day, which is where the
    // unclamped fragment for that day would start or end. Inverted events are
    // never split, so they are only filtered by their start.
    let in_range = events
        .into_iter()
        .filter(|e| e.start <= range_end && e.end.max(e.start) >= range_start)
        .map(|mut e| {
            if e.start <= e.end {
                e.start = e.start.max(range_start);
                e.end = e.end.min(range_end);
            }
            e
        });
    let mut by_day = group_by_day(split_all(in_range));

    let columns: Vec<DayColumn<P>> = days
        .into_iter()
        .map(|date| {
            let fragments = by_day.remove(&date).unwrap_or_default();
            DayColumn {
                date,
                events: pack_day_column(&fragments, config.pixels_per_hour),
            }
        })
        .collect();

    tracing::debug!(
        %first_day,
        day_count,
        positioned = columns.iter().map(|c| c.events.len()).sum::<usize>(),
        "laid out day range"
    );

    columns
}

/// Lay out the seven days starting at `week_start`.
pub fn layout_week<P, I>(
    events: I,
    week_start: NaiveDate,
    config: &LayoutConfig,
) -> Vec<DayColumn<P>>
where
    P: Clone,
    I: IntoIterator<Item = CalendarEvent<P>>,
{
    layout_days(events, week_start, 7, config)
}
