//! Calendar event records consumed by the layout engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::time::serde_instant;

/// A timed calendar event with an opaque payload.
///
/// On the wire the payload is flattened next to `id`/`startTime`/`endTime`, so
/// fields the engine does not know about (name, location, color, classId, ...)
/// survive a layout pass untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent<P = ()> {
    pub id: String,
    #[serde(rename = "startTime", with = "serde_instant")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime", with = "serde_instant")]
    pub end: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: P,
}

/// A per-day fragment produced by the splitter. Same shape as its source event;
/// fragments of one multi-day event share the source `id`.
pub type SplitEvent<P = ()> = CalendarEvent<P>;

/// Event whose payload is an arbitrary JSON object.
pub type JsonEvent = CalendarEvent<serde_json::Map<String, serde_json::Value>>;

impl<P> CalendarEvent<P> {
    /// Build an event, rejecting ranges that end before they start.
    pub fn new(
        id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        payload: P,
    ) -> Result<Self> {
        let id = id.into();
        if end < start {
            return Err(LayoutError::InvertedRange { id });
        }
        Ok(Self {
            id,
            start,
            end,
            payload,
        })
    }

    /// Half-open overlap test: `a.start < b.end && b.start < a.end`.
    ///
    /// Back-to-back events (one ends exactly when the other starts) do not overlap.
    pub fn overlaps<Q>(&self, other: &CalendarEvent<Q>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Same event with a different time range; payload and id are cloned.
    pub(crate) fn with_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self
    where
        P: Clone,
    {
        Self {
            id: self.id.clone(),
            start,
            end,
            payload: self.payload.clone(),
        }
    }
}

/// Parse a JSON array of events, validating every time range.
///
/// # Errors
/// Returns `LayoutError::Json` if the input is not an array of event objects or a
/// time string does not parse, and `LayoutError::InvertedRange` for any event whose
/// `endTime` precedes its `startTime`.
pub fn parse_events_json(json: &str) -> Result<Vec<JsonEvent>> {
    let events: Vec<JsonEvent> = serde_json::from_str(json)?;
    if let Some(bad) = events.iter().find(|e| e.end < e.start) {
        return Err(LayoutError::InvertedRange { id: bad.id.clone() });
    }
    Ok(events)
}
