//! # week-layout
//!
//! Layout engine for weekly calendar views.
//!
//! Takes plain event records (id, start, end, plus an opaque payload) and turns
//! them into positioned boxes for a week grid: events crossing midnight are split
//! into one fragment per day, and each day-column is packed so that overlapping
//! events sit side by side in equal-width slots.
//!
//! All day boundaries are UTC.
//!
//! ## Modules
//!
//! - [`event`] — `CalendarEvent` record with a flattened passthrough payload
//! - [`time`] — Instant parsing/formatting and day/hour geometry helpers
//! - [`splitter`] — Split multi-day events into per-day fragments
//! - [`packer`] — Pack one day-column into non-overlapping horizontal slots
//! - [`grouping`] — Bucket fragments into day-columns
//! - [`week`] — Compose split → group → pack over a visible range of days
//! - [`config`] — Layout configuration (`pixels_per_hour`)
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod event;
pub mod grouping;
pub mod packer;
pub mod splitter;
pub mod time;
pub mod week;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use event::{CalendarEvent, JsonEvent, SplitEvent};
pub use grouping::group_by_day;
pub use packer::{pack_day_column, PositionedEvent, BASE_Z_INDEX};
pub use splitter::{split_all, split_by_day};
pub use week::{layout_days, layout_week, week_start, DayColumn};
