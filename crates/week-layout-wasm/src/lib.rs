//! WASM bindings for week-layout.
//!
//! Exposes day splitting, day-column packing and week layout to JavaScript via
//! `wasm-bindgen`. Events cross the boundary as JSON strings: an array of
//! `{id, startTime, endTime, ...}` objects whose extra fields are passed through.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p week-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/week-layout-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/week_layout_wasm.wasm
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;
use week_layout::error::Result;
use week_layout::event::parse_events_json;
use week_layout::time::parse_date;
use week_layout::LayoutConfig;

// ---------------------------------------------------------------------------
// JSON-level operations, kept free of `JsValue` so they run on native targets
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn split_json(events_json: &str) -> Result<String> {
    let events = parse_events_json(events_json)?;
    to_json(&week_layout::split_all(events))
}

fn pack_json(events_json: &str, pixels_per_hour: f64) -> Result<String> {
    let config = LayoutConfig::with_pixels_per_hour(pixels_per_hour)?;
    let events = parse_events_json(events_json)?;
    to_json(&week_layout::pack_day_column(&events, config.pixels_per_hour))
}

fn layout_week_json(events_json: &str, week_start: &str, pixels_per_hour: f64) -> Result<String> {
    let config = LayoutConfig::with_pixels_per_hour(pixels_per_hour)?;
    let first_day = parse_date(week_start)?;
    let events = parse_events_json(events_json)?;
    to_json(&week_layout::layout_week(events, first_day, &config))
}

fn to_js_error(e: week_layout::LayoutError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Split events that cross midnight into one fragment per UTC day.
///
/// Returns a JSON array of fragments in input order.
#[wasm_bindgen(js_name = "splitByDay")]
pub fn split_by_day(events_json: &str) -> std::result::Result<String, JsValue> {
    split_json(events_json).map_err(to_js_error)
}

/// Pack the events of one day-column.
///
/// Returns a JSON array of `{id, top, height, width, left, zIndex, overlapGroup,
/// originalEvent}` objects.
#[wasm_bindgen(js_name = "packDayColumn")]
pub fn pack_day_column(
    events_json: &str,
    pixels_per_hour: f64,
) -> std::result::Result<String, JsValue> {
    pack_json(events_json, pixels_per_hour).map_err(to_js_error)
}

/// Split, group and pack the seven days starting at `week_start` (`YYYY-MM-DD`).
///
/// Returns a JSON array of seven `{date, events}` day-columns.
#[wasm_bindgen(js_name = "layoutWeek")]
pub fn layout_week(
    events_json: &str,
    week_start: &str,
    pixels_per_hour: f64,
) -> std::result::Result<String, JsValue> {
    layout_week_json(events_json, week_start, pixels_per_hour).map_err(to_js_error)
}
