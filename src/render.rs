use std::fmt::Write;
use chrono::{DateTime, Local};
use serde::Serialize;
use crate::manager_meteo::models::CurrentValues;
use crate::transform::{DailyRecord, HourlyRecord};

/// Placeholder printed where an optional field was never delivered.
///
/// TODO: replace with a friendlier marker once it is settled that no
/// consumer scrapes the literal text out of the daily panel.
const MISSING: &str = "undefined";

/// View options supplied by the caller with each search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    pub dark_mode: bool,
}

impl ViewState {
    /// Returns the state with the dark mode flag flipped.
    pub fn toggle(self) -> ViewState {
        ViewState { dark_mode: !self.dark_mode }
    }

    fn panel_class(&self) -> &'static str {
        if self.dark_mode {
            "weather-card dark-mode"
        } else {
            "weather-card"
        }
    }
}

/// Timestamp display mode.
#[derive(Debug, Clone, Copy)]
pub enum TimeStyle {
    Date,
    Time,
    DateTime,
}

/// The three replacement content blocks making up one search response.
///
/// An empty block means the panel has nothing to show.
#[derive(Debug, Serialize, PartialEq)]
pub struct Panels {
    pub current: String,
    pub hourly: String,
    pub daily: String,
}

/// Formats an epoch seconds value for display in the server's local
/// timezone.
///
/// # Arguments
///
/// * 'epoch' - timestamp as seconds since the unix epoch
/// * 'style' - date only, time of day only, or both
pub fn format_timestamp(epoch: i64, style: TimeStyle) -> String {
    match DateTime::from_timestamp(epoch, 0) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            match style {
                TimeStyle::Date => local.format("%-m/%-d/%Y").to_string(),
                TimeStyle::Time => local.format("%-I:%M:%S %p").to_string(),
                TimeStyle::DateTime => local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            }
        }
        None => MISSING.to_string(),
    }
}

/// Renders the current conditions block, or nothing when the section was
/// absent from the response.
///
/// Values are shown as delivered, without the unavailable marker of the
/// hourly panel.
///
/// # Arguments
///
/// * 'current' - the current section of a forecast response
/// * 'view' - view options for this search
pub fn render_current(current: Option<&CurrentValues>, view: &ViewState) -> String {
    let current = match current {
        Some(c) => c,
        None => return String::new(),
    };

    format!(
        "<div class=\"{}\"><h2>Current Weather</h2>\
        <div class=\"weather-entry\">Time: {}\
        <br>Temperature: {}°F\
        <br>Feels Like: {}°F\
        <br>Precipitation: {} inches\
        <br>Wind Speed: {} mph\
        </div></div>",
        view.panel_class(),
        format_timestamp(current.time, TimeStyle::DateTime),
        number(current.temperature_2m),
        number(current.apparent_temperature),
        number(current.precipitation),
        number(current.wind_speed_10m),
    )
}

/// Renders the hourly forecast block, one entry per record in order, or
/// nothing for an empty sequence.
///
/// The inches suffix is only attached to a measured precipitation value;
/// the unavailable marker stands alone since it is not a measurement.
///
/// # Arguments
///
/// * 'records' - normalized hourly records
/// * 'view' - view options for this search
pub fn render_hourly(records: &[HourlyRecord], view: &ViewState) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut panel = format!("<div class=\"{}\"><h2>Hourly Weather Forecast</h2>", view.panel_class());
    for record in records {
        let suffix = if record.precipitation.is_value() { " inches" } else { "" };
        let _ = write!(panel,
            "<div class=\"weather-entry\">Time: {}\
            <br>Temperature: {}°F\
            <br>Feels Like: {}°F\
            <br>Precipitation: {}{}\
            <br>Wind Speed: {} mph\
            </div>",
            format_timestamp(record.time, TimeStyle::DateTime),
            record.temperature,
            record.apparent_temperature,
            record.precipitation,
            suffix,
            record.wind_speed,
        );
    }
    panel.push_str("</div>");

    panel
}

/// Renders the daily forecast block, one entry per record in order, or
/// nothing for an empty sequence.
///
/// Fields left unset by the transform print the placeholder as-is.
///
/// # Arguments
///
/// * 'records' - normalized daily records
/// * 'view' - view options for this search
pub fn render_daily(records: &[DailyRecord], view: &ViewState) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut panel = format!("<div class=\"{}\"><h2>Daily Weather Forecast</h2>", view.panel_class());
    for record in records {
        let _ = write!(panel,
            "<div class=\"weather-entry\">Date: {}\
            <br>Max Temperature: {}°F\
            <br>Min Temperature: {}°F\
            <br>Max Feels Like: {}°F\
            <br>Min Feels Like: {}°F\
            <br>Sunrise: {}\
            <br>Sunset: {}\
            <br>Precipitation Sum: {} inches\
            <br>Max Wind Speed: {} mph\
            </div>",
            format_timestamp(record.time, TimeStyle::Date),
            number(record.temperature_max),
            number(record.temperature_min),
            number(record.apparent_temperature_max),
            number(record.apparent_temperature_min),
            time_of_day(record.sunrise),
            time_of_day(record.sunset),
            number(record.precipitation_sum),
            number(record.wind_speed_max),
        );
    }
    panel.push_str("</div>");

    panel
}

fn number(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING.to_string(),
    }
}

fn time_of_day(epoch: Option<i64>) -> String {
    match epoch {
        Some(e) => format_timestamp(e, TimeStyle::Time),
        None => MISSING.to_string(),
    }
}
