use std::fmt;
use crate::manager_meteo::models::{DailySeries, HourlySeries};

/// A single weather reading that may be unavailable.
///
/// The marker is a value of its own, distinct from any measurement
/// including zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Value(f64),
    NotAvailable,
}

impl Reading {
    /// Builds a reading where a missing or zero raw value counts as
    /// unavailable.
    ///
    /// A literal zero measurement therefore collapses to the marker. This
    /// mirrors the behavior consumers of the hourly panel have always seen
    /// for temperatures and wind speed, so it stays.
    pub fn from_nonzero(raw: Option<f64>) -> Reading {
        match raw {
            Some(v) if v != 0.0 => Reading::Value(v),
            _ => Reading::NotAvailable,
        }
    }

    /// Builds a reading where only a missing raw value counts as
    /// unavailable, keeping a literal zero.
    pub fn from_present(raw: Option<f64>) -> Reading {
        match raw {
            Some(v) => Reading::Value(v),
            None => Reading::NotAvailable,
        }
    }

    /// Whether the reading holds a measured value.
    pub fn is_value(&self) -> bool {
        matches!(self, Reading::Value(_))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{}", v),
            Reading::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// One hourly forecast row assembled from the parallel sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    pub time: i64,
    pub temperature: Reading,
    pub apparent_temperature: Reading,
    pub precipitation: Reading,
    pub wind_speed: Reading,
}

/// One daily forecast row. Fields whose source sequence was never
/// delivered stay unset rather than falling back to the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub time: i64,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub apparent_temperature_max: Option<f64>,
    pub apparent_temperature_min: Option<f64>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub precipitation_sum: Option<f64>,
    pub wind_speed_max: Option<f64>,
}

/// Normalizes the hourly section into one record per entry of the time
/// axis, in delivery order.
///
/// Temperature, apparent temperature and wind speed fall back to the
/// unavailable marker for missing or zero values; precipitation only for
/// missing values.
///
/// # Arguments
///
/// * 'hourly' - the hourly section of a forecast response
pub fn transform_hourly(hourly: &HourlySeries) -> Vec<HourlyRecord> {
    hourly.time.iter().enumerate()
        .map(|(i, &time)| HourlyRecord {
            time,
            temperature: Reading::from_nonzero(value_at(&hourly.temperature_2m, i)),
            apparent_temperature: Reading::from_nonzero(value_at(&hourly.apparent_temperature, i)),
            precipitation: Reading::from_present(value_at(&hourly.precipitation, i)),
            wind_speed: Reading::from_nonzero(value_at(&hourly.wind_speed_10m, i)),
        })
        .collect()
}

/// Normalizes the daily section into one record per entry of the time
/// axis, in delivery order.
///
/// Every value field is optional; an absent sequence leaves the field
/// unset in all records and a present value passes through unchanged,
/// zero included.
///
/// # Arguments
///
/// * 'daily' - the daily section of a forecast response
pub fn transform_daily(daily: &DailySeries) -> Vec<DailyRecord> {
    daily.time.iter().enumerate()
        .map(|(i, &time)| DailyRecord {
            time,
            temperature_max: series_at(&daily.temperature_2m_max, i),
            temperature_min: series_at(&daily.temperature_2m_min, i),
            apparent_temperature_max: series_at(&daily.apparent_temperature_max, i),
            apparent_temperature_min: series_at(&daily.apparent_temperature_min, i),
            sunrise: series_at(&daily.sunrise, i),
            sunset: series_at(&daily.sunset, i),
            precipitation_sum: series_at(&daily.precipitation_sum, i),
            wind_speed_max: series_at(&daily.wind_speed_10m_max, i),
        })
        .collect()
}

fn value_at(series: &[Option<f64>], i: usize) -> Option<f64> {
    series.get(i).copied().flatten()
}

fn series_at<T: Copy>(series: &Option<Vec<Option<T>>>, i: usize) -> Option<T> {
    series.as_ref().and_then(|v| v.get(i)).copied().flatten()
}
