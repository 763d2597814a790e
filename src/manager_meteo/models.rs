use serde::Deserialize;

/// One forecast response from Open-Meteo, with all three sections optional.
#[derive(Deserialize)]
pub struct ForecastDocument {
    pub current: Option<CurrentValues>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

#[derive(Deserialize)]
pub struct CurrentValues {
    pub time: i64,
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed_10m: Option<f64>,
}

/// Hourly section as parallel sequences sharing the time axis.
///
/// A sequence the response left out deserializes to an empty vector, so
/// indexing simply finds no value for it.
#[derive(Deserialize, Default)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<i64>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub apparent_temperature: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
}

/// Daily section, same parallel shape but every value sequence may be
/// absent as a whole and stays absent through the transform.
#[derive(Deserialize, Default)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<i64>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub apparent_temperature_max: Option<Vec<Option<f64>>>,
    pub apparent_temperature_min: Option<Vec<Option<f64>>>,
    pub sunrise: Option<Vec<Option<i64>>>,
    pub sunset: Option<Vec<Option<i64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
}
