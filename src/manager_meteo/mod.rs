pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::Client;
use crate::initialization::ForecastConfig;
use crate::manager_meteo::errors::FetchError;
use crate::manager_meteo::models::ForecastDocument;

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,precipitation,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,apparent_temperature,precipitation,wind_speed_10m";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
    apparent_temperature_max,apparent_temperature_min,sunrise,sunset,\
    precipitation_sum,wind_speed_10m_max";

/// Struct for managing weather forecasts produced by Open-Meteo
#[derive(Clone)]
pub struct Meteo {
    client: Client,
    base_url: String,
}

impl Meteo {
    /// Returns a Meteo struct ready for fetching forecasts from Open-Meteo
    ///
    /// # Arguments
    ///
    /// * 'config' - the forecast section of the application configuration
    pub fn new(config: &ForecastConfig) -> Result<Meteo, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Retrieves a forecast from Open-Meteo for the given coordinates.
    ///
    /// Units are fixed by the request contract: Fahrenheit, mph and inches,
    /// with all timestamps as unix time and the hourly/daily ranges resolved
    /// in the timezone Open-Meteo infers from the coordinates.
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn new_forecast(&self, lat: f64, long: f64) -> Result<ForecastDocument, FetchError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}\
            &temperature_unit=fahrenheit&wind_speed_unit=mph&precipitation_unit=inch\
            &timeformat=unixtime&timezone=auto",
            self.base_url, lat, long, CURRENT_FIELDS, HOURLY_FIELDS, DAILY_FIELDS,
        );

        debug!("requesting forecast: {}", url);

        let req = self.client
            .get(&url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("error while fetching forecast from Open-Meteo: {}", status)));
        }

        let json = req.text().await?;
        let document: ForecastDocument = serde_json::from_str(&json)?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use wiremock::matchers::{method, path, query_param};

    fn test_meteo(server: &MockServer) -> Meteo {
        let config = ForecastConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        };
        Meteo::new(&config).unwrap()
    }

    fn sample_document() -> serde_json::Value {
        serde_json::json!({
            "latitude": 59.3,
            "longitude": 18.1,
            "timezone": "Europe/Stockholm",
            "current": {
                "time": 1722960000,
                "temperature_2m": 70.3,
                "apparent_temperature": 68.1,
                "precipitation": 0.0,
                "wind_speed_10m": 5.2
            },
            "hourly": {
                "time": [1722960000, 1722963600],
                "temperature_2m": [70.3, 69.8],
                "apparent_temperature": [68.1, 67.9],
                "precipitation": [0.0, 0.1],
                "wind_speed_10m": [5.2, 4.8]
            },
            "daily": {
                "time": [1722902400],
                "temperature_2m_max": [72.5],
                "temperature_2m_min": [55.4],
                "apparent_temperature_max": [70.0],
                "apparent_temperature_min": [54.0],
                "sunrise": [1722912300],
                "sunset": [1722970500],
                "precipitation_sum": [0.2],
                "wind_speed_10m_max": [9.4]
            }
        })
    }

    #[tokio::test]
    async fn fetches_and_parses_a_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "59.3"))
            .and(query_param("longitude", "18.1"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("wind_speed_unit", "mph"))
            .and(query_param("precipitation_unit", "inch"))
            .and(query_param("timeformat", "unixtime"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_document()))
            .mount(&server)
            .await;

        let document = test_meteo(&server).new_forecast(59.3, 18.1).await.unwrap();

        let current = document.current.unwrap();
        assert_eq!(current.time, 1722960000);
        assert_eq!(current.temperature_2m, Some(70.3));

        let hourly = document.hourly.unwrap();
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.precipitation[1], Some(0.1));

        let daily = document.daily.unwrap();
        assert_eq!(daily.time, vec![1722902400]);
        assert_eq!(daily.sunrise, Some(vec![Some(1722912300)]));
    }

    #[tokio::test]
    async fn tolerates_missing_sections_and_sequences() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 59.3,
                "longitude": 18.1,
                "hourly": {
                    "time": [1722960000],
                    "temperature_2m": [70.3]
                },
                "daily": {
                    "time": [1722902400],
                    "temperature_2m_max": [72.5]
                }
            })))
            .mount(&server)
            .await;

        let document = test_meteo(&server).new_forecast(59.3, 18.1).await.unwrap();

        assert!(document.current.is_none());

        let hourly = document.hourly.unwrap();
        assert!(hourly.precipitation.is_empty());
        assert!(hourly.wind_speed_10m.is_empty());

        let daily = document.daily.unwrap();
        assert!(daily.sunrise.is_none());
        assert!(daily.precipitation_sum.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = test_meteo(&server).new_forecast(59.3, 18.1).await;

        match result {
            Err(FetchError::Network(e)) => assert!(e.contains("500")),
            other => panic!("expected network error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_a_document_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a forecast"))
            .mount(&server)
            .await;

        let result = test_meteo(&server).new_forecast(59.3, 18.1).await;

        assert!(matches!(result, Err(FetchError::Document(_))));
    }
}
