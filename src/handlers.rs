use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::Deserialize;
use crate::AppState;
use crate::errors::InputError;
use crate::manager_meteo::models::ForecastDocument;
use crate::render::{render_current, render_daily, render_hourly, Panels, ViewState};
use crate::transform::{transform_daily, transform_hourly};

#[derive(Deserialize, Debug)]
struct SearchParams {
    latitude: Option<String>,
    longitude: Option<String>,
    theme: Option<String>,
}

#[get("/forecast")]
pub async fn forecast(params: web::Query<SearchParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let (lat, long) = match coordinates(&params) {
        Ok(c) => c,
        Err(e) => {
            info!("{}", e);
            return HttpResponse::BadRequest().body(e.0);
        }
    };

    let mut view = ViewState::default();
    if params.theme.as_deref() == Some("dark") {
        view = view.toggle();
    }

    match data.meteo.new_forecast(lat, long).await {
        Ok(document) => HttpResponse::Ok().json(panels(&document, &view)),
        Err(e) => {
            error!("failed to fetch forecast: {}", e);
            HttpResponse::BadGateway().body("Failed to fetch weather data")
        }
    }
}

/// Parses and validates the coordinate parameters of a search.
///
/// Both coordinates must be present, parse as numbers and lie within
/// range before any request goes out.
///
/// # Arguments
///
/// * 'params' - the query parameters of the search
fn coordinates(params: &SearchParams) -> Result<(f64, f64), InputError> {
    let lat = params.latitude.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let long = params.longitude.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let (lat, long) = match (lat, long) {
        (Some(lat), Some(long)) => (lat, long),
        _ => return Err(InputError("Please enter both latitude and longitude".to_string())),
    };

    let lat: f64 = lat.parse()
        .map_err(|_| InputError(format!("latitude is not a number: {}", lat)))?;
    let long: f64 = long.parse()
        .map_err(|_| InputError(format!("longitude is not a number: {}", long)))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&long) {
        return Err(InputError(format!("coordinates out of range: {}, {}", lat, long)));
    }

    Ok((lat, long))
}

/// Runs the normalize and render steps for one fetched document.
///
/// # Arguments
///
/// * 'document' - the forecast response to display
/// * 'view' - view options for this search
fn panels(document: &ForecastDocument, view: &ViewState) -> Panels {
    let hourly = document.hourly.as_ref().map(transform_hourly).unwrap_or_default();
    let daily = document.daily.as_ref().map(transform_daily).unwrap_or_default();

    Panels {
        current: render_current(document.current.as_ref(), view),
        hourly: render_hourly(&hourly, view),
        daily: render_daily(&daily, view),
    }
}
