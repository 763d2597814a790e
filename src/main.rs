mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_meteo;
mod render;
mod transform;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::logging::logging;
use crate::manager_meteo::Meteo;

struct AppState {
    meteo: Meteo,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    logging(&config.logging)?;

    let meteo = Meteo::new(&config.forecast)?;

    info!("serving forecasts on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { meteo: meteo.clone() }))
            .service(handlers::forecast)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
