//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{
    PredictionQueryService, PredictionService, SeedHashClassifier, StatusCheckService,
};
use crate::inbound::http::health::{HealthState, index, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{analytics, predict, predictions, status};
use crate::middleware::Trace;
use crate::outbound::persistence::{InMemoryPredictionRepository, InMemoryStatusCheckRepository};
use crate::outbound::scratch::FsScratchStore;

fn build_http_state(config: &ServerConfig) -> HttpState {
    let prediction_repo = Arc::new(InMemoryPredictionRepository::new());
    let status_repo = Arc::new(InMemoryStatusCheckRepository::new());
    let classifier = Arc::new(SeedHashClassifier);
    let scratch = Arc::new(FsScratchStore::new(config.uploads_dir()));

    HttpState::new(
        Arc::new(PredictionService::new(
            prediction_repo.clone(),
            classifier,
            scratch,
        )),
        Arc::new(PredictionQueryService::new(prediction_repo)),
        Arc::new(StatusCheckService::new(status_repo)),
    )
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(index)
        .service(predict::predict)
        .service(predictions::recent_predictions)
        .service(analytics::analytics_summary)
        .service(status::create_status_check)
        .service(status::list_status_checks)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
