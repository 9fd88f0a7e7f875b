//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{GallerySettings, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use gallery::Trace;
#[cfg(debug_assertions)]
use gallery::doc::ApiDoc;
use gallery::inbound::http::configure;
use gallery::inbound::http::health::{HealthState, live, ready};
use gallery::inbound::http::state::HttpState;
use state_builders::build_http_state;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

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
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure)
}

/// Bind the HTTP server and mark the health state ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when a client cannot be built or the socket
/// cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(config)?;
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr())?
        .run();

    info!(
        bind_addr = %config.bind_addr(),
        api_base_url = %config.api_base_url,
        cover_cache_capacity = config.cover_cache_capacity.get(),
        show_placeholder = config.show_placeholder,
        "gallery listening"
    );
    health_state.mark_ready();
    Ok(server)
}
