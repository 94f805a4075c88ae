//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::inbound::http::districts::{
    create_district, delete_district, get_district, list_districts, update_district,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::properties::{
    create_property, delete_property, get_largest_room, get_property, get_rooms_area,
    get_total_area, get_value, list_properties, list_property_rooms, update_property,
};
use crate::inbound::http::rooms::{create_room, delete_room, get_room, list_rooms, update_room};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// State bundles an app instance needs.
#[derive(Clone)]
pub struct AppDependencies {
    /// Readiness/liveness state shared with the probes.
    pub health_state: web::Data<HealthState>,
    /// Driving ports for the catalogue handlers.
    pub http_state: web::Data<HttpState>,
}

/// Assemble the application: routes, state, and middleware.
///
/// Exposed so integration tests run against the exact production route
/// table.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(create_district)
        .service(list_districts)
        .service(get_district)
        .service(update_district)
        .service(delete_district)
        .service(create_property)
        .service(list_properties)
        .service(get_property)
        .service(update_property)
        .service(delete_property)
        .service(list_property_rooms)
        .service(get_total_area)
        .service(get_value)
        .service(get_largest_room)
        .service(get_rooms_area)
        .service(create_room)
        .service(list_rooms)
        .service(get_room)
        .service(update_room)
        .service(delete_room);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .route("/api-docs/openapi.json", web::get().to(openapi_json));

    // The interactive explorer is a development aid only; the document
    // itself is served in every build.
    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Construct an Actix HTTP server over pre-built state.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
