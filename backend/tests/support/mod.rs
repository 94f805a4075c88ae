//! Shared harness for end-to-end catalogue tests.
//!
//! Tests run the production route table (via `build_app`) over fresh
//! in-memory stores, so every suite starts from an empty catalogue.

// Each suite compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use backend::inbound::http::health::HealthState;
use backend::server::{AppDependencies, build_app, build_http_state};

/// The production app over empty stores.
pub fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(build_http_state()),
    })
}

/// POST a JSON body and return the raw response.
pub async fn post_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    body: Value,
) -> ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request(),
    )
    .await
}

/// PUT a JSON body and return the raw response.
pub async fn put_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    body: Value,
) -> ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::put()
            .uri(uri)
            .set_json(body)
            .to_request(),
    )
    .await
}

/// GET a path and return the raw response.
pub async fn get(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> ServiceResponse {
    actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request()).await
}

/// DELETE a path and return the raw response.
pub async fn delete(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> ServiceResponse {
    actix_test::call_service(app, actix_test::TestRequest::delete().uri(uri).to_request()).await
}

/// Create a district and return its id.
pub async fn create_district(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    name: &str,
    rate: i64,
) -> i64 {
    let response = post_json(
        app,
        "/api/v1/districts",
        json!({ "name": name, "squareMeterValue": rate }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    body["id"].as_i64().expect("district id")
}

/// Create a property and return its id.
pub async fn create_property(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    name: &str,
    district_id: i64,
) -> i64 {
    let response = post_json(
        app,
        "/api/v1/properties",
        json!({ "name": name, "districtId": district_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    body["id"].as_i64().expect("property id")
}

/// Create a room under a property and return its id.
pub async fn create_room(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    property_id: i64,
    name: &str,
    width: f64,
    length: f64,
) -> i64 {
    let response = post_json(
        app,
        &format!("/api/v1/rooms/property/{property_id}"),
        json!({ "name": name, "width": width, "length": length }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    body["id"].as_i64().expect("room id")
}
