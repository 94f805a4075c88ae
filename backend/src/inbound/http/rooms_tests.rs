//! Tests for room HTTP handlers over mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use serde_json::Value;

use super::*;
use crate::domain::{EntityKind, Error};
use crate::domain::ports::{MockDistrictService, MockPropertyService, MockRoomService};

fn state_with_rooms(rooms: MockRoomService) -> HttpState {
    HttpState::new(
        Arc::new(MockDistrictService::new()),
        Arc::new(MockPropertyService::new()),
        Arc::new(rooms),
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .service(create_room)
            .service(list_rooms)
            .service(get_room)
            .service(update_room)
            .service(delete_room),
    )
}

#[actix_web::test]
async fn create_room_returns_201_under_the_property() {
    let mut rooms = MockRoomService::new();
    rooms
        .expect_create_room()
        .times(1)
        .return_once(|property_id, draft| Ok(draft.into_room(RoomId::new(5), property_id)));
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms/property/1")
        .set_json(serde_json::json!({ "name": "Cozinha", "width": 15.0, "length": 8.0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["name"], "Cozinha");
    assert_eq!(body["width"], 15.0);
    assert_eq!(body["length"], 8.0);
}

#[actix_web::test]
async fn create_room_under_an_unknown_property_is_422() {
    let mut rooms = MockRoomService::new();
    rooms
        .expect_create_room()
        .times(1)
        .return_once(|property_id, _| Err(Error::not_found(EntityKind::Property, property_id)));
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms/property/999")
        .set_json(serde_json::json!({ "name": "Cozinha", "width": 15.0, "length": 8.0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Property with ID 999 does not exist.");
}

#[actix_web::test]
async fn blank_name_is_rejected_before_the_service_runs() {
    // No expectations: any service call fails the test.
    let rooms = MockRoomService::new();
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms/property/1")
        .set_json(serde_json::json!({ "name": "", "width": 15.0, "length": 8.0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"][0]["error"], "name must not be empty");
}

#[actix_web::test]
async fn missing_dimensions_are_required_violations() {
    let rooms = MockRoomService::new();
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/rooms/property/1")
        .set_json(serde_json::json!({ "name": "Quarto" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["width"].is_array());
    assert!(body["length"].is_array());
}

#[actix_web::test]
async fn update_room_replaces_geometry_in_place() {
    let mut rooms = MockRoomService::new();
    rooms
        .expect_update_room()
        .times(1)
        .return_once(|id, draft| Ok(draft.into_room(id, PropertyId::new(2))));
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/v1/rooms/7")
        .set_json(serde_json::json!({ "name": "Sala de Estar", "width": 10.0, "length": 5.0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["name"], "Sala de Estar");
}

#[actix_web::test]
async fn delete_room_returns_204() {
    let mut rooms = MockRoomService::new();
    rooms
        .expect_delete_room()
        .with(eq(RoomId::new(7)))
        .times(1)
        .return_once(|_| Ok(()));
    let app = actix_test::init_service(test_app(state_with_rooms(rooms))).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/v1/rooms/7")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
