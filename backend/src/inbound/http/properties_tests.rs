//! Tests for property HTTP handlers over mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rust_decimal::Decimal;
use serde_json::Value;

use super::*;
use crate::domain::property::RoomArea;
use crate::domain::room::{Room, RoomId};
use crate::domain::{District, EntityKind, Error};
use crate::domain::ports::{MockDistrictService, MockPropertyService, MockRoomService};

fn state_with_properties(properties: MockPropertyService) -> HttpState {
    HttpState::new(
        Arc::new(MockDistrictService::new()),
        Arc::new(properties),
        Arc::new(MockRoomService::new()),
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
            .service(create_property)
            .service(list_properties)
            .service(get_property)
            .service(update_property)
            .service(delete_property)
            .service(list_property_rooms)
            .service(get_total_area)
            .service(get_value)
            .service(get_largest_room)
            .service(get_rooms_area),
    )
}

fn bela_vista() -> District {
    District {
        id: DistrictId::new(1),
        name: "Bela Vista".to_owned(),
        square_meter_value: Decimal::from(8537),
    }
}

fn room(id: i64, name: &str, width: f64, length: f64) -> Room {
    Room {
        id: RoomId::new(id),
        name: name.to_owned(),
        width,
        length,
        property_id: PropertyId::new(1),
    }
}

fn bem_viver_snapshot() -> PropertySnapshot {
    PropertySnapshot {
        id: PropertyId::new(1),
        name: "Bem Viver".to_owned(),
        district: bela_vista(),
        rooms: vec![room(1, "Quarto", 10.0, 5.0), room(2, "Cozinha", 15.0, 8.0)],
    }
}

#[actix_web::test]
async fn create_property_returns_201_with_an_empty_room_list() {
    let mut properties = MockPropertyService::new();
    properties.expect_create_property().times(1).return_once(|draft| {
        Ok(PropertySnapshot {
            id: PropertyId::new(1),
            name: draft.name().to_owned(),
            district: bela_vista(),
            rooms: Vec::new(),
        })
    });
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/properties")
        .set_json(serde_json::json!({ "name": "Bem Viver", "districtId": 1 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Bem Viver");
    assert_eq!(body["district"]["name"], "Bela Vista");
    assert_eq!(body["rooms"], serde_json::json!([]));
}

#[actix_web::test]
async fn missing_name_and_district_produce_one_400_with_both_fields() {
    // No expectations: any service call fails the test.
    let properties = MockPropertyService::new();
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/properties")
        .set_json(serde_json::json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["name"].is_array());
    assert!(body["districtId"].is_array());
}

#[actix_web::test]
async fn get_property_serialises_the_snapshot_shape() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_get_property()
        .with(eq(PropertyId::new(1)))
        .times(1)
        .return_once(|_| Ok(bem_viver_snapshot()));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["district"]["squareMeterValue"], "8537");
    assert_eq!(body["rooms"][0]["name"], "Quarto");
    assert_eq!(body["rooms"][1]["name"], "Cozinha");
}

#[actix_web::test]
async fn unknown_property_maps_to_422_with_the_id_in_the_message() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_get_property()
        .times(1)
        .return_once(|id| Err(Error::not_found(EntityKind::Property, id)));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Property with ID 999 does not exist.");
}

#[actix_web::test]
async fn total_area_wraps_the_figure() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_total_area()
        .with(eq(PropertyId::new(1)))
        .times(1)
        .return_once(|_| Ok(170.0));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/1/totalArea")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["totalArea"], 170.0);
}

#[actix_web::test]
async fn value_serialises_as_an_exact_decimal_string() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_market_value()
        .times(1)
        .return_once(|_| Ok(Decimal::from(1_451_290)));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/1/value")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["value"], "1451290");
}

#[actix_web::test]
async fn largest_room_without_rooms_maps_to_422() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_largest_room()
        .times(1)
        .return_once(|id| Err(Error::no_rooms(id)));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/3/largestRoom")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "Property with ID 3 has no rooms.");
}

#[actix_web::test]
async fn rooms_area_keeps_creation_order() {
    let mut properties = MockPropertyService::new();
    properties.expect_rooms_area().times(1).return_once(|_| {
        Ok(PropertyRoomAreas {
            id: PropertyId::new(1),
            name: "Bem Viver".to_owned(),
            rooms: vec![
                RoomArea::from(&room(1, "Quarto", 10.0, 5.0)),
                RoomArea::from(&room(2, "Cozinha", 15.0, 8.0)),
            ],
        })
    });
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/properties/1/roomsArea")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Bem Viver");
    assert_eq!(body["rooms"][0]["area"], 50.0);
    assert_eq!(body["rooms"][1]["area"], 120.0);
}

#[actix_web::test]
async fn delete_property_returns_204() {
    let mut properties = MockPropertyService::new();
    properties
        .expect_delete_property()
        .with(eq(PropertyId::new(1)))
        .times(1)
        .return_once(|_| Ok(()));
    let app = actix_test::init_service(test_app(state_with_properties(properties))).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/v1/properties/1")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
