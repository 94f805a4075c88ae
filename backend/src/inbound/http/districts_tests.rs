//! Tests for district HTTP handlers over mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rust_decimal::Decimal;
use serde_json::Value;

use super::*;
use crate::domain::Error;
use crate::domain::ports::{
    MockDistrictService, MockPropertyService, MockRoomService,
};

fn state_with_districts(districts: MockDistrictService) -> HttpState {
    HttpState::new(
        Arc::new(districts),
        Arc::new(MockPropertyService::new()),
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
            .service(create_district)
            .service(list_districts)
            .service(get_district)
            .service(update_district)
            .service(delete_district),
    )
}

fn bela_vista(id: i64) -> District {
    District {
        id: DistrictId::new(id),
        name: "Bela Vista".to_owned(),
        square_meter_value: Decimal::from(8537),
    }
}

#[actix_web::test]
async fn create_district_returns_201_with_the_stored_row() {
    let mut districts = MockDistrictService::new();
    districts
        .expect_create_district()
        .times(1)
        .return_once(|draft| Ok(draft.into_district(DistrictId::new(1))));
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/districts")
        .set_json(serde_json::json!({ "name": "Bela Vista", "squareMeterValue": 8537 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Bela Vista");
    assert_eq!(body["squareMeterValue"], "8537");
}

#[actix_web::test]
async fn create_district_rejects_invalid_payloads_without_calling_the_service() {
    // No expectations: any service call fails the test.
    let districts = MockDistrictService::new();
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/districts")
        .set_json(serde_json::json!({ "name": "  ", "squareMeterValue": "8537.255" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["name"].is_array());
    assert!(body["squareMeterValue"].is_array());
}

#[actix_web::test]
async fn get_district_returns_the_row() {
    let mut districts = MockDistrictService::new();
    districts
        .expect_get_district()
        .with(eq(DistrictId::new(3)))
        .times(1)
        .return_once(|_| Ok(bela_vista(3)));
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/districts/3")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], 3);
}

#[actix_web::test]
async fn unknown_district_maps_to_422_with_the_id_in_the_message() {
    let mut districts = MockDistrictService::new();
    districts
        .expect_get_district()
        .times(1)
        .return_once(|id| Err(Error::not_found(crate::domain::EntityKind::District, id)));
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/districts/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["error"], "District with ID 999 does not exist.");
}

#[actix_web::test]
async fn update_district_replaces_both_fields() {
    let mut districts = MockDistrictService::new();
    districts
        .expect_update_district()
        .times(1)
        .return_once(|id, draft| Ok(draft.into_district(id)));
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/v1/districts/2")
        .set_json(serde_json::json!({ "name": "Pinheiros", "squareMeterValue": "10900" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["name"], "Pinheiros");
    assert_eq!(body["squareMeterValue"], "10900");
}

#[actix_web::test]
async fn delete_district_returns_204_without_a_body() {
    let mut districts = MockDistrictService::new();
    districts
        .expect_delete_district()
        .with(eq(DistrictId::new(2)))
        .times(1)
        .return_once(|_| Ok(()));
    let app = actix_test::init_service(test_app(state_with_districts(districts))).await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/v1/districts/2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
