//! Property HTTP handlers, including the derived-metric endpoints.
//!
//! ```text
//! POST   /api/v1/properties
//! GET    /api/v1/properties
//! GET    /api/v1/properties/{id}
//! PUT    /api/v1/properties/{id}
//! DELETE /api/v1/properties/{id}
//! GET    /api/v1/properties/{id}/rooms
//! GET    /api/v1/properties/{id}/totalArea
//! GET    /api/v1/properties/{id}/value
//! GET    /api/v1/properties/{id}/largestRoom
//! GET    /api/v1/properties/{id}/roomsArea
//! ```
//!
//! Property reads return the snapshot shape: the property joined with its
//! full district and its rooms in creation order.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DistrictId;
use crate::domain::property::{PropertyDraft, PropertyId, PropertyRoomAreas, PropertySnapshot};
use crate::inbound::http::ApiResult;
use crate::inbound::http::districts::DistrictBody;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::rooms::RoomBody;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or replacing a property.
///
/// Fields are optional so absent keys reach draft validation as `None` and
/// surface as `Required` violations instead of serde failures.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    /// Property display name.
    pub name: Option<String>,
    /// Identifier of the district the property is registered in.
    pub district_id: Option<i64>,
}

/// Property representation on the wire: the snapshot with district and rooms.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBody {
    /// Store-assigned identifier.
    pub id: i64,
    /// Property display name.
    pub name: String,
    /// Full district the property is registered in.
    pub district: DistrictBody,
    /// The property's rooms in creation order.
    pub rooms: Vec<RoomBody>,
}

impl From<PropertySnapshot> for PropertyBody {
    fn from(snapshot: PropertySnapshot) -> Self {
        Self {
            id: snapshot.id.into(),
            name: snapshot.name,
            district: DistrictBody::from(snapshot.district),
            rooms: snapshot.rooms.into_iter().map(RoomBody::from).collect(),
        }
    }
}

/// Total floor area of a property.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalAreaBody {
    /// Sum of room areas in square metres.
    pub total_area: f64,
}

/// Market value of a property.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueBody {
    /// Total area priced at the district's square-metre rate, as a string to
    /// keep money exact.
    #[schema(value_type = String, example = "1451290")]
    pub value: Decimal,
}

/// One room's area within the breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomAreaBody {
    /// Identifier of the measured room.
    pub id: i64,
    /// Room display name.
    pub name: String,
    /// Floor area in square metres.
    pub area: f64,
}

/// Per-room area breakdown for a property.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomsAreaBody {
    /// Identifier of the measured property.
    pub id: i64,
    /// Property display name.
    pub name: String,
    /// One entry per room, in creation order.
    pub rooms: Vec<RoomAreaBody>,
}

impl From<PropertyRoomAreas> for RoomsAreaBody {
    fn from(areas: PropertyRoomAreas) -> Self {
        Self {
            id: areas.id.into(),
            name: areas.name,
            rooms: areas
                .rooms
                .into_iter()
                .map(|room| RoomAreaBody {
                    id: room.id.into(),
                    name: room.name,
                    area: room.area,
                })
                .collect(),
        }
    }
}

impl PropertyPayload {
    fn into_draft(self) -> ApiResult<PropertyDraft> {
        PropertyDraft::new(self.name, self.district_id.map(DistrictId::new))
    }
}

/// Register a property in an existing district.
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    request_body = PropertyPayload,
    responses(
        (status = 201, description = "Property created", body = PropertyBody),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Unknown district", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "createProperty"
)]
#[post("/properties")]
pub async fn create_property(
    state: web::Data<HttpState>,
    payload: web::Json<PropertyPayload>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let snapshot = state.properties.create_property(draft).await?;
    Ok(HttpResponse::Created().json(PropertyBody::from(snapshot)))
}

/// List every property in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    responses(
        (status = 200, description = "All properties", body = [PropertyBody])
    ),
    tags = ["properties"],
    operation_id = "listProperties"
)]
#[get("/properties")]
pub async fn list_properties(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PropertyBody>>> {
    let snapshots = state.properties.list_properties().await?;
    Ok(web::Json(
        snapshots.into_iter().map(PropertyBody::from).collect(),
    ))
}

/// Fetch one property with its district and rooms.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "The property", body = PropertyBody),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "getProperty"
)]
#[get("/properties/{id}")]
pub async fn get_property(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<PropertyBody>> {
    let snapshot = state
        .properties
        .get_property(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(PropertyBody::from(snapshot)))
}

/// Replace a property's name and district registration.
#[utoipa::path(
    put,
    path = "/api/v1/properties/{id}",
    params(("id" = i64, Path, description = "Property identifier")),
    request_body = PropertyPayload,
    responses(
        (status = 200, description = "Property replaced", body = PropertyBody),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Unknown property or district", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "updateProperty"
)]
#[put("/properties/{id}")]
pub async fn update_property(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PropertyPayload>,
) -> ApiResult<web::Json<PropertyBody>> {
    let draft = payload.into_inner().into_draft()?;
    let snapshot = state
        .properties
        .update_property(PropertyId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(PropertyBody::from(snapshot)))
}

/// Remove a property together with its rooms.
#[utoipa::path(
    delete,
    path = "/api/v1/properties/{id}",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 204, description = "Property and its rooms removed"),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "deleteProperty"
)]
#[delete("/properties/{id}")]
pub async fn delete_property(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .properties
        .delete_property(PropertyId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the property's rooms in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/rooms",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "The property's rooms", body = [RoomBody]),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "listPropertyRooms"
)]
#[get("/properties/{id}/rooms")]
pub async fn list_property_rooms(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<RoomBody>>> {
    let rooms = state
        .properties
        .list_rooms(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(rooms.into_iter().map(RoomBody::from).collect()))
}

/// Sum of the property's room areas; zero when it has no rooms.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/totalArea",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "Total floor area", body = TotalAreaBody),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "getTotalArea"
)]
#[get("/properties/{id}/totalArea")]
pub async fn get_total_area(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<TotalAreaBody>> {
    let total_area = state
        .properties
        .total_area(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(TotalAreaBody { total_area }))
}

/// Market value: total area priced at the district's square-metre rate.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/value",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "Market value", body = ValueBody),
        (status = 422, description = "Unknown property or district", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "getValue"
)]
#[get("/properties/{id}/value")]
pub async fn get_value(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ValueBody>> {
    let value = state
        .properties
        .market_value(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(ValueBody { value }))
}

/// The property's largest room; earlier rooms win ties.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/largestRoom",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "The largest room", body = RoomBody),
        (status = 422, description = "Unknown property or no rooms", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "getLargestRoom"
)]
#[get("/properties/{id}/largestRoom")]
pub async fn get_largest_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RoomBody>> {
    let room = state
        .properties
        .largest_room(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(RoomBody::from(room)))
}

/// Per-room area breakdown for the property.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}/roomsArea",
    params(("id" = i64, Path, description = "Property identifier")),
    responses(
        (status = 200, description = "Per-room areas", body = RoomsAreaBody),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["properties"],
    operation_id = "getRoomsArea"
)]
#[get("/properties/{id}/roomsArea")]
pub async fn get_rooms_area(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RoomsAreaBody>> {
    let areas = state
        .properties
        .rooms_area(PropertyId::new(path.into_inner()))
        .await?;
    Ok(web::Json(RoomsAreaBody::from(areas)))
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
