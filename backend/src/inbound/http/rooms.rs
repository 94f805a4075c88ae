//! Room HTTP handlers.
//!
//! ```text
//! POST   /api/v1/rooms/property/{propertyId}
//! GET    /api/v1/rooms
//! GET    /api/v1/rooms/{id}
//! PUT    /api/v1/rooms/{id}
//! DELETE /api/v1/rooms/{id}
//! ```
//!
//! Rooms are created under an existing property; updates replace name and
//! dimensions but never move a room between properties.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::property::PropertyId;
use crate::domain::room::{Room, RoomDraft, RoomId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or replacing a room.
///
/// Fields are optional so absent keys reach draft validation as `None` and
/// surface as `Required` violations instead of serde failures.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    /// Room display name.
    pub name: Option<String>,
    /// Width in metres, within [1, 25].
    pub width: Option<f64>,
    /// Length in metres, within [1, 33].
    pub length: Option<f64>,
}

/// Room representation on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomBody {
    /// Store-assigned identifier.
    pub id: i64,
    /// Room display name.
    pub name: String,
    /// Width in metres.
    pub width: f64,
    /// Length in metres.
    pub length: f64,
}

impl From<Room> for RoomBody {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.into(),
            name: room.name,
            width: room.width,
            length: room.length,
        }
    }
}

impl RoomPayload {
    fn into_draft(self) -> ApiResult<RoomDraft> {
        RoomDraft::new(self.name, self.width, self.length)
    }
}

/// Add a room to an existing property.
#[utoipa::path(
    post,
    path = "/api/v1/rooms/property/{propertyId}",
    params(("propertyId" = i64, Path, description = "Owning property identifier")),
    request_body = RoomPayload,
    responses(
        (status = 201, description = "Room created", body = RoomBody),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Unknown property", body = ErrorBody)
    ),
    tags = ["rooms"],
    operation_id = "createRoom"
)]
#[post("/rooms/property/{propertyId}")]
pub async fn create_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RoomPayload>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let room = state
        .rooms
        .create_room(PropertyId::new(path.into_inner()), draft)
        .await?;
    Ok(HttpResponse::Created().json(RoomBody::from(room)))
}

/// List every room across all properties, in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    responses(
        (status = 200, description = "All rooms", body = [RoomBody])
    ),
    tags = ["rooms"],
    operation_id = "listRooms"
)]
#[get("/rooms")]
pub async fn list_rooms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<RoomBody>>> {
    let rooms = state.rooms.list_rooms().await?;
    Ok(web::Json(rooms.into_iter().map(RoomBody::from).collect()))
}

/// Fetch one room by id.
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{id}",
    params(("id" = i64, Path, description = "Room identifier")),
    responses(
        (status = 200, description = "The room", body = RoomBody),
        (status = 422, description = "Unknown room", body = ErrorBody)
    ),
    tags = ["rooms"],
    operation_id = "getRoom"
)]
#[get("/rooms/{id}")]
pub async fn get_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RoomBody>> {
    let room = state.rooms.get_room(RoomId::new(path.into_inner())).await?;
    Ok(web::Json(RoomBody::from(room)))
}

/// Replace a room's name and dimensions.
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{id}",
    params(("id" = i64, Path, description = "Room identifier")),
    request_body = RoomPayload,
    responses(
        (status = 200, description = "Room replaced", body = RoomBody),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Unknown room", body = ErrorBody)
    ),
    tags = ["rooms"],
    operation_id = "updateRoom"
)]
#[put("/rooms/{id}")]
pub async fn update_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RoomPayload>,
) -> ApiResult<web::Json<RoomBody>> {
    let draft = payload.into_inner().into_draft()?;
    let room = state
        .rooms
        .update_room(RoomId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(RoomBody::from(room)))
}

/// Remove a room.
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{id}",
    params(("id" = i64, Path, description = "Room identifier")),
    responses(
        (status = 204, description = "Room removed"),
        (status = 422, description = "Unknown room", body = ErrorBody)
    ),
    tags = ["rooms"],
    operation_id = "deleteRoom"
)]
#[delete("/rooms/{id}")]
pub async fn delete_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.rooms.delete_room(RoomId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "rooms_tests.rs"]
mod tests;
