//! District HTTP handlers.
//!
//! ```text
//! POST   /api/v1/districts
//! GET    /api/v1/districts
//! GET    /api/v1/districts/{id}
//! PUT    /api/v1/districts/{id}
//! DELETE /api/v1/districts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::district::{District, DistrictDraft, DistrictId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or replacing a district.
///
/// Fields are optional so absent keys reach draft validation as `None` and
/// surface as `Required` violations instead of serde failures.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictPayload {
    /// District display name.
    pub name: Option<String>,
    /// Price per square metre; accepts JSON numbers or strings.
    #[schema(value_type = Option<String>, example = "8537")]
    pub square_meter_value: Option<Decimal>,
}

/// District representation on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictBody {
    /// Store-assigned identifier.
    pub id: i64,
    /// District display name.
    pub name: String,
    /// Price per square metre, serialised as a string to keep money exact.
    #[schema(value_type = String, example = "8537")]
    pub square_meter_value: Decimal,
}

impl From<District> for DistrictBody {
    fn from(district: District) -> Self {
        Self {
            id: district.id.into(),
            name: district.name,
            square_meter_value: district.square_meter_value,
        }
    }
}

impl DistrictPayload {
    fn into_draft(self) -> ApiResult<DistrictDraft> {
        DistrictDraft::new(self.name, self.square_meter_value)
    }
}

/// Register a new district.
#[utoipa::path(
    post,
    path = "/api/v1/districts",
    request_body = DistrictPayload,
    responses(
        (status = 201, description = "District created", body = DistrictBody),
        (status = 400, description = "Validation failed")
    ),
    tags = ["districts"],
    operation_id = "createDistrict"
)]
#[post("/districts")]
pub async fn create_district(
    state: web::Data<HttpState>,
    payload: web::Json<DistrictPayload>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let district = state.districts.create_district(draft).await?;
    Ok(HttpResponse::Created().json(DistrictBody::from(district)))
}

/// List every district in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/districts",
    responses(
        (status = 200, description = "All districts", body = [DistrictBody])
    ),
    tags = ["districts"],
    operation_id = "listDistricts"
)]
#[get("/districts")]
pub async fn list_districts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<DistrictBody>>> {
    let districts = state.districts.list_districts().await?;
    Ok(web::Json(
        districts.into_iter().map(DistrictBody::from).collect(),
    ))
}

/// Fetch one district by id.
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}",
    params(("id" = i64, Path, description = "District identifier")),
    responses(
        (status = 200, description = "The district", body = DistrictBody),
        (status = 422, description = "Unknown district", body = ErrorBody)
    ),
    tags = ["districts"],
    operation_id = "getDistrict"
)]
#[get("/districts/{id}")]
pub async fn get_district(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DistrictBody>> {
    let district = state
        .districts
        .get_district(DistrictId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DistrictBody::from(district)))
}

/// Replace a district's name and square-metre rate.
#[utoipa::path(
    put,
    path = "/api/v1/districts/{id}",
    params(("id" = i64, Path, description = "District identifier")),
    request_body = DistrictPayload,
    responses(
        (status = 200, description = "District replaced", body = DistrictBody),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Unknown district", body = ErrorBody)
    ),
    tags = ["districts"],
    operation_id = "updateDistrict"
)]
#[put("/districts/{id}")]
pub async fn update_district(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<DistrictPayload>,
) -> ApiResult<web::Json<DistrictBody>> {
    let draft = payload.into_inner().into_draft()?;
    let district = state
        .districts
        .update_district(DistrictId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(DistrictBody::from(district)))
}

/// Remove a district.
#[utoipa::path(
    delete,
    path = "/api/v1/districts/{id}",
    params(("id" = i64, Path, description = "District identifier")),
    responses(
        (status = 204, description = "District removed"),
        (status = 422, description = "Unknown district", body = ErrorBody)
    ),
    tags = ["districts"],
    operation_id = "deleteDistrict"
)]
#[delete("/districts/{id}")]
pub async fn delete_district(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .districts
        .delete_district(DistrictId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "districts_tests.rs"]
mod tests;
