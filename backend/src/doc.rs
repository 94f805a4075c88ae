//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the catalogue REST API. It registers every HTTP path
//! from the inbound layer together with the wire schemas. The generated
//! document is served at `/api-docs/openapi.json` and rendered by Swagger UI
//! at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::districts::{DistrictBody, DistrictPayload};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::properties::{
    PropertyBody, PropertyPayload, RoomAreaBody, RoomsAreaBody, TotalAreaBody, ValueBody,
};
use crate::inbound::http::rooms::{RoomBody, RoomPayload};

/// OpenAPI document for the catalogue REST API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::districts::create_district,
        crate::inbound::http::districts::list_districts,
        crate::inbound::http::districts::get_district,
        crate::inbound::http::districts::update_district,
        crate::inbound::http::districts::delete_district,
        crate::inbound::http::properties::create_property,
        crate::inbound::http::properties::list_properties,
        crate::inbound::http::properties::get_property,
        crate::inbound::http::properties::update_property,
        crate::inbound::http::properties::delete_property,
        crate::inbound::http::properties::list_property_rooms,
        crate::inbound::http::properties::get_total_area,
        crate::inbound::http::properties::get_value,
        crate::inbound::http::properties::get_largest_room,
        crate::inbound::http::properties::get_rooms_area,
        crate::inbound::http::rooms::create_room,
        crate::inbound::http::rooms::list_rooms,
        crate::inbound::http::rooms::get_room,
        crate::inbound::http::rooms::update_room,
        crate::inbound::http::rooms::delete_room,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DistrictPayload,
        DistrictBody,
        PropertyPayload,
        PropertyBody,
        RoomPayload,
        RoomBody,
        TotalAreaBody,
        ValueBody,
        RoomAreaBody,
        RoomsAreaBody,
        ErrorBody,
    )),
    tags(
        (name = "districts", description = "District catalogue management"),
        (name = "properties", description = "Property management and derived metrics"),
        (name = "rooms", description = "Room management"),
        (name = "health", description = "Orchestration probes")
    ),
    info(
        title = "Quadra",
        description = "Real-estate catalogue with district, property, and room management plus derived valuation metrics."
    )
)]
pub struct ApiDoc;
