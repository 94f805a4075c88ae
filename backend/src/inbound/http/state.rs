//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DistrictService, PropertyService, RoomService};

/// Dependency bundle for the catalogue HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// District use cases.
    pub districts: Arc<dyn DistrictService>,
    /// Property use cases, including the derived metrics.
    pub properties: Arc<dyn PropertyService>,
    /// Room use cases.
    pub rooms: Arc<dyn RoomService>,
}

impl HttpState {
    /// Bundle the three driving ports.
    pub fn new(
        districts: Arc<dyn DistrictService>,
        properties: Arc<dyn PropertyService>,
        rooms: Arc<dyn RoomService>,
    ) -> Self {
        Self {
            districts,
            properties,
            rooms,
        }
    }
}
