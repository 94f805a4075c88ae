//! Assembly of repositories, services, and the HTTP state bundle.

use std::sync::Arc;

use crate::domain::{DistrictServiceImpl, PropertyServiceImpl, RoomServiceImpl};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    InMemoryDistrictRepository, InMemoryPropertyRepository, InMemoryRoomRepository,
};

/// Wire the in-memory repositories into the three catalogue services.
pub fn build_http_state() -> HttpState {
    let districts = Arc::new(InMemoryDistrictRepository::new());
    let properties = Arc::new(InMemoryPropertyRepository::new());
    let rooms = Arc::new(InMemoryRoomRepository::new());

    HttpState::new(
        Arc::new(DistrictServiceImpl::new(Arc::clone(&districts))),
        Arc::new(PropertyServiceImpl::new(
            Arc::clone(&properties),
            Arc::clone(&districts),
            Arc::clone(&rooms),
        )),
        Arc::new(RoomServiceImpl::new(rooms, properties)),
    )
}
