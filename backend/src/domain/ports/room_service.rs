//! Driving port for room use cases.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::property::PropertyId;
use crate::domain::room::{Room, RoomDraft, RoomId};

/// Room use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomService: Send + Sync {
    /// Add a room to an existing property.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the property does not exist.
    async fn create_room(&self, property_id: PropertyId, draft: RoomDraft) -> Result<Room, Error>;

    /// Fetch one room.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn get_room(&self, id: RoomId) -> Result<Room, Error>;

    /// Every room in creation order, across all properties.
    async fn list_rooms(&self) -> Result<Vec<Room>, Error>;

    /// Replace a room's name and dimensions, keeping its owning property.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn update_room(&self, id: RoomId, draft: RoomDraft) -> Result<Room, Error>;

    /// Remove a room.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn delete_room(&self, id: RoomId) -> Result<(), Error>;
}
