//! Room use cases over the room and property repositories.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{PropertyRepository, RoomRepository, RoomService};
use crate::domain::property::PropertyId;
use crate::domain::room::{Room, RoomDraft, RoomId};

/// Default implementation of the [`RoomService`] port.
#[derive(Clone)]
pub struct RoomServiceImpl<R, P> {
    rooms: Arc<R>,
    properties: Arc<P>,
}

impl<R, P> RoomServiceImpl<R, P> {
    /// Build the service over the room and property repositories.
    pub fn new(rooms: Arc<R>, properties: Arc<P>) -> Self {
        Self { rooms, properties }
    }
}

impl<R: RoomRepository, P: PropertyRepository> RoomServiceImpl<R, P> {
    async fn require_room(&self, id: RoomId) -> Result<Room, Error> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(EntityKind::Room, id))
    }
}

#[async_trait]
impl<R: RoomRepository, P: PropertyRepository> RoomService for RoomServiceImpl<R, P> {
    async fn create_room(&self, property_id: PropertyId, draft: RoomDraft) -> Result<Room, Error> {
        if !self.properties.exists_by_id(property_id).await? {
            return Err(Error::not_found(EntityKind::Property, property_id));
        }
        let room = self.rooms.insert(property_id, draft).await?;
        info!(id = %room.id, property_id = %property_id, "room created");
        Ok(room)
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, Error> {
        self.require_room(id).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        Ok(self.rooms.find_all().await?)
    }

    async fn update_room(&self, id: RoomId, draft: RoomDraft) -> Result<Room, Error> {
        // An update replaces name and dimensions; the owning property is
        // fixed for the room's lifetime.
        let existing = self.require_room(id).await?;
        let room = self
            .rooms
            .update(draft.into_room(id, existing.property_id))
            .await?;
        Ok(room)
    }

    async fn delete_room(&self, id: RoomId) -> Result<(), Error> {
        if !self.rooms.exists_by_id(id).await? {
            return Err(Error::not_found(EntityKind::Room, id));
        }
        self.rooms.delete_by_id(id).await?;
        info!(id = %id, "room deleted");
        Ok(())
    }
}
