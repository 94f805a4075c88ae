//! Port for room persistence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::property::PropertyId;
use crate::domain::room::{Room, RoomDraft, RoomId};

/// Storage and retrieval of room rows.
///
/// Rooms always belong to a property, so inserts take the owning property id
/// alongside the draft and the port offers per-property queries for the
/// derived-metric services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room under `property_id` and assign its identifier.
    async fn insert(&self, property_id: PropertyId, draft: RoomDraft)
    -> Result<Room, RepositoryError>;

    /// Replace the stored row matching `room.id`.
    async fn update(&self, room: Room) -> Result<Room, RepositoryError>;

    /// Fetch one room, `None` when the id is unknown.
    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError>;

    /// Every room in creation order, across all properties.
    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError>;

    /// The rooms of one property in creation order.
    async fn find_by_property(&self, property_id: PropertyId) -> Result<Vec<Room>, RepositoryError>;

    /// Remove one room; removing an absent row is a no-op.
    async fn delete_by_id(&self, id: RoomId) -> Result<(), RepositoryError>;

    /// Remove every room belonging to `property_id`.
    async fn delete_by_property(&self, property_id: PropertyId) -> Result<(), RepositoryError>;

    /// Report whether a room row exists under `id`.
    async fn exists_by_id(&self, id: RoomId) -> Result<bool, RepositoryError>;
}
