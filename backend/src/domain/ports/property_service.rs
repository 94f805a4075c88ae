//! Driving port for property use cases.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::error::Error;
use crate::domain::property::{PropertyDraft, PropertyId, PropertyRoomAreas, PropertySnapshot};
use crate::domain::room::Room;

/// Property use cases exposed to inbound adapters.
///
/// Reads return [`PropertySnapshot`]s with the district and rooms already
/// joined; the metric operations derive their figures from the same rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Register a property in an existing district.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the referenced district does not exist.
    async fn create_property(&self, draft: PropertyDraft) -> Result<PropertySnapshot, Error>;

    /// Fetch one property with its district and rooms.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the property id, or the district it still
    /// references, is unknown.
    async fn get_property(&self, id: PropertyId) -> Result<PropertySnapshot, Error>;

    /// Every property in creation order, each with district and rooms.
    async fn list_properties(&self) -> Result<Vec<PropertySnapshot>, Error>;

    /// Replace a property's name and district registration.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown property or target district.
    async fn update_property(
        &self,
        id: PropertyId,
        draft: PropertyDraft,
    ) -> Result<PropertySnapshot, Error>;

    /// Remove a property together with its rooms.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn delete_property(&self, id: PropertyId) -> Result<(), Error>;

    /// The property's rooms in creation order.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn list_rooms(&self, id: PropertyId) -> Result<Vec<Room>, Error>;

    /// Sum of the property's room areas in square metres; zero without rooms.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn total_area(&self, id: PropertyId) -> Result<f64, Error>;

    /// Market value: total area priced at the district's square-metre rate.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the property or its district is unknown.
    async fn market_value(&self, id: PropertyId) -> Result<Decimal, Error>;

    /// The room with the greatest floor area; earlier rooms win ties.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] for an unknown property, [`Error::NoRooms`] when
    /// the property has no rooms.
    async fn largest_room(&self, id: PropertyId) -> Result<Room, Error>;

    /// Per-room area breakdown for the property.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn rooms_area(&self, id: PropertyId) -> Result<PropertyRoomAreas, Error>;
}
