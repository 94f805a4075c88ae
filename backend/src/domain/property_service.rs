//! Property use cases: CRUD orchestration and the derived metrics.
//!
//! Properties sit in the middle of the catalogue hierarchy, so this service
//! joins all three repositories: it resolves the owning district on writes,
//! folds room geometry into area figures, and prices the result with the
//! district's square-metre rate.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::info;

use crate::domain::district::{District, DistrictId};
use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{DistrictRepository, PropertyRepository, PropertyService, RoomRepository};
use crate::domain::property::{
    self, Property, PropertyDraft, PropertyId, PropertyRoomAreas, PropertySnapshot, RoomArea,
};
use crate::domain::room::Room;

/// Default implementation of the [`PropertyService`] port.
#[derive(Clone)]
pub struct PropertyServiceImpl<P, D, R> {
    properties: Arc<P>,
    districts: Arc<D>,
    rooms: Arc<R>,
}

impl<P, D, R> PropertyServiceImpl<P, D, R> {
    /// Build the service over the property, district, and room repositories.
    pub fn new(properties: Arc<P>, districts: Arc<D>, rooms: Arc<R>) -> Self {
        Self {
            properties,
            districts,
            rooms,
        }
    }
}

impl<P, D, R> PropertyServiceImpl<P, D, R>
where
    P: PropertyRepository,
    D: DistrictRepository,
    R: RoomRepository,
{
    async fn require_property(&self, id: PropertyId) -> Result<Property, Error> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(EntityKind::Property, id))
    }

    async fn require_district(&self, id: DistrictId) -> Result<District, Error> {
        self.districts
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(EntityKind::District, id))
    }

    /// Join one property row with its district and rooms.
    ///
    /// A district deleted out from under the property surfaces here as
    /// district `NotFound`; the catalogue does not guard district deletion.
    async fn snapshot(&self, property: Property) -> Result<PropertySnapshot, Error> {
        let district = self.require_district(property.district_id).await?;
        let rooms = self.rooms.find_by_property(property.id).await?;
        Ok(PropertySnapshot {
            id: property.id,
            name: property.name,
            district,
            rooms,
        })
    }

    async fn property_rooms(&self, id: PropertyId) -> Result<(Property, Vec<Room>), Error> {
        let property = self.require_property(id).await?;
        let rooms = self.rooms.find_by_property(property.id).await?;
        Ok((property, rooms))
    }
}

#[async_trait]
impl<P, D, R> PropertyService for PropertyServiceImpl<P, D, R>
where
    P: PropertyRepository,
    D: DistrictRepository,
    R: RoomRepository,
{
    async fn create_property(&self, draft: PropertyDraft) -> Result<PropertySnapshot, Error> {
        let district = self.require_district(draft.district_id()).await?;
        let property = self.properties.insert(draft).await?;
        info!(id = %property.id, district_id = %district.id, "property created");
        Ok(PropertySnapshot {
            id: property.id,
            name: property.name,
            district,
            rooms: Vec::new(),
        })
    }

    async fn get_property(&self, id: PropertyId) -> Result<PropertySnapshot, Error> {
        let property = self.require_property(id).await?;
        self.snapshot(property).await
    }

    async fn list_properties(&self) -> Result<Vec<PropertySnapshot>, Error> {
        let mut snapshots = Vec::new();
        for property in self.properties.find_all().await? {
            snapshots.push(self.snapshot(property).await?);
        }
        Ok(snapshots)
    }

    async fn update_property(
        &self,
        id: PropertyId,
        draft: PropertyDraft,
    ) -> Result<PropertySnapshot, Error> {
        self.require_property(id).await?;
        self.require_district(draft.district_id()).await?;
        let property = self.properties.update(draft.into_property(id)).await?;
        self.snapshot(property).await
    }

    async fn delete_property(&self, id: PropertyId) -> Result<(), Error> {
        if !self.properties.exists_by_id(id).await? {
            return Err(Error::not_found(EntityKind::Property, id));
        }
        self.rooms.delete_by_property(id).await?;
        self.properties.delete_by_id(id).await?;
        info!(id = %id, "property deleted with its rooms");
        Ok(())
    }

    async fn list_rooms(&self, id: PropertyId) -> Result<Vec<Room>, Error> {
        let (_, rooms) = self.property_rooms(id).await?;
        Ok(rooms)
    }

    async fn total_area(&self, id: PropertyId) -> Result<f64, Error> {
        let (_, rooms) = self.property_rooms(id).await?;
        Ok(property::total_area(&rooms))
    }

    async fn market_value(&self, id: PropertyId) -> Result<Decimal, Error> {
        let (property, rooms) = self.property_rooms(id).await?;
        let district = self.require_district(property.district_id).await?;
        let area = property::total_area(&rooms);
        // Monetary output must stay exact: switch from the float geometry to
        // fixed-point before applying the square-metre rate.
        let area = Decimal::from_f64(area)
            .ok_or_else(|| Error::internal(format!("total area {area} is not a finite number")))?;
        Ok(area * district.square_meter_value)
    }

    async fn largest_room(&self, id: PropertyId) -> Result<Room, Error> {
        let (property, rooms) = self.property_rooms(id).await?;
        property::largest_room(&rooms)
            .cloned()
            .ok_or_else(|| Error::no_rooms(property.id))
    }

    async fn rooms_area(&self, id: PropertyId) -> Result<PropertyRoomAreas, Error> {
        let (property, rooms) = self.property_rooms(id).await?;
        Ok(PropertyRoomAreas {
            id: property.id,
            name: property.name,
            rooms: rooms.iter().map(RoomArea::from).collect(),
        })
    }
}
