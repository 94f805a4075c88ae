//! District use cases over the district repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::district::{District, DistrictDraft, DistrictId};
use crate::domain::error::{EntityKind, Error};
use crate::domain::ports::{DistrictRepository, DistrictService};

/// Default implementation of the [`DistrictService`] port.
#[derive(Clone)]
pub struct DistrictServiceImpl<D> {
    districts: Arc<D>,
}

impl<D> DistrictServiceImpl<D> {
    /// Build the service over a district repository.
    pub fn new(districts: Arc<D>) -> Self {
        Self { districts }
    }
}

impl<D: DistrictRepository> DistrictServiceImpl<D> {
    async fn require_district(&self, id: DistrictId) -> Result<District, Error> {
        self.districts
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(EntityKind::District, id))
    }
}

#[async_trait]
impl<D: DistrictRepository> DistrictService for DistrictServiceImpl<D> {
    async fn create_district(&self, draft: DistrictDraft) -> Result<District, Error> {
        let district = self.districts.insert(draft).await?;
        info!(id = %district.id, "district created");
        Ok(district)
    }

    async fn get_district(&self, id: DistrictId) -> Result<District, Error> {
        self.require_district(id).await
    }

    async fn list_districts(&self) -> Result<Vec<District>, Error> {
        Ok(self.districts.find_all().await?)
    }

    async fn update_district(
        &self,
        id: DistrictId,
        draft: DistrictDraft,
    ) -> Result<District, Error> {
        self.require_district(id).await?;
        Ok(self.districts.update(draft.into_district(id)).await?)
    }

    async fn delete_district(&self, id: DistrictId) -> Result<(), Error> {
        if !self.districts.exists_by_id(id).await? {
            return Err(Error::not_found(EntityKind::District, id));
        }
        self.districts.delete_by_id(id).await?;
        info!(id = %id, "district deleted");
        Ok(())
    }
}
