//! Driving port for district use cases.

use async_trait::async_trait;

use crate::domain::district::{District, DistrictDraft, DistrictId};
use crate::domain::error::Error;

/// District use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DistrictService: Send + Sync {
    /// Create a district from a validated draft.
    async fn create_district(&self, draft: DistrictDraft) -> Result<District, Error>;

    /// Fetch one district.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn get_district(&self, id: DistrictId) -> Result<District, Error>;

    /// Every district in creation order.
    async fn list_districts(&self) -> Result<Vec<District>, Error>;

    /// Replace a district's name and square-metre rate.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn update_district(&self, id: DistrictId, draft: DistrictDraft)
    -> Result<District, Error>;

    /// Remove a district.
    ///
    /// Properties registered in it keep their district reference; reading
    /// such a property later reports the district as missing.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown.
    async fn delete_district(&self, id: DistrictId) -> Result<(), Error>;
}
