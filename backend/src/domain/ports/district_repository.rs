//! Port for district persistence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::district::{District, DistrictDraft, DistrictId};

/// Storage and retrieval of district rows.
///
/// Adapters assign identifiers on insert, starting at 1 and increasing in
/// creation order, and preserve that order in [`Self::find_all`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Persist a new district and assign its identifier.
    async fn insert(&self, draft: DistrictDraft) -> Result<District, RepositoryError>;

    /// Replace the stored row matching `district.id`.
    async fn update(&self, district: District) -> Result<District, RepositoryError>;

    /// Fetch one district, `None` when the id is unknown.
    async fn find_by_id(&self, id: DistrictId) -> Result<Option<District>, RepositoryError>;

    /// Every district in creation order.
    async fn find_all(&self) -> Result<Vec<District>, RepositoryError>;

    /// Remove one district; removing an absent row is a no-op.
    async fn delete_by_id(&self, id: DistrictId) -> Result<(), RepositoryError>;

    /// Report whether a district row exists under `id`.
    async fn exists_by_id(&self, id: DistrictId) -> Result<bool, RepositoryError>;
}
