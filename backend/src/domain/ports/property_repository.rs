//! Port for property persistence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::property::{Property, PropertyDraft, PropertyId};

/// Storage and retrieval of property rows.
///
/// Rows store the owning district by id only; referential checks against
/// districts and cascading room deletion are service concerns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Persist a new property and assign its identifier.
    async fn insert(&self, draft: PropertyDraft) -> Result<Property, RepositoryError>;

    /// Replace the stored row matching `property.id`.
    async fn update(&self, property: Property) -> Result<Property, RepositoryError>;

    /// Fetch one property, `None` when the id is unknown.
    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError>;

    /// Every property in creation order.
    async fn find_all(&self) -> Result<Vec<Property>, RepositoryError>;

    /// Remove one property; removing an absent row is a no-op.
    async fn delete_by_id(&self, id: PropertyId) -> Result<(), RepositoryError>;

    /// Report whether a property row exists under `id`.
    async fn exists_by_id(&self, id: PropertyId) -> Result<bool, RepositoryError>;
}
