//! In-memory repositories backing the catalogue ports.
//!
//! Each store is a `BTreeMap` keyed by raw id behind a tokio `RwLock`, with
//! an atomic sequence handing out identifiers from 1. Every port method takes
//! the lock exactly once, which is all the atomicity the domain asks of a
//! single-entity operation. The `BTreeMap` keeps `find_all` in id order
//! without a sort, and id order is creation order by construction.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::district::{District, DistrictDraft, DistrictId};
use crate::domain::ports::{
    DistrictRepository, PropertyRepository, RepositoryError, RoomRepository,
};
use crate::domain::property::{Property, PropertyDraft, PropertyId};
use crate::domain::room::{Room, RoomDraft, RoomId};

#[derive(Debug)]
struct Store<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    sequence: AtomicI64,
}

impl<T: Clone> Store<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    async fn put(&self, id: i64, row: T) {
        self.rows.write().await.insert(id, row);
    }

    async fn get(&self, id: i64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn remove(&self, id: i64) {
        self.rows.write().await.remove(&id);
    }

    async fn contains(&self, id: i64) -> bool {
        self.rows.read().await.contains_key(&id)
    }
}

/// District store over an id-ordered map.
#[derive(Debug)]
pub struct InMemoryDistrictRepository {
    store: Store<District>,
}

impl InMemoryDistrictRepository {
    /// Create an empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }
}

impl Default for InMemoryDistrictRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DistrictRepository for InMemoryDistrictRepository {
    async fn insert(&self, draft: DistrictDraft) -> Result<District, RepositoryError> {
        let id = self.store.next_id();
        let district = draft.into_district(DistrictId::new(id));
        self.store.put(id, district.clone()).await;
        Ok(district)
    }

    async fn update(&self, district: District) -> Result<District, RepositoryError> {
        self.store.put(district.id.into(), district.clone()).await;
        Ok(district)
    }

    async fn find_by_id(&self, id: DistrictId) -> Result<Option<District>, RepositoryError> {
        Ok(self.store.get(id.into()).await)
    }

    async fn find_all(&self) -> Result<Vec<District>, RepositoryError> {
        Ok(self.store.all().await)
    }

    async fn delete_by_id(&self, id: DistrictId) -> Result<(), RepositoryError> {
        self.store.remove(id.into()).await;
        Ok(())
    }

    async fn exists_by_id(&self, id: DistrictId) -> Result<bool, RepositoryError> {
        Ok(self.store.contains(id.into()).await)
    }
}

/// Property store over an id-ordered map.
#[derive(Debug)]
pub struct InMemoryPropertyRepository {
    store: Store<Property>,
}

impl InMemoryPropertyRepository {
    /// Create an empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn insert(&self, draft: PropertyDraft) -> Result<Property, RepositoryError> {
        let id = self.store.next_id();
        let property = draft.into_property(PropertyId::new(id));
        self.store.put(id, property.clone()).await;
        Ok(property)
    }

    async fn update(&self, property: Property) -> Result<Property, RepositoryError> {
        self.store.put(property.id.into(), property.clone()).await;
        Ok(property)
    }

    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        Ok(self.store.get(id.into()).await)
    }

    async fn find_all(&self) -> Result<Vec<Property>, RepositoryError> {
        Ok(self.store.all().await)
    }

    async fn delete_by_id(&self, id: PropertyId) -> Result<(), RepositoryError> {
        self.store.remove(id.into()).await;
        Ok(())
    }

    async fn exists_by_id(&self, id: PropertyId) -> Result<bool, RepositoryError> {
        Ok(self.store.contains(id.into()).await)
    }
}

/// Room store over an id-ordered map.
#[derive(Debug)]
pub struct InMemoryRoomRepository {
    store: Store<Room>,
}

impl InMemoryRoomRepository {
    /// Create an empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(
        &self,
        property_id: PropertyId,
        draft: RoomDraft,
    ) -> Result<Room, RepositoryError> {
        let id = self.store.next_id();
        let room = draft.into_room(RoomId::new(id), property_id);
        self.store.put(id, room.clone()).await;
        Ok(room)
    }

    async fn update(&self, room: Room) -> Result<Room, RepositoryError> {
        self.store.put(room.id.into(), room.clone()).await;
        Ok(room)
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        Ok(self.store.get(id.into()).await)
    }

    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError> {
        Ok(self.store.all().await)
    }

    async fn find_by_property(&self, property_id: PropertyId) -> Result<Vec<Room>, RepositoryError> {
        Ok(self
            .store
            .rows
            .read()
            .await
            .values()
            .filter(|room| room.property_id == property_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: RoomId) -> Result<(), RepositoryError> {
        self.store.remove(id.into()).await;
        Ok(())
    }

    async fn delete_by_property(&self, property_id: PropertyId) -> Result<(), RepositoryError> {
        self.store
            .rows
            .write()
            .await
            .retain(|_, room| room.property_id != property_id);
        Ok(())
    }

    async fn exists_by_id(&self, id: RoomId) -> Result<bool, RepositoryError> {
        Ok(self.store.contains(id.into()).await)
    }
}
