//! In-memory persistence adapters for the catalogue repository ports.
//!
//! The stores translate between draft/entity domain types and their rows;
//! no business logic resides here. Identifier assignment and iteration order
//! are the adapter's contract: ids count up from 1 per store, and listings
//! come back in id (creation) order.

mod memory;

pub use memory::{InMemoryDistrictRepository, InMemoryPropertyRepository, InMemoryRoomRepository};
