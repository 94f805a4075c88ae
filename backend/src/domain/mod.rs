//! Catalogue domain: entities, validation, use cases, and ports.
//!
//! The domain layer is transport and storage agnostic. Entities carry id
//! back-references instead of embedded object graphs; services resolve those
//! references through the repository ports in `ports/` and surface every
//! failure as a typed [`Error`]. Inbound adapters own the mapping from error
//! kinds to wire responses.

pub mod district;
pub mod district_service;
pub mod error;
pub mod ports;
pub mod property;
pub mod property_service;
pub mod room;
pub mod room_service;
pub mod validation;

pub use self::district::{District, DistrictDraft, DistrictId};
pub use self::district_service::DistrictServiceImpl;
pub use self::error::{
    EntityKind, Error, ErrorKind, FieldViolation, ValidationErrors, ValidationRule,
};
pub use self::property::{
    Property, PropertyDraft, PropertyId, PropertyRoomAreas, PropertySnapshot, RoomArea,
};
pub use self::property_service::PropertyServiceImpl;
pub use self::room::{Room, RoomDraft, RoomId};
pub use self::room_service::RoomServiceImpl;
