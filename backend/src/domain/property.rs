//! Properties, their validated draft form, and room-derived metrics.

use crate::domain::district::{District, DistrictId};
use crate::domain::error::{Error, ValidationErrors};
use crate::domain::room::{Room, RoomId};
use crate::domain::validation::{self, fields};

/// Maximum characters accepted for a property name.
pub const PROPERTY_NAME_MAX_CHARS: usize = 30;

/// Identifier assigned to a property on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(i64);

impl PropertyId {
    /// Wrap a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl From<PropertyId> for i64 {
    fn from(id: PropertyId) -> Self {
        id.0
    }
}

impl From<i64> for PropertyId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A real-estate unit registered in exactly one district.
///
/// The district reference is stored by id only; joining the full district row
/// is the service's job when it assembles a [`PropertySnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Store-assigned identifier.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// District this property is registered in.
    pub district_id: DistrictId,
}

/// Property read model joined with its district and rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySnapshot {
    /// Store-assigned identifier.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// Full district row the property is registered in.
    pub district: District,
    /// The property's rooms in creation order.
    pub rooms: Vec<Room>,
}

/// A room's name and computed floor area.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomArea {
    /// Identifier of the measured room.
    pub id: RoomId,
    /// Display name of the measured room.
    pub name: String,
    /// Floor area in square metres.
    pub area: f64,
}

impl From<&Room> for RoomArea {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            area: room.area(),
        }
    }
}

/// Per-room area breakdown for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRoomAreas {
    /// Identifier of the measured property.
    pub id: PropertyId,
    /// Display name of the measured property.
    pub name: String,
    /// One entry per room, in creation order.
    pub rooms: Vec<RoomArea>,
}

/// Sum of room floor areas in square metres.
pub fn total_area(rooms: &[Room]) -> f64 {
    rooms.iter().map(Room::area).sum()
}

/// The room with the greatest floor area; the earlier room wins ties.
pub fn largest_room(rooms: &[Room]) -> Option<&Room> {
    rooms.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.area() <= current.area() => Some(current),
        _ => Some(candidate),
    })
}

/// Validated input for creating or replacing a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDraft {
    name: String,
    district_id: DistrictId,
}

impl PropertyDraft {
    /// Validate raw payload parts into a draft.
    ///
    /// Whether the district actually exists is a service concern; the draft
    /// only requires the reference to be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] carrying every violation found.
    pub fn new(name: Option<String>, district_id: Option<DistrictId>) -> Result<Self, Error> {
        let mut errors = ValidationErrors::new();
        let name = validation::require_name(&mut errors, fields::NAME, name, PROPERTY_NAME_MAX_CHARS);
        let district_id = validation::require(&mut errors, fields::DISTRICT_ID, district_id);
        match (name, district_id) {
            (Some(name), Some(district_id)) if errors.is_empty() => Ok(Self { name, district_id }),
            _ => Err(Error::validation(errors)),
        }
    }

    /// Validated display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// District the property should be registered in.
    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    /// Materialise the draft into an entity under `id`.
    pub fn into_property(self, id: PropertyId) -> Property {
        Property {
            id,
            name: self.name,
            district_id: self.district_id,
        }
    }
}
