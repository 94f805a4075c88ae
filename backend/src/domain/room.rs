//! Rooms and their validated draft form.

use std::ops::RangeInclusive;

use crate::domain::error::{Error, ValidationErrors};
use crate::domain::property::PropertyId;
use crate::domain::validation::{self, fields};

/// Maximum characters accepted for a room name.
pub const ROOM_NAME_MAX_CHARS: usize = 30;
/// Inclusive bounds for room width in metres.
pub const ROOM_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=25.0;
/// Inclusive bounds for room length in metres.
pub const ROOM_LENGTH_RANGE: RangeInclusive<f64> = 1.0..=33.0;

/// Identifier assigned to a room on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(i64);

impl RoomId {
    /// Wrap a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl From<RoomId> for i64 {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl From<i64> for RoomId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rectangular division of a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Store-assigned identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Width in metres.
    pub width: f64,
    /// Length in metres.
    pub length: f64,
    /// Property this room belongs to.
    pub property_id: PropertyId,
}

impl Room {
    /// Floor area in square metres.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Validated input for creating or replacing a room.
///
/// The owning property is not part of the draft; it arrives separately so the
/// same draft type serves both creation under a property and in-place update.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    name: String,
    width: f64,
    length: f64,
}

impl RoomDraft {
    /// Validate raw payload parts into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] carrying every violation found across
    /// the name and both dimensions.
    pub fn new(name: Option<String>, width: Option<f64>, length: Option<f64>) -> Result<Self, Error> {
        let mut errors = ValidationErrors::new();
        let name = validation::require_name(&mut errors, fields::NAME, name, ROOM_NAME_MAX_CHARS);
        let width = validation::require_dimension(&mut errors, fields::WIDTH, width, &ROOM_WIDTH_RANGE);
        let length =
            validation::require_dimension(&mut errors, fields::LENGTH, length, &ROOM_LENGTH_RANGE);
        match (name, width, length) {
            (Some(name), Some(width), Some(length)) if errors.is_empty() => Ok(Self {
                name,
                width,
                length,
            }),
            _ => Err(Error::validation(errors)),
        }
    }

    /// Validated display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated width in metres.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Validated length in metres.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Materialise the draft into an entity under `id`, owned by `property_id`.
    pub fn into_room(self, id: RoomId, property_id: PropertyId) -> Room {
        Room {
            id,
            name: self.name,
            width: self.width,
            length: self.length,
            property_id,
        }
    }
}
