//! Districts and their validated draft form.

use rust_decimal::Decimal;

use crate::domain::error::{Error, ValidationErrors};
use crate::domain::validation::{self, fields};

/// Maximum characters accepted for a district name.
pub const DISTRICT_NAME_MAX_CHARS: usize = 45;

/// Identifier assigned to a district on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistrictId(i64);

impl DistrictId {
    /// Wrap a raw identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl From<DistrictId> for i64 {
    fn from(id: DistrictId) -> Self {
        id.0
    }
}

impl From<i64> for DistrictId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DistrictId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zone of the city carrying one price per square metre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    /// Store-assigned identifier.
    pub id: DistrictId,
    /// Display name.
    pub name: String,
    /// Price per square metre used when appraising properties.
    pub square_meter_value: Decimal,
}

/// Validated input for creating or replacing a district.
///
/// The constructor is the only way to obtain a draft, so every district that
/// reaches a repository has already passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictDraft {
    name: String,
    square_meter_value: Decimal,
}

impl DistrictDraft {
    /// Validate raw payload parts into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] carrying every violation found across
    /// both fields.
    pub fn new(name: Option<String>, square_meter_value: Option<Decimal>) -> Result<Self, Error> {
        let mut errors = ValidationErrors::new();
        let name = validation::require_name(&mut errors, fields::NAME, name, DISTRICT_NAME_MAX_CHARS);
        let square_meter_value = validation::require_square_meter_value(
            &mut errors,
            fields::SQUARE_METER_VALUE,
            square_meter_value,
        );
        match (name, square_meter_value) {
            (Some(name), Some(square_meter_value)) if errors.is_empty() => Ok(Self {
                name,
                square_meter_value,
            }),
            _ => Err(Error::validation(errors)),
        }
    }

    /// Validated display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated price per square metre.
    pub fn square_meter_value(&self) -> Decimal {
        self.square_meter_value
    }

    /// Materialise the draft into an entity under `id`.
    pub fn into_district(self, id: DistrictId) -> District {
        District {
            id,
            name: self.name,
            square_meter_value: self.square_meter_value,
        }
    }
}
