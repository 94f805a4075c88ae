//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope; the mapping table lives
//! with the adapter, not here.

use crate::domain::ports::RepositoryError;

/// Entity kinds named in lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A city district carrying a square-metre rate.
    District,
    /// A property registered inside a district.
    Property,
    /// A room inside a property.
    Room,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::District => "District",
            Self::Property => "Property",
            Self::Room => "Room",
        };
        f.write_str(name)
    }
}

/// Validation rule breached by a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// The field was absent or blank.
    Required,
    /// The value does not match the expected shape.
    Format,
    /// The value exceeds its length limit.
    TooLong,
    /// The value carries more digits than the type allows.
    Precision,
    /// The value falls outside its permitted bounds.
    Range,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    rule: ValidationRule,
    message: String,
}

impl FieldViolation {
    /// Wire-level name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Rule the value breached.
    pub fn rule(&self) -> ValidationRule {
        self.rule
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Every violation found in one request payload.
///
/// Draft constructors validate all fields before returning, so a single
/// response reports everything wrong with the payload at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Start an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation.
    pub fn push(&mut self, field: &'static str, rule: ValidationRule, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            rule,
            message: message.into(),
        });
    }

    /// True when no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations in the order they were found.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(violation.message())?;
            first = false;
        }
        Ok(())
    }
}

/// Stable failure category used by adapters to pick a transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// One or more request fields failed validation.
    Validation,
    /// An entity lookup failed.
    NotFound,
    /// A room-derived metric was requested for a property without rooms.
    NoRooms,
    /// An adapter failed in a way the caller cannot repair.
    Internal,
}

/// Domain error raised by catalogue operations.
///
/// The `NotFound` message template is part of the API contract: clients match
/// on `"<Kind> with ID <id> does not exist."`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The request payload failed one or more validation rules.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// No entity of `entity` kind exists under `id`.
    #[error("{entity} with ID {id} does not exist.")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: EntityKind,
        /// Identifier the caller asked for.
        id: i64,
    },
    /// The property exists but has no rooms to derive a metric from.
    #[error("Property with ID {property_id} has no rooms.")]
    NoRooms {
        /// Identifier of the room-less property.
        property_id: i64,
    },
    /// Unrecoverable adapter failure; the message never reaches clients.
    #[error("{message}")]
    Internal {
        /// Diagnostic detail for the logs.
        message: String,
    },
}

impl Error {
    /// Failure category for transport mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NoRooms { .. } => ErrorKind::NoRooms,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Wrap a collection of field violations.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }

    /// Report a failed lookup for `entity` under `id`.
    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Report a metric request against a room-less property.
    pub fn no_rooms(property_id: impl Into<i64>) -> Self {
        Self::NoRooms {
            property_id: property_id.into(),
        }
    }

    /// Report an adapter failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        Self::internal(error.to_string())
    }
}
