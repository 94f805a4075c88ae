//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. This is the only place that knows which status each failure kind
//! maps to.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind, ValidationErrors};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Single-message error body used for 422 and 500 responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        // Lookup failures and room-less metrics are definitive business
        // outcomes, not missing routes, hence 422 rather than 404.
        ErrorKind::NotFound | ErrorKind::NoRooms => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render collected violations as a field-keyed object:
/// `{"name": [{"error": "..."}], "width": [{"error": "..."}]}`.
fn validation_body(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for violation in errors.violations() {
        let entry = fields
            .entry(violation.field().to_owned())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(messages) = entry {
            messages.push(json!({ "error": violation.message() }));
        }
    }
    Value::Object(fields)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(errors) => builder.json(validation_body(errors)),
            Self::NotFound { .. } | Self::NoRooms { .. } => {
                builder.json(json!({ "error": self.to_string() }))
            }
            Self::Internal { message } => {
                // Do not leak adapter details to clients.
                error!(detail = %message, "internal error reached the HTTP boundary");
                builder.json(json!({ "error": "internal error" }))
            }
        }
    }
}
