//! Quadra backend: a real-estate catalogue with derived valuation metrics.
//!
//! Districts carry a price per square metre, properties belong to a district,
//! and rooms give a property its geometry. The domain layer computes total
//! area, market value, the largest room, and per-room areas on top of plain
//! CRUD; the HTTP layer exposes those operations under `/api/v1`.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
