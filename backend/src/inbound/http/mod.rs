//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod districts;
pub mod error;
pub mod health;
pub mod properties;
pub mod rooms;
pub mod state;

pub use error::ApiResult;
