//! Outbound adapters implementing domain ports for infrastructure.
//!
//! Adapters are thin translators between domain types and whatever backs
//! them; business logic stays in the domain layer. The catalogue ships one
//! adapter family: the in-memory stores under `persistence`.

pub mod persistence;
