//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod district_repository;
mod district_service;
mod property_repository;
mod property_service;
mod repository_error;
mod room_repository;
mod room_service;

#[cfg(test)]
pub use district_repository::MockDistrictRepository;
pub use district_repository::DistrictRepository;
#[cfg(test)]
pub use district_service::MockDistrictService;
pub use district_service::DistrictService;
#[cfg(test)]
pub use property_repository::MockPropertyRepository;
pub use property_repository::PropertyRepository;
#[cfg(test)]
pub use property_service::MockPropertyService;
pub use property_service::PropertyService;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::RoomRepository;
#[cfg(test)]
pub use room_service::MockRoomService;
pub use room_service::RoomService;
