//! Business logic layer for the pocket guide catalog
//!
//! Two stateless read-only services over the storage crate: the region
//! query engine (grouped birds) and the admin reporting operations. All
//! methods are synchronous; the HTTP layer bridges with `spawn_blocking`.

mod admin_service;
mod error;
mod region_service;
#[cfg(test)]
mod tests_support;

pub use admin_service::AdminService;
pub use error::ServiceError;
pub use region_service::RegionService;
