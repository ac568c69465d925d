//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert request DTOs into validated
//! params, call a service and convert the resulting domain model back into a DTO. Every
//! handler carries a `#[utoipa::path]` annotation so the router can collect the OpenAPI
//! document from the handlers it mounts.

pub mod amenity;
pub mod auth;
pub mod category;
pub mod favourite;
pub mod occasion;
pub mod rating;
pub mod reservation;
pub mod venue;
pub mod venue_type;
