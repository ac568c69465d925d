//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types with `from_entity`, and
//! controllers turn them into DTOs with `into_dto`. Parameter types are built from DTOs
//! with `from_dto`, which is also where request values are validated.

pub mod amenity;
pub mod category;
pub mod date_range;
pub mod favourite;
pub mod geo;
pub mod occasion;
pub mod rating;
pub mod reservation;
pub mod user;
pub mod venue;
pub mod venue_filter;
pub mod venue_type;
