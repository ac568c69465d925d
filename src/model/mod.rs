//! Data transfer objects exchanged over the HTTP API.
//!
//! Every type here is serialized with serde and described for the OpenAPI document with
//! utoipa. Conversion to and from the server's domain models happens in
//! `server::model`, so these types carry no behavior.

pub mod amenity;
pub mod api;
pub mod category;
pub mod favourite;
pub mod occasion;
pub mod rating;
pub mod reservation;
pub mod user;
pub mod venue;
pub mod venue_type;
