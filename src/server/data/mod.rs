//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep entities out of the business logic layer. Repositories that take
//! part in transactions are generic over `ConnectionTrait` and accept either the database
//! connection or an open transaction.

pub mod amenity;
pub mod category;
pub mod favourite;
pub mod occasion;
pub mod rating;
pub mod reservation;
pub mod user;
pub mod venue;
pub mod venue_type;

#[cfg(test)]
mod test;
