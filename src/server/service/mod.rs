//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Availability gating, filter composition, rating aggregation
//! - **Orchestration**: Coordinating repositories and the geocoder
//! - **Error Translation**: Turning store constraint violations into `NotFound` and `Conflict`
//! - **Transaction Management**: Running multi-step writes atomically

pub mod auth;
pub mod favourite;
pub mod geocoder;
pub mod lookup;
pub mod rating;
pub mod reservation;
pub mod venue;

#[cfg(test)]
mod test;
