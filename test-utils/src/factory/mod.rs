//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories take the ids of the rows they depend
//! on, so create owners, types and categories first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(db).await?;
//! let venue = factory::venue::VenueFactory::new(db, owner.id)
//!     .capacity(12)
//!     .coordinates(52.37, 4.89)
//!     .build()
//!     .await?;
//! let reservation = factory::reservation::ReservationFactory::new(db, venue.id, owner.id)
//!     .dates(date(2025, 6, 1), date(2025, 6, 4))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users, both guests and venue owners
//! - `venue_type` - Venue type lookup rows
//! - `category` - Amenity category lookup rows
//! - `amenity` - Amenities and their links to venues
//! - `occasion` - Occasions and their links to amenities
//! - `venue` - Venues
//! - `reservation` - Reservations
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod amenity;
pub mod category;
pub mod helpers;
pub mod occasion;
pub mod reservation;
pub mod user;
pub mod venue;
pub mod venue_type;

pub use amenity::{create_amenity, link_amenity_to_venue};
pub use category::create_category;
pub use occasion::{create_occasion, link_amenity_to_occasion};
pub use reservation::create_reservation;
pub use user::create_user;
pub use venue::create_venue;
pub use venue_type::create_venue_type;
