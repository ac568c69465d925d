pub use super::amenity::Entity as Amenity;
pub use super::amenity_to_occasion::Entity as AmenityToOccasion;
pub use super::amenity_to_venue::Entity as AmenityToVenue;
pub use super::category::Entity as Category;
pub use super::favourite::Entity as Favourite;
pub use super::occasion::Entity as Occasion;
pub use super::rating::Entity as Rating;
pub use super::reservation::Entity as Reservation;
pub use super::user::Entity as User;
pub use super::venue::Entity as Venue;
pub use super::venue_type::Entity as VenueType;
