//! Route table and OpenAPI document.
//!
//! Handlers are mounted through `utoipa-axum`, which collects each handler's
//! `#[utoipa::path]` into the OpenAPI document while registering the route. Handlers
//! sharing a path are grouped in one `routes!` call.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        amenity, auth, category, favourite, occasion, rating, reservation, venue, venue_type,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Venue Booking API", description = "Venues, reservations and reviews"),
    tags(
        (name = "authentication", description = "Registration and session log in"),
        (name = "venue", description = "Venue management and search"),
        (name = "reservation", description = "Bookings and availability"),
        (name = "rating", description = "Reviews of finished stays"),
        (name = "favourite", description = "Bookmarked venues"),
        (name = "amenity", description = "Amenities venues offer"),
        (name = "category", description = "Amenity categories"),
        (name = "occasion", description = "Occasions and their suggested amenities"),
        (name = "venue-type", description = "Kinds of venue")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth_routes())
        .merge(venue_routes())
        .merge(reservation_routes())
        .merge(rating_routes())
        .merge(favourite_routes())
        .merge(lookup_routes())
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::authenticate))
        .routes(routes!(auth::register))
        .routes(routes!(auth::log_in))
        .routes(routes!(auth::log_out))
}

fn venue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(venue::get_venues, venue::create_venue))
        .routes(routes!(venue::filter_venues))
        .routes(routes!(venue::get_venue, venue::delete_venue))
        .routes(routes!(venue::update_venue_location))
        .routes(routes!(venue::update_venue_amenities))
        .routes(routes!(venue::update_venue_details))
}

fn reservation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            reservation::get_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(reservation::check_availability))
        .routes(routes!(reservation::get_occupied_dates))
        .routes(routes!(reservation::get_reservations_by_user))
        .routes(routes!(reservation::get_reservations_by_venue))
        .routes(routes!(
            reservation::get_reservation,
            reservation::change_is_pending_rating,
            reservation::delete_reservation
        ))
}

fn rating_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(rating::get_ratings, rating::create_rating))
        .routes(routes!(rating::get_rating, rating::delete_rating))
        .routes(routes!(rating::get_ratings_by_venue))
        .routes(routes!(rating::get_ratings_by_user))
}

fn favourite_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            favourite::get_favourites,
            favourite::create_favourite
        ))
        .routes(routes!(favourite::get_favourite, favourite::delete_favourite))
        .routes(routes!(favourite::get_favourites_by_venue))
        .routes(routes!(favourite::get_favourites_by_user))
}

fn lookup_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(amenity::get_amenities, amenity::create_amenity))
        .routes(routes!(
            amenity::get_amenity,
            amenity::update_amenity,
            amenity::delete_amenity
        ))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(occasion::get_occasions, occasion::create_occasion))
        .routes(routes!(
            occasion::get_occasion,
            occasion::update_occasion,
            occasion::delete_occasion
        ))
        .routes(routes!(
            venue_type::get_venue_types,
            venue_type::create_venue_type
        ))
        .routes(routes!(
            venue_type::get_venue_type,
            venue_type::delete_venue_type
        ))
}
