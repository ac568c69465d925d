//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` shares its pool
//! and the geocoder wraps a `reqwest::Client`, which is reference counted.

use sea_orm::DatabaseConnection;

use crate::server::service::geocoder::NominatimGeocoder;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool to the SQLite database.
    pub db: DatabaseConnection,

    /// Address lookup used by venue creation and city radius searches.
    pub geocoder: NominatimGeocoder,
}

impl AppState {
    pub fn new(db: DatabaseConnection, geocoder: NominatimGeocoder) -> Self {
        Self { db, geocoder }
    }
}
