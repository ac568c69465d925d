//! Address geocoding.
//!
//! Venue creation and city radius searches turn free-form addresses into coordinates
//! through the [`Geocoder`] trait. Production uses [`NominatimGeocoder`], which queries a
//! Nominatim-compatible `/search` endpoint; tests substitute a stub.

use std::future::Future;

use serde::Deserialize;
use url::Url;

use crate::server::{error::AppError, model::geo::Coordinates};

/// Resolves an address to a point.
pub trait Geocoder: Send + Sync {
    /// Looks up an address.
    ///
    /// # Returns
    /// - `Ok(Some(Coordinates))` - Best match for the address
    /// - `Ok(None)` - The address could not be located
    /// - `Err(AppError)` - The lookup itself failed
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, AppError>> + Send;
}

/// One result of a Nominatim search; coordinates are decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim-compatible search API.
#[derive(Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: Url,
    user_agent: String,
}

impl NominatimGeocoder {
    /// Creates a geocoder.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `base_url` - API root, e.g. `https://nominatim.openstreetmap.org`
    /// - `user_agent` - Identifies the application, as the public API's usage policy requires
    pub fn new(client: reqwest::Client, base_url: Url, user_agent: String) -> Self {
        Self {
            client,
            base_url,
            user_agent,
        }
    }

    /// Builds `{base_url}/search?q={address}&format=json&limit=1`.
    fn search_url(&self, address: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::InternalError(format!(
                    "Geocoder URL {} cannot be a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("search");
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        Ok(url)
    }
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, AppError> {
        let url = self.search_url(address)?;

        let places: Vec<NominatimPlace> = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        places.into_iter().next().map(parse_place).transpose()
    }
}

fn parse_place(place: NominatimPlace) -> Result<Coordinates, AppError> {
    let parse = |value: &str| {
        value.trim().parse::<f64>().map_err(|_| {
            AppError::InternalError(format!("Geocoder returned invalid coordinate {}", value))
        })
    };

    Ok(Coordinates {
        latitude: parse(&place.lat)?,
        longitude: parse(&place.lon)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder(base: &str) -> NominatimGeocoder {
        NominatimGeocoder::new(
            reqwest::Client::new(),
            Url::parse(base).unwrap(),
            "venue-booking-test".to_string(),
        )
    }

    #[test]
    fn builds_search_url() {
        let url = geocoder("https://nominatim.example.org")
            .search_url("12 Prinsengracht, 1015 DV Amsterdam")
            .unwrap();

        assert_eq!(url.path(), "/search");
        assert_eq!(
            url.query(),
            Some("q=12+Prinsengracht%2C+1015+DV+Amsterdam&format=json&limit=1")
        );
    }

    #[test]
    fn keeps_base_path() {
        let url = geocoder("https://geo.example.org/nominatim/")
            .search_url("Utrecht")
            .unwrap();

        assert_eq!(url.path(), "/nominatim/search");
    }

    #[test]
    fn parses_place_coordinates() {
        let places: Vec<NominatimPlace> =
            serde_json::from_str(r#"[{"lat":"52.3730796","lon":"4.8924534","display_name":"Amsterdam"}]"#)
                .unwrap();

        let coordinates = parse_place(places.into_iter().next().unwrap()).unwrap();

        assert_eq!(
            coordinates,
            Coordinates {
                latitude: 52.3730796,
                longitude: 4.8924534
            }
        );
    }

    #[test]
    fn rejects_malformed_coordinate() {
        let place = NominatimPlace {
            lat: "north".to_string(),
            lon: "4.89".to_string(),
        };

        assert!(matches!(parse_place(place), Err(AppError::InternalError(_))));
    }
}
