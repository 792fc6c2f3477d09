use crate::{
    core::{constants::NOMINATIM_URL, geo::LatLng},
    geocode::place::Place,
    MapError, Result,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent so that the public geocoding
/// service doesn't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every lookup.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("citymap/0.1 (+https://github.com/example/citymap)")
        .build()
        .expect("failed to build reqwest client")
});

/// Resolves free-text place names and coordinate pairs to geocoding records.
///
/// The seam exists so sessions can be exercised without network access;
/// tests substitute a scripted implementation.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Forward search: the first record of a limit-1 result list.
    /// Fails with [`MapError::LocationNotFound`] when the result set is empty.
    async fn resolve(&self, query: &str) -> Result<Place>;

    /// Reverse lookup for a coordinate pair. Whatever the provider yields is
    /// passed through without an emptiness check.
    async fn resolve_reverse(&self, position: LatLng) -> Result<Place>;
}

/// Geocoder backed by the public Nominatim HTTP API.
///
/// Exactly one network attempt per call: no retry, no timeout, no caching.
/// Any transport or decode failure propagates to the caller.
pub struct NominatimClient {
    base_url: String,
}

impl NominatimClient {
    pub fn new() -> Self {
        Self {
            base_url: NOMINATIM_URL.to_string(),
        }
    }

    /// Points the client at a different provider instance
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, query: &str) -> Result<Place> {
        log::debug!("forward geocode {:?}", query);

        let body = HTTP_CLIENT
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let records: Vec<Place> = serde_json::from_str(&body)?;
        first_record(records, query)
    }

    async fn resolve_reverse(&self, position: LatLng) -> Result<Place> {
        log::debug!("reverse geocode {}, {}", position.lat, position.lng);

        let body = HTTP_CLIENT
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", position.lat.to_string()),
                ("lon", position.lng.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let place: Place = serde_json::from_str(&body)?;
        Ok(place)
    }
}

/// Picks the record a forward search resolves to: exactly the first entry
/// of the result list, or [`MapError::LocationNotFound`] when it is empty.
fn first_record(records: Vec<Place>, query: &str) -> Result<Place> {
    records
        .into_iter()
        .next()
        .ok_or_else(|| MapError::LocationNotFound(query.to_string()))
}
