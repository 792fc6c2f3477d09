//! # citymap
//!
//! A small, Rust-native map engine for placing city markers on an
//! interactive surface and answering clicks with geocoding-backed popups.
//!
//! The crate wires three pieces together: a Nominatim geocoding client that
//! resolves free-text place names to coordinates, a marker layer stack with
//! pixel-level hit testing, and session orchestrators that correlate a
//! clicked feature back to the place metadata it was created from.

pub mod core;
pub mod geocode;
pub mod layers;
pub mod prelude;
pub mod session;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    map::Map,
    viewport::Viewport,
};

pub use crate::geocode::{
    client::{Geocoder, NominatimClient},
    place::Place,
};

pub use crate::layers::marker::{Marker, MarkerId, MarkerLayer, MarkerStyle};

pub use crate::session::{
    multi::MultiCityMapSession, single::CityMapSession, CityMarker, MapCursor, SessionState,
};

pub use crate::ui::popup::Popup;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
