//! Prelude module for common citymap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use citymap::prelude::*;`

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

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
