//! Engine-wide magic numbers, kept in one place so the view presets and
//! marker geometry are easy to tweak together.

/// Square tile size in pixels; the Web Mercator world is one tile at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Zoom preset for a single-city view.
pub const CITY_ZOOM: f64 = 13.0;

/// Zoom preset for a continental-scale multi-city view.
pub const CONTINENTAL_ZOOM: f64 = 4.0;

/// Lowest zoom level the viewport accepts.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom level the viewport accepts.
pub const MAX_ZOOM: f64 = 18.0;

/// Marker icon size in screen pixels.
pub const MARKER_ICON_SIZE: (f64, f64) = (32.0, 32.0);

/// Hot-spot inside the icon as a fraction of its size; (0.5, 1.0) puts the
/// pin tip at the marker coordinate.
pub const MARKER_ICON_ANCHOR: (f64, f64) = (0.5, 1.0);

/// Default pushpin icon shown for every marker.
pub const MARKER_ICON_URL: &str =
    "http://maps.gstatic.com/intl/de_de/mapfiles/ms/micons/red-pushpin.png";

/// Fixed pixel offset of the popup box relative to its geographic anchor,
/// so the box clears the pin tip. Not data-dependent.
pub const POPUP_PIXEL_OFFSET: (f64, f64) = (0.0, -10.0);

/// Base URL of the public geocoding provider.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
