use crate::core::{
    constants::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_ICON_URL},
    geo::{LatLng, Point},
    viewport::Viewport,
};

/// Stable handle for a placed marker.
///
/// Assigned at creation time so associations key on an explicit value
/// instead of object identity, which does not survive reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Visual style of a marker icon
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub icon_url: String,
    /// Icon footprint in screen pixels
    pub icon_size: (f64, f64),
    /// Hot-spot inside the icon as a fraction of its size
    pub icon_anchor: (f64, f64),
}

impl Default for MarkerStyle {
    /// The fixed red pushpin, anchored bottom-center so the pin tip sits on
    /// the marker coordinate.
    fn default() -> Self {
        Self {
            icon_url: MARKER_ICON_URL.to_string(),
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
        }
    }
}

/// A point feature placed on the map
#[derive(Debug, Clone)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    style: MarkerStyle,
}

impl Marker {
    /// Pure construction; nothing is attached to a map here
    pub fn new(id: MarkerId, position: LatLng) -> Self {
        Self {
            id,
            position,
            style: MarkerStyle::default(),
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Screen-space bounding box of the icon for the given viewport
    fn screen_bounds(&self, viewport: &Viewport) -> (Point, Point) {
        let anchor = viewport.lat_lng_to_pixel(&self.position);
        let (width, height) = self.style.icon_size;
        let (ax, ay) = self.style.icon_anchor;
        let min = Point::new(anchor.x - width * ax, anchor.y - height * ay);
        (min, Point::new(min.x + width, min.y + height))
    }

    /// Whether the pixel falls on the rendered icon
    pub fn hit_test(&self, viewport: &Viewport, pixel: &Point) -> bool {
        let (min, max) = self.screen_bounds(viewport);
        pixel.x >= min.x && pixel.x <= max.x && pixel.y >= min.y && pixel.y <= max.y
    }
}

/// Vector layer holding point markers.
///
/// The sessions put one marker per layer, mirroring the one-layer-per-city
/// structure of the map surface.
pub struct MarkerLayer {
    id: String,
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markers: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id() == id)
    }

    /// Hit-tests the pixel against the layer's markers, last added first
    pub fn hit_test(&self, viewport: &Viewport, pixel: &Point) -> Option<MarkerId> {
        self.markers
            .iter()
            .rev()
            .find(|marker| marker.hit_test(viewport, pixel))
            .map(|marker| marker.id())
    }
}
