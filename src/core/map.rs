use crate::{
    core::{
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    layers::marker::{MarkerId, MarkerLayer},
};

/// The map surface: a viewport plus an ordered stack of marker layers.
///
/// Layers are kept in insertion order; hit testing walks them from the top
/// of the stack down so the most recently added feature wins, matching the
/// first-hit dispatch of DOM map libraries.
pub struct Map {
    pub viewport: Viewport,
    layers: Vec<MarkerLayer>,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            viewport: Viewport::new(center, zoom, size),
            layers: Vec::new(),
        }
    }

    /// Re-centers and re-zooms the view
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
    }

    /// Adds a layer on top of the stack
    pub fn add_layer(&mut self, layer: MarkerLayer) {
        self.layers.push(layer);
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[MarkerLayer] {
        &self.layers
    }

    /// Hit-tests the pixel against all layers, topmost first
    pub fn feature_at_pixel(&self, pixel: &Point) -> Option<MarkerId> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.hit_test(&self.viewport, pixel))
    }

    /// Whether any feature sits under the pixel
    pub fn has_feature_at_pixel(&self, pixel: &Point) -> bool {
        self.feature_at_pixel(pixel).is_some()
    }

    /// Looks up the geographic position of a placed marker
    pub fn marker_position(&self, id: MarkerId) -> Option<LatLng> {
        self.layers
            .iter()
            .find_map(|layer| layer.marker(id))
            .map(|marker| marker.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::Marker;

    fn map_with_marker(position: LatLng) -> Map {
        let mut map = Map::new(position, 13.0, Point::new(800.0, 600.0));
        let mut layer = MarkerLayer::new("marker-0");
        layer.add_marker(Marker::new(MarkerId(0), position));
        map.add_layer(layer);
        map
    }

    #[test]
    fn test_feature_at_pixel_hits_marker() {
        let position = LatLng::new(25.5941, 85.1376);
        let map = map_with_marker(position);

        // The pin occupies the box directly above its anchor pixel.
        let anchor = map.viewport.lat_lng_to_pixel(&position);
        let inside = Point::new(anchor.x, anchor.y - 1.0);

        assert_eq!(map.feature_at_pixel(&inside), Some(MarkerId(0)));
        assert!(map.has_feature_at_pixel(&inside));
    }

    #[test]
    fn test_feature_at_pixel_misses_empty_space() {
        let map = map_with_marker(LatLng::new(25.5941, 85.1376));
        assert_eq!(map.feature_at_pixel(&Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_topmost_layer_wins() {
        let position = LatLng::new(25.5941, 85.1376);
        let mut map = map_with_marker(position);

        let mut top = MarkerLayer::new("marker-1");
        top.add_marker(Marker::new(MarkerId(1), position));
        map.add_layer(top);

        let anchor = map.viewport.lat_lng_to_pixel(&position);
        let inside = Point::new(anchor.x, anchor.y - 1.0);
        assert_eq!(map.feature_at_pixel(&inside), Some(MarkerId(1)));
    }

    #[test]
    fn test_marker_position_lookup() {
        let position = LatLng::new(25.5941, 85.1376);
        let map = map_with_marker(position);

        assert_eq!(map.marker_position(MarkerId(0)), Some(position));
        assert_eq!(map.marker_position(MarkerId(7)), None);
    }
}
