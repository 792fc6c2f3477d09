use crate::{
    core::{
        constants::CONTINENTAL_ZOOM,
        geo::Point,
        map::Map,
    },
    geocode::{client::Geocoder, place::Place},
    layers::marker::{Marker, MarkerId, MarkerLayer},
    prelude::HashMap,
    session::{CityMarker, MapCursor, SessionState},
    ui::popup::{place_content, Popup},
    MapError, Result,
};
use std::sync::Arc;

/// Multi-city session: one marker and one association entry per
/// successfully resolved place.
///
/// Partial success is the normal outcome: a place that fails to resolve is
/// logged and skipped, the rest of the list still gets its markers.
pub struct MultiCityMapSession {
    geocoder: Arc<dyn Geocoder>,
    surface_size: Point,
    map: Option<Map>,
    popup: Option<Popup>,
    markers: HashMap<MarkerId, CityMarker>,
    next_marker_id: u64,
    state: SessionState,
}

impl MultiCityMapSession {
    pub fn new(geocoder: Arc<dyn Geocoder>, surface_size: Point) -> Self {
        Self {
            geocoder,
            surface_size,
            map: None,
            popup: None,
            markers: HashMap::default(),
            next_marker_id: 0,
            state: SessionState::Uninitialized,
        }
    }

    /// Resolves every place in order and builds the map surface.
    ///
    /// Only a failure of the first lookup aborts (there is no view center
    /// without it); that failure is caught here and only logged.
    pub async fn initialize(&mut self, queries: &[String]) {
        self.state = SessionState::Resolving;
        if let Err(e) = self.try_initialize(queries).await {
            log::error!("error initializing multi-city map: {}", e);
        }
    }

    async fn try_initialize(&mut self, queries: &[String]) -> Result<()> {
        let Some(first_query) = queries.first() else {
            return Err(MapError::Layer("no places to display".to_string()));
        };

        let first = self.geocoder.resolve(first_query).await?;
        let center = first.coordinates()?;

        self.map = Some(Map::new(center, CONTINENTAL_ZOOM, self.surface_size));
        self.popup = Some(Popup::new());

        // The first record seeds the view center and is reused for its own
        // marker; the remaining places are resolved strictly in order.
        self.place_marker(first_query, first);
        for query in &queries[1..] {
            match self.geocoder.resolve(query).await {
                Ok(place) => self.place_marker(query, place),
                Err(e) => log::warn!("skipping marker for {:?}: {}", query, e),
            }
        }

        self.state = SessionState::Ready;
        Ok(())
    }

    /// Creates the marker, its own layer, and the association entry together
    fn place_marker(&mut self, query: &str, place: Place) {
        let Some(map) = self.map.as_mut() else {
            return;
        };
        let position = match place.coordinates() {
            Ok(position) => position,
            Err(e) => {
                log::warn!("skipping marker for {:?}: {}", query, e);
                return;
            }
        };

        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;

        let mut layer = MarkerLayer::new(format!("marker-{}", id.0));
        layer.add_marker(Marker::new(id, position));
        map.add_layer(layer);

        self.markers.insert(
            id,
            CityMarker {
                query: query.to_string(),
                place,
            },
        );
    }

    /// Click dispatch: a hit looks up the clicked marker's own record and
    /// renders it; a miss (or a feature with no recorded association) hides
    /// the popup.
    pub fn handle_click(&mut self, pixel: &Point) {
        let (Some(map), Some(popup)) = (self.map.as_ref(), self.popup.as_mut()) else {
            return;
        };

        match map.feature_at_pixel(pixel) {
            Some(id) => match self.markers.get(&id) {
                Some(data) => {
                    if let Some(position) = map.marker_position(id) {
                        popup.set_position(position);
                    }
                    popup.set_content(place_content(&data.place));
                    popup.show();
                }
                None => popup.hide(),
            },
            None => popup.hide(),
        }
    }

    /// Cosmetic cursor toggle from the hit-test result; no state retained
    pub fn handle_pointer_move(&self, pixel: &Point) -> MapCursor {
        match &self.map {
            Some(map) if map.has_feature_at_pixel(pixel) => MapCursor::Pointer,
            _ => MapCursor::Default,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn association_count(&self) -> usize {
        self.markers.len()
    }

    pub fn association(&self, id: MarkerId) -> Option<&CityMarker> {
        self.markers.get(&id)
    }

    /// Iterates the marker associations in no particular order
    pub fn associations(&self) -> impl Iterator<Item = (MarkerId, &CityMarker)> {
        self.markers.iter().map(|(id, data)| (*id, data))
    }
}
