use crate::{
    core::{
        constants::CITY_ZOOM,
        geo::{LatLng, Point},
        map::Map,
    },
    geocode::client::Geocoder,
    layers::marker::{Marker, MarkerId, MarkerLayer},
    session::{CityMarker, MapCursor, SessionState},
    ui::popup::{error_content, escape_html, place_content, Popup},
    Result,
};
use std::sync::Arc;

/// What the popup shows when the session's marker is clicked
enum MarkerContent {
    /// A geocoding record resolved at initialization
    Resolved(CityMarker),
    /// Fixed text supplied up-front, no geocoding involved
    Static(String),
}

/// Single-city session: one resolved place, one marker, one popup.
///
/// The session owns its map, overlay, and marker record explicitly; handlers
/// borrow them through `&self`/`&mut self` rather than reaching for globals.
pub struct CityMapSession {
    geocoder: Arc<dyn Geocoder>,
    surface_size: Point,
    map: Option<Map>,
    popup: Option<Popup>,
    marker: Option<(MarkerId, MarkerContent)>,
    state: SessionState,
}

impl CityMapSession {
    pub fn new(geocoder: Arc<dyn Geocoder>, surface_size: Point) -> Self {
        Self {
            geocoder,
            surface_size,
            map: None,
            popup: None,
            marker: None,
            state: SessionState::Uninitialized,
        }
    }

    /// Resolves the place and builds the map surface around it.
    ///
    /// Any failure is caught here and only logged; the session is left
    /// partially constructed with no user-visible error state.
    pub async fn initialize(&mut self, query: &str) {
        self.state = SessionState::Resolving;
        if let Err(e) = self.try_initialize(query).await {
            log::error!("error initializing map for {:?}: {}", query, e);
        }
    }

    async fn try_initialize(&mut self, query: &str) -> Result<()> {
        let place = self.geocoder.resolve(query).await?;
        let position = place.coordinates()?;

        self.build_surface(
            position,
            MarkerContent::Resolved(CityMarker {
                query: query.to_string(),
                place,
            }),
        );
        Ok(())
    }

    /// Builds the session around a known coordinate with fixed popup text,
    /// skipping geocoding entirely.
    pub fn initialize_static(&mut self, position: LatLng, text: &str) {
        self.state = SessionState::Resolving;
        self.build_surface(position, MarkerContent::Static(escape_html(text)));
    }

    fn build_surface(&mut self, position: LatLng, content: MarkerContent) {
        let mut map = Map::new(position, CITY_ZOOM, self.surface_size);

        let id = MarkerId(0);
        let mut layer = MarkerLayer::new("marker-0");
        layer.add_marker(Marker::new(id, position));
        map.add_layer(layer);

        self.marker = Some((id, content));
        self.map = Some(map);
        self.popup = Some(Popup::new());
        self.state = SessionState::Ready;
    }

    /// Click dispatch: a hit positions the popup over the marker and renders
    /// the record stored at creation time; a miss hides the popup.
    ///
    /// Content always comes from the stored record. The session never
    /// re-queries the geocoder on click.
    pub fn handle_click(&mut self, pixel: &Point) {
        let (Some(map), Some(popup)) = (self.map.as_ref(), self.popup.as_mut()) else {
            return;
        };

        match map.feature_at_pixel(pixel) {
            Some(id) => {
                if let Some(position) = map.marker_position(id) {
                    popup.set_position(position);
                }
                let content = match &self.marker {
                    Some((marker_id, MarkerContent::Resolved(data))) if *marker_id == id => {
                        place_content(&data.place)
                    }
                    Some((marker_id, MarkerContent::Static(text))) if *marker_id == id => {
                        text.clone()
                    }
                    _ => error_content(),
                };
                popup.set_content(content);
                popup.show();
            }
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

    pub fn marker_record(&self) -> Option<&CityMarker> {
        match &self.marker {
            Some((_, MarkerContent::Resolved(data))) => Some(data),
            _ => None,
        }
    }
}
