//! Session scenarios driven by a scripted geocoder, covering the multi-city
//! partial-success policy, click dispatch, and the single-city flow.

use async_trait::async_trait;
use citymap::{
    CityMapSession, Geocoder, LatLng, MapCursor, MapError, MultiCityMapSession, Place, Point,
    Result, SessionState,
};
use std::sync::{Arc, Mutex};

/// Geocoder backed by a fixed table; records every query it was asked.
struct ScriptedGeocoder {
    places: Vec<Place>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    fn with_cities() -> Self {
        Self {
            places: vec![
                city(101, "Delhi, India", 28.6139, 77.2090),
                city(102, "Patna, India", 25.5941, 85.1376),
                city(103, "Paris, France", 48.8566, 2.3522),
                city(104, "California, USA", 36.7783, -119.4179),
                city(105, "Bangalore, India", 12.9716, 77.5946),
            ],
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn city(id: u64, name: &str, lat: f64, lon: f64) -> Place {
    Place {
        place_id: id,
        display_name: name.to_string(),
        kind: Some("city".to_string()),
        lat: lat.to_string(),
        lon: lon.to_string(),
    }
}

#[async_trait]
impl Geocoder for ScriptedGeocoder {
    async fn resolve(&self, query: &str) -> Result<Place> {
        self.calls.lock().unwrap().push(query.to_string());
        self.places
            .iter()
            .find(|place| place.display_name == query)
            .cloned()
            .ok_or_else(|| MapError::LocationNotFound(query.to_string()))
    }

    async fn resolve_reverse(&self, position: LatLng) -> Result<Place> {
        Err(MapError::LocationNotFound(format!(
            "{}, {}",
            position.lat, position.lng
        )))
    }
}

fn queries(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

const FIVE_CITIES: [&str; 5] = [
    "Delhi, India",
    "Patna, India",
    "Paris, France",
    "California, USA",
    "Bangalore, India",
];

const SURFACE: Point = Point { x: 800.0, y: 600.0 };

async fn five_city_session(geocoder: Arc<ScriptedGeocoder>) -> MultiCityMapSession {
    let mut session = MultiCityMapSession::new(geocoder, SURFACE);
    session.initialize(&queries(&FIVE_CITIES)).await;
    session
}

/// Screen pixel just inside the pin box of the given marker
fn pixel_on_marker(session: &MultiCityMapSession, id: citymap::MarkerId) -> Point {
    let map = session.map().unwrap();
    let position = map.marker_position(id).unwrap();
    let anchor = map.viewport.lat_lng_to_pixel(&position);
    Point::new(anchor.x, anchor.y - 1.0)
}

#[tokio::test]
async fn five_cities_produce_five_markers_and_associations() {
    let session = five_city_session(Arc::new(ScriptedGeocoder::with_cities())).await;

    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.association_count(), 5);

    let map = session.map().unwrap();
    assert_eq!(map.layer_count(), 5);

    // One single-marker layer per place, named after its marker id.
    for (index, layer) in map.layers().iter().enumerate() {
        assert_eq!(layer.id(), format!("marker-{}", index));
        assert_eq!(layer.markers().len(), 1);
        assert_eq!(layer.markers()[0].id(), citymap::MarkerId(index as u64));
    }

    // View seeded from the first place at continental zoom.
    assert_eq!(map.viewport.zoom, 4.0);
    assert!((map.viewport.center.lat - 28.6139).abs() < 1e-9);
    assert!((map.viewport.center.lng - 77.2090).abs() < 1e-9);
}

#[tokio::test]
async fn every_association_has_a_feature_on_the_map() {
    let session = five_city_session(Arc::new(ScriptedGeocoder::with_cities())).await;
    let map = session.map().unwrap();

    for (id, data) in session.associations() {
        let position = map.marker_position(id).expect("association without feature");
        let resolved = data.place.coordinates().unwrap();
        assert_eq!(position, resolved);
    }
}

#[tokio::test]
async fn first_lookup_is_not_repeated() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let _session = five_city_session(geocoder.clone()).await;

    let calls = geocoder.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(
        calls.iter().filter(|q| *q == "Delhi, India").count(),
        1,
        "first place resolved once, reused for both view center and marker"
    );
}

#[tokio::test]
async fn failing_place_is_skipped_without_aborting() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = MultiCityMapSession::new(geocoder, SURFACE);
    session
        .initialize(&queries(&[
            "Delhi, India",
            "Atlantis, Nowhere",
            "Paris, France",
            "Bangalore, India",
        ]))
        .await;

    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.association_count(), 3);
    assert_eq!(session.map().unwrap().layer_count(), 3);
}

#[tokio::test]
async fn failing_first_place_aborts_initialization() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = MultiCityMapSession::new(geocoder.clone(), SURFACE);
    session
        .initialize(&queries(&["Atlantis, Nowhere", "Paris, France"]))
        .await;

    // Caught and logged; the session stays partially constructed.
    assert_eq!(session.state(), SessionState::Resolving);
    assert_eq!(session.association_count(), 0);
    assert!(session.map().is_none());
    assert_eq!(geocoder.calls().len(), 1);
}

#[tokio::test]
async fn empty_place_list_leaves_session_unbuilt() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = MultiCityMapSession::new(geocoder, SURFACE);
    session.initialize(&[]).await;

    assert_eq!(session.state(), SessionState::Resolving);
    assert!(session.map().is_none());
}

#[tokio::test]
async fn click_on_marker_shows_its_own_record() {
    let mut session = five_city_session(Arc::new(ScriptedGeocoder::with_cities())).await;

    // Marker ids are assigned in list order; Patna is the second place.
    let patna = citymap::MarkerId(1);
    let pixel = pixel_on_marker(&session, patna);
    session.handle_click(&pixel);

    let popup = session.popup().unwrap();
    assert!(popup.is_visible());
    assert!(popup.content().contains("Patna, India"));
    assert_eq!(
        popup.position(),
        session.map().unwrap().marker_position(patna)
    );
}

#[tokio::test]
async fn click_on_empty_space_hides_popup() {
    let mut session = five_city_session(Arc::new(ScriptedGeocoder::with_cities())).await;

    let pixel = pixel_on_marker(&session, citymap::MarkerId(0));
    session.handle_click(&pixel);
    assert!(session.popup().unwrap().is_visible());

    session.handle_click(&Point::new(1.0, 1.0));
    assert!(!session.popup().unwrap().is_visible());
}

#[tokio::test]
async fn pointer_move_toggles_cursor() {
    let session = five_city_session(Arc::new(ScriptedGeocoder::with_cities())).await;

    let pixel = pixel_on_marker(&session, citymap::MarkerId(0));
    assert_eq!(session.handle_pointer_move(&pixel), MapCursor::Pointer);
    assert_eq!(
        session.handle_pointer_move(&Point::new(1.0, 1.0)),
        MapCursor::Default
    );
}

#[tokio::test]
async fn click_before_initialization_is_a_no_op() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = MultiCityMapSession::new(geocoder, SURFACE);

    session.handle_click(&Point::new(400.0, 300.0));
    assert!(session.popup().is_none());
    assert_eq!(
        session.handle_pointer_move(&Point::new(400.0, 300.0)),
        MapCursor::Default
    );
}

#[tokio::test]
async fn single_city_session_resolves_and_places_one_marker() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = CityMapSession::new(geocoder.clone(), SURFACE);
    session.initialize("Patna, India").await;

    assert_eq!(session.state(), SessionState::Ready);
    let map = session.map().unwrap();
    assert_eq!(map.layer_count(), 1);
    assert_eq!(map.viewport.zoom, 13.0);
    assert_eq!(session.marker_record().unwrap().query, "Patna, India");
}

#[tokio::test]
async fn single_city_click_uses_stored_record() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = CityMapSession::new(geocoder.clone(), SURFACE);
    session.initialize("Patna, India").await;

    let map = session.map().unwrap();
    let position = map.marker_position(citymap::MarkerId(0)).unwrap();
    let anchor = map.viewport.lat_lng_to_pixel(&position);
    let pixel = Point::new(anchor.x, anchor.y - 1.0);

    session.handle_click(&pixel);

    let popup = session.popup().unwrap();
    assert!(popup.is_visible());
    assert!(popup.content().contains("Patna, India"));

    // One lookup at initialization, none on click.
    assert_eq!(geocoder.calls().len(), 1);
}

#[tokio::test]
async fn static_variant_skips_geocoding() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = CityMapSession::new(geocoder.clone(), SURFACE);
    session.initialize_static(LatLng::new(25.5941, 85.1376), "Welcome to Patna");

    assert_eq!(session.state(), SessionState::Ready);
    assert!(geocoder.calls().is_empty());

    let map = session.map().unwrap();
    let position = map.marker_position(citymap::MarkerId(0)).unwrap();
    let anchor = map.viewport.lat_lng_to_pixel(&position);
    session.handle_click(&Point::new(anchor.x, anchor.y - 1.0));

    let popup = session.popup().unwrap();
    assert!(popup.is_visible());
    assert!(popup.content().contains("Welcome to Patna"));
}

#[tokio::test]
async fn single_city_failure_is_swallowed() {
    let geocoder = Arc::new(ScriptedGeocoder::with_cities());
    let mut session = CityMapSession::new(geocoder, SURFACE);
    session.initialize("Atlantis, Nowhere").await;

    assert_eq!(session.state(), SessionState::Resolving);
    assert!(session.map().is_none());
    assert!(session.popup().is_none());
}
