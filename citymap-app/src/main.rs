use citymap::{MarkerId, MultiCityMapSession, NominatimClient, Point};
use std::sync::Arc;

/// Headless runner: initializes one multi-city session over the demo place
/// list and pokes it with a couple of synthetic pointer events.
#[tokio::main]
async fn main() {
    env_logger::init();

    let cities: Vec<String> = [
        "Delhi, India",
        "Patna, India",
        "Paris, France",
        "California, USA",
        "Bangalore, India",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();

    let geocoder = Arc::new(NominatimClient::new());
    let mut session = MultiCityMapSession::new(geocoder, Point::new(800.0, 600.0));
    session.initialize(&cities).await;

    log::info!("{} markers placed", session.association_count());

    // Click the first marker, then empty space, logging the popup after each.
    let target = session.map().and_then(|map| {
        map.marker_position(MarkerId(0))
            .map(|position| map.viewport.lat_lng_to_pixel(&position))
    });

    if let Some(anchor) = target {
        session.handle_click(&Point::new(anchor.x, anchor.y - 1.0));
        if let Some(popup) = session.popup() {
            log::info!(
                "popup after marker click: visible={} content:\n{}",
                popup.is_visible(),
                popup.content()
            );
        }

        session.handle_click(&Point::new(1.0, 1.0));
        if let Some(popup) = session.popup() {
            log::info!("popup after empty click: visible={}", popup.is_visible());
        }
    }
}
