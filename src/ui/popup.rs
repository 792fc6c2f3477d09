use crate::{
    core::{
        constants::POPUP_PIXEL_OFFSET,
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    geocode::place::Place,
};

/// Overlay that tracks a geographic coordinate on screen.
///
/// Anchored bottom-center with a fixed pixel offset so the box clears the
/// pin tip of the marker it is attached to. The offset is configuration,
/// never data-dependent.
#[derive(Debug, Clone)]
pub struct Popup {
    position: Option<LatLng>,
    content: String,
    visible: bool,
    offset: Point,
}

impl Popup {
    pub fn new() -> Self {
        let (dx, dy) = POPUP_PIXEL_OFFSET;
        Self {
            position: None,
            content: String::new(),
            visible: false,
            offset: Point::new(dx, dy),
        }
    }

    /// Moves the overlay anchor to a new geographic coordinate
    pub fn set_position(&mut self, position: LatLng) {
        self.position = Some(position);
    }

    pub fn position(&self) -> Option<LatLng> {
        self.position
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Screen position of the overlay for the given viewport, offset applied
    pub fn screen_anchor(&self, viewport: &Viewport) -> Option<Point> {
        self.position
            .map(|position| viewport.lat_lng_to_pixel(&position).add(&self.offset))
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for Popup {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the success template for a resolved place.
///
/// Every interpolated provider field passes through [`escape_html`] first;
/// the display surface never sees raw provider text.
pub fn place_content(place: &Place) -> String {
    let name = escape_html(&place.display_name);
    let kind = escape_html(place.kind_label());
    let lat = escape_html(&place.lat);
    let lon = escape_html(&place.lon);

    format!(
        r#"<div class="popup-content">
    <h3><span class="material-icons">location_city</span> {name}</h3>
    <div class="popup-details">
        <div class="icon-label">
            <span class="material-icons">place</span>
            <p>{kind}</p>
        </div>
        <ul>
            <li><span class="material-icons">location_on</span> {name}</li>
            <li><span class="material-icons">place</span> Lat: {lat}, Lon: {lon}</li>
        </ul>
    </div>
</div>"#
    )
}

/// Renders the generic failure template
pub fn error_content() -> String {
    r#"<div class="popup-content">
    <h3><span class="material-icons">error</span> Error</h3>
    <div class="popup-details">
        <div class="icon-label">
            <span class="material-icons">error</span>
            <p>Failed to fetch location details</p>
        </div>
    </div>
</div>"#
        .to_string()
}

/// Minimal HTML escaping for text interpolated into popup markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
