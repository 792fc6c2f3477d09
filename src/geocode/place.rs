use crate::{core::geo::LatLng, MapError, Result};
use serde::{Deserialize, Serialize};

/// A single geocoding result in the provider's wire shape.
///
/// Latitude and longitude arrive as text fields and stay that way at the
/// boundary; callers parse them on demand via [`Place::coordinates`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Source-assigned identifier
    pub place_id: u64,
    /// Human-readable place description
    pub display_name: String,
    /// Provider classification, e.g. "city" or "administrative"
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lat: String,
    pub lon: String,
}

impl Place {
    /// Parses the textual coordinate fields into a geographic coordinate
    pub fn coordinates(&self) -> Result<LatLng> {
        let lat: f64 = self.lat.parse().map_err(|_| {
            MapError::InvalidCoordinates(format!("unparseable latitude {:?}", self.lat))
        })?;
        let lon: f64 = self.lon.parse().map_err(|_| {
            MapError::InvalidCoordinates(format!("unparseable longitude {:?}", self.lon))
        })?;
        Ok(LatLng::new(lat, lon))
    }

    /// Classification label shown in popups when the provider omits one
    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().unwrap_or("Location")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"[{
        "place_id": 235729549,
        "licence": "Data © OpenStreetMap contributors",
        "osm_type": "relation",
        "lat": "25.6093239",
        "lon": "85.1235252",
        "class": "boundary",
        "type": "administrative",
        "display_name": "Patna, Patna Rural, Patna District, Bihar, India"
    }]"#;

    #[test]
    fn test_parse_search_response() {
        let records: Vec<Place> = serde_json::from_str(SEARCH_RESPONSE).unwrap();
        assert_eq!(records.len(), 1);

        let place = &records[0];
        assert_eq!(place.place_id, 235729549);
        assert_eq!(place.kind.as_deref(), Some("administrative"));
        assert!(place.display_name.starts_with("Patna"));
    }

    #[test]
    fn test_coordinates_parse() {
        let records: Vec<Place> = serde_json::from_str(SEARCH_RESPONSE).unwrap();
        let coords = records[0].coordinates().unwrap();
        assert!((coords.lat - 25.6093239).abs() < 1e-9);
        assert!((coords.lng - 85.1235252).abs() < 1e-9);
    }

    #[test]
    fn test_coordinates_reject_garbage() {
        let place = Place {
            place_id: 1,
            display_name: "Nowhere".to_string(),
            kind: None,
            lat: "not-a-number".to_string(),
            lon: "0.0".to_string(),
        };
        assert!(matches!(
            place.coordinates(),
            Err(MapError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_kind_label_fallback() {
        let place = Place {
            place_id: 1,
            display_name: "Somewhere".to_string(),
            kind: None,
            lat: "0.0".to_string(),
            lon: "0.0".to_string(),
        };
        assert_eq!(place.kind_label(), "Location");
    }
}
