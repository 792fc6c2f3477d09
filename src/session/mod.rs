//! Map sessions: orchestration of geocoding, marker placement, and click
//! dispatch for the single-city and multi-city flows.

pub mod multi;
pub mod single;

use crate::geocode::place::Place;

/// Lifecycle of a map session.
///
/// `Ready` is terminal: sessions initialize once and have no teardown or
/// reset path. A failed initialization leaves the session in `Resolving`
/// with whatever was constructed before the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Resolving,
    Ready,
}

/// Metadata recorded per placed marker: the query that produced it and the
/// geocoding record it resolved to.
///
/// Entries are created together with their marker and live for the whole
/// session; there is no update or removal path for either.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    pub query: String,
    pub place: Place,
}

/// Cursor shape requested by pointer-move hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCursor {
    #[default]
    Default,
    Pointer,
}
