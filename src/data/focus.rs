use super::model::{FilterCriteria, GeoPoint, MapFocus, SeismicEvent};

/// World view shown when no location search is active.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(20.0, 0.0);
pub const DEFAULT_ZOOM: u8 = 2;

/// Zoom used when jumping to the first search hit.
pub const SEARCH_ZOOM: u8 = 5;

/// Decide where the map should look after a filter change.
///
/// * blank query → default world view, whatever `previous` was
/// * query with hits → first hit, zoomed in
/// * query without hits → `previous` center and zoom, plus a diagnostic
pub fn compute_focus(
    criteria: &FilterCriteria,
    filtered_events: &[SeismicEvent],
    previous: &MapFocus,
) -> MapFocus {
    let Some(query) = criteria.active_query() else {
        return MapFocus::default();
    };

    match filtered_events.first() {
        Some(first) => MapFocus {
            center: GeoPoint::new(first.latitude, first.longitude),
            zoom_level: SEARCH_ZOOM,
            diagnostic: None,
        },
        None => MapFocus {
            center: previous.center,
            zoom_level: previous.zoom_level,
            diagnostic: Some(no_match_message(query)),
        },
    }
}

fn no_match_message(query: &str) -> String {
    format!("No events found near '{query}'. Try a different location or broaden your search.")
}
