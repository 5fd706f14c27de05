use std::fmt;

// ---------------------------------------------------------------------------
// SeismicEvent – one record of the feed
// ---------------------------------------------------------------------------

/// A single reported earthquake.
///
/// The feed carries coordinates as `[longitude, latitude, depth]`; the loader
/// unpacks them into named fields so nothing downstream depends on that order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicEvent {
    /// Feed identifier, unique within one fetch.
    pub id: String,
    pub magnitude: f64,
    /// Human-readable location label, e.g. "10 km SW of Tokyo, Japan".
    pub place: Option<String>,
    /// Origin time in epoch milliseconds.
    pub time_millis: i64,
    pub longitude: f64,
    pub latitude: f64,
    pub depth_km: f64,
    /// Link to the event detail page, if the feed provides one.
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// FilterCriteria – what the user asked for
// ---------------------------------------------------------------------------

/// User-controlled filter settings, passed by value on every recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_magnitude: f64,
    /// Case-insensitive substring matched against `SeismicEvent::place`.
    pub location_query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_magnitude: 0.0,
            location_query: String::new(),
        }
    }
}

impl FilterCriteria {
    /// The location query with surrounding whitespace removed, or `None` if blank.
    pub fn active_query(&self) -> Option<&str> {
        let q = self.location_query.trim();
        (!q.is_empty()).then_some(q)
    }
}

// ---------------------------------------------------------------------------
// HistogramBin
// ---------------------------------------------------------------------------

/// One magnitude range of the histogram with its event count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub label: String,
    pub lower_bound: f64,
    /// `f64::INFINITY` for the open-ended top bin.
    pub upper_bound: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn new(label: &str, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            label: label.to_string(),
            lower_bound,
            upper_bound,
            count: 0,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, magnitude: f64) -> bool {
        magnitude >= self.lower_bound && magnitude <= self.upper_bound
    }
}

// ---------------------------------------------------------------------------
// MapFocus
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.latitude, self.longitude)
    }
}

/// Where the map should look, plus an optional "no results" message.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFocus {
    pub center: GeoPoint,
    pub zoom_level: u8,
    /// Present only when a location search matched zero events.
    pub diagnostic: Option<String>,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            center: super::focus::DEFAULT_CENTER,
            zoom_level: super::focus::DEFAULT_ZOOM,
            diagnostic: None,
        }
    }
}

// ---------------------------------------------------------------------------
// FilterResult – everything the presentation layer needs
// ---------------------------------------------------------------------------

/// Output of one pipeline run. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterResult {
    pub filtered_events: Vec<SeismicEvent>,
    pub histogram: Vec<HistogramBin>,
    pub focus: MapFocus,
}
