use std::sync::mpsc::{self, Receiver};
use std::thread;

use thiserror::Error;

use super::loader::parse_geojson;
use super::model::SeismicEvent;

pub type FetchResult = std::result::Result<Vec<SeismicEvent>, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Feed returned HTTP status {status}")]
    Status { status: u16 },

    #[error("Invalid feed: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Feed selection
// ---------------------------------------------------------------------------

/// Time window of the USGS "all magnitudes" summary feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPeriod {
    PastHour,
    PastDay,
    PastWeek,
    PastMonth,
}

impl FeedPeriod {
    pub const ALL: [FeedPeriod; 4] = [
        FeedPeriod::PastHour,
        FeedPeriod::PastDay,
        FeedPeriod::PastWeek,
        FeedPeriod::PastMonth,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            FeedPeriod::PastHour => "all_hour.geojson",
            FeedPeriod::PastDay => "all_day.geojson",
            FeedPeriod::PastWeek => "all_week.geojson",
            FeedPeriod::PastMonth => "all_month.geojson",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedPeriod::PastHour => "Past hour",
            FeedPeriod::PastDay => "Past day",
            FeedPeriod::PastWeek => "Past week",
            FeedPeriod::PastMonth => "Past month",
        }
    }

    /// Parse the short form used in configuration (`hour`, `day`, ...).
    pub fn from_short(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Some(FeedPeriod::PastHour),
            "day" => Some(FeedPeriod::PastDay),
            "week" => Some(FeedPeriod::PastWeek),
            "month" => Some(FeedPeriod::PastMonth),
            _ => None,
        }
    }
}

pub fn feed_url(base_url: &str, period: FeedPeriod) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), period.file_name())
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Download and parse one feed. Single attempt, no retry.
pub fn fetch_feed(url: &str) -> FetchResult {
    log::info!("Fetching {url}");
    let resp = reqwest::blocking::get(url)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let body = resp.text()?;
    parse_geojson(&body).map_err(|e| FetchError::Parse(format!("{e:#}")))
}

/// Run [`fetch_feed`] on a background thread; the result arrives on the
/// returned channel exactly once.
pub fn spawn_fetch(url: String) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = fetch_feed(&url);
        // Receiver gone means the UI moved on to another fetch.
        let _ = tx.send(result);
    });
    rx
}
