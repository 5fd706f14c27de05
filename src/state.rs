use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::config::Config;
use crate::data::fetch::{FeedPeriod, FetchResult, feed_url, spawn_fetch};
use crate::data::model::{FilterCriteria, FilterResult, SeismicEvent};
use crate::data::pipeline::compute_filter_result;

/// Message shown for any failed download; details go to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch earthquake data. Please try again later.";

// ---------------------------------------------------------------------------
// Load status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Events from the last successful fetch or file load.
    pub events: Vec<SeismicEvent>,

    /// Criteria the current `result` was computed with.
    pub criteria: FilterCriteria,

    /// Text box contents; becomes `criteria.location_query` on Search.
    pub location_input: String,

    /// Output of the last pipeline run.
    pub result: FilterResult,

    pub load_status: LoadStatus,

    /// Feed selected in the top bar.
    pub feed_period: FeedPeriod,

    /// Channel of the in-flight fetch, if any.
    pending: Option<Receiver<FetchResult>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let criteria = FilterCriteria {
            min_magnitude: config.min_magnitude,
            ..Default::default()
        };
        Self {
            feed_period: config.feed_period,
            config,
            events: Vec::new(),
            criteria,
            location_input: String::new(),
            result: FilterResult::default(),
            load_status: LoadStatus::Idle,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Loading
    }

    /// User-facing error text, if the last load failed.
    pub fn status_message(&self) -> Option<&str> {
        match &self.load_status {
            LoadStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    // -- Loading ------------------------------------------------------------

    /// Kick off a background download of the selected feed. A fetch already
    /// in flight is abandoned.
    pub fn start_fetch(&mut self) {
        let url = feed_url(&self.config.feed_base_url, self.feed_period);
        self.pending = Some(spawn_fetch(url));
        self.load_status = LoadStatus::Loading;
    }

    /// Check for a finished fetch. Returns `true` if a result was applied.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.fail("fetch thread exited without a result");
                return true;
            }
        };
        self.pending = None;

        match outcome {
            Ok(events) => {
                log::info!("Fetched {} events ({})", events.len(), self.feed_period.label());
                self.set_events(events);
            }
            Err(e) => self.fail(&e.to_string()),
        }
        true
    }

    /// Load events from a local GeoJSON / CSV file. A fetch in flight is
    /// abandoned.
    pub fn load_from_path(&mut self, path: &Path) {
        self.pending = None;
        self.load_status = LoadStatus::Loading;
        match crate::data::loader::load_file(path) {
            Ok(events) => {
                log::info!("Loaded {} events from {}", events.len(), path.display());
                self.set_events(events);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.load_status = LoadStatus::Error(format!("Error: {e:#}"));
            }
        }
    }

    fn fail(&mut self, detail: &str) {
        log::error!("Failed to fetch earthquake feed: {detail}");
        self.load_status = LoadStatus::Error(FETCH_FAILED_MESSAGE.to_string());
    }

    /// Ingest a new set of events and rerun the filters on it.
    pub fn set_events(&mut self, events: Vec<SeismicEvent>) {
        self.events = events;
        self.load_status = LoadStatus::Loaded;
        self.recompute();
    }

    // -- Filter changes -----------------------------------------------------

    pub fn set_min_magnitude(&mut self, min_magnitude: f64) {
        self.criteria.min_magnitude = min_magnitude;
        self.recompute();
    }

    /// Commit the text box as the location query.
    pub fn apply_search(&mut self) {
        self.criteria.location_query = self.location_input.trim().to_string();
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.location_input.clear();
        self.criteria.location_query.clear();
        self.recompute();
    }

    /// Rerun the pipeline, threading the current focus through as "previous".
    pub fn recompute(&mut self) {
        let mut previous = self.result.focus.clone();
        previous.diagnostic = None;
        self.result = compute_filter_result(&self.events, &self.criteria, &previous);
    }
}
