/// Data layer: event types, feed loading, and the filter pipeline.
///
/// Architecture:
/// ```text
///  USGS feed (.geojson over HTTP) / local .geojson / .csv
///        │
///        ▼
///   ┌──────────────────┐
///   │  fetch / loader   │  HTTP + parse → Vec<SeismicEvent>
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  magnitude + location predicates → filtered events
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌─────────┐
///   │ histogram │  │  focus   │  magnitude bins / map center + zoom
///   └───────────┘  └─────────┘
///        │              │
///        └──────┬───────┘
///               ▼
///        ┌────────────┐
///        │  pipeline   │  → FilterResult
///        └────────────┘
/// ```

pub mod fetch;
pub mod filter;
pub mod focus;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod pipeline;
