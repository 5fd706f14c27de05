use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::SeismicEvent;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load earthquake events from a local file.  Dispatch by extension.
///
/// Supported formats:
/// * `.geojson` / `.json` – USGS GeoJSON summary feed (a saved download)
/// * `.csv`               – USGS CSV feed
pub fn load_file(path: &Path) -> Result<Vec<SeismicEvent>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "geojson" | "json" => {
            let text = std::fs::read_to_string(path).context("reading GeoJSON file")?;
            parse_geojson(&text)
        }
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// GeoJSON
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Feature {
    id: Option<String>,
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude, depth_km]`
    coordinates: Vec<f64>,
}

/// Parse a GeoJSON FeatureCollection as served by the USGS summary feeds:
///
/// ```json
/// {
///   "type": "FeatureCollection",
///   "features": [
///     {
///       "id": "us7000abcd",
///       "properties": { "mag": 4.6, "place": "Tokyo, Japan", "time": 1700000000000 },
///       "geometry": { "coordinates": [139.7, 35.6, 30.0] }
///     }
///   ]
/// }
/// ```
///
/// Features without a magnitude or without longitude/latitude are skipped
/// with a warning rather than failing the whole document.
pub fn parse_geojson(text: &str) -> Result<Vec<SeismicEvent>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing GeoJSON")?;

    let features = root
        .get("features")
        .and_then(|f| f.as_array())
        .context("Expected a FeatureCollection with a 'features' array")?;

    let mut events = Vec::with_capacity(features.len());
    let mut skipped = 0usize;

    for (i, raw) in features.iter().enumerate() {
        let feature = match Feature::deserialize(raw) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Feature {i}: unreadable ({e}), skipping");
                skipped += 1;
                continue;
            }
        };
        match feature_to_event(i, feature) {
            Some(ev) => events.push(ev),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed feature(s) out of {}", features.len());
    }
    Ok(events)
}

fn feature_to_event(i: usize, feature: Feature) -> Option<SeismicEvent> {
    let id = feature.id.unwrap_or_else(|| format!("feature-{i}"));

    let Some(magnitude) = feature.properties.mag else {
        log::warn!("Feature {id}: missing magnitude, skipping");
        return None;
    };

    let coords = feature.geometry.map(|g| g.coordinates).unwrap_or_default();
    let (longitude, latitude, depth_km) = match coords.as_slice() {
        [lon, lat, depth, ..] => (*lon, *lat, *depth),
        [lon, lat] => (*lon, *lat, 0.0),
        _ => {
            log::warn!("Feature {id}: missing coordinates, skipping");
            return None;
        }
    };

    Some(SeismicEvent {
        id,
        magnitude,
        place: feature.properties.place,
        time_millis: feature.properties.time.unwrap_or_default(),
        longitude,
        latitude,
        depth_km,
        url: feature.properties.url,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// USGS CSV layout: header row, one event per line. Only `time`, `latitude`,
/// `longitude`, `depth`, `mag`, `id` and `place` are read; `time` is RFC 3339.
fn load_csv(path: &Path) -> Result<Vec<SeismicEvent>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<SeismicEvent>> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let time_idx = column("time")?;
    let lat_idx = column("latitude")?;
    let lon_idx = column("longitude")?;
    let depth_idx = column("depth")?;
    let mag_idx = column("mag")?;
    let id_idx = column("id")?;
    let place_idx = headers.iter().position(|h| h == "place");

    let mut events = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("CSV row {row_no}: unreadable ({e}), skipping");
                continue;
            }
        };
        let number = |idx: usize| record.get(idx).and_then(|s| s.trim().parse::<f64>().ok());

        let (Some(magnitude), Some(latitude), Some(longitude)) =
            (number(mag_idx), number(lat_idx), number(lon_idx))
        else {
            log::warn!("CSV row {row_no}: missing magnitude or coordinates, skipping");
            continue;
        };

        let time_millis = record
            .get(time_idx)
            .and_then(|t| chrono::DateTime::parse_from_rfc3339(t.trim()).ok())
            .map(|t| t.timestamp_millis())
            .unwrap_or_default();

        let place = place_idx
            .and_then(|idx| record.get(idx))
            .filter(|p| !p.is_empty())
            .map(String::from);

        events.push(SeismicEvent {
            id: record.get(id_idx).unwrap_or_default().to_string(),
            magnitude,
            place,
            time_millis,
            longitude,
            latitude,
            depth_km: number(depth_idx).unwrap_or_default(),
            url: None,
        });
    }

    Ok(events)
}
