use std::env;

use crate::data::fetch::FeedPeriod;

pub const DEFAULT_FEED_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the `all_<period>.geojson` feeds.
    pub feed_base_url: String,
    /// Feed fetched on startup.
    pub feed_period: FeedPeriod,
    /// Initial position of the magnitude slider.
    pub min_magnitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            feed_period: FeedPeriod::PastDay,
            min_magnitude: 0.0,
        }
    }
}

impl Config {
    /// Load configuration from the process environment:
    ///
    /// * `QUAKE_FEED_BASE_URL`
    /// * `QUAKE_FEED_PERIOD`   – `hour`, `day`, `week` or `month`
    /// * `QUAKE_MIN_MAGNITUDE`
    ///
    /// Unset or unparsable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let feed_base_url = lookup("QUAKE_FEED_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.feed_base_url);

        let feed_period = match lookup("QUAKE_FEED_PERIOD") {
            Some(raw) => FeedPeriod::from_short(&raw).unwrap_or_else(|| {
                log::warn!("QUAKE_FEED_PERIOD={raw:?} is not hour/day/week/month, using default");
                defaults.feed_period
            }),
            None => defaults.feed_period,
        };

        let min_magnitude = match lookup("QUAKE_MIN_MAGNITUDE") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(m) if m.is_finite() && m >= 0.0 => m,
                _ => {
                    log::warn!("QUAKE_MIN_MAGNITUDE={raw:?} is not a magnitude, using default");
                    defaults.min_magnitude
                }
            },
            None => defaults.min_magnitude,
        };

        Self {
            feed_base_url,
            feed_period,
            min_magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn values_are_read() {
        let cfg = config_from(&[
            ("QUAKE_FEED_BASE_URL", "http://localhost:8080/feeds"),
            ("QUAKE_FEED_PERIOD", "week"),
            ("QUAKE_MIN_MAGNITUDE", "2.5"),
        ]);
        assert_eq!(cfg.feed_base_url, "http://localhost:8080/feeds");
        assert_eq!(cfg.feed_period, FeedPeriod::PastWeek);
        assert_eq!(cfg.min_magnitude, 2.5);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config_from(&[
            ("QUAKE_FEED_PERIOD", "decade"),
            ("QUAKE_MIN_MAGNITUDE", "-3"),
        ]);
        assert_eq!(cfg.feed_period, FeedPeriod::PastDay);
        assert_eq!(cfg.min_magnitude, 0.0);
    }
}
