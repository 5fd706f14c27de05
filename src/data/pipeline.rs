use super::filter::filter_events;
use super::focus::compute_focus;
use super::histogram::build_histogram;
use super::model::{FilterCriteria, FilterResult, MapFocus, SeismicEvent};

/// Run filter → (histogram, focus) over the given events.
///
/// Pure: the caller owns `previous_focus` and stores the returned focus for
/// the next call.
pub fn compute_filter_result(
    events: &[SeismicEvent],
    criteria: &FilterCriteria,
    previous_focus: &MapFocus,
) -> FilterResult {
    let filtered_events = filter_events(events, criteria);
    let histogram = build_histogram(&filtered_events);
    let focus = compute_focus(criteria, &filtered_events, previous_focus);

    log::debug!(
        "filter (min M{:.1}, query {:?}): {}/{} events",
        criteria.min_magnitude,
        criteria.location_query,
        filtered_events.len(),
        events.len()
    );

    FilterResult {
        filtered_events,
        histogram,
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::focus::{DEFAULT_CENTER, DEFAULT_ZOOM};
    use crate::data::model::GeoPoint;

    fn event(id: &str, magnitude: f64, place: &str, latitude: f64, longitude: f64) -> SeismicEvent {
        SeismicEvent {
            id: id.into(),
            magnitude,
            place: Some(place.into()),
            time_millis: 1_700_000_000_000,
            longitude,
            latitude,
            depth_km: 10.0,
            url: None,
        }
    }

    fn events() -> Vec<SeismicEvent> {
        vec![
            event("1", 1.5, "Ridgecrest, CA", 35.7, -117.5),
            event("2", 3.2, "Tokyo, Japan", 35.6, 139.7),
            event("3", 4.0, "Santiago, Chile", -33.4, -70.6),
            event("4", 6.5, "Suva, Fiji", -18.1, 178.4),
        ]
    }

    fn counts(result: &FilterResult) -> Vec<usize> {
        result.histogram.iter().map(|b| b.count).collect()
    }

    #[test]
    fn unfiltered_view() {
        let result = compute_filter_result(&events(), &FilterCriteria::default(), &MapFocus::default());
        assert_eq!(result.filtered_events.len(), 4);
        assert_eq!(counts(&result), vec![1, 0, 1, 2]);
        assert_eq!(result.focus.center, DEFAULT_CENTER);
        assert_eq!(result.focus.zoom_level, DEFAULT_ZOOM);
    }

    #[test]
    fn magnitude_four_and_up() {
        let criteria = FilterCriteria {
            min_magnitude: 4.0,
            ..Default::default()
        };
        let result = compute_filter_result(&events(), &criteria, &MapFocus::default());
        let mags: Vec<f64> = result.filtered_events.iter().map(|e| e.magnitude).collect();
        assert_eq!(mags, vec![4.0, 6.5]);
        assert_eq!(counts(&result), vec![0, 0, 0, 2]);
    }

    #[test]
    fn search_then_miss_keeps_the_searched_view() {
        let hit = FilterCriteria {
            min_magnitude: 0.0,
            location_query: "tokyo".into(),
        };
        let first = compute_filter_result(&events(), &hit, &MapFocus::default());
        assert_eq!(first.filtered_events.len(), 1);
        assert_eq!(first.focus.center, GeoPoint::new(35.6, 139.7));
        assert_eq!(first.focus.zoom_level, 5);
        assert!(first.focus.diagnostic.is_none());

        let miss = FilterCriteria {
            min_magnitude: 0.0,
            location_query: "Atlantis".into(),
        };
        let second = compute_filter_result(&events(), &miss, &first.focus);
        assert!(second.filtered_events.is_empty());
        assert_eq!(second.focus.center, first.focus.center);
        assert_eq!(second.focus.zoom_level, first.focus.zoom_level);
        assert!(second
            .focus
            .diagnostic
            .as_deref()
            .is_some_and(|d| d.starts_with("No events found near 'Atlantis'")));
        assert_eq!(counts(&second), vec![0, 0, 0, 0]);
    }

    #[test]
    fn gap_magnitude_is_listed_but_not_binned() {
        let quakes = vec![event("g", 1.95, "Nowhere", 0.0, 0.0)];
        let result = compute_filter_result(&quakes, &FilterCriteria::default(), &MapFocus::default());
        assert_eq!(result.filtered_events.len(), 1);
        let total: usize = counts(&result).iter().sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = events();
        let snapshot = input.clone();
        let criteria = FilterCriteria {
            min_magnitude: 5.0,
            location_query: "fiji".into(),
        };
        let _ = compute_filter_result(&input, &criteria, &MapFocus::default());
        assert_eq!(input, snapshot);
    }

    mod property_tests {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        fn arb_events() -> impl Strategy<Value = Vec<SeismicEvent>> {
            vec(
                (
                    0.0..10.0_f64,
                    proptest::option::of(prop_oneof![
                        Just("Tokyo, Japan"),
                        Just("Santiago, Chile"),
                        Just("Suva, Fiji"),
                    ]),
                    -90.0..90.0_f64,
                    -180.0..180.0_f64,
                ),
                0..30,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (magnitude, place, latitude, longitude))| SeismicEvent {
                        id: format!("ev{i}"),
                        magnitude,
                        place: place.map(String::from),
                        time_millis: 0,
                        longitude,
                        latitude,
                        depth_km: 10.0,
                        url: None,
                    })
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn test_bins_never_exceed_filtered_events(
                events in arb_events(),
                min_magnitude in 0.0..10.0_f64,
                query in prop_oneof![Just(""), Just("tokyo"), Just("chile"), Just("atlantis")]
            ) {
                let criteria = FilterCriteria { min_magnitude, location_query: query.to_string() };
                let result = compute_filter_result(&events, &criteria, &MapFocus::default());
                let total: usize = result.histogram.iter().map(|b| b.count).sum();
                prop_assert!(total <= result.filtered_events.len());
            }

            #[test]
            fn test_focus_follows_query_and_hits(
                events in arb_events(),
                min_magnitude in 0.0..10.0_f64,
                query in prop_oneof![Just(""), Just("tokyo"), Just("fiji"), Just("atlantis")],
                prev_lat in -80.0..80.0_f64,
                prev_lon in -170.0..170.0_f64,
                prev_zoom in 0u8..=18
            ) {
                let previous = MapFocus {
                    center: GeoPoint::new(prev_lat, prev_lon),
                    zoom_level: prev_zoom,
                    diagnostic: None,
                };
                let criteria = FilterCriteria { min_magnitude, location_query: query.to_string() };
                let result = compute_filter_result(&events, &criteria, &previous);

                match (query.is_empty(), result.filtered_events.first()) {
                    (true, _) => {
                        prop_assert_eq!(&result.focus, &MapFocus::default());
                    }
                    (false, Some(first)) => {
                        prop_assert_eq!(result.focus.center, GeoPoint::new(first.latitude, first.longitude));
                        prop_assert_eq!(result.focus.zoom_level, 5);
                        prop_assert!(result.focus.diagnostic.is_none());
                    }
                    (false, None) => {
                        prop_assert_eq!(result.focus.center, previous.center);
                        prop_assert_eq!(result.focus.zoom_level, previous.zoom_level);
                        prop_assert!(result.focus.diagnostic.is_some());
                    }
                }
            }
        }
    }
}
