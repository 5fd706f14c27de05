use super::model::{HistogramBin, SeismicEvent};

/// Fixed bin layout: (label, lower, upper), both bounds inclusive.
///
/// Adjacent bins do not touch: magnitudes in (1.9, 2), (2.9, 3) and (3.9, 4)
/// land in no bin and are left out of the counts.
const BIN_LAYOUT: [(&str, f64, f64); 4] = [
    ("0-1.9", 0.0, 1.9),
    ("2-2.9", 2.0, 2.9),
    ("3-3.9", 3.0, 3.9),
    ("4+", 4.0, f64::INFINITY),
];

/// Empty bins in display order.
pub fn empty_bins() -> Vec<HistogramBin> {
    BIN_LAYOUT
        .iter()
        .map(|&(label, lo, hi)| HistogramBin::new(label, lo, hi))
        .collect()
}

/// Count events per magnitude bin. Each event goes to the first bin that
/// contains it, or to none.
pub fn build_histogram(events: &[SeismicEvent]) -> Vec<HistogramBin> {
    let mut bins = empty_bins();
    for ev in events {
        if let Some(bin) = bins.iter_mut().find(|b| b.contains(ev.magnitude)) {
            bin.count += 1;
        } else {
            log::trace!("event {} (M{}) falls between bins", ev.id, ev.magnitude);
        }
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(magnitude: f64) -> SeismicEvent {
        SeismicEvent {
            id: format!("m{magnitude}"),
            magnitude,
            place: None,
            time_millis: 0,
            longitude: 0.0,
            latitude: 0.0,
            depth_km: 0.0,
            url: None,
        }
    }

    fn counts(bins: &[HistogramBin]) -> Vec<usize> {
        bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn bins_come_out_in_fixed_order() {
        let bins = build_histogram(&[]);
        let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["0-1.9", "2-2.9", "3-3.9", "4+"]);
        assert_eq!(counts(&bins), vec![0, 0, 0, 0]);
        assert!(bins[3].upper_bound.is_infinite());
    }

    #[test]
    fn mixed_magnitudes() {
        let events: Vec<_> = [1.5, 3.2, 4.0, 6.5].into_iter().map(quake).collect();
        assert_eq!(counts(&build_histogram(&events)), vec![1, 0, 1, 2]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let events: Vec<_> = [0.0, 1.9, 2.0, 2.9, 3.0, 3.9, 4.0]
            .into_iter()
            .map(quake)
            .collect();
        assert_eq!(counts(&build_histogram(&events)), vec![2, 2, 2, 1]);
    }

    #[test]
    fn magnitudes_between_bins_are_not_counted() {
        let events: Vec<_> = [1.95, 2.95, 3.95, 2.5].into_iter().map(quake).collect();
        let bins = build_histogram(&events);
        assert_eq!(counts(&bins), vec![0, 1, 0, 0]);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert!(total < events.len());
    }

    mod property_tests {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        fn in_gap(m: f64) -> bool {
            m < 0.0 || (1.9 < m && m < 2.0) || (2.9 < m && m < 3.0) || (3.9 < m && m < 4.0)
        }

        proptest! {
            #[test]
            fn test_counts_sum_to_binnable_events(
                mags in vec(-1.0..12.0_f64, 0..60)
            ) {
                let events: Vec<_> = mags.iter().copied().map(quake).collect();
                let bins = build_histogram(&events);
                let total: usize = bins.iter().map(|b| b.count).sum();

                prop_assert!(total <= events.len());
                prop_assert_eq!(total, mags.iter().filter(|m| !in_gap(**m)).count());
            }

            #[test]
            fn test_layout_is_fixed(
                mags in vec(0.0..10.0_f64, 0..20)
            ) {
                let events: Vec<_> = mags.into_iter().map(quake).collect();
                let bins = build_histogram(&events);
                let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
                prop_assert_eq!(labels, vec!["0-1.9", "2-2.9", "3-3.9", "4+"]);
            }
        }
    }
}
