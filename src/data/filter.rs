use super::model::{FilterCriteria, SeismicEvent};

// ---------------------------------------------------------------------------
// Filter predicates: minimum magnitude AND location substring
// ---------------------------------------------------------------------------

/// Return the events that pass both filters, in input order.
///
/// An event passes when:
/// * its magnitude is at least `criteria.min_magnitude`, and
/// * the location query is blank, or the event has a `place` that contains
///   the query (case-insensitive). Events without a `place` never match a
///   non-blank query.
pub fn filter_events(events: &[SeismicEvent], criteria: &FilterCriteria) -> Vec<SeismicEvent> {
    let query = criteria.active_query().map(str::to_lowercase);

    events
        .iter()
        .filter(|ev| ev.magnitude >= criteria.min_magnitude)
        .filter(|ev| match &query {
            None => true,
            Some(q) => ev
                .place
                .as_deref()
                .is_some_and(|place| place.to_lowercase().contains(q.as_str())),
        })
        .cloned()
        .collect()
}
