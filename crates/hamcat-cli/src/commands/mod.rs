pub mod agenda;
pub mod parse;
pub mod past;
pub mod upcoming;

use hamcat_core::clock::Clock;
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::models::Event;

use crate::views::table::ViewEvent;

/// Builds table rows for already classified events.
pub fn view_events<C: Clock>(classifier: &EventDateClassifier<C>, events: &[&Event]) -> Vec<ViewEvent> {
    events
        .iter()
        .map(|event| {
            ViewEvent::new(
                event,
                classifier.format_date_display(&event.date),
                classifier.days_until_event(&event.date),
                classifier.get_event_urgency(&event.date),
            )
        })
        .collect()
}

pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
