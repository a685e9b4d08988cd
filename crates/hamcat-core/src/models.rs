use serde::{Deserialize, Serialize};

/// A single line of the live dates listing.
///
/// Only `date` is interpreted; `event` and `genre` are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// `"<day> <month>[ <year>]"`, e.g. `"31 Août 25"` or `"20 Sept"`.
    pub date: String,
    pub event: String,
    #[serde(default)]
    pub genre: String,
}

impl Event {
    pub fn new(date: impl Into<String>, event: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            event: event.into(),
            genre: genre.into(),
        }
    }
}

/// Anything that carries an event date string can be classified.
pub trait EventDate {
    fn date_str(&self) -> &str;
}

impl EventDate for Event {
    fn date_str(&self) -> &str {
        &self.date
    }
}

impl EventDate for str {
    fn date_str(&self) -> &str {
        self
    }
}

impl EventDate for String {
    fn date_str(&self) -> &str {
        self
    }
}

impl<T: EventDate + ?Sized> EventDate for &T {
    fn date_str(&self) -> &str {
        (**self).date_str()
    }
}

/// Result of [`crate::dates::partition_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBuckets<T> {
    /// Today or later, soonest first.
    pub upcoming: Vec<T>,
    /// Strictly before today, most recent first.
    pub past: Vec<T>,
    /// Dates that failed to parse, in input order.
    pub unparseable: Vec<T>,
}

impl<T> Default for EventBuckets<T> {
    fn default() -> Self {
        Self {
            upcoming: Vec::new(),
            past: Vec::new(),
            unparseable: Vec::new(),
        }
    }
}

impl<T> EventBuckets<T> {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len() + self.unparseable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
