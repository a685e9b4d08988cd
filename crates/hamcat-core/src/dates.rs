//! Event date parsing and classification.
//!
//! Every function takes the reference date `today` explicitly. Malformed
//! input never panics or errors: it becomes `None`, the `-1` sentinel of
//! [`days_until_event`], or an entry in [`EventBuckets::unparseable`].

use std::cmp::Reverse;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::DateParseError;
use crate::models::{EventBuckets, EventDate};
use crate::months;

/// Parses `"<day> <month> [year]"` into a calendar date.
///
/// - the day is the integer the first token starts with (`"1er"` is 1);
///   values outside the month roll over
///   (`"31 Sept 25"` is 1 October 2025, `"0 Mars 24"` is 29 February 2024)
/// - the month is a French name or abbreviation, case-insensitive
/// - a missing year means the year of `today`; two digits mean `20xx`;
///   four digits are taken as is; anything else is rejected
/// - tokens after the year are ignored
pub fn try_parse_event_date(date_str: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let normalized = date_str.trim().to_lowercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    if tokens.len() < 2 {
        return Err(DateParseError::TooFewTokens(date_str.to_string()));
    }

    let day = leading_integer(tokens[0])
        .ok_or_else(|| DateParseError::InvalidDay(tokens[0].to_string()))?;
    let month = months::month_number(tokens[1])
        .ok_or_else(|| DateParseError::UnknownMonth(tokens[1].to_string()))?;
    let year = match tokens.get(2) {
        Some(token) => resolve_year(token)?,
        None => today.year(),
    };

    let out_of_range = || DateParseError::OutOfRange { year, month, day };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    let offset = day.checked_sub(1).ok_or_else(out_of_range)?;

    let date = if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    date.ok_or_else(out_of_range)
}

/// [`try_parse_event_date`] with the failure reason discarded.
pub fn parse_event_date(date_str: &str, today: NaiveDate) -> Option<NaiveDate> {
    try_parse_event_date(date_str, today).ok()
}

/// Reads an optional sign and the digits that follow it, ignoring any
/// trailing text: `"1er"` is 1, `"31,"` is 31, `"-2"` is -2.
fn leading_integer(token: &str) -> Option<i64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = token.len() - unsigned.len() + digits;
    token[..end].parse().ok()
}

fn resolve_year(token: &str) -> Result<i32, DateParseError> {
    let invalid = || DateParseError::InvalidYear(token.to_string());

    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: i32 = token.parse().map_err(|_| invalid())?;
    match token.len() {
        2 => Ok(2000 + value),
        4 => Ok(value),
        _ => Err(invalid()),
    }
}

/// `true` when the date is today or later. `None` is never in the future.
pub fn is_date_in_future(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|date| date >= today)
}

/// Events dated today or later, soonest first. Unparseable dates are dropped.
///
/// The sort is stable: events sharing a date keep their input order.
pub fn get_upcoming_dates<E: EventDate>(events: &[E], today: NaiveDate) -> Vec<&E> {
    let mut upcoming: Vec<(NaiveDate, &E)> = events
        .iter()
        .filter_map(|event| {
            parse_event_date(event.date_str(), today)
                .filter(|&date| is_date_in_future(Some(date), today))
                .map(|date| (date, event))
        })
        .collect();

    upcoming.sort_by_key(|&(date, _)| date);
    trace!(count = upcoming.len(), %today, "upcoming events");
    upcoming.into_iter().map(|(_, event)| event).collect()
}

/// Events dated before today, most recent first.
///
/// Events whose date does not parse are kept here too and end up last.
/// Use [`partition_events`] to get them in a bucket of their own.
pub fn get_past_dates<E: EventDate>(events: &[E], today: NaiveDate) -> Vec<&E> {
    let mut past: Vec<(Option<NaiveDate>, &E)> = events
        .iter()
        .map(|event| (parse_event_date(event.date_str(), today), event))
        .filter(|&(date, _)| !is_date_in_future(date, today))
        .collect();

    for (_, event) in past.iter().filter(|(date, _)| date.is_none()) {
        debug!(date = event.date_str(), "unparseable event date classified as past");
    }

    past.sort_by_key(|&(date, _)| Reverse(date));
    trace!(count = past.len(), %today, "past events");
    past.into_iter().map(|(_, event)| event).collect()
}

/// All events in chronological order. Unparseable dates come first.
pub fn sort_dates_chrono<E: EventDate>(events: &[E], today: NaiveDate) -> Vec<&E> {
    let mut sorted: Vec<(Option<NaiveDate>, &E)> = events
        .iter()
        .map(|event| (parse_event_date(event.date_str(), today), event))
        .collect();

    sorted.sort_by_key(|&(date, _)| date);
    sorted.into_iter().map(|(_, event)| event).collect()
}

/// Splits events into upcoming, past and unparseable in one pass.
pub fn partition_events<E: EventDate>(events: &[E], today: NaiveDate) -> EventBuckets<&E> {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    let mut buckets = EventBuckets::default();

    for event in events {
        match try_parse_event_date(event.date_str(), today) {
            Ok(date) if is_date_in_future(Some(date), today) => upcoming.push((date, event)),
            Ok(date) => past.push((date, event)),
            Err(err) => {
                debug!(date = event.date_str(), error = %err, "unparseable event date");
                buckets.unparseable.push(event);
            }
        }
    }

    upcoming.sort_by_key(|&(date, _)| date);
    past.sort_by_key(|&(date, _)| Reverse(date));
    buckets.upcoming = upcoming.into_iter().map(|(_, event)| event).collect();
    buckets.past = past.into_iter().map(|(_, event)| event).collect();
    buckets
}

/// Whole days from `today` to the event: 0 today, negative in the past.
///
/// Returns `-1` when the date does not parse, which is indistinguishable
/// from "yesterday"; callers treat both as "no longer upcoming".
pub fn days_until_event(date_str: &str, today: NaiveDate) -> i64 {
    match parse_event_date(date_str, today) {
        Some(date) => date.signed_duration_since(today).num_days(),
        None => -1,
    }
}

/// How soon an upcoming event is, for events within the next 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Today,
    Tomorrow,
    /// 2 to 7 days away.
    InDays(i64),
    /// 8 to 30 days away, in weeks rounded up.
    InWeeks(i64),
}

impl Urgency {
    pub fn from_days(days: i64) -> Option<Self> {
        match days {
            0 => Some(Urgency::Today),
            1 => Some(Urgency::Tomorrow),
            2..=7 => Some(Urgency::InDays(days)),
            8..=30 => Some(Urgency::InWeeks((days + 6) / 7)),
            _ => None,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Today => write!(f, "Aujourd'hui"),
            Urgency::Tomorrow => write!(f, "Demain"),
            Urgency::InDays(days) => write!(f, "Dans {days}j"),
            Urgency::InWeeks(weeks) => write!(f, "Dans {weeks}sem"),
        }
    }
}

/// Urgency of an event, or `None` for past, unparseable and far-off dates.
pub fn get_event_urgency(date_str: &str, today: NaiveDate) -> Option<Urgency> {
    Urgency::from_days(days_until_event(date_str, today))
}

/// `"Aujourd'hui"`, `"Demain"`, `"Dans 5j"`, `"Dans 2sem"` or `None`.
pub fn get_event_urgency_label(date_str: &str, today: NaiveDate) -> Option<String> {
    get_event_urgency(date_str, today).map(|urgency| urgency.to_string())
}

/// Short French rendering such as `"dim. 31 août"`.
///
/// Input that does not parse is returned unchanged.
pub fn format_date_display(date_str: &str, today: NaiveDate) -> String {
    match parse_event_date(date_str, today) {
        Some(date) => display_date(date),
        None => date_str.to_string(),
    }
}

fn display_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        months::short_weekday_name(date.weekday()),
        date.day(),
        months::short_month_name(date.month()).unwrap_or_default()
    )
}

/// Writes a date back in listing form with a four-digit year, e.g. `"13 juil 2025"`.
pub fn to_event_date_string(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        months::month_token(date.month()).unwrap_or_default(),
        date.year()
    )
}

/// The classification operations bound to a [`Clock`].
///
/// Each call reads the clock afresh, so a long-lived classifier follows the
/// calendar across midnight.
#[derive(Debug, Clone, Default)]
pub struct EventDateClassifier<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> EventDateClassifier<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn parse_event_date(&self, date_str: &str) -> Option<NaiveDate> {
        parse_event_date(date_str, self.today())
    }

    pub fn try_parse_event_date(&self, date_str: &str) -> Result<NaiveDate, DateParseError> {
        try_parse_event_date(date_str, self.today())
    }

    pub fn is_date_in_future(&self, date: Option<NaiveDate>) -> bool {
        is_date_in_future(date, self.today())
    }

    pub fn get_upcoming_dates<'a, E: EventDate>(&self, events: &'a [E]) -> Vec<&'a E> {
        get_upcoming_dates(events, self.today())
    }

    pub fn get_past_dates<'a, E: EventDate>(&self, events: &'a [E]) -> Vec<&'a E> {
        get_past_dates(events, self.today())
    }

    pub fn sort_dates_chrono<'a, E: EventDate>(&self, events: &'a [E]) -> Vec<&'a E> {
        sort_dates_chrono(events, self.today())
    }

    pub fn partition_events<'a, E: EventDate>(&self, events: &'a [E]) -> EventBuckets<&'a E> {
        partition_events(events, self.today())
    }

    pub fn days_until_event(&self, date_str: &str) -> i64 {
        days_until_event(date_str, self.today())
    }

    pub fn get_event_urgency(&self, date_str: &str) -> Option<Urgency> {
        get_event_urgency(date_str, self.today())
    }

    pub fn get_event_urgency_label(&self, date_str: &str) -> Option<String> {
        get_event_urgency_label(date_str, self.today())
    }

    pub fn format_date_display(&self, date_str: &str) -> String {
        format_date_display(date_str, self.today())
    }
}
