//! # Hamcat Core Library
//!
//! Date handling for the hamcat live dates listing: French-locale event
//! dates such as `"31 Août 25"` or `"20 Sept"` are parsed, split into
//! upcoming and past events, sorted, and annotated with short urgency
//! labels ("Demain", "Dans 3j").
//!
//! ## Core Modules
//!
//! - [`dates`]: parsing, classification, urgency labels and display
//! - [`months`]: French month and weekday tables
//! - [`models`]: the `Event` record and the `EventDate` trait
//! - [`listing`]: loading a listing from JSON
//! - [`clock`]: the source of "today"
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hamcat_core::{clock::FixedClock, dates::EventDateClassifier, listing::Listing};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
//! let classifier = EventDateClassifier::new(FixedClock(today));
//! let listing = Listing::builtin();
//!
//! for event in classifier.get_upcoming_dates(&listing.events) {
//!     let label = classifier.get_event_urgency_label(&event.date);
//!     println!("{} {} {:?}", event.date, event.event, label);
//! }
//! assert_eq!(classifier.get_event_urgency_label("31 Août").as_deref(), Some("Dans 6j"));
//! ```

pub mod clock;
pub mod dates;
pub mod error;
pub mod listing;
pub mod models;
pub mod months;
