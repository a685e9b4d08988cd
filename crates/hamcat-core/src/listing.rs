//! Loading the live dates listing from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::models::Event;

/// An ordered list of events, as published on the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub events: Vec<Event>,
}

/// Accepted file shapes: `{"events": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingFile {
    Wrapped(Listing),
    Bare(Vec<Event>),
}

impl Listing {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let listing = match serde_json::from_str::<ListingFile>(json) {
            Ok(ListingFile::Wrapped(listing)) => listing,
            Ok(ListingFile::Bare(events)) => Listing::new(events),
            // Untagged errors carry no detail; re-parse in the input's own shape.
            Err(_) if json.trim_start().starts_with('[') => {
                Listing::new(serde_json::from_str::<Vec<Event>>(json)?)
            }
            Err(_) => serde_json::from_str::<Listing>(json)?,
        };
        Ok(listing)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let listing = Self::from_json_str(&json)?;
        debug!(path = %path.display(), events = listing.events.len(), "loaded listing");
        Ok(listing)
    }

    /// The dates the site shipped with, in the order they were published.
    pub fn builtin() -> Self {
        Self::new(vec![
            Event::new("31 Août", "Hadra Trance Festival", "Hi-Tech Live"),
            Event::new("20 Sept", "Out of the Void", "Acid / Mental"),
            Event::new("13 Juil 25", "ADN Music Festival", "Closing Mashup"),
            Event::new("13 Juin 25", "La Belle Électrique", "Techno Rodeo"),
            Event::new("08 Juin 25", "Nexen Festival", "Hi-Tech Mashup"),
            Event::new("05 Juin 25", "Open Air @ EVE", "Goa / Neotrance"),
            Event::new("26 Avr 25", "Equipe B @ Drak'Art", "Goa Trance"),
            Event::new("31 Déc 24", "New Year Special", "Multi Mashup"),
        ])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
