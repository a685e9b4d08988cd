use anyhow::Result;
use hamcat_core::clock::Clock;
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::listing::Listing;
use owo_colors::OwoColorize;

use crate::commands::view_events;
use crate::views::table::display_upcoming;

pub fn show_upcoming<C: Clock>(classifier: &EventDateClassifier<C>, listing: &Listing) -> Result<()> {
    let upcoming = classifier.get_upcoming_dates(&listing.events);

    println!("{}", "Prochaines Dates".bold());
    display_upcoming(&view_events(classifier, &upcoming));

    Ok(())
}
