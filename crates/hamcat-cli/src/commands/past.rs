use anyhow::Result;
use hamcat_core::clock::Clock;
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::listing::Listing;
use owo_colors::OwoColorize;

use crate::cli::PastCommand;
use crate::commands::{apply_limit, view_events};
use crate::config::Config;
use crate::views::table::display_past;

pub fn show_past<C: Clock>(
    classifier: &EventDateClassifier<C>,
    listing: &Listing,
    command: PastCommand,
    config: &Config,
) -> Result<()> {
    let past = classifier.get_past_dates(&listing.events);
    let past = apply_limit(past, command.limit.or(config.past_limit));

    println!("{}", "Archives".bold());
    display_past(&view_events(classifier, &past));

    Ok(())
}
