use anyhow::Result;
use hamcat_core::clock::Clock;
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::listing::Listing;
use owo_colors::{OwoColorize, Style};
use tracing::info;

use crate::cli::PastCommand;
use crate::commands::{apply_limit, view_events};
use crate::config::Config;
use crate::views::table::{display_past, display_upcoming};

pub fn show_agenda<C: Clock>(
    classifier: &EventDateClassifier<C>,
    listing: &Listing,
    command: PastCommand,
    config: &Config,
) -> Result<()> {
    let buckets = classifier.partition_events(&listing.events);
    info!(
        upcoming = buckets.upcoming.len(),
        past = buckets.past.len(),
        unparseable = buckets.unparseable.len(),
        "classified listing"
    );

    println!("{}", "Prochaines Dates".bold());
    display_upcoming(&view_events(classifier, &buckets.upcoming));
    println!();

    let past = apply_limit(buckets.past, command.limit.or(config.past_limit));
    println!("{}", "Archives".bold());
    display_past(&view_events(classifier, &past));

    if !buckets.unparseable.is_empty() {
        let warn_style = Style::new().yellow().bold();
        eprintln!("{} Skipped entries with unreadable dates:", "Warning:".style(warn_style));
        for event in &buckets.unparseable {
            eprintln!("  {} ({})", event.date.yellow(), event.event);
        }
    }

    Ok(())
}
