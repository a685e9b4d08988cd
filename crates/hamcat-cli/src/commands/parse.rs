use anyhow::Result;
use hamcat_core::clock::Clock;
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::error::CoreError;

use crate::cli::ParseCommand;

pub fn parse_date<C: Clock>(classifier: &EventDateClassifier<C>, command: ParseCommand) -> Result<()> {
    let date = classifier
        .try_parse_event_date(&command.date)
        .map_err(CoreError::from)?;

    let days = classifier.days_until_event(&command.date);
    let urgency = classifier
        .get_event_urgency_label(&command.date)
        .unwrap_or_else(|| "None".to_string());
    let status = if classifier.is_date_in_future(Some(date)) {
        "upcoming"
    } else {
        "past"
    };

    println!("Date:    {}", date.format("%Y-%m-%d"));
    println!("Display: {}", classifier.format_date_display(&command.date));
    println!("Status:  {status}");
    println!("Days:    {days}");
    println!("Urgency: {urgency}");

    Ok(())
}
