use comfy_table::{Attribute, Cell, Color, Row, Table};
use hamcat_core::dates::Urgency;
use hamcat_core::models::Event;

#[derive(Debug, Clone)]
pub struct ViewEvent {
    pub date: String,
    pub display_date: String,
    pub event: String,
    pub genre: String,
    pub days: i64,
    pub urgency: Option<Urgency>,
}

impl ViewEvent {
    pub fn new(event: &Event, display_date: String, days: i64, urgency: Option<Urgency>) -> Self {
        Self {
            date: event.date.clone(),
            display_date,
            event: event.event.clone(),
            genre: event.genre.clone(),
            days,
            urgency,
        }
    }
}

fn urgency_cell(urgency: Option<Urgency>) -> Cell {
    match urgency {
        Some(urgency @ Urgency::Today) => Cell::new(urgency)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(urgency @ Urgency::Tomorrow) => Cell::new(urgency).fg(Color::Red),
        Some(urgency @ Urgency::InDays(_)) => Cell::new(urgency).fg(Color::Yellow),
        Some(urgency @ Urgency::InWeeks(_)) => Cell::new(urgency).fg(Color::Green),
        None => Cell::new(""),
    }
}

pub fn render_upcoming(events: &[ViewEvent]) -> String {
    if events.is_empty() {
        return "No upcoming dates.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Jour", "Days", "Event", "Genre", "Urgency"]);

    for event in events {
        let mut row = Row::new();
        row.add_cell(Cell::new(&event.date));
        row.add_cell(Cell::new(&event.display_date));
        row.add_cell(Cell::new(event.days));
        row.add_cell(Cell::new(&event.event).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(&event.genre));
        row.add_cell(urgency_cell(event.urgency));
        table.add_row(row);
    }

    table.to_string()
}

pub fn render_past(events: &[ViewEvent]) -> String {
    if events.is_empty() {
        return "No past dates.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Event", "Genre"]);

    for event in events {
        let mut row = Row::new();
        row.add_cell(Cell::new(&event.date).fg(Color::DarkGrey));
        row.add_cell(Cell::new(&event.event));
        row.add_cell(Cell::new(&event.genre).fg(Color::DarkGrey));
        table.add_row(row);
    }

    table.to_string()
}

pub fn display_upcoming(events: &[ViewEvent]) {
    println!("{}", render_upcoming(events));
}

pub fn display_past(events: &[ViewEvent]) {
    println!("{}", render_past(events));
}
