use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

/// Hamcat live dates: upcoming gigs with urgency labels, and the archives
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reference date for classification (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// JSON listing to read instead of the built-in one
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show upcoming dates, soonest first
    Upcoming,
    /// Show past dates, most recent first
    Past(PastCommand),
    /// Show upcoming and past dates together
    Agenda(PastCommand),
    /// Parse a single date string and explain the result
    Parse(ParseCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct PastCommand {
    /// Show at most this many past dates
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseCommand {
    /// The date as written on the listing, e.g. "31 Août 25"
    pub date: String,
}
