use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use hamcat_core::clock::{Clock, FixedClock, SystemClock};
use hamcat_core::dates::EventDateClassifier;
use hamcat_core::error::CoreError;
use hamcat_core::listing::Listing;
use owo_colors::{OwoColorize, Style};
use tracing::{debug, warn};

mod cli;
mod commands;
mod config;
mod logging;
mod views;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.quiet) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    let config = config::Config::new().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring invalid {}", config::CONFIG_FILE);
        config::Config::default()
    });

    if let Err(e) = run(cli, config) {
        handle_error(e);
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli, config: config::Config) -> Result<()> {
    // "Today" is read once so every section of the output agrees on it.
    let today = resolve_today(cli.today, &config)?;
    let classifier = EventDateClassifier::new(FixedClock(today));
    debug!(%today, "reference date");

    let listing = match cli.events.as_ref().or(config.events_file.as_ref()) {
        Some(path) => Listing::load(path)
            .with_context(|| format!("failed to load listing {}", path.display()))?,
        None => Listing::builtin(),
    };

    match cli.command {
        cli::Commands::Upcoming => commands::upcoming::show_upcoming(&classifier, &listing),
        cli::Commands::Past(command) => {
            commands::past::show_past(&classifier, &listing, command, &config)
        }
        cli::Commands::Agenda(command) => {
            commands::agenda::show_agenda(&classifier, &listing, command, &config)
        }
        cli::Commands::Parse(command) => commands::parse::parse_date(&classifier, command),
    }
}

fn resolve_today(flag: Option<NaiveDate>, config: &config::Config) -> Result<NaiveDate> {
    if let Some(today) = flag {
        return Ok(today);
    }
    let configured = config.today().map_err(|e| {
        CoreError::InvalidInput(format!(
            "today must be YYYY-MM-DD, got '{}': {}",
            config.today.as_deref().unwrap_or_default(),
            e
        ))
    })?;
    Ok(configured.unwrap_or_else(|| SystemClock.today()))
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        Some(CoreError::InvalidDate(reason)) => {
            eprintln!("{} Not a date: {}", "Error:".style(error_style), reason.yellow());
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Io(io)) => {
            eprintln!("{} {}: {}", "Error:".style(error_style), err, io);
        }
        Some(CoreError::Json(json)) => {
            eprintln!("{} {}: {}", "Error:".style(error_style), err, json.yellow());
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
