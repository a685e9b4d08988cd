use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "hamcat.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// JSON listing to read instead of the built-in one
    #[serde(default)]
    pub events_file: Option<PathBuf>,
    /// Maximum number of past dates to show
    #[serde(default)]
    pub past_limit: Option<usize>,
    /// Pinned reference date, `YYYY-MM-DD`
    #[serde(default)]
    pub today: Option<String>,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("HAMCAT_"))
    }

    /// The configured reference date, if any.
    pub fn today(&self) -> Result<Option<NaiveDate>, chrono::ParseError> {
        self.today
            .as_deref()
            .map(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d"))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_toml_and_env_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                events_file = "dates.json"
                past_limit = 3
                "#,
            )?;
            jail.set_env("HAMCAT_PAST_LIMIT", "5");
            jail.set_env("HAMCAT_TODAY", "2025-08-20");

            let config = Config::new()?;
            assert_eq!(config.events_file, Some(PathBuf::from("dates.json")));
            assert_eq!(config.past_limit, Some(5));
            assert_eq!(config.today(), Ok(NaiveDate::from_ymd_opt(2025, 8, 20)));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_today() {
        let config = Config {
            today: Some("20 août".to_string()),
            ..Default::default()
        };
        assert!(config.today().is_err());
    }
}
