use std::env;
use std::path::PathBuf;

use crate::rate_source::PRIVATBANK_API_URL;

pub const DEFAULT_OUTPUT_FILE: &str = "exchange_rates.txt";
pub const DEFAULT_ERROR_LOG: &str = "errors.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub output_file: PathBuf,
    pub error_log: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_url: PRIVATBANK_API_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
        }
    }

    /// Loads `.env` if present, then applies environment overrides.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(url) = lookup("PRIVAT_API_URL") {
            config = config.with_api_url(&url);
        }
        if let Some(path) = lookup("RATES_OUTPUT_FILE") {
            config = config.with_output_file(path);
        }
        if let Some(path) = lookup("RATES_ERROR_LOG") {
            config = config.with_error_log(path);
        }

        config
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::new());
        assert_eq!(config.output_file, PathBuf::from("exchange_rates.txt"));
        assert_eq!(config.error_log, PathBuf::from("errors.log"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("PRIVAT_API_URL", "http://localhost:8080/rates/"),
            ("RATES_OUTPUT_FILE", "out/rates.txt"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "http://localhost:8080/rates");
        assert_eq!(config.output_file, PathBuf::from("out/rates.txt"));
        assert_eq!(config.error_log, PathBuf::from(DEFAULT_ERROR_LOG));
    }
}
