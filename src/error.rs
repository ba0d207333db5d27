use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("HTTP error occurred: {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error occurred: {url}: status {status}")]
    Status { url: String, status: StatusCode },

    #[error("Can't decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Exchange rates not found in API response for {}", .date.format("%d.%m.%Y"))]
    MissingRates { date: NaiveDate },

    #[error("{currency} rate not found in API response for {}", .date.format("%d.%m.%Y"))]
    CurrencyNotFound {
        date: NaiveDate,
        currency: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RatesError>;
