use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;

use crate::api_response::ExchangeRatesResponse;
use crate::error::{RatesError, Result};
use crate::exchange_rate::DATE_FORMAT;

pub const PRIVATBANK_API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// Source of daily exchange-rate snapshots.
#[async_trait]
pub trait RateSource {
    async fn fetch(&self, date: NaiveDate) -> Result<ExchangeRatesResponse>;
}

pub struct PrivatBankClient {
    base_url: String,
}

impl PrivatBankClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        format!("{}?date={}", self.base_url, date.format(DATE_FORMAT))
    }
}

#[async_trait]
impl RateSource for PrivatBankClient {
    async fn fetch(&self, date: NaiveDate) -> Result<ExchangeRatesResponse> {
        let url = self.url_for(date);
        let text = load_json(&url).await?;

        serde_json::from_str(&text).map_err(|source| RatesError::Decode { url, source })
    }
}

async fn load_json(url: &str) -> Result<String> {
    let http_error = |source| RatesError::Http {
        url: url.to_string(),
        source,
    };

    debug!("GET {}", url);

    let client = Client::new();
    let resp = client.get(url).send().await.map_err(http_error)?;
    if !resp.status().is_success() {
        return Err(RatesError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    resp.text().await.map_err(http_error)
}
