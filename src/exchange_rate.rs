use std::fmt;

use chrono::NaiveDate;
use serde_json::Number;

use crate::api_response::ExchangeRatesResponse;
use crate::error::{RatesError, Result};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Sale and purchase rates, kept as the JSON numbers the API sent.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    pub sale: Number,
    pub purchase: Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRecord {
    pub date: NaiveDate,
    pub eur: CurrencyRate,
    pub usd: CurrencyRate,
}

impl ExchangeRecord {
    pub fn from_response(date: NaiveDate, response: &ExchangeRatesResponse) -> Result<Self> {
        if response.exchange_rate.is_none() {
            return Err(RatesError::MissingRates { date });
        }

        Ok(Self {
            date,
            eur: currency_rate(date, response, "EUR")?,
            usd: currency_rate(date, response, "USD")?,
        })
    }

    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn currency_rate(
    date: NaiveDate,
    response: &ExchangeRatesResponse,
    currency: &'static str,
) -> Result<CurrencyRate> {
    let not_found = || RatesError::CurrencyNotFound { date, currency };

    let entry = response.find_currency(currency).ok_or_else(not_found)?;
    let sale = entry.sale_rate.clone().ok_or_else(not_found)?;
    let purchase = entry.purchase_rate.clone().ok_or_else(not_found)?;

    Ok(CurrencyRate { sale, purchase })
}

impl fmt::Display for CurrencyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'sale': {}, 'purchase': {}}}",
            self.sale, self.purchase
        )
    }
}

impl fmt::Display for ExchangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'{}': {{'EUR': {}, 'USD': {}}}}}",
            self.date_key(),
            self.eur,
            self.usd
        )
    }
}
