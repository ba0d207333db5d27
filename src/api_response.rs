use serde::Deserialize;
use serde_json::Number;

/// One entry of the `exchangeRate` array. Only rows for currencies the bank
/// trades itself carry `saleRate`/`purchaseRate`; the rest have NBU rates only.
#[derive(Debug, Deserialize, PartialEq)]
pub struct CurrencyRateEntry {
    pub currency: Option<String>,
    #[serde(rename = "saleRate")]
    pub sale_rate: Option<Number>,
    #[serde(rename = "purchaseRate")]
    pub purchase_rate: Option<Number>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ExchangeRatesResponse {
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Option<Vec<CurrencyRateEntry>>,
}

impl ExchangeRatesResponse {
    pub fn find_currency(&self, code: &str) -> Option<&CurrencyRateEntry> {
        self.exchange_rate
            .as_deref()?
            .iter()
            .find(|entry| entry.currency.as_deref() == Some(code))
    }
}
