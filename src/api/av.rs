use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    api::{QuoteProvider, av_dto::AvGlobalQuoteDto, utils::make_request},
    error::{Error, Result},
};

const BASE_URL: &str = "https://www.alphavantage.co";

#[derive(Clone, Debug)]
pub struct AlphaVantage {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantage {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantage {
    async fn fetch_last_close(&self, symbol: &str) -> Result<Decimal> {
        let url = format!(
            "{}/query?function=GLOBAL_QUOTE&symbol={}&apikey={}",
            self.base_url, symbol, self.api_key
        );
        debug!("requesting Alpha Vantage quote for {}", symbol);

        let data = make_request(&self.client, &url)
            .await
            .map_err(|err| Error::quote_unavailable(symbol, &err))?;

        // Unknown symbols come back as an empty "Global Quote" object, which
        // fails DTO deserialization below.
        let global_quote = data
            .get("Global Quote")
            .ok_or_else(|| Error::quote_unavailable(symbol, "no 'Global Quote' in response"))?;

        let quote: AvGlobalQuoteDto = serde_json::from_value(global_quote.clone())
            .map_err(|err| Error::quote_unavailable(symbol, &err))?;
        debug!(
            "{} closed at {} on {}",
            quote.symbol(),
            quote.price(),
            quote.latest_trading_day()
        );

        Decimal::from_str(quote.price()).map_err(|err| Error::quote_unavailable(symbol, &err))
    }
}
