use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::{QuoteProvider, utils::make_request},
    error::{Error, Result},
};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

// Yahoo rejects requests that carry no browser user agent.
const UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Clone, Debug)]
pub struct YahooFinance {
    client: Client,
    base_url: String,
}

impl Default for YahooFinance {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooFinance {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(UA));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .expect("http client");

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl QuoteProvider for YahooFinance {
    async fn fetch_last_close(&self, symbol: &str) -> Result<Decimal> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range=1d",
            self.base_url, symbol
        );
        debug!("requesting {}", url);

        let data = make_request(&self.client, &url)
            .await
            .map_err(|err| Error::quote_unavailable(symbol, &err))?;

        if let Some(error) = data["chart"]["error"].as_object() {
            let description = error
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(Error::quote_unavailable(symbol, description));
        }

        let result = &data["chart"]["result"][0];
        let close = result["meta"]["regularMarketPrice"]
            .as_f64()
            .or_else(|| {
                // Fall back to the newest non-null entry of the close series.
                result["indicators"]["quote"][0]["close"]
                    .as_array()
                    .and_then(|closes| closes.iter().rev().find_map(Value::as_f64))
            })
            .ok_or_else(|| Error::quote_unavailable(symbol, "no close price in response"))?;

        Decimal::from_f64(close)
            .ok_or_else(|| Error::quote_unavailable(symbol, "close price is not finite"))
    }
}
