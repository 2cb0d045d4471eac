use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

pub mod av;
pub mod av_dto;
pub mod utils;
pub mod yahoo;

pub use av::AlphaVantage;
pub use yahoo::YahooFinance;

/// Market quote lookup, substitutable for testing.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Latest close for the symbol. Any failure means the quote is
    /// unavailable this cycle; callers skip the holding rather than abort.
    async fn fetch_last_close(&self, symbol: &str) -> Result<Decimal>;
}
