use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("holding {0} not found")]
    HoldingNotFound(i64),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("quote unavailable for {symbol}: {reason}")]
    QuoteUnavailable { symbol: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn quote_unavailable(symbol: impl Into<String>, reason: impl ToString) -> Self {
        Self::QuoteUnavailable {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }
}
