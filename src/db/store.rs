use std::path::Path;
use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use sqlx::{
    Connection,
    sqlite::{SqliteConnectOptions, SqliteConnection},
};

use crate::{
    db::utils::parse_holding,
    error::{Error, Result},
    models::Holding,
};

static SYMBOL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.\-]{1,12}$").expect("symbol pattern"));

/// Durable CRUD for holdings in a single SQLite table.
///
/// Every operation opens and closes its own connection; no connection or
/// pool outlives a call. Cloning a `Store` clones the connect options, so
/// clones address the same database file.
#[derive(Clone, Debug)]
pub struct Store {
    options: SqliteConnectOptions,
}

impl Store {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self { options }
    }

    async fn open(&self) -> Result<SqliteConnection> {
        Ok(SqliteConnection::connect_with(&self.options).await?)
    }

    /// Idempotent first-run setup. Must run before any other operation.
    pub async fn initialize(&self) -> Result<()> {
        let mut conn = self.open().await?;
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS holdings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                symbol TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                cost_basis REAL NOT NULL,
                last_value REAL NOT NULL DEFAULT 0,
                last_refreshed_at DATETIME
            )
            "#,
        )
        .execute(&mut conn)
        .await?;
        conn.close().await?;
        Ok(())
    }

    /// Appends a new holding with `last_value = 0` and returns its id.
    ///
    /// Input is validated here, not in the caller: an empty or malformed
    /// symbol, a non-positive quantity, or a non-positive price is rejected
    /// with [`Error::Validation`] and nothing is written.
    pub async fn insert(&self, symbol: &str, quantity: i64, cost_basis: Decimal) -> Result<i64> {
        let symbol = validate(symbol, quantity, cost_basis)?;

        let mut conn = self.open().await?;
        let id = sqlx::query(
            r#"
            INSERT INTO holdings (symbol, quantity, cost_basis, last_value)
            VALUES (?, ?, ?, 0)
            "#,
        )
        .bind(&symbol)
        .bind(quantity)
        .bind(cost_basis.round_dp(4).to_f64())
        .execute(&mut conn)
        .await?
        .last_insert_rowid();
        conn.close().await?;

        Ok(id)
    }

    /// Every holding, in ascending id (insertion) order.
    pub async fn read_all(&self) -> Result<Vec<Holding>> {
        let mut conn = self.open().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, symbol, quantity, cost_basis, last_value, last_refreshed_at
            FROM holdings
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        rows.into_iter().map(parse_holding).collect()
    }

    /// Overwrites `last_value` and stamps `last_refreshed_at`.
    ///
    /// Fails with [`Error::HoldingNotFound`] if no holding has this id.
    pub async fn update_value(&self, id: i64, value: Decimal) -> Result<()> {
        let mut conn = self.open().await?;
        let result = sqlx::query(
            r#"
            UPDATE holdings
            SET last_value = ?, last_refreshed_at = ?
            WHERE id = ?
            "#,
        )
        .bind(value.round_dp(4).to_f64())
        .bind(Local::now())
        .bind(id)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        if result.rows_affected() == 0 {
            return Err(Error::HoldingNotFound(id));
        }
        Ok(())
    }

    /// Removes the holding with the given id. Deleting an unknown id is a
    /// no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.open().await?;
        sqlx::query("DELETE FROM holdings WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }
}

fn validate(symbol: &str, quantity: i64, cost_basis: Decimal) -> Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(Error::validation("symbol must not be empty"));
    }
    if !SYMBOL_SHAPE.is_match(symbol) {
        return Err(Error::validation(format!(
            "'{symbol}' is not a valid ticker symbol"
        )));
    }
    if quantity <= 0 {
        return Err(Error::validation(format!(
            "quantity must be positive, got {quantity}"
        )));
    }
    if cost_basis <= Decimal::ZERO {
        return Err(Error::validation(format!(
            "purchase price must be positive, got {cost_basis}"
        )));
    }
    Ok(symbol.to_string())
}
