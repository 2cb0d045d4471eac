use chrono::{DateTime, Local};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{
    error::{Error, Result},
    models::Holding,
};

pub fn parse_i64_from_row(row: &SqliteRow, column: &str) -> Result<i64> {
    Ok(row.try_get::<i64, _>(column)?)
}

pub fn parse_string_from_row(row: &SqliteRow, column: &str) -> Result<String> {
    Ok(row.try_get::<String, _>(column)?)
}

pub fn parse_decimal_from_row(row: &SqliteRow, column: &str) -> Result<Decimal> {
    let value: f64 = row.try_get(column)?;
    Decimal::from_f64(value)
        .ok_or_else(|| Error::invalid_data(format!("column '{column}' holds a non-finite value")))
}

pub fn parse_datetime_from_row(row: &SqliteRow, column: &str) -> Result<Option<DateTime<Local>>> {
    Ok(row.try_get::<Option<DateTime<Local>>, _>(column)?)
}

pub fn parse_holding(row: SqliteRow) -> Result<Holding> {
    let id = parse_i64_from_row(&row, "id")?;
    let symbol = parse_string_from_row(&row, "symbol")?;
    let quantity = parse_i64_from_row(&row, "quantity")?;
    let cost_basis = parse_decimal_from_row(&row, "cost_basis")?;
    let last_value = parse_decimal_from_row(&row, "last_value")?;
    let last_refreshed_at = parse_datetime_from_row(&row, "last_refreshed_at")?;

    Ok(Holding::new(
        id,
        symbol,
        quantity,
        cost_basis,
        last_value,
        last_refreshed_at,
    ))
}
