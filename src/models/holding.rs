use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Holding {
    id: i64,
    symbol: String,
    quantity: i64,
    cost_basis: Decimal,
    last_value: Decimal,
    last_refreshed_at: Option<DateTime<Local>>,
}

impl Holding {
    /// Unrealized gain/loss of this lot at the given market price.
    ///
    /// `None` when the result does not fit the decimal range.
    pub fn gain_loss(&self, current_price: Decimal) -> Option<Decimal> {
        current_price
            .checked_sub(self.cost_basis)?
            .checked_mul(Decimal::from(self.quantity))
    }
}
