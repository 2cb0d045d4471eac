use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One successfully refreshed holding, ready for display.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct RefreshedHolding {
    id: i64,
    symbol: String,
    quantity: i64,
    current_price: Decimal,
    gain_loss: Decimal,
}
