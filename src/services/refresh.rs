use std::sync::Arc;

use tracing::{debug, warn};

use crate::{api::QuoteProvider, db::Store, error::Result, models::RefreshedHolding};

/// Recomputes and persists gain/loss for every holding from current quotes.
pub struct RefreshEngine {
    store: Store,
    provider: Arc<dyn QuoteProvider>,
}

impl RefreshEngine {
    pub fn new(store: Store, provider: Arc<dyn QuoteProvider>) -> Self {
        Self { store, provider }
    }

    /// One refresh cycle over all holdings, in stored (insertion) order.
    ///
    /// A holding is skipped for this cycle when its quote is unavailable or
    /// its gain/loss does not fit the decimal range: the stored value stays
    /// untouched and the holding is omitted from the returned snapshot. A
    /// store write failure aborts the cycle; writes already made in the same
    /// cycle stand.
    pub async fn refresh_all(&self) -> Result<Vec<RefreshedHolding>> {
        let holdings = self.store.read_all().await?;
        let mut snapshot = Vec::with_capacity(holdings.len());

        for holding in holdings {
            let price = match self.provider.fetch_last_close(holding.symbol()).await {
                Ok(price) => price,
                Err(err) => {
                    warn!("skipping {}: {}", holding.symbol(), err);
                    continue;
                }
            };

            let gain_loss = match holding.gain_loss(price) {
                Some(value) => value,
                None => {
                    warn!(
                        "skipping {}: gain/loss at price {} exceeds the decimal range",
                        holding.symbol(),
                        price
                    );
                    continue;
                }
            };
            self.store.update_value(*holding.id(), gain_loss).await?;
            debug!("refreshed {} at {}", holding.symbol(), price);

            snapshot.push(RefreshedHolding::new(
                *holding.id(),
                holding.symbol().clone(),
                *holding.quantity(),
                price,
                gain_loss,
            ));
        }

        Ok(snapshot)
    }
}
