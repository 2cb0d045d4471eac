use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::{error, info};

use crate::{
    api::{AlphaVantage, QuoteProvider, YahooFinance},
    app::display,
    db::Store,
    error::Error,
    services::RefreshEngine,
};

#[derive(Parser)]
#[command(name = "stock-tracker")]
#[command(version)]
#[command(about = "Track stock holdings and their gain/loss from live quotes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "stock.db")]
    db: String,

    /// Quote source
    #[arg(long, global = true, value_enum, default_value_t = ProviderKind::Yahoo)]
    provider: ProviderKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProviderKind {
    Yahoo,
    AlphaVantage,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new holding
    Add {
        /// Ticker symbol, e.g. AAPL
        #[arg(long)]
        symbol: String,

        /// Number of shares
        #[arg(long)]
        quantity: i64,

        /// Purchase price per share
        #[arg(long)]
        price: Decimal,
    },

    /// Delete a holding by id
    Remove { id: i64 },

    /// Show stored holdings without fetching quotes
    List,

    /// Fetch quotes once and recompute every holding's gain/loss
    Refresh,

    /// Refresh on a fixed interval until interrupted
    Watch {
        /// Seconds between refresh cycles
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let db_path = shellexpand::tilde(&self.db).into_owned();
        let store = Store::new(&db_path);
        store.initialize().await?;

        // The provider is only built inside the arms that fetch quotes, so
        // commands without quote traffic never need provider configuration.
        match self.command {
            Commands::Add {
                symbol,
                quantity,
                price,
            } => {
                let provider = build_provider(self.provider)?;

                // Check the quote source first so unknown symbols never
                // reach the database.
                provider
                    .fetch_last_close(symbol.trim())
                    .await
                    .map_err(|err| Error::validation(format!("symbol check failed: {err}")))?;

                let id = store.insert(&symbol, quantity, price).await?;
                info!("added {} (id {})", symbol.trim(), id);

                let engine = RefreshEngine::new(store, provider);
                display::print_snapshot(&engine.refresh_all().await?);
            }
            Commands::Remove { id } => {
                store.delete(id).await?;
                info!("removed holding {}", id);

                let engine = RefreshEngine::new(store, build_provider(self.provider)?);
                display::print_snapshot(&engine.refresh_all().await?);
            }
            Commands::List => {
                display::print_holdings(&store.read_all().await?);
            }
            Commands::Refresh => {
                let engine = RefreshEngine::new(store, build_provider(self.provider)?);
                display::print_snapshot(&engine.refresh_all().await?);
            }
            Commands::Watch { interval } => {
                let engine = RefreshEngine::new(store, build_provider(self.provider)?);
                info!("refreshing every {}s, press Ctrl-C to stop", interval);
                let mut timer = tokio::time::interval(Duration::from_secs(interval));
                loop {
                    // The first tick fires immediately, giving the startup
                    // refresh before the wait begins.
                    timer.tick().await;
                    match engine.refresh_all().await {
                        Ok(snapshot) => display::print_snapshot(&snapshot),
                        Err(err) => error!("refresh failed: {}", err),
                    }
                }
            }
        }

        Ok(())
    }
}

fn build_provider(kind: ProviderKind) -> Result<Arc<dyn QuoteProvider>> {
    match kind {
        ProviderKind::Yahoo => Ok(Arc::new(YahooFinance::new())),
        ProviderKind::AlphaVantage => {
            let api_key = std::env::var("ALPHAVANTAGE_API_KEY")
                .context("ALPHAVANTAGE_API_KEY must be set for the alpha-vantage provider")?;
            Ok(Arc::new(AlphaVantage::new(api_key)))
        }
    }
}
