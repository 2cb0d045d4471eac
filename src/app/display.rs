use chrono::{DateTime, Local};

use crate::models::{Holding, RefreshedHolding};

/// Renders one refresh cycle as fixed-width rows.
pub fn print_snapshot(snapshot: &[RefreshedHolding]) {
    if snapshot.is_empty() {
        println!("(no holdings refreshed)");
        return;
    }

    println!(
        "{:>4}  {:<12} {:>10} {:>12} {:>12}",
        "ID", "SYMBOL", "QUANTITY", "PRICE", "GAIN/LOSS"
    );
    for entry in snapshot {
        println!(
            "{:>4}  {:<12} {:>10} {:>12.2} {:>12.2}",
            entry.id(),
            entry.symbol(),
            entry.quantity(),
            entry.current_price(),
            entry.gain_loss()
        );
    }
}

/// Renders stored holdings as last persisted, without quote traffic.
pub fn print_holdings(holdings: &[Holding]) {
    if holdings.is_empty() {
        println!("(no holdings)");
        return;
    }

    println!(
        "{:>4}  {:<12} {:>10} {:>12} {:>12}  {:<16}",
        "ID", "SYMBOL", "QUANTITY", "COST BASIS", "GAIN/LOSS", "REFRESHED"
    );
    for holding in holdings {
        println!(
            "{:>4}  {:<12} {:>10} {:>12.2} {:>12.2}  {:<16}",
            holding.id(),
            holding.symbol(),
            holding.quantity(),
            holding.cost_basis(),
            holding.last_value(),
            format_refreshed(holding.last_refreshed_at())
        );
    }
}

fn format_refreshed(stamp: &Option<DateTime<Local>>) -> String {
    match stamp {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}
