//! # Mesa Demo Driver
//!
//! Walks the full ordering workflow end to end:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Demo Scenario                                    │
//! │                                                                         │
//! │  1. Seed the catalog      Coke $2.50 / Spring Rolls $5.00 /            │
//! │                           Spaghetti $12.00                             │
//! │  2. Build order #1        2×Coke + 1×Spring Rolls + 1×Spaghetti        │
//! │                           → $21.50 (beverages 10% off)                 │
//! │  3. Build order #2        1×Coke + 2×Spring Rolls                      │
//! │                           → $12.50 (no main course, no discount)       │
//! │  4. Queue both            strict FIFO                                  │
//! │  5. Drain & settle        #1 by card, #2 by cash                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Run with `cargo run -p mesa-cli`. Set `RUST_LOG=debug` for per-step
//! detail.

use mesa_core::{
    Catalog, Category, CoreResult, Money, Order, OrderManager, PaymentMethod, Settlement,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        warn!("demo failed: {err}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Respects `RUST_LOG` when set, defaulting to info-level output with debug
/// detail for the mesa crates.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mesa=debug,mesa_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> CoreResult<()> {
    // -------------------------------------------------------------------------
    // Seed the catalog
    // -------------------------------------------------------------------------
    let mut catalog = Catalog::new();
    catalog.add_item(Category::Beverage, "Coke", Money::from_cents(250));
    catalog.add_item(Category::Appetizer, "Spring Rolls", Money::from_cents(500));
    catalog.add_item(Category::Maincourse, "Spaghetti", Money::from_cents(1200));

    let snapshot = serde_json::to_string_pretty(catalog.items())
        .unwrap_or_else(|_| "<unserializable>".to_string());
    info!("menu:\n{snapshot}");

    // -------------------------------------------------------------------------
    // Build the orders from catalog records
    // -------------------------------------------------------------------------
    let coke = catalog.menu_item(Category::Beverage, "Coke", "Medium")?;
    let rolls = catalog.menu_item(Category::Appetizer, "Spring Rolls", "6 pieces")?;
    let pasta = catalog.menu_item(Category::Maincourse, "Spaghetti", "")?;

    let mut order1 = Order::new();
    order1.add_menu_item(&coke, 2)?;
    order1.add_menu_item(&rolls, 1)?;
    order1.add_menu_item(&pasta, 1)?;
    debug!(order = %order1.id, lines = order1.line_count(), "built order #1");

    let mut order2 = Order::new();
    order2.add_menu_item(&coke, 1)?;
    order2.add_menu_item(&rolls, 2)?;
    debug!(order = %order2.id, lines = order2.line_count(), "built order #2");

    // -------------------------------------------------------------------------
    // Queue and drain in arrival order
    // -------------------------------------------------------------------------
    let mut manager = OrderManager::new();
    manager.enqueue(order1);
    manager.enqueue(order2);
    info!(pending = manager.len(), "orders queued");

    // Settle the first order by card, the rest with a $20 bill
    let mut payments = vec![
        PaymentMethod::card("4111111111111234", 123),
        PaymentMethod::cash(Money::from_cents(2000)),
    ]
    .into_iter();

    while let Some(order) = manager.dequeue() {
        let total = order.calculate_total_price();
        info!("processing order {}:\n{order}", order.id);
        info!("total to pay: {total}");

        let Some(payment) = payments.next() else {
            warn!(order = %order.id, "no payment method left for order");
            continue;
        };

        match payment.pay(total)? {
            Settlement::Paid {
                change_cents,
                reference,
                ..
            } => {
                let reference = reference.as_deref().unwrap_or("cash");
                info!(
                    "paid {total} via {reference}, change {}",
                    Money::from_cents(change_cents)
                );
            }
            Settlement::Insufficient {
                shortfall_cents, ..
            } => {
                warn!(
                    "insufficient funds, need {} more",
                    Money::from_cents(shortfall_cents)
                );
            }
        }
    }

    info!(pending = manager.len(), "all orders processed");
    Ok(())
}
