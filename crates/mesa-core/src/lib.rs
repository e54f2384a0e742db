//! # mesa-core: Pure Business Logic for Mesa
//!
//! This crate is the **heart** of Mesa, a small restaurant ordering
//! workflow. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Mesa Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/cli (driver)                          │   │
//! │  │     seed catalog ──► build orders ──► drain queue ──► settle   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ mesa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │  menu   │ │  order  │ │ payment │ │  queue  │  │   │
//! │  │   │  Money  │ │MenuItem │ │  Order  │ │ Card /  │ │ Order-  │  │   │
//! │  │   │  cents  │ │Category │ │ pricing │ │  Cash   │ │ Manager │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - Menu items with category-specific attributes
//! - [`catalog`] - Category-keyed catalog of name/price records (boundary)
//! - [`order`] - Orders, line snapshots, and the beverage discount rule
//! - [`payment`] - Payment methods and settlement outcomes
//! - [`queue`] - FIFO order queue
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic aside from
//!    generated ids and timestamps
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::{MenuItem, Money, Order, PaymentMethod};
//!
//! let coke = MenuItem::beverage("Coke", Money::from_cents(250), "Medium")?;
//! let pasta = MenuItem::maincourse("Spaghetti", Money::from_cents(1200))?;
//!
//! let mut order = Order::new();
//! order.add_menu_item(&coke, 2)?;
//! order.add_menu_item(&pasta, 1)?;
//!
//! // Beverages are 10% off because the order has a main course
//! let total = order.calculate_total_price();
//! assert_eq!(total.cents(), 1650); // 2×2.50×0.9 + 12.00
//!
//! let settlement = PaymentMethod::cash(Money::from_cents(2000)).pay(total)?;
//! assert!(settlement.is_paid());
//! # Ok::<(), mesa_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod queue;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mesa_core::Money` instead of
// `use mesa_core::money::Money`

pub use catalog::{Catalog, MenuRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Category, ItemKind, MenuItem};
pub use money::Money;
pub use order::{Order, OrderLine, OrderTotals};
pub use payment::{PaymentMethod, Settlement};
pub use queue::OrderManager;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Beverage discount in basis points (1000 = 10%).
///
/// Applied per beverage line, only on orders containing at least one main
/// course.
pub const BEVERAGE_DISCOUNT_BPS: u32 = 1000;

/// Maximum lines allowed in a single order.
///
/// Prevents runaway orders; a table does not order a hundred distinct
/// dishes.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Fat-finger protection (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
