//! # Orders
//!
//! An order is an append-only sequence of line entries, each a snapshot of a
//! menu item taken at add time, plus the one non-trivial pricing rule in the
//! system.
//!
//! ## Pricing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Conditional Beverage Discount                        │
//! │                                                                         │
//! │  calculate_total_price()                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  has_maincourse = any line tagged Maincourse?                          │
//! │       │                                                                 │
//! │       ├── yes: Beverage lines contribute line_total × 90%              │
//! │       │        everything else contributes line_total                  │
//! │       │                                                                 │
//! │       └── no:  every line contributes line_total                       │
//! │                                                                         │
//! │  Example: 2×Coke($2.50) + 1×Spring Rolls($5.00) + 1×Spaghetti($12.00) │
//! │           = 2×2.50×0.9 + 5.00 + 12.00 = $21.50                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! Lines freeze the item's name, price, category and detail when added
//! (the same price-freezing the POS cart does for products), so repricing a
//! `MenuItem` afterwards never retroactively changes an order's total. The
//! total itself is recomputed on every call, never cached.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::menu::{Category, MenuItem};
use crate::money::Money;
use crate::validation::validate_quantity;
use crate::{BEVERAGE_DISCOUNT_BPS, MAX_ITEM_QUANTITY, MAX_ORDER_LINES};

// =============================================================================
// Order Line
// =============================================================================

/// A line entry in an order.
///
/// ## Design Notes
/// Holds a frozen copy of the menu item data at the time of adding, not a
/// reference to the item. This breaks the aliasing where mutating a shared
/// item would silently change every order it appears in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Category tag at time of adding (frozen). Drives the discount rule.
    pub category: Category,

    /// Variant detail at time of adding (beverage size or appetizer
    /// portion size), rendered in parentheses on the receipt.
    pub detail: Option<String>,

    /// Quantity ordered. Always >= 1.
    pub quantity: i64,

    /// When this line was added.
    pub added_at: DateTime<Utc>,
}

impl OrderLine {
    /// Creates a line by snapshotting a menu item.
    fn from_item(item: &MenuItem, quantity: i64) -> Self {
        OrderLine {
            name: item.name().to_string(),
            unit_price_cents: item.price().cents(),
            category: item.category(),
            detail: item.kind().detail().map(str::to_string),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total before any discount: `unit_price × quantity`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

/// Renders as `"<quantity>x <name> - $<unit price>"` with the variant detail
/// in parentheses when present, e.g. `2x Coke - $2.50 (Medium)`.
impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {} - {}", self.quantity, self.name, self.unit_price())?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// ## Invariants
/// - Lines are append-only; insertion order is preserved (it is significant
///   for display, never for pricing)
/// - Every line has `1 <= quantity <= MAX_ITEM_QUANTITY`
/// - At most `MAX_ORDER_LINES` lines
/// - The same item added twice stays two separate lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Line entries in insertion order.
    lines: Vec<OrderLine>,

    /// When the order was opened.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item to the order, snapshotting its current state.
    ///
    /// ## Errors
    /// - `CoreError::InvalidQuantity` for `quantity <= 0` or above
    ///   `MAX_ITEM_QUANTITY`. The original workflow accepted any quantity;
    ///   rejecting non-positive ones here is a deliberate hardening, since a
    ///   negative line would silently subtract from the bill.
    /// - `CoreError::OrderTooLarge` when the order already has
    ///   `MAX_ORDER_LINES` lines.
    ///
    /// On error the order is unchanged.
    pub fn add_menu_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity).map_err(|_| CoreError::InvalidQuantity {
            requested: quantity,
            max: MAX_ITEM_QUANTITY,
        })?;

        if self.lines.len() >= MAX_ORDER_LINES {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_LINES,
            });
        }

        self.lines.push(OrderLine::from_item(item, quantity));
        Ok(())
    }

    /// Returns the line entries in insertion order.
    #[inline]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the order has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Checks whether any line is a main course.
    ///
    /// This is the discount eligibility test: beverages are only discounted
    /// on orders that include a main course.
    pub fn has_maincourse(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.category == Category::Maincourse)
    }

    /// Calculates the total bill, applying the conditional beverage discount.
    ///
    /// Single pass over the lines: when the order contains at least one main
    /// course, each beverage line contributes its line total minus 10%
    /// (`BEVERAGE_DISCOUNT_BPS`); every other line, and every line on orders
    /// without a main course, contributes its line total unchanged.
    ///
    /// Recomputed on demand so it always reflects the current lines.
    pub fn calculate_total_price(&self) -> Money {
        let discount_beverages = self.has_maincourse();

        let mut total = Money::zero();
        for line in &self.lines {
            if discount_beverages && line.category == Category::Beverage {
                total += line.line_total().discount(BEVERAGE_DISCOUNT_BPS);
            } else {
                total += line.line_total();
            }
        }
        total
    }

    /// Returns the totals summary for this order.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from(self)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one line per entry, in insertion order.
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Totals summary for receipts and API responses.
///
/// `total_cents` is always `subtotal_cents - discount_cents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    /// Sum of all line totals before any discount.
    pub subtotal_cents: i64,
    /// Beverage discount actually taken (zero without a main course).
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        let subtotal: Money = order
            .lines()
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        let total = order.calculate_total_price();

        OrderTotals {
            line_count: order.line_count(),
            total_quantity: order.lines().iter().map(|l| l.quantity).sum(),
            subtotal_cents: subtotal.cents(),
            discount_cents: (subtotal - total).cents(),
            total_cents: total.cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coke() -> MenuItem {
        MenuItem::beverage("Coke", Money::from_cents(250), "Medium").unwrap()
    }

    fn spring_rolls() -> MenuItem {
        MenuItem::appetizer("Spring Rolls", Money::from_cents(500), "6 pieces").unwrap()
    }

    fn spaghetti() -> MenuItem {
        MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap()
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.line_count(), 0);
        assert_eq!(order.calculate_total_price(), Money::zero());
    }

    #[test]
    fn test_total_with_maincourse_discounts_beverages() {
        // Scenario: 2×Beverage($2.50) + 1×Appetizer($5.00) + 1×Maincourse($12.00)
        // = 2×2.50×0.9 + 5.00 + 12.00 = $21.50
        let mut order = Order::new();
        order.add_menu_item(&coke(), 2).unwrap();
        order.add_menu_item(&spring_rolls(), 1).unwrap();
        order.add_menu_item(&spaghetti(), 1).unwrap();

        assert_eq!(order.calculate_total_price().cents(), 2150);
    }

    #[test]
    fn test_total_without_maincourse_has_no_discount() {
        // Scenario: 1×Beverage($2.50) + 2×Appetizer($5.00) = $12.50
        let mut order = Order::new();
        order.add_menu_item(&coke(), 1).unwrap();
        order.add_menu_item(&spring_rolls(), 2).unwrap();

        assert!(!order.has_maincourse());
        assert_eq!(order.calculate_total_price().cents(), 1250);
    }

    #[test]
    fn test_discount_applies_per_beverage_line() {
        // Two separate beverage lines are each discounted
        let mut order = Order::new();
        order.add_menu_item(&coke(), 1).unwrap();
        order.add_menu_item(&coke(), 1).unwrap();
        order.add_menu_item(&spaghetti(), 1).unwrap();

        // 250×0.9 + 250×0.9 + 1200 = 225 + 225 + 1200
        assert_eq!(order.calculate_total_price().cents(), 1650);
    }

    #[test]
    fn test_maincourse_anywhere_in_order_triggers_discount() {
        // Insertion order is irrelevant for pricing
        let mut order = Order::new();
        order.add_menu_item(&spaghetti(), 1).unwrap();
        order.add_menu_item(&coke(), 2).unwrap();

        assert_eq!(order.calculate_total_price().cents(), 1200 + 450);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut order = Order::new();

        let zero = order.add_menu_item(&coke(), 0);
        assert!(matches!(zero, Err(CoreError::InvalidQuantity { .. })));

        let negative = order.add_menu_item(&coke(), -2);
        assert!(matches!(negative, Err(CoreError::InvalidQuantity { .. })));

        // A rejected add leaves the order unchanged
        assert!(order.is_empty());
    }

    #[test]
    fn test_oversized_quantity_rejected() {
        let mut order = Order::new();
        assert!(order.add_menu_item(&coke(), MAX_ITEM_QUANTITY).is_ok());
        assert!(order.add_menu_item(&coke(), MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_order_line_cap() {
        let mut order = Order::new();
        let item = coke();
        for _ in 0..MAX_ORDER_LINES {
            order.add_menu_item(&item, 1).unwrap();
        }
        let result = order.add_menu_item(&item, 1);
        assert!(matches!(result, Err(CoreError::OrderTooLarge { .. })));
        assert_eq!(order.line_count(), MAX_ORDER_LINES);
    }

    #[test]
    fn test_lines_snapshot_item_state() {
        let mut item = coke();
        let mut order = Order::new();
        order.add_menu_item(&item, 2).unwrap();

        let before = order.calculate_total_price();

        // Repricing the item after the fact must not touch the order
        item.set_price(Money::from_cents(9900)).unwrap();
        item.set_name("Mega Coke").unwrap();

        assert_eq!(order.calculate_total_price(), before);
        assert_eq!(order.lines()[0].name, "Coke");
        assert_eq!(order.lines()[0].unit_price_cents, 250);
    }

    #[test]
    fn test_duplicate_items_stay_separate_lines() {
        let mut order = Order::new();
        order.add_menu_item(&coke(), 1).unwrap();
        order.add_menu_item(&coke(), 1).unwrap();

        assert_eq!(order.line_count(), 2);
    }

    #[test]
    fn test_totals_summary() {
        let mut order = Order::new();
        order.add_menu_item(&coke(), 2).unwrap();
        order.add_menu_item(&spring_rolls(), 1).unwrap();
        order.add_menu_item(&spaghetti(), 1).unwrap();

        let totals = order.totals();
        assert_eq!(totals.line_count, 3);
        assert_eq!(totals.total_quantity, 4);
        assert_eq!(totals.subtotal_cents, 2200);
        assert_eq!(totals.discount_cents, 50);
        assert_eq!(totals.total_cents, 2150);
        assert_eq!(
            totals.total_cents,
            totals.subtotal_cents - totals.discount_cents
        );
    }

    #[test]
    fn test_display_renders_lines_in_insertion_order() {
        let mut order = Order::new();
        order.add_menu_item(&coke(), 2).unwrap();
        order.add_menu_item(&spring_rolls(), 1).unwrap();
        order.add_menu_item(&spaghetti(), 1).unwrap();

        let rendered = order.to_string();
        assert_eq!(
            rendered,
            "2x Coke - $2.50 (Medium)\n\
             1x Spring Rolls - $5.00 (6 pieces)\n\
             1x Spaghetti - $12.00"
        );
    }
}
