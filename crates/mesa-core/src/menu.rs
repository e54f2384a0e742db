//! # Menu Items
//!
//! Purchasable items and their category-specific attributes.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Item Types                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    ItemKind     │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Beverage{size} │   │  Appetizer      │       │
//! │  │  price (Money)  │   │  Appetizer{     │   │  Maincourse     │       │
//! │  │  kind           │   │    portion_size}│   │  Beverage       │       │
//! │  │                 │   │  Maincourse     │   │  (closed set)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Instead of an inheritance hierarchy, the variant-specific attributes live
//! in a tagged `ItemKind` enum and the common name/price state lives on
//! `MenuItem` itself. The category tag set is closed: there is no free-text
//! category anywhere in the core.
//!
//! ## Invariant
//! `price >= 0` always. Both the constructors and `set_price` enforce it; a
//! rejected mutation leaves the prior state unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_cents};

// =============================================================================
// Category
// =============================================================================

/// The closed set of menu categories.
///
/// This is the tag the pricing rule dispatches on: an order containing at
/// least one `Maincourse` line discounts every `Beverage` line by 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appetizer,
    Maincourse,
    Beverage,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Appetizer => write!(f, "Appetizer"),
            Category::Maincourse => write!(f, "Maincourse"),
            Category::Beverage => write!(f, "Beverage"),
        }
    }
}

// =============================================================================
// Item Kind
// =============================================================================

/// Category-specific attributes of a menu item.
///
/// - `Beverage` carries a free-text size (e.g. "Small", "Large")
/// - `Appetizer` carries a free-text portion size (e.g. "6 pieces")
/// - `Maincourse` carries nothing extra
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    Beverage { size: String },
    Appetizer { portion_size: String },
    Maincourse,
}

impl ItemKind {
    /// Returns the category tag for this kind.
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Beverage { .. } => Category::Beverage,
            ItemKind::Appetizer { .. } => Category::Appetizer,
            ItemKind::Maincourse => Category::Maincourse,
        }
    }

    /// Returns the variant-specific attribute, if the variant has one.
    ///
    /// Used for display: the detail is rendered in parentheses after the
    /// price.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ItemKind::Beverage { size } => Some(size),
            ItemKind::Appetizer { portion_size } => Some(portion_size),
            ItemKind::Maincourse => None,
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable menu item.
///
/// Constructed once per catalog lookup or order line. Orders do NOT hold
/// references to menu items: adding an item to an order snapshots its state
/// (see `order::OrderLine`), so mutating an item afterwards never changes an
/// existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    price_cents: i64,
    #[serde(flatten)]
    kind: ItemKind,
}

impl MenuItem {
    /// Creates a menu item, validating name and price.
    ///
    /// ## Errors
    /// - `ValidationError::Required` if the name is empty
    /// - `CoreError::InvalidPrice` if the price is negative
    pub fn new(name: impl Into<String>, price: Money, kind: ItemKind) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price.cents()).map_err(|_| CoreError::InvalidPrice {
            cents: price.cents(),
        })?;

        Ok(MenuItem {
            name,
            price_cents: price.cents(),
            kind,
        })
    }

    /// Creates a beverage with a size ("Small", "Medium", "Large", ...).
    pub fn beverage(
        name: impl Into<String>,
        price: Money,
        size: impl Into<String>,
    ) -> CoreResult<Self> {
        MenuItem::new(name, price, ItemKind::Beverage { size: size.into() })
    }

    /// Creates an appetizer with a portion size ("6 pieces", "1 plate", ...).
    pub fn appetizer(
        name: impl Into<String>,
        price: Money,
        portion_size: impl Into<String>,
    ) -> CoreResult<Self> {
        MenuItem::new(
            name,
            price,
            ItemKind::Appetizer {
                portion_size: portion_size.into(),
            },
        )
    }

    /// Creates a main course (no extra attributes).
    pub fn maincourse(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        MenuItem::new(name, price, ItemKind::Maincourse)
    }

    /// Returns the item name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the item.
    ///
    /// ## Errors
    /// `ValidationError::Required` if the new name is empty; the stored name
    /// is left unchanged in that case.
    pub fn set_name(&mut self, name: impl Into<String>) -> CoreResult<()> {
        let name = name.into();
        validate_item_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Reprices the item.
    ///
    /// ## Errors
    /// `CoreError::InvalidPrice` if the new price is negative; the stored
    /// price is left unchanged in that case.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validate_price_cents(price.cents()).map_err(|_| CoreError::InvalidPrice {
            cents: price.cents(),
        })?;
        self.price_cents = price.cents();
        Ok(())
    }

    /// Returns the category-specific attributes.
    #[inline]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Returns the category tag.
    #[inline]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns the beverage size, if this item is a beverage.
    pub fn size(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Beverage { size } => Some(size),
            _ => None,
        }
    }

    /// Replaces the beverage size. Has no effect on non-beverage items.
    pub fn set_size(&mut self, size: impl Into<String>) {
        if let ItemKind::Beverage { size: s } = &mut self.kind {
            *s = size.into();
        }
    }

    /// Returns the appetizer portion size, if this item is an appetizer.
    pub fn portion_size(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Appetizer { portion_size } => Some(portion_size),
            _ => None,
        }
    }

    /// Replaces the appetizer portion size. Has no effect on other items.
    pub fn set_portion_size(&mut self, portion_size: impl Into<String>) {
        if let ItemKind::Appetizer { portion_size: p } = &mut self.kind {
            *p = portion_size.into();
        }
    }

    /// Total price for a given quantity: `price × quantity`.
    ///
    /// Quantity validation is the order's concern (adding a non-positive
    /// quantity to an order is rejected there); as a plain calculation this
    /// is pure multiplication.
    #[inline]
    pub fn total_price(&self, quantity: i64) -> Money {
        self.price() * quantity
    }
}

/// Renders as `"<name> - $<price>"`, with the variant detail in parentheses
/// when present:
///
/// ```text
/// Spaghetti - $12.00
/// Coke - $2.50 (Medium)
/// Spring Rolls - $5.00 (6 pieces)
/// ```
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price())?;
        if let Some(detail) = self.kind.detail() {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_category() {
        let coke = MenuItem::beverage("Coke", Money::from_cents(250), "Medium").unwrap();
        assert_eq!(coke.category(), Category::Beverage);
        assert_eq!(coke.size(), Some("Medium"));
        assert_eq!(coke.portion_size(), None);

        let rolls = MenuItem::appetizer("Spring Rolls", Money::from_cents(500), "6 pieces").unwrap();
        assert_eq!(rolls.category(), Category::Appetizer);
        assert_eq!(rolls.portion_size(), Some("6 pieces"));

        let pasta = MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap();
        assert_eq!(pasta.category(), Category::Maincourse);
        assert_eq!(pasta.kind().detail(), None);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(MenuItem::maincourse("", Money::from_cents(100)).is_err());
        assert!(MenuItem::maincourse("   ", Money::from_cents(100)).is_err());
    }

    #[test]
    fn test_negative_price_rejected_on_construction() {
        let result = MenuItem::maincourse("Spaghetti", Money::from_cents(-1));
        assert!(matches!(
            result,
            Err(CoreError::InvalidPrice { cents: -1 })
        ));
    }

    #[test]
    fn test_set_price_rejects_negative_and_keeps_state() {
        let mut item = MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap();

        let result = item.set_price(Money::from_cents(-500));
        assert!(matches!(result, Err(CoreError::InvalidPrice { .. })));
        // Prior price is untouched
        assert_eq!(item.price().cents(), 1200);

        item.set_price(Money::from_cents(1300)).unwrap();
        assert_eq!(item.price().cents(), 1300);

        // Zero is a legal price (complimentary item)
        item.set_price(Money::zero()).unwrap();
        assert_eq!(item.price(), Money::zero());
    }

    #[test]
    fn test_set_name_rejects_empty_and_keeps_state() {
        let mut item = MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap();

        assert!(item.set_name("").is_err());
        assert_eq!(item.name(), "Spaghetti");

        item.set_name("Lasagna").unwrap();
        assert_eq!(item.name(), "Lasagna");
    }

    #[test]
    fn test_variant_setters() {
        let mut coke = MenuItem::beverage("Coke", Money::from_cents(250), "Small").unwrap();
        coke.set_size("Large");
        assert_eq!(coke.size(), Some("Large"));

        // Setting a size on a main course is a no-op
        let mut pasta = MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap();
        pasta.set_size("Large");
        assert_eq!(pasta.size(), None);
    }

    #[test]
    fn test_total_price() {
        let coke = MenuItem::beverage("Coke", Money::from_cents(250), "Medium").unwrap();
        assert_eq!(coke.total_price(1).cents(), 250);
        assert_eq!(coke.total_price(4).cents(), 1000);

        let free = MenuItem::maincourse("Tap Water", Money::zero()).unwrap();
        assert_eq!(free.total_price(3), Money::zero());
    }

    #[test]
    fn test_display() {
        let coke = MenuItem::beverage("Coke", Money::from_cents(250), "Medium").unwrap();
        assert_eq!(coke.to_string(), "Coke - $2.50 (Medium)");

        let rolls = MenuItem::appetizer("Spring Rolls", Money::from_cents(500), "6 pieces").unwrap();
        assert_eq!(rolls.to_string(), "Spring Rolls - $5.00 (6 pieces)");

        let pasta = MenuItem::maincourse("Spaghetti", Money::from_cents(1200)).unwrap();
        assert_eq!(pasta.to_string(), "Spaghetti - $12.00");
    }
}
