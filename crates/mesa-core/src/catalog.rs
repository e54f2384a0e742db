//! # Menu Catalog
//!
//! The category-keyed store of purchasable item records. This is boundary
//! glue, not pricing core: it supplies the name/price data that seeds
//! `MenuItem` instances.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog ──(name, price)──► MenuItem ──snapshot──► OrderLine           │
//! │                                                                         │
//! │  add_item      append a record under a category                        │
//! │  update_item   first name match wins; renames and reprices             │
//! │  delete_item   removes ALL matching records                            │
//! │  items         read-only view of the whole mapping                     │
//! │  menu_item     record + variant detail → validated MenuItem            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is deliberately permissive: records store raw names and
//! prices with no uniqueness constraint and no validation beyond the closed
//! category key. Validation happens at the `menu_item` seam, where a record
//! becomes a `MenuItem` and the non-negative-price invariant kicks in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::menu::{Category, ItemKind, MenuItem};
use crate::money::Money;

// =============================================================================
// Menu Record
// =============================================================================

/// A raw name/price record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub name: String,
    pub price_cents: i64,
}

impl MenuRecord {
    /// Returns the price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Category-keyed menu catalog.
///
/// Records under each category keep their insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: HashMap<Category, Vec<MenuRecord>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            items: HashMap::new(),
        }
    }

    /// Appends a record under a category, creating the category on first use.
    pub fn add_item(&mut self, category: Category, name: impl Into<String>, price: Money) {
        self.items.entry(category).or_default().push(MenuRecord {
            name: name.into(),
            price_cents: price.cents(),
        });
    }

    /// Renames and reprices the first record matching `old_name`.
    ///
    /// Returns whether a match was found. Later records with the same name
    /// are untouched (first match wins).
    pub fn update_item(
        &mut self,
        category: Category,
        old_name: &str,
        new_name: impl Into<String>,
        new_price: Money,
    ) -> bool {
        if let Some(records) = self.items.get_mut(&category) {
            if let Some(record) = records.iter_mut().find(|r| r.name == old_name) {
                record.name = new_name.into();
                record.price_cents = new_price.cents();
                return true;
            }
        }
        false
    }

    /// Removes ALL records matching `name` under a category.
    ///
    /// Returns whether the category existed (matching the boundary contract:
    /// the result does not say whether anything was actually removed).
    pub fn delete_item(&mut self, category: Category, name: &str) -> bool {
        match self.items.get_mut(&category) {
            Some(records) => {
                records.retain(|r| r.name != name);
                true
            }
            None => false,
        }
    }

    /// Read-only view of the category → records mapping.
    pub fn items(&self) -> &HashMap<Category, Vec<MenuRecord>> {
        &self.items
    }

    /// Returns the first record matching `name` under a category.
    pub fn find(&self, category: Category, name: &str) -> Option<&MenuRecord> {
        self.items
            .get(&category)?
            .iter()
            .find(|r| r.name == name)
    }

    /// Builds a validated `MenuItem` from the first matching record.
    ///
    /// `detail` becomes the beverage size or appetizer portion size and is
    /// ignored for main courses.
    ///
    /// ## Errors
    /// - `CoreError::ItemNotFound` when no record matches
    /// - the `MenuItem` constructor errors if the stored record is invalid
    ///   (empty name, negative price) — the catalog itself never checks
    pub fn menu_item(
        &self,
        category: Category,
        name: &str,
        detail: &str,
    ) -> CoreResult<MenuItem> {
        let record = self
            .find(category, name)
            .ok_or_else(|| CoreError::ItemNotFound {
                category: category.to_string(),
                name: name.to_string(),
            })?;

        let kind = match category {
            Category::Beverage => ItemKind::Beverage {
                size: detail.to_string(),
            },
            Category::Appetizer => ItemKind::Appetizer {
                portion_size: detail.to_string(),
            },
            Category::Maincourse => ItemKind::Maincourse,
        };

        MenuItem::new(record.name.clone(), record.price(), kind)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
