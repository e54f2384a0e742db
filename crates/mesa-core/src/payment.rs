//! # Payments
//!
//! Payment methods and their settlement outcomes.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Payment Settlement                                 │
//! │                                                                         │
//! │  PaymentMethod::pay(amount)                                             │
//! │       │                                                                 │
//! │       ├── amount < 0 ──────────► Err(InvalidPaymentAmount)             │
//! │       │                                                                 │
//! │       ├── Card { .. } ─────────► Paid { reference: "****1234" }        │
//! │       │    (always succeeds, no decline simulation)                    │
//! │       │                                                                 │
//! │       └── Cash { tendered }                                             │
//! │            ├── tendered >= amount ──► Paid { change }                  │
//! │            └── tendered <  amount ──► Insufficient { shortfall }       │
//! │                 (a normal outcome, NOT an error)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The method set is a closed enum rather than an abstract base with a
//! not-implemented default: there is no "abstract payment" value to invoke,
//! so that failure mode cannot exist at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// A way to settle an order total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment. The number and cvv are stored, never validated; only
    /// the last four digits of the number ever leave this type.
    Card { card_number: String, cvv: u32 },

    /// Cash payment with the amount the customer handed over.
    Cash { tendered: Money },
}

impl PaymentMethod {
    /// Creates a card payment method.
    pub fn card(card_number: impl Into<String>, cvv: u32) -> Self {
        PaymentMethod::Card {
            card_number: card_number.into(),
            cvv,
        }
    }

    /// Creates a cash payment method.
    pub fn cash(tendered: Money) -> Self {
        PaymentMethod::Cash { tendered }
    }

    /// Settles the given amount.
    ///
    /// - Card always succeeds and reports the masked card as its reference.
    /// - Cash reports `Paid` with change when enough was tendered, or
    ///   `Insufficient` with the shortfall otherwise. The insufficient case
    ///   is data, not an error.
    ///
    /// ## Errors
    /// `CoreError::InvalidPaymentAmount` for a negative amount. Zero is
    /// legal (a fully comped order still gets settled).
    pub fn pay(&self, amount: Money) -> CoreResult<Settlement> {
        if amount.is_negative() {
            return Err(CoreError::InvalidPaymentAmount {
                cents: amount.cents(),
            });
        }

        let settlement = match self {
            PaymentMethod::Card { card_number, .. } => Settlement::Paid {
                amount_cents: amount.cents(),
                change_cents: 0,
                reference: Some(mask_card_number(card_number)),
                settled_at: Utc::now(),
            },
            PaymentMethod::Cash { tendered } => {
                if *tendered >= amount {
                    Settlement::Paid {
                        amount_cents: amount.cents(),
                        change_cents: (*tendered - amount).cents(),
                        reference: None,
                        settled_at: Utc::now(),
                    }
                } else {
                    Settlement::Insufficient {
                        amount_cents: amount.cents(),
                        shortfall_cents: (amount - *tendered).cents(),
                        settled_at: Utc::now(),
                    }
                }
            }
        };

        Ok(settlement)
    }
}

/// Masks a card number down to its last four digits.
///
/// Numbers shorter than four characters are masked entirely.
fn mask_card_number(card_number: &str) -> String {
    let len = card_number.chars().count();
    if len < 4 {
        return "****".to_string();
    }
    let last4: String = card_number.chars().skip(len - 4).collect();
    format!("****{}", last4)
}

// =============================================================================
// Settlement
// =============================================================================

/// The outcome of a `pay()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Settlement {
    /// The amount was covered.
    Paid {
        /// Amount charged in cents.
        amount_cents: i64,
        /// Change due to the customer (always 0 for card).
        change_cents: i64,
        /// External reference: the masked card for card payments.
        reference: Option<String>,
        settled_at: DateTime<Utc>,
    },

    /// Tendered cash did not cover the amount. Nothing was charged.
    Insufficient {
        /// Amount that was due in cents.
        amount_cents: i64,
        /// How much more cash is needed.
        shortfall_cents: i64,
        settled_at: DateTime<Utc>,
    },
}

impl Settlement {
    /// Checks whether the amount was covered.
    pub fn is_paid(&self) -> bool {
        matches!(self, Settlement::Paid { .. })
    }

    /// Returns the change due, if the settlement succeeded.
    pub fn change(&self) -> Option<Money> {
        match self {
            Settlement::Paid { change_cents, .. } => Some(Money::from_cents(*change_cents)),
            Settlement::Insufficient { .. } => None,
        }
    }

    /// Returns the shortfall, if the settlement failed to cover the amount.
    pub fn shortfall(&self) -> Option<Money> {
        match self {
            Settlement::Paid { .. } => None,
            Settlement::Insufficient {
                shortfall_cents, ..
            } => Some(Money::from_cents(*shortfall_cents)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_payment_always_succeeds() {
        let card = PaymentMethod::card("4111111111111234", 123);
        let settlement = card.pay(Money::from_cents(2150)).unwrap();

        assert!(settlement.is_paid());
        assert_eq!(settlement.change(), Some(Money::zero()));
        match settlement {
            Settlement::Paid {
                amount_cents,
                reference,
                ..
            } => {
                assert_eq!(amount_cents, 2150);
                assert_eq!(reference.as_deref(), Some("****1234"));
            }
            _ => panic!("card settlement must be Paid"),
        }
    }

    #[test]
    fn test_card_reference_never_leaks_full_number() {
        let card = PaymentMethod::card("4111111111111234", 123);
        let settlement = card.pay(Money::from_cents(100)).unwrap();
        if let Settlement::Paid {
            reference: Some(r), ..
        } = settlement
        {
            assert_eq!(r, "****1234");
            assert!(!r.contains("4111"));
        } else {
            panic!("expected a paid settlement with a reference");
        }
    }

    #[test]
    fn test_mask_short_card_number() {
        assert_eq!(mask_card_number("12"), "****");
        assert_eq!(mask_card_number("1234"), "****1234");
    }

    #[test]
    fn test_cash_with_sufficient_funds_reports_change() {
        let cash = PaymentMethod::cash(Money::from_cents(2000));
        let settlement = cash.pay(Money::from_cents(1250)).unwrap();

        assert!(settlement.is_paid());
        assert_eq!(settlement.change(), Some(Money::from_cents(750)));
        assert_eq!(settlement.shortfall(), None);
    }

    #[test]
    fn test_cash_exact_amount_gives_zero_change() {
        let cash = PaymentMethod::cash(Money::from_cents(1250));
        let settlement = cash.pay(Money::from_cents(1250)).unwrap();

        assert!(settlement.is_paid());
        assert_eq!(settlement.change(), Some(Money::zero()));
    }

    #[test]
    fn test_cash_with_insufficient_funds_reports_shortfall() {
        // Scenario: tendered $20.00 against a $21.50 bill → short $1.50
        let cash = PaymentMethod::cash(Money::from_cents(2000));
        let settlement = cash.pay(Money::from_cents(2150)).unwrap();

        assert!(!settlement.is_paid());
        assert_eq!(settlement.shortfall(), Some(Money::from_cents(150)));
        assert_eq!(settlement.change(), None);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let cash = PaymentMethod::cash(Money::from_cents(2000));
        let result = cash.pay(Money::from_cents(-1));
        assert!(matches!(
            result,
            Err(CoreError::InvalidPaymentAmount { cents: -1 })
        ));
    }

    #[test]
    fn test_zero_amount_is_legal() {
        let card = PaymentMethod::card("4111111111111234", 123);
        assert!(card.pay(Money::zero()).unwrap().is_paid());

        // Zero cash covers a zero bill
        let broke = PaymentMethod::cash(Money::zero());
        assert!(broke.pay(Money::zero()).unwrap().is_paid());
    }
}
