//! # Domain Types
//!
//! Core domain types used throughout the box office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Operator     │   │      Sale       │   │  SaleRequest    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  id (u32, seq)  │   │  buyer fields   │       │
//! │  │  surname        │   │  buyer fields   │   │  category       │       │
//! │  │  session_start  │   │  price / paid   │   │  amount_paid    │       │
//! │  └─────────────────┘   │  status + times │   │  method         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ TicketCategory  │   │   SaleStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  General        │   │  Charged        │   │  Cash           │       │
//! │  │  Student        │   │  Refunded       │   │  Transfer       │       │
//! │  │  Vip            │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sale ids are sequential integers starting at 1 and are never reused,
//! even after a refund. There is no UUID layer: one process, one session,
//! one id counter.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Operator
// =============================================================================

/// The person running the till. Created once at startup, immutable for
/// the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    pub surname: String,
    pub session_start: DateTime<Local>,
}

impl Operator {
    /// Creates an operator with the session clock started now.
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Operator {
            name: name.into(),
            surname: surname.into(),
            session_start: Local::now(),
        }
    }
}

// =============================================================================
// Ticket Category
// =============================================================================

/// The three ticket categories sold at the event.
///
/// A closed enum instead of string keys: quota tables, revenue tables and
/// statistics are `[T; 3]` arrays indexed by [`TicketCategory::index`],
/// so an unrecognized category cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    General,
    Student,
    Vip,
}

impl TicketCategory {
    /// All categories in their fixed enumeration order.
    ///
    /// This order is load-bearing: statistics tie-breaks, report sections
    /// and the console category picker all follow it.
    pub const ALL: [TicketCategory; 3] =
        [TicketCategory::General, TicketCategory::Student, TicketCategory::Vip];

    /// Stable index into per-category `[T; 3]` tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TicketCategory::General => 0,
            TicketCategory::Student => 1,
            TicketCategory::Vip => 2,
        }
    }

    /// Human-readable label, as printed on reports and menus.
    pub const fn label(self) -> &'static str {
        match self {
            TicketCategory::General => "General",
            TicketCategory::Student => "Student",
            TicketCategory::Vip => "VIP",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a registered sale.
///
/// There is no Draft/pending state: a sale only exists once payment has
/// been collected, and the single allowed transition is
/// Charged → Refunded (exactly once, never back).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Payment collected and not refunded.
    Charged,
    /// Payment returned by policy (refund amount = original price).
    Refunded,
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaleStatus::Charged => "CHARGED",
            SaleStatus::Refunded => "REFUNDED",
        };
        f.pad(label)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Bank transfer shown on the buyer's phone.
    Transfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Transfer => "TRANSFER",
        };
        f.pad(label)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A registered, paid-for ticket sale.
///
/// ## Invariants
/// - Every field except `status`, `refunded_at` and `refunded_amount` is
///   frozen at creation time (snapshot pattern: the price on the record is
///   the price that was charged, whatever the tariff table does later)
/// - `change = amount_paid - price`, computed once
/// - `refunded_at`/`refunded_amount` stay empty/zero until the one allowed
///   Charged → Refunded transition, then are fixed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Sequential id, unique for the session, never reused.
    pub id: u32,
    pub name: String,
    pub surname: String,
    pub age: u8,
    pub category: TicketCategory,
    /// Final price at sale time (senior discount already applied).
    pub price: Money,
    /// Amount tendered; always >= price, or the sale would not exist.
    pub amount_paid: Money,
    pub method: PaymentMethod,
    /// Change given at sale time; not reclaimed on refund.
    pub change: Money,
    pub charged_at: DateTime<Local>,
    pub status: SaleStatus,
    pub refunded_at: Option<DateTime<Local>>,
    /// Zero until refunded, then equal to `price` by policy.
    pub refunded_amount: Money,
}

impl Sale {
    /// Checks whether the payment is still retained.
    #[inline]
    pub fn is_charged(&self) -> bool {
        self.status == SaleStatus::Charged
    }
}

// =============================================================================
// Sale Request
// =============================================================================

/// Validated parameters for registering a sale.
///
/// The console layer assembles this from its prompts; tests build it
/// directly. Carrying the tendered amount here is what fuses charging and
/// registering into one transaction: there is no way to ask the core for
/// an unpaid sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    pub name: String,
    pub surname: String,
    pub age: u8,
    pub category: TicketCategory,
    pub amount_paid: Money,
    pub method: PaymentMethod,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_indexes() {
        for (i, category) in TicketCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(TicketCategory::ALL[0], TicketCategory::General);
        assert_eq!(TicketCategory::ALL[2], TicketCategory::Vip);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(TicketCategory::Vip.to_string(), "VIP");
        assert_eq!(SaleStatus::Charged.to_string(), "CHARGED");
        assert_eq!(SaleStatus::Refunded.to_string(), "REFUNDED");
        assert_eq!(PaymentMethod::Transfer.to_string(), "TRANSFER");
    }

    #[test]
    fn test_display_padding_for_report_columns() {
        assert_eq!(format!("{:<10}", TicketCategory::Student), "Student   ");
        assert_eq!(format!("{:<8}", SaleStatus::Charged), "CHARGED ");
    }

    #[test]
    fn test_operator_session_start_is_set() {
        let operator = Operator::new("Ana", "Gomez");
        assert_eq!(operator.name, "Ana");
        assert_eq!(operator.surname, "Gomez");
        assert!(operator.session_start <= Local::now());
    }
}
