//! # Error Types
//!
//! Domain-specific error types for boxoffice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxoffice-core errors (this file)                                     │
//! │  ├── CoreError        - Business rejections (no state was mutated)     │
//! │  └── ValidationError  - Malformed operator input                       │
//! │                                                                         │
//! │  apps/console                                                          │
//! │  ├── ValidationError  → re-prompt until the input parses               │
//! │  ├── CoreError        → message to the operator, back to the menu      │
//! │  └── std::io::Error   → export failure, reported, state untouched      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (sale id, shortfall, ...)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;
use crate::types::{SaleStatus, TicketCategory};

// =============================================================================
// Core Error
// =============================================================================

/// Business rejections.
///
/// Every variant means the requested workflow terminated WITHOUT mutating
/// the sale ledger, the quota ledger or the session totals. None of these
/// is fatal; the caller reports and returns to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Buyer is below the minimum purchase age.
    #[error("buyer is {age}, minimum purchase age is {minimum}")]
    Underage { age: u8, minimum: u8 },

    /// No tickets left in the requested category.
    ///
    /// ## When This Occurs
    /// - All 100 seats of the category were sold and none refunded
    #[error("no remaining quota for {category} tickets")]
    QuotaExhausted { category: TicketCategory },

    /// Tendered amount does not cover the ticket price.
    ///
    /// ## User Workflow
    /// ```text
    /// Amount prompt: 7000.00
    ///      │
    ///      ▼
    /// price = 7200.00 (VIP, senior discount)
    ///      │
    ///      ▼
    /// InsufficientPayment { price, paid, shortfall: 200.00 }
    ///      │
    ///      ▼
    /// Console shows: "Insufficient payment. Short: 200.00"
    /// ```
    #[error("insufficient payment: price {price}, paid {paid}, short {shortfall}")]
    InsufficientPayment {
        price: Money,
        paid: Money,
        shortfall: Money,
    },

    /// No sale exists with the given id.
    #[error("no sale with id {0}")]
    SaleNotFound(u32),

    /// The sale is not in the Charged state, so it cannot be refunded.
    ///
    /// Guards against double refunds: Charged → Refunded happens at most
    /// once and there is no transition back.
    #[error("sale {sale_id} is {status}, only charged sales can be refunded")]
    NotRefundable { sale_id: u32, status: SaleStatus },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Malformed operator input.
///
/// Produced by the pure predicates in [`crate::validation`]; the console
/// layer reacts by re-prompting, so these never cross a workflow boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    /// Input is not a valid integer.
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Amount failed to parse or is not strictly positive.
    #[error("{field} must be a positive amount like 5000 or 5000.50")]
    InvalidAmount { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::Underage {
            age: 15,
            minimum: 16,
        };
        assert_eq!(err.to_string(), "buyer is 15, minimum purchase age is 16");

        let err = CoreError::QuotaExhausted {
            category: TicketCategory::Vip,
        };
        assert_eq!(err.to_string(), "no remaining quota for VIP tickets");

        let err = CoreError::InsufficientPayment {
            price: Money::from_minor(720_000),
            paid: Money::from_minor(700_000),
            shortfall: Money::from_minor(20_000),
        };
        assert_eq!(
            err.to_string(),
            "insufficient payment: price 7200.00, paid 7000.00, short 200.00"
        );
    }

    #[test]
    fn test_not_refundable_reports_current_status() {
        let err = CoreError::NotRefundable {
            sale_id: 1,
            status: SaleStatus::Refunded,
        };
        assert_eq!(
            err.to_string(),
            "sale 1 is REFUNDED, only charged sales can be refunded"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name must not be empty");

        let err = ValidationError::OutOfRange {
            field: "age",
            min: 1,
            max: 120,
        };
        assert_eq!(err.to_string(), "age must be between 1 and 120");
    }
}
