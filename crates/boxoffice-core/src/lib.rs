//! # boxoffice-core: Pure Business Logic for the Box Office POS
//!
//! This crate is the **heart** of the box office. It contains the sale and
//! refund ledger, quota accounting, statistics and report rendering as
//! pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Box Office Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/console (terminal UI)                     │   │
//! │  │    menu loop ──► prompts ──► confirmations ──► TXT export      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut BoxOffice                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ boxoffice-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │   quota   │  │   │
//! │  │   │   Sale    │  │   Money   │  │ BoxOffice │  │ remaining │  │   │
//! │  │   │  Operator │  │  parsing  │  │  refund   │  │ take/rel. │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   stats   │  │  report   │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO TERMINAL • NO FILES • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **One session object**: every piece of mutable state lives in
//!    [`BoxOffice`], passed by `&mut` - no globals, no setup/teardown
//! 2. **No I/O**: terminal, file system and network access are FORBIDDEN
//!    here; even the report is rendered to a `String`
//! 3. **Integer Money**: all monetary values are minor units (i64), never
//!    floats
//! 4. **Explicit Errors**: rejections are typed enum variants, never
//!    strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use boxoffice_core::{BoxOffice, Money, Operator, PaymentMethod, SaleRequest, TicketCategory};
//!
//! let mut office = BoxOffice::open(Operator::new("Ana", "Gomez"));
//! let sale = office.register_sale(SaleRequest {
//!     name: "Luis".into(),
//!     surname: "Perez".into(),
//!     age: 25,
//!     category: TicketCategory::General,
//!     amount_paid: Money::from_minor(500_000),
//!     method: PaymentMethod::Cash,
//! }).unwrap();
//!
//! assert_eq!(sale.id, 1);
//! assert_eq!(office.quota().remaining(TicketCategory::General), 99);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod history;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod quota;
pub mod report;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boxoffice_core::BoxOffice` instead of
// `use boxoffice_core::ledger::BoxOffice`

pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{HistoryEntry, HistoryLog};
pub use ledger::{BoxOffice, SaleLedger, SessionTotals};
pub use money::Money;
pub use quota::QuotaLedger;
pub use stats::Statistics;
pub use types::{Operator, PaymentMethod, Sale, SaleRequest, SaleStatus, TicketCategory};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tickets available per category at session start.
pub const CATEGORY_CAPACITY: u32 = 100;

/// Nobody below this age may buy a ticket at all.
pub const MIN_PURCHASE_AGE: u8 = 16;

/// From this age the senior discount applies.
pub const SENIOR_AGE: u8 = 60;

/// Senior discount in basis points (2000 = 20%, i.e. price × 0.8).
pub const SENIOR_DISCOUNT_BPS: u32 = 2000;

/// Lowest age accepted as input at all.
pub const MIN_AGE: u8 = 1;

/// Highest age accepted as input.
pub const MAX_AGE: u8 = 120;

/// Timestamp format used in history entries and reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in default export filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
