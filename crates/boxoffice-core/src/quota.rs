//! # Quota Ledger
//!
//! Per-category remaining-inventory counters.
//!
//! ## Invariant
//! ```text
//! 0 <= remaining(category) <= CATEGORY_CAPACITY
//! remaining = capacity - (count of sales currently Charged in category)
//! ```
//! Only two operations mutate a counter: a successful sale takes one seat,
//! a refund releases one. The lower bound is enforced by [`QuotaLedger::take`]
//! returning an error; the upper bound is unreachable through the
//! Charged/Refunded state machine (every release pairs with an earlier take)
//! and is additionally watched by a debug assertion in [`QuotaLedger::release`].

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TicketCategory;
use crate::CATEGORY_CAPACITY;

/// Remaining sellable tickets per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaLedger {
    remaining: [u32; 3],
}

impl QuotaLedger {
    /// Creates a quota ledger with every category at full capacity.
    pub fn new() -> Self {
        QuotaLedger {
            remaining: [CATEGORY_CAPACITY; 3],
        }
    }

    /// Remaining tickets in a category.
    #[inline]
    pub fn remaining(&self, category: TicketCategory) -> u32 {
        self.remaining[category.index()]
    }

    /// Checks whether a category is sold out.
    #[inline]
    pub fn is_exhausted(&self, category: TicketCategory) -> bool {
        self.remaining(category) == 0
    }

    /// Takes one seat from a category. Fails when the category is sold out.
    pub fn take(&mut self, category: TicketCategory) -> CoreResult<()> {
        let slot = &mut self.remaining[category.index()];
        if *slot == 0 {
            return Err(CoreError::QuotaExhausted { category });
        }
        *slot -= 1;
        Ok(())
    }

    /// Releases one seat back into a category (refund only).
    ///
    /// The state machine makes over-release unreachable: a refund releases
    /// exactly the seat its sale took, and a sale refunds at most once.
    pub fn release(&mut self, category: TicketCategory) {
        let slot = &mut self.remaining[category.index()];
        debug_assert!(*slot < CATEGORY_CAPACITY, "quota release above capacity");
        *slot += 1;
    }
}

impl Default for QuotaLedger {
    fn default() -> Self {
        Self::new()
    }
}
