//! # Statistics Engine
//!
//! Derives session statistics from a full scan of the sale ledger.
//! Read-only: nothing here mutates state.
//!
//! ## Two Different Populations - On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  revenue per category   →  Charged sales only                           │
//! │                            "how much money is currently retained"      │
//! │                                                                         │
//! │  count / average age    →  ALL sales, refunded included                 │
//! │                            "how many tickets were ever issued"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::ledger::SaleLedger;
use crate::money::Money;
use crate::types::{Sale, TicketCategory};

/// A buyer reference carried out of the ledger for the age extremes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerRef {
    pub sale_id: u32,
    pub name: String,
    pub surname: String,
    pub age: u8,
}

impl BuyerRef {
    fn from_sale(sale: &Sale) -> Self {
        BuyerRef {
            sale_id: sale.id,
            name: sale.name.clone(),
            surname: sale.surname.clone(),
            age: sale.age,
        }
    }
}

/// Session statistics. Per-category tables are indexed by
/// [`TicketCategory::index`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Revenue per category over Charged sales only.
    pub revenue_by_category: [Money; 3],
    /// Sale count per category, refunded included.
    pub sales_by_category: [u32; 3],
    /// Mean buyer age per category, refunded included; 0.0 for a category
    /// with no sales.
    pub avg_age_by_category: [f64; 3],
    /// Category with the highest sale count; ties go to the earliest in
    /// the fixed enumeration order.
    pub best_selling: TicketCategory,
    /// Lowest-age sale; ties go to the earliest in ledger order.
    pub youngest: BuyerRef,
    /// Highest-age sale; ties go to the earliest in ledger order.
    pub oldest: BuyerRef,
}

impl Statistics {
    /// Computes statistics, or `None` when the ledger is empty (the caller
    /// is expected to skip the whole section).
    pub fn from_ledger(ledger: &SaleLedger) -> Option<Self> {
        let sales = ledger.sales();
        let first = sales.first()?;

        let mut revenue = [Money::zero(); 3];
        let mut counts = [0u32; 3];
        let mut age_sums = [0u64; 3];
        let mut youngest = first;
        let mut oldest = first;

        for sale in sales {
            let i = sale.category.index();
            counts[i] += 1;
            age_sums[i] += sale.age as u64;
            if sale.is_charged() {
                revenue[i] += sale.price;
            }
            // Strict comparisons keep the first-encountered sale on ties
            if sale.age < youngest.age {
                youngest = sale;
            }
            if sale.age > oldest.age {
                oldest = sale;
            }
        }

        let mut avg_age = [0.0f64; 3];
        for i in 0..3 {
            if counts[i] > 0 {
                avg_age[i] = age_sums[i] as f64 / counts[i] as f64;
            }
        }

        let mut best_selling = TicketCategory::ALL[0];
        for category in TicketCategory::ALL {
            // Strict > keeps the earliest category in enumeration order
            if counts[category.index()] > counts[best_selling.index()] {
                best_selling = category;
            }
        }

        Some(Statistics {
            revenue_by_category: revenue,
            sales_by_category: counts,
            avg_age_by_category: avg_age,
            best_selling,
            youngest: BuyerRef::from_sale(youngest),
            oldest: BuyerRef::from_sale(oldest),
        })
    }
}
