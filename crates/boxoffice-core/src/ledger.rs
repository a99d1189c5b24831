//! # Sale Ledger & Session Workflows
//!
//! The accounting core: the append-only sale ledger, the running session
//! totals and the [`BoxOffice`] session object that owns every piece of
//! mutable state.
//!
//! ## The One Real Consistency Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY SALE IN THE LEDGER REPRESENTS MONEY ALREADY COLLECTED            │
//! │                                                                         │
//! │  There is no draft, no "pending", no unpaid record. Charging and       │
//! │  registering are one transaction:                                       │
//! │                                                                         │
//! │    check age ──► check quota ──► check payment ──► COMMIT              │
//! │                                                                         │
//! │  COMMIT applies six effects together, none observable in isolation:   │
//! │    1. allocate the next sequential id                                   │
//! │    2. construct the Sale with status = Charged                          │
//! │    3. append it to the sale ledger                                      │
//! │    4. take one seat from the quota ledger                               │
//! │    5. add the price to the session totals                               │
//! │    6. append a history entry                                            │
//! │                                                                         │
//! │  A failed check produces NO sale, NO quota change, NO totals change    │
//! │  and exactly one history entry describing the rejection.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded by construction: one operator, one terminal, one
//! `&mut BoxOffice` at a time. Atomicity here means "nothing between the
//! first effect and the last can fail", not locking.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::history::HistoryLog;
use crate::money::Money;
use crate::pricing;
use crate::quota::QuotaLedger;
use crate::types::{Operator, Sale, SaleRequest, SaleStatus};
use crate::MIN_PURCHASE_AGE;

// =============================================================================
// Sale Ledger
// =============================================================================

/// Append-only collection of sale records in insertion order.
///
/// Ids are allocated here, sequentially from 1. A record is mutable only
/// through [`BoxOffice::refund`], and only for the single
/// Charged → Refunded transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLedger {
    sales: Vec<Sale>,
    next_id: u32,
}

impl SaleLedger {
    pub fn new() -> Self {
        SaleLedger {
            sales: Vec::new(),
            next_id: 1,
        }
    }

    /// All sales, oldest first.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Looks a sale up by id.
    pub fn find(&self, id: u32) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Sale> {
        self.sales.iter_mut().find(|s| s.id == id)
    }

    /// Case-insensitive exact match on the buyer surname, in ledger order.
    pub fn find_by_surname(&self, surname: &str) -> Vec<&Sale> {
        let wanted = surname.trim().to_lowercase();
        self.sales
            .iter()
            .filter(|s| s.surname.trim().to_lowercase() == wanted)
            .collect()
    }

    /// Counts (charged, refunded) sales in one pass.
    pub fn status_counts(&self) -> (u32, u32) {
        let mut charged = 0;
        let mut refunded = 0;
        for sale in &self.sales {
            match sale.status {
                SaleStatus::Charged => charged += 1,
                SaleStatus::Refunded => refunded += 1,
            }
        }
        (charged, refunded)
    }

    /// Allocates the next id and appends a Charged sale built from the
    /// request. Returns the assigned id.
    fn append_charged(&mut self, request: SaleRequest, price: Money) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.sales.push(Sale {
            id,
            name: request.name,
            surname: request.surname,
            age: request.age,
            category: request.category,
            price,
            amount_paid: request.amount_paid,
            method: request.method,
            change: request.amount_paid - price,
            charged_at: Local::now(),
            status: SaleStatus::Charged,
            refunded_at: None,
            refunded_amount: Money::zero(),
        });
        id
    }
}

impl Default for SaleLedger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Session Totals
// =============================================================================

/// Running totals over the currently-Charged sales.
///
/// Maintained incrementally on every sale/refund, but always equal to what
/// [`SessionTotals::recompute`] derives from a full ledger scan - the
/// no-drift property the tests pin down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTotals {
    /// Sum of `price` over all sales with status = Charged.
    pub total_collected: Money,
    /// Count of sales with status = Charged.
    pub charged_count: u32,
}

impl SessionTotals {
    fn record_sale(&mut self, price: Money) {
        self.total_collected += price;
        self.charged_count += 1;
    }

    fn record_refund(&mut self, amount: Money) {
        self.total_collected -= amount;
        self.charged_count = self.charged_count.saturating_sub(1);
    }

    /// Derives the totals from scratch. Used to verify the incremental
    /// counters never drift.
    pub fn recompute(ledger: &SaleLedger) -> Self {
        let mut totals = SessionTotals::default();
        for sale in ledger.sales() {
            if sale.is_charged() {
                totals.total_collected += sale.price;
                totals.charged_count += 1;
            }
        }
        totals
    }
}

// =============================================================================
// Box Office Session
// =============================================================================

/// The whole mutable session state behind the menu: operator identity,
/// quota ledger, sale ledger, running totals and audit history.
///
/// One instance per process run, passed by `&mut` into every workflow.
/// No globals: tests build as many independent sessions as they like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxOffice {
    operator: Operator,
    quota: QuotaLedger,
    ledger: SaleLedger,
    totals: SessionTotals,
    history: HistoryLog,
}

impl BoxOffice {
    /// Opens a session for an operator and records it in the history.
    pub fn open(operator: Operator) -> Self {
        let mut history = HistoryLog::new();
        history.append(format!(
            "Operator session opened: {}, {}",
            operator.surname, operator.name
        ));
        BoxOffice {
            operator,
            quota: QuotaLedger::new(),
            ledger: SaleLedger::new(),
            totals: SessionTotals::default(),
            history,
        }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn quota(&self) -> &QuotaLedger {
        &self.quota
    }

    pub fn ledger(&self) -> &SaleLedger {
        &self.ledger
    }

    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Records a workflow-level event (operator cancellations, exports,
    /// register closing). State-changing operations log on their own.
    pub fn log_event(&mut self, text: impl Into<String>) {
        self.history.append(text);
    }

    /// Registers and charges a sale in one transaction.
    ///
    /// Checks run in fixed order - underage, quota, payment - and each
    /// failed check short-circuits with a typed rejection after writing
    /// one history entry. Only when every check has passed are the six
    /// commit effects applied; nothing past the commit point can fail.
    pub fn register_sale(&mut self, request: SaleRequest) -> CoreResult<&Sale> {
        if request.age < MIN_PURCHASE_AGE {
            self.history.append(format!(
                "Sale denied (under {MIN_PURCHASE_AGE}): {}, {}, age {}",
                request.surname, request.name, request.age
            ));
            return Err(CoreError::Underage {
                age: request.age,
                minimum: MIN_PURCHASE_AGE,
            });
        }

        if self.quota.is_exhausted(request.category) {
            self.history.append(format!(
                "Sale denied (no {} quota): {}, {}",
                request.category, request.surname, request.name
            ));
            return Err(CoreError::QuotaExhausted {
                category: request.category,
            });
        }

        let price = pricing::final_price(request.category, request.age);
        if request.amount_paid < price {
            let shortfall = price - request.amount_paid;
            self.history.append(format!(
                "Sale not registered (insufficient payment): {}, {}, paid {}, short {}",
                request.surname, request.name, request.amount_paid, shortfall
            ));
            return Err(CoreError::InsufficientPayment {
                price,
                paid: request.amount_paid,
                shortfall,
            });
        }

        // Commit point. The quota was checked above, so take() cannot fail
        // here, and everything after it is infallible.
        let category = request.category;
        let method = request.method;
        let paid = request.amount_paid;
        let surname = request.surname.clone();
        let name = request.name.clone();

        self.quota.take(category)?;
        let id = self.ledger.append_charged(request, price);
        self.totals.record_sale(price);
        self.history.append(format!(
            "Sale ID {id} ({category}) {surname}, {name} | price {price} | paid {paid} ({method}) | change {}",
            paid - price
        ));

        self.ledger.find(id).ok_or(CoreError::SaleNotFound(id))
    }

    /// Refunds a charged sale by id.
    ///
    /// The refund amount is fixed by policy to the sale's stored price,
    /// not the amount tendered: change handed over at sale time is not
    /// reclaimed. The four effects - state transition, quota release,
    /// totals adjustment, history entry - are applied as a unit.
    pub fn refund(&mut self, sale_id: u32) -> CoreResult<&Sale> {
        let sale = self
            .ledger
            .find_mut(sale_id)
            .ok_or(CoreError::SaleNotFound(sale_id))?;

        if sale.status != SaleStatus::Charged {
            return Err(CoreError::NotRefundable {
                sale_id,
                status: sale.status,
            });
        }

        let amount = sale.price;
        let category = sale.category;
        sale.status = SaleStatus::Refunded;
        sale.refunded_at = Some(Local::now());
        sale.refunded_amount = amount;

        self.quota.release(category);
        self.totals.record_refund(amount);
        self.history.append(format!(
            "Refund ID {sale_id} | returned {amount} | quota +1 {category}"
        ));

        self.ledger
            .find(sale_id)
            .ok_or(CoreError::SaleNotFound(sale_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, TicketCategory};
    use crate::CATEGORY_CAPACITY;

    fn office() -> BoxOffice {
        BoxOffice::open(Operator::new("Ana", "Gomez"))
    }

    fn request(age: u8, category: TicketCategory, paid_minor: i64) -> SaleRequest {
        SaleRequest {
            name: "Luis".into(),
            surname: "Perez".into(),
            age,
            category,
            amount_paid: Money::from_minor(paid_minor),
            method: PaymentMethod::Cash,
        }
    }

    fn assert_no_drift(office: &BoxOffice) {
        assert_eq!(office.totals(), SessionTotals::recompute(office.ledger()));
    }

    fn assert_quota_identity(office: &BoxOffice) {
        // remaining = capacity - (sales currently Charged in the category)
        for category in TicketCategory::ALL {
            let charged = office
                .ledger()
                .sales()
                .iter()
                .filter(|s| s.category == category && s.is_charged())
                .count() as u32;
            assert_eq!(
                office.quota().remaining(category),
                CATEGORY_CAPACITY - charged
            );
        }
    }

    #[test]
    fn test_scenario_a_exact_payment() {
        let mut office = office();
        let sale = office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();

        assert_eq!(sale.id, 1);
        assert_eq!(sale.status, SaleStatus::Charged);
        assert_eq!(sale.price, Money::from_minor(500_000));
        assert_eq!(sale.change, Money::zero());
        assert_eq!(sale.refunded_amount, Money::zero());
        assert!(sale.refunded_at.is_none());

        assert_eq!(office.quota().remaining(TicketCategory::General), 99);
        assert_eq!(office.totals().total_collected, Money::from_minor(500_000));
        assert_eq!(office.totals().charged_count, 1);
        assert_no_drift(&office);
    }

    #[test]
    fn test_scenario_b_senior_discount_with_short_payment() {
        let mut office = office();
        // VIP at 65: 9000.00 drops to 7200.00; 7000.00 tendered is short
        let err = office
            .register_sale(request(65, TicketCategory::Vip, 700_000))
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientPayment {
                price: Money::from_minor(720_000),
                paid: Money::from_minor(700_000),
                shortfall: Money::from_minor(20_000),
            }
        );
        assert!(office.ledger().is_empty());
        assert_eq!(office.quota().remaining(TicketCategory::Vip), 100);
        assert_eq!(office.totals(), SessionTotals::default());
    }

    #[test]
    fn test_scenario_c_refund_restores_quota_and_totals() {
        let mut office = office();
        office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();

        let refunded = office.refund(1).unwrap();
        assert_eq!(refunded.status, SaleStatus::Refunded);
        assert_eq!(refunded.refunded_amount, Money::from_minor(500_000));
        assert!(refunded.refunded_at.is_some());

        assert_eq!(office.quota().remaining(TicketCategory::General), 100);
        assert_eq!(office.totals().total_collected, Money::zero());
        assert_eq!(office.totals().charged_count, 0);
        assert_no_drift(&office);
        assert_quota_identity(&office);
    }

    #[test]
    fn test_scenario_d_double_refund_rejected() {
        let mut office = office();
        office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();
        office.refund(1).unwrap();

        let before_totals = office.totals();
        let before_quota = office.quota().remaining(TicketCategory::General);
        let before_history = office.history().entries().len();

        let err = office.refund(1).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotRefundable {
                sale_id: 1,
                status: SaleStatus::Refunded
            }
        );
        assert_eq!(office.totals(), before_totals);
        assert_eq!(office.quota().remaining(TicketCategory::General), before_quota);
        assert_eq!(office.history().entries().len(), before_history);
    }

    #[test]
    fn test_scenario_e_underage_rejected_for_every_category() {
        for category in TicketCategory::ALL {
            let mut office = office();
            let err = office.register_sale(request(15, category, 900_000)).unwrap_err();
            assert_eq!(
                err,
                CoreError::Underage {
                    age: 15,
                    minimum: MIN_PURCHASE_AGE
                }
            );
            assert!(office.ledger().is_empty());
            assert_eq!(office.quota().remaining(category), CATEGORY_CAPACITY);
        }
    }

    #[test]
    fn test_refund_amount_is_price_not_amount_paid() {
        let mut office = office();
        // Overpaid by 1000.00; change is given at sale time
        office
            .register_sale(request(30, TicketCategory::Student, 400_000))
            .unwrap();
        assert_eq!(
            office.ledger().find(1).unwrap().change,
            Money::from_minor(100_000)
        );

        let refunded = office.refund(1).unwrap();
        assert_eq!(refunded.refunded_amount, Money::from_minor(300_000));
        assert_eq!(office.totals().total_collected, Money::zero());
    }

    #[test]
    fn test_ids_strictly_increasing_and_never_reused() {
        let mut office = office();
        for _ in 0..3 {
            office
                .register_sale(request(25, TicketCategory::General, 500_000))
                .unwrap();
        }
        office.refund(2).unwrap();
        office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();

        let ids: Vec<u32> = office.ledger().sales().iter().map(|s| s.id).collect();
        // The refunded id 2 stays in place; the new sale gets 4, not 2
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_quota_exhaustion_rejects_sale() {
        let mut office = office();
        for _ in 0..CATEGORY_CAPACITY {
            office
                .register_sale(request(25, TicketCategory::Student, 300_000))
                .unwrap();
        }
        assert!(office.quota().is_exhausted(TicketCategory::Student));

        let err = office
            .register_sale(request(25, TicketCategory::Student, 300_000))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::QuotaExhausted {
                category: TicketCategory::Student
            }
        );
        assert_eq!(office.ledger().len() as u32, CATEGORY_CAPACITY);
        assert_no_drift(&office);
    }

    #[test]
    fn test_no_drift_across_mixed_operations() {
        let mut office = office();
        office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();
        office
            .register_sale(request(70, TicketCategory::Vip, 720_000))
            .unwrap();
        office
            .register_sale(request(19, TicketCategory::Student, 350_000))
            .unwrap();
        assert_no_drift(&office);
        assert_quota_identity(&office);

        office.refund(2).unwrap();
        assert_no_drift(&office);
        assert_quota_identity(&office);

        // Rejections must leave both identities intact
        let _ = office.register_sale(request(12, TicketCategory::General, 500_000));
        let _ = office.register_sale(request(25, TicketCategory::General, 100));
        let _ = office.refund(99);
        let _ = office.refund(2);
        assert_no_drift(&office);
        assert_quota_identity(&office);

        assert_eq!(
            office.totals().total_collected,
            Money::from_minor(500_000 + 300_000)
        );
        assert_eq!(office.totals().charged_count, 2);
    }

    #[test]
    fn test_rejections_write_exactly_one_history_entry() {
        let mut office = office();
        let opened = office.history().entries().len();

        let _ = office.register_sale(request(10, TicketCategory::General, 500_000));
        assert_eq!(office.history().entries().len(), opened + 1);
        assert!(office
            .history()
            .entries()
            .last()
            .unwrap()
            .text
            .contains("under 16"));

        let _ = office.register_sale(request(25, TicketCategory::General, 100));
        assert_eq!(office.history().entries().len(), opened + 2);
        assert!(office
            .history()
            .entries()
            .last()
            .unwrap()
            .text
            .contains("insufficient payment"));
    }

    #[test]
    fn test_refund_unknown_id() {
        let mut office = office();
        assert_eq!(office.refund(7).unwrap_err(), CoreError::SaleNotFound(7));
    }

    #[test]
    fn test_find_by_surname_is_case_insensitive() {
        let mut office = office();
        office
            .register_sale(request(25, TicketCategory::General, 500_000))
            .unwrap();
        let mut other = request(30, TicketCategory::Vip, 900_000);
        other.surname = "Lopez".into();
        office.register_sale(other).unwrap();

        let hits = office.ledger().find_by_surname("  PEREZ ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert!(office.ledger().find_by_surname("nobody").is_empty());
    }

    #[test]
    fn test_session_open_logs_operator() {
        let office = office();
        assert_eq!(office.history().entries().len(), 1);
        assert_eq!(
            office.history().entries()[0].text,
            "Operator session opened: Gomez, Ana"
        );
    }
}
