//! # Menu Workflows
//!
//! One function per menu option, each driving the `BoxOffice` session.
//!
//! ## Workflow Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompts (prompt.rs) ──► checks/confirmations ──► core mutation         │
//! │                                                                         │
//! │  Every denial path prints a message, writes one history entry and      │
//! │  returns to the menu with ledger/quota/totals untouched. Only the      │
//! │  core's register_sale/refund mutate state, and they re-verify every    │
//! │  business rule themselves.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use boxoffice_core::{
    pricing, report, BoxOffice, PaymentMethod, SaleRequest, Statistics, TicketCategory,
    MIN_PURCHASE_AGE, TIMESTAMP_FORMAT,
};
use chrono::Local;
use tracing::{info, warn};

use crate::export;
use crate::prompt;

/// Prints a 70-column section title, the way every screen opens.
pub fn print_title(text: &str) {
    println!("\n{}", "=".repeat(70));
    println!("{text}");
    println!("{}", "=".repeat(70));
}

fn show_quota(office: &BoxOffice) {
    println!("\nREMAINING QUOTA:");
    for line in report::quota_lines(office) {
        println!("{line}");
    }
}

fn pick_category() -> TicketCategory {
    println!("\nTicket categories:");
    for (i, category) in TicketCategory::ALL.iter().enumerate() {
        println!("{} - {}", i + 1, category);
    }
    let choice = prompt::int_in_range("category", "Choose a category (1-3): ", 1, 3);
    TicketCategory::ALL[(choice - 1) as usize]
}

fn pick_payment_method() -> PaymentMethod {
    println!("\nPayment method:");
    println!("1 - Cash");
    println!("2 - Transfer");
    match prompt::int_in_range("method", "Choose a method (1-2): ", 1, 2) {
        1 => PaymentMethod::Cash,
        _ => PaymentMethod::Transfer,
    }
}

// =============================================================================
// Option 1: New Sale
// =============================================================================

/// Registers and charges a sale, or records why it did not happen.
///
/// Checks run in a fixed order - age gate, quota, payment sufficiency,
/// operator confirmation - and each early exit logs its own history
/// entry, so the audit trail also shows the sales that never happened.
pub fn new_sale(office: &mut BoxOffice) {
    print_title("NEW SALE (REGISTER + CHARGE)");
    show_quota(office);

    let name = prompt::text("name", "Name: ");
    let surname = prompt::text("surname", "Surname: ");
    let age = prompt::age("Age (1-120): ");

    if age < MIN_PURCHASE_AGE {
        println!("⛔ Access denied: under {MIN_PURCHASE_AGE}. Nothing registered.");
        warn!(age, "sale denied: underage");
        office.log_event(format!(
            "Sale denied (under {MIN_PURCHASE_AGE}): {surname}, {name}, age {age}"
        ));
        return;
    }

    let category = pick_category();
    if office.quota().is_exhausted(category) {
        println!("⛔ No remaining quota for {category}.");
        warn!(%category, "sale denied: quota exhausted");
        office.log_event(format!("Sale denied (no {category} quota): {surname}, {name}"));
        return;
    }

    let price = pricing::final_price(category, age);
    println!("\nTicket: {category} | Final price: {price}");

    if !prompt::confirm("Does the buyer pay now?") {
        println!("❎ Not purchased. Nothing registered.");
        office.log_event(format!(
            "Sale not registered (buyer declined): {surname}, {name}, {category}, price {price}"
        ));
        return;
    }

    let method = pick_payment_method();
    let amount_paid = prompt::amount("amount", "Amount paid: ");

    if amount_paid < price {
        let shortfall = price - amount_paid;
        println!("❌ Insufficient payment. Short: {shortfall}. Nothing registered.");
        warn!(%price, %amount_paid, "sale denied: insufficient payment");
        office.log_event(format!(
            "Sale not registered (insufficient payment): {surname}, {name}, paid {amount_paid}, short {shortfall}"
        ));
        return;
    }

    if !prompt::confirm(&format!(
        "Confirm sale for {price} (paid {amount_paid} - {method})?"
    )) {
        println!("❎ Sale cancelled by operator. Nothing registered.");
        office.log_event(format!("Sale cancelled by operator: {surname}, {name}"));
        return;
    }

    match office.register_sale(SaleRequest {
        name,
        surname,
        age,
        category,
        amount_paid,
        method,
    }) {
        Ok(sale) => {
            println!("✅ Sale registered. ID {} | Change: {}", sale.id, sale.change);
            info!(id = sale.id, %category, %price, "sale registered");
        }
        // Unreachable in this flow (everything was just checked), but the
        // core re-verifies and its answer wins
        Err(err) => println!("❌ {err}"),
    }
}

// =============================================================================
// Option 2: Refund by ID
// =============================================================================

pub fn refund_by_id(office: &mut BoxOffice) {
    print_title("REFUND BY ID");

    let id = prompt::int_in_range("id", "Sale ID: ", 1, u32::MAX as i64) as u32;
    let sale = match office.ledger().find(id) {
        Some(sale) => sale.clone(),
        None => {
            println!("❌ No sale with that ID.");
            return;
        }
    };

    if !sale.is_charged() {
        println!("⚠️  Cannot refund. Current status: {}", sale.status);
        return;
    }

    println!(
        "ID {} | {} {} | {} | Price: {} | Paid: {} ({})",
        sale.id, sale.name, sale.surname, sale.category, sale.price, sale.amount_paid, sale.method
    );

    // Policy: the refund equals the recorded price, never the tendered
    // amount - change was already handed over at sale time
    println!("\nAmount to refund (system policy): {}", sale.price);

    if !prompt::confirm("Confirm refund? (releases quota and adjusts takings)") {
        println!("❎ Refund cancelled.");
        office.log_event(format!("Refund cancelled by operator for ID {id}"));
        return;
    }

    match office.refund(id) {
        Ok(refunded) => {
            println!("✅ Refund complete. Quota released and takings adjusted.");
            info!(id, amount = %refunded.refunded_amount, "sale refunded");
        }
        Err(err) => println!("❌ {err}"),
    }
}

// =============================================================================
// Option 3: Summary / Export
// =============================================================================

fn print_aggregate_block(office: &BoxOffice) {
    let operator = office.operator();
    let (charged, refunded) = office.ledger().status_counts();

    println!("Operator: {} {}", operator.name, operator.surname);
    println!(
        "Session start: {}",
        operator.session_start.format(TIMESTAMP_FORMAT)
    );
    println!("Now: {}", Local::now().format(TIMESTAMP_FORMAT));
    println!();
    println!("Total sales registered: {}", office.ledger().len());
    println!("Charged (active): {charged} | Refunded: {refunded}");
    println!("Total collected: {}", office.totals().total_collected);
}

pub fn summary(office: &mut BoxOffice) {
    print_title("SUMMARY (AND EXPORT)");
    print_aggregate_block(office);
    show_quota(office);

    if prompt::confirm("Show full detail?") {
        println!("\nDETAIL:");
        println!("{}", "-".repeat(70));
        for sale in office.ledger().sales() {
            println!("{}", report::detail_line(sale));
        }
        println!("{}", "-".repeat(70));
    }

    if prompt::confirm("Export to TXT?") {
        let filename = prompt::text("filename", "Filename (e.g. summary.txt): ");
        export::export_report(office, &filename);
    }
}

// =============================================================================
// Option 4: Search by Surname
// =============================================================================

pub fn search_by_surname(office: &BoxOffice) {
    print_title("SEARCH BY SURNAME");
    let wanted = prompt::text("surname", "Surname to search: ");

    let hits = office.ledger().find_by_surname(&wanted);
    if hits.is_empty() {
        println!("❌ No sales found for that surname.");
        return;
    }

    println!("✅ Found {} record(s):", hits.len());
    println!("{}", "-".repeat(70));
    for sale in hits {
        println!(
            "ID {:>3} | {}, {} | Age {} | {} | {} | Paid {} ({})",
            sale.id,
            sale.surname,
            sale.name,
            sale.age,
            sale.category,
            sale.status,
            sale.amount_paid,
            sale.method
        );
    }
    println!("{}", "-".repeat(70));
}

// =============================================================================
// Option 5: Statistics
// =============================================================================

pub fn statistics(office: &mut BoxOffice) {
    print_title("STATISTICS");

    let Some(stats) = Statistics::from_ledger(office.ledger()) else {
        println!("⚠️  No data to compute statistics.");
        return;
    };

    println!("Revenue per category (charged sales only):");
    for category in TicketCategory::ALL {
        println!(
            "  {:<10}: {}",
            category, stats.revenue_by_category[category.index()]
        );
    }

    println!("\nSales per category (refunded included):");
    for category in TicketCategory::ALL {
        println!(
            "  {:<10}: {}",
            category, stats.sales_by_category[category.index()]
        );
    }

    println!("\nAverage age per category:");
    for category in TicketCategory::ALL {
        println!(
            "  {:<10}: {:.2}",
            category, stats.avg_age_by_category[category.index()]
        );
    }

    println!("\nBest-selling category (by records): {}", stats.best_selling);

    println!("\nAge extremes:");
    println!(
        "  Youngest: ID {} - {} {} ({} years)",
        stats.youngest.sale_id, stats.youngest.name, stats.youngest.surname, stats.youngest.age
    );
    println!(
        "  Oldest:   ID {} - {} {} ({} years)",
        stats.oldest.sale_id, stats.oldest.name, stats.oldest.surname, stats.oldest.age
    );

    if prompt::confirm("\nExport summary to TXT (includes history)?") {
        let filename = prompt::text("filename", "Filename (e.g. statistics.txt): ");
        export::export_report(office, &filename);
    }
}

// =============================================================================
// Option 6: History
// =============================================================================

pub fn show_history(office: &BoxOffice) {
    print_title("HISTORY");
    if office.history().is_empty() {
        println!("(no operations)");
        return;
    }
    for entry in office.history().entries() {
        println!("{entry}");
    }
}

// =============================================================================
// Option 7: Cash-Register Closing
// =============================================================================

pub fn close_register(office: &mut BoxOffice) {
    print_title("CASH-REGISTER CLOSING");
    print_aggregate_block(office);
    show_quota(office);

    if prompt::confirm("\nExport closing report to TXT?") {
        let filename = export::closing_filename();
        export::export_report(office, &filename);
    }

    office.log_event("Cash register closed");
    info!("cash register closed");
}

// =============================================================================
// Option 8: Exit
// =============================================================================

pub fn exit_session(office: &mut BoxOffice) {
    print_title("EXITING");
    println!("Thank you for using the system.");

    if prompt::confirm("Export a final summary before exiting?") {
        let filename = export::final_summary_filename();
        export::export_report(office, &filename);
    }

    office.log_event("Session closed");
    info!("session closed");
}
