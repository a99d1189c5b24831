//! # Report Generator
//!
//! Pure function from session state to the plain-text summary report.
//!
//! This is the system's one wire format: downstream consumers parse the
//! exported TXT, so section order, labels and two-decimal formatting are
//! fixed. Writing the text to disk is the console layer's job; this
//! module only renders.

use chrono::Local;

use crate::ledger::BoxOffice;
use crate::types::{Sale, TicketCategory};
use crate::TIMESTAMP_FORMAT;

const RULE_WIDTH: usize = 60;

/// Renders one per-sale detail line.
///
/// Field order is load-bearing: id, buyer, age, category, status, price,
/// paid amount + method, change, charge time, refunded amount, refund time.
pub fn detail_line(sale: &Sale) -> String {
    let refund_time = match sale.refunded_at {
        Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
        None => "-".to_string(),
    };
    format!(
        "ID {} | {}, {} | Age {} | {} | Status {} | Price {} | Paid {} ({}) | Change {} | Charged {} | Refunded {} | Refund time {}",
        sale.id,
        sale.surname,
        sale.name,
        sale.age,
        sale.category,
        sale.status,
        sale.price,
        sale.amount_paid,
        sale.method,
        sale.change,
        sale.charged_at.format(TIMESTAMP_FORMAT),
        sale.refunded_amount,
        refund_time,
    )
}

/// Renders the three remaining-quota lines, aligned the way the report
/// and the console both print them.
pub fn quota_lines(office: &BoxOffice) -> Vec<String> {
    TicketCategory::ALL
        .iter()
        .map(|category| {
            format!(
                "  {:<12}{}",
                format!("{}:", category),
                office.quota().remaining(*category)
            )
        })
        .collect()
}

/// Renders the full summary report.
pub fn render(office: &BoxOffice) -> String {
    let (charged, refunded) = office.ledger().status_counts();
    let operator = office.operator();

    let mut lines: Vec<String> = Vec::new();
    lines.push("EVENT TICKET SYSTEM - SUMMARY".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Operator: {} {}", operator.name, operator.surname));
    lines.push(format!(
        "Session start: {}",
        operator.session_start.format(TIMESTAMP_FORMAT)
    ));
    lines.push(format!("Generated: {}", Local::now().format(TIMESTAMP_FORMAT)));
    lines.push(String::new());
    lines.push(format!("Total sales registered: {}", office.ledger().len()));
    lines.push(format!(
        "Charged (active): {charged} | Refunded: {refunded}"
    ));
    lines.push(format!("Total collected: {}", office.totals().total_collected));
    lines.push(String::new());
    lines.push("Remaining quota:".to_string());
    lines.extend(quota_lines(office));
    lines.push(String::new());
    lines.push("Sales detail:".to_string());
    lines.push("-".repeat(RULE_WIDTH));
    for sale in office.ledger().sales() {
        lines.push(detail_line(sale));
    }
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines.push("Operation history:".to_string());
    lines.push("-".repeat(RULE_WIDTH));
    if office.history().is_empty() {
        lines.push("(no operations)".to_string());
    } else {
        for entry in office.history().entries() {
            lines.push(entry.to_string());
        }
    }
    lines.push("-".repeat(RULE_WIDTH));

    lines.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Operator, PaymentMethod, SaleRequest, SaleStatus};

    fn populated_office() -> BoxOffice {
        let mut office = BoxOffice::open(Operator::new("Ana", "Gomez"));
        office
            .register_sale(SaleRequest {
                name: "Luis".into(),
                surname: "Perez".into(),
                age: 25,
                category: TicketCategory::General,
                amount_paid: Money::from_minor(550_000),
                method: PaymentMethod::Cash,
            })
            .unwrap();
        office
            .register_sale(SaleRequest {
                name: "Rosa".into(),
                surname: "Lopez".into(),
                age: 65,
                category: TicketCategory::Vip,
                amount_paid: Money::from_minor(720_000),
                method: PaymentMethod::Transfer,
            })
            .unwrap();
        office.refund(2).unwrap();
        office
    }

    /// Minimal re-parse of a detail line, standing in for a downstream
    /// consumer of the export format.
    fn parse_detail_line(line: &str) -> (u32, String, Money, Money, String) {
        let fields: Vec<&str> = line.split(" | ").collect();
        let id: u32 = fields[0].strip_prefix("ID ").unwrap().parse().unwrap();
        let category = fields[3].to_string();
        let status = fields[4].strip_prefix("Status ").unwrap().to_string();
        let price: Money = fields[5].strip_prefix("Price ").unwrap().parse().unwrap();
        let paid_field = fields[6].strip_prefix("Paid ").unwrap();
        let paid: Money = paid_field
            .split_once(" (")
            .unwrap()
            .0
            .parse()
            .unwrap();
        (id, category, price, paid, status)
    }

    #[test]
    fn test_detail_line_round_trip() {
        let office = populated_office();
        let expected = [
            (1, "General", 500_000, 550_000, "CHARGED"),
            (2, "VIP", 720_000, 720_000, "REFUNDED"),
        ];
        for (sale, (id, category, price, paid, status)) in
            office.ledger().sales().iter().zip(expected)
        {
            let (p_id, p_category, p_price, p_paid, p_status) =
                parse_detail_line(&detail_line(sale));
            assert_eq!(p_id, id);
            assert_eq!(p_category, category);
            assert_eq!(p_price, Money::from_minor(price));
            assert_eq!(p_paid, Money::from_minor(paid));
            assert_eq!(p_status, status);
        }
    }

    #[test]
    fn test_detail_line_refund_fields() {
        let office = populated_office();
        let refunded = office.ledger().find(2).unwrap();
        assert_eq!(refunded.status, SaleStatus::Refunded);

        let line = detail_line(refunded);
        assert!(line.contains("| Refunded 7200.00 |"));
        assert!(!line.ends_with("Refund time -"));

        let charged_line = detail_line(office.ledger().find(1).unwrap());
        assert!(charged_line.contains("| Refunded 0.00 |"));
        assert!(charged_line.ends_with("Refund time -"));
    }

    #[test]
    fn test_report_section_order() {
        let office = populated_office();
        let report = render(&office);

        let sections = [
            "EVENT TICKET SYSTEM - SUMMARY",
            "Operator: Ana Gomez",
            "Session start: ",
            "Generated: ",
            "Total sales registered: 2",
            "Charged (active): 1 | Refunded: 1",
            "Total collected: 5000.00",
            "Remaining quota:",
            "Sales detail:",
            "Operation history:",
        ];
        let mut cursor = 0;
        for section in sections {
            let at = report[cursor..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section {section:?}"));
            cursor += at + section.len();
        }
    }

    #[test]
    fn test_report_quota_lines_match_state() {
        let office = populated_office();
        let report = render(&office);
        // One General sold, the VIP one refunded back to capacity
        assert!(report.contains("  General:    99"));
        assert!(report.contains("  Student:    100"));
        assert!(report.contains("  VIP:        100"));
    }

    #[test]
    fn test_report_dumps_full_history() {
        // A session always opens with at least one entry, so the
        // "(no operations)" placeholder never shows up here
        let office = populated_office();
        let report = render(&office);
        assert!(!report.contains("(no operations)"));
        assert!(report.contains("Operator session opened: Gomez, Ana"));
        assert!(report.contains("Refund ID 2"));
    }

    #[test]
    fn test_rules_are_sixty_columns() {
        let office = populated_office();
        let report = render(&office);
        assert!(report.contains(&"=".repeat(60)));
        assert!(report.contains(&"-".repeat(60)));
    }
}
