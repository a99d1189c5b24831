//! # Pricing Rules
//!
//! Maps a ticket category and buyer age to a final price.
//!
//! Pure and deterministic: the tariff is a fixed table, the only modifier
//! is the senior discount. Age is assumed already validated upstream
//! (the console re-prompts until it is in range).

use crate::money::Money;
use crate::types::TicketCategory;
use crate::{SENIOR_AGE, SENIOR_DISCOUNT_BPS};

/// Base tariff per category, before any discount.
///
/// ## Example
/// ```rust
/// use boxoffice_core::pricing::base_price;
/// use boxoffice_core::types::TicketCategory;
///
/// assert_eq!(base_price(TicketCategory::General).to_string(), "5000.00");
/// ```
pub const fn base_price(category: TicketCategory) -> Money {
    match category {
        TicketCategory::General => Money::from_major(5000),
        TicketCategory::Student => Money::from_major(3000),
        TicketCategory::Vip => Money::from_major(9000),
    }
}

/// Final price at sale time: base tariff, 20% off from age 60.
///
/// ## Example
/// ```rust
/// use boxoffice_core::pricing::final_price;
/// use boxoffice_core::types::TicketCategory;
///
/// assert_eq!(final_price(TicketCategory::Vip, 65).to_string(), "7200.00");
/// assert_eq!(final_price(TicketCategory::Vip, 59).to_string(), "9000.00");
/// ```
pub fn final_price(category: TicketCategory, age: u8) -> Money {
    let base = base_price(category);
    if age >= SENIOR_AGE {
        base.apply_percentage_discount(SENIOR_DISCOUNT_BPS)
    } else {
        base
    }
}
