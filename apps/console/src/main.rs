//! # Box Office Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Prompt for the operator identity (opens the session)
//! 3. Run the menu loop until Exit
//!
//! ## Session Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  one process = one operator = one session                               │
//! │                                                                         │
//! │  operator login ──► BoxOffice::open ──► menu loop ──► exit (+ export)  │
//! │                                                                         │
//! │  All state lives in the BoxOffice value on this stack frame and is     │
//! │  discarded when the process ends; the optional TXT export is the only  │
//! │  thing that survives.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod export;
mod ops;
mod prompt;

use boxoffice_core::{BoxOffice, Operator};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug logs
/// - `RUST_LOG=boxoffice=trace` - Trace the boxoffice crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,boxoffice_core=debug,boxoffice_console=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn show_menu() {
    println!("\n{}", "=".repeat(70));
    println!("1 - New sale");
    println!("2 - Refund by ID");
    println!("3 - Summary / Export");
    println!("4 - Search by surname");
    println!("5 - Statistics");
    println!("6 - History");
    println!("7 - Cash-register closing");
    println!("8 - Exit");
    println!("{}", "=".repeat(70));
}

fn main() {
    init_tracing();

    ops::print_title("EVENT TICKET SYSTEM");
    let name = prompt::text("name", "Operator name: ");
    let surname = prompt::text("surname", "Operator surname: ");

    let mut office = BoxOffice::open(Operator::new(name, surname));
    info!(
        operator = %format!("{}, {}", office.operator().surname, office.operator().name),
        "operator session opened"
    );

    loop {
        show_menu();
        let choice = prompt::int_in_range("option", "Choose an option (1-8): ", 1, 8);

        match choice {
            1 => {
                ops::new_sale(&mut office);
                prompt::pause();
            }
            2 => {
                ops::refund_by_id(&mut office);
                prompt::pause();
            }
            3 => {
                ops::summary(&mut office);
                prompt::pause();
            }
            4 => {
                ops::search_by_surname(&office);
                prompt::pause();
            }
            5 => {
                ops::statistics(&mut office);
                prompt::pause();
            }
            6 => {
                ops::show_history(&office);
                prompt::pause();
            }
            7 => {
                ops::close_register(&mut office);
                prompt::pause();
            }
            _ => {
                ops::exit_session(&mut office);
                break;
            }
        }
    }
}
