//! # Report Export
//!
//! The only file I/O in the whole application: rendering lives in
//! `boxoffice_core::report`, this module writes the result to disk.
//!
//! An export failure is reported and logged but never touches in-memory
//! state, and is not retried automatically.

use std::fs;

use boxoffice_core::{report, BoxOffice, FILENAME_TIMESTAMP_FORMAT};
use chrono::Local;
use tracing::{error, info};

/// Appends `.txt` unless the name already carries it (case-insensitive).
pub fn ensure_txt_suffix(filename: &str) -> String {
    if filename.to_lowercase().ends_with(".txt") {
        filename.to_string()
    } else {
        format!("{filename}.txt")
    }
}

/// Default filename for the cash-register closing export.
pub fn closing_filename() -> String {
    format!(
        "closing_{}.txt",
        Local::now().format(FILENAME_TIMESTAMP_FORMAT)
    )
}

/// Default filename for the final export offered on exit.
pub fn final_summary_filename() -> String {
    format!(
        "final_summary_{}.txt",
        Local::now().format(FILENAME_TIMESTAMP_FORMAT)
    )
}

/// Renders the summary report and writes it to `filename`.
///
/// On success the export itself becomes a history entry, like every other
/// operator action.
pub fn export_report(office: &mut BoxOffice, filename: &str) {
    let path = ensure_txt_suffix(filename);
    let content = report::render(office);

    match fs::write(&path, content) {
        Ok(()) => {
            println!("✅ Exported: {path}");
            info!(%path, "summary exported");
            office.log_event(format!("Exported summary to '{path}'"));
        }
        Err(err) => {
            println!("❌ Export failed: {err}");
            error!(%path, %err, "summary export failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_txt_suffix() {
        assert_eq!(ensure_txt_suffix("summary"), "summary.txt");
        assert_eq!(ensure_txt_suffix("summary.txt"), "summary.txt");
        assert_eq!(ensure_txt_suffix("SUMMARY.TXT"), "SUMMARY.TXT");
        assert_eq!(ensure_txt_suffix("notes.txt.bak"), "notes.txt.bak.txt");
    }

    #[test]
    fn test_default_filenames_are_timestamped() {
        let closing = closing_filename();
        assert!(closing.starts_with("closing_"));
        assert!(closing.ends_with(".txt"));
        // closing_YYYYMMDD_HHMMSS.txt
        assert_eq!(closing.len(), "closing_".len() + 15 + ".txt".len());

        let final_summary = final_summary_filename();
        assert!(final_summary.starts_with("final_summary_"));
        assert!(final_summary.ends_with(".txt"));
    }
}
