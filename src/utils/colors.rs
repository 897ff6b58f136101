//! Status colouring for list output.

use ansi_term::Colour;

/// Green for active/approved, red for inactive/rejected, yellow for pending.
pub fn colorize_status(status: &str) -> String {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "approved" | "open" => Colour::Green.paint(status).to_string(),
        "inactive" | "rejected" | "closed" => Colour::Red.paint(status).to_string(),
        "pending" => Colour::Yellow.paint(status).to_string(),
        _ => status.to_string(),
    }
}
