//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR, and is plain when not writing to a terminal):
//! - Green: success
//! - Red: errors
//! - Cyan: paths, hints

use console::style;

use crate::core::constants::GENERATED_PREFIX;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print the confirmation line for a written secret file.
///
/// Example: `Secret generated: secrets/db_password.txt`
pub fn generated(path: &str) {
    if colors_enabled() {
        println!("{}{}", GENERATED_PREFIX, style(path).cyan());
    } else {
        println!("{}{}", GENERATED_PREFIX, path);
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ All secrets generated.`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ cannot create output directory secrets: File exists`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ remove or rename the file at secrets`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}
