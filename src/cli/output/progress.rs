//! Spinner shown while issues are fetched.
//!
//! indicatif draws to stderr and hides itself when stderr is not a
//! terminal, so piped output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner for indeterminate operations
pub fn create_spinner() -> ProgressBar {
    let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_CHARS);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Create a spinner with a custom message
pub fn create_spinner_with_message(message: impl Into<String>) -> ProgressBar {
    let spinner = create_spinner();
    spinner.set_message(message.into());
    spinner
}

/// A spinner, or a hidden bar when output is machine-readable.
pub fn spinner_for(json_mode: bool, message: impl Into<String>) -> ProgressBar {
    if json_mode {
        ProgressBar::hidden()
    } else {
        create_spinner_with_message(message)
    }
}
