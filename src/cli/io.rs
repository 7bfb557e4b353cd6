use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::alerts::{Alert, AlertLevel, AlertSink};
use crate::cli::core::CommandError;
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Routes funds alerts to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlertSink;

impl AlertSink for ConsoleAlertSink {
    fn emit(&self, alert: Alert) {
        match alert.level {
            AlertLevel::Warning => print_warning(alert.message),
            AlertLevel::Notice => print_info(alert.message),
        }
    }
}
