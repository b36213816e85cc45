//! Error formatting utilities.
//!
//! This module provides helper functions for formatting error chains
//! into human-readable messages.

use anyhow::Error;

/// Format an error and its source chain into a detailed error message.
///
/// This function extracts the full error chain from an `anyhow::Error`,
/// joining all error messages with " → " to provide comprehensive error context.
///
/// # Example
///
/// ```
/// use clickup_to_github::error::format_error_chain;
///
/// let err = anyhow::anyhow!("stdin closed").context("Failed to read ClickUp list ID");
/// let formatted = format_error_chain(&err);
/// assert_eq!(formatted, "Failed to read ClickUp list ID → stdin closed");
/// ```
pub fn format_error_chain(error: &Error) -> String {
    error
        .chain()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
