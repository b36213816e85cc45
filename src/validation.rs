//! Input validation utilities.
//!
//! Every value the session collects is a required free-text field. The only
//! rule is that it must not be empty once surrounding whitespace is removed.

use crate::errors::ValidationError;

/// Validate a required text answer.
///
/// # Arguments
///
/// * `input` - Raw input as typed (may include the trailing newline)
/// * `required_message` - Message returned when the input is empty
///
/// # Returns
///
/// Returns the trimmed value, or [`ValidationError::Required`] carrying
/// `required_message` if nothing but whitespace was entered.
pub fn validate_required(input: &str, required_message: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required(required_message.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Returns the trimmed value if it is non-empty.
///
/// Used for values coming from the environment or a config file, where an
/// empty value means "not provided".
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_accepts_non_empty() {
        assert_eq!(validate_required("pk_123", "required").unwrap(), "pk_123");
        assert_eq!(validate_required("a", "required").unwrap(), "a");
    }

    #[test]
    fn test_validate_required_trims_line_ending() {
        assert_eq!(validate_required("901234\n", "required").unwrap(), "901234");
        assert_eq!(validate_required("  acme \r\n", "required").unwrap(), "acme");
    }

    #[test]
    fn test_validate_required_rejects_empty_and_whitespace() {
        let msg = "ClickUp list ID is required";
        assert_eq!(
            validate_required("", msg),
            Err(ValidationError::Required(msg.to_string()))
        );
        assert!(validate_required("   ", msg).is_err());
        assert!(validate_required("\n", msg).is_err());
        assert!(validate_required("\t \n", msg).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(" repo ")), Some("repo".to_string()));
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
    }
}
