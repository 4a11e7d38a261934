//! Input validation for create/update payloads and pagination.

use crate::error::{HolocronError, Result};

/// Maximum allowed length for a unique name or model.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum allowed length for a caller-supplied id.
pub const MAX_ID_LENGTH: usize = 64;

/// Validates a unique name (person name, starship name or model).
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HolocronError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(HolocronError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a caller-supplied record id.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(HolocronError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(HolocronError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(HolocronError::Validation(
            "ID cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validates `take`/`skip` pagination arguments.
pub fn validate_page(take: Option<i64>, skip: Option<i64>) -> Result<()> {
    if take.is_some_and(|t| t < 0) {
        return Err(HolocronError::Validation(
            "Argument `take` cannot be negative".to_string(),
        ));
    }
    if skip.is_some_and(|s| s < 0) {
        return Err(HolocronError::Validation(
            "Argument `skip` cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Luke Skywalker").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("V1StGXR8_Z5jdHi6B-myT").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("has space").is_err());
        assert!(validate_id(&"a".repeat(MAX_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(None, None).is_ok());
        assert!(validate_page(Some(0), Some(10)).is_ok());
        assert!(validate_page(Some(-1), None).is_err());
        assert!(validate_page(None, Some(-5)).is_err());
    }
}
