use validator::ValidationError;

// Hook for `#[validate(custom(...))]`, whitespace alone doesn't count as a value
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("This field can't be blank".into());
        return Err(error);
    }

    Ok(())
}
