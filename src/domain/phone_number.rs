use validator::ValidationError;

// Customer phone number, international format (`+<country code> ...`)
#[derive(Debug, Clone)]
pub struct PhoneNumberDomain(String);

impl PhoneNumberDomain{
    pub fn parse(number: String) -> Result<PhoneNumberDomain, String>{
        let trimmed = number.trim();

        if !trimmed.is_empty() && phonenumber::parse(None, trimmed).is_ok(){
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid phone number", number))
        }
    }
}

impl AsRef<str> for PhoneNumberDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hook for `#[validate(custom(...))]`
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    PhoneNumberDomain::parse(value.to_string())
        .map(|_| ())
        .map_err(|message| {
            let mut error = ValidationError::new("phone_number");
            error.message = Some(message.into());
            error
        })
}
