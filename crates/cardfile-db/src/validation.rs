use crate::error::{Result, StoreError};
use crate::models::NewContact;

// Landline is deliberately unchecked; existing databases may hold
// anything there.
pub fn validate(input: &NewContact) -> Result<()> {
    if !valid_name(&input.name) {
        return Err(StoreError::Validation(
            "name must be non-empty and contain only letters, digits and spaces".into(),
        ));
    }

    if !valid_mobile_number(&input.mobile_number) {
        return Err(StoreError::Validation(
            "mobile number must be exactly 10 digits".into(),
        ));
    }

    Ok(())
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
}

fn valid_mobile_number(number: &str) -> bool {
    number.len() == 10 && number.bytes().all(|b| b.is_ascii_digit())
}
