use crate::utils::error::{MulError, Result};

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MulError::MissingConfigError {
        field: field_name.to_string(),
    })
}
