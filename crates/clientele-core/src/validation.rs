//! Validation utilities.

use crate::{ClienteleError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ClienteleError` on failure.
    fn validate_request(&self) -> Result<(), ClienteleError> {
        self.validate().map_err(validation_errors_to_clientele_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, sorted by field
/// name so messages are stable between runs.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `ClienteleError`.
///
/// The resulting message is the field messages joined with `", "`, which is
/// what clients see as the body of a 400 response.
#[must_use]
pub fn validation_errors_to_clientele_error(errors: ValidationErrors) -> ClienteleError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    ClienteleError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::{ValidateEmail, ValidationError};

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates email syntax. Blank values pass; pair with [`not_blank`].
    pub fn email_if_present(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() || value.validate_email() {
            return Ok(());
        }
        Err(ValidationError::new("email"))
    }
}
