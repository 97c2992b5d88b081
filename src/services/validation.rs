use super::error_handling::RolodexError;
use crate::domain::contact::ContactFields;

/// Input validation for contact forms. A name is the only required field.
pub struct InputValidator;

impl InputValidator {
    pub fn validate_name(name: &str) -> Result<String, RolodexError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RolodexError::ValidationError {
                field: "name".to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    }

    /// Trims every field and checks the name.
    pub fn validate_fields(fields: &ContactFields) -> Result<ContactFields, RolodexError> {
        let trimmed = fields.trimmed();
        Self::validate_name(&trimmed.name)?;
        Ok(trimmed)
    }

    /// The key that submits the new-contact form.
    pub fn is_confirm_key(key: &str) -> bool {
        key == "Enter"
    }
}
