//! Validation rules for the login form.
//!
//! Every field carries a single required rule: the value must not be the
//! empty string. Whitespace is not trimmed, so `"  "` satisfies the rule.

use derive_more::Display;

/// Fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum LoginField {
    #[display("username")]
    Username,
    #[display("password")]
    Password,
}

impl LoginField {
    /// All fields in render order
    pub const ALL: [LoginField; 2] = [LoginField::Username, LoginField::Password];

    /// Input `name`/`id` attribute
    pub fn name(&self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        }
    }

    /// Visible label
    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Username => "User",
            LoginField::Password => "Password",
        }
    }

    /// Message shown when the required rule fails
    pub fn required_message(&self) -> &'static str {
        match self {
            LoginField::Username => "Enter a valid user name",
            LoginField::Password => "Enter the password",
        }
    }
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is empty
    #[error("{field}: {message}")]
    Required {
        field: LoginField,
        message: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> LoginField {
        match self {
            ValidationError::Required { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required { message, .. } => *message,
        }
    }
}

/// Check the required rule for one field value
pub fn validate_required(field: LoginField, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field,
            message: field.required_message(),
        });
    }
    Ok(())
}
