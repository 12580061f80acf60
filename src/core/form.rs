//! Login form controller
//!
//! Holds the field values and touched flags. Errors are never stored; they
//! are derived from the current values on every query, and only surfaced for
//! fields the user has already touched.

use std::collections::BTreeSet;

use super::validation::{LoginField, ValidationError, validate_required};

/// Values collected by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub username: String,
    pub password: String,
}

impl LoginValues {
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    fn get_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Form state for the login screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    values: LoginValues,
    touched: BTreeSet<LoginField>,
    submit_count: u32,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: LoginField) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &LoginValues {
        &self.values
    }

    /// Change handler: replace the field value
    pub fn set_value(&mut self, field: LoginField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    /// Blur handler: mark the field as touched
    pub fn blur(&mut self, field: LoginField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: LoginField) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validation errors for every field, touched or not
    pub fn errors(&self) -> Vec<ValidationError> {
        LoginField::ALL
            .into_iter()
            .filter_map(|field| self.field_error(field))
            .collect()
    }

    fn field_error(&self, field: LoginField) -> Option<ValidationError> {
        validate_required(field, self.value(field)).err()
    }

    /// Whether the field should render in its error state.
    ///
    /// True only when the field is touched *and* currently fails validation.
    pub fn is_invalid(&self, field: LoginField) -> bool {
        self.is_touched(field) && self.field_error(field).is_some()
    }

    /// Inline error text for a field; empty until the field is touched
    pub fn error_text(&self, field: LoginField) -> &'static str {
        if !self.is_touched(field) {
            return "";
        }
        self.field_error(field)
            .map(|err| err.message())
            .unwrap_or_default()
    }

    /// Submit handler.
    ///
    /// Touches every field so all failures become visible, then validates.
    /// Returns a copy of the values when every field passes.
    pub fn submit(&mut self) -> Result<LoginValues, Vec<ValidationError>> {
        self.submit_count += 1;
        self.touched.extend(LoginField::ALL);

        let errors = self.errors();
        if errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty_and_untouched() {
        let form = LoginForm::new();
        assert_eq!(form.values(), &LoginValues::default());
        assert!(!form.is_touched(LoginField::Username));
        assert!(!form.is_touched(LoginField::Password));
        assert_eq!(form.submit_count(), 0);
    }

    #[test]
    fn test_set_value_updates_only_that_field() {
        let mut form = LoginForm::new();
        form.set_value(LoginField::Username, "cuddy");
        assert_eq!(form.value(LoginField::Username), "cuddy");
        assert_eq!(form.value(LoginField::Password), "");
    }

    #[test]
    fn test_errors_are_derived_from_values() {
        let mut form = LoginForm::new();
        assert_eq!(form.errors().len(), 2);

        form.set_value(LoginField::Password, "secret");
        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), LoginField::Username);
    }

    #[test]
    fn test_untouched_field_has_no_error_text() {
        let form = LoginForm::new();
        assert_eq!(form.error_text(LoginField::Username), "");
        assert_eq!(form.error_text(LoginField::Password), "");
        assert!(!form.is_invalid(LoginField::Username));
    }

    #[test]
    fn test_blur_reveals_error() {
        let mut form = LoginForm::new();
        form.blur(LoginField::Username);

        assert!(form.is_invalid(LoginField::Username));
        assert_eq!(
            form.error_text(LoginField::Username),
            "Enter a valid user name"
        );
        assert!(!form.is_invalid(LoginField::Password));
        assert_eq!(form.error_text(LoginField::Password), "");
    }

    #[test]
    fn test_error_clears_once_filled() {
        let mut form = LoginForm::new();
        form.blur(LoginField::Password);
        assert!(form.is_invalid(LoginField::Password));

        form.set_value(LoginField::Password, "x");
        assert!(!form.is_invalid(LoginField::Password));
        assert_eq!(form.error_text(LoginField::Password), "");
    }

    #[test]
    fn test_touched_and_valid_has_no_error() {
        let mut form = LoginForm::new();
        form.set_value(LoginField::Username, "wilson");
        form.blur(LoginField::Username);
        assert!(form.is_touched(LoginField::Username));
        assert!(!form.is_invalid(LoginField::Username));
    }

    #[test]
    fn test_submit_touches_all_fields() {
        let mut form = LoginForm::new();
        let errors = form.submit().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(form.is_touched(LoginField::Username));
        assert!(form.is_touched(LoginField::Password));
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn test_submit_returns_values_when_valid() {
        let mut form = LoginForm::new();
        form.set_value(LoginField::Username, "house");
        form.set_value(LoginField::Password, "vicodin");

        let values = form.submit().unwrap();
        assert_eq!(values.username, "house");
        assert_eq!(values.password, "vicodin");
    }

    #[test]
    fn test_submit_count_increments_on_every_attempt() {
        let mut form = LoginForm::new();
        let _ = form.submit();
        form.set_value(LoginField::Username, "a");
        form.set_value(LoginField::Password, "b");
        let _ = form.submit();
        assert_eq!(form.submit_count(), 2);
    }
}
