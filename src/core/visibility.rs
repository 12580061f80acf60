/// Password visibility flag for the login screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    is_password_visible: bool,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        self.is_password_visible = !self.is_password_visible;
    }

    pub fn is_visible(&self) -> bool {
        self.is_password_visible
    }

    /// `type` attribute for the password input
    pub fn input_type(&self) -> &'static str {
        if self.is_password_visible {
            "text"
        } else {
            "password"
        }
    }
}
