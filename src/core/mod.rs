//! Core login logic: form state, validation, password visibility and the
//! session writer. Free of any UI framework so it runs the same on the
//! server, in the browser and in tests.

#[cfg(feature = "ssr")]
pub mod config;
mod form;
mod session;
mod validation;
mod visibility;

pub use form::{LoginForm, LoginValues};
#[cfg(test)]
pub use session::MemoryStore;
pub use session::{
    CompletedLogin, KeyValueStore, NavigationError, Navigator, SESSION_KEY, SessionWriter,
    StorageError, read_session,
};
pub use validation::{LoginField, ValidationError, validate_required};
pub use visibility::PasswordVisibility;
