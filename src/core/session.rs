//! Session identifier persistence and the post-login redirect.
//!
//! A successful login writes the username under [`SESSION_KEY`] and then
//! navigates to the success route. Neither step reports failure to the user:
//! errors are logged and the flow carries on.

use super::form::LoginValues;

/// Storage key holding the session identifier
pub const SESSION_KEY: &str = "sessionId";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigation is not available")]
    Unavailable,
    #[error("failed to navigate to `{route}`: {reason}")]
    Redirect { route: String, reason: String },
}

/// Persistent string key-value storage
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Full-page navigation delegated to the host environment
pub trait Navigator {
    fn redirect(&self, route: &str) -> Result<(), NavigationError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn redirect(&self, route: &str) -> Result<(), NavigationError> {
        (**self).redirect(route)
    }
}

/// Read the stored session identifier, if any
pub fn read_session<S: KeyValueStore>(store: &S) -> Result<Option<String>, StorageError> {
    store.read(SESSION_KEY)
}

/// Writes the session identifier and redirects after a successful submit
pub struct SessionWriter<S, N> {
    store: S,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> SessionWriter<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Persist `values.username` and navigate to `success_route`.
    ///
    /// A failed write does not prevent the redirect. Failures are logged to
    /// the console and handed back; callers are free to ignore them.
    pub fn complete_login(&self, values: &LoginValues, success_route: &str) -> CompletedLogin {
        let stored = self.store.write(SESSION_KEY, &values.username);
        if let Err(err) = &stored {
            leptos::logging::warn!("failed to persist session identifier: {}", err);
        }

        let redirected = self.navigator.redirect(success_route);
        if let Err(err) = &redirected {
            leptos::logging::warn!("redirect failed: {}", err);
        }

        CompletedLogin { stored, redirected }
    }
}

/// What happened to each step of [`SessionWriter::complete_login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedLogin {
    pub stored: Result<(), StorageError>,
    pub redirected: Result<(), NavigationError>,
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CountingNavigator {
        calls: Cell<u32>,
        last: RefCell<Option<String>>,
    }

    impl Navigator for CountingNavigator {
        fn redirect(&self, route: &str) -> Result<(), NavigationError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(route.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn values(username: &str) -> LoginValues {
        LoginValues {
            username: username.to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_memory_store_read_write() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.read("missing").unwrap(), None);

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();
        assert_eq!(store.read("k").unwrap(), Some("two".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_login_writes_username_verbatim() {
        let store = MemoryStore::new();
        let navigator = CountingNavigator::default();
        let writer = SessionWriter::new(&store, &navigator);

        writer.complete_login(&values(" Dr. House "), "/dashboard");

        assert_eq!(read_session(&store).unwrap(), Some(" Dr. House ".to_string()));
        assert_eq!(navigator.calls.get(), 1);
        assert_eq!(navigator.last.borrow().as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_password_is_never_stored() {
        let store = MemoryStore::new();
        let navigator = CountingNavigator::default();
        SessionWriter::new(&store, &navigator).complete_login(&values("house"), "/");

        assert_eq!(store.len(), 1);
        assert_eq!(store.read("password").unwrap(), None);
    }

    #[test]
    fn test_failed_write_still_redirects() {
        let navigator = CountingNavigator::default();
        let writer = SessionWriter::new(BrokenStore, &navigator);

        writer.complete_login(&values("house"), "/dashboard");

        assert_eq!(navigator.calls.get(), 1);
    }

    struct BrokenNavigator;

    impl Navigator for BrokenNavigator {
        fn redirect(&self, route: &str) -> Result<(), NavigationError> {
            Err(NavigationError::Redirect {
                route: route.to_string(),
                reason: "SecurityError".to_string(),
            })
        }
    }

    #[test]
    fn test_successful_login_reports_both_steps_ok() {
        let store = MemoryStore::new();
        let navigator = CountingNavigator::default();

        let outcome =
            SessionWriter::new(&store, &navigator).complete_login(&values("house"), "/dashboard");

        assert_eq!(outcome.stored, Ok(()));
        assert_eq!(outcome.redirected, Ok(()));
    }

    #[test]
    fn test_failed_write_is_reported() {
        let navigator = CountingNavigator::default();
        let outcome =
            SessionWriter::new(BrokenStore, &navigator).complete_login(&values("house"), "/");

        assert!(matches!(outcome.stored, Err(StorageError::Write { .. })));
        assert_eq!(outcome.redirected, Ok(()));
    }

    #[test]
    fn test_failed_redirect_is_swallowed() {
        let store = MemoryStore::new();
        let writer = SessionWriter::new(&store, BrokenNavigator);

        let outcome = writer.complete_login(&values("house"), "/dashboard");

        assert_eq!(read_session(&store).unwrap(), Some("house".to_string()));
        assert_eq!(outcome.stored, Ok(()));
        assert_eq!(
            outcome.redirected,
            Err(NavigationError::Redirect {
                route: "/dashboard".to_string(),
                reason: "SecurityError".to_string(),
            })
        );
    }

    #[test]
    fn test_both_steps_failing_returns_normally() {
        let outcome = SessionWriter::new(BrokenStore, BrokenNavigator)
            .complete_login(&values("house"), "/dashboard");

        assert!(outcome.stored.is_err());
        assert!(outcome.redirected.is_err());
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Write {
            key: SESSION_KEY.to_string(),
            reason: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write `sessionId`: denied");
        assert_eq!(
            NavigationError::Unavailable.to_string(),
            "navigation is not available"
        );
    }
}
