//! Session store: zero or one signed-in user.
//!
//! Every successful sign-in, sign-up or sign-out replaces the session
//! wholesale and emits a toast. Empty credentials are silently ignored:
//! no state change, no toast.

use std::sync::Arc;

use eventmap_types::{Notification, User};
use tracing::info;

use crate::auth::Authenticator;
use crate::notify::Notifier;

/// Holds the current user, if any.
pub struct SessionStore {
    user: Option<User>,
    authenticator: Box<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a signed-out session.
    pub fn new(authenticator: Box<dyn Authenticator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            user: None,
            authenticator,
            notifier,
        }
    }

    /// The signed-in user.
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether someone is signed in.
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the signed-in user is premium. `false` when signed out.
    pub fn is_premium(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_premium)
    }

    /// Sign in with an email and password.
    ///
    /// Returns the new user, or `None` when either field is empty.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Option<&User> {
        let user = self.authenticator.sign_in(email, password)?;
        info!(user_id = %user.id, premium = user.is_premium, "User signed in");
        self.notifier.notify(Notification::info(
            "Успешный вход",
            format!("Добро пожаловать, {}!", user.name),
        ));
        Some(&*self.user.insert(user))
    }

    /// Register a new account and sign it in.
    ///
    /// Returns the new user, or `None` when any field is empty.
    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Option<&User> {
        let user = self.authenticator.sign_up(name, email, password)?;
        info!(user_id = %user.id, "User registered");
        self.notifier.notify(Notification::info(
            "Аккаунт создан",
            "Ваш аккаунт успешно создан!",
        ));
        Some(&*self.user.insert(user))
    }

    /// Clear the session. Always emits a toast, even when already signed out.
    pub fn sign_out(&mut self) {
        let previous = self.user.take();
        info!(
            user_id = previous.as_ref().map(|u| u.id.as_str()),
            "User signed out"
        );
        self.notifier
            .notify(Notification::info("Успешный выход", "Вы успешно вышли."));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use crate::notify::MemoryNotifier;

    fn store() -> (SessionStore, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = SessionStore::new(
            Box::new(MockAuthenticator::default()),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );
        (store, notifier)
    }

    #[test]
    fn starts_signed_out() {
        let (store, notifier) = store();
        assert!(!store.is_authenticated());
        assert!(!store.is_premium());
        assert!(notifier.is_empty());
    }

    #[test]
    fn sign_in_sets_user_and_greets() {
        let (mut store, notifier) = store();
        let user = store.sign_in("alice@example.com", "x").cloned().unwrap();
        assert_eq!(user.name, "alice");
        assert!(!user.is_premium);
        assert!(store.is_authenticated());

        let toast = notifier.last().unwrap();
        assert_eq!(toast.title, "Успешный вход");
        assert_eq!(toast.description, "Добро пожаловать, alice!");
    }

    #[test]
    fn premium_sign_in() {
        let (mut store, _) = store();
        store.sign_in("bob@premium.io", "x");
        assert!(store.is_premium());
        assert_eq!(store.current_user().map(|u| u.name.as_str()), Some("bob"));
    }

    #[test]
    fn sign_in_replaces_existing_session() {
        let (mut store, _) = store();
        store.sign_in("alice@example.com", "x");
        store.sign_in("bob@premium.io", "x");
        assert_eq!(store.current_user().unwrap().email, "bob@premium.io");
    }

    #[test]
    fn empty_credentials_change_nothing() {
        let (mut store, notifier) = store();
        assert!(store.sign_in("", "").is_none());
        assert!(store.sign_up("Name", "", "x").is_none());
        assert!(!store.is_authenticated());
        assert!(notifier.is_empty());

        store.sign_in("alice@example.com", "x");
        assert!(store.sign_in("bob@example.com", "").is_none());
        assert_eq!(store.current_user().unwrap().name, "alice");
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn sign_up_creates_non_premium_user() {
        let (mut store, notifier) = store();
        let user = store.sign_up("Dana", "dana@premium.io", "x").cloned().unwrap();
        assert_eq!(user.name, "Dana");
        assert!(!user.is_premium);
        assert_eq!(notifier.last().unwrap().title, "Аккаунт создан");
    }

    #[test]
    fn sign_out_clears_session() {
        let (mut store, notifier) = store();
        store.sign_in("alice@example.com", "x");
        store.sign_out();
        assert!(store.current_user().is_none());
        assert_eq!(notifier.last().unwrap().title, "Успешный выход");
    }
}
