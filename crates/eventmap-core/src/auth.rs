//! Authentication collaborator.
//!
//! The [`SessionStore`](crate::session::SessionStore) asks an
//! [`Authenticator`] to turn credentials into a [`User`]. There is no
//! credential backend yet, so [`MockAuthenticator`] derives the user
//! from the email alone: any non-empty email/password pair signs in.

use eventmap_types::{User, UserId};
use rand::Rng;

/// Resolves credentials into a user identity.
///
/// Returning `None` means "no-op": the session is left untouched and no
/// toast is shown.
pub trait Authenticator: Send + Sync {
    /// Sign in an existing user.
    fn sign_in(&self, email: &str, password: &str) -> Option<User>;

    /// Register a new user and sign them in.
    fn sign_up(&self, name: &str, email: &str, password: &str) -> Option<User>;
}

/// Placeholder authenticator that performs no credential check.
///
/// - Sign-in: id `user-1`, name is the local part of the email, premium
///   iff the email contains the configured marker.
/// - Sign-up: id `user-<0..1000>` drawn at random, never premium.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    premium_marker: String,
}

impl MockAuthenticator {
    /// Create a mock authenticator with the given premium marker.
    pub fn new(premium_marker: impl Into<String>) -> Self {
        Self {
            premium_marker: premium_marker.into(),
        }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new("premium")
    }
}

/// The part of `email` before the first `@`.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

impl Authenticator for MockAuthenticator {
    fn sign_in(&self, email: &str, password: &str) -> Option<User> {
        if email.is_empty() || password.is_empty() {
            return None;
        }
        let is_premium = !self.premium_marker.is_empty() && email.contains(&self.premium_marker);
        Some(User {
            id: UserId::from("user-1"),
            name: local_part(email).to_owned(),
            email: email.to_owned(),
            is_premium,
        })
    }

    fn sign_up(&self, name: &str, email: &str, password: &str) -> Option<User> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return None;
        }
        let suffix: u32 = rand::rng().random_range(0..1000);
        Some(User {
            id: UserId::new(format!("user-{suffix}")),
            name: name.to_owned(),
            email: email.to_owned(),
            is_premium: false,
        })
    }
}
