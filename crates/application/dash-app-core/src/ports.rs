use std::fmt;

use async_trait::async_trait;
use dash_core::UserIdentity;

use crate::forms::FormError;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Surrounding whitespace is stripped from the email; the password is
    /// kept as typed.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email: String = email.into();
        Self {
            email: email.trim().to_string(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub credentials: Credentials,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// User-facing authentication failures, shown inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists")]
    UserExists,
    #[error("Email not found")]
    EmailNotFound,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{0}")]
    Unavailable(String),
}

/// Each call performs exactly one attempt; there are no retries.
#[async_trait]
pub trait SessionService: Send + Sync + 'static {
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;
    async fn register(&self, registration: &Registration) -> Result<UserIdentity, AuthError>;
    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Operating system colour-scheme signal, consulted when no theme is stored.
pub trait SystemAppearance: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// Appearance signal fixed at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub bool);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
