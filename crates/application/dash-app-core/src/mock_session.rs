use std::time::Duration;

use async_trait::async_trait;
use dash_config::DEFAULT_MOCK_LATENCY_MS;
use dash_core::UserIdentity;

use crate::ports::{AuthError, Credentials, Registration, SessionService};

const DEFAULT_AVATAR_URL: &str =
    "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=100&h=100";

#[derive(Debug, Clone)]
pub struct MockAccount {
    pub identity: UserIdentity,
    pub password: String,
}

fn builtin_accounts() -> Vec<MockAccount> {
    vec![
        MockAccount {
            identity: UserIdentity {
                id: "1".into(),
                email: "admin@example.com".into(),
                name: "Admin User".into(),
                avatar_url: Some(
                    "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=100&h=100".into(),
                ),
            },
            password: "admin123".into(),
        },
        MockAccount {
            identity: UserIdentity {
                id: "2".into(),
                email: "user@example.com".into(),
                name: "John Doe".into(),
                avatar_url: Some(
                    "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=100&h=100".into(),
                ),
            },
            password: "user123".into(),
        },
    ]
}

/// In-memory accounts behind a simulated network delay. Registrations are
/// not remembered.
#[derive(Debug, Clone)]
pub struct MockSessionService {
    accounts: Vec<MockAccount>,
    latency: Duration,
}

impl Default for MockSessionService {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS))
    }
}

impl MockSessionService {
    pub fn new(latency: Duration) -> Self {
        Self {
            accounts: builtin_accounts(),
            latency,
        }
    }

    pub fn with_accounts(accounts: Vec<MockAccount>, latency: Duration) -> Self {
        Self { accounts, latency }
    }

    pub fn accounts(&self) -> &[MockAccount] {
        &self.accounts
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn find_by_email(&self, email: &str) -> Option<&MockAccount> {
        self.accounts.iter().find(|a| a.identity.email == email)
    }
}

#[async_trait]
impl SessionService for MockSessionService {
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        self.simulate_latency().await;
        self.find_by_email(&credentials.email)
            .filter(|a| a.password == credentials.password)
            .map(|a| a.identity.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn register(&self, registration: &Registration) -> Result<UserIdentity, AuthError> {
        self.simulate_latency().await;
        let email = &registration.credentials.email;
        if self.find_by_email(email).is_some() {
            return Err(AuthError::UserExists);
        }
        Ok(UserIdentity {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            email: email.clone(),
            name: registration.name.clone(),
            avatar_url: Some(DEFAULT_AVATAR_URL.to_string()),
        })
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.simulate_latency().await;
        self.find_by_email(email)
            .map(|_| ())
            .ok_or(AuthError::EmailNotFound)
    }
}
