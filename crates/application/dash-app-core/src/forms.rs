//! Client-side checks run before anything reaches the session service.

use dash_config::MIN_PASSWORD_LEN;

use crate::ports::{Credentials, Registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Name is required")]
    NameRequired,
}

/// Surrounding whitespace counts as malformed; callers trim before sending.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::InvalidEmail);
    };
    let valid = !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
    if valid {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), FormError> {
    validate_email(&credentials.email)?;
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_registration(registration: &Registration) -> Result<(), FormError> {
    if registration.name.trim().is_empty() {
        return Err(FormError::NameRequired);
    }
    validate_credentials(&registration.credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert_eq!(validate_email("admin@example.com"), Ok(()));
        assert_eq!(validate_email("a.b@mail.example.org"), Ok(()));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "admin",
            "@example.com",
            "a@b",
            "a@@b.com",
            "a b@c.com",
            "a@.com",
            "a@b.",
            " admin@example.com",
        ] {
            assert_eq!(validate_email(bad), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn credentials_are_checked_as_sent() {
        let creds = Credentials::new("  admin@example.com ", "admin123");
        assert_eq!(creds.email, "admin@example.com");
        assert_eq!(validate_credentials(&creds), Ok(()));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let creds = Credentials::new("admin@example.com", "12345");
        assert_eq!(validate_credentials(&creds), Err(FormError::PasswordTooShort));
    }

    #[test]
    fn registration_needs_a_name() {
        let reg = Registration {
            name: "  ".into(),
            credentials: Credentials::new("new@example.com", "secret1"),
        };
        assert_eq!(validate_registration(&reg), Err(FormError::NameRequired));
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("admin@example.com", "admin123");
        assert!(!format!("{creds:?}").contains("admin123"));
    }
}
