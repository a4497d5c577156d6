use dash_core::UserIdentity;

use crate::kernel::LoginAttemptId;
use crate::ports::AuthError;

/// Results sent back to the kernel by background session tasks.
#[derive(Debug, Clone)]
pub enum KernelEvent {
    LoginSettled {
        attempt: LoginAttemptId,
        outcome: Result<UserIdentity, AuthError>,
    },
    PasswordResetSettled {
        email: String,
        outcome: Result<(), AuthError>,
    },
}
