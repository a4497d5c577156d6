use dash_core::Action;

use crate::ports::{Credentials, Registration};

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Session
    Login(Credentials),
    Register(Registration),
    RequestPasswordReset { email: String },
    Logout,

    // Navigation
    Navigate(String),

    // Theme and layout
    Apply(Action),
}
