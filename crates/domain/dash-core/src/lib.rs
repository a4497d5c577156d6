use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod action;
pub mod reducer;
pub mod routes;

pub use action::Action;
pub use reducer::reduce;
pub use routes::{Chrome, NavItem, Navigation, Route, NAV_ITEMS};

pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Who is signed in. `is_authenticated` tracks `user.is_some()`; `is_loading`
/// is only set while a sign-in attempt is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserIdentity) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    pub fn access(&self) -> Access {
        if self.is_authenticated {
            Access::Authenticated
        } else {
            Access::Anonymous
        }
    }
}

/// Coarse authorization state consumed by the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light or dark)")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub theme: Theme,
    pub is_rtl: bool,
}

impl ThemePreference {
    /// Value of the document `dir` attribute.
    pub fn direction(&self) -> &'static str {
        if self.is_rtl {
            "rtl"
        } else {
            "ltr"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Sidebar,
    Topnav,
    Minimal,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Sidebar => "sidebar",
            LayoutMode::Topnav => "topnav",
            LayoutMode::Minimal => "minimal",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout mode '{0}' (expected sidebar, topnav or minimal)")]
pub struct ParseLayoutModeError(pub String);

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidebar" => Ok(LayoutMode::Sidebar),
            "topnav" => Ok(LayoutMode::Topnav),
            "minimal" => Ok(LayoutMode::Minimal),
            other => Err(ParseLayoutModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutPreference {
    pub layout_mode: LayoutMode,
    pub sidebar_collapsed: bool,
}

/// The whole application state at one instant. Transitions build a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    pub session: Session,
    pub theme: ThemePreference,
    pub layout: LayoutPreference,
}
