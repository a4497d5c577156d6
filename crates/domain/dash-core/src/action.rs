use crate::{LayoutMode, Theme, UserIdentity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Session
    LoginStart,
    LoginSuccess(UserIdentity),
    LoginFailure,
    Logout,

    // Theme
    ToggleTheme,
    SetTheme(Theme),
    ToggleRtl,
    SetRtl(bool),

    // Layout
    SetLayoutMode(LayoutMode),
    ToggleSidebar,
    SetSidebarCollapsed(bool),
}

/// The snapshot slice an action is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Session,
    Theme,
    Layout,
}

impl Action {
    pub fn slice(&self) -> Slice {
        match self {
            Action::LoginStart
            | Action::LoginSuccess(_)
            | Action::LoginFailure
            | Action::Logout => Slice::Session,
            Action::ToggleTheme | Action::SetTheme(_) | Action::ToggleRtl | Action::SetRtl(_) => {
                Slice::Theme
            }
            Action::SetLayoutMode(_) | Action::ToggleSidebar | Action::SetSidebarCollapsed(_) => {
                Slice::Layout
            }
        }
    }
}
