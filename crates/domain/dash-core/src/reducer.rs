use crate::action::Action;
use crate::{AppSnapshot, LayoutPreference, Session, ThemePreference};

/// Pure transition function. Every slice is rebuilt, but only the sub-reducer
/// owning the action's slice can produce a different value.
pub fn reduce(state: &AppSnapshot, action: &Action) -> AppSnapshot {
    AppSnapshot {
        session: reduce_session(&state.session, action),
        theme: reduce_theme(&state.theme, action),
        layout: reduce_layout(&state.layout, action),
    }
}

pub fn reduce_session(session: &Session, action: &Action) -> Session {
    match action {
        Action::LoginStart => Session {
            is_loading: true,
            ..session.clone()
        },
        Action::LoginSuccess(user) => Session::signed_in(user.clone()),
        Action::LoginFailure => Session {
            is_loading: false,
            ..session.clone()
        },
        Action::Logout => Session::logged_out(),
        Action::ToggleTheme
        | Action::SetTheme(_)
        | Action::ToggleRtl
        | Action::SetRtl(_)
        | Action::SetLayoutMode(_)
        | Action::ToggleSidebar
        | Action::SetSidebarCollapsed(_) => session.clone(),
    }
}

pub fn reduce_theme(theme: &ThemePreference, action: &Action) -> ThemePreference {
    let mut next = *theme;
    match action {
        Action::ToggleTheme => next.theme = theme.theme.toggled(),
        Action::SetTheme(t) => next.theme = *t,
        Action::ToggleRtl => next.is_rtl = !theme.is_rtl,
        Action::SetRtl(rtl) => next.is_rtl = *rtl,
        Action::LoginStart
        | Action::LoginSuccess(_)
        | Action::LoginFailure
        | Action::Logout
        | Action::SetLayoutMode(_)
        | Action::ToggleSidebar
        | Action::SetSidebarCollapsed(_) => {}
    }
    next
}

pub fn reduce_layout(layout: &LayoutPreference, action: &Action) -> LayoutPreference {
    let mut next = *layout;
    match action {
        Action::SetLayoutMode(mode) => next.layout_mode = *mode,
        Action::ToggleSidebar => next.sidebar_collapsed = !layout.sidebar_collapsed,
        Action::SetSidebarCollapsed(collapsed) => next.sidebar_collapsed = *collapsed,
        Action::LoginStart
        | Action::LoginSuccess(_)
        | Action::LoginFailure
        | Action::Logout
        | Action::ToggleTheme
        | Action::SetTheme(_)
        | Action::ToggleRtl
        | Action::SetRtl(_) => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayoutMode, Theme, UserIdentity};

    fn user(name: &str) -> UserIdentity {
        UserIdentity {
            id: "1".into(),
            email: "a@b.com".into(),
            name: name.into(),
            avatar_url: None,
        }
    }

    #[test]
    fn login_failure_keeps_existing_user() {
        let signed_in = Session::signed_in(user("A"));
        let started = reduce_session(&signed_in, &Action::LoginStart);
        assert!(started.is_loading);

        let failed = reduce_session(&started, &Action::LoginFailure);
        assert!(!failed.is_loading);
        assert_eq!(failed.user, signed_in.user);
        assert!(failed.is_authenticated);
    }

    #[test]
    fn session_reducer_ignores_other_slices() {
        let s = Session::signed_in(user("A"));
        for action in [
            Action::ToggleTheme,
            Action::SetRtl(true),
            Action::SetLayoutMode(LayoutMode::Minimal),
            Action::ToggleSidebar,
        ] {
            assert_eq!(reduce_session(&s, &action), s);
        }
    }

    #[test]
    fn set_theme_overrides_current_value() {
        let dark = ThemePreference {
            theme: Theme::Dark,
            is_rtl: true,
        };
        let next = reduce_theme(&dark, &Action::SetTheme(Theme::Light));
        assert_eq!(next.theme, Theme::Light);
        assert!(next.is_rtl);
    }

    #[test]
    fn toggle_sidebar_flips_flag_only() {
        let layout = LayoutPreference {
            layout_mode: LayoutMode::Topnav,
            sidebar_collapsed: false,
        };
        let next = reduce_layout(&layout, &Action::ToggleSidebar);
        assert!(next.sidebar_collapsed);
        assert_eq!(next.layout_mode, LayoutMode::Topnav);
    }
}
