//! Route table and the guard deciding whether a destination renders.

use dash_config::{DASHBOARD_PATH, LOGIN_PATH};

use crate::{Access, LayoutMode, LayoutPreference, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    // Public
    Login,
    Register,
    ForgotPassword,

    // Protected
    Dashboard,
    Users,
    Projects,
    Transactions,
    Notifications,
    Files,
    Calendar,
    Settings,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Login,
        Route::Register,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::Users,
        Route::Projects,
        Route::Transactions,
        Route::Notifications,
        Route::Files,
        Route::Calendar,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => DASHBOARD_PATH,
            Route::Users => "/users",
            Route::Projects => "/projects",
            Route::Transactions => "/transactions",
            Route::Notifications => "/notifications",
            Route::Files => "/files",
            Route::Calendar => "/calendar",
            Route::Settings => "/settings",
        }
    }

    /// Exact match against the route table; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login | Route::Register | Route::ForgotPassword)
    }
}

/// Outcome of evaluating a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn target(self) -> Route {
        match self {
            Navigation::Render(r) | Navigation::Redirect(r) => r,
        }
    }
}

/// Protected routes render only for authenticated sessions. `is_loading` plays no part.
pub fn guard(session: &Session, route: Route) -> Navigation {
    match (route.is_protected(), session.access()) {
        (false, _) | (true, Access::Authenticated) => Navigation::Render(route),
        (true, Access::Anonymous) => Navigation::Redirect(Route::Login),
    }
}

/// Resolve a raw path. The root path always goes to the sign-in page; unknown
/// paths land on the dashboard when signed in.
pub fn resolve(session: &Session, path: &str) -> Navigation {
    if path.trim() == "/" {
        return Navigation::Redirect(Route::Login);
    }
    match Route::from_path(path) {
        Some(route) => guard(session, route),
        None => match session.access() {
            Access::Authenticated => Navigation::Redirect(Route::Dashboard),
            Access::Anonymous => Navigation::Redirect(Route::Login),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    const fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::Users, "Users"),
    NavItem::new(Route::Projects, "Projects"),
    NavItem::new(Route::Transactions, "Transactions"),
    NavItem::new(Route::Notifications, "Notifications"),
    NavItem::new(Route::Files, "Files"),
    NavItem::new(Route::Calendar, "Calendar"),
    NavItem::new(Route::Settings, "Settings"),
];

/// Navigation chrome wrapped around a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Minimal,
    Sidebar { collapsed: bool },
    TopNav,
}

pub fn chrome_for(route: Route, layout: &LayoutPreference) -> Chrome {
    if !route.is_protected() {
        return Chrome::Minimal;
    }
    match layout.layout_mode {
        LayoutMode::Topnav => Chrome::TopNav,
        // Minimal mode still gets the sidebar on protected pages.
        LayoutMode::Sidebar | LayoutMode::Minimal => Chrome::Sidebar {
            collapsed: layout.sidebar_collapsed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_path_maps_back_to_itself() {
        for r in Route::ALL {
            assert_eq!(Route::from_path(r.path()), Some(r));
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/users/"), Some(Route::Users));
        assert_eq!(Route::from_path("/Users"), None);
        assert_eq!(Route::from_path("/users/42"), None);
    }

    #[test]
    fn nav_items_cover_every_protected_route() {
        let protected: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_protected()).collect();
        let nav: Vec<Route> = NAV_ITEMS.iter().map(|i| i.route).collect();
        assert_eq!(protected, nav);
    }

    #[test]
    fn public_pages_use_minimal_chrome() {
        let layout = LayoutPreference {
            layout_mode: LayoutMode::Topnav,
            sidebar_collapsed: true,
        };
        assert_eq!(chrome_for(Route::Register, &layout), Chrome::Minimal);
        assert_eq!(chrome_for(Route::Files, &layout), Chrome::TopNav);
    }

    #[test]
    fn minimal_mode_falls_back_to_sidebar() {
        let layout = LayoutPreference {
            layout_mode: LayoutMode::Minimal,
            sidebar_collapsed: true,
        };
        assert_eq!(
            chrome_for(Route::Users, &layout),
            Chrome::Sidebar { collapsed: true }
        );
    }
}
