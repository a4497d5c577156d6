use dash_core::routes::chrome_for;
use dash_core::{AppSnapshot, Chrome, Navigation, Route, Theme, NAV_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemVm {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadgeVm {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// Everything the page shell needs to draw itself around the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellVm {
    pub route: Route,
    pub redirected: bool,
    pub chrome: Chrome,
    pub nav: Vec<NavItemVm>,
    pub theme: Theme,
    pub direction: &'static str,
    pub user: Option<UserBadgeVm>,
    pub signing_in: bool,
}

pub fn shell_vm(snapshot: &AppSnapshot, location: Navigation) -> ShellVm {
    let route = location.target();
    let chrome = chrome_for(route, &snapshot.layout);

    let nav = match chrome {
        Chrome::Minimal => Vec::new(),
        Chrome::Sidebar { .. } | Chrome::TopNav => NAV_ITEMS
            .iter()
            .map(|item| NavItemVm {
                label: item.label,
                path: item.route.path(),
                active: item.route == route,
            })
            .collect(),
    };

    ShellVm {
        route,
        redirected: matches!(location, Navigation::Redirect(_)),
        chrome,
        nav,
        theme: snapshot.theme.theme,
        direction: snapshot.theme.direction(),
        user: snapshot.session.user.as_ref().map(|u| UserBadgeVm {
            name: u.name.clone(),
            email: u.email.clone(),
            avatar_url: u.avatar_url.clone(),
        }),
        signing_in: snapshot.session.is_loading,
    }
}
