//! Plain-text rendering of snapshots and shell view-models.

use std::fmt::Write;

use dash_app_core::{AuthFeedback, ShellVm};
use dash_core::{AppSnapshot, Chrome};

pub fn preferences(snapshot: &AppSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {}", "theme", snapshot.theme.theme);
    let _ = writeln!(out, "{:<18} {}", "rtl", snapshot.theme.is_rtl);
    let _ = writeln!(out, "{:<18} {}", "sidebarCollapsed", snapshot.layout.sidebar_collapsed);
    let _ = writeln!(out, "{:<18} {}", "layoutMode", snapshot.layout.layout_mode);
    out
}

pub fn shell(vm: &ShellVm) -> String {
    let mut out = String::new();
    let verb = if vm.redirected { "redirect" } else { "render" };
    let _ = writeln!(out, ":: {verb} {}", vm.route.path());

    let chrome = match vm.chrome {
        Chrome::Minimal => "minimal".to_string(),
        Chrome::TopNav => "topnav".to_string(),
        Chrome::Sidebar { collapsed: true } => "sidebar (collapsed)".to_string(),
        Chrome::Sidebar { collapsed: false } => "sidebar".to_string(),
    };
    let _ = writeln!(out, "   chrome: {chrome}  theme: {}  dir: {}", vm.theme, vm.direction);

    match &vm.user {
        Some(user) => {
            let _ = writeln!(out, "   user:   {} <{}>", user.name, user.email);
        }
        None if vm.signing_in => {
            let _ = writeln!(out, "   user:   (signing in...)");
        }
        None => {
            let _ = writeln!(out, "   user:   (anonymous)");
        }
    }

    for item in &vm.nav {
        let marker = if item.active { '>' } else { ' ' };
        let _ = writeln!(out, "   {marker} {:<14} {}", item.label, item.path);
    }
    out
}

pub fn feedback(feedback: Option<&AuthFeedback>) -> Option<String> {
    feedback.map(|f| match f {
        AuthFeedback::Error(message) => format!("!! {message}"),
        AuthFeedback::PasswordResetSent { email } => {
            format!(":: Password reset link sent to {email}")
        }
    })
}
