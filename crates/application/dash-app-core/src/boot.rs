use dash_config::{PREF_KEY_RTL, PREF_KEY_SIDEBAR_COLLAPSED, PREF_KEY_THEME};
use dash_core::{AppSnapshot, LayoutPreference, Session, Theme, ThemePreference};
use dash_persistence::{decode_flag, PreferenceStore};

use crate::ports::SystemAppearance;

/// Startup snapshot: stored preferences over defaults. The session always
/// starts logged out and the layout mode is never restored.
pub fn initial_snapshot(prefs: &dyn PreferenceStore, system: &dyn SystemAppearance) -> AppSnapshot {
    let theme = read(prefs, PREF_KEY_THEME)
        .and_then(|raw| match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!("Ignoring stored theme: {e}");
                None
            }
        })
        .unwrap_or_else(|| {
            if system.prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });

    AppSnapshot {
        session: Session::logged_out(),
        theme: ThemePreference {
            theme,
            is_rtl: decode_flag(read(prefs, PREF_KEY_RTL).as_deref()),
        },
        layout: LayoutPreference {
            sidebar_collapsed: decode_flag(read(prefs, PREF_KEY_SIDEBAR_COLLAPSED).as_deref()),
            ..LayoutPreference::default()
        },
    }
}

fn read(prefs: &dyn PreferenceStore, key: &str) -> Option<String> {
    match prefs.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, "Failed to read preference, using default: {e}");
            None
        }
    }
}
