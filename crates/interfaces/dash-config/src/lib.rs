//! Central configuration constants for preference keys, routes and runtime defaults.

/// Preference key holding the colour theme (`"light"` or `"dark"`).
pub const PREF_KEY_THEME: &str = "theme";

/// Preference key holding the right-to-left flag (`"true"` or `"false"`).
pub const PREF_KEY_RTL: &str = "rtl";

/// Preference key holding the sidebar-collapsed flag (`"true"` or `"false"`).
pub const PREF_KEY_SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";

/// Where anonymous visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Landing page for signed-in users.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Simulated network latency of the mock session service, in milliseconds.
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;

/// Minimum password length accepted by the sign-in and registration forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Capacity of the kernel's background event channel.
pub const KERNEL_CHANNEL_CAPACITY: usize = 100;

/// File name of the preference document inside the config directory.
pub const PREFERENCES_FILENAME: &str = "preferences.json";

pub const APP_QUALIFIER: &str = "com";
pub const APP_ORG: &str = "dash";
pub const APP_NAME: &str = "admin";
