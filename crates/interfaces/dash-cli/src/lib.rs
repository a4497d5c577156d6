pub mod commands;
pub mod render;
pub mod script;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use dash_app_core::{DashApplication, FixedAppearance, MockSessionService};
use dash_core::{LayoutMode, Theme};
use dash_persistence::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

pub type App = DashApplication<MockSessionService>;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(t: CliTheme) -> Self {
        match t {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliLayoutMode {
    Sidebar,
    Topnav,
    Minimal,
}

impl From<CliLayoutMode> for LayoutMode {
    fn from(m: CliLayoutMode) -> Self {
        match m {
            CliLayoutMode::Sidebar => LayoutMode::Sidebar,
            CliLayoutMode::Topnav => LayoutMode::Topnav,
            CliLayoutMode::Minimal => LayoutMode::Minimal,
        }
    }
}

/// Where preferences live for this invocation.
#[derive(Debug, Clone)]
pub enum PreferenceLocation {
    Default,
    File(PathBuf),
    Ephemeral,
}

/// Process-wide settings gathered from flags and environment.
#[derive(Debug, Clone)]
pub struct Environment {
    pub preferences: PreferenceLocation,
    pub prefers_dark: bool,
    pub latency: Duration,
}

impl Environment {
    pub fn open_preferences(&self) -> Result<Arc<dyn PreferenceStore>> {
        let store: Arc<dyn PreferenceStore> = match &self.preferences {
            PreferenceLocation::Default => Arc::new(
                FilePreferenceStore::open_default()
                    .context("Failed to locate the preferences file")?,
            ),
            PreferenceLocation::File(path) => Arc::new(FilePreferenceStore::at(path)),
            PreferenceLocation::Ephemeral => Arc::new(MemoryPreferenceStore::new()),
        };
        Ok(store)
    }

    pub fn boot(&self) -> Result<App> {
        let prefs = self.open_preferences()?;
        Ok(DashApplication::boot(
            prefs,
            &FixedAppearance(self.prefers_dark),
            MockSessionService::new(self.latency),
        ))
    }
}
