use std::sync::{Arc, Mutex, PoisonError};

use dash_config::{PREF_KEY_RTL, PREF_KEY_SIDEBAR_COLLAPSED, PREF_KEY_THEME};
use dash_core::{AppSnapshot, Theme};
use dash_persistence::{encode_flag, PreferenceStore};

/// Reaction to a completed transition. Hooks compare slices themselves and
/// must not fail the dispatch.
pub trait SnapshotHook: Send + Sync {
    fn after_transition(&self, prev: &AppSnapshot, next: &AppSnapshot);
}

/// Writes the theme, direction and sidebar preferences whenever they change.
pub struct PreferenceSync<P> {
    store: P,
}

impl<P: PreferenceStore> PreferenceSync<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    fn write(&self, key: &str, value: &str) {
        match self.store.set(key, value) {
            Ok(()) => tracing::debug!(key, value, "Persisted preference"),
            Err(e) => tracing::warn!(key, kind = ?e.kind(), "Failed to persist preference: {e}"),
        }
    }
}

impl<P: PreferenceStore> SnapshotHook for PreferenceSync<P> {
    fn after_transition(&self, prev: &AppSnapshot, next: &AppSnapshot) {
        if prev.theme.theme != next.theme.theme {
            self.write(PREF_KEY_THEME, next.theme.theme.as_str());
        }
        if prev.theme.is_rtl != next.theme.is_rtl {
            self.write(PREF_KEY_RTL, encode_flag(next.theme.is_rtl));
        }
        if prev.layout.sidebar_collapsed != next.layout.sidebar_collapsed {
            self.write(
                PREF_KEY_SIDEBAR_COLLAPSED,
                encode_flag(next.layout.sidebar_collapsed),
            );
        }
    }
}

/// Document-level presentation flags: the dark class and the `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentState {
    pub dark_mode: bool,
    pub direction: &'static str,
}

impl DocumentState {
    pub fn from_snapshot(snapshot: &AppSnapshot) -> Self {
        Self {
            dark_mode: snapshot.theme.theme == Theme::Dark,
            direction: snapshot.theme.direction(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentFlags {
    state: Arc<Mutex<DocumentState>>,
}

impl DocumentFlags {
    pub fn new(initial: &AppSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(DocumentState::from_snapshot(initial))),
        }
    }

    pub fn state(&self) -> DocumentState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotHook for DocumentFlags {
    fn after_transition(&self, prev: &AppSnapshot, next: &AppSnapshot) {
        if prev.theme == next.theme {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = DocumentState::from_snapshot(next);
    }
}
