use std::sync::Arc;

use dash_persistence::PreferenceStore;

use crate::app_core::{AppStore, DocumentFlags, PreferenceSync};
use crate::boot::initial_snapshot;
use crate::kernel::AppKernel;
use crate::ports::{SessionService, SystemAppearance};

/// Fully wired application: store seeded from preferences, persistence and
/// document hooks installed, kernel ready for commands.
pub struct DashApplication<S> {
    pub kernel: AppKernel<S>,
    pub document: DocumentFlags,
}

impl<S: SessionService> DashApplication<S> {
    pub fn boot(
        prefs: Arc<dyn PreferenceStore>,
        system: &dyn SystemAppearance,
        session: S,
    ) -> Self {
        let initial = initial_snapshot(prefs.as_ref(), system);
        tracing::debug!(
            theme = %initial.theme.theme,
            rtl = initial.theme.is_rtl,
            sidebar_collapsed = initial.layout.sidebar_collapsed,
            "Loaded initial snapshot"
        );

        let store = AppStore::new(initial.clone());
        let document = DocumentFlags::new(&initial);
        store.add_hook(PreferenceSync::new(prefs));
        store.add_hook(document.clone());

        Self {
            kernel: AppKernel::new(store, session),
            document,
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.kernel.store
    }
}
