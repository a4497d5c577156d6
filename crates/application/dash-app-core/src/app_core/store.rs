use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use dash_core::{reduce, Action, AppSnapshot};

use super::hooks::SnapshotHook;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&AppSnapshot) + Send + Sync>;

struct Inner {
    current: Mutex<Arc<AppSnapshot>>,
    // Held for the whole transition, hooks and notifications included.
    dispatch_lock: Mutex<()>,
    dispatching_thread: Mutex<Option<ThreadId>>,
    deferred: Mutex<VecDeque<Action>>,
    hooks: Mutex<Vec<Arc<dyn SnapshotHook>>>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

/// Marks the current thread as dispatching. Dropping it, also while a
/// subscriber or hook unwinds, clears the marker and any queued actions.
struct DispatchScope<'a> {
    inner: &'a Inner,
}

impl<'a> DispatchScope<'a> {
    fn enter(inner: &'a Inner, thread: ThreadId) -> Self {
        *lock(&inner.dispatching_thread) = Some(thread);
        Self { inner }
    }
}

impl Drop for DispatchScope<'_> {
    fn drop(&mut self) {
        *lock(&self.inner.dispatching_thread) = None;
        let dropped = {
            let mut deferred = lock(&self.inner.deferred);
            let n = deferred.len();
            deferred.clear();
            n
        };
        if dropped > 0 {
            tracing::warn!(dropped, "Discarded queued actions after an interrupted dispatch");
        }
    }
}

/// Single source of truth for the application snapshot. Cloning yields
/// another handle to the same container.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Inner>,
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AppStore {
    pub fn new(initial: AppSnapshot) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: Mutex::new(Arc::new(initial)),
                dispatch_lock: Mutex::new(()),
                dispatching_thread: Mutex::new(None),
                deferred: Mutex::new(VecDeque::new()),
                hooks: Mutex::new(Vec::new()),
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    pub fn current_snapshot(&self) -> Arc<AppSnapshot> {
        lock(&self.inner.current).clone()
    }

    /// Post-transition hooks run after subscribers, in registration order.
    pub fn add_hook(&self, hook: impl SnapshotHook + 'static) {
        lock(&self.inner.hooks).push(Arc::new(hook));
    }

    pub fn subscribe(&self, f: impl Fn(&AppSnapshot) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        let f: Subscriber = Arc::new(f);
        lock(&self.inner.subscribers).push((id, f));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = lock(&self.inner.subscribers);
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    /// Apply `action` and notify everyone before returning. A dispatch issued
    /// from inside a subscriber or hook is queued and applied right after the
    /// current one, still before the outer call returns.
    pub fn dispatch(&self, action: Action) {
        let me = thread::current().id();
        if *lock(&self.inner.dispatching_thread) == Some(me) {
            lock(&self.inner.deferred).push_back(action);
            return;
        }

        let _serial = lock(&self.inner.dispatch_lock);
        let _scope = DispatchScope::enter(&self.inner, me);

        let mut next_action = Some(action);
        while let Some(action) = next_action {
            self.transition(&action);
            next_action = lock(&self.inner.deferred).pop_front();
        }
    }

    fn transition(&self, action: &Action) {
        let (prev, next) = {
            let mut current = lock(&self.inner.current);
            let prev = current.clone();
            let next = Arc::new(reduce(&prev, action));
            *current = next.clone();
            (prev, next)
        };
        tracing::debug!(?action, changed = (*prev != *next), "Dispatched action");

        let subscribers: Vec<Subscriber> = lock(&self.inner.subscribers)
            .iter()
            .map(|(_, f)| f.clone())
            .collect();
        for f in subscribers {
            f(&next);
        }

        let hooks: Vec<Arc<dyn SnapshotHook>> = lock(&self.inner.hooks).clone();
        for hook in hooks {
            hook.after_transition(&prev, &next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::Theme;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn snapshot_is_visible_immediately_after_dispatch() {
        let store = AppStore::new(AppSnapshot::default());
        store.dispatch(Action::ToggleTheme);
        assert_eq!(store.current_snapshot().theme.theme, Theme::Dark);
    }

    #[test]
    fn old_snapshots_are_never_mutated() {
        let store = AppStore::new(AppSnapshot::default());
        let before = store.current_snapshot();
        store.dispatch(Action::ToggleSidebar);
        assert!(!before.layout.sidebar_collapsed);
        assert!(store.current_snapshot().layout.sidebar_collapsed);
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving() {
        let store = AppStore::new(AppSnapshot::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let id = {
            let calls = calls.clone();
            store.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        store.dispatch(Action::ToggleRtl);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::ToggleRtl);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_from_subscriber_is_applied_before_outer_returns() {
        let store = AppStore::new(AppSnapshot::default());
        {
            let handle = store.clone();
            store.subscribe(move |snap| {
                if snap.theme.theme == Theme::Dark && !snap.theme.is_rtl {
                    handle.dispatch(Action::SetRtl(true));
                }
            });
        }

        store.dispatch(Action::SetTheme(Theme::Dark));

        let snap = store.current_snapshot();
        assert_eq!(snap.theme.theme, Theme::Dark);
        assert!(snap.theme.is_rtl);
    }

    #[test]
    fn dispatch_keeps_working_after_a_listener_panics() {
        let store = AppStore::new(AppSnapshot::default());
        {
            let handle = store.clone();
            store.subscribe(move |snap| {
                if snap.theme.is_rtl && snap.theme.theme == Theme::Light {
                    handle.dispatch(Action::ToggleSidebar);
                    panic!("listener failure");
                }
            });
        }

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.dispatch(Action::ToggleRtl);
        }));
        assert!(outcome.is_err());
        assert!(store.current_snapshot().theme.is_rtl);
        // The action queued by the failing listener is discarded.
        assert!(!store.current_snapshot().layout.sidebar_collapsed);

        store.dispatch(Action::SetTheme(Theme::Dark));
        assert_eq!(store.current_snapshot().theme.theme, Theme::Dark);
    }
}
