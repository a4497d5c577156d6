pub mod commands;
pub mod events;
pub mod hooks;
pub mod store;

pub use commands::AppCommand;
pub use events::KernelEvent;
pub use hooks::{DocumentFlags, DocumentState, PreferenceSync, SnapshotHook};
pub use store::{AppStore, SubscriptionId};
