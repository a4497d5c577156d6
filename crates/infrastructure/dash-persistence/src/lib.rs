mod api;
mod error;
mod file_store;
mod memory_store;
mod paths;

pub use api::*;
pub use error::*;
pub use file_store::FilePreferenceStore;
pub use memory_store::MemoryPreferenceStore;
pub use paths::default_preferences_path;
