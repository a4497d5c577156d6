pub mod app;
pub mod app_core;
mod async_runtime;
pub mod boot;
pub mod forms;
pub mod kernel;
pub mod mock_session;
pub mod ports;
pub mod viewmodel;

pub use app::DashApplication;
pub use app_core::*;
pub use boot::initial_snapshot;
pub use kernel::{AppKernel, AuthFeedback, LoginAttemptId};
pub use mock_session::MockSessionService;
pub use ports::*;
pub use viewmodel::*;
