use std::time::{Duration, Instant};

use dash_app_core::{AppCommand, AppKernel, AppStore, Credentials, MockSessionService};
use dash_core::{AppSnapshot, Navigation, Route};

#[test]
fn login_settles_without_tokio_runtime() {
    let store = AppStore::new(AppSnapshot::default());
    let mut kernel = AppKernel::new(
        store.clone(),
        MockSessionService::new(Duration::from_millis(10)),
    );

    kernel.dispatch(AppCommand::Login(Credentials::new("admin@example.com", "admin123")));
    assert!(store.current_snapshot().session.is_loading);

    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        kernel.tick();
        if !kernel.has_pending_work() {
            let session = store.current_snapshot().session.clone();
            assert!(session.is_authenticated);
            assert!(!session.is_loading);
            assert_eq!(kernel.location(), Navigation::Render(Route::Dashboard));
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    panic!("Sign-in attempt never settled");
}
