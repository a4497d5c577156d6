use std::time::Duration;

use dash_app_core::{
    AppCommand, AppKernel, AppStore, AuthFeedback, Credentials, KernelEvent, MockSessionService,
    Registration,
};
use dash_core::{Action, AppSnapshot, Navigation, Route, UserIdentity};

fn kernel() -> (AppStore, AppKernel<MockSessionService>) {
    let store = AppStore::new(AppSnapshot::default());
    let kernel = AppKernel::new(store.clone(), MockSessionService::new(Duration::ZERO));
    (store, kernel)
}

fn admin() -> Credentials {
    Credentials::new("admin@example.com", "admin123")
}

#[tokio::test]
async fn successful_login_lands_on_dashboard() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(admin()));
    assert!(store.current_snapshot().session.is_loading);
    assert!(kernel.has_pending_work());

    kernel.settle_all().await;

    let session = store.current_snapshot().session.clone();
    assert!(session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(session.user.map(|u| u.name), Some("Admin User".to_string()));
    assert_eq!(kernel.location(), Navigation::Render(Route::Dashboard));
    assert_eq!(kernel.feedback(), None);
}

#[tokio::test]
async fn failed_login_reports_message_and_clears_loading() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(Credentials::new(
        "admin@example.com",
        "wrong-password",
    )));
    kernel.settle_all().await;

    let session = store.current_snapshot().session.clone();
    assert!(!session.is_loading);
    assert!(!session.is_authenticated);
    assert_eq!(
        kernel.feedback(),
        Some(&AuthFeedback::Error("Invalid email or password".into()))
    );
    assert_eq!(kernel.location(), Navigation::Render(Route::Login));
}

#[tokio::test]
async fn invalid_form_never_starts_an_attempt() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(Credentials::new("not-an-email", "admin123")));

    assert!(!store.current_snapshot().session.is_loading);
    assert!(!kernel.has_pending_work());
    assert_eq!(
        kernel.feedback(),
        Some(&AuthFeedback::Error("Invalid email address".into()))
    );
}

#[tokio::test]
async fn login_completing_after_logout_is_ignored() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(admin()));
    kernel.dispatch(AppCommand::Logout);
    assert!(!store.current_snapshot().session.is_loading);
    assert!(!kernel.has_pending_work());

    // The background task still delivers its result.
    tokio::time::sleep(Duration::from_millis(50)).await;
    kernel.tick();

    let session = store.current_snapshot().session.clone();
    assert!(!session.is_authenticated);
    assert!(!session.is_loading);
    assert_eq!(session.user, None);
}

#[tokio::test]
async fn newer_attempt_supersedes_older_one() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(Credentials::new(
        "admin@example.com",
        "wrong-password",
    )));
    kernel.dispatch(AppCommand::Login(Credentials::new("user@example.com", "user123")));

    kernel.settle().await;
    kernel.settle().await;

    let session = store.current_snapshot().session.clone();
    assert!(session.is_authenticated);
    assert_eq!(session.user.map(|u| u.name), Some("John Doe".to_string()));
    assert_eq!(kernel.feedback(), None);
}

#[tokio::test]
async fn stale_settlements_are_dropped_in_tick() {
    let (store, mut kernel) = kernel();
    let before = store.current_snapshot();

    kernel
        .sender()
        .send(KernelEvent::LoginSettled {
            attempt: uuid::Uuid::new_v4(),
            outcome: Ok(UserIdentity {
                id: "99".into(),
                email: "ghost@example.com".into(),
                name: "Ghost".into(),
                avatar_url: None,
            }),
        })
        .await
        .unwrap();

    kernel.tick();

    assert_eq!(*store.current_snapshot(), *before);
}

#[tokio::test]
async fn logout_redirects_protected_location() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(admin()));
    kernel.settle_all().await;
    kernel.dispatch(AppCommand::Navigate("/users".into()));
    assert_eq!(kernel.location(), Navigation::Render(Route::Users));

    kernel.dispatch(AppCommand::Logout);
    assert!(!store.current_snapshot().session.is_authenticated);
    assert_eq!(kernel.location(), Navigation::Redirect(Route::Login));
}

#[tokio::test]
async fn deep_link_renders_after_sign_in() {
    let (_store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Navigate("/settings".into()));
    assert_eq!(kernel.location(), Navigation::Redirect(Route::Login));

    kernel.dispatch(AppCommand::Login(admin()));
    kernel.settle_all().await;
    assert_eq!(kernel.location(), Navigation::Render(Route::Settings));
}

#[tokio::test]
async fn registration_signs_the_new_user_in() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Register(Registration {
        name: "New Person".into(),
        credentials: Credentials::new("new@example.com", "secret1"),
    }));
    kernel.settle_all().await;

    let session = store.current_snapshot().session.clone();
    assert!(session.is_authenticated);
    assert_eq!(session.user.map(|u| u.email), Some("new@example.com".to_string()));
}

#[tokio::test]
async fn password_reset_feedback() {
    let (store, mut kernel) = kernel();
    let before = store.current_snapshot();

    kernel.dispatch(AppCommand::RequestPasswordReset {
        email: "user@example.com".into(),
    });
    kernel.settle_all().await;
    assert_eq!(
        kernel.feedback(),
        Some(&AuthFeedback::PasswordResetSent {
            email: "user@example.com".into()
        })
    );

    kernel.dispatch(AppCommand::RequestPasswordReset {
        email: "ghost@example.com".into(),
    });
    kernel.settle_all().await;
    assert_eq!(
        kernel.feedback(),
        Some(&AuthFeedback::Error("Email not found".into()))
    );

    assert_eq!(*store.current_snapshot(), *before);
}

#[tokio::test]
async fn apply_passes_preference_actions_through() {
    let (store, mut kernel) = kernel();
    kernel.dispatch(AppCommand::Apply(Action::ToggleTheme));
    assert_eq!(store.current_snapshot().theme.theme, dash_core::Theme::Dark);
}

#[tokio::test]
async fn apply_ignores_sign_in_transitions() {
    let (store, mut kernel) = kernel();
    let before = store.current_snapshot();

    kernel.dispatch(AppCommand::Apply(Action::LoginStart));
    kernel.dispatch(AppCommand::Apply(Action::LoginSuccess(UserIdentity {
        id: "99".into(),
        email: "ghost@example.com".into(),
        name: "Ghost".into(),
        avatar_url: None,
    })));

    assert_eq!(*store.current_snapshot(), *before);
    assert!(!kernel.has_pending_work());
    assert_eq!(kernel.location(), Navigation::Render(Route::Login));
}

#[tokio::test]
async fn apply_failure_does_not_cut_a_running_attempt_short() {
    let store = AppStore::new(AppSnapshot::default());
    let mut kernel = AppKernel::new(
        store.clone(),
        MockSessionService::new(Duration::from_millis(20)),
    );

    kernel.dispatch(AppCommand::Login(admin()));
    kernel.dispatch(AppCommand::Apply(Action::LoginFailure));
    assert!(store.current_snapshot().session.is_loading);
    assert!(kernel.has_pending_work());

    kernel.settle_all().await;
    assert!(store.current_snapshot().session.is_authenticated);
    assert!(!store.current_snapshot().session.is_loading);
}

#[tokio::test]
async fn apply_logout_cancels_the_running_attempt() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(admin()));
    kernel.dispatch(AppCommand::Apply(Action::Logout));

    assert!(!kernel.has_pending_work());
    assert!(!store.current_snapshot().session.is_loading);

    tokio::time::sleep(Duration::from_millis(50)).await;
    kernel.tick();
    assert!(!store.current_snapshot().session.is_authenticated);
}

#[tokio::test]
async fn settle_returns_when_nothing_is_outstanding() {
    let (_store, mut kernel) = kernel();

    tokio::time::timeout(Duration::from_secs(1), kernel.settle())
        .await
        .unwrap();
    tokio::time::timeout(Duration::from_secs(1), kernel.settle_all())
        .await
        .unwrap();
}

#[tokio::test]
async fn padded_email_signs_in() {
    let (store, mut kernel) = kernel();

    kernel.dispatch(AppCommand::Login(Credentials::new(" admin@example.com\t", "admin123")));
    kernel.settle_all().await;
    assert!(store.current_snapshot().session.is_authenticated);

    kernel.dispatch(AppCommand::RequestPasswordReset {
        email: " user@example.com ".into(),
    });
    kernel.settle_all().await;
    assert_eq!(
        kernel.feedback(),
        Some(&AuthFeedback::PasswordResetSent {
            email: "user@example.com".into()
        })
    );
}
