use std::sync::Arc;

use dash_config::KERNEL_CHANNEL_CAPACITY;
use dash_core::routes::resolve;
use dash_core::action::Slice;
use dash_core::{Action, Navigation, Route};
use tokio::sync::mpsc;

use crate::app_core::{AppCommand, AppStore, KernelEvent};
use crate::forms::{validate_credentials, validate_email, validate_registration};
use crate::ports::{AuthError, SessionService};
use crate::viewmodel::{shell_vm, ShellVm};

pub type LoginAttemptId = uuid::Uuid;

/// Inline message for the sign-in, registration and reset forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFeedback {
    Error(String),
    PasswordResetSent { email: String },
}

/// Turns user intents into store actions, runs session calls in the
/// background and feeds their results back on `tick`/`settle`.
pub struct AppKernel<S> {
    pub store: AppStore,
    session: Arc<S>,

    active_attempt: Option<LoginAttemptId>,
    pending_resets: usize,
    feedback: Option<AuthFeedback>,

    requested_path: String,
    location: Navigation,

    tx: mpsc::Sender<KernelEvent>,
    rx: mpsc::Receiver<KernelEvent>,
}

impl<S> AppKernel<S>
where
    S: SessionService,
{
    pub fn new(store: AppStore, session: S) -> Self {
        let (tx, rx) = mpsc::channel(KERNEL_CHANNEL_CAPACITY);
        let requested_path = Route::Login.path().to_string();
        let location = resolve(&store.current_snapshot().session, &requested_path);
        Self {
            store,
            session: Arc::new(session),
            active_attempt: None,
            pending_resets: 0,
            feedback: None,
            requested_path,
            location,
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Login(credentials) => {
                if let Err(e) = validate_credentials(&credentials) {
                    self.feedback = Some(AuthFeedback::Error(e.to_string()));
                    return;
                }
                let session = self.session.clone();
                self.start_attempt(move |attempt, tx| async move {
                    let outcome = session.login(&credentials).await;
                    let _ = tx.send(KernelEvent::LoginSettled { attempt, outcome }).await;
                });
            }

            AppCommand::Register(registration) => {
                if let Err(e) = validate_registration(&registration) {
                    self.feedback = Some(AuthFeedback::Error(e.to_string()));
                    return;
                }
                let session = self.session.clone();
                self.start_attempt(move |attempt, tx| async move {
                    let outcome = session.register(&registration).await;
                    let _ = tx.send(KernelEvent::LoginSettled { attempt, outcome }).await;
                });
            }

            AppCommand::RequestPasswordReset { email } => {
                let email = email.trim().to_string();
                if let Err(e) = validate_email(&email) {
                    self.feedback = Some(AuthFeedback::Error(e.to_string()));
                    return;
                }
                self.feedback = None;
                let session = self.session.clone();
                let tx = self.tx.clone();
                let spawn_res = crate::async_runtime::spawn(async move {
                    let outcome = session.request_password_reset(&email).await;
                    let _ = tx
                        .send(KernelEvent::PasswordResetSettled { email, outcome })
                        .await;
                });
                match spawn_res {
                    Ok(()) => self.pending_resets += 1,
                    Err(e) => {
                        self.feedback = Some(AuthFeedback::Error(
                            AuthError::Unavailable(format!("Failed to start reset task: {e}"))
                                .to_string(),
                        ));
                    }
                }
            }

            AppCommand::Logout => {
                // Any in-flight attempt becomes stale.
                self.active_attempt = None;
                self.feedback = None;
                self.store.dispatch(Action::Logout);
                self.relocate();
            }

            AppCommand::Navigate(path) => {
                self.requested_path = path;
                self.relocate();
            }

            AppCommand::Apply(Action::Logout) => self.dispatch(AppCommand::Logout),

            AppCommand::Apply(action) if action.slice() == Slice::Session => {
                // Sign-in transitions are owned by the attempt machinery.
                tracing::debug!(?action, "Ignoring session action outside a sign-in attempt");
            }

            AppCommand::Apply(action) => {
                self.store.dispatch(action);
                self.relocate();
            }
        }
    }

    fn start_attempt<F, Fut>(&mut self, task: F)
    where
        F: FnOnce(LoginAttemptId, mpsc::Sender<KernelEvent>) -> Fut,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let attempt: LoginAttemptId = uuid::Uuid::new_v4();
        self.active_attempt = Some(attempt);
        self.feedback = None;
        self.store.dispatch(Action::LoginStart);

        if let Err(e) = crate::async_runtime::spawn(task(attempt, self.tx.clone())) {
            self.active_attempt = None;
            self.store.dispatch(Action::LoginFailure);
            self.feedback = Some(AuthFeedback::Error(
                AuthError::Unavailable(format!("Failed to start sign-in task: {e}")).to_string(),
            ));
        }
    }

    /// Apply every result that has already arrived, without waiting.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.handle(ev);
        }
    }

    /// Wait for the next background result and apply it. Returns at once when
    /// nothing is outstanding.
    pub async fn settle(&mut self) {
        if !self.has_pending_work() {
            return;
        }
        if let Some(ev) = self.rx.recv().await {
            self.handle(ev);
        }
    }

    /// Settle until no sign-in attempt or reset request is outstanding.
    pub async fn settle_all(&mut self) {
        while self.has_pending_work() {
            self.settle().await;
        }
    }

    pub fn has_pending_work(&self) -> bool {
        self.active_attempt.is_some() || self.pending_resets > 0
    }

    fn handle(&mut self, ev: KernelEvent) {
        match ev {
            KernelEvent::LoginSettled { attempt, outcome } => {
                if self.active_attempt != Some(attempt) {
                    tracing::debug!(%attempt, "Dropping settlement of superseded sign-in attempt");
                    return;
                }
                self.active_attempt = None;

                match outcome {
                    Ok(user) => {
                        tracing::info!(user_id = %user.id, "Signed in");
                        self.store.dispatch(Action::LoginSuccess(user));
                        self.feedback = None;
                        let on_public_page = Route::from_path(&self.requested_path)
                            .map_or(true, |r| !r.is_protected());
                        if on_public_page {
                            self.requested_path = Route::Dashboard.path().to_string();
                        }
                    }
                    Err(e) => {
                        tracing::info!("Sign-in failed: {e}");
                        self.store.dispatch(Action::LoginFailure);
                        self.feedback = Some(AuthFeedback::Error(e.to_string()));
                    }
                }
                self.relocate();
            }

            KernelEvent::PasswordResetSettled { email, outcome } => {
                self.pending_resets = self.pending_resets.saturating_sub(1);
                self.feedback = Some(match outcome {
                    Ok(()) => AuthFeedback::PasswordResetSent { email },
                    Err(e) => AuthFeedback::Error(e.to_string()),
                });
            }
        }
    }

    fn relocate(&mut self) {
        let session = self.store.current_snapshot().session.clone();
        let next = resolve(&session, &self.requested_path);
        if next != self.location {
            tracing::debug!(path = %self.requested_path, ?next, "Location changed");
        }
        self.location = next;
    }

    pub fn location(&self) -> Navigation {
        self.location
    }

    pub fn feedback(&self) -> Option<&AuthFeedback> {
        self.feedback.as_ref()
    }

    pub fn active_attempt(&self) -> Option<LoginAttemptId> {
        self.active_attempt
    }

    pub fn shell(&self) -> ShellVm {
        shell_vm(&self.store.current_snapshot(), self.location)
    }

    pub fn sender(&self) -> mpsc::Sender<KernelEvent> {
        self.tx.clone()
    }
}
