use std::path::Path;

use anyhow::{Context, Result};
use dash_app_core::{AppCommand, AuthFeedback, Credentials, Registration};
use dash_core::{Action, LayoutMode};

use crate::{render, script, Environment};

pub fn cmd_prefs(env: &Environment) -> Result<()> {
    let app = env.boot()?;
    print!("{}", render::preferences(&app.store().current_snapshot()));
    Ok(())
}

/// Apply one preference action and report the resulting value.
pub fn cmd_apply(env: &Environment, action: Action) -> Result<()> {
    let mut app = env.boot()?;
    app.kernel.dispatch(AppCommand::Apply(action));
    print!("{}", render::preferences(&app.store().current_snapshot()));
    Ok(())
}

pub async fn cmd_layout(
    env: &Environment,
    mode: LayoutMode,
    visit: String,
    credentials: Option<Credentials>,
) -> Result<()> {
    let mut app = env.boot()?;
    if let Some(credentials) = credentials {
        sign_in(&mut app, credentials).await?;
    }
    app.kernel.dispatch(AppCommand::Apply(Action::SetLayoutMode(mode)));
    app.kernel.dispatch(AppCommand::Navigate(visit));
    print!("{}", render::shell(&app.kernel.shell()));
    Ok(())
}

pub async fn cmd_route(
    env: &Environment,
    path: String,
    credentials: Option<Credentials>,
) -> Result<()> {
    let mut app = env.boot()?;
    if let Some(credentials) = credentials {
        sign_in(&mut app, credentials).await?;
    }
    app.kernel.dispatch(AppCommand::Navigate(path));
    print!("{}", render::shell(&app.kernel.shell()));
    Ok(())
}

pub async fn cmd_login(
    env: &Environment,
    credentials: Credentials,
    visit: Option<String>,
) -> Result<()> {
    let mut app = env.boot()?;
    println!(":: Signing in as {}...", credentials.email);
    sign_in(&mut app, credentials).await?;
    if let Some(path) = visit {
        app.kernel.dispatch(AppCommand::Navigate(path));
    }
    print!("{}", render::shell(&app.kernel.shell()));
    Ok(())
}

pub async fn cmd_register(env: &Environment, registration: Registration) -> Result<()> {
    let mut app = env.boot()?;
    println!(":: Creating account for {}...", registration.credentials.email);
    app.kernel.dispatch(AppCommand::Register(registration));
    app.kernel.settle_all().await;
    fail_on_error(app.kernel.feedback())?;
    print!("{}", render::shell(&app.kernel.shell()));
    Ok(())
}

pub async fn cmd_forgot_password(env: &Environment, email: String) -> Result<()> {
    let mut app = env.boot()?;
    app.kernel.dispatch(AppCommand::RequestPasswordReset { email });
    app.kernel.settle_all().await;
    fail_on_error(app.kernel.feedback())?;
    if let Some(line) = render::feedback(app.kernel.feedback()) {
        println!("{line}");
    }
    Ok(())
}

pub async fn cmd_run(env: &Environment, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let steps = script::parse_script(&text)
        .with_context(|| format!("Invalid script {}", path.display()))?;

    let mut app = env.boot()?;
    tracing::debug!(steps = steps.len(), "Running script");
    print!("{}", script::run_script(&mut app, &steps).await);
    Ok(())
}

async fn sign_in(app: &mut crate::App, credentials: Credentials) -> Result<()> {
    app.kernel.dispatch(AppCommand::Login(credentials));
    app.kernel.settle_all().await;
    fail_on_error(app.kernel.feedback())
}

fn fail_on_error(feedback: Option<&AuthFeedback>) -> Result<()> {
    match feedback {
        Some(AuthFeedback::Error(message)) => Err(anyhow::anyhow!(message.clone())),
        _ => Ok(()),
    }
}
