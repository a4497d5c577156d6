//! Line-oriented session scripts: one step per line, `#` starts a comment.

use std::str::FromStr;

use dash_app_core::{AppCommand, Credentials};
use dash_core::{Action, LayoutMode, Theme};

use crate::{render, App};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Apply(Action),
    Login { email: String, password: String },
    Logout,
    Visit(String),
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

impl FromStr for ScriptStep {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let step = match words.as_slice() {
            ["toggle-theme"] => ScriptStep::Apply(Action::ToggleTheme),
            ["theme", t] => ScriptStep::Apply(Action::SetTheme(
                t.parse::<Theme>().map_err(|e| e.to_string())?,
            )),
            ["toggle-rtl"] => ScriptStep::Apply(Action::ToggleRtl),
            ["rtl", b] => ScriptStep::Apply(Action::SetRtl(parse_bool(b)?)),
            ["layout", m] => ScriptStep::Apply(Action::SetLayoutMode(
                m.parse::<LayoutMode>().map_err(|e| e.to_string())?,
            )),
            ["toggle-sidebar"] => ScriptStep::Apply(Action::ToggleSidebar),
            ["sidebar", b] => ScriptStep::Apply(Action::SetSidebarCollapsed(parse_bool(b)?)),
            ["login", email, password] => ScriptStep::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            ["logout"] => ScriptStep::Logout,
            ["visit", path] => ScriptStep::Visit(path.to_string()),
            ["show"] => ScriptStep::Show,
            [cmd, ..] => return Err(format!("unrecognized step '{cmd}'")),
            [] => return Err("empty step".to_string()),
        };
        Ok(step)
    }
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (ix, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = line.parse::<ScriptStep>().map_err(|reason| ScriptError {
            line: ix + 1,
            reason,
        })?;
        steps.push(step);
    }
    Ok(steps)
}

/// Run steps in order against `app`, returning the transcript. Sign-in
/// steps wait for their result before the next step runs.
pub async fn run_script(app: &mut App, steps: &[ScriptStep]) -> String {
    let mut transcript = String::new();
    for step in steps {
        match step {
            ScriptStep::Apply(action) => app.kernel.dispatch(AppCommand::Apply(action.clone())),
            ScriptStep::Login { email, password } => {
                app.kernel
                    .dispatch(AppCommand::Login(Credentials::new(email, password)));
                app.kernel.settle_all().await;
                if let Some(line) = render::feedback(app.kernel.feedback()) {
                    transcript.push_str(&line);
                    transcript.push('\n');
                }
            }
            ScriptStep::Logout => app.kernel.dispatch(AppCommand::Logout),
            ScriptStep::Visit(path) => {
                app.kernel.dispatch(AppCommand::Navigate(path.clone()));
                transcript.push_str(&render::shell(&app.kernel.shell()));
            }
            ScriptStep::Show => {
                transcript.push_str(&render::preferences(&app.store().current_snapshot()));
            }
        }
    }
    transcript
}
