use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dash_app_core::{Credentials, Registration};
use dash_cli::{commands, CliLayoutMode, CliTheme, Environment, PreferenceLocation};
use dash_config::DEFAULT_MOCK_LATENCY_MS;
use dash_core::Action;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Preferences file (defaults to the per-user config directory)
    #[arg(long, global = true, env = "DASH_PREFS", conflicts_with = "ephemeral")]
    prefs: Option<PathBuf>,
    /// Keep preferences in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
    /// Treat the system colour scheme as dark when no theme is stored
    #[arg(long, global = true, env = "DASH_PREFERS_DARK")]
    prefers_dark: bool,
    /// Simulated latency of the mock session service
    #[arg(
        long,
        global = true,
        env = "DASH_MOCK_LATENCY_MS",
        default_value_t = DEFAULT_MOCK_LATENCY_MS
    )]
    latency_ms: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored UI preferences
    Prefs,
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    Rtl {
        #[command(subcommand)]
        command: FlagCommands,
    },
    Sidebar {
        #[command(subcommand)]
        command: FlagCommands,
    },
    /// Set the navigation chrome for this run (not persisted)
    Layout {
        #[arg(value_enum)]
        mode: CliLayoutMode,
        #[arg(long, default_value = "/dashboard")]
        visit: String,
        #[arg(long, requires = "password")]
        email: Option<String>,
        #[arg(long, requires = "email")]
        password: Option<String>,
    },
    /// Resolve a path through the route guard
    Route {
        path: String,
        #[arg(long, requires = "password")]
        email: Option<String>,
        #[arg(long, requires = "email")]
        password: Option<String>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        visit: Option<String>,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    #[command(name = "forgot-password")]
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Replay a session script
    Run { script: PathBuf },
}

#[derive(Subcommand)]
enum ThemeCommands {
    Toggle,
    Set {
        #[arg(value_enum)]
        theme: CliTheme,
    },
}

#[derive(Subcommand)]
enum FlagCommands {
    Toggle,
    Set {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn credentials(email: Option<String>, password: Option<String>) -> Option<Credentials> {
    match (email, password) {
        (Some(email), Some(password)) => Some(Credentials::new(email, password)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let env = Environment {
        preferences: match (cli.ephemeral, cli.prefs) {
            (true, _) => PreferenceLocation::Ephemeral,
            (false, Some(path)) => PreferenceLocation::File(path),
            (false, None) => PreferenceLocation::Default,
        },
        prefers_dark: cli.prefers_dark,
        latency: Duration::from_millis(cli.latency_ms),
    };

    match cli.command {
        Commands::Prefs => commands::cmd_prefs(&env)?,
        Commands::Theme { command } => {
            let action = match command {
                ThemeCommands::Toggle => Action::ToggleTheme,
                ThemeCommands::Set { theme } => Action::SetTheme(theme.into()),
            };
            commands::cmd_apply(&env, action)?;
        }
        Commands::Rtl { command } => {
            let action = match command {
                FlagCommands::Toggle => Action::ToggleRtl,
                FlagCommands::Set { value } => Action::SetRtl(value),
            };
            commands::cmd_apply(&env, action)?;
        }
        Commands::Sidebar { command } => {
            let action = match command {
                FlagCommands::Toggle => Action::ToggleSidebar,
                FlagCommands::Set { value } => Action::SetSidebarCollapsed(value),
            };
            commands::cmd_apply(&env, action)?;
        }
        Commands::Layout {
            mode,
            visit,
            email,
            password,
        } => {
            commands::cmd_layout(&env, mode.into(), visit, credentials(email, password)).await?
        }
        Commands::Route {
            path,
            email,
            password,
        } => commands::cmd_route(&env, path, credentials(email, password)).await?,
        Commands::Login {
            email,
            password,
            visit,
        } => commands::cmd_login(&env, Credentials::new(email, password), visit).await?,
        Commands::Register {
            email,
            password,
            name,
        } => {
            commands::cmd_register(
                &env,
                Registration {
                    name,
                    credentials: Credentials::new(email, password),
                },
            )
            .await?
        }
        Commands::ForgotPassword { email } => commands::cmd_forgot_password(&env, email).await?,
        Commands::Run { script } => commands::cmd_run(&env, &script).await?,
    }

    Ok(())
}
