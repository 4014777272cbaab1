//! `signup` terminal front end for the registration backend.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use signup_frontend::{
    ClientConfig, History, HttpUsersApi, ListState, RegisterForm, Route, SubmitOutcome,
    UserListPage,
};
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

/// `signup` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "signup",
    about = "Register accounts and list users against the signup backend",
    version
)]
struct CliArgs {
    /// Backend base URL. Defaults to the build-time `SIGNUP_API_URL` or
    /// `http://localhost:3000`.
    #[arg(long = "api-url", env = "SIGNUP_API_URL", value_name = "url")]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in and submit the registration form.
    Register {
        #[arg(long, value_name = "email")]
        email: String,
        #[arg(long, value_name = "password")]
        password: String,
    },
    /// Show the user list page.
    Users,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> io::Result<()> {
    let config = args
        .api_url
        .map_or_else(ClientConfig::default, ClientConfig::new);
    let api = HttpUsersApi::new(config)
        .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;

    match args.command {
        Command::Register { email, password } => {
            let mut history = History::starting_at(Route::Register);
            let mut form = RegisterForm::new();
            form.on_field_change("email", email);
            form.on_field_change("password", password);

            let outcome = form.on_submit(&api, &mut history).await;
            let mut out = io::stdout().lock();
            writeln!(out, "{}", form.view())?;
            match outcome {
                SubmitOutcome::Registered(user) => {
                    if let Some(user) = user {
                        writeln!(out, "Registered user {} ({})", user.id, user.email)?;
                    }
                    writeln!(out, "-> {}", history.current())?;
                    Ok(())
                }
                SubmitOutcome::Invalid => Err(io::Error::other("registration form is invalid")),
                SubmitOutcome::Failed => Err(io::Error::other(
                    form.api_error().unwrap_or("registration failed").to_owned(),
                )),
            }
        }
        Command::Users => {
            let mut page = UserListPage::new();
            page.load(&api).await;
            let mut out = io::stdout().lock();
            writeln!(out, "{page}")?;
            match page.state() {
                ListState::Failed(message) => Err(io::Error::other(message.clone())),
                ListState::Loading | ListState::Loaded(_) => Ok(()),
            }
        }
    }
}
