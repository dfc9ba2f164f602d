use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use chitchat_client::actions::{Action, Dispatcher};
use chitchat_client::api::ApiError;
use chitchat_client::config::{Config, NotificationConfig, NotifyPolicy};
use chitchat_client::logging::init_tracing;
use chitchat_client::models::{
    CreateMessageParams, DeleteMessageParams, DocumentId, UpdateMessageParams, User,
};
use chitchat_client::store::{State, Store};

/// Command-line client for a ChitChat server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the server base URL.
    #[arg(long)]
    server: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new user and print its credentials.
    CreateUser,
    /// Print all messages, newest first.
    Read,
    /// Post a new message.
    Post {
        #[command(flatten)]
        user: Credentials,
        text: String,
    },
    /// Replace the text of one of your messages.
    Edit {
        #[arg(long)]
        message: DocumentId,
        #[command(flatten)]
        user: Credentials,
        text: String,
    },
    /// Delete one of your messages.
    Delete {
        #[arg(long)]
        message: DocumentId,
        #[command(flatten)]
        user: Credentials,
    },
    /// Load the history, then follow new messages until the server closes.
    Watch,
}

#[derive(clap::Args, Debug)]
struct Credentials {
    #[arg(long)]
    user_id: DocumentId,
    #[arg(long)]
    password: String,
}

impl From<Credentials> for User {
    fn from(credentials: Credentials) -> Self {
        User {
            id: credentials.user_id,
            password: credentials.password,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
        config.validate().context("validating --server")?;
    }

    init_tracing(&config.logging.level);

    let dispatcher = Dispatcher::from_config(&config, Store::new())?;
    let action = match cli.command {
        Command::CreateUser => Some(Action::CreateUser),
        Command::Read => Some(Action::ReadMessages),
        Command::Post { user, text } => Some(Action::CreateMessage(CreateMessageParams {
            user: user.into(),
            text,
        })),
        Command::Edit {
            message,
            user,
            text,
        } => Some(Action::UpdateMessage(UpdateMessageParams {
            message,
            user: user.into(),
            text,
        })),
        Command::Delete { message, user } => Some(Action::DeleteMessage(DeleteMessageParams {
            message,
            user: user.into(),
        })),
        Command::Watch => None,
    };

    let outcome = match action {
        Some(action) => dispatcher.dispatch(action).await,
        None => {
            let loaded = dispatcher.read_messages().await;
            if loaded.is_ok() {
                let feed = chitchat_client::feed::spawn(dispatcher.clone());
                tokio::select! {
                    result = feed => {
                        result.context("feed task panicked")??;
                    }
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            loaded
        }
    };

    print_state(&dispatcher.store().snapshot());

    if let Err(err) = outcome {
        if let Some(text) = unreported_failure(&err, &config.notifications) {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }
    Ok(())
}

/// Text for a failure the snackbar did not show.
fn unreported_failure(err: &ApiError, notifications: &NotificationConfig) -> Option<String> {
    match notifications.policy {
        NotifyPolicy::Snackbar => None,
        NotifyPolicy::Silent => Some(err.notification_text(&notifications.network_error_message)),
    }
}

fn print_state(state: &State) {
    if let Some(user) = &state.user {
        println!("user {} password {}", user.id, user.password);
    }
    print_messages(state);
    if state.snackbar.is_on {
        println!("[{:?}] {}", state.snackbar.color, state.snackbar.message);
    }
}

fn print_messages(state: &State) {
    for message in &state.messages {
        let edited = if message.modified.is_some() {
            " (edited)"
        } else {
            ""
        };
        println!(
            "#{} <{}> {}{}",
            message.id, message.author, message.text, edited
        );
    }
}
