mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client::components::navbar::{NavItem, Navbar};
use client::net::api::{ApiError, HttpAdminApi};
use client::pages::comments::ModerationView;
use client::state::auth::SessionState;
use client::state::notice::Notice;
use client::state::token_store::{FileTokenStore, TokenStore, TokenStoreError, default_token_path};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
    #[error("could not load posts; rerun with RUST_LOG=debug for details")]
    LoadFailed,
    #[error("comment {0} was not deleted; rerun with RUST_LOG=debug for details")]
    DeleteFailed(Uuid),
    #[error("token must not be empty")]
    EmptyToken,
}

#[derive(Parser, Debug)]
#[command(name = "styleshare", about = "Style Share admin and session CLI")]
struct Cli {
    #[arg(long, env = "STYLESHARE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Bearer token; overrides the persisted token file.
    #[arg(long, env = "STYLESHARE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Token file (default `$HOME/.styleshare/token`).
    #[arg(long)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Persist a bearer token for later commands.
    Login {
        #[arg(long)]
        token: String,
    },
    /// Forget the persisted token. Local only; the server session stays valid.
    Logout,
    /// Show the navigation links for the current session.
    Nav {
        #[arg(long, default_value = "/app")]
        path: String,
    },
    Comments(CommentsCommand),
}

#[derive(Args, Debug)]
struct CommentsCommand {
    #[command(subcommand)]
    command: CommentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentsSubcommand {
    /// List every post with its comments.
    List,
    /// Delete one comment and print the refreshed list.
    Delete { comment_id: Uuid },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let token_file = cli.token_file;

    match cli.command {
        Command::Login { token } => run_login(&token_store(token_file)?, &token),
        Command::Logout => {
            let store = token_store(token_file)?;
            let session = session_for(cli.token.as_deref(), Some(&store))?;
            run_logout(session, &store);
            Ok(())
        }
        Command::Nav { path } => {
            let session = resolve_session(cli.token.as_deref(), token_file)?;
            run_nav(&session, &path);
            Ok(())
        }
        Command::Comments(cmd) => {
            let session = resolve_session(cli.token.as_deref(), token_file)?;
            run_comments(&cli.base_url, &session, cmd).await
        }
    }
}

fn token_store(token_file: Option<PathBuf>) -> Result<FileTokenStore, CliError> {
    let path = match token_file {
        Some(path) => path,
        None => default_token_path()?,
    };
    Ok(FileTokenStore::new(path))
}

/// An explicit token wins; the store is only consulted without one.
fn session_for(token: Option<&str>, store: Option<&dyn TokenStore>) -> Result<SessionState, CliError> {
    match (token, store) {
        (Some(token), _) => Ok(SessionState::new(token)),
        (None, Some(store)) => Ok(SessionState::restore(store)?),
        (None, None) => Ok(SessionState::default()),
    }
}

/// Session for read-only commands. The token file is resolved only when no
/// token was passed, so `--token` works without a home directory.
fn resolve_session(token: Option<&str>, token_file: Option<PathBuf>) -> Result<SessionState, CliError> {
    if token.is_some() {
        return session_for(token, None);
    }
    let store = token_store(token_file)?;
    session_for(None, Some(&store))
}

fn print_notice(notice: &Notice) {
    println!("{}", render::notice_line(notice));
}

fn run_login(store: &FileTokenStore, token: &str) -> Result<(), CliError> {
    let mut session = SessionState::default();
    session.set_token(token);
    if !session.logged_in() {
        return Err(CliError::EmptyToken);
    }
    store.save(session.token())?;
    tracing::debug!(path = %store.path().display(), "token persisted");
    print_notice(&Notice::info(format!("Token saved to {}", store.path().display())));
    Ok(())
}

fn run_logout(mut session: SessionState, store: &FileTokenStore) {
    let mut navbar = Navbar::default();
    let notice = navbar.logout(&mut session, store);
    print_notice(&notice);
}

fn run_nav(session: &SessionState, path: &str) {
    let navbar = Navbar::new(path);
    for item in navbar.links(session) {
        let marker = match item {
            NavItem::Link { path, .. } if navbar.is_active(path) => "*",
            _ => " ",
        };
        match item.path() {
            Some(target) => println!("{marker} {:<12} {target}", item.label()),
            None => println!("{marker} {}", item.label()),
        }
    }
}

async fn run_comments(base_url: &str, session: &SessionState, cmd: CommentsCommand) -> Result<(), CliError> {
    let api = HttpAdminApi::new(base_url)?;
    tracing::debug!(base_url = api.base_url(), logged_in = session.logged_in(), "admin api ready");
    let mut view = ModerationView::new();

    match cmd.command {
        CommentsSubcommand::List => {
            if !view.load(&api, session).await {
                tracing::warn!(base_url = api.base_url(), "post list unavailable");
                return Err(CliError::LoadFailed);
            }
        }
        CommentsSubcommand::Delete { comment_id } => {
            let Some(notice) = view.delete_comment(&api, session, &comment_id.to_string()).await else {
                tracing::warn!(%comment_id, "delete rejected");
                return Err(CliError::DeleteFailed(comment_id));
            };
            print_notice(&notice);
        }
    }

    print!("{}", render::moderation_table(&view.rows()));
    Ok(())
}
