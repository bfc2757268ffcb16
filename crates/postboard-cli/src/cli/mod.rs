//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use postboard_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(version)]
#[command(about = "Terminal client for the Postboard feed")]
#[command(after_help = "Run without a subcommand to open the interactive feed.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Login name and password shared by `register` and `login`.
#[derive(clap::Args, Debug, Clone)]
struct CredentialArgs {
    /// Login name
    #[arg(short, long)]
    login: String,

    /// Password (read from stdin when omitted)
    #[arg(short, long, env = "POSTBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Feed(FeedCommands),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Commands that talk to the posts service.
#[derive(clap::Subcommand)]
enum FeedCommands {
    /// Create an account and sign in
    Register(CredentialArgs),
    /// Sign in and store the session token
    Login(CredentialArgs),
    /// Remove the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List, show, create, edit, or delete posts
    Posts {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Like a post
    Like {
        /// Post ID
        id: i64,
    },
    /// Remove a like from a post
    Unlike {
        /// Post ID
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum PostCommands {
    /// List all posts
    List,
    /// Show a single post
    Show {
        /// Post ID
        id: i64,
    },
    /// Publish a new post
    Create {
        /// Post title
        #[arg(short, long)]
        title: String,
        /// Post body
        #[arg(short, long)]
        content: String,
    },
    /// Change the title and/or content of a post
    Edit {
        /// Post ID
        id: i64,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a post (asks for confirmation)
    Delete {
        /// Post ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the default config file
    Init,
    /// Print the default config merged with built-in defaults
    Generate,
    /// Store the service base URL in the config file
    SetBaseUrl {
        /// Base URL, e.g. https://posts.example.com
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands must work even when the config file is broken.
    let command = match cli.command {
        Some(Commands::Config { command }) => return run_config_command(command),
        Some(Commands::Feed(command)) => Some(command),
        None => None,
    };

    let config = config::Config::load().context("load config")?;
    let _log_guard = match logging::init(&config.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let Some(command) = command else {
        return crate::modes::run_interactive(&config).await;
    };

    let session = commands::Session::open(&config)?;
    match command {
        FeedCommands::Register(args) => {
            commands::auth::register(&session, &config, &args.login, args.password).await
        }
        FeedCommands::Login(args) => {
            commands::auth::login(&session, &args.login, args.password).await
        }
        FeedCommands::Logout => commands::auth::logout(&session),
        FeedCommands::Whoami => commands::auth::whoami(&session).await,
        FeedCommands::Posts { command } => match command {
            PostCommands::List => commands::posts::list(&session).await,
            PostCommands::Show { id } => commands::posts::show(&session, id).await,
            PostCommands::Create { title, content } => {
                commands::posts::create(&session, &title, &content).await
            }
            PostCommands::Edit { id, title, content } => {
                commands::posts::edit(&session, id, title, content).await
            }
            PostCommands::Delete { id, yes } => {
                commands::posts::delete(&session, id, yes).await
            }
        },
        FeedCommands::Like { id } => commands::posts::like(&session, id).await,
        FeedCommands::Unlike { id } => commands::posts::unlike(&session, id).await,
    }
}

fn run_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
        ConfigCommands::Generate => commands::config::generate(),
        ConfigCommands::SetBaseUrl { url } => commands::config::set_base_url(&url),
    }
}
