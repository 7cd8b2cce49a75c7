use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::process;

use writerai::api::{ChatApi, CompletionClient};
use writerai::auth::{self, FilesystemTokenStore, TokenStore};
use writerai::cli::{Args, Command};
use writerai::config::Config;
use writerai::error::{Result, WriterAiError};
use writerai::models::ChatTranscript;
use writerai::session;
use writerai::transcript::TranscriptSync;
use writerai::ui::output::{
    display_error, display_success, display_summaries, display_transcript, display_verbose,
};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let store = FilesystemTokenStore::new();

    let result = match args.command {
        None => {
            print_home(&store);
            Ok(())
        }
        Some(Command::Login { email, password }) => {
            cmd_login(&config, &store, &email, password).await
        }
        Some(Command::Register {
            username,
            email,
            password,
        }) => cmd_register(&config, &store, &username, &email, password).await,
        Some(Command::Logout) => cmd_logout(&store),
        Some(Command::Dashboard) => cmd_dashboard(&config, &store).await,
        Some(Command::Chat { id }) => cmd_chat(&config, &store, &id).await,
        Some(Command::Scripting) => cmd_scripting(&config, &store).await,
        Some(Command::Brainstorm) => cmd_brainstorm(&config, &store).await,
    };

    if let Err(e) = result {
        display_error(&e.to_string());
        process::exit(1);
    }
}

/// The landing screen: a signpost, nothing more.
fn print_home(store: &dyn TokenStore) {
    println!("{}", "WriterAI".yellow().bold());
    println!("Explore ideas, develop characters, and enhance your story with AI.");
    println!();
    if auth::is_authenticated(store) {
        println!("You are logged in.");
        println!("  {}  list your saved chats", "writerai dashboard".cyan());
        println!("  {}  start a saved scripting session", "writerai scripting".cyan());
        println!("  {}  brainstorm without saving", "writerai brainstorm".cyan());
        println!("  {}     continue a saved chat", "writerai chat <id>".cyan());
        println!("  {}         clear the session", "writerai logout".cyan());
    } else {
        println!("  {}  log in", "writerai login --email <email>".cyan());
        println!("  {}  create an account", "writerai register".cyan());
    }
}

fn prompt_password(provided: Option<String>) -> Result<String> {
    if let Some(password) = provided {
        return Ok(password);
    }
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn cmd_login(
    config: &Config,
    store: &dyn TokenStore,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    auth::require_guest(store)?;

    let password = prompt_password(password)?;
    if email.trim().is_empty() || password.is_empty() {
        return Err(WriterAiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let token = auth::login(&config.base_url, email, &password).await?;
    store
        .save(&token)
        .map_err(|e| WriterAiError::Other(format!("Failed to store token: {}", e)))?;

    display_success("Login successful!");
    println!("See your chats with {}", "writerai dashboard".cyan());
    Ok(())
}

async fn cmd_register(
    config: &Config,
    store: &dyn TokenStore,
    username: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    auth::require_guest(store)?;

    let password = prompt_password(password)?;
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(WriterAiError::Validation(
            "Username, email, and password are required".to_string(),
        ));
    }

    let message = auth::register(&config.base_url, username, email, &password).await?;
    display_success(&message);
    println!("Log in with {}", format!("writerai login --email {}", email).cyan());
    Ok(())
}

fn cmd_logout(store: &dyn TokenStore) -> Result<()> {
    store
        .clear()
        .map_err(|e| WriterAiError::Other(format!("Failed to logout: {}", e)))?;
    display_success("Logged out successfully");
    Ok(())
}

async fn cmd_dashboard(config: &Config, store: &dyn TokenStore) -> Result<()> {
    let token = auth::require_auth(store)?;
    let api = ChatApi::new(&config.base_url, &token)?;

    display_verbose(config.verbose, &format!("Fetching chats from {}", config.base_url));
    let summaries = api.list().await?;
    display_summaries(&summaries);
    Ok(())
}

async fn cmd_chat(config: &Config, store: &dyn TokenStore, id: &str) -> Result<()> {
    let token = auth::require_auth(store)?;
    let api_key = config.require_completion_api_key()?;
    let api = ChatApi::new(&config.base_url, &token)?;
    let completion = CompletionClient::new(&config.completion_endpoint, api_key);

    // A failed fetch leaves the working copy empty; the session still runs
    // against the requested id.
    let mut transcript = match api.fetch(id).await {
        Ok(remote) => TranscriptSync::from_remote(remote),
        Err(e) => {
            display_error(&e.to_string());
            TranscriptSync::from_remote(ChatTranscript {
                id: id.to_string(),
                messages: vec![],
            })
        }
    };

    display_transcript(transcript.messages());
    session::run(&mut transcript, &completion, Some(&api), config.verbose).await
}

async fn cmd_scripting(config: &Config, store: &dyn TokenStore) -> Result<()> {
    let token = auth::require_auth(store)?;
    let api_key = config.require_completion_api_key()?;
    let api = ChatApi::new(&config.base_url, &token)?;
    let completion = CompletionClient::new(&config.completion_endpoint, api_key);

    println!("{}", "Creative Scripting".yellow().bold());
    println!("Ask anything about your story, characters, or plot. The chat is saved after the first reply.");
    println!();

    let mut transcript = TranscriptSync::new();
    session::run(&mut transcript, &completion, Some(&api), config.verbose).await
}

async fn cmd_brainstorm(config: &Config, store: &dyn TokenStore) -> Result<()> {
    auth::require_auth(store)?;
    let api_key = config.require_completion_api_key()?;
    let completion = CompletionClient::new(&config.completion_endpoint, api_key);

    println!("{}", "Brainstorming".yellow().bold());
    println!("A scratchpad session; nothing here is saved.");
    println!();

    let mut transcript = TranscriptSync::new();
    session::run(&mut transcript, &completion, None, config.verbose).await
}
