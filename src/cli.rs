use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "writerai")]
#[command(about = "Command-line client for the WriterAI writing service", long_about = None)]
pub struct Args {
    #[arg(long = "api-url", help = "WriterAI backend base URL", global = true)]
    pub api_url: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Verbose diagnostics", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Log in and store the session token")]
    Login {
        #[arg(long, help = "Account email")]
        email: String,
        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Create an account")]
    Register {
        #[arg(long, help = "Display name")]
        username: String,
        #[arg(long, help = "Account email")]
        email: String,
        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Clear the stored session token")]
    Logout,

    #[command(about = "List your saved chats")]
    Dashboard,

    #[command(about = "Continue a saved chat")]
    Chat {
        #[arg(help = "Chat id from the dashboard")]
        id: String,
    },

    #[command(about = "Start a scripting session (saved automatically)")]
    Scripting,

    #[command(about = "Start a throwaway brainstorming session")]
    Brainstorm,
}
