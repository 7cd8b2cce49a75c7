//! Interactive chat loop shared by the scripting, brainstorming, and
//! saved-chat screens.

use crate::api::{ChatApi, CompletionClient};
use crate::error::Result;
use crate::transcript::TranscriptSync;
use crate::ui::output::{display_content, display_error, display_success, display_verbose};
use colored::*;
use std::io::{self, BufRead, Write};

/// Run the prompt/complete/append/sync cycle until EOF or an exit command.
///
/// One turn issues at most one completion call and one save, each awaited
/// to completion before the next input is read, so a turn can never
/// overlap a previous turn's requests. `chat_api` is `None` for
/// brainstorming, which never persists.
pub async fn run(
    transcript: &mut TranscriptSync,
    completion: &CompletionClient,
    chat_api: Option<&ChatApi>,
    verbose: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        // Empty input never reaches the network, same as a disabled
        // submit control.
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        transcript.push_user(input);
        display_verbose(verbose, "Waiting for completion...");

        match completion.complete(input).await {
            Ok(reply) => {
                println!("{}", "ai:".yellow().bold());
                display_content(&reply);
                println!();
                transcript.push_assistant(reply);
            }
            Err(e) => {
                // The user message stays in the working copy; the next
                // successful save carries it along.
                display_error(&e.to_string());
                continue;
            }
        }

        if let Some(api) = chat_api {
            match transcript.sync(api).await {
                Ok(Some(id)) => display_success(&format!("Chat saved (id {})", id)),
                Ok(None) => display_verbose(verbose, "Transcript saved"),
                Err(e) => display_error(&format!("Failed to save chat: {}", e)),
            }
        }
    }

    Ok(())
}
