use crate::models::{ChatMessage, ChatSummary, Role};
use crate::render::{render_blocks, Block};
use colored::*;

/// Print a message body as rendered blocks.
pub fn display_content(content: &str) {
    for block in render_blocks(content) {
        match block {
            Block::Heading(text) => println!("{}", text.bold()),
            Block::BulletItem(text) => println!("  {} {}", "•".yellow(), text),
            Block::Paragraph(text) => println!("{}", text),
        }
    }
}

pub fn display_message(message: &ChatMessage) {
    match message.role {
        Role::User => println!("{} {}", "you:".cyan().bold(), message.content),
        Role::Assistant => {
            println!("{}", "ai:".yellow().bold());
            display_content(&message.content);
        }
    }
}

pub fn display_transcript(messages: &[ChatMessage]) {
    for message in messages {
        display_message(message);
        println!();
    }
}

pub fn display_summaries(summaries: &[ChatSummary]) {
    if summaries.is_empty() {
        println!("No chats found. Start one with `writerai scripting`.");
        return;
    }
    for summary in summaries {
        println!("{}  {}", summary.id.yellow(), summary.preview);
    }
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

pub fn display_success(message: &str) {
    println!("{}", message.green());
}

pub fn display_verbose(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", format!("[writerai] {}", message).dimmed());
    }
}
