//! Terminal output helpers
//!
//! All conversational output goes through `Ui` so the `Chatbot:` prefix and
//! `You:` prompt stay consistent across both binaries. Color applies to the
//! prefixes only, and only when stdout is a TTY.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Console voice for the assistant.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    use_color: bool,
}

impl Ui {
    /// Auto-detect color support from the terminal.
    pub fn auto() -> Self {
        Self {
            use_color: atty::is(atty::Stream::Stdout),
        }
    }

    /// Print one chatbot message (the message itself may span lines).
    pub fn chatbot(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "Chatbot:".cyan().bold(), message);
        } else {
            println!("Chatbot: {}", message);
        }
    }

    /// Print the input prompt without a trailing newline.
    pub fn prompt(&self) {
        if self.use_color {
            print!("\n{} ", "You:".green().bold());
        } else {
            print!("\nYou: ");
        }
        let _ = io::stdout().flush();
    }

    /// Print a plain informational line (startup banner, diagnostics).
    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    /// Print an error line to stderr.
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "Error:".red().bold(), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Print an empty line.
    pub fn blank(&self) {
        println!();
    }
}
