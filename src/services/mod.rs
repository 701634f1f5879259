//! Prompt services module
//!
//! The continuation prompt capability and its dialog/terminal backends.

pub mod dialog;
pub mod prompt;
pub mod terminal;

use clap::ValueEnum;

// Re-export main types
pub use dialog::{DialogPrompt, DEFAULT_DIALOG_PROGRAM};
pub use prompt::{
    overtime_grant, ConfirmPrompt, Decision, PromptRequest, DEFAULT_MIN_MORE_TIME, PROMPT_TITLE,
};
pub use terminal::TerminalPrompt;

/// Which prompt backend to ask with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptKind {
    /// Modal desktop dialog
    Dialog,
    /// Question on the terminal
    Terminal,
}

/// Build the configured prompt backend
pub fn create_prompt(kind: PromptKind, dialog_program: &str) -> Box<dyn ConfirmPrompt> {
    match kind {
        PromptKind::Dialog => Box::new(DialogPrompt::new(dialog_program)),
        PromptKind::Terminal => Box::new(TerminalPrompt::stdio()),
    }
}
