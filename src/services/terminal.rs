//! Line-based prompt on the controlling terminal

use std::io::{self, IsTerminal, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use super::prompt::{ConfirmPrompt, Decision, PromptRequest, PROMPT_TITLE};
use crate::error::TimerError;

/// Asks on a text stream: `y`/enter continues, `n` asks for more time
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    require_tty: bool,
}

impl TerminalPrompt<BufReader<Stdin>, io::Stdout> {
    /// Prompt on the process' stdin/stdout
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()),
            output: io::stdout(),
            require_tty: true,
        }
    }
}

impl<R, W> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            require_tty: false,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Interpret a typed answer, `None` if it is neither yes nor no
pub fn parse_answer(answer: &str) -> Option<Decision> {
    match answer.trim().to_lowercase().as_str() {
        "" | "y" | "yes" | "c" | "continue" | "ok" => Some(Decision::Accept),
        "n" | "no" | "m" | "more" => Some(Decision::Decline),
        _ => None,
    }
}

#[async_trait]
impl<R, W> ConfirmPrompt for TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn check_available(&mut self) -> Result<(), TimerError> {
        if self.require_tty && !io::stdin().is_terminal() {
            return Err(TimerError::Environment(
                "Standard input is not a terminal; the terminal prompt cannot be answered".to_string(),
            ));
        }
        Ok(())
    }

    async fn ask(&mut self, request: &PromptRequest) -> Result<Decision, TimerError> {
        writeln!(self.output, "\n{}: {}", PROMPT_TITLE, request.message())?;

        loop {
            write!(self.output, "Continue? [Y/n] ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Err(TimerError::Environment(
                    "Standard input closed while waiting for an answer".to_string(),
                ));
            }

            match parse_answer(&line) {
                Some(decision) => {
                    debug!("Terminal answer {:?} -> {:?}", line.trim(), decision);
                    return Ok(decision);
                }
                None => writeln!(
                    self.output,
                    "Please answer 'y' to continue or 'n' for more time."
                )?,
            }
        }
    }
}
