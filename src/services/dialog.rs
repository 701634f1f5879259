//! Modal dialog prompt backed by an external dialog program

use std::ffi::OsString;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::prompt::{ConfirmPrompt, Decision, PromptRequest, PROMPT_TITLE};
use crate::error::TimerError;

/// Dialog program used when none is configured
pub const DEFAULT_DIALOG_PROGRAM: &str = "zenity";

/// Shows a question dialog; exit status 0 accepts, 1 declines
///
/// Exit status 1 with diagnostics on stderr means the dialog never showed
/// (e.g. no display) and is reported as an environment error.
#[derive(Debug, Clone)]
pub struct DialogPrompt {
    program: String,
    /// Passed before the dialog arguments, e.g. `-c <script>` for a shell
    leading_args: Vec<String>,
}

impl DialogPrompt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Whether an X11 or Wayland display is advertised in the environment
pub fn display_server_present(var: impl Fn(&str) -> Option<OsString>) -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|&name| var(name).is_some_and(|value| !value.is_empty()))
}

/// Whether stderr holds anything beyond GTK's informational chatter
fn stderr_reports_failure(stderr: &str) -> bool {
    stderr
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.contains("-Message:"))
}

impl Default for DialogPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_DIALOG_PROGRAM)
    }
}

#[async_trait]
impl ConfirmPrompt for DialogPrompt {
    async fn check_available(&mut self) -> Result<(), TimerError> {
        #[cfg(all(unix, not(target_os = "macos")))]
        if !display_server_present(|name| std::env::var_os(name)) {
            return Err(TimerError::Environment(format!(
                "No display found (DISPLAY/WAYLAND_DISPLAY unset), {} cannot show a dialog. Use --prompt terminal.",
                self.program
            )));
        }

        Command::new(&self.program)
            .args(&self.leading_args)
            .arg("--version")
            .output()
            .await
            .map_err(|_| {
                TimerError::Environment(format!(
                    "{} is not available. Install it or use --prompt terminal.",
                    self.program
                ))
            })?;

        info!("{} is available", self.program);
        Ok(())
    }

    async fn ask(&mut self, request: &PromptRequest) -> Result<Decision, TimerError> {
        let message = request.message();
        debug!("Showing dialog via {}: {}", self.program, message);

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args([
                "--question",
                "--title",
                PROMPT_TITLE,
                "--text",
                message.as_str(),
                "--ok-label",
                "Continue",
                "--cancel-label",
                "More time",
            ])
            .output()
            .await
            .map_err(|e| TimerError::Environment(format!("Failed to run {}: {}", self.program, e)))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        match output.status.code() {
            Some(0) => Ok(Decision::Accept),
            Some(1) if !stderr_reports_failure(&stderr) => Ok(Decision::Decline),
            code => {
                Err(TimerError::Environment(format!(
                    "{} exited unexpectedly (code {:?}): {}",
                    self.program,
                    code,
                    stderr.trim()
                )))
            }
        }
    }
}
