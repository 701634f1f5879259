//! Period Timer - a command-line interval timer
//!
//! This is the main entry point for the period-timer application.

use tracing::{error, info};

use period_timer::{
    config::Config,
    display::TerminalRenderer,
    services::create_prompt,
    tasks::CycleController,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout carries the status line
    tracing_subscriber::fmt()
        .with_env_filter(format!("period_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let settings = config.settings();
    println!("Period durations are {}", settings.sequence);
    info!(
        "Configuration: prompt={:?}, min_more_time={}s",
        config.prompt,
        settings.min_more_time.as_secs()
    );

    // The prompt must work before the first period starts
    let mut prompt = create_prompt(config.prompt, &config.dialog_program);
    if let Err(e) = prompt.check_available().await {
        error!("{}", e);
        std::process::exit(1);
    }

    let mut controller = CycleController::new(settings, prompt, TerminalRenderer::stdout());

    tokio::select! {
        result = controller.run_forever() => {
            match result {
                Ok(never) => match never {},
                Err(e) => return Err(e.into()),
            }
        }
        signal = shutdown_signal() => {
            signal?;
            println!();
            info!("Timer interrupted");
        }
    }

    // A terminal prompt may still be blocked reading stdin
    std::process::exit(0);
}
