//! # Ripple Feed CLI
//!
//! Interactive shell over the Ripple feed engine. Lines are parsed into
//! intents, dispatched against the application state, and every mutation is
//! followed by a reload-and-render pass.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

mod commands;
mod config;
mod state;

use commands::CommandOutcome;
use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!("Starting Ripple (data file: {})", config.data_file.display());

    // Build application state
    let mut state = AppState::new(&config).await?;

    commands::print_welcome(&state);

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("ripple> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match commands::execute_line(&mut state, &line).await {
                    CommandOutcome::Continue => {}
                    CommandOutcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("bye");
                break;
            }
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,feed_cli=info,ripple_infra=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
