//! CLI entry point for the triage chat.

mod cli;
mod logging;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use triage_core::{ChatMessage, ClockFormat};
use triage_tui::theme::Appearance;
use triage_tui::{Locale, TuiState, UiConfig, run_tui_with_feed};

/// Reply to each submitted line with an acknowledgement that carries a raw
/// diagnostic payload, so the details panel works without a backend attached.
async fn run_responder_loop(
    message_tx: mpsc::Sender<ChatMessage>,
    mut submit_rx: mpsc::Receiver<String>,
) {
    while let Some(text) = submit_rx.recv().await {
        info!(chars = text.chars().count(), "building reply");
        let raw = serde_json::json!({
            "input": text,
            "received_at": chrono::Local::now().to_rfc3339(),
        });
        let raw_pretty = serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string());
        let reply = ChatMessage::assistant(format!("Received: {}", text))
            .with_raw_response(raw_pretty)
            .with_timestamp(chrono::Local::now().to_rfc3339());
        if message_tx.send(reply).await.is_err() {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = match UiConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error ({e:#}); using defaults");
            UiConfig::default()
        }
    };

    let appearance = if cli.light {
        Appearance::Light
    } else {
        config.appearance
    };
    let locale = cli
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or(config.locale);
    let clock = if cli.twelve_hour {
        ClockFormat::TwelveHour
    } else {
        config.clock
    };

    // Channel for runtime logs → TUI debug traces screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let sink: logging::LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    if let Err(e) = logging::init(sink, cli.verbose) {
        eprintln!("logging init failed (continuing): {}", e);
    }

    let (message_tx, message_rx) = mpsc::channel::<ChatMessage>(256);
    let (submit_tx, submit_rx) = mpsc::channel::<String>(64);

    let mut state = TuiState::with_appearance(appearance);
    state.locale = locale;
    state.clock = clock;

    info!(?appearance, ?locale, ?clock, "starting TUI");
    tokio::spawn(run_responder_loop(message_tx, submit_rx));
    run_tui_with_feed(state, message_rx, submit_tx, Some(log_rx))?;
    Ok(())
}
