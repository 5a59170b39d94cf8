//! Tracing setup: env-filtered subscriber with a layer that forwards formatted
//! log lines to the TUI debug traces screen. No console output while the TUI
//! owns the terminal.

use std::fmt::Write;
use std::sync::Arc;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Receives formatted log lines. Must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Install the global subscriber: RUST_LOG filter (default "info", or "debug"
/// with `verbose`) plus the TUI forwarding layer.
pub fn init(sink: LogSink, verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(TuiLogLayer { sink })
        .try_init()?;
    Ok(())
}

/// Builds a single line from an event: "[LEVEL] target: message key=value ..."
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(256),
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to the sink.
struct TuiLogLayer {
    sink: LogSink,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let target = event.metadata().target();
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        let rest = visitor.finish();
        let line = if rest.is_empty() {
            format!("[{}] {}", level, target)
        } else {
            format!("[{}] {}: {}", level, target, rest)
        };
        const MAX_LEN: usize = 32_000;
        let line = if line.len() > MAX_LEN {
            let trunc: String = line.chars().take(MAX_LEN).collect();
            format!("{}… ({} chars)", trunc, line.len())
        } else {
            line
        };
        (self.sink)(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn forwards_formatted_event_lines() {
        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&captured);
        let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer { sink });
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(chars = 5usize, "message submitted");
        });
        let lines = captured.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("message submitted"));
        assert!(lines[0].contains("chars=5"));
    }
}
