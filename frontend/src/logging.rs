// Logging - routes `tracing` events from the page and the shared crate to the browser console

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Formats each event as `message key=value ...` and hands it to `sink`.
pub struct ConsoleLayer<F> {
    sink: F,
}

impl<F> ConsoleLayer<F>
where
    F: Fn(Level, String) + Send + Sync + 'static,
{
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<S, F> Layer<S> for ConsoleLayer<F>
where
    S: Subscriber,
    F: Fn(Level, String) + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = LineVisitor::default();
        event.record(&mut line);
        (self.sink)(*event.metadata().level(), line.finish());
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            self.message + &self.fields
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn browser_console(level: Level, line: String) {
    match level {
        Level::ERROR => gloo::console::error!(line),
        Level::WARN => gloo::console::warn!(line),
        Level::INFO => gloo::console::info!(line),
        _ => gloo::console::debug!(line),
    }
}

/// Installs the console layer as the global subscriber. Safe to call twice.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(browser_console))
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use clientdesk_shared::{
        ClientDetail, LoadError, LoadOutcome, LoadSequence, PanelConfig, PanelState,
    };

    use super::*;

    type Captured = Arc<Mutex<Vec<(Level, String)>>>;

    fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
        let lines: Captured = Arc::default();
        let sink = lines.clone();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(
            move |level, line| sink.lock().unwrap().push((level, line)),
        ));
        let out = tracing::subscriber::with_default(subscriber, f);
        let lines = lines.lock().unwrap().clone();
        (out, lines)
    }

    #[test]
    fn test_failed_load_is_logged_once_as_warning() {
        let (outcome, lines) = capture(|| {
            let mut panel = PanelState::new(PanelConfig::default());
            let ticket = LoadSequence::new().issue();
            panel.begin(ticket);
            panel.finish(ticket, Err(LoadError::Server { status: 500 }))
        });

        assert_eq!(outcome, LoadOutcome::Failed);
        let warnings: Vec<_> = lines.iter().filter(|(l, _)| *l == Level::WARN).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.starts_with("error loading client details"));
        assert!(warnings[0].1.contains("code=HTTP_500"));
    }

    #[test]
    fn test_stale_response_is_logged_at_debug() {
        let (outcome, lines) = capture(|| {
            let mut seq = LoadSequence::new();
            let mut panel = PanelState::new(PanelConfig::default());
            let first = seq.issue();
            panel.begin(first);
            let second = seq.issue();
            panel.begin(second);
            panel.finish(first, Ok(ClientDetail::default()))
        });

        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(lines.iter().any(|(level, line)| {
            *level == Level::DEBUG && line.starts_with("discarding stale client detail response")
        }));
        assert!(!lines.iter().any(|(level, _)| *level == Level::WARN));
    }

    #[test]
    fn test_fields_follow_the_message() {
        let (_, lines) = capture(|| tracing::info!(rows = 3, "client panel loaded"));
        assert_eq!(lines, vec![(Level::INFO, "client panel loaded rows=3".to_string())]);
    }
}
