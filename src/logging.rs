//! Tracing setup
//!
//! The terminal is owned by the form while it runs, so events go to a log
//! file through a non-blocking writer instead of stderr.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "contact-form-tui.log";

/// Non-blocking writer appending to `dir/contact-form-tui.log`
///
/// Buffered lines are flushed when the returned guard is dropped.
pub fn file_writer(dir: &Path) -> (NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    tracing_appender::non_blocking(file_appender)
}

fn subscriber(filter: EnvFilter, writer: NonBlocking) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
}

/// Install the global subscriber; `RUST_LOG` overrides `default_filter`
pub fn init(log_dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let (writer, guard) = file_writer(log_dir);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    subscriber(filter, writer).try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactForm, SystemClock};
    use tempfile::TempDir;

    #[test]
    fn test_submit_events_go_to_the_log_file() {
        let dir = TempDir::new().unwrap();
        let (writer, guard) = file_writer(dir.path());

        let filter = EnvFilter::new("contact_form_tui=info");
        tracing::subscriber::with_default(subscriber(filter, writer), || {
            ContactForm::new().submit(&SystemClock);
        });
        drop(guard);

        let log = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(log.contains("contact form submit rejected"));
        assert!(!log.contains("\x1b["));
    }

    #[test]
    fn test_filter_drops_debug_events() {
        let dir = TempDir::new().unwrap();
        let (writer, guard) = file_writer(dir.path());

        let filter = EnvFilter::new("contact_form_tui=info");
        tracing::subscriber::with_default(subscriber(filter, writer), || {
            tracing::debug!("below the threshold");
            tracing::info!("above the threshold");
        });
        drop(guard);

        let log = fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(log.contains("above the threshold"));
        assert!(!log.contains("below the threshold"));
    }
}
