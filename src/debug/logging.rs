//! Console logging for layout diagnostics.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, writer::MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

const TRACING_PREFIX: &str = "[waterfall] ";
/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static PANIC_HOOK_INSTALLED: Once = Once::new();
static TRACING_INSTALLED: Once = Once::new();

/// Builds the filter from `RUST_LOG`, falling back to `default`.
#[must_use]
pub fn filter_from_env(default: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default.to_string()))
}

/// Parses a level name such as `"debug"`, falling back to [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install a stderr subscriber filtered by `RUST_LOG` (idempotent).
///
/// Does nothing if another global subscriber is already set.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_target(true)
            .without_time()
            .with_filter(filter_from_env(DEFAULT_LOG_LEVEL));

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

/// Route panics through `tracing` before the default hook runs (idempotent).
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing_panic::panic_hook(info);
            previous(info);
        }));
    });
}

// ============================================================================
// Console Writer
// ============================================================================

#[derive(Clone, Copy, Debug, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner::new(io::stderr())
    }
}

/// Writes the prefix once before the first chunk of every event.
struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W> PrefixedWriterInner<W> {
    const fn new(inner: W) -> Self {
        Self {
            inner,
            wrote_prefix: false,
        }
    }
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_written_once() {
        let mut writer = PrefixedWriterInner::new(Vec::new());
        writer.write_all(b"first ").unwrap();
        writer.write_all(b"second").unwrap();

        assert_eq!(writer.inner, b"[waterfall] first second");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), LevelFilter::TRACE);
        assert_eq!(parse_level("WARN"), LevelFilter::WARN);
        assert_eq!(parse_level("chatty"), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_install_is_idempotent() {
        install_tracing();
        install_tracing();
        install_panic_hook();
        install_panic_hook();
    }
}
