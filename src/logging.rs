use tracing::{info_span, Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

use crate::VERSION;

/// Logging context for one run of the converter.
///
/// The subscriber is only active inside [`Logger::scope`]; nothing is
/// installed globally.
pub struct Logger {
    application: &'static str,
    dispatch: Dispatch,
}

impl Logger {
    /// Builds a logger emitting either human readable text or JSON lines on stderr.
    pub fn new(application: &'static str, human_readable: bool) -> Self {
        Self::with_writer(application, human_readable, std::io::stderr)
    }

    pub fn with_writer<W>(application: &'static str, human_readable: bool, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(writer);

        let dispatch = if human_readable {
            Dispatch::new(builder.compact().finish())
        } else {
            Dispatch::new(builder.json().with_current_span(true).finish())
        };

        Self {
            application,
            dispatch,
        }
    }

    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, || {
            let span = info_span!("app", application = self.application, version = VERSION);
            span.in_scope(f)
        })
    }
}
