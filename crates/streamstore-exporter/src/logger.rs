//! Custom tracing formatter for exporter logs.
//!
//! Prefixes every line with `STREAMSTORE` so exporter output is easy to
//! separate from the embedding application's logs when both share a stream.
//!
//! # Format
//!
//! ```text
//! STREAMSTORE | LEVEL | [span_name{span_fields}:] message {event_fields}
//! ```
//!
//! The library never installs a global subscriber; the host builds one with
//! this formatter if it wants the prefixed output:
//!
//! ```rust,ignore
//! let subscriber = tracing_subscriber::fmt()
//!     .event_format(streamstore_exporter::logger::Formatter)
//!     .finish();
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

use std::fmt;
use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::{
    format::{self, FormatEvent, FormatFields},
    FmtContext, FormattedFields,
};
use tracing_subscriber::registry::LookupSpan;

/// Log formatter prefixing messages with `STREAMSTORE`.
#[derive(Debug, Clone, Copy)]
pub struct Formatter;

impl<S, N> FormatEvent<S, N> for Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(&mut writer, "STREAMSTORE | {} | ", metadata.level())?;

        // Spans from root to current, each with its formatted fields.
        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;

                let ext = span.extensions();
                let fields = &ext
                    .get::<FormattedFields<N>>()
                    .expect("will never be `None`");

                if !fields.is_empty() {
                    write!(writer, "{{{fields}}}")?;
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
