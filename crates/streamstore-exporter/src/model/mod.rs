//! Log record batch model.
//!
//! The host pipeline hands the exporter bounded batches grouped
//! hierarchically: resource → instrumentation scope → record. The exporter
//! reads this model, never mutates it.

pub mod value;

use std::fmt::Write as _;

pub use value::{AttributeMap, AttributeValue};

/// Trace identifier, 16 bytes. All-zero means "unset".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceId(pub [u8; 16]);

impl TraceId {
    /// The unset identifier.
    pub const INVALID: TraceId = TraceId([0; 16]);

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Lowercase hex rendering, 32 characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(32);
        for byte in self.0 {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }
}

/// Span identifier, 8 bytes. All-zero means "unset".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpanId(pub [u8; 8]);

impl SpanId {
    /// The unset identifier.
    pub const INVALID: SpanId = SpanId([0; 8]);

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 8]
    }

    /// Lowercase hex rendering, 16 characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut hex = String::with_capacity(16);
        for byte in self.0 {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }
}

/// One structured log record.
///
/// Owned by the host pipeline batch; the exporter holds it only for the
/// duration of a call.
#[derive(Clone, Debug, Default)]
pub struct LogRecord {
    /// Short event identifier (e.g. `ProcessStarted`). May be empty.
    pub name: String,
    /// Record body; shape varies per producer.
    pub body: AttributeValue,
    /// Numeric severity. Zero means "unspecified".
    pub severity_number: i32,
    /// Textual severity. May be empty.
    pub severity_text: String,
    /// Attributes the producer dropped before the record reached the
    /// pipeline.
    pub dropped_attributes_count: u32,
    /// Trace flags bit field.
    pub flags: u32,
    /// Associated trace, if any.
    pub trace_id: TraceId,
    /// Associated span, if any.
    pub span_id: SpanId,
    /// Record-level attributes.
    pub attributes: AttributeMap,
    /// Event time, nanoseconds since the Unix epoch.
    pub time_unix_nano: u64,
}

/// Instrumentation scope that produced a group of records.
#[derive(Clone, Debug, Default)]
pub struct InstrumentationScope {
    pub name: String,
    pub version: String,
}

/// Records produced by one instrumentation scope.
#[derive(Clone, Debug, Default)]
pub struct ScopeLogs {
    pub scope: InstrumentationScope,
    pub records: Vec<LogRecord>,
}

/// Records originating from one resource, with the resource's attributes.
#[derive(Clone, Debug, Default)]
pub struct ResourceLogs {
    /// Attributes describing the originating resource, shared read-only by
    /// every record in the group.
    pub resource: AttributeMap,
    pub scope_logs: Vec<ScopeLogs>,
}

/// One batch as delivered by the host pipeline.
#[derive(Clone, Debug, Default)]
pub struct LogsBatch {
    pub resource_logs: Vec<ResourceLogs>,
}

impl LogsBatch {
    /// Total number of records across all groups.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.resource_logs
            .iter()
            .flat_map(|resource_logs| &resource_logs.scope_logs)
            .map(|scope_logs| scope_logs.records.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_id_empty() {
        assert!(TraceId::INVALID.is_empty());
        assert!(TraceId::default().is_empty());
        assert!(!TraceId([1; 16]).is_empty());
    }

    #[test]
    fn test_trace_id_hex() {
        let id = TraceId([
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f, 0x10,
        ]);
        assert_eq!(id.to_hex(), "0102030405060708090a0b0c0d0e0f10");
    }

    #[test]
    fn test_span_id_hex() {
        let id = SpanId([0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00]);
        assert_eq!(id.to_hex(), "ff00ff00ff00ff00");
        assert!(!id.is_empty());
        assert!(SpanId::INVALID.is_empty());
    }

    #[test]
    fn test_default_record_is_unset() {
        let record = LogRecord::default();
        assert!(record.name.is_empty());
        assert_eq!(record.body, AttributeValue::Empty);
        assert_eq!(record.severity_number, 0);
        assert!(record.trace_id.is_empty());
        assert!(record.span_id.is_empty());
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn test_record_count_spans_groups() {
        let batch = LogsBatch {
            resource_logs: vec![
                ResourceLogs {
                    resource: AttributeMap::new(),
                    scope_logs: vec![
                        ScopeLogs {
                            scope: InstrumentationScope::default(),
                            records: vec![LogRecord::default(), LogRecord::default()],
                        },
                        ScopeLogs {
                            scope: InstrumentationScope::default(),
                            records: vec![LogRecord::default()],
                        },
                    ],
                },
                ResourceLogs::default(),
            ],
        };
        assert_eq!(batch.record_count(), 3);
        assert_eq!(LogsBatch::default().record_count(), 0);
    }
}
