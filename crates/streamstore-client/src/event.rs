//! A single wire-ready log event.

/// One event to be appended to a log stream.
///
/// The store's envelope carries a millisecond timestamp and an opaque
/// message; everything structured about the record has already been encoded
/// into `message` by the time an event reaches a pusher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Serialized message body, UTF-8.
    pub message: String,
}

impl LogEvent {
    #[must_use]
    pub fn new(timestamp: i64, message: String) -> Self {
        LogEvent { timestamp, message }
    }
}
