//! Per-stream delivery collaborator.
//!
//! A pusher owns everything between "here is one event" and "the store has
//! acknowledged it": internal buffering, payload batching, retry with the
//! store's sequencing token, and flush. The exporter core only ever appends
//! events and forces flushes; it never sees the wire.
//!
//! Implementations must be safe to share behind an `Arc`; callers serialize
//! append/flush sequences externally, so a pusher never observes two
//! interleaved batches.

use async_trait::async_trait;

use crate::event::LogEvent;

/// Error returned when a single event could not be appended.
///
/// Per-event and recoverable: the caller logs it, counts the event as lost,
/// and continues with the rest of the batch.
#[derive(Debug, thiserror::Error)]
#[error("failed to append log event to {group}/{stream}: {message}")]
pub struct AppendError {
    /// Destination group the append targeted.
    pub group: String,
    /// Destination stream the append targeted.
    pub stream: String,
    /// Human-readable failure description from the implementation.
    pub message: String,
}

/// Error returned when a forced flush failed.
///
/// Per-batch: this is the one delivery error that propagates to the host
/// pipeline, which owns batch-level retry.
#[derive(Debug, thiserror::Error)]
#[error("failed to flush log stream {group}/{stream}: {message}")]
pub struct FlushError {
    /// Destination group the flush targeted.
    pub group: String,
    /// Destination stream the flush targeted.
    pub stream: String,
    /// Human-readable failure description from the implementation.
    pub message: String,
}

/// Delivery collaborator for one (group, stream) destination.
#[async_trait]
pub trait Pusher: Send + Sync {
    /// Buffers one event for delivery.
    ///
    /// The pusher may upload buffered events at any point; `add_log_entry`
    /// returning `Ok` means the event was accepted for delivery, not that it
    /// has reached the store.
    async fn add_log_entry(&self, event: LogEvent) -> Result<(), AppendError>;

    /// Uploads everything buffered so far and waits for the store to
    /// acknowledge it.
    async fn force_flush(&self) -> Result<(), FlushError>;
}
