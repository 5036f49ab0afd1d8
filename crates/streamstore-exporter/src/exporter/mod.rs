// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Export coordinator for the sequenced log store.
//!
//! The store enforces single-writer sequencing globally: at most one
//! append/flush cycle may be in flight at any time, across all
//! destinations. The coordinator therefore runs every batch — pusher
//! resolution, translation, appends, and the flush — behind one
//! process-wide async mutex. Full serialization trades throughput for
//! sequence correctness; a per-destination lock would allow
//! cross-destination parallelism but is not what the store's token
//! handshake tolerates today.
//!
//! # Failure policy
//!
//! Best-effort within a batch: untranslatable records and failed appends
//! are logged, counted, and skipped. Only a flush failure propagates to the
//! host pipeline, whose queue/retry wrapper owns batch-level redelivery.

pub mod convert;
pub(crate) mod registry;

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use streamstore_client::client::{BuildInfo, ClientFactory, StoreClient};
use streamstore_client::pusher::FlushError;

use crate::config::Config;
use crate::error::BuildError;
use crate::exporter::registry::PusherRegistry;
use crate::model::LogsBatch;

/// What the exporter is allowed to do with the data it receives.
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    /// The exporter never mutates the batches handed to it.
    pub mutates_data: bool,
}

/// Exporter delivering log batches to one configured (group, stream)
/// destination.
///
/// Cheap to share behind an `Arc`; `push_logs` may be called from any
/// number of concurrent host workers and serializes internally.
pub struct LogsExporter {
    /// Static configuration; the destination key is fixed per instance.
    config: Arc<Config>,
    /// Identity of this exporter process, attached at construction.
    exporter_id: Uuid,
    /// Per-upload retry budget handed to new pushers.
    retry_count: usize,
    /// Shared store session; constructs pushers for its streams.
    client: Arc<dyn StoreClient>,
    /// Pusher cache, guarded by the process-wide sequencing lock. Holding
    /// the guard is what serializes append/flush cycles.
    registry: Mutex<PusherRegistry>,
    /// Shutdown coordination for collaborators that honor cancellation.
    cancel_token: CancellationToken,
}

impl fmt::Debug for LogsExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogsExporter")
            .field("config", &self.config)
            .field("exporter_id", &self.exporter_id)
            .field("retry_count", &self.retry_count)
            .field("cancel_token", &self.cancel_token)
            .finish_non_exhaustive()
    }
}

impl LogsExporter {
    /// Constructs the exporter: validates configuration and establishes the
    /// store session.
    ///
    /// Fatal on invalid configuration or session failure — a component that
    /// cannot reach its store is never started.
    pub fn new(
        config: Arc<Config>,
        client_factory: &dyn ClientFactory,
        build_info: BuildInfo,
    ) -> Result<Self, BuildError> {
        config.validate()?;

        let lease =
            client_factory.establish(&config.session, &build_info, &config.log_group_name)?;
        let retry_count = config.session.max_retries.unwrap_or(lease.retry_count);
        let exporter_id = Uuid::new_v4();
        debug!(exporter_id = %exporter_id, "LOGS | Created logs exporter");

        Ok(LogsExporter {
            config,
            exporter_id,
            retry_count,
            client: lease.client,
            registry: Mutex::new(PusherRegistry::new()),
            cancel_token: CancellationToken::new(),
        })
    }

    /// Delivers one batch to the configured destination.
    ///
    /// Holds the process-wide sequencing lock for the whole call: no two
    /// batches ever interleave their append/flush cycles, regardless of
    /// destination. Returns an error only when the final flush fails; the
    /// host retries the batch in that case.
    pub async fn push_logs(&self, batch: &LogsBatch) -> Result<(), FlushError> {
        let mut registry = self.registry.lock().await;

        let group = &self.config.log_group_name;
        let stream = &self.config.log_stream_name;
        let pusher = registry.resolve(group, stream, || {
            self.client.create_pusher(group, stream, self.retry_count)
        });

        let (events, dropped) = convert::translate_batch(batch);
        if dropped > 0 {
            warn!(dropped, "LOGS | Dropped untranslatable log records");
        }
        if events.is_empty() {
            return Ok(());
        }

        info!(num_of_events = events.len(), "LOGS | Putting log events");

        let mut failed_appends = 0_usize;
        for event in events {
            debug!(timestamp = event.timestamp, "LOGS | Adding log event");
            if let Err(e) = pusher.add_log_entry(event).await {
                error!(error = %e, "LOGS | Failed to append log event");
                failed_appends += 1;
            }
        }
        if failed_appends > 0 {
            warn!(failed_appends, "LOGS | Lost log events during append");
        }

        pusher.force_flush().await.map_err(|e| {
            error!(error = %e, "LOGS | Failed to flush log stream");
            e
        })
    }

    /// Lifecycle hook invoked by the host before the first batch. Nothing
    /// to do: the session is established at construction.
    pub async fn start(&self) -> Result<(), BuildError> {
        Ok(())
    }

    /// Flushes the configured destination's pusher and cancels the
    /// exporter's token.
    ///
    /// Only the statically configured (group, stream) is flushed — the
    /// registry is shaped for many destinations, but a single destination
    /// per exporter instance is the documented contract today. Best-effort:
    /// a flush failure is logged, not surfaced.
    pub async fn shutdown(&self) -> Result<(), FlushError> {
        self.cancel_token.cancel();

        let registry = self.registry.lock().await;
        if let Some(pusher) = registry.get(&self.config.log_group_name, &self.config.log_stream_name)
        {
            if let Err(e) = pusher.force_flush().await {
                error!(error = %e, "LOGS | Failed to flush log stream during shutdown");
            }
        }
        Ok(())
    }

    /// The exporter reads batches, never mutates them.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            mutates_data: false,
        }
    }

    /// Identity of this exporter process.
    #[must_use]
    pub fn exporter_id(&self) -> Uuid {
        self.exporter_id
    }

    /// Returns a clone of the cancellation token for shutdown coordination.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }
}
