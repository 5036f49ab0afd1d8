// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Session establishment and pusher construction against the log store.
//!
//! A [`ClientFactory`] turns destination session settings into a shared
//! [`StoreClient`] handle plus the session's default retry budget. The
//! client is shared by every pusher writing to the same store and owns
//! pusher construction for its streams.

use std::sync::Arc;

use serde::Deserialize;

use crate::pusher::Pusher;

/// Retry budget applied when the session settings do not override it.
///
/// Matches the store SDK's default for transient-failure retries on a
/// single upload.
pub const DEFAULT_RETRY_COUNT: usize = 3;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Destination session settings.
///
/// Loaded by the host alongside the exporter configuration; this crate only
/// defines the shape and defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Region (or partition) of the destination store.
    pub region: String,
    /// Endpoint override for on-premise or test stores.
    pub endpoint: Option<String>,
    /// Role to assume for cross-account delivery.
    pub role_arn: Option<String>,
    /// Retry budget for a single upload. `None` means the session default.
    pub max_retries: Option<usize>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            region: String::new(),
            endpoint: None,
            role_arn: None,
            max_retries: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Identity of the binary establishing the session, forwarded to the store
/// as session metadata.
#[derive(Clone, Debug, Default)]
pub struct BuildInfo {
    /// Name of the embedding command or service.
    pub command: String,
    /// Version of the embedding command or service.
    pub version: String,
}

impl BuildInfo {
    #[must_use]
    pub fn new(command: &str, version: &str) -> Self {
        BuildInfo {
            command: command.to_string(),
            version: version.to_string(),
        }
    }
}

/// Error establishing a session with the log store.
///
/// Fatal at exporter construction: a component that cannot reach its store
/// is never started.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid session settings: {0}")]
    InvalidSettings(String),

    #[error("failed to establish session with the log store: {0}")]
    SessionEstablishment(String),
}

/// Shared handle to an established store session.
///
/// One client serves every stream in the store; pushers constructed from it
/// share its connection state. Construction is cheap and synchronous —
/// pushers defer all network work to their own append/flush cycle.
pub trait StoreClient: Send + Sync {
    /// Creates the delivery pusher for one (group, stream) destination.
    ///
    /// `retry_count` is the per-upload retry budget the pusher should apply.
    fn create_pusher(&self, group: &str, stream: &str, retry_count: usize) -> Arc<dyn Pusher>;
}

/// Result of establishing a store session: the shared client and the
/// session's default retry budget.
#[derive(Clone)]
pub struct ClientLease {
    /// Shared client handle for the established session.
    pub client: Arc<dyn StoreClient>,
    /// Default retry budget for pushers of this session.
    pub retry_count: usize,
}

/// Establishes store sessions.
///
/// Implemented by the host (or an SDK adapter crate); the exporter calls it
/// exactly once, at construction.
pub trait ClientFactory: Send + Sync {
    /// Establishes a session for the given destination group.
    ///
    /// `build_info` is forwarded to the store as session metadata (user
    /// agent); `log_group` lets implementations scope credentials to the
    /// destination group.
    fn establish(
        &self,
        settings: &SessionSettings,
        build_info: &BuildInfo,
        log_group: &str,
    ) -> Result<ClientLease, ClientError>;
}
